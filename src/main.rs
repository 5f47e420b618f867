//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hypixel_stats::{
    cli::{Commands, GetCmd, HypixelStats},
    commands::{
        player::{handle_player_stats, PlayerStatsParams},
        skin::handle_skin,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = HypixelStats::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Player {
                name,
                api_key,
                json,
                debug,
            } => {
                handle_player_stats(PlayerStatsParams {
                    name,
                    api_key,
                    as_json: json,
                    debug,
                })
                .await?
            }

            GetCmd::Skin { name, json } => handle_skin(name, json).await?,
        },
    }

    Ok(())
}
