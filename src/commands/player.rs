//! Player stats command implementation.
//!
//! Resolves the name, fans out the two independent fetches, joins, and
//! hands both payloads to the pure transformer. An identity or stats
//! failure aborts the whole query; a skin failure never does.

use crate::cli::types::{ApiKey, Username};
use crate::hypixel::{self, transform::transform};
use crate::hypixel::types::{DuelModeStats, PlayerRecord};
use crate::mojang::{self, http::fetch_skin, http::resolve_uuid};
use crate::Result;

use super::resolve_api_key;

/// Parameters for the player stats command
pub struct PlayerStatsParams {
    pub name: Username,
    pub api_key: Option<ApiKey>,
    pub as_json: bool,
    pub debug: bool,
}

/// Handle the player stats command
pub async fn handle_player_stats(params: PlayerStatsParams) -> Result<()> {
    let api_key = resolve_api_key(params.api_key)?;

    let mojang_client = mojang::http::build_client()?;
    let hypixel_client = hypixel::http::build_client()?;

    let identity = resolve_uuid(&mojang_client, &params.name).await?;
    if params.debug {
        println!("Resolved {} -> {}", identity.name, identity.id);
    }

    // The two fetches are independent; join before the transform since it
    // needs both payloads.
    let (player, skin) = tokio::join!(
        hypixel::http::get_player(&hypixel_client, &api_key, &identity.id),
        fetch_skin(&mojang_client, &identity.id),
    );
    let player = player?;

    let record = transform(&player, &identity.id, &skin);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }

    Ok(())
}

fn print_record(record: &PlayerRecord) {
    println!("UUID:        {}", record.uuid);
    println!("First login: {}", record.first_login);
    println!("Last login:  {}", record.last_login);

    println!("\nBasic");
    println!("  Name:  {}", record.basic.display_name);
    println!("  Level: {:.2}", record.basic.level);
    println!("  Karma: {}", record.basic.karma);
    println!("  Cape:  {}", if record.basic.has_cape { "yes" } else { "no" });

    println!("\nSocial");
    println!("  Friends: {}", record.social.friends);
    println!("  Guild:   {}", record.social.guild);

    let bedwars = &record.games.bedwars;
    println!("\nBedwars");
    println!(
        "  Level {} | Final kills {} | Final deaths {} | KD {} | Wins {}",
        bedwars.level, bedwars.final_kills, bedwars.final_deaths, bedwars.final_kd, bedwars.wins
    );

    let skywars = &record.games.skywars;
    println!("\nSkyWars");
    println!(
        "  Level {} | Kills {} | Deaths {} | KD {}",
        skywars.level, skywars.kills, skywars.deaths, skywars.kd
    );

    println!("\nDuels");
    print_duel_line("Overall", &record.games.duels.overall);
    for entry in &record.games.duels.modes {
        print_duel_line(entry.mode, &entry.stats);
    }
}

fn print_duel_line(mode: &str, stats: &DuelModeStats) {
    print!(
        "  {mode:<14} wins {:>6} | kills {:>6} | deaths {:>6} | KD {:>7} | streak {:>4} (best {:>4})",
        stats.wins,
        stats.kills,
        stats.deaths,
        stats.kd.to_string(),
        stats.current_winstreak,
        stats.best_winstreak,
    );
    if let (Some(best), Some(average)) = (&stats.best_time, &stats.average_time) {
        print!(" | best {best} | avg {average}");
    }
    println!();
}
