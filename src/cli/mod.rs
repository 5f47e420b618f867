//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{ApiKey, Username};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Get a player's full statistics record.
    ///
    /// Resolves the name to a UUID via Mojang, fetches the Hypixel player
    /// payload and the Mojang textures concurrently, and prints the merged
    /// record.
    Player {
        /// Player name to look up.
        name: Username,

        /// Hypixel API key (or set `HYPIXEL_API_KEY` env var).
        #[clap(long, short = 'k')]
        api_key: Option<ApiKey>,

        /// Output the record as pretty JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print the resolved UUID before fetching.
        #[clap(long)]
        debug: bool,
    },

    /// Print a player's skin and cape texture URLs.
    Skin {
        /// Player name to look up.
        name: Username,

        /// Output as pretty JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "hypixel-stats", about = "Hypixel player statistics CLI")]
pub struct HypixelStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Hypixel and Mojang APIs
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
