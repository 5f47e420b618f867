//! Hypixel Player Stats CLI Library
//!
//! A Rust library for querying the Hypixel and Mojang APIs and merging the
//! results into a single display-ready player record.
//!
//! ## Features
//!
//! - **Identity Resolution**: Resolve a player name to its UUID via Mojang
//! - **Stats Retrieval**: Fetch the raw player payload from the Hypixel API
//! - **Texture Lookup**: Decode skin/cape URLs from the Mojang session server
//! - **Stats Transformation**: Pure reshaping of the raw payload into a
//!   normalized record (network level, KD ratios, guild summary, per-mode
//!   Duels/Bedwars/SkyWars breakdowns)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hypixel_stats::{cli::types::Username, commands::player::*};
//!
//! # async fn example() -> hypixel_stats::Result<()> {
//! let params = PlayerStatsParams {
//!     name: "Technoblade".parse::<Username>()?,
//!     api_key: None, // falls back to HYPIXEL_API_KEY
//!     as_json: true,
//!     debug: false,
//! };
//!
//! handle_player_stats(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Hypixel API key to avoid passing it in every command:
//! ```bash
//! export HYPIXEL_API_KEY=xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod hypixel;
pub mod mojang;

// Re-export commonly used types
pub use cli::types::{ApiKey, PlayerUuid, Username};
pub use error::{Result, StatsError};
pub use hypixel::types::{KillDeathRatio, PlayerRecord};
pub use mojang::types::{PlayerIdentity, SkinData};

pub const API_KEY_ENV_VAR: &str = "HYPIXEL_API_KEY";
