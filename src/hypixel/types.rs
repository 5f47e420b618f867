//! Hypixel API envelope and the normalized player record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::{Result, StatsError};


/// Top-level envelope of `GET /player`.
///
/// The payload under `player` stays an opaque [`Value`]; only the key paths
/// the transformer documents are ever read from it.
#[derive(Debug, Deserialize)]
pub struct PlayerResponse {
    pub success: bool,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub player: Option<Value>,
}

impl PlayerResponse {
    /// Unwrap the envelope into the raw player payload.
    ///
    /// A `success == false` response becomes [`StatsError::Api`] carrying
    /// the service-provided cause. A successful response with a `null`
    /// player (an account that never logged in) yields an empty object so
    /// downstream transformation stays total.
    pub fn into_player(self) -> Result<Value> {
        if !self.success {
            return Err(StatsError::Api {
                cause: self
                    .cause
                    .unwrap_or_else(|| "unknown API error".to_string()),
            });
        }
        Ok(self.player.unwrap_or_else(|| Value::Object(Map::new())))
    }
}

/// Kills divided by deaths, or the raw kill count for undefeated players.
///
/// Serialized untagged so a deaths-free record keeps its kill count as an
/// integer while everyone else gets a two-decimal float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KillDeathRatio {
    /// No deaths recorded; the kill count is displayed unchanged.
    Exact(u64),
    /// kills / deaths, rounded to two decimals.
    Rounded(f64),
}

impl fmt::Display for KillDeathRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KillDeathRatio::Exact(kills) => write!(f, "{kills}"),
            KillDeathRatio::Rounded(ratio) => write!(f, "{ratio:.2}"),
        }
    }
}

/// The fully-transformed, display-ready record handed to the presentation
/// layer. Every field is populated; missing raw data shows up as zeros or
/// "unknown"/"none" placeholders, never as an absent field.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecord {
    pub uuid: String,
    pub first_login: String,
    pub last_login: String,
    pub basic: BasicInfo,
    pub social: SocialInfo,
    pub games: GameStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BasicInfo {
    pub display_name: String,
    /// Network level computed from `networkExp`, two decimals.
    pub level: f64,
    pub karma: u64,
    pub has_cape: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialInfo {
    pub friends: u64,
    /// `"<name> (level: <n>)"` or `"none"` when the player has no guild.
    pub guild: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameStats {
    pub bedwars: BedwarsStats,
    pub duels: DuelsStats,
    pub skywars: SkywarsStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BedwarsStats {
    pub level: u64,
    pub final_kills: u64,
    pub final_deaths: u64,
    pub final_kd: KillDeathRatio,
    pub wins: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkywarsStats {
    pub level: u64,
    pub kills: u64,
    pub deaths: u64,
    pub kd: KillDeathRatio,
}

#[derive(Debug, Clone, Serialize)]
pub struct DuelsStats {
    pub overall: DuelModeStats,
    /// One entry per sub-mode, in the fixed table order.
    pub modes: Vec<DuelModeEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DuelModeEntry {
    pub mode: &'static str,
    #[serde(flatten)]
    pub stats: DuelModeStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct DuelModeStats {
    pub wins: u64,
    pub kills: u64,
    pub deaths: u64,
    pub kd: KillDeathRatio,
    pub current_winstreak: u64,
    pub best_winstreak: u64,
    /// Only present for the timed parkour mode, as `"12.35 seconds"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_time: Option<String>,
}
