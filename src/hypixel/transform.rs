//! Pure transformation of the raw Hypixel payload into a [`PlayerRecord`].
//!
//! Everything here is deterministic, does no I/O, and cannot fail: numeric
//! fields missing from the payload read as 0 and string fields fall back to
//! "unknown"/"none" placeholders.

use chrono::{Local, TimeZone};
use serde_json::Value;

use crate::cli::types::PlayerUuid;
use crate::hypixel::types::{
    BasicInfo, BedwarsStats, DuelModeEntry, DuelModeStats, DuelsStats, GameStats, KillDeathRatio,
    PlayerRecord, SkywarsStats, SocialInfo,
};
use crate::mojang::types::SkinData;

#[cfg(test)]
mod tests;

/// Experience at which the level curve switches to the linear branch.
const LEVEL_EXP_BREAKPOINT: f64 = 14_609_081.0;

/// Experience per level on the linear branch.
const LEVEL_EXP_PER_LEVEL: f64 = 96_000.0;

/// One Duels sub-mode: the key prefix used in the raw payload and the name
/// shown in the record. `timed` marks the parkour mode that also tracks
/// best/average completion times.
pub struct DuelMode {
    pub prefix: &'static str,
    pub name: &'static str,
    pub timed: bool,
}

/// The twelve Duels sub-modes, in display order.
pub const DUEL_MODES: [DuelMode; 12] = [
    DuelMode { prefix: "bridge_duel", name: "Bridge", timed: false },
    DuelMode { prefix: "uhc_duel", name: "UHC", timed: false },
    DuelMode { prefix: "sw_duel", name: "SkyWars", timed: false },
    DuelMode { prefix: "classic_duel", name: "Classic", timed: false },
    DuelMode { prefix: "op_duel", name: "OP", timed: false },
    DuelMode { prefix: "parkour_eight_duel", name: "Parkour Eight", timed: true },
    DuelMode { prefix: "mw_duel", name: "Mega Walls", timed: false },
    DuelMode { prefix: "bow_duel", name: "Bow", timed: false },
    DuelMode { prefix: "blitz_duel", name: "Blitz", timed: false },
    DuelMode { prefix: "sumo_duel", name: "Sumo", timed: false },
    DuelMode { prefix: "boxing_duel", name: "Boxing", timed: false },
    DuelMode { prefix: "skywars_two_v_two", name: "SkyWars 2v2", timed: false },
];

/// Combine the raw Hypixel payload and the texture lookup into the
/// normalized record.
pub fn transform(player: &Value, uuid: &PlayerUuid, skin: &SkinData) -> PlayerRecord {
    PlayerRecord {
        uuid: uuid.to_string(),
        first_login: format_timestamp(player.get("firstLogin").and_then(Value::as_i64)),
        last_login: format_timestamp(player.get("lastLogin").and_then(Value::as_i64)),
        basic: BasicInfo {
            display_name: read_str(player, "displayname", "unknown"),
            level: network_level(read_f64(player, "networkExp")),
            karma: read_u64(player, "karma"),
            has_cape: skin.cape.is_some(),
        },
        social: SocialInfo {
            friends: player
                .get("friends")
                .and_then(Value::as_array)
                .map_or(0, |friends| friends.len() as u64),
            guild: guild_summary(player),
        },
        games: GameStats {
            bedwars: bedwars_stats(game_section(player, "Bedwars")),
            duels: duels_stats(game_section(player, "Duels")),
            skywars: skywars_stats(game_section(player, "SkyWars")),
        },
    }
}

/// Network level from experience, rounded to two decimals.
///
/// Past the breakpoint the curve is linear in experience, restarting at
/// level 200; below it the level is the inverse of the quadratic experience
/// curve. The two branches do not meet at the breakpoint.
pub fn network_level(exp: f64) -> f64 {
    let level = if exp >= LEVEL_EXP_BREAKPOINT {
        200.0 + (exp - LEVEL_EXP_BREAKPOINT) / LEVEL_EXP_PER_LEVEL
    } else {
        ((exp + 15_312.5).sqrt() - 125.0 / std::f64::consts::SQRT_2)
            / (25.0 * std::f64::consts::SQRT_2)
    };
    round2(level)
}

/// Kills/deaths rounded to two decimals, or the kill count itself when
/// there are no deaths.
pub fn kill_death_ratio(kills: u64, deaths: u64) -> KillDeathRatio {
    if deaths > 0 {
        KillDeathRatio::Rounded(round2(kills as f64 / deaths as f64))
    } else {
        KillDeathRatio::Exact(kills)
    }
}

/// Millisecond epoch timestamp to local `"YYYY-MM-DD HH:MM:SS"`, or
/// `"unknown"` when absent (a zero timestamp counts as absent).
pub fn format_timestamp(millis: Option<i64>) -> String {
    match millis {
        Some(ms) if ms > 0 => match Local.timestamp_millis_opt(ms).single() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "unknown".to_string(),
        },
        _ => "unknown".to_string(),
    }
}

/// `"<name> (level: <n>)"`, or `"none"` when the payload has no guild key.
pub fn guild_summary(player: &Value) -> String {
    match player.get("guild") {
        Some(guild) => {
            let name = guild.get("name").and_then(Value::as_str).unwrap_or("unknown");
            let level = read_u64(guild, "guildLevel");
            format!("{name} (level: {level})")
        }
        None => "none".to_string(),
    }
}

fn bedwars_stats(stats: &Value) -> BedwarsStats {
    let final_kills = read_u64(stats, "final_kills_bedwars");
    let final_deaths = read_u64(stats, "final_deaths_bedwars");
    BedwarsStats {
        level: read_u64(stats, "level"),
        final_kills,
        final_deaths,
        final_kd: kill_death_ratio(final_kills, final_deaths),
        wins: read_u64(stats, "wins_bedwars"),
    }
}

fn skywars_stats(stats: &Value) -> SkywarsStats {
    let kills = read_u64(stats, "kills");
    let deaths = read_u64(stats, "deaths");
    SkywarsStats {
        level: read_u64(stats, "level"),
        kills,
        deaths,
        kd: kill_death_ratio(kills, deaths),
    }
}

fn duels_stats(stats: &Value) -> DuelsStats {
    let overall_kills = read_u64(stats, "kills");
    let overall_deaths = read_u64(stats, "deaths");
    let overall = DuelModeStats {
        wins: read_u64(stats, "wins"),
        kills: overall_kills,
        deaths: overall_deaths,
        kd: kill_death_ratio(overall_kills, overall_deaths),
        current_winstreak: read_u64(stats, "current_winstreak"),
        best_winstreak: read_u64(stats, "best_overall_winstreak"),
        best_time: None,
        average_time: None,
    };

    let modes = DUEL_MODES
        .iter()
        .map(|mode| {
            let key = |suffix: &str| format!("{}_{suffix}", mode.prefix);
            let kills = read_u64(stats, &key("kills"));
            let deaths = read_u64(stats, &key("deaths"));
            DuelModeEntry {
                mode: mode.name,
                stats: DuelModeStats {
                    wins: read_u64(stats, &key("wins")),
                    kills,
                    deaths,
                    kd: kill_death_ratio(kills, deaths),
                    current_winstreak: read_u64(stats, &key("winstreak")),
                    best_winstreak: read_u64(stats, &key("best_winstreak")),
                    // Timing fields default to 0 like everything else, so an
                    // absent value still renders as "0.00 seconds".
                    best_time: mode
                        .timed
                        .then(|| format_seconds(read_f64(stats, &key("best_time")))),
                    average_time: mode
                        .timed
                        .then(|| format_seconds(read_f64(stats, &key("average_time")))),
                },
            }
        })
        .collect();

    DuelsStats { overall, modes }
}

/// The per-game stats sub-object, or `Null` so the field accessors below
/// see every key as absent.
fn game_section<'a>(player: &'a Value, game: &str) -> &'a Value {
    &player["stats"][game]
}

fn read_u64(payload: &Value, key: &str) -> u64 {
    payload.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn read_f64(payload: &Value, key: &str) -> f64 {
    payload.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn read_str(payload: &Value, key: &str, default: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn format_seconds(value: f64) -> String {
    format!("{value:.2} seconds")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
