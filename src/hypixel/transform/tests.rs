//! Unit tests for the stats transformation logic

use super::*;
use serde_json::json;

#[cfg(test)]
mod level_tests {
    use super::*;

    #[test]
    fn test_level_at_zero_experience_is_one() {
        // sqrt(15312.5) == 175/sqrt(2), so the closed form collapses to 1.0
        assert_eq!(network_level(0.0), 1.0);
    }

    #[test]
    fn test_level_low_experience() {
        assert_eq!(network_level(10_000.0), 2.0);
        assert_eq!(network_level(1_234_567.0), 29.12);
    }

    #[test]
    fn test_level_at_breakpoint_is_200() {
        assert_eq!(network_level(14_609_081.0), 200.0);
    }

    #[test]
    fn test_level_linear_branch_above_breakpoint() {
        // One full level per 96,000 experience past the breakpoint
        assert_eq!(network_level(14_609_081.0 + 96_000.0), 201.0);
        assert_eq!(network_level(14_609_081.0 + 48_000.0), 200.5);
    }

    #[test]
    fn test_level_curve_steps_at_breakpoint() {
        // The sqrt branch tops out well below 200 just before the
        // breakpoint; the linear branch restarts at 200 exactly.
        assert_eq!(network_level(14_609_080.0), 105.66);
        assert_eq!(network_level(14_609_081.0), 200.0);
    }

    #[test]
    fn test_level_monotone_within_each_branch() {
        let mut prev = network_level(0.0);
        for exp in (100_000..14_600_000).step_by(500_000) {
            let level = network_level(exp as f64);
            assert!(level >= prev, "sqrt branch decreased at exp {exp}");
            prev = level;
        }

        let mut prev = network_level(14_609_081.0);
        for step in 1..20 {
            let level = network_level(14_609_081.0 + (step * 100_000) as f64);
            assert!(level > prev, "linear branch decreased at step {step}");
            prev = level;
        }
    }
}

#[cfg(test)]
mod ratio_tests {
    use super::*;

    #[test]
    fn test_ratio_rounds_to_two_decimals() {
        assert_eq!(kill_death_ratio(10, 4), KillDeathRatio::Rounded(2.5));
        assert_eq!(kill_death_ratio(7, 3), KillDeathRatio::Rounded(2.33));
        assert_eq!(kill_death_ratio(0, 5), KillDeathRatio::Rounded(0.0));
    }

    #[test]
    fn test_ratio_zero_deaths_keeps_kill_count() {
        assert_eq!(kill_death_ratio(12, 0), KillDeathRatio::Exact(12));
        assert_eq!(kill_death_ratio(0, 0), KillDeathRatio::Exact(0));
    }

    #[test]
    fn test_ratio_serializes_integer_for_zero_deaths() {
        let undefeated = serde_json::to_value(kill_death_ratio(12, 0)).unwrap();
        assert_eq!(undefeated, json!(12));

        let rounded = serde_json::to_value(kill_death_ratio(7, 3)).unwrap();
        assert_eq!(rounded, json!(2.33));
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(kill_death_ratio(12, 0).to_string(), "12");
        assert_eq!(kill_death_ratio(10, 4).to_string(), "2.50");
    }
}

#[cfg(test)]
mod formatting_tests {
    use super::*;

    #[test]
    fn test_format_timestamp_absent_is_unknown() {
        assert_eq!(format_timestamp(None), "unknown");
    }

    #[test]
    fn test_format_timestamp_zero_is_unknown() {
        assert_eq!(format_timestamp(Some(0)), "unknown");
    }

    #[test]
    fn test_format_timestamp_shape() {
        // Local-time rendering; assert the shape rather than a fixed zone
        let formatted = format_timestamp(Some(1_650_000_000_000));
        assert_eq!(formatted.len(), 19);
        let bytes = formatted.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
        assert!(formatted.starts_with("2022-04-1"));
    }

    #[test]
    fn test_guild_summary_missing_guild() {
        assert_eq!(guild_summary(&json!({})), "none");
    }

    #[test]
    fn test_guild_summary_with_guild() {
        let player = json!({ "guild": { "name": "Foo", "guildLevel": 5 } });
        assert_eq!(guild_summary(&player), "Foo (level: 5)");
    }

    #[test]
    fn test_guild_summary_defaults() {
        // Present but empty guild object: name falls back, level defaults
        let player = json!({ "guild": {} });
        assert_eq!(guild_summary(&player), "unknown (level: 0)");
    }
}

#[cfg(test)]
mod transform_tests {
    use super::*;
    use crate::mojang::types::SkinData;

    fn uuid() -> PlayerUuid {
        PlayerUuid::new("b876ec32e396476ba1158438d83c67d4")
    }

    #[test]
    fn test_transform_is_total_on_empty_payload() {
        let record = transform(&json!({}), &uuid(), &SkinData::default());

        assert_eq!(record.uuid, "b876ec32e396476ba1158438d83c67d4");
        assert_eq!(record.first_login, "unknown");
        assert_eq!(record.last_login, "unknown");
        assert_eq!(record.basic.display_name, "unknown");
        assert_eq!(record.basic.level, 1.0);
        assert_eq!(record.basic.karma, 0);
        assert!(!record.basic.has_cape);
        assert_eq!(record.social.friends, 0);
        assert_eq!(record.social.guild, "none");

        assert_eq!(record.games.bedwars.wins, 0);
        assert_eq!(record.games.bedwars.final_kd, KillDeathRatio::Exact(0));
        assert_eq!(record.games.skywars.kd, KillDeathRatio::Exact(0));

        assert_eq!(record.games.duels.overall.wins, 0);
        assert_eq!(record.games.duels.modes.len(), 12);
        for entry in &record.games.duels.modes {
            assert_eq!(entry.stats.wins, 0);
            assert_eq!(entry.stats.kd, KillDeathRatio::Exact(0));
        }
    }

    #[test]
    fn test_transform_empty_payload_parkour_times_default() {
        let record = transform(&json!({}), &uuid(), &SkinData::default());

        let parkour = record
            .games
            .duels
            .modes
            .iter()
            .find(|entry| entry.mode == "Parkour Eight")
            .unwrap();
        assert_eq!(parkour.stats.best_time.as_deref(), Some("0.00 seconds"));
        assert_eq!(parkour.stats.average_time.as_deref(), Some("0.00 seconds"));
    }

    #[test]
    fn test_transform_only_parkour_carries_times() {
        let record = transform(&json!({}), &uuid(), &SkinData::default());

        for entry in &record.games.duels.modes {
            if entry.mode == "Parkour Eight" {
                continue;
            }
            assert!(entry.stats.best_time.is_none(), "{} has a time", entry.mode);
            assert!(entry.stats.average_time.is_none());
        }
    }

    #[test]
    fn test_transform_parkour_time_rounding() {
        let player = json!({
            "stats": { "Duels": { "parkour_eight_duel_best_time": 12.345 } }
        });
        let record = transform(&player, &uuid(), &SkinData::default());

        let parkour = record
            .games
            .duels
            .modes
            .iter()
            .find(|entry| entry.mode == "Parkour Eight")
            .unwrap();
        assert_eq!(parkour.stats.best_time.as_deref(), Some("12.35 seconds"));
        assert_eq!(parkour.stats.average_time.as_deref(), Some("0.00 seconds"));
    }

    #[test]
    fn test_transform_duel_modes_keep_table_order() {
        let record = transform(&json!({}), &uuid(), &SkinData::default());

        let names: Vec<&str> = record
            .games
            .duels
            .modes
            .iter()
            .map(|entry| entry.mode)
            .collect();
        assert_eq!(
            names,
            vec![
                "Bridge",
                "UHC",
                "SkyWars",
                "Classic",
                "OP",
                "Parkour Eight",
                "Mega Walls",
                "Bow",
                "Blitz",
                "Sumo",
                "Boxing",
                "SkyWars 2v2",
            ]
        );
    }

    #[test]
    fn test_transform_full_payload() {
        let player = json!({
            "displayname": "Technoblade",
            "networkExp": 10_000,
            "karma": 12_345,
            "lastLogin": 1_650_000_000_000_u64,
            "friends": [{"a": 1}, {"b": 2}, {"c": 3}],
            "guild": { "name": "Pack", "guildLevel": 7 },
            "stats": {
                "Bedwars": {
                    "level": 120,
                    "final_kills_bedwars": 900,
                    "final_deaths_bedwars": 300,
                    "wins_bedwars": 250
                },
                "SkyWars": {
                    "level": 12,
                    "kills": 444,
                    "deaths": 0
                },
                "Duels": {
                    "wins": 100,
                    "kills": 75,
                    "deaths": 30,
                    "current_winstreak": 4,
                    "best_overall_winstreak": 21,
                    "bridge_duel_wins": 50,
                    "bridge_duel_kills": 40,
                    "bridge_duel_deaths": 16,
                    "bridge_duel_winstreak": 2,
                    "bridge_duel_best_winstreak": 9
                }
            }
        });
        let skin = SkinData {
            skin: Some("http://textures.minecraft.net/texture/skin123".to_string()),
            cape: Some("http://textures.minecraft.net/texture/cape456".to_string()),
        };

        let record = transform(&player, &uuid(), &skin);

        assert_eq!(record.basic.display_name, "Technoblade");
        assert_eq!(record.basic.level, 2.0);
        assert_eq!(record.basic.karma, 12_345);
        assert!(record.basic.has_cape);
        assert_ne!(record.last_login, "unknown");
        assert_eq!(record.first_login, "unknown");
        assert_eq!(record.social.friends, 3);
        assert_eq!(record.social.guild, "Pack (level: 7)");

        let bedwars = &record.games.bedwars;
        assert_eq!(bedwars.level, 120);
        assert_eq!(bedwars.final_kills, 900);
        assert_eq!(bedwars.final_deaths, 300);
        assert_eq!(bedwars.final_kd, KillDeathRatio::Rounded(3.0));
        assert_eq!(bedwars.wins, 250);

        let skywars = &record.games.skywars;
        assert_eq!(skywars.kills, 444);
        assert_eq!(skywars.kd, KillDeathRatio::Exact(444));

        let duels = &record.games.duels;
        assert_eq!(duels.overall.wins, 100);
        assert_eq!(duels.overall.kd, KillDeathRatio::Rounded(2.5));
        assert_eq!(duels.overall.best_winstreak, 21);
        assert!(duels.overall.best_time.is_none());

        let bridge = duels.modes.iter().find(|e| e.mode == "Bridge").unwrap();
        assert_eq!(bridge.stats.wins, 50);
        assert_eq!(bridge.stats.kd, KillDeathRatio::Rounded(2.5));
        assert_eq!(bridge.stats.current_winstreak, 2);
        assert_eq!(bridge.stats.best_winstreak, 9);

        // Modes absent from the payload stay fully zeroed
        let sumo = duels.modes.iter().find(|e| e.mode == "Sumo").unwrap();
        assert_eq!(sumo.stats.wins, 0);
        assert_eq!(sumo.stats.kd, KillDeathRatio::Exact(0));
    }

    #[test]
    fn test_transform_cape_flag_without_skin() {
        let skin = SkinData {
            skin: None,
            cape: Some("http://textures.minecraft.net/texture/cape456".to_string()),
        };
        let record = transform(&json!({}), &uuid(), &skin);
        assert!(record.basic.has_cape);
    }

    #[test]
    fn test_transform_record_serializes_without_optional_noise() {
        let record = transform(&json!({}), &uuid(), &SkinData::default());
        let value = serde_json::to_value(&record).unwrap();

        // Non-timed modes omit the timing fields entirely
        let bridge = &value["games"]["duels"]["modes"][0];
        assert_eq!(bridge["mode"], "Bridge");
        assert!(bridge.get("best_time").is_none());

        let parkour = &value["games"]["duels"]["modes"][5];
        assert_eq!(parkour["best_time"], "0.00 seconds");
    }
}
