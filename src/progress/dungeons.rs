//! Secret realms: fixed wave gauntlets resolved through the battle engine.

use crate::character::realm::Realm;
use crate::combat::logic::resolve_battle;
use crate::combat::types::{generate_boss, generate_monster, BattleOutcome};
use crate::core::constants::MAX_LEVEL;
use crate::core::game_logic::{add_experience, battle_exp_reward};
use crate::core::game_state::Character;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonDef {
    pub id: &'static str,
    pub name: &'static str,
    pub required_realm: Realm,
    /// Total waves; the final wave is the realm's elder boss.
    pub waves: u32,
    pub first_clear_exp: u64,
    pub first_clear_gold: u64,
}

pub fn all_dungeons() -> Vec<DungeonDef> {
    vec![
        DungeonDef {
            id: "whispering_cave",
            name: "Whispering Cave",
            required_realm: Realm::QiRefining,
            waves: 3,
            first_clear_exp: 400,
            first_clear_gold: 200,
        },
        DungeonDef {
            id: "sword_tomb",
            name: "Tomb of Ten Thousand Swords",
            required_realm: Realm::Foundation,
            waves: 4,
            first_clear_exp: 2000,
            first_clear_gold: 900,
        },
        DungeonDef {
            id: "flame_abyss",
            name: "Flame Abyss",
            required_realm: Realm::CoreFormation,
            waves: 5,
            first_clear_exp: 8000,
            first_clear_gold: 3000,
        },
        DungeonDef {
            id: "starfall_palace",
            name: "Starfall Palace",
            required_realm: Realm::NascentSoul,
            waves: 6,
            first_clear_exp: 30000,
            first_clear_gold: 10000,
        },
    ]
}

pub fn dungeon_by_id(id: &str) -> Option<DungeonDef> {
    all_dungeons().into_iter().find(|d| d.id == id)
}

/// Persisted clear counts per dungeon id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonProgress {
    pub clears: BTreeMap<String, u32>,
}

impl DungeonProgress {
    pub fn clear_count(&self, dungeon_id: &str) -> u32 {
        self.clears.get(dungeon_id).copied().unwrap_or(0)
    }

    fn record_clear(&mut self, dungeon_id: &str) -> u32 {
        let count = self.clears.entry(dungeon_id.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

/// Result of one dungeon run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonReport {
    pub entered: bool,
    pub cleared: bool,
    pub waves_cleared: u32,
    pub exp_gained: u64,
    pub gold_gained: u64,
    pub message: String,
}

impl DungeonReport {
    fn refused(message: String) -> Self {
        Self {
            entered: false,
            cleared: false,
            waves_cleared: 0,
            exp_gained: 0,
            gold_gained: 0,
            message,
        }
    }
}

/// Runs the gauntlet wave by wave with no healing between waves. Victory
/// rewards accrue per wave; defeat forfeits nothing already earned but ends
/// the run with a full recovery. First clears pay a one-time bonus.
pub fn run_dungeon(
    character: &mut Character,
    progress: &mut DungeonProgress,
    dungeon_id: &str,
    rng: &mut impl Rng,
) -> DungeonReport {
    let def = match dungeon_by_id(dungeon_id) {
        Some(def) => def,
        None => return DungeonReport::refused(format!("Unknown secret realm: {}", dungeon_id)),
    };
    if character.realm < def.required_realm {
        return DungeonReport::refused(format!(
            "{} requires the {} realm",
            def.name,
            def.required_realm.name()
        ));
    }

    let mut waves_cleared = 0;
    let mut exp_gained = 0u64;
    let mut gold_gained = 0u64;

    for wave in 1..=def.waves {
        let monster = if wave == def.waves {
            generate_boss(def.required_realm, rng)
        } else {
            let sub_level = (wave * 2).min(MAX_LEVEL);
            generate_monster(def.required_realm, sub_level, rng)
        };

        let report = resolve_battle(character, &monster, false);
        character.stats.hp = report.remaining_player_hp;
        if report.outcome == BattleOutcome::Lose {
            character.full_restore();
            let exp = battle_exp_reward(exp_gained, character.samsara.cycles);
            add_experience(character, exp);
            character.gold += gold_gained;
            return DungeonReport {
                entered: true,
                cleared: false,
                waves_cleared,
                exp_gained: exp,
                gold_gained,
                message: format!("Driven out of {} at wave {}", def.name, wave),
            };
        }

        waves_cleared += 1;
        exp_gained += monster.exp_reward;
        gold_gained += monster.gold_reward;
    }

    if progress.record_clear(def.id) == 1 {
        exp_gained += def.first_clear_exp;
        gold_gained += def.first_clear_gold;
    }
    let exp = battle_exp_reward(exp_gained, character.samsara.cycles);
    add_experience(character, exp);
    character.gold += gold_gained;
    DungeonReport {
        entered: true,
        cleared: true,
        waves_cleared,
        exp_gained: exp,
        gold_gained,
        message: format!("{} cleared", def.name),
    }
}
