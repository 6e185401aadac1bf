use crate::character::realm::Realm;
use serde::{Deserialize, Serialize};

/// Lifetime counters. Monotonic: nothing here ever decreases, not even
/// across samsara cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub battles_won: u64,
    pub battles_lost: u64,
    pub monsters_slain: u64,
    pub bosses_slain: u64,
    pub gold_earned: u64,
    pub items_looted: u64,
    pub tribulations_attempted: u64,
    pub tribulations_succeeded: u64,
    pub samsara_cycles: u64,
    pub dungeons_cleared: u64,
    #[serde(default)]
    pub deepest_realm: Realm,
    pub highest_level: u32,
}

impl LifetimeStats {
    pub fn record_battle_won(&mut self, was_boss: bool, gold: u64, items: u64) {
        self.battles_won += 1;
        self.monsters_slain += 1;
        if was_boss {
            self.bosses_slain += 1;
        }
        self.gold_earned += gold;
        self.items_looted += items;
    }

    pub fn record_battle_lost(&mut self) {
        self.battles_lost += 1;
    }

    pub fn record_tribulation(&mut self, success: bool) {
        self.tribulations_attempted += 1;
        if success {
            self.tribulations_succeeded += 1;
        }
    }

    pub fn record_progress(&mut self, realm: Realm, level: u32) {
        if realm > self.deepest_realm {
            self.deepest_realm = realm;
        }
        self.highest_level = self.highest_level.max(level);
    }
}
