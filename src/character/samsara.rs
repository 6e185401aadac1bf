//! Samsara rebirth: a full reset-with-bonus cycle gated by lifetime
//! experience. Orthogonal to normal leveling and never triggered
//! automatically.

use crate::character::realm::Realm;
use crate::character::stats::StatBonuses;
use crate::core::constants::*;
use crate::core::game_logic::exp_for_next_level;
use crate::core::game_state::{ActionResult, Character};
use serde::{Deserialize, Serialize};

/// Meta-progression record carried on the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamsaraRecord {
    pub cycles: u32,
    /// Lifetime experience required before the next cycle may be performed.
    pub next_threshold: u64,
}

impl Default for SamsaraRecord {
    fn default() -> Self {
        Self {
            cycles: 0,
            next_threshold: SAMSARA_BASE_THRESHOLD,
        }
    }
}

/// Lifetime-exp threshold for completing the given number of cycles.
/// Doubles each cycle, so later rebirths take progressively longer.
pub fn threshold_for_cycle(cycles_completed: u32) -> u64 {
    SAMSARA_BASE_THRESHOLD.saturating_mul(1u64 << cycles_completed.min(40))
}

/// Flat stat bonuses granted by completed cycles. Folded into every
/// stat recomputation.
pub fn flat_bonuses(cycles: u32) -> StatBonuses {
    StatBonuses {
        hp: SAMSARA_HP_PER_CYCLE * cycles,
        mp: SAMSARA_MP_PER_CYCLE * cycles,
        atk: SAMSARA_ATK_PER_CYCLE * cycles,
        def: SAMSARA_DEF_PER_CYCLE * cycles,
    }
}

/// Experience-rate multiplier from completed cycles, applied where battle
/// rewards are granted (not inside the experience ledger itself).
pub fn exp_rate_multiplier(cycles: u32) -> f64 {
    1.0 + SAMSARA_EXP_RATE_PER_CYCLE * cycles as f64
}

/// Whether the character has accumulated enough lifetime experience to
/// perform the next cycle.
pub fn can_samsara(character: &Character) -> bool {
    character.total_exp >= character.samsara.next_threshold
}

/// Performs a samsara rebirth: realm back to Qi Refining level 1, exp and
/// gold zeroed, cycle counter incremented. Lifetime experience, pills,
/// equipment, and companions are kept. Explicit user action only.
pub fn perform_samsara(character: &mut Character) -> ActionResult {
    if !can_samsara(character) {
        return ActionResult::fail(format!(
            "Rebirth requires {} lifetime experience (have {})",
            character.samsara.next_threshold, character.total_exp
        ));
    }

    character.realm = Realm::QiRefining;
    character.level = 1;
    character.exp = 0;
    character.exp_to_next = exp_for_next_level(character.realm, character.level);
    character.gold = 0;

    character.samsara.cycles += 1;
    character.samsara.next_threshold = threshold_for_cycle(character.samsara.cycles);

    character.refresh_stats();
    character.full_restore();

    ActionResult::ok(format!(
        "Samsara cycle {} begins anew",
        character.samsara.cycles
    ))
}
