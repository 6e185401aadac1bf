//! Heavenly tribulation: the probabilistic realm-breakthrough attempt.

use super::constants::*;
use super::game_logic::exp_for_next_level;
use super::game_state::Character;
use crate::character::realm::Realm;
use rand::Rng;

/// Outcome of a tribulation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum TribulationResult {
    /// Preconditions not met; nothing was mutated or consumed.
    Ineligible { reason: String },
    Success { new_realm: Realm, gold_awarded: u64 },
    Failure { pills_remaining: u32 },
}

/// Success probability for the character's next attempt: per-realm base
/// rate plus 10% per pill held, with the pill bonus capped at 50% no
/// matter how many are stockpiled. `None` when no next realm exists.
pub fn success_probability(realm: Realm, tribulation_pills: u32) -> Option<f64> {
    let base = realm.tribulation_base_rate()?;
    let bonus = (tribulation_pills as f64 * TRIBULATION_PILL_BONUS).min(TRIBULATION_PILL_BONUS_CAP);
    Some(base + bonus)
}

/// Attempts to cross the tribulation into the next realm.
///
/// Requires level 9 and a next realm. One uniform draw decides the outcome.
/// Success consumes every pill held; failure consumes exactly one. The
/// asymmetry is a deliberate balance choice.
pub fn attempt_tribulation(character: &mut Character, rng: &mut impl Rng) -> TribulationResult {
    if character.level < MAX_LEVEL {
        return TribulationResult::Ineligible {
            reason: format!(
                "Tribulation requires level {} (currently {})",
                MAX_LEVEL, character.level
            ),
        };
    }
    // A base rate exists exactly when a next realm does
    let (next_realm, probability) = match (
        character.realm.next(),
        success_probability(character.realm, character.tribulation_pills),
    ) {
        (Some(realm), Some(probability)) => (realm, probability),
        _ => {
            return TribulationResult::Ineligible {
                reason: format!("{} is the final realm", character.realm.name()),
            }
        }
    };

    if rng.gen::<f64>() < probability {
        character.realm = next_realm;
        character.level = 1;
        character.exp = 0;
        character.exp_to_next = exp_for_next_level(character.realm, character.level);
        character.tribulation_pills = 0;
        character.gold += TRIBULATION_GOLD_REWARD;
        character.refresh_stats();
        character.full_restore();
        TribulationResult::Success {
            new_realm: next_realm,
            gold_awarded: TRIBULATION_GOLD_REWARD,
        }
    } else {
        character.level = 1;
        character.exp = 0;
        character.exp_to_next = exp_for_next_level(character.realm, character.level);
        character.tribulation_pills = character.tribulation_pills.saturating_sub(1);
        character.refresh_stats();
        TribulationResult::Failure {
            pills_remaining: character.tribulation_pills,
        }
    }
}
