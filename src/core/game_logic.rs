use super::constants::*;
use super::game_state::Character;
use crate::character::realm::Realm;
use crate::character::samsara;

/// Experience required to advance from the given level within a realm.
pub fn exp_for_next_level(realm: Realm, level: u32) -> u64 {
    EXP_CURVE_BASE * level as u64 * realm.coefficient() as u64
}

/// Result of applying experience to a character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelUpReport {
    pub leveled_up: bool,
    pub levels_gained: u32,
    pub new_level: u32,
}

/// Applies experience and processes level rollovers within the realm.
///
/// At level 9, experience accumulates past `exp_to_next` without leveling:
/// further advancement is gated behind tribulation, never automatic. The
/// overflow buffer is kept intentionally.
pub fn add_experience(character: &mut Character, amount: u64) -> LevelUpReport {
    character.exp += amount;
    character.total_exp += amount;

    let mut levels_gained = 0;
    while character.exp >= character.exp_to_next && character.level < MAX_LEVEL {
        character.exp -= character.exp_to_next;
        character.level += 1;
        character.exp_to_next = exp_for_next_level(character.realm, character.level);
        levels_gained += 1;
    }

    if levels_gained > 0 {
        character.refresh_stats();
    }

    LevelUpReport {
        leveled_up: levels_gained > 0,
        levels_gained,
        new_level: character.level,
    }
}

/// Scales a battle experience reward by the samsara cycle rate bonus.
pub fn battle_exp_reward(base_exp: u64, samsara_cycles: u32) -> u64 {
    (base_exp as f64 * samsara::exp_rate_multiplier(samsara_cycles)) as u64
}
