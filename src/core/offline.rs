//! Idle reward accrual.
//!
//! Rewards are computed lazily from elapsed wall-clock time when claimed;
//! nothing runs in the background. The estimate simulates monster kills at
//! a reduced offline rate.

use super::constants::*;
use super::game_logic::{add_experience, battle_exp_reward};
use super::game_state::Character;
use crate::combat::types::expected_rewards;
use serde::{Deserialize, Serialize};

/// Persisted accumulator: just the moment rewards were last claimed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleRewards {
    pub last_claim_time: i64,
}

/// Report of one idle-reward claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdleReport {
    pub elapsed_seconds: i64,
    pub exp_gained: u64,
    pub gold_gained: u64,
    pub level_ups: u32,
}

/// Estimated (exp, gold) accrued over `elapsed_seconds` for this character,
/// capped at a day of absence. Kills are estimated at one per five seconds,
/// earning at a quarter of the online rate.
pub fn pending_idle_gains(character: &Character, elapsed_seconds: i64) -> (u64, u64) {
    if elapsed_seconds <= 0 {
        return (0, 0);
    }
    let capped_seconds = elapsed_seconds.min(MAX_IDLE_SECONDS);
    let estimated_kills = (capped_seconds as f64 / IDLE_SECONDS_PER_KILL) * IDLE_MULTIPLIER;

    let (exp_per_kill, gold_per_kill) = expected_rewards(character.realm, character.level);
    let exp = (estimated_kills * exp_per_kill as f64) as u64;
    let gold = (estimated_kills * gold_per_kill as f64) as u64;
    (battle_exp_reward(exp, character.samsara.cycles), gold)
}

/// Claims idle rewards for the elapsed interval and advances the
/// accumulator to `current_time`.
pub fn claim_idle_rewards(
    character: &mut Character,
    idle: &mut IdleRewards,
    current_time: i64,
) -> IdleReport {
    let elapsed_seconds = current_time - idle.last_claim_time;
    if elapsed_seconds <= 0 {
        return IdleReport::default();
    }

    let (exp_gained, gold_gained) = pending_idle_gains(character, elapsed_seconds);
    let report = add_experience(character, exp_gained);
    character.gold += gold_gained;
    idle.last_claim_time = current_time;

    IdleReport {
        elapsed_seconds,
        exp_gained,
        gold_gained,
        level_ups: report.levels_gained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_elapsed_time_no_gains() {
        let character = Character::new("Li Qiye".to_string(), 0);
        assert_eq!(pending_idle_gains(&character, 0), (0, 0));
        assert_eq!(pending_idle_gains(&character, -50), (0, 0));
    }

    #[test]
    fn test_gains_capped_at_one_day() {
        let character = Character::new("Li Qiye".to_string(), 0);
        let day = pending_idle_gains(&character, MAX_IDLE_SECONDS);
        let week = pending_idle_gains(&character, MAX_IDLE_SECONDS * 7);
        assert_eq!(day, week);
        assert!(day.0 > 0);
    }

    #[test]
    fn test_claim_applies_and_advances_clock() {
        let mut character = Character::new("Li Qiye".to_string(), 0);
        let mut idle = IdleRewards {
            last_claim_time: 1000,
        };

        let report = claim_idle_rewards(&mut character, &mut idle, 1000 + 3600);
        assert_eq!(report.elapsed_seconds, 3600);
        assert!(report.exp_gained > 0);
        assert!(report.gold_gained > 0);
        assert_eq!(character.total_exp, report.exp_gained);
        assert_eq!(character.gold, report.gold_gained);
        assert_eq!(idle.last_claim_time, 4600);

        // Claiming again immediately yields nothing
        let empty = claim_idle_rewards(&mut character, &mut idle, 4600);
        assert_eq!(empty, IdleReport::default());
    }

    #[test]
    fn test_samsara_cycles_boost_idle_exp() {
        let mut veteran = Character::new("Li Qiye".to_string(), 0);
        veteran.samsara.cycles = 5;
        let fresh = Character::new("Li Qiye".to_string(), 0);

        let (veteran_exp, _) = pending_idle_gains(&veteran, 3600);
        let (fresh_exp, _) = pending_idle_gains(&fresh, 3600);
        assert!(veteran_exp > fresh_exp);
    }
}
