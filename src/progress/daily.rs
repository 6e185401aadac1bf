use crate::core::constants::{DAILY_BASE_GOLD, DAILY_STREAK_BONUS_GOLD, DAILY_STREAK_CAP};
use crate::core::game_state::{ActionResult, Character};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Persisted daily sign-in record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySignIn {
    pub last_sign_date: Option<NaiveDate>,
    pub streak: u32,
    pub total_sign_ins: u64,
}

impl DailySignIn {
    /// Gold reward for the given streak length, capped so long streaks
    /// plateau rather than compound.
    pub fn reward_for_streak(streak: u32) -> u64 {
        DAILY_BASE_GOLD + DAILY_STREAK_BONUS_GOLD * streak.min(DAILY_STREAK_CAP) as u64
    }

    /// Signs in once per calendar day. Consecutive days extend the streak;
    /// a gap resets it to one.
    pub fn sign_in(&mut self, character: &mut Character, today: NaiveDate) -> ActionResult {
        if self.last_sign_date == Some(today) {
            return ActionResult::fail("Already signed in today".to_string());
        }

        let consecutive = self
            .last_sign_date
            .is_some_and(|last| last + Duration::days(1) == today);
        self.streak = if consecutive { self.streak + 1 } else { 1 };
        self.last_sign_date = Some(today);
        self.total_sign_ins += 1;

        let reward = Self::reward_for_streak(self.streak);
        character.gold += reward;
        ActionResult::ok(format!(
            "Signed in (day {} streak): +{} gold",
            self.streak, reward
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap() + Duration::days(n as i64)
    }

    #[test]
    fn test_sign_in_once_per_day() {
        let mut record = DailySignIn::default();
        let mut character = Character::new("Bai Xiaochun".to_string(), 0);

        assert!(record.sign_in(&mut character, day(0)).success);
        let gold_after_first = character.gold;
        assert!(!record.sign_in(&mut character, day(0)).success);
        assert_eq!(character.gold, gold_after_first);
        assert_eq!(record.total_sign_ins, 1);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let mut record = DailySignIn::default();
        let mut character = Character::new("Bai Xiaochun".to_string(), 0);

        record.sign_in(&mut character, day(0));
        record.sign_in(&mut character, day(1));
        record.sign_in(&mut character, day(2));
        assert_eq!(record.streak, 3);
        assert_eq!(
            character.gold,
            DailySignIn::reward_for_streak(1)
                + DailySignIn::reward_for_streak(2)
                + DailySignIn::reward_for_streak(3)
        );
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut record = DailySignIn::default();
        let mut character = Character::new("Bai Xiaochun".to_string(), 0);

        record.sign_in(&mut character, day(0));
        record.sign_in(&mut character, day(1));
        record.sign_in(&mut character, day(5));
        assert_eq!(record.streak, 1);
        assert_eq!(record.total_sign_ins, 3);
    }

    #[test]
    fn test_streak_reward_plateaus() {
        assert_eq!(
            DailySignIn::reward_for_streak(DAILY_STREAK_CAP),
            DailySignIn::reward_for_streak(DAILY_STREAK_CAP + 100)
        );
    }
}
