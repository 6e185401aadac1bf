use super::statistics::LifetimeStats;
use crate::character::realm::Realm;
use crate::core::game_state::Character;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All achievement definitions with their unlock predicates.
fn definitions() -> Vec<(AchievementDef, fn(&LifetimeStats, &Character) -> bool)> {
    vec![
        (
            AchievementDef {
                id: "first_blood",
                name: "First Blood",
                description: "Slay your first monster",
            },
            |stats, _| stats.monsters_slain >= 1,
        ),
        (
            AchievementDef {
                id: "hundred_slain",
                name: "Centurion of the Wilds",
                description: "Slay 100 monsters",
            },
            |stats, _| stats.monsters_slain >= 100,
        ),
        (
            AchievementDef {
                id: "boss_breaker",
                name: "Boss Breaker",
                description: "Defeat 10 elder beasts",
            },
            |stats, _| stats.bosses_slain >= 10,
        ),
        (
            AchievementDef {
                id: "foundation_laid",
                name: "Foundation Laid",
                description: "Reach the Foundation realm",
            },
            |_, character| character.realm >= Realm::Foundation,
        ),
        (
            AchievementDef {
                id: "nascent_ascendant",
                name: "Nascent Ascendant",
                description: "Reach the Nascent Soul realm",
            },
            |_, character| character.realm >= Realm::NascentSoul,
        ),
        (
            AchievementDef {
                id: "heaven_defier",
                name: "Heaven Defier",
                description: "Survive 5 tribulations",
            },
            |stats, _| stats.tribulations_succeeded >= 5,
        ),
        (
            AchievementDef {
                id: "wheel_turner",
                name: "Turner of the Wheel",
                description: "Complete a samsara cycle",
            },
            |_, character| character.samsara.cycles >= 1,
        ),
        (
            AchievementDef {
                id: "gilded_hands",
                name: "Gilded Hands",
                description: "Earn 100,000 gold across all lives",
            },
            |stats, _| stats.gold_earned >= 100_000,
        ),
        (
            AchievementDef {
                id: "delver",
                name: "Secret Realm Delver",
                description: "Clear 5 secret realms",
            },
            |stats, _| stats.dungeons_cleared >= 5,
        ),
    ]
}

pub fn all_achievements() -> Vec<AchievementDef> {
    definitions().into_iter().map(|(def, _)| def).collect()
}

/// Persisted unlock record. Achievements are never re-locked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievements {
    pub unlocked: Vec<String>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|u| u == id)
    }

    /// Re-evaluates every locked achievement against current state and
    /// returns those newly unlocked.
    pub fn evaluate(
        &mut self,
        stats: &LifetimeStats,
        character: &Character,
    ) -> Vec<AchievementDef> {
        let mut newly = Vec::new();
        for (def, predicate) in definitions() {
            if !self.is_unlocked(def.id) && predicate(stats, character) {
                self.unlocked.push(def.id.to_string());
                newly.push(def);
            }
        }
        newly
    }
}
