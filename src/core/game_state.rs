use crate::character::realm::Realm;
use crate::character::samsara::SamsaraRecord;
use crate::character::skills::SkillBook;
use crate::character::stats::{compute_stats, CharacterStats};
use crate::companions::Companion;
use crate::items::equipment::Equipment;
use serde::{Deserialize, Serialize};

/// Outcome of a fallible player-facing action. Failures leave all state
/// unchanged; there is no exception-based control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Monotonic max-pool additions from one-time consumables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermanentBonuses {
    pub max_hp: u32,
    pub max_mp: u32,
}

/// The player character. Created once at new-game, mutated in place by
/// every action until an explicit reset destroys it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub realm: Realm,
    /// Sub-rank within the realm, 1-9. Reaching 9 gates tribulation.
    pub level: u32,
    pub exp: u64,
    pub exp_to_next: u64,
    /// Lifetime experience; drives the samsara gate and never decreases.
    pub total_exp: u64,
    pub gold: u64,
    pub stats: CharacterStats,
    pub equipment: Equipment,
    #[serde(default)]
    pub tribulation_pills: u32,
    #[serde(default)]
    pub permanent_bonuses: PermanentBonuses,
    #[serde(default)]
    pub companions: Vec<Companion>,
    #[serde(default)]
    pub skills: SkillBook,
    #[serde(default)]
    pub samsara: SamsaraRecord,
    pub created_at: i64,
}

impl Character {
    /// Creates a fresh Qi Refining level 1 character with full pools.
    pub fn new(name: String, current_time: i64) -> Self {
        use uuid::Uuid;

        let realm = Realm::QiRefining;
        let level = 1;
        let mut character = Self {
            id: Uuid::new_v4().to_string(),
            name,
            realm,
            level,
            exp: 0,
            exp_to_next: crate::core::game_logic::exp_for_next_level(realm, level),
            total_exp: 0,
            gold: 0,
            stats: CharacterStats::base(realm.coefficient(), level),
            equipment: Equipment::new(),
            tribulation_pills: 0,
            permanent_bonuses: PermanentBonuses::default(),
            companions: Vec::new(),
            skills: SkillBook::new(),
            samsara: SamsaraRecord::default(),
            created_at: current_time,
        };
        character.refresh_stats();
        character
    }

    /// Recomputes derived stats in place, preserving (and clamping) the
    /// current hp/mp pools.
    pub fn refresh_stats(&mut self) {
        self.stats = compute_stats(self);
    }

    /// Restores hp and mp to their maxima.
    pub fn full_restore(&mut self) {
        self.stats.hp = self.stats.max_hp;
        self.stats.mp = self.stats.max_mp;
    }

    pub fn active_companion(&self) -> Option<&Companion> {
        self.companions.iter().find(|c| c.active)
    }

    /// Marks the named companion active and every other inactive. Stats are
    /// refreshed on success.
    pub fn set_active_companion(&mut self, companion_id: &str) -> ActionResult {
        if !self.companions.iter().any(|c| c.id == companion_id) {
            return ActionResult::fail(format!("No companion named {}", companion_id));
        }
        for companion in &mut self.companions {
            companion.active = companion.id == companion_id;
        }
        self.refresh_stats();
        let name = self
            .active_companion()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        ActionResult::ok(format!("{} is now by your side", name))
    }

    /// Dismisses the active companion, if any.
    pub fn clear_active_companion(&mut self) {
        for companion in &mut self.companions {
            companion.active = false;
        }
        self.refresh_stats();
    }
}
