use crate::character::stats::StatBonuses;
use serde::{Deserialize, Serialize};

/// A spirit beast bound to the character. Only the active companion
/// contributes stats and an extra attack each battle round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    pub id: String,
    pub name: String,
    /// Attack used for the companion's own strike in battle.
    pub attack: u32,
    /// Passive bundle added to the owner's stats while active.
    #[serde(default)]
    pub bonuses: StatBonuses,
    #[serde(default)]
    pub active: bool,
}

impl Companion {
    pub fn new(id: &str, name: &str, attack: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            attack,
            bonuses: StatBonuses::default(),
            active: false,
        }
    }
}
