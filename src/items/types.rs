use crate::character::realm::Realm;
use crate::character::stats::StatBonuses;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Armor => "Armor",
            EquipSlot::Accessory => "Accessory",
        }
    }
}

/// Quality grade for equipment, rarity tag for materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Refined = 1,
    Treasure = 2,
    Spirit = 3,
    Immortal = 4,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Refined => "Refined",
            Rarity::Treasure => "Treasure",
            Rarity::Spirit => "Spirit",
            Rarity::Immortal => "Immortal",
        }
    }
}

/// Effect applied when a pill is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PillEffect {
    RestoreHp(u32),
    RestoreMp(u32),
    GainExp(u64),
    PermanentMaxHp(u32),
    PermanentMaxMp(u32),
    SkillLevelUp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    Pill {
        effect: PillEffect,
    },
    /// Consumed implicitly by tribulation attempts, not by using.
    TribulationPill,
    Equipment {
        slot: EquipSlot,
        required_realm: Realm,
        quality: Rarity,
        bonuses: StatBonuses,
    },
    /// Crafting fodder; no mechanical effect.
    Material {
        rarity: Rarity,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match &self.kind {
            ItemKind::Equipment { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Refined);
        assert!(Rarity::Treasure < Rarity::Spirit);
        assert!(Rarity::Spirit < Rarity::Immortal);
    }

    #[test]
    fn test_equip_slot_for_kinds() {
        let sword = Item {
            id: "test_sword".to_string(),
            name: "Test Sword".to_string(),
            kind: ItemKind::Equipment {
                slot: EquipSlot::Weapon,
                required_realm: Realm::QiRefining,
                quality: Rarity::Common,
                bonuses: StatBonuses::default(),
            },
        };
        assert_eq!(sword.equip_slot(), Some(EquipSlot::Weapon));

        let herb = Item {
            id: "test_herb".to_string(),
            name: "Test Herb".to_string(),
            kind: ItemKind::Material {
                rarity: Rarity::Common,
            },
        };
        assert_eq!(herb.equip_slot(), None);
    }
}
