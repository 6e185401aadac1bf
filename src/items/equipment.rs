use super::types::{EquipSlot, Item};
use serde::{Deserialize, Serialize};

/// The three equipment slots. Empty slots contribute nothing to stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> &Option<Item> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Armor => &self.armor,
            EquipSlot::Accessory => &self.accessory,
        }
    }

    pub fn set(&mut self, slot: EquipSlot, item: Option<Item>) {
        match slot {
            EquipSlot::Weapon => self.weapon = item,
            EquipSlot::Armor => self.armor = item,
            EquipSlot::Accessory => self.accessory = item,
        }
    }

    /// Places an equipment item in its own slot, returning whatever was
    /// displaced. Non-equipment items are rejected untouched.
    pub fn set_for_item(&mut self, item: &Item) -> Option<Item> {
        let slot = item.equip_slot()?;
        let displaced = self.get(slot).clone();
        self.set(slot, Some(item.clone()));
        displaced
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }
}
