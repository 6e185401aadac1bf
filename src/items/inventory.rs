use super::types::Item;
use serde::{Deserialize, Serialize};

/// One stack of a single item. Quantity is always at least 1; the entry is
/// removed outright when it would drop to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item: Item,
    pub quantity: u32,
}

/// The player's item collection. At most one entry per item id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: &str) -> Option<&InventoryEntry> {
        self.entries.iter().find(|e| e.item.id == item_id)
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.get(item_id).map_or(0, |e| e.quantity)
    }

    /// Merges `qty` of `item` into an existing stack or appends a new one.
    /// Adding zero is a no-op.
    pub fn add(&mut self, item: Item, qty: u32) {
        if qty == 0 {
            return;
        }
        match self.entries.iter_mut().find(|e| e.item.id == item.id) {
            Some(entry) => entry.quantity += qty,
            None => self.entries.push(InventoryEntry {
                item,
                quantity: qty,
            }),
        }
    }

    /// Removes up to `qty` of the given item, clamping at zero and dropping
    /// the entry entirely once empty. Removing a missing item is a no-op.
    pub fn remove(&mut self, item_id: &str, qty: u32) {
        if let Some(index) = self.entries.iter().position(|e| e.item.id == item_id) {
            let entry = &mut self.entries[index];
            entry.quantity = entry.quantity.saturating_sub(qty);
            if entry.quantity == 0 {
                self.entries.remove(index);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
