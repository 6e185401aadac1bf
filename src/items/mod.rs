//! Items: catalog definitions, the stacking inventory ledger, equipment
//! slots, and consume/equip operations.

pub mod catalog;
pub mod equipment;
pub mod inventory;
pub mod logic;
pub mod types;

pub use equipment::Equipment;
pub use inventory::{Inventory, InventoryEntry};
pub use types::{EquipSlot, Item, ItemKind, PillEffect, Rarity};
