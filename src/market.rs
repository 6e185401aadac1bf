//! The spirit market: fixed listings bought with gold, and a sell-back
//! path at a fraction of base value.

use crate::core::constants::MARKET_SELL_RATIO;
use crate::core::game_state::{ActionResult, Character};
use crate::items::catalog;
use crate::items::inventory::Inventory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketListing {
    pub item_id: String,
    pub price: u64,
    /// Remaining stock; listings do not restock.
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub listings: Vec<MarketListing>,
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}

impl Market {
    /// Opening stock for a fresh game.
    pub fn new() -> Self {
        let stock = [
            ("minor_vitality_pill", 40, 50),
            ("minor_qi_pill", 30, 50),
            ("insight_pill", 120, 30),
            ("tribulation_pill", 6000, 10),
            ("rusty_sword", 80, 5),
            ("cloth_robe", 70, 5),
            ("wooden_talisman", 60, 5),
            ("azure_edge", 1200, 3),
            ("ironweave_robe", 1100, 3),
            ("jade_pendant", 1000, 3),
        ];
        Self {
            listings: stock
                .iter()
                .map(|(id, price, stock)| MarketListing {
                    item_id: (*id).to_string(),
                    price: *price,
                    stock: *stock,
                })
                .collect(),
        }
    }

    pub fn listing(&self, item_id: &str) -> Option<&MarketListing> {
        self.listings.iter().find(|l| l.item_id == item_id)
    }
}

/// Buys one of the listed item. Fails without mutation on unknown listings,
/// empty stock, or insufficient gold.
pub fn buy(
    character: &mut Character,
    inventory: &mut Inventory,
    market: &mut Market,
    item_id: &str,
) -> ActionResult {
    let listing = match market.listings.iter_mut().find(|l| l.item_id == item_id) {
        Some(listing) => listing,
        None => return ActionResult::fail(format!("The market does not carry {}", item_id)),
    };
    if listing.stock == 0 {
        return ActionResult::fail(format!("{} is sold out", item_id));
    }
    if character.gold < listing.price {
        return ActionResult::fail(format!(
            "Not enough gold: {} costs {}, have {}",
            item_id, listing.price, character.gold
        ));
    }
    let item = match catalog::item_by_id(item_id) {
        Some(item) => item,
        None => return ActionResult::fail(format!("Unknown item: {}", item_id)),
    };

    character.gold -= listing.price;
    listing.stock -= 1;
    let name = item.name.clone();
    inventory.add(item, 1);
    ActionResult::ok(format!("Bought {}", name))
}

/// Sells `qty` of an owned item for a fraction of its base value.
pub fn sell(
    character: &mut Character,
    inventory: &mut Inventory,
    item_id: &str,
    qty: u32,
) -> ActionResult {
    if qty == 0 {
        return ActionResult::fail("Nothing to sell".to_string());
    }
    let entry = match inventory.get(item_id) {
        Some(entry) => entry,
        None => return ActionResult::fail(format!("{} is not in the inventory", item_id)),
    };
    if entry.quantity < qty {
        return ActionResult::fail(format!(
            "Only {} of {} held",
            entry.quantity, entry.item.name
        ));
    }

    let unit_price = (catalog::base_value(&entry.item) as f64 * MARKET_SELL_RATIO) as u64;
    let name = entry.item.name.clone();
    let proceeds = unit_price * qty as u64;
    inventory.remove(item_id, qty);
    character.gold += proceeds;
    ActionResult::ok(format!("Sold {} x{} for {} gold", name, qty, proceeds))
}
