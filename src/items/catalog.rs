//! Static item catalog. Content data, not engineered behavior: ids are
//! stable and referenced by monster drop tables and market listings.

use super::types::{EquipSlot, Item, ItemKind, PillEffect, Rarity};
use crate::character::realm::Realm;
use crate::character::stats::StatBonuses;

fn pill(id: &str, name: &str, effect: PillEffect) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Pill { effect },
    }
}

fn material(id: &str, name: &str, rarity: Rarity) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Material { rarity },
    }
}

fn equipment(
    id: &str,
    name: &str,
    slot: EquipSlot,
    required_realm: Realm,
    quality: Rarity,
    bonuses: StatBonuses,
) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Equipment {
            slot,
            required_realm,
            quality,
            bonuses,
        },
    }
}

/// Returns every item definition in the game.
pub fn all_items() -> Vec<Item> {
    use PillEffect::*;

    let mut items = vec![
        // Recovery pills
        pill("minor_vitality_pill", "Minor Vitality Pill", RestoreHp(80)),
        pill("vitality_pill", "Vitality Pill", RestoreHp(400)),
        pill(
            "supreme_vitality_pill",
            "Supreme Vitality Pill",
            RestoreHp(2000),
        ),
        pill("minor_qi_pill", "Minor Qi Pill", RestoreMp(40)),
        pill("qi_pill", "Qi Pill", RestoreMp(200)),
        pill("supreme_qi_pill", "Supreme Qi Pill", RestoreMp(1000)),
        // Experience pills
        pill("insight_pill", "Insight Pill", GainExp(200)),
        pill("enlightenment_pill", "Enlightenment Pill", GainExp(2000)),
        pill(
            "dao_comprehension_pill",
            "Dao Comprehension Pill",
            GainExp(20000),
        ),
        // One-time permanent boosts
        pill(
            "dragon_marrow_pill",
            "Dragon Marrow Pill",
            PermanentMaxHp(50),
        ),
        pill(
            "phoenix_feather_pill",
            "Phoenix Feather Pill",
            PermanentMaxMp(25),
        ),
        // Technique advancement
        pill("heavenly_manual_page", "Heavenly Manual Page", SkillLevelUp),
        // Tribulation consumable
        Item {
            id: "tribulation_pill".to_string(),
            name: "Tribulation Pill".to_string(),
            kind: ItemKind::TribulationPill,
        },
        // Materials
        material("spirit_grass", "Spirit Grass", Rarity::Common),
        material("beast_core", "Beast Core", Rarity::Refined),
        material("cold_iron_shard", "Cold Iron Shard", Rarity::Treasure),
        material("phoenix_plume", "Phoenix Plume", Rarity::Spirit),
        material("star_fragment", "Star Fragment", Rarity::Spirit),
        material("dragon_scale", "Dragon Scale", Rarity::Immortal),
    ];

    // Weapons
    items.push(equipment(
        "rusty_sword",
        "Rusty Sword",
        EquipSlot::Weapon,
        Realm::QiRefining,
        Rarity::Common,
        StatBonuses {
            atk: 5,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "azure_edge",
        "Azure Edge",
        EquipSlot::Weapon,
        Realm::Foundation,
        Rarity::Treasure,
        StatBonuses {
            atk: 25,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "stormpiercer",
        "Stormpiercer",
        EquipSlot::Weapon,
        Realm::NascentSoul,
        Rarity::Spirit,
        StatBonuses {
            atk: 120,
            hp: 200,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "heavenrender",
        "Heavenrender",
        EquipSlot::Weapon,
        Realm::Integration,
        Rarity::Immortal,
        StatBonuses {
            atk: 900,
            hp: 1500,
            ..Default::default()
        },
    ));

    // Armor
    items.push(equipment(
        "cloth_robe",
        "Cloth Robe",
        EquipSlot::Armor,
        Realm::QiRefining,
        Rarity::Common,
        StatBonuses {
            def: 4,
            hp: 30,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "ironweave_robe",
        "Ironweave Robe",
        EquipSlot::Armor,
        Realm::Foundation,
        Rarity::Treasure,
        StatBonuses {
            def: 18,
            hp: 150,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "frostguard_plate",
        "Frostguard Plate",
        EquipSlot::Armor,
        Realm::NascentSoul,
        Rarity::Spirit,
        StatBonuses {
            def: 80,
            hp: 800,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "voidsilk_raiment",
        "Voidsilk Raiment",
        EquipSlot::Armor,
        Realm::Integration,
        Rarity::Immortal,
        StatBonuses {
            def: 500,
            hp: 6000,
            ..Default::default()
        },
    ));

    // Accessories
    items.push(equipment(
        "wooden_talisman",
        "Wooden Talisman",
        EquipSlot::Accessory,
        Realm::QiRefining,
        Rarity::Common,
        StatBonuses {
            hp: 20,
            mp: 10,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "jade_pendant",
        "Jade Pendant",
        EquipSlot::Accessory,
        Realm::Foundation,
        Rarity::Treasure,
        StatBonuses {
            mp: 80,
            atk: 8,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "spirit_ring",
        "Spirit Ring",
        EquipSlot::Accessory,
        Realm::NascentSoul,
        Rarity::Spirit,
        StatBonuses {
            atk: 60,
            def: 40,
            mp: 300,
            ..Default::default()
        },
    ));
    items.push(equipment(
        "dao_seal",
        "Dao Seal",
        EquipSlot::Accessory,
        Realm::Integration,
        Rarity::Immortal,
        StatBonuses {
            atk: 400,
            def: 250,
            hp: 3000,
            mp: 1500,
        },
    ));

    items
}

/// Looks up a catalog item by id.
pub fn item_by_id(id: &str) -> Option<Item> {
    all_items().into_iter().find(|item| item.id == id)
}

/// Base gold value of an item, used for market sell prices.
pub fn base_value(item: &Item) -> u64 {
    match &item.kind {
        ItemKind::Pill { effect } => match effect {
            PillEffect::RestoreHp(n) | PillEffect::RestoreMp(n) => (*n as u64) / 2 + 10,
            PillEffect::GainExp(n) => n / 4 + 25,
            PillEffect::PermanentMaxHp(_) | PillEffect::PermanentMaxMp(_) => 2000,
            PillEffect::SkillLevelUp => 1500,
        },
        ItemKind::TribulationPill => 5000,
        ItemKind::Equipment { quality, .. } => match quality {
            Rarity::Common => 50,
            Rarity::Refined => 200,
            Rarity::Treasure => 800,
            Rarity::Spirit => 4000,
            Rarity::Immortal => 20000,
        },
        ItemKind::Material { rarity } => match rarity {
            Rarity::Common => 10,
            Rarity::Refined => 40,
            Rarity::Treasure => 150,
            Rarity::Spirit => 600,
            Rarity::Immortal => 2500,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let items = all_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_item_by_id_lookup() {
        let pill = item_by_id("tribulation_pill").expect("known id");
        assert_eq!(pill.kind, ItemKind::TribulationPill);
        assert!(item_by_id("no_such_item").is_none());
    }

    #[test]
    fn test_every_slot_has_equipment() {
        let items = all_items();
        for slot in [EquipSlot::Weapon, EquipSlot::Armor, EquipSlot::Accessory] {
            assert!(
                items.iter().any(|i| i.equip_slot() == Some(slot)),
                "No equipment for slot {:?}",
                slot
            );
        }
    }

    #[test]
    fn test_base_value_scales_with_quality() {
        let rusty = item_by_id("rusty_sword").unwrap();
        let heavenrender = item_by_id("heavenrender").unwrap();
        assert!(base_value(&heavenrender) > base_value(&rusty) * 100);
    }
}
