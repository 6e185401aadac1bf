use super::inventory::Inventory;
use super::types::{EquipSlot, ItemKind, PillEffect};
use crate::core::game_logic::add_experience;
use crate::core::game_state::{ActionResult, Character};

/// Equips an item from the inventory. The character's realm must be at or
/// above the item's requirement; a displaced item returns to the inventory
/// and stats are recomputed. Failure leaves everything untouched.
pub fn equip(character: &mut Character, inventory: &mut Inventory, item_id: &str) -> ActionResult {
    let item = match inventory.get(item_id) {
        Some(entry) => entry.item.clone(),
        None => return ActionResult::fail(format!("{} is not in the inventory", item_id)),
    };

    let required_realm = match &item.kind {
        ItemKind::Equipment { required_realm, .. } => *required_realm,
        _ => return ActionResult::fail(format!("{} cannot be equipped", item.name)),
    };
    if character.realm < required_realm {
        return ActionResult::fail(format!(
            "{} requires the {} realm",
            item.name,
            required_realm.name()
        ));
    }

    inventory.remove(item_id, 1);
    if let Some(displaced) = character.equipment.set_for_item(&item) {
        inventory.add(displaced, 1);
    }
    character.refresh_stats();
    ActionResult::ok(format!("Equipped {}", item.name))
}

/// Removes the item in the given slot back into the inventory.
pub fn unequip(
    character: &mut Character,
    inventory: &mut Inventory,
    slot: EquipSlot,
) -> ActionResult {
    match character.equipment.get(slot).clone() {
        Some(item) => {
            character.equipment.set(slot, None);
            inventory.add(item.clone(), 1);
            character.refresh_stats();
            ActionResult::ok(format!("Unequipped {}", item.name))
        }
        None => ActionResult::fail(format!("Nothing equipped in the {} slot", slot.name())),
    }
}

/// Consumes one of the named item and applies its effect. Equipment and
/// materials are not directly usable.
pub fn use_item(
    character: &mut Character,
    inventory: &mut Inventory,
    item_id: &str,
) -> ActionResult {
    let item = match inventory.get(item_id) {
        Some(entry) => entry.item.clone(),
        None => return ActionResult::fail(format!("{} is not in the inventory", item_id)),
    };

    let result = match &item.kind {
        ItemKind::Pill { effect } => match effect {
            PillEffect::RestoreHp(amount) => {
                character.stats.hp = (character.stats.hp + amount).min(character.stats.max_hp);
                ActionResult::ok(format!("{} restores {} health", item.name, amount))
            }
            PillEffect::RestoreMp(amount) => {
                character.stats.mp = (character.stats.mp + amount).min(character.stats.max_mp);
                ActionResult::ok(format!("{} restores {} qi", item.name, amount))
            }
            PillEffect::GainExp(amount) => {
                let report = add_experience(character, *amount);
                if report.leveled_up {
                    ActionResult::ok(format!(
                        "{} grants {} experience; now level {}",
                        item.name, amount, report.new_level
                    ))
                } else {
                    ActionResult::ok(format!("{} grants {} experience", item.name, amount))
                }
            }
            PillEffect::PermanentMaxHp(amount) => {
                character.permanent_bonuses.max_hp += amount;
                character.refresh_stats();
                ActionResult::ok(format!("{} permanently adds {} max health", item.name, amount))
            }
            PillEffect::PermanentMaxMp(amount) => {
                character.permanent_bonuses.max_mp += amount;
                character.refresh_stats();
                ActionResult::ok(format!("{} permanently adds {} max qi", item.name, amount))
            }
            PillEffect::SkillLevelUp => character.skills.level_up_lowest(),
        },
        ItemKind::TribulationPill => {
            character.tribulation_pills += 1;
            ActionResult::ok(format!(
                "Tribulation pill readied ({} held)",
                character.tribulation_pills
            ))
        }
        ItemKind::Equipment { .. } => {
            return ActionResult::fail(format!("{} must be equipped, not consumed", item.name))
        }
        ItemKind::Material { .. } => {
            return ActionResult::fail(format!("{} has no direct use", item.name))
        }
    };

    // Only a successfully applied effect consumes the item
    if result.success {
        inventory.remove(item_id, 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::realm::Realm;
    use crate::items::catalog::item_by_id;

    fn character_with(items: &[(&str, u32)]) -> (Character, Inventory) {
        let character = Character::new("Chu Feng".to_string(), 0);
        let mut inventory = Inventory::new();
        for (id, qty) in items {
            inventory.add(item_by_id(id).expect("catalog item"), *qty);
        }
        (character, inventory)
    }

    #[test]
    fn test_equip_success_and_stat_refresh() {
        let (mut character, mut inventory) = character_with(&[("rusty_sword", 1)]);
        let atk_before = character.stats.atk;

        let result = equip(&mut character, &mut inventory, "rusty_sword");
        assert!(result.success);
        assert!(inventory.is_empty());
        assert_eq!(character.stats.atk, atk_before + 5);
    }

    #[test]
    fn test_equip_insufficient_realm_rejected() {
        let (mut character, mut inventory) = character_with(&[("azure_edge", 1)]);
        let stats_before = character.stats;

        let result = equip(&mut character, &mut inventory, "azure_edge");
        assert!(!result.success);
        assert!(result.message.contains("Foundation"));
        assert_eq!(character.stats, stats_before);
        assert!(character.equipment.weapon.is_none());
        assert_eq!(inventory.quantity("azure_edge"), 1);
    }

    #[test]
    fn test_equip_swap_returns_old_item() {
        let (mut character, mut inventory) =
            character_with(&[("rusty_sword", 1), ("azure_edge", 1)]);
        character.realm = Realm::Foundation;
        character.refresh_stats();

        assert!(equip(&mut character, &mut inventory, "rusty_sword").success);
        assert!(equip(&mut character, &mut inventory, "azure_edge").success);
        assert_eq!(inventory.quantity("rusty_sword"), 1);
        assert_eq!(
            character.equipment.weapon.as_ref().map(|i| i.id.as_str()),
            Some("azure_edge")
        );
    }

    #[test]
    fn test_equip_non_equipment_rejected() {
        let (mut character, mut inventory) = character_with(&[("spirit_grass", 1)]);
        let result = equip(&mut character, &mut inventory, "spirit_grass");
        assert!(!result.success);
        assert_eq!(inventory.quantity("spirit_grass"), 1);
    }

    #[test]
    fn test_unequip_round_trip() {
        let (mut character, mut inventory) = character_with(&[("cloth_robe", 1)]);
        assert!(equip(&mut character, &mut inventory, "cloth_robe").success);
        assert!(unequip(&mut character, &mut inventory, EquipSlot::Armor).success);
        assert_eq!(inventory.quantity("cloth_robe"), 1);
        assert!(character.equipment.armor.is_none());

        let empty = unequip(&mut character, &mut inventory, EquipSlot::Armor);
        assert!(!empty.success);
    }

    #[test]
    fn test_use_restore_pill_clamps_to_max() {
        let (mut character, mut inventory) = character_with(&[("minor_vitality_pill", 2)]);
        character.stats.hp = character.stats.max_hp - 10;

        assert!(use_item(&mut character, &mut inventory, "minor_vitality_pill").success);
        assert_eq!(character.stats.hp, character.stats.max_hp);
        assert_eq!(inventory.quantity("minor_vitality_pill"), 1);
    }

    #[test]
    fn test_use_exp_pill_levels_up() {
        let (mut character, mut inventory) = character_with(&[("insight_pill", 1)]);
        let result = use_item(&mut character, &mut inventory, "insight_pill");
        assert!(result.success);
        assert_eq!(character.level, 2);
        assert_eq!(character.total_exp, 200);
    }

    #[test]
    fn test_use_permanent_pill_accumulates() {
        let (mut character, mut inventory) = character_with(&[("dragon_marrow_pill", 2)]);
        let max_before = character.stats.max_hp;

        use_item(&mut character, &mut inventory, "dragon_marrow_pill");
        use_item(&mut character, &mut inventory, "dragon_marrow_pill");
        assert_eq!(character.permanent_bonuses.max_hp, 100);
        assert_eq!(character.stats.max_hp, max_before + 100);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_use_tribulation_pill_increments_counter() {
        let (mut character, mut inventory) = character_with(&[("tribulation_pill", 3)]);
        use_item(&mut character, &mut inventory, "tribulation_pill");
        use_item(&mut character, &mut inventory, "tribulation_pill");
        assert_eq!(character.tribulation_pills, 2);
        assert_eq!(inventory.quantity("tribulation_pill"), 1);
    }

    #[test]
    fn test_use_skill_pill_advances_technique() {
        let (mut character, mut inventory) = character_with(&[("heavenly_manual_page", 1)]);
        let result = use_item(&mut character, &mut inventory, "heavenly_manual_page");
        assert!(result.success);
        assert_eq!(character.skills.get("sword_qi").unwrap().level, 2);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_use_material_rejected_and_kept() {
        let (mut character, mut inventory) = character_with(&[("dragon_scale", 1)]);
        let result = use_item(&mut character, &mut inventory, "dragon_scale");
        assert!(!result.success);
        assert_eq!(inventory.quantity("dragon_scale"), 1);
    }
}
