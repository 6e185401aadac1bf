//! Integration test: gold, market, inventory, and equipment flowing
//! through one session.

use cultivate::character::realm::Realm;
use cultivate::items::logic::{equip, unequip, use_item};
use cultivate::items::EquipSlot;
use cultivate::market::{buy, sell};
use cultivate::Session;

#[test]
fn test_buy_equip_swap_and_sell_flow() {
    let mut session = Session::new_game("Jiang Chen".to_string(), 0);
    session.character.gold = 5000;

    // Buy a starter weapon and equip it
    let result = buy(
        &mut session.character,
        &mut session.inventory,
        &mut session.market,
        "rusty_sword",
    );
    assert!(result.success);
    let atk_bare = session.character.stats.atk;
    assert!(equip(&mut session.character, &mut session.inventory, "rusty_sword").success);
    assert_eq!(session.character.stats.atk, atk_bare + 5);
    assert!(session.inventory.is_empty());

    // A Foundation weapon is beyond a Qi Refining cultivator
    assert!(buy(
        &mut session.character,
        &mut session.inventory,
        &mut session.market,
        "azure_edge",
    )
    .success);
    let stats_before = session.character.stats;
    let rejection = equip(&mut session.character, &mut session.inventory, "azure_edge");
    assert!(!rejection.success);
    assert_eq!(session.character.stats, stats_before);
    assert_eq!(
        session
            .character
            .equipment
            .weapon
            .as_ref()
            .map(|i| i.id.as_str()),
        Some("rusty_sword")
    );

    // After breaking through, the swap works and the old sword comes back
    session.character.realm = Realm::Foundation;
    session.character.refresh_stats();
    assert!(equip(&mut session.character, &mut session.inventory, "azure_edge").success);
    assert_eq!(session.inventory.quantity("rusty_sword"), 1);

    // Sell the spare; gold goes up, stack goes away
    let gold_before = session.character.gold;
    assert!(sell(&mut session.character, &mut session.inventory, "rusty_sword", 1).success);
    assert!(session.character.gold > gold_before);
    assert_eq!(session.inventory.quantity("rusty_sword"), 0);

    // And the equipped blade can still be taken off
    assert!(unequip(&mut session.character, &mut session.inventory, EquipSlot::Weapon).success);
    assert_eq!(session.inventory.quantity("azure_edge"), 1);
}

#[test]
fn test_pill_shopping_spree() {
    let mut session = Session::new_game("Jiang Chen".to_string(), 0);
    session.character.gold = 50_000;

    // Stockpile tribulation pills from the market
    for _ in 0..3 {
        assert!(buy(
            &mut session.character,
            &mut session.inventory,
            &mut session.market,
            "tribulation_pill",
        )
        .success);
    }
    assert_eq!(session.inventory.quantity("tribulation_pill"), 3);

    // Ready them all for the next breakthrough
    for _ in 0..3 {
        assert!(use_item(
            &mut session.character,
            &mut session.inventory,
            "tribulation_pill",
        )
        .success);
    }
    assert_eq!(session.character.tribulation_pills, 3);
    assert_eq!(session.inventory.quantity("tribulation_pill"), 0);

    // Market stock ran down accordingly
    assert_eq!(session.market.listing("tribulation_pill").unwrap().stock, 7);
}

#[test]
fn test_insufficient_gold_never_mutates() {
    let mut session = Session::new_game("Jiang Chen".to_string(), 0);
    session.character.gold = 3;

    let before_gold = session.character.gold;
    let result = buy(
        &mut session.character,
        &mut session.inventory,
        &mut session.market,
        "insight_pill",
    );
    assert!(!result.success);
    assert!(result.message.contains("Not enough gold"));
    assert_eq!(session.character.gold, before_gold);
    assert!(session.inventory.is_empty());
    assert_eq!(session.market.listing("insight_pill").unwrap().stock, 30);
}
