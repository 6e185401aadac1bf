use super::types::{Actor, BattleLogEntry, BattleOutcome, BattleReport, Monster};
use crate::core::constants::*;
use crate::core::game_state::Character;
use crate::items::catalog;
use crate::items::types::Item;
use rand::Rng;

/// Player strike damage against a monster's defense.
pub fn player_damage(player_atk: u32, monster_def: u32) -> u32 {
    let mitigation = 1.0 - monster_def as f64 / (monster_def as f64 + PLAYER_PENETRATION_CONSTANT);
    let damage = (player_atk as f64 * PLAYER_DAMAGE_MULTIPLIER * mitigation).floor() as u32;
    damage.max(MIN_DAMAGE)
}

/// Monster strike damage against the player's defense.
pub fn monster_damage(monster_atk: u32, player_def: u32) -> u32 {
    let mitigation = 1.0 - player_def as f64 / (player_def as f64 + MONSTER_PENETRATION_CONSTANT);
    let damage = (monster_atk as f64 * MONSTER_DAMAGE_MULTIPLIER * mitigation).floor() as u32;
    damage.max(MIN_DAMAGE)
}

/// Active companion strike damage against a monster's defense.
pub fn companion_damage(companion_atk: u32, monster_def: u32) -> u32 {
    let mitigation =
        1.0 - monster_def as f64 / (monster_def as f64 + COMPANION_PENETRATION_CONSTANT);
    let damage = (companion_atk as f64 * COMPANION_DAMAGE_MULTIPLIER * mitigation).floor() as u32;
    damage.max(MIN_DAMAGE)
}

/// Resolves one encounter round-by-round until a side falls.
///
/// Round order: player strikes, then the active companion (if the monster
/// still stands), then the monster retaliates (skipped and logged as zero
/// when `invulnerable`). The character is not mutated; callers apply
/// `remaining_player_hp` and rewards themselves.
pub fn resolve_battle(character: &Character, monster: &Monster, invulnerable: bool) -> BattleReport {
    let mut log = Vec::new();
    let mut player_hp = character.stats.hp;
    let mut monster_hp = monster.hp;
    let companion = character.active_companion();
    let mut round: u32 = 0;

    let outcome = loop {
        round += 1;

        // Player strike
        let damage = player_damage(character.stats.atk, monster.def);
        monster_hp = monster_hp.saturating_sub(damage);
        log.push(BattleLogEntry {
            round,
            actor: Actor::Player,
            message: format!("{} strikes {} for {}", character.name, monster.name, damage),
            damage: Some(damage),
        });
        if monster_hp == 0 {
            break BattleOutcome::Win;
        }

        // Companion strike
        if let Some(companion) = companion {
            let damage = companion_damage(companion.attack, monster.def);
            monster_hp = monster_hp.saturating_sub(damage);
            log.push(BattleLogEntry {
                round,
                actor: Actor::Companion,
                message: format!("{} pounces for {}", companion.name, damage),
                damage: Some(damage),
            });
            if monster_hp == 0 {
                break BattleOutcome::Win;
            }
        }

        // Monster retaliation
        if invulnerable {
            log.push(BattleLogEntry {
                round,
                actor: Actor::Monster,
                message: format!("{}'s attack glances off harmlessly", monster.name),
                damage: Some(0),
            });
        } else {
            let damage = monster_damage(monster.atk, character.stats.def);
            player_hp = player_hp.saturating_sub(damage);
            log.push(BattleLogEntry {
                round,
                actor: Actor::Monster,
                message: format!("{} claws {} for {}", monster.name, character.name, damage),
                damage: Some(damage),
            });
            if player_hp == 0 {
                break BattleOutcome::Lose;
            }
        }
    };

    BattleReport {
        log,
        outcome,
        remaining_player_hp: player_hp,
    }
}

/// Rolls the defeated monster's drop table: every pair is an independent
/// draw, so several items can drop from one kill. Ids missing from the
/// catalog are skipped.
pub fn roll_drops(monster: &Monster, rng: &mut impl Rng) -> Vec<Item> {
    let mut dropped = Vec::new();
    for (item_id, rate) in &monster.drops {
        if rng.gen::<f64>() < *rate {
            if let Some(item) = catalog::item_by_id(item_id) {
                dropped.push(item);
            }
        }
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::realm::Realm;
    use crate::companions::Companion;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixed_monster(hp: u32, atk: u32, def: u32) -> Monster {
        Monster {
            name: "Training Dummy".to_string(),
            realm: Realm::QiRefining,
            sub_level: 1,
            hp,
            atk,
            def,
            exp_reward: 10,
            gold_reward: 3,
            drops: Vec::new(),
            is_boss: false,
        }
    }

    #[test]
    fn test_damage_formulas_worked_example() {
        // atk 15 vs def 2: floor(15 * 1.5 * (1 - 2/202)) = 22
        assert_eq!(player_damage(15, 2), 22);
        // atk 6 vs def 8: floor(6 * 0.65 * (1 - 8/108)) = 3
        assert_eq!(monster_damage(6, 8), 3);
        // atk 10 vs def 50: floor(10 * 0.8 * (1 - 50/200)) = 6
        assert_eq!(companion_damage(10, 50), 6);
    }

    #[test]
    fn test_damage_floor_of_one() {
        assert_eq!(player_damage(1, 100_000), 1);
        assert_eq!(monster_damage(1, 100_000), 1);
        assert_eq!(companion_damage(1, 100_000), 1);
    }

    #[test]
    fn test_two_round_win_worked_example() {
        // Tier-1 character (atk 15, def 8) vs hp 40 / atk 6 / def 2:
        // 22 damage per round, 40 -> 18 -> dead in round 2, and the monster
        // dies before its round-2 retaliation.
        let mut character = Character::new("Fang Yuan".to_string(), 0);
        character.stats.atk = 15;
        character.stats.def = 8;
        let monster = fixed_monster(40, 6, 2);

        let report = resolve_battle(&character, &monster, false);
        assert_eq!(report.outcome, BattleOutcome::Win);
        let last_round = report.log.last().unwrap().round;
        assert_eq!(last_round, 2);
        // One retaliation landed (round 1 only)
        let monster_hits: Vec<_> = report
            .log
            .iter()
            .filter(|e| e.actor == Actor::Monster)
            .collect();
        assert_eq!(monster_hits.len(), 1);
        assert_eq!(report.remaining_player_hp, character.stats.hp - 3);
    }

    #[test]
    fn test_invulnerable_player_never_takes_damage() {
        let mut character = Character::new("Fang Yuan".to_string(), 0);
        character.stats.atk = 2; // drag the fight out
        let monster = fixed_monster(500, 1_000_000, 0);

        let report = resolve_battle(&character, &monster, true);
        assert_eq!(report.outcome, BattleOutcome::Win);
        assert_eq!(report.remaining_player_hp, character.stats.hp);
        // Skipped retaliations are still logged with zero damage
        assert!(report
            .log
            .iter()
            .any(|e| e.actor == Actor::Monster && e.damage == Some(0)));
    }

    #[test]
    fn test_overwhelming_monster_wins() {
        let character = Character::new("Fang Yuan".to_string(), 0);
        let monster = fixed_monster(1_000_000, 10_000, 500);

        let report = resolve_battle(&character, &monster, false);
        assert_eq!(report.outcome, BattleOutcome::Lose);
        assert_eq!(report.remaining_player_hp, 0);
    }

    #[test]
    fn test_companion_attacks_between_player_and_monster() {
        let mut character = Character::new("Fang Yuan".to_string(), 0);
        let mut tiger = Companion::new("jade_tiger", "Jade Tiger", 10);
        tiger.active = true;
        character.companions.push(tiger);
        character.refresh_stats();

        let monster = fixed_monster(1000, 1, 0);
        let report = resolve_battle(&character, &monster, false);

        // Within round 1: player, companion, monster in that order
        let first_round: Vec<_> = report.log.iter().filter(|e| e.round == 1).collect();
        assert_eq!(first_round[0].actor, Actor::Player);
        assert_eq!(first_round[1].actor, Actor::Companion);
        assert_eq!(first_round[2].actor, Actor::Monster);
    }

    #[test]
    fn test_companion_can_land_killing_blow() {
        let mut character = Character::new("Fang Yuan".to_string(), 0);
        character.stats.atk = 10; // player hits for 15
        let mut tiger = Companion::new("jade_tiger", "Jade Tiger", 100);
        tiger.active = true;
        character.companions.push(tiger);

        // 95 hp: survives the player's 15, dies to the companion's 80
        let monster = fixed_monster(95, 1, 0);
        let report = resolve_battle(&character, &monster, false);
        assert_eq!(report.outcome, BattleOutcome::Win);
        assert_eq!(report.log.last().unwrap().actor, Actor::Companion);
        // Monster never got to retaliate
        assert!(report.log.iter().all(|e| e.actor != Actor::Monster));
    }

    #[test]
    fn test_roll_drops_rates_zero_and_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut monster = fixed_monster(10, 1, 0);
        monster.drops = vec![
            ("spirit_grass".to_string(), 1.1),
            ("beast_core".to_string(), 0.0),
            ("not_a_real_item".to_string(), 1.1),
        ];
        for _ in 0..100 {
            let drops = roll_drops(&monster, &mut rng);
            assert_eq!(drops.len(), 1);
            assert_eq!(drops[0].id, "spirit_grass");
        }
    }

    #[test]
    fn test_roll_drops_independent_draws() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut monster = fixed_monster(10, 1, 0);
        monster.drops = vec![
            ("spirit_grass".to_string(), 0.5),
            ("beast_core".to_string(), 0.5),
        ];
        let mut both = 0;
        for _ in 0..1000 {
            if roll_drops(&monster, &mut rng).len() == 2 {
                both += 1;
            }
        }
        // Independent draws land together roughly a quarter of the time
        assert!(both > 150 && both < 350, "both-drops count {}", both);
    }
}
