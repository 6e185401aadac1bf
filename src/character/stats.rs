use crate::character::samsara;
use crate::core::constants::*;
use crate::core::game_state::Character;
use crate::items::types::ItemKind;
use serde::{Deserialize, Serialize};

/// Sparse additive stat bundle carried by equipment, companions, and
/// samsara cycles. Absent contributions default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonuses {
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub mp: u32,
    #[serde(default)]
    pub atk: u32,
    #[serde(default)]
    pub def: u32,
}

impl StatBonuses {
    pub fn add(&mut self, other: &StatBonuses) {
        self.hp += other.hp;
        self.mp += other.mp;
        self.atk += other.atk;
        self.def += other.def;
    }
}

/// Derived combat stats snapshot. Recomputed from realm/level plus bonuses;
/// only the current hp/mp pools carry state between recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub atk: u32,
    pub def: u32,
}

impl CharacterStats {
    /// Base stats for a fresh character at the given realm and level,
    /// with full pools.
    pub fn base(realm_coefficient: u32, level: u32) -> Self {
        let max_hp = base_hp(realm_coefficient, level);
        let max_mp = base_mp(realm_coefficient, level);
        Self {
            hp: max_hp,
            max_hp,
            mp: max_mp,
            max_mp,
            atk: base_atk(realm_coefficient, level),
            def: base_def(realm_coefficient, level),
        }
    }
}

fn base_hp(coeff: u32, level: u32) -> u32 {
    BASE_HP + level * HP_PER_LEVEL * coeff
}

fn base_mp(coeff: u32, level: u32) -> u32 {
    BASE_MP + level * MP_PER_LEVEL * coeff
}

fn base_atk(coeff: u32, level: u32) -> u32 {
    BASE_ATK + level * ATK_PER_LEVEL * coeff
}

fn base_def(coeff: u32, level: u32) -> u32 {
    (BASE_DEF as f64 + level as f64 * DEF_PER_LEVEL * coeff as f64) as u32
}

/// Computes effective combat stats from realm/level base formulas plus
/// equipment, the active companion, samsara cycle bonuses, and permanent
/// pill bonuses. Pure; current hp/mp are preserved and clamped to the new
/// maxima.
pub fn compute_stats(character: &Character) -> CharacterStats {
    let coeff = character.realm.coefficient();
    let level = character.level;

    let mut bonus = StatBonuses::default();
    for item in character.equipment.iter_equipped() {
        if let ItemKind::Equipment { bonuses, .. } = &item.kind {
            bonus.add(bonuses);
        }
    }
    if let Some(companion) = character.active_companion() {
        bonus.add(&companion.bonuses);
    }
    bonus.add(&samsara::flat_bonuses(character.samsara.cycles));

    let max_hp = base_hp(coeff, level) + bonus.hp + character.permanent_bonuses.max_hp;
    let max_mp = base_mp(coeff, level) + bonus.mp + character.permanent_bonuses.max_mp;

    CharacterStats {
        hp: character.stats.hp.min(max_hp),
        max_hp,
        mp: character.stats.mp.min(max_mp),
        max_mp,
        atk: base_atk(coeff, level) + bonus.atk,
        def: base_def(coeff, level) + bonus.def,
    }
}
