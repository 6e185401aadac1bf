use crate::character::realm::Realm;
use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Immutable monster record. Encounters never mutate it; battles run on a
/// local copy of its hp pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub realm: Realm,
    pub sub_level: u32,
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub exp_reward: u64,
    pub gold_reward: u64,
    /// Independent (item id, drop probability) pairs.
    #[serde(default)]
    pub drops: Vec<(String, f64)>,
    #[serde(default)]
    pub is_boss: bool,
}

/// Who acted in a battle log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Companion,
    Monster,
}

/// One simulated battle event, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub round: u32,
    pub actor: Actor,
    pub message: String,
    pub damage: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Win,
    Lose,
}

/// Full result of one resolved encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleReport {
    pub log: Vec<BattleLogEntry>,
    pub outcome: BattleOutcome,
    pub remaining_player_hp: u32,
}

fn base_stats(realm: Realm) -> (u32, u32, u32, u32, u32, u32) {
    MONSTER_BASE_STATS[realm.index()]
}

/// Deterministic monster stats for a realm and sub-level, before variance.
fn raw_stats(realm: Realm, sub_level: u32) -> (u32, u32, u32) {
    let (base_hp, hp_step, base_atk, atk_step, base_def, def_step) = base_stats(realm);
    let depth = sub_level.saturating_sub(1);
    (
        base_hp + depth * hp_step,
        base_atk + depth * atk_step,
        base_def + depth * def_step,
    )
}

fn reward_for_stats(hp: u32, atk: u32) -> (u64, u64) {
    let exp = (hp / 4 + atk * 2) as u64;
    let gold = exp / 3 + 1;
    (exp, gold)
}

/// Expected (exp, gold) reward at a realm/sub-level, ignoring variance.
/// Used by the idle-reward estimate.
pub fn expected_rewards(realm: Realm, sub_level: u32) -> (u64, u64) {
    let (hp, atk, _) = raw_stats(realm, sub_level);
    reward_for_stats(hp, atk)
}

fn realm_name_parts(realm: Realm) -> (&'static [&'static str], &'static [&'static str]) {
    match realm {
        Realm::QiRefining => (
            &["Bamboo", "Mist", "Stone", "Creek", "Moss"],
            &["Rat", "Sparrow", "Viper", "Boar", "Bandit"],
        ),
        Realm::Foundation => (
            &["Iron", "Ashen", "Thorn", "Gale", "Ember"],
            &["Wolf", "Ape", "Serpent", "Stalker", "Shade"],
        ),
        Realm::CoreFormation => (
            &["Jade", "Storm", "Blood", "Night", "Cinder"],
            &["Tiger", "Crane", "Python", "Revenant", "Warrior"],
        ),
        Realm::NascentSoul => (
            &["Ghost", "Frost", "Venom", "Abyss", "Silver"],
            &["Panther", "Drake", "Widow", "Monk", "Phantom"],
        ),
        Realm::SpiritSevering => (
            &["Void", "Thunder", "Molten", "Shadow", "Spirit"],
            &["Qilin", "Roc", "Basilisk", "Reaper", "Sage"],
        ),
        Realm::VoidRefinement => (
            &["Star", "Demon", "Profound", "Glacial", "Crimson"],
            &["Dragon", "Fiend", "Leviathan", "Titan", "Ancestor"],
        ),
        Realm::Integration => (
            &["Celestial", "Chaos", "Radiant", "Eternal", "Primal"],
            &["Phoenix", "Colossus", "Seraph", "Devourer", "Overlord"],
        ),
        Realm::Mahayana => (
            &["Heaven", "Dao", "Immortal", "Boundless", "Sovereign"],
            &["Emperor", "Saint", "Calamity", "Warden", "Godbeast"],
        ),
    }
}

/// Generates a realm-themed monster name.
pub fn generate_monster_name(realm: Realm, rng: &mut impl Rng) -> String {
    let (prefixes, suffixes) = realm_name_parts(realm);
    let prefix = prefixes[rng.gen_range(0..prefixes.len())];
    let suffix = suffixes[rng.gen_range(0..suffixes.len())];
    format!("{} {}", prefix, suffix)
}

/// Drop table for a regular monster of the given realm band.
fn default_drops(realm: Realm, sub_level: u32) -> Vec<(String, f64)> {
    let (hp_pill, material) = match realm.index() {
        0..=2 => ("minor_vitality_pill", "spirit_grass"),
        3..=5 => ("vitality_pill", "beast_core"),
        _ => ("supreme_vitality_pill", "cold_iron_shard"),
    };
    let mut drops = vec![
        (hp_pill.to_string(), 0.10),
        (material.to_string(), 0.15),
        ("insight_pill".to_string(), 0.05),
    ];
    if sub_level >= BOSS_SUB_LEVEL {
        drops.push(("tribulation_pill".to_string(), 0.05));
    }
    drops
}

/// Generates a monster for the given realm and sub-level with ±10% hp/atk
/// variance.
pub fn generate_monster(realm: Realm, sub_level: u32, rng: &mut impl Rng) -> Monster {
    let sub_level = sub_level.clamp(1, MAX_LEVEL);
    let (raw_hp, raw_atk, def) = raw_stats(realm, sub_level);

    let hp_var = rng.gen_range(MONSTER_STAT_VARIANCE_MIN..MONSTER_STAT_VARIANCE_MAX);
    let atk_var = rng.gen_range(MONSTER_STAT_VARIANCE_MIN..MONSTER_STAT_VARIANCE_MAX);
    let hp = ((raw_hp as f64) * hp_var).max(1.0) as u32;
    let atk = ((raw_atk as f64) * atk_var).max(1.0) as u32;

    let (exp_reward, gold_reward) = reward_for_stats(hp, atk);
    Monster {
        name: generate_monster_name(realm, rng),
        realm,
        sub_level,
        hp,
        atk,
        def,
        exp_reward,
        gold_reward,
        drops: default_drops(realm, sub_level),
        is_boss: false,
    }
}

/// Generates the realm's boss: a peak sub-level monster with boss
/// multipliers and a guaranteed-richer drop table.
pub fn generate_boss(realm: Realm, rng: &mut impl Rng) -> Monster {
    let mut monster = generate_monster(realm, BOSS_SUB_LEVEL, rng);
    let (hp_mult, atk_mult, def_mult) = BOSS_MULTIPLIERS;
    monster.name = format!("Elder {}", monster.name);
    monster.hp = ((monster.hp as f64) * hp_mult).max(1.0) as u32;
    monster.atk = ((monster.atk as f64) * atk_mult).max(1.0) as u32;
    monster.def = ((monster.def as f64) * def_mult) as u32;
    let (exp_reward, gold_reward) = reward_for_stats(monster.hp, monster.atk);
    monster.exp_reward = exp_reward;
    monster.gold_reward = gold_reward;
    monster.drops.push(("tribulation_pill".to_string(), 0.20));
    monster.is_boss = true;
    monster
}
