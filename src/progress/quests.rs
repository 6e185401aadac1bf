use crate::character::realm::Realm;
use crate::core::game_logic::add_experience;
use crate::core::game_state::{ActionResult, Character};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestGoal {
    KillMonsters(u64),
    ReachLevel(u32),
    ReachRealm(Realm),
    ClearDungeons(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestDef {
    pub id: &'static str,
    pub name: &'static str,
    pub goal: QuestGoal,
    pub exp_reward: u64,
    pub gold_reward: u64,
}

pub fn all_quests() -> Vec<QuestDef> {
    use QuestGoal::*;
    vec![
        QuestDef {
            id: "first_hunt",
            name: "First Hunt",
            goal: KillMonsters(1),
            exp_reward: 50,
            gold_reward: 50,
        },
        QuestDef {
            id: "pest_control",
            name: "Pest Control",
            goal: KillMonsters(25),
            exp_reward: 500,
            gold_reward: 200,
        },
        QuestDef {
            id: "scourge_of_beasts",
            name: "Scourge of Beasts",
            goal: KillMonsters(200),
            exp_reward: 5000,
            gold_reward: 1500,
        },
        QuestDef {
            id: "peak_condition",
            name: "Peak Condition",
            goal: ReachLevel(9),
            exp_reward: 0,
            gold_reward: 300,
        },
        QuestDef {
            id: "foundation_stone",
            name: "Foundation Stone",
            goal: ReachRealm(Realm::Foundation),
            exp_reward: 1000,
            gold_reward: 500,
        },
        QuestDef {
            id: "golden_core",
            name: "Golden Core",
            goal: ReachRealm(Realm::CoreFormation),
            exp_reward: 5000,
            gold_reward: 2000,
        },
        QuestDef {
            id: "realm_delver",
            name: "Realm Delver",
            goal: ClearDungeons(3),
            exp_reward: 2000,
            gold_reward: 800,
        },
    ]
}

pub fn quest_by_id(id: &str) -> Option<QuestDef> {
    all_quests().into_iter().find(|q| q.id == id)
}

/// Persisted quest counters and claim set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestProgress {
    pub kills: u64,
    pub dungeons_cleared: u64,
    pub claimed: Vec<String>,
}

impl QuestProgress {
    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    pub fn record_dungeon_clear(&mut self) {
        self.dungeons_cleared += 1;
    }

    pub fn is_claimed(&self, quest_id: &str) -> bool {
        self.claimed.iter().any(|c| c == quest_id)
    }

    pub fn is_complete(&self, def: &QuestDef, character: &Character) -> bool {
        match def.goal {
            QuestGoal::KillMonsters(n) => self.kills >= n,
            QuestGoal::ReachLevel(n) => character.level >= n,
            QuestGoal::ReachRealm(realm) => character.realm >= realm,
            QuestGoal::ClearDungeons(n) => self.dungeons_cleared >= n,
        }
    }

    /// Claims a completed quest's reward exactly once.
    pub fn claim(&mut self, character: &mut Character, quest_id: &str) -> ActionResult {
        let def = match quest_by_id(quest_id) {
            Some(def) => def,
            None => return ActionResult::fail(format!("Unknown quest: {}", quest_id)),
        };
        if self.is_claimed(quest_id) {
            return ActionResult::fail(format!("{} was already claimed", def.name));
        }
        if !self.is_complete(&def, character) {
            return ActionResult::fail(format!("{} is not complete yet", def.name));
        }

        self.claimed.push(quest_id.to_string());
        character.gold += def.gold_reward;
        if def.exp_reward > 0 {
            add_experience(character, def.exp_reward);
        }
        ActionResult::ok(format!(
            "{} complete: +{} exp, +{} gold",
            def.name, def.exp_reward, def.gold_reward
        ))
    }
}
