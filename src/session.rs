//! The game session: one explicit context object owning the character and
//! every side record, passed to each simulation call instead of living in
//! UI-global state.
//!
//! Orchestrates the flows that touch several records at once (a hunt
//! updates the character, inventory, quests, statistics, achievements, and
//! the rolling log) and maps each record to its own JSON snapshot.

use crate::character::samsara;
use crate::combat::logic::{resolve_battle, roll_drops};
use crate::combat::types::{generate_boss, generate_monster, BattleOutcome, BattleReport, Monster};
use crate::core::constants::CHARACTER_NAME_MAX_LENGTH;
use crate::core::game_logic::{add_experience, battle_exp_reward};
use crate::core::game_state::{ActionResult, Character};
use crate::core::offline::{claim_idle_rewards, IdleReport, IdleRewards};
use crate::core::tribulation::{attempt_tribulation, TribulationResult};
use crate::game_log::GameLog;
use crate::items::inventory::Inventory;
use crate::market::Market;
use crate::progress::dungeons::{run_dungeon, DungeonProgress, DungeonReport};
use crate::progress::{Achievements, DailySignIn, LifetimeStats, QuestProgress};
use crate::utils::persistence::{delete_file, load_json, load_json_or_default, save_json};
use chrono::NaiveDate;
use rand::Rng;
use std::io;
use uuid::Uuid;

const PLAYER_ID_FILE: &str = "player_id.json";
const CHARACTER_FILE: &str = "character.json";
const INVENTORY_FILE: &str = "inventory.json";
const GAME_LOG_FILE: &str = "game_log.json";
const MARKET_FILE: &str = "market.json";
const QUESTS_FILE: &str = "quests.json";
const ACHIEVEMENTS_FILE: &str = "achievements.json";
const DUNGEONS_FILE: &str = "dungeons.json";
const IDLE_FILE: &str = "idle.json";
const DAILY_FILE: &str = "daily.json";
const STATS_FILE: &str = "statistics.json";

const RECORD_FILES: [&str; 10] = [
    CHARACTER_FILE,
    INVENTORY_FILE,
    GAME_LOG_FILE,
    MARKET_FILE,
    QUESTS_FILE,
    ACHIEVEMENTS_FILE,
    DUNGEONS_FILE,
    IDLE_FILE,
    DAILY_FILE,
    STATS_FILE,
];

/// Validates a new character name.
pub fn validate_character_name(name: &str) -> ActionResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return ActionResult::fail("Name cannot be empty".to_string());
    }
    if trimmed.chars().count() > CHARACTER_NAME_MAX_LENGTH {
        return ActionResult::fail(format!(
            "Name cannot exceed {} characters",
            CHARACTER_NAME_MAX_LENGTH
        ));
    }
    ActionResult::ok("Name accepted")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub player_id: String,
    pub character: Character,
    pub inventory: Inventory,
    pub log: GameLog,
    pub market: Market,
    pub quests: QuestProgress,
    pub achievements: Achievements,
    pub dungeons: DungeonProgress,
    pub idle: IdleRewards,
    pub daily: DailySignIn,
    pub stats: LifetimeStats,
}

impl Session {
    /// Starts a brand new game.
    pub fn new_game(name: String, current_time: i64) -> Self {
        let mut session = Self {
            player_id: load_or_create_player_id(),
            character: Character::new(name, current_time),
            inventory: Inventory::new(),
            log: GameLog::new(),
            market: Market::new(),
            quests: QuestProgress::default(),
            achievements: Achievements::default(),
            dungeons: DungeonProgress::default(),
            idle: IdleRewards {
                last_claim_time: current_time,
            },
            daily: DailySignIn::default(),
            stats: LifetimeStats::default(),
        };
        session.log.push(
            current_time,
            format!("{} sets foot on the path", session.character.name),
        );
        session
    }

    /// Loads a saved session. `None` when no character record exists; every
    /// other missing or corrupt record degrades to its default.
    pub fn load() -> Option<Self> {
        let character: Character = load_json(CHARACTER_FILE)?;
        Some(Self {
            player_id: load_or_create_player_id(),
            character,
            inventory: load_json_or_default(INVENTORY_FILE),
            log: load_json_or_default(GAME_LOG_FILE),
            market: load_json_or_default(MARKET_FILE),
            quests: load_json_or_default(QUESTS_FILE),
            achievements: load_json_or_default(ACHIEVEMENTS_FILE),
            dungeons: load_json_or_default(DUNGEONS_FILE),
            idle: load_json_or_default(IDLE_FILE),
            daily: load_json_or_default(DAILY_FILE),
            stats: load_json_or_default(STATS_FILE),
        })
    }

    /// Writes every record as its own snapshot.
    pub fn save(&self) -> io::Result<()> {
        save_json(CHARACTER_FILE, &self.character)?;
        save_json(INVENTORY_FILE, &self.inventory)?;
        save_json(GAME_LOG_FILE, &self.log)?;
        save_json(MARKET_FILE, &self.market)?;
        save_json(QUESTS_FILE, &self.quests)?;
        save_json(ACHIEVEMENTS_FILE, &self.achievements)?;
        save_json(DUNGEONS_FILE, &self.dungeons)?;
        save_json(IDLE_FILE, &self.idle)?;
        save_json(DAILY_FILE, &self.daily)?;
        save_json(STATS_FILE, &self.stats)?;
        Ok(())
    }

    /// Destroys all saved records (the player id survives resets).
    pub fn delete_save() -> io::Result<()> {
        for file in RECORD_FILES {
            delete_file(file)?;
        }
        Ok(())
    }

    /// Fights a specific monster and settles every consequence: hp, exp,
    /// gold, drops, quests, statistics, achievements, and the log.
    pub fn fight(
        &mut self,
        monster: &Monster,
        current_time: i64,
        rng: &mut impl Rng,
    ) -> BattleReport {
        let report = resolve_battle(&self.character, monster, false);
        self.character.stats.hp = report.remaining_player_hp;

        match report.outcome {
            BattleOutcome::Win => {
                let exp =
                    battle_exp_reward(monster.exp_reward, self.character.samsara.cycles);
                add_experience(&mut self.character, exp);
                self.character.gold += monster.gold_reward;

                let drops = roll_drops(monster, rng);
                let drop_count = drops.len() as u64;
                for item in drops {
                    self.log
                        .push(current_time, format!("Obtained {}", item.name));
                    self.inventory.add(item, 1);
                }

                self.quests.record_kill();
                self.stats
                    .record_battle_won(monster.is_boss, monster.gold_reward, drop_count);
                self.stats
                    .record_progress(self.character.realm, self.character.level);
                self.log.push(
                    current_time,
                    format!("Defeated {} (+{} exp, +{} gold)", monster.name, exp, monster.gold_reward),
                );
            }
            BattleOutcome::Lose => {
                self.stats.record_battle_lost();
                // Defeat is a setback, not a death spiral: recover fully
                self.character.full_restore();
                self.log
                    .push(current_time, format!("Defeated by {}", monster.name));
            }
        }

        self.unlock_achievements(current_time);
        report
    }

    /// Hunts a random monster matched to the character's current realm and
    /// sub-level.
    pub fn hunt(&mut self, current_time: i64, rng: &mut impl Rng) -> BattleReport {
        let monster = generate_monster(self.character.realm, self.character.level, rng);
        self.fight(&monster, current_time, rng)
    }

    /// Challenges the current realm's elder boss.
    pub fn hunt_boss(&mut self, current_time: i64, rng: &mut impl Rng) -> BattleReport {
        let boss = generate_boss(self.character.realm, rng);
        self.fight(&boss, current_time, rng)
    }

    /// Attempts tribulation and records the outcome.
    pub fn attempt_tribulation(
        &mut self,
        current_time: i64,
        rng: &mut impl Rng,
    ) -> TribulationResult {
        let result = attempt_tribulation(&mut self.character, rng);
        match &result {
            TribulationResult::Success { new_realm, .. } => {
                self.stats.record_tribulation(true);
                self.stats
                    .record_progress(self.character.realm, self.character.level);
                self.log.push(
                    current_time,
                    format!("Tribulation crossed: welcome to {}", new_realm.name()),
                );
            }
            TribulationResult::Failure { .. } => {
                self.stats.record_tribulation(false);
                self.log.push(
                    current_time,
                    "The tribulation lightning proves too fierce".to_string(),
                );
            }
            TribulationResult::Ineligible { .. } => {}
        }
        self.unlock_achievements(current_time);
        result
    }

    /// Performs a samsara rebirth, keeping lifetime records.
    pub fn perform_samsara(&mut self, current_time: i64) -> ActionResult {
        let result = samsara::perform_samsara(&mut self.character);
        if result.success {
            self.stats.samsara_cycles += 1;
            self.log.push(
                current_time,
                format!("Samsara cycle {} begins", self.character.samsara.cycles),
            );
            self.unlock_achievements(current_time);
        }
        result
    }

    /// Claims lazily-accrued idle rewards.
    pub fn claim_idle(&mut self, current_time: i64) -> IdleReport {
        let report = claim_idle_rewards(&mut self.character, &mut self.idle, current_time);
        if report.exp_gained > 0 {
            self.log.push(
                current_time,
                format!(
                    "Seclusion ends: +{} exp, +{} gold",
                    report.exp_gained, report.gold_gained
                ),
            );
        }
        report
    }

    /// Daily sign-in.
    pub fn sign_in(&mut self, today: NaiveDate, current_time: i64) -> ActionResult {
        let result = self.daily.sign_in(&mut self.character, today);
        if result.success {
            self.log.push(current_time, result.message.clone());
        }
        result
    }

    /// Runs a secret realm and records the clear.
    pub fn enter_dungeon(
        &mut self,
        dungeon_id: &str,
        current_time: i64,
        rng: &mut impl Rng,
    ) -> DungeonReport {
        let report = run_dungeon(&mut self.character, &mut self.dungeons, dungeon_id, rng);
        if report.cleared {
            self.quests.record_dungeon_clear();
            self.stats.dungeons_cleared += 1;
        }
        if report.entered {
            self.log.push(current_time, report.message.clone());
        }
        self.unlock_achievements(current_time);
        report
    }

    fn unlock_achievements(&mut self, current_time: i64) {
        for def in self.achievements.evaluate(&self.stats, &self.character) {
            self.log
                .push(current_time, format!("Achievement: {}", def.name));
        }
    }
}

/// Stable per-installation identifier, minted on first run.
pub fn load_or_create_player_id() -> String {
    if let Some(id) = load_json::<String>(PLAYER_ID_FILE) {
        return id;
    }
    let id = Uuid::new_v4().to_string();
    // Best effort: an unwritable disk just means a fresh id next launch
    let _ = save_json(PLAYER_ID_FILE, &id);
    id
}
