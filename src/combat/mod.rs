//! Battle resolution and monster generation.

pub mod logic;
pub mod types;

pub use logic::{resolve_battle, roll_drops};
pub use types::{Actor, BattleLogEntry, BattleOutcome, BattleReport, Monster};
