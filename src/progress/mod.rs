//! Side progression records: quests, achievements, secret realms, daily
//! sign-in, and lifetime statistics.

pub mod achievements;
pub mod daily;
pub mod dungeons;
pub mod quests;
pub mod statistics;

pub use achievements::Achievements;
pub use daily::DailySignIn;
pub use dungeons::DungeonProgress;
pub use quests::QuestProgress;
pub use statistics::LifetimeStats;
