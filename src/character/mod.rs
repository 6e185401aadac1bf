//! Character progression: realms, derived stats, samsara rebirth, skills.

pub mod realm;
pub mod samsara;
pub mod skills;
pub mod stats;

pub use realm::Realm;
pub use samsara::SamsaraRecord;
pub use skills::SkillBook;
pub use stats::{compute_stats, CharacterStats, StatBonuses};
