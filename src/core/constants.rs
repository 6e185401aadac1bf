// Realm progression
pub const NUM_REALMS: usize = 8;
pub const MAX_LEVEL: u32 = 9;
pub const EXP_CURVE_BASE: u64 = 100;

// Per-realm stat multiplier, Qi Refining through Mahayana
pub const REALM_COEFFICIENTS: [u32; NUM_REALMS] = [1, 2, 3, 5, 8, 13, 21, 34];

// Base stat formulas
pub const BASE_HP: u32 = 150;
pub const HP_PER_LEVEL: u32 = 20;
pub const BASE_MP: u32 = 80;
pub const MP_PER_LEVEL: u32 = 8;
pub const BASE_ATK: u32 = 15;
pub const ATK_PER_LEVEL: u32 = 3;
pub const BASE_DEF: u32 = 8;
pub const DEF_PER_LEVEL: f64 = 1.5;

// Battle damage formulas
pub const MIN_DAMAGE: u32 = 1;
pub const PLAYER_DAMAGE_MULTIPLIER: f64 = 1.5;
pub const PLAYER_PENETRATION_CONSTANT: f64 = 200.0;
pub const MONSTER_DAMAGE_MULTIPLIER: f64 = 0.65;
pub const MONSTER_PENETRATION_CONSTANT: f64 = 100.0;
pub const COMPANION_DAMAGE_MULTIPLIER: f64 = 0.8;
pub const COMPANION_PENETRATION_CONSTANT: f64 = 150.0;

// Tribulation: base success rate for advancing OUT of each realm.
// Mahayana is the final realm and has no entry.
pub const TRIBULATION_BASE_RATES: [f64; NUM_REALMS - 1] =
    [0.85, 0.70, 0.55, 0.45, 0.35, 0.28, 0.20];
pub const TRIBULATION_PILL_BONUS: f64 = 0.10;
pub const TRIBULATION_PILL_BONUS_CAP: f64 = 0.50;
pub const TRIBULATION_GOLD_REWARD: u64 = 1000;

// Samsara rebirth cycle
pub const SAMSARA_BASE_THRESHOLD: u64 = 1_000_000;
pub const SAMSARA_HP_PER_CYCLE: u32 = 120;
pub const SAMSARA_MP_PER_CYCLE: u32 = 60;
pub const SAMSARA_ATK_PER_CYCLE: u32 = 8;
pub const SAMSARA_DEF_PER_CYCLE: u32 = 4;
pub const SAMSARA_EXP_RATE_PER_CYCLE: f64 = 0.10;

// Monster base stats per realm: (base_hp, hp_step, base_atk, atk_step, base_def, def_step)
// Steps are per sub-level above 1.
pub const MONSTER_BASE_STATS: [(u32, u32, u32, u32, u32, u32); NUM_REALMS] = [
    (45, 12, 6, 2, 2, 1),          // Qi Refining
    (110, 25, 14, 4, 6, 2),        // Foundation
    (190, 40, 24, 6, 12, 3),       // Core Formation
    (340, 65, 42, 9, 22, 5),       // Nascent Soul
    (580, 100, 70, 14, 38, 7),     // Spirit Severing
    (980, 160, 115, 22, 62, 11),   // Void Refinement
    (1650, 250, 190, 34, 100, 17), // Integration
    (2800, 400, 300, 55, 165, 27), // Mahayana
];

// Monster stat variance
pub const MONSTER_STAT_VARIANCE_MIN: f64 = 0.9;
pub const MONSTER_STAT_VARIANCE_MAX: f64 = 1.1;

// Boss multipliers: (hp_mult, atk_mult, def_mult)
pub const BOSS_MULTIPLIERS: (f64, f64, f64) = (3.0, 1.5, 1.8);
pub const BOSS_SUB_LEVEL: u32 = 9;

// Idle rewards
pub const MAX_IDLE_SECONDS: i64 = 24 * 60 * 60;
pub const IDLE_MULTIPLIER: f64 = 0.25;
pub const IDLE_SECONDS_PER_KILL: f64 = 5.0;

// Rolling game log
pub const GAME_LOG_CAPACITY: usize = 100;

// Market
pub const MARKET_SELL_RATIO: f64 = 0.4;

// Daily sign-in
pub const DAILY_BASE_GOLD: u64 = 100;
pub const DAILY_STREAK_BONUS_GOLD: u64 = 25;
pub const DAILY_STREAK_CAP: u32 = 30;

// Character management
pub const CHARACTER_NAME_MAX_LENGTH: usize = 16;
