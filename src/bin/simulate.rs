//! Game balance simulator CLI.
//!
//! Runs headless Monte Carlo careers through the progression loop to sanity
//! check pacing: battles per realm, tribulation attempts, and deaths.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                  # 200 careers to Mahayana
//!   cargo run --bin simulate -- -n 50         # 50 careers
//!   cargo run --bin simulate -- --seed 42     # Reproducible run

use cultivate::character::realm::Realm;
use cultivate::combat::types::{generate_monster, BattleOutcome};
use cultivate::combat::resolve_battle;
use cultivate::core::constants::{MAX_LEVEL, NUM_REALMS};
use cultivate::core::game_logic::{add_experience, battle_exp_reward};
use cultivate::core::tribulation::{attempt_tribulation, TribulationResult};
use cultivate::Character;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;

struct SimConfig {
    num_runs: u32,
    max_battles_per_run: u64,
    seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            max_battles_per_run: 2_000_000,
            seed: None,
        }
    }
}

#[derive(Default)]
struct SimReport {
    finished_runs: u32,
    stalled_runs: u32,
    total_battles: u64,
    total_deaths: u64,
    tribulation_attempts: u64,
    tribulation_failures: u64,
    battles_per_realm: [u64; NUM_REALMS],
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("CULTIVATE BALANCE SIMULATOR");
    println!("  Runs:        {}", config.num_runs);
    println!("  Max battles: {}", config.max_battles_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:        {}", seed);
    }
    println!();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = SimReport::default();
    for _ in 0..config.num_runs {
        simulate_career(&config, &mut report, &mut rng);
    }
    print_report(&config, &report);
}

/// One full career: hunt until level 9, attempt tribulation, repeat until
/// Mahayana or the battle budget runs out.
fn simulate_career(config: &SimConfig, report: &mut SimReport, rng: &mut impl Rng) {
    let mut character = Character::new("Simulant".to_string(), 0);
    let mut battles = 0u64;

    while character.realm != Realm::Mahayana && battles < config.max_battles_per_run {
        if character.level >= MAX_LEVEL {
            match attempt_tribulation(&mut character, rng) {
                TribulationResult::Success { .. } => {}
                TribulationResult::Failure { .. } => report.tribulation_failures += 1,
                TribulationResult::Ineligible { .. } => break,
            }
            report.tribulation_attempts += 1;
            continue;
        }

        let monster = generate_monster(character.realm, character.level, rng);
        let battle = resolve_battle(&character, &monster, false);
        battles += 1;
        report.battles_per_realm[character.realm.index()] += 1;
        character.stats.hp = battle.remaining_player_hp;

        match battle.outcome {
            BattleOutcome::Win => {
                let exp = battle_exp_reward(monster.exp_reward, character.samsara.cycles);
                add_experience(&mut character, exp);
                character.gold += monster.gold_reward;
            }
            BattleOutcome::Lose => {
                report.total_deaths += 1;
                character.full_restore();
            }
        }
    }

    report.total_battles += battles;
    if character.realm == Realm::Mahayana {
        report.finished_runs += 1;
    } else {
        report.stalled_runs += 1;
    }
}

fn print_report(config: &SimConfig, report: &SimReport) {
    println!("Careers reaching Mahayana: {}/{}", report.finished_runs, config.num_runs);
    if report.stalled_runs > 0 {
        println!("Stalled careers:           {}", report.stalled_runs);
    }
    println!(
        "Battles per career (avg):  {}",
        report.total_battles / config.num_runs.max(1) as u64
    );
    println!("Deaths total:              {}", report.total_deaths);
    println!(
        "Tribulations: {} attempts, {} failures",
        report.tribulation_attempts, report.tribulation_failures
    );
    println!();
    println!("Battles by realm:");
    for realm in Realm::all() {
        let battles = report.battles_per_realm[realm.index()];
        if battles > 0 {
            println!(
                "  {:16} {:>10}",
                realm.name(),
                battles / config.num_runs.max(1) as u64
            );
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-b" | "--battles" => {
                if i + 1 < args.len() {
                    config.max_battles_per_run = args[i + 1].parse().unwrap_or(2_000_000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }
    config
}
