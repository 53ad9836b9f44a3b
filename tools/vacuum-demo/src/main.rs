//! vacuum-demo: headless driver for the vacuum weapon.
//!
//! Usage:
//!   vacuum-demo run --seconds 6 --seed 42 --count 12 [--config weapon.json] [--cone] [--inverse] [--snapshots]
//!   vacuum-demo config

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};

use vacuum_core::constants::DT;
use vacuum_core::enums::FalloffMode;
use vacuum_core::events::WeaponEvent;
use vacuum_core::types::FirePoint;
use vacuum_core::{ConeProbeConfig, WeaponConfig};
use vacuum_enemies::{EnemyArchetype, Prop};
use vacuum_sim::{world_setup, EffectLog, Scene, WeaponController};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let command = args.get(1).map(String::as_str).unwrap_or("run");
    match command {
        "run" => cmd_run(args.get(2..).unwrap_or_default()),
        "config" => cmd_config(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "vacuum-demo: drive the vacuum weapon against a seeded swarm\n\
         \n\
         Commands:\n\
         \n\
         run       Fire at a swarm and log what happens\n\
         \n\
           --seconds <S>     Trigger hold time (default: 6)\n\
           --seed <N>        Swarm RNG seed (default: 42)\n\
           --count <N>       Swarm size (default: 12)\n\
           --config <path>   Weapon config JSON (partial documents allowed)\n\
           --cone            Enable cone probing for thin props\n\
           --inverse         Use inverse-distance falloff\n\
           --snapshots       Print every tick snapshot as JSON to stdout\n\
         \n\
         config    Print the default weapon config as JSON\n\
         \n\
         Logging: RUST_LOG=debug for pull lifecycle, LOG_FORMAT=json for JSON lines.\n"
    );
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn load_config(args: &[String]) -> WeaponConfig {
    let mut config = match parse_path(args, "--config") {
        Some(path) => {
            let file = match File::open(&path) {
                Ok(f) => f,
                Err(e) => {
                    error!(path = %path.display(), %e, "cannot open config");
                    process::exit(1);
                }
            };
            match WeaponConfig::from_json_reader(BufReader::new(file)) {
                Ok(c) => c,
                Err(e) => {
                    error!(path = %path.display(), %e, "invalid config");
                    process::exit(1);
                }
            }
        }
        None => WeaponConfig::default(),
    };

    if has_flag(args, "--cone") && config.cone.is_none() {
        config.cone = Some(ConeProbeConfig::default());
    }
    if has_flag(args, "--inverse") {
        config.falloff = FalloffMode::InverseDistance;
    }
    config
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let seconds: f32 = parse_value(args, "--seconds", 6.0);
    let seed: u64 = parse_value(args, "--seed", 42);
    let count: usize = parse_value(args, "--count", 12);
    let print_snapshots = has_flag(args, "--snapshots");
    let config = load_config(args);

    let mut scene = Scene::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    world_setup::spawn_swarm(&mut scene, &mut rng, count, Vec3::new(0.0, 0.0, 4.0), 3.5);
    world_setup::spawn_enemy(&mut scene, EnemyArchetype::TrainingDummy, Vec3::new(0.0, 0.0, 6.0));
    world_setup::spawn_prop(&mut scene, Prop::debris(), Vec3::new(-1.5, 0.0, 2.5));
    world_setup::spawn_prop(&mut scene, Prop::panel(), Vec3::new(1.0, 0.0, 7.5));
    world_setup::spawn_prop(&mut scene, Prop::panel().bolted(), Vec3::new(0.5, 0.0, 3.0));
    info!(entities = scene.len(), seed, "scene ready");

    let mut weapon = match WeaponController::with_collaborators(config, scene, EffectLog::new()) {
        Ok(w) => w,
        Err(e) => {
            error!(%e, "weapon config rejected");
            process::exit(1);
        }
    };

    let fire_point = FirePoint::new(Vec3::ZERO, Vec3::Z);
    let ticks = (seconds / DT).ceil().max(0.0) as u64;
    let mut destroyed = 0usize;
    let mut overheats = 0usize;
    let mut peak_residents = 0usize;

    for _ in 0..ticks {
        // Hold the trigger: re-press after every recovery.
        weapon.start_firing();
        let snapshot = weapon.tick(fire_point, DT);
        if let Some(scene) = weapon.world_mut() {
            scene.integrate(DT);
        }

        peak_residents = peak_residents.max(snapshot.residents.len());
        for event in &snapshot.events {
            match event {
                WeaponEvent::Destroyed { .. } => destroyed += 1,
                WeaponEvent::Overheated { .. } => overheats += 1,
                _ => {}
            }
        }
        if print_snapshots {
            match serde_json::to_string(&snapshot) {
                Ok(line) => println!("{line}"),
                Err(e) => error!(%e, "snapshot serialization failed"),
            }
        }
    }
    weapon.stop_firing();

    let remaining = weapon.world().map_or(0, |scene| scene.len());
    let cues = weapon.effects().map_or(0, |log| log.cues().len());
    info!(
        ticks,
        destroyed,
        overheats,
        peak_residents,
        remaining,
        cues,
        heat = weapon.current_heat(),
        "run complete"
    );
}

// --- Config command ---

fn cmd_config() {
    match serde_json::to_string_pretty(&WeaponConfig::default()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!(%e, "cannot serialize config");
            process::exit(1);
        }
    }
}
