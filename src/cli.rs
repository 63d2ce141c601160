use std::fs;
use std::path::Path;

use crate::analysis::{analyze_team, export_counter_rankings, AnalysisScenario, TeamConfig};
use crate::analysis::team::baseline_candidate;
use crate::data::registry::DataRegistry;
use crate::data::validate::validate_registry;
use crate::engine::damage::{estimate_damage, pick_best_move, DamageMode};
use crate::parallel::WorkerPool;
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Damage,
    Analyze,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("damage") => Some(Command::Damage),
        Some("analyze") => Some(Command::Analyze),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Damage) => handle_damage(args),
        Some(Command::Analyze) => handle_analyze(args),
        Some(Command::Validate) => handle_validate(),
        None => {
            eprintln!("usage: counterdex <serve|damage|analyze|validate>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr =
        std::env::var("COUNTERDEX_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn load_registry_or_exit() -> Result<std::sync::Arc<DataRegistry>, i32> {
    DataRegistry::load().map_err(|err| {
        eprintln!("failed to load reference data: {err}");
        1
    })
}

fn handle_damage(args: &[String]) -> i32 {
    let (Some(attacker_name), Some(defender_name)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: counterdex damage <attacker> <defender> [move] [--mode auto|physical|elemental]");
        return 2;
    };
    let move_name = args.get(4).filter(|arg| !arg.starts_with("--"));
    let mode = parse_mode_flag(args);

    let registry = match load_registry_or_exit() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let Some(attacker) = baseline_candidate(&registry, attacker_name, false) else {
        eprintln!("unknown creature: {attacker_name}");
        return 1;
    };
    let Some(defender) = baseline_candidate(&registry, defender_name, false) else {
        eprintln!("unknown creature: {defender_name}");
        return 1;
    };

    let chosen = match move_name {
        Some(name) => attacker
            .moves
            .iter()
            .find(|mv| mv.name.eq_ignore_ascii_case(name))
            .cloned(),
        None => pick_best_move(
            &attacker.moves,
            &attacker.stats,
            &defender.stats,
            &defender.elements,
        )
        .map(|best| best.chosen),
    };
    let Some(chosen) = chosen else {
        eprintln!("no move available for {attacker_name}");
        return 1;
    };

    let estimate = estimate_damage(
        &chosen,
        &attacker.stats,
        &defender.stats,
        &defender.elements,
        mode,
    );
    let payload = serde_json::json!({
        "attacker": attacker.name,
        "defender": defender.name,
        "move": chosen,
        "estimate": estimate,
    });
    match serde_json::to_string_pretty(&payload) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize damage estimate: {err}");
            1
        }
    }
}

fn parse_mode_flag(args: &[String]) -> DamageMode {
    let Some(position) = args.iter().position(|arg| arg == "--mode") else {
        return DamageMode::Auto;
    };
    match args.get(position + 1).map(String::as_str) {
        Some("physical") => DamageMode::Physical,
        Some("elemental") => DamageMode::Elemental,
        Some("auto") | None => DamageMode::Auto,
        Some(other) => {
            eprintln!("invalid mode '{other}', defaulting to auto");
            DamageMode::Auto
        }
    }
}

fn handle_analyze(args: &[String]) -> i32 {
    let Some(team_path) = args.get(2) else {
        eprintln!("usage: counterdex analyze <team.json> [--csv <path>] [--workers <n>]");
        return 2;
    };

    let raw = match fs::read_to_string(team_path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("failed to read team file '{team_path}': {err}");
            return 1;
        }
    };
    let config: TeamConfig = match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid team file '{team_path}': {err}");
            return 1;
        }
    };

    let registry = match load_registry_or_exit() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let pool = workers_flag(args);
    let analysis = pool.install(|| analyze_team(&registry, &config, &AnalysisScenario::default()));

    if let Some(csv_path) = csv_flag(args) {
        if let Err(err) = export_counter_rankings(Path::new(&csv_path), &analysis.counters) {
            eprintln!("failed to write CSV '{csv_path}': {err}");
            return 1;
        }
    }

    match serde_json::to_string_pretty(&analysis) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize analysis: {err}");
            1
        }
    }
}

fn csv_flag(args: &[String]) -> Option<String> {
    let position = args.iter().position(|arg| arg == "--csv")?;
    args.get(position + 1).cloned()
}

fn workers_flag(args: &[String]) -> WorkerPool {
    let Some(position) = args.iter().position(|arg| arg == "--workers") else {
        return WorkerPool::default_workers();
    };
    match args.get(position + 1).and_then(|arg| arg.parse().ok()) {
        Some(n) => WorkerPool::with_workers(n),
        None => {
            eprintln!("invalid --workers value, using all cores");
            WorkerPool::default_workers()
        }
    }
}

fn handle_validate() -> i32 {
    let registry = match load_registry_or_exit() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let report = validate_registry(&registry);
    if report.diagnostics.is_empty() {
        println!("validation passed: no issues");
        return 0;
    }
    for diagnostic in &report.diagnostics {
        println!("{diagnostic}");
    }
    if report.has_errors() {
        eprintln!("validation failed: errors present");
        1
    } else {
        0
    }
}
