//! JSON payload builders for the HTTP routes. Parse/validation failures are
//! surfaced as typed errors so routes can map them to 4xx responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_team, AnalysisScenario, TeamConfig};
use crate::data::registry::DataRegistry;
use crate::engine::damage::{estimate_damage, pick_best_move, DamageMode, Move};
use crate::analysis::team::baseline_candidate;

#[derive(Debug)]
pub enum RequestError {
    Parse(serde_json::Error),
    UnknownCreature(String),
    NoMoves(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid request body: {err}"),
            Self::UnknownCreature(name) => write!(f, "unknown creature: {name}"),
            Self::NoMoves(name) => write!(f, "no move available for: {name}"),
        }
    }
}

impl std::error::Error for RequestError {}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "counterdex-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Clone, Serialize)]
struct CreatureListItem {
    name: String,
    elements: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rarity: Option<String>,
}

pub fn creatures_payload(registry: &DataRegistry) -> Result<String, serde_json::Error> {
    let list: Vec<CreatureListItem> = registry
        .creatures()
        .iter()
        .map(|record| CreatureListItem {
            name: record.name.clone(),
            elements: record.elements.iter().map(|e| e.as_str()).collect(),
            rarity: record.rarity.clone(),
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "creatures": list }))
}

#[derive(Debug, Clone, Serialize)]
struct RelicListItem {
    name: String,
    key: String,
    tier: u32,
}

pub fn relics_payload(registry: &DataRegistry) -> Result<String, serde_json::Error> {
    let list: Vec<RelicListItem> = registry
        .relics()
        .rows()
        .iter()
        .map(|row| RelicListItem {
            name: row.name.clone(),
            key: row.key(),
            tier: row.tier,
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "relics": list }))
}

pub fn meta_payload(registry: &DataRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({ "meta": registry.meta_pool() }))
}

#[derive(Debug, Clone, Deserialize)]
pub struct DamageRequest {
    pub attacker: String,
    pub defender: String,
    /// When absent, the best move by the selector's composite score is used.
    #[serde(default)]
    pub move_name: Option<String>,
    #[serde(default)]
    pub mode: DamageMode,
    #[serde(default)]
    pub use_enhanced: bool,
}

/// Banded damage estimate between two roster creatures at their baseline
/// builds (all-Green, no bonus, no relics).
pub fn damage_payload(registry: &DataRegistry, body: &str) -> Result<String, RequestError> {
    let request: DamageRequest = serde_json::from_str(body).map_err(RequestError::Parse)?;

    let attacker = baseline_candidate(registry, &request.attacker, request.use_enhanced)
        .ok_or_else(|| RequestError::UnknownCreature(request.attacker.clone()))?;
    let defender = baseline_candidate(registry, &request.defender, request.use_enhanced)
        .ok_or_else(|| RequestError::UnknownCreature(request.defender.clone()))?;

    let chosen: Move = match &request.move_name {
        Some(name) => attacker
            .moves
            .iter()
            .find(|mv| mv.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| RequestError::NoMoves(request.attacker.clone()))?,
        None => {
            pick_best_move(
                &attacker.moves,
                &attacker.stats,
                &defender.stats,
                &defender.elements,
            )
            .map(|best| best.chosen)
            .ok_or_else(|| RequestError::NoMoves(request.attacker.clone()))?
        }
    };

    let estimate = estimate_damage(
        &chosen,
        &attacker.stats,
        &defender.stats,
        &defender.elements,
        request.mode,
    );

    serde_json::to_string_pretty(&serde_json::json!({
        "attacker": attacker.name,
        "defender": defender.name,
        "move": chosen,
        "estimate": estimate,
    }))
    .map_err(RequestError::Parse)
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub team: TeamConfig,
    #[serde(default)]
    pub counter_limit: Option<usize>,
    #[serde(default)]
    pub use_enhanced: bool,
}

pub fn analyze_payload(registry: &DataRegistry, body: &str) -> Result<String, RequestError> {
    let request: AnalyzeRequest = serde_json::from_str(body).map_err(RequestError::Parse)?;
    let scenario = AnalysisScenario {
        counter_limit: request.counter_limit.unwrap_or(10),
        use_enhanced: request.use_enhanced,
    };
    let analysis = analyze_team(registry, &request.team, &scenario);
    serde_json::to_string_pretty(&analysis).map_err(RequestError::Parse)
}
