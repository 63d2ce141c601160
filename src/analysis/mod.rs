pub mod counter;
pub mod export_csv;
pub mod mitigation;
pub mod pressure;
pub mod team;

use serde::Serialize;

pub use counter::{
    rank_counters, rank_counters_with_progress, score_candidate, CandidateScore, DEFENSE_WEIGHT,
    OFFENSE_WEIGHT,
};
pub use export_csv::{export_counter_rankings, write_counter_rankings};
pub use mitigation::{suggest_mitigation, FocusStat, MitigationAdvice, MITIGATION_TIER};
pub use pressure::{estimate_meta_pressure, pressure_from_scores, MetaPressure, TOP_SAMPLE};
pub use team::{baseline_candidate, prepare_team, PreparedSlot, TeamConfig, TeamSlotConfig, TEAM_SIZE};

use crate::data::registry::DataRegistry;

/// How an analysis run is parameterized.
#[derive(Debug, Clone)]
pub struct AnalysisScenario {
    /// How many ranked counters to report (the full pool is still scored for
    /// the pressure estimate).
    pub counter_limit: usize,
    /// Use enhanced move lists where a creature has one.
    pub use_enhanced: bool,
}

impl Default for AnalysisScenario {
    fn default() -> Self {
        Self {
            counter_limit: 10,
            use_enhanced: false,
        }
    }
}

/// One full analysis over a team. A new run fully replaces any previous
/// result; nothing is merged.
#[derive(Debug, Clone, Serialize)]
pub struct TeamAnalysis {
    pub analysis_id: String,
    pub generated_at: String,
    pub filled_slots: usize,
    pub counters: Vec<CandidateScore>,
    pub pressure: MetaPressure,
    /// Suggestion against the strongest counter, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<MitigationAdvice>,
}

/// Run the whole analysis: prepare the team once, score the meta pool, fold
/// the scores into a pressure estimate, and suggest a relic swap against the
/// top counter.
pub fn analyze_team(
    registry: &DataRegistry,
    config: &TeamConfig,
    scenario: &AnalysisScenario,
) -> TeamAnalysis {
    let team = prepare_team(registry, config, scenario.use_enhanced);
    let pool: Vec<String> = registry
        .meta_pool()
        .iter()
        .map(|entry| entry.name.clone())
        .collect();

    let ranked = rank_counters(registry, &team, &pool, scenario.use_enhanced);
    let pressure = pressure_from_scores(&ranked);
    let mitigation = ranked.first().and_then(|top| {
        suggest_mitigation(registry, config, &team, &top.name, scenario.use_enhanced)
    });

    let mut counters = ranked;
    counters.truncate(scenario.counter_limit);

    TeamAnalysis {
        analysis_id: uuid::Uuid::new_v4().to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        filled_slots: team.len(),
        counters,
        pressure,
        mitigation,
    }
}
