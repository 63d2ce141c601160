//! Meta pressure: an aggregate "lose risk" heuristic from counter scores.
//!
//! This is a tuned risk indicator, not a probability with formal guarantees.
//! The logistic parameters are balance data; changing them shifts every
//! reported percentage.

use serde::Serialize;

use crate::analysis::counter::{rank_counters, CandidateScore};
use crate::analysis::team::PreparedSlot;
use crate::data::registry::DataRegistry;

/// How many of the strongest counters feed the average.
pub const TOP_SAMPLE: usize = 10;

const LOGISTIC_STEEPNESS: f64 = 8.0;
const LOGISTIC_MIDPOINT: f64 = 0.35;
const PERCENT_FLOOR: f64 = 5.0;
const PERCENT_CEILING: f64 = 95.0;
const HIGH_THRESHOLD: u32 = 70;
const MEDIUM_THRESHOLD: u32 = 45;

#[derive(Debug, Clone, Serialize)]
pub struct MetaPressure {
    pub label: &'static str,
    /// Absent when the pool was empty (the "N/A" sentinel).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lose_percent: Option<u32>,
    /// Number of pool members actually scored.
    pub sample_count: usize,
}

impl MetaPressure {
    pub const NOT_APPLICABLE: MetaPressure = MetaPressure {
        label: "N/A",
        lose_percent: None,
        sample_count: 0,
    };
}

fn label_for(percent: u32) -> &'static str {
    if percent >= HIGH_THRESHOLD {
        "High"
    } else if percent >= MEDIUM_THRESHOLD {
        "Medium"
    } else {
        "Low"
    }
}

/// Map already-ranked scores to a pressure estimate: average of the top
/// [TOP_SAMPLE] scores through a logistic curve, clamped to [5, 95].
pub fn pressure_from_scores(ranked: &[CandidateScore]) -> MetaPressure {
    if ranked.is_empty() {
        return MetaPressure::NOT_APPLICABLE;
    }
    let sample = &ranked[..ranked.len().min(TOP_SAMPLE)];
    let avg = sample.iter().map(|entry| entry.score).sum::<f64>() / sample.len() as f64;
    let raw = 100.0 / (1.0 + (-LOGISTIC_STEEPNESS * (avg - LOGISTIC_MIDPOINT)).exp());
    let percent = raw.clamp(PERCENT_FLOOR, PERCENT_CEILING).round() as u32;
    MetaPressure {
        label: label_for(percent),
        lose_percent: Some(percent),
        sample_count: ranked.len(),
    }
}

/// Score the whole meta pool against the team and fold into a pressure
/// estimate. Empty pool (or empty team) returns the "N/A" sentinel rather
/// than a fabricated number.
pub fn estimate_meta_pressure(
    registry: &DataRegistry,
    team: &[PreparedSlot],
    use_enhanced: bool,
) -> MetaPressure {
    let pool: Vec<String> = registry
        .meta_pool()
        .iter()
        .map(|entry| entry.name.clone())
        .collect();
    pressure_from_scores(&rank_counters(registry, team, &pool, use_enhanced))
}
