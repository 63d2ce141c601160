//! Counter scoring: how well a baseline-built candidate trades against an
//! existing team, and the parallel ranked scan over a candidate pool.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;

use crate::data::loader::normalize_name;
use crate::data::registry::DataRegistry;
use crate::analysis::team::{baseline_candidate, PreparedSlot};
use crate::engine::damage::pick_best_ratio;
use crate::parallel::batch_ranges;

pub const OFFENSE_WEIGHT: f64 = 0.65;
pub const DEFENSE_WEIGHT: f64 = 0.35;

/// Number of progress-reporting batches for ranked scans driving a UI.
const RANK_PROGRESS_BATCH_COUNT: usize = 20;

/// Ephemeral scoring result for one candidate; recomputed per analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateScore {
    pub name: String,
    pub score: f64,
    pub avg_offense: f64,
    pub avg_defense: f64,
}

/// Score a candidate against every filled team slot.
///
/// Per slot, offense is the candidate's best damage relative to the slot's
/// HP and defense is `1 -` the slot's best damage relative to the candidate's
/// HP. Offense may exceed 1; defense may go negative, which correctly signals
/// "the candidate dies instantly" and is deliberately not clamped. Returns
/// `None` when no slots are filled.
pub fn score_candidate(candidate: &PreparedSlot, team: &[PreparedSlot]) -> Option<CandidateScore> {
    if team.is_empty() {
        return None;
    }

    let mut offense_sum = 0.0;
    let mut defense_sum = 0.0;
    for slot in team {
        let dealt = pick_best_ratio(&candidate.moves, &candidate.stats, &slot.stats, &slot.elements)
            .map_or(0.0, |pick| pick.damage);
        let taken = pick_best_ratio(&slot.moves, &slot.stats, &candidate.stats, &candidate.elements)
            .map_or(0.0, |pick| pick.damage);
        offense_sum += dealt / slot.stats.hp.max(1.0);
        defense_sum += 1.0 - taken / candidate.stats.hp.max(1.0);
    }

    let count = team.len() as f64;
    let avg_offense = offense_sum / count;
    let avg_defense = defense_sum / count;
    Some(CandidateScore {
        name: candidate.name.clone(),
        score: OFFENSE_WEIGHT * avg_offense + DEFENSE_WEIGHT * avg_defense,
        avg_offense,
        avg_defense,
    })
}

fn team_name_set(team: &[PreparedSlot]) -> HashSet<String> {
    team.iter().map(|slot| normalize_name(&slot.name)).collect()
}

fn sort_ranked(ranked: &mut Vec<CandidateScore>) {
    // Deterministic regardless of worker completion order: score descending,
    // name ascending as tiebreak.
    ranked.sort_by(|left, right| {
        right
            .score
            .total_cmp(&left.score)
            .then_with(|| left.name.cmp(&right.name))
    });
}

fn score_pool_entry(
    registry: &DataRegistry,
    team: &[PreparedSlot],
    excluded: &HashSet<String>,
    name: &str,
    use_enhanced: bool,
) -> Option<CandidateScore> {
    if excluded.contains(&normalize_name(name)) {
        return None;
    }
    let candidate = baseline_candidate(registry, name, use_enhanced)?;
    score_candidate(&candidate, team)
}

/// Score a candidate pool against the team and rank the results. Creatures
/// already on the team are excluded; unknown pool names are skipped. The team
/// slots are prepared once by the caller and shared read-only across Rayon
/// workers.
pub fn rank_counters(
    registry: &DataRegistry,
    team: &[PreparedSlot],
    pool: &[String],
    use_enhanced: bool,
) -> Vec<CandidateScore> {
    if team.is_empty() {
        return Vec::new();
    }
    let excluded = team_name_set(team);
    let mut ranked: Vec<CandidateScore> = pool
        .par_iter()
        .filter_map(|name| score_pool_entry(registry, team, &excluded, name, use_enhanced))
        .collect();
    sort_ranked(&mut ranked);
    ranked
}

/// Like [rank_counters] but runs in batches and invokes
/// `on_progress(done, total)` after each batch. For UI-driven scans.
pub fn rank_counters_with_progress<F>(
    registry: &DataRegistry,
    team: &[PreparedSlot],
    pool: &[String],
    use_enhanced: bool,
    mut on_progress: F,
) -> Vec<CandidateScore>
where
    F: FnMut(u32, u32),
{
    if team.is_empty() || pool.is_empty() {
        return Vec::new();
    }
    let excluded = team_name_set(team);
    let total = pool.len();
    on_progress(0, total as u32);

    let num_batches = RANK_PROGRESS_BATCH_COUNT.min(total);
    let mut ranked: Vec<CandidateScore> = Vec::with_capacity(total);
    for (start, end) in batch_ranges(total, num_batches) {
        let batch: Vec<CandidateScore> = pool[start..end]
            .par_iter()
            .filter_map(|name| score_pool_entry(registry, team, &excluded, name, use_enhanced))
            .collect();
        ranked.extend(batch);
        on_progress(end as u32, total as u32);
    }
    sort_ranked(&mut ranked);
    ranked
}
