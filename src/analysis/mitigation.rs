//! Relic mitigation: given the team's weakest matchup against a specific
//! counter, propose the tier-35 relic that best shores up the relevant
//! defensive stat and HP.

use serde::Serialize;

use crate::analysis::team::{baseline_candidate, PreparedSlot, TeamConfig};
use crate::data::registry::DataRegistry;
use crate::data::relic::{canonical_relic_key, RelicRecord};
use crate::engine::damage::pick_best_ratio;

/// The gear slot this advisor works on.
pub const MITIGATION_TIER: u32 = 35;

/// Relic ranking weights: the focus defensive stat dominates, HP matters,
/// speed is a light tiebreaker. Balance data.
pub const FOCUS_WEIGHT: f64 = 1.3;
pub const HP_WEIGHT: f64 = 0.6;
pub const SPEED_WEIGHT: f64 = 0.1;

/// Which defensive stat the suggested relic should raise, determined by the
/// counter's best move against the weakest slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusStat {
    PhysicalDefense,
    ElementalDefense,
}

impl FocusStat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhysicalDefense => "physical defense",
            Self::ElementalDefense => "elemental defense",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MitigationAdvice {
    pub target_slot_index: usize,
    pub target_name: String,
    pub counter_name: String,
    pub focus_stat: FocusStat,
    pub recommended_relic_key: String,
    /// Human-readable justification for display.
    pub note: String,
}

fn relic_score(row: &RelicRecord, focus: FocusStat) -> f64 {
    let focus_bonus = match focus {
        FocusStat::PhysicalDefense => row.bundle.physical_defense,
        FocusStat::ElementalDefense => row.bundle.elemental_defense,
    };
    FOCUS_WEIGHT * focus_bonus + HP_WEIGHT * row.bundle.hp + SPEED_WEIGHT * row.bundle.speed
}

/// Suggest the best tier-35 relic swap against `counter_name`.
///
/// The weakest link is the filled slot taking the highest best-damage-to-HP
/// ratio from the counter's baseline build. The currently equipped tier-35
/// relic is not re-suggested when an equal-or-better alternative exists; if
/// it strictly outranks everything else, the advice is to keep it. Returns
/// `None` when the team is empty, the counter is unknown, or the catalog has
/// no tier-35 rows.
pub fn suggest_mitigation(
    registry: &DataRegistry,
    config: &TeamConfig,
    team: &[PreparedSlot],
    counter_name: &str,
    use_enhanced: bool,
) -> Option<MitigationAdvice> {
    let counter = baseline_candidate(registry, counter_name, use_enhanced)?;

    let mut weakest: Option<(&PreparedSlot, f64, Option<crate::engine::types::Element>)> = None;
    for slot in team {
        let pick = pick_best_ratio(&counter.moves, &counter.stats, &slot.stats, &slot.elements);
        let (damage, element) = pick.map_or((0.0, None), |p| (p.damage, p.element));
        let ratio = damage / slot.stats.hp.max(1.0);
        let worse = weakest
            .as_ref()
            .map_or(true, |(_, current, _)| ratio > *current);
        if worse {
            weakest = Some((slot, ratio, element));
        }
    }
    let (slot, _, element) = weakest?;

    let focus = if element.is_some() {
        FocusStat::ElementalDefense
    } else {
        FocusStat::PhysicalDefense
    };

    let mut ranked: Vec<(&RelicRecord, f64)> = registry
        .relics()
        .tier_rows(MITIGATION_TIER)
        .map(|row| (row, relic_score(row, focus)))
        .collect();
    if ranked.is_empty() {
        return None;
    }
    ranked.sort_by(|left, right| {
        right
            .1
            .total_cmp(&left.1)
            .then_with(|| left.0.key().cmp(&right.0.key()))
    });

    let current_key = config
        .slots
        .get(slot.slot_index)
        .and_then(|s| s.relics.tier35.as_deref())
        .map(canonical_relic_key);
    let top = ranked[0];
    let chosen = match &current_key {
        Some(current) if top.0.key() == *current => ranked
            .iter()
            .find(|(row, score)| row.key() != *current && *score >= top.1)
            .copied()
            .unwrap_or(top),
        _ => top,
    };

    let chosen_key = chosen.0.key();
    let keeps_current = current_key.as_deref() == Some(chosen_key.as_str());
    let note = if keeps_current {
        format!(
            "Slot {} ({}) takes the heaviest hit from {}; its equipped relic already maximizes {} and HP",
            slot.slot_index + 1,
            slot.name,
            counter.name,
            focus.as_str(),
        )
    } else {
        format!(
            "Slot {} ({}) takes the heaviest hit from {}; swap the level-35 relic to {} to raise {} and HP",
            slot.slot_index + 1,
            slot.name,
            counter.name,
            chosen.0.name,
            focus.as_str(),
        )
    };

    Some(MitigationAdvice {
        target_slot_index: slot.slot_index,
        target_name: slot.name.clone(),
        counter_name: counter.name,
        focus_stat: focus,
        recommended_relic_key: chosen_key,
        note,
    })
}
