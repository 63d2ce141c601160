//! Team configuration and per-run slot preparation.
//!
//! A team is exactly four slots, any of which may be empty. Slot
//! configurations are the serializable shape an external persistence layer
//! round-trips; `PreparedSlot` is the resolved, per-run form with derived
//! stats computed exactly once and reused by every downstream scorer.

use serde::{Deserialize, Serialize};

use crate::data::registry::DataRegistry;
use crate::data::relic::{sum_relic_bonuses, RelicSlots};
use crate::engine::damage::{select_move_list, Move};
use crate::engine::stats::{
    compute_derived_stats, BonusAllocation, ColorSet, DerivedStats, StatBundle,
};
use crate::engine::types::Element;

pub const TEAM_SIZE: usize = 4;

/// One slot as configured by the player: creature name, quality colors,
/// bonus points, and equipped relics by tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamSlotConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creature: Option<String>,
    #[serde(default)]
    pub colors: ColorSet,
    #[serde(default)]
    pub bonus: BonusAllocation,
    #[serde(default)]
    pub relics: RelicSlots,
}

impl TeamSlotConfig {
    pub fn is_empty(&self) -> bool {
        self.creature
            .as_deref()
            .map_or(true, |name| name.trim().is_empty())
    }
}

/// Full team configuration. Extra slots beyond [TEAM_SIZE] are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamConfig {
    #[serde(default)]
    pub slots: Vec<TeamSlotConfig>,
}

/// A filled slot resolved for one analysis run.
#[derive(Debug, Clone)]
pub struct PreparedSlot {
    pub slot_index: usize,
    pub name: String,
    pub elements: Vec<Element>,
    pub stats: DerivedStats,
    pub moves: Vec<Move>,
}

/// Resolve every filled slot once. Empty slots and unknown creatures are
/// skipped; the result holds only the slots the scorers can work with.
pub fn prepare_team(
    registry: &DataRegistry,
    config: &TeamConfig,
    use_enhanced: bool,
) -> Vec<PreparedSlot> {
    config
        .slots
        .iter()
        .take(TEAM_SIZE)
        .enumerate()
        .filter_map(|(slot_index, slot)| prepare_slot(registry, slot_index, slot, use_enhanced))
        .collect()
}

fn prepare_slot(
    registry: &DataRegistry,
    slot_index: usize,
    slot: &TeamSlotConfig,
    use_enhanced: bool,
) -> Option<PreparedSlot> {
    if slot.is_empty() {
        return None;
    }
    let record = registry.resolve_creature(slot.creature.as_deref()?)?;
    let relic_bundle = sum_relic_bonuses(&slot.relics, registry.relics());
    let stats = compute_derived_stats(Some(&record.base), &slot.colors, &slot.bonus, &relic_bundle)?;
    let moves = select_move_list(&record.moves, &record.enhanced_moves, use_enhanced).to_vec();
    Some(PreparedSlot {
        slot_index,
        name: record.name.clone(),
        elements: record.elements.clone(),
        stats,
        moves,
    })
}

/// The fixed hypothetical build used for creatures the player does not own:
/// all-Green colors, no bonus points, no relics. Keeps candidate scores
/// independent of any specific player build.
pub fn baseline_candidate(
    registry: &DataRegistry,
    name: &str,
    use_enhanced: bool,
) -> Option<PreparedSlot> {
    let record = registry.resolve_creature(name)?;
    let stats = compute_derived_stats(
        Some(&record.base),
        &ColorSet::ALL_GREEN,
        &BonusAllocation::default(),
        &StatBundle::ZERO,
    )?;
    let moves = select_move_list(&record.moves, &record.enhanced_moves, use_enhanced).to_vec();
    Some(PreparedSlot {
        slot_index: 0,
        name: record.name.clone(),
        elements: record.elements.clone(),
        stats,
        moves,
    })
}
