//! Damage estimation between two derived stat blocks, and best-move
//! selection.
//!
//! Two sanctioned formulas exist for two different purposes: the ±10% banded
//! floor form backs every user-facing number, while the cheaper
//! `(atk+1)/(def+1)` ratio form backs internal candidate ranking where only
//! ordering matters. They are intentionally not reconciled.

use serde::{Deserialize, Deserializer, Serialize};

use crate::engine::stats::DerivedStats;
use crate::engine::types::{multiplier, Element};

/// Variance band applied around the base per-hit damage for displayed ranges.
pub const DAMAGE_BAND: f64 = 0.1;

/// Saturation for the hits-to-kill term of the move score; unreachable kills
/// contribute the full penalty.
const HTK_SCORE_CAP: f64 = 999.0;

/// A move from a creature's fixed list. `element: None` means physical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(default, alias = "ap", alias = "AP")]
    pub power: f64,
    #[serde(default, deserialize_with = "element_from_loose")]
    pub element: Option<Element>,
    #[serde(default = "default_hits")]
    pub hits: u32,
}

const fn default_hits() -> u32 {
    1
}

/// Accepts any string for the element field; "physical", empty, or unknown
/// values become `None` instead of failing the whole record.
fn element_from_loose<'de, D>(deserializer: D) -> Result<Option<Element>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Element::parse))
}

/// Which attack/defense pair the estimator uses. Auto follows the move's
/// element; the forced modes back what-if comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageMode {
    #[default]
    Auto,
    Physical,
    Elemental,
}

/// Banded single-exchange estimate. `hits_to_kill` is `None` when the
/// average rounds to zero (the defender is effectively unkillable by this
/// move).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageEstimate {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub hits_to_kill: Option<u32>,
}

fn uses_elemental_pair(mv: &Move, mode: DamageMode) -> bool {
    match mode {
        DamageMode::Auto => mv.element.is_some(),
        DamageMode::Physical => false,
        DamageMode::Elemental => true,
    }
}

fn sanitize_power(power: f64) -> f64 {
    if power.is_finite() {
        power.max(0.0)
    } else {
        0.0
    }
}

/// Attack and defense stats for the selected pair, floored at 1 so ratios
/// never divide by zero or go negative.
fn stat_pair(
    mv: &Move,
    attacker: &DerivedStats,
    defender: &DerivedStats,
    mode: DamageMode,
) -> (f64, f64) {
    if uses_elemental_pair(mv, mode) {
        (
            attacker.elemental_attack.max(1.0),
            defender.elemental_defense.max(1.0),
        )
    } else {
        (
            attacker.physical_attack.max(1.0),
            defender.physical_defense.max(1.0),
        )
    }
}

/// User-facing banded estimate: per-hit `floor(ap * atk/def * mult * 0.9)`
/// to `floor(.. * 1.1)`, scaled by hit count, with `avg` the floored midpoint
/// and `hits_to_kill = ceil(hp / avg)` guarded against a zero average.
pub fn estimate_damage(
    mv: &Move,
    attacker: &DerivedStats,
    defender: &DerivedStats,
    defender_types: &[Element],
    mode: DamageMode,
) -> DamageEstimate {
    let power = sanitize_power(mv.power);
    let hits = mv.hits.max(1) as f64;
    let (atk, def) = stat_pair(mv, attacker, defender, mode);
    let type_multiplier = multiplier(mv.element, defender_types);

    let per_hit = power * atk / def * type_multiplier;
    let per_hit_min = (per_hit * (1.0 - DAMAGE_BAND)).floor().max(0.0);
    let per_hit_max = (per_hit * (1.0 + DAMAGE_BAND)).floor().max(0.0);

    let min = per_hit_min * hits;
    let max = per_hit_max * hits;
    let avg = ((min + max) / 2.0).floor();

    let hits_to_kill = if avg > 0.0 {
        Some((defender.hp.max(0.0) / avg).ceil() as u32)
    } else {
        None
    };

    DamageEstimate {
        min,
        max,
        avg,
        hits_to_kill,
    }
}

/// Ranking-only damage value: `ap * hits * (atk+1)/(def+1) * mult`.
/// Monotonic-equivalent to the banded form and cheaper to evaluate across a
/// large candidate pool.
pub fn ratio_damage(
    mv: &Move,
    attacker: &DerivedStats,
    defender: &DerivedStats,
    defender_types: &[Element],
) -> f64 {
    let power = sanitize_power(mv.power);
    let hits = mv.hits.max(1) as f64;
    let (atk, def) = stat_pair(mv, attacker, defender, DamageMode::Auto);
    power * hits * (atk + 1.0) / (def + 1.0) * multiplier(mv.element, defender_types)
}

/// The enhanced list when selected and non-empty, otherwise the base list.
pub fn select_move_list<'a>(base: &'a [Move], enhanced: &'a [Move], use_enhanced: bool) -> &'a [Move] {
    if use_enhanced && !enhanced.is_empty() {
        enhanced
    } else {
        base
    }
}

/// A move chosen by [pick_best_move], with its estimate and composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMove {
    #[serde(rename = "move")]
    pub chosen: Move,
    pub estimate: DamageEstimate,
    pub score: f64,
}

fn move_score(estimate: &DamageEstimate) -> f64 {
    let htk_term = estimate
        .hits_to_kill
        .map(|htk| (htk as f64) * 100.0)
        .unwrap_or(f64::INFINITY)
        .min(HTK_SCORE_CAP);
    1000.0 - htk_term + estimate.avg / 10.0
}

/// Pick the move maximizing `1000 - min(999, htk*100) + avg/10`: low
/// hits-to-kill dominates, average damage breaks ties. Returns `None` for an
/// empty move list; ties keep the earliest move.
pub fn pick_best_move(
    moves: &[Move],
    attacker: &DerivedStats,
    defender: &DerivedStats,
    defender_types: &[Element],
) -> Option<BestMove> {
    let mut best: Option<BestMove> = None;
    for mv in moves {
        let estimate = estimate_damage(mv, attacker, defender, defender_types, DamageMode::Auto);
        let score = move_score(&estimate);
        let improves = best.as_ref().map_or(true, |current| score > current.score);
        if improves {
            best = Some(BestMove {
                chosen: mv.clone(),
                estimate,
                score,
            });
        }
    }
    best
}

/// Best move under the ratio form, for candidate ranking. Carries the chosen
/// move's element so callers can tell physical from elemental pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPick {
    pub damage: f64,
    pub element: Option<Element>,
}

pub fn pick_best_ratio(
    moves: &[Move],
    attacker: &DerivedStats,
    defender: &DerivedStats,
    defender_types: &[Element],
) -> Option<RatioPick> {
    let mut best: Option<RatioPick> = None;
    for mv in moves {
        let damage = ratio_damage(mv, attacker, defender, defender_types);
        let improves = best.map_or(true, |current| damage > current.damage);
        if improves {
            best = Some(RatioPick {
                damage,
                element: mv.element,
            });
        }
    }
    best
}
