//! Stat bundles and derived-stat aggregation for a configured creature slot.
//!
//! Upstream JSON is loosely cased (`hp` / `HP` / `Hp`); serde aliases absorb
//! that here, once, at deserialization time. Nothing downstream branches on
//! field-name casing.

use serde::{Deserialize, Serialize};

use crate::engine::growth::{stat_at_level, ColorTier, COMPETITIVE_LEVEL};

/// Flat additive stat bundle (relic contributions, aggregate sums).
/// Missing fields deserialize to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatBundle {
    #[serde(default, alias = "HP", alias = "Hp")]
    pub hp: f64,
    #[serde(default, alias = "Speed", alias = "SPD")]
    pub speed: f64,
    #[serde(default, alias = "elementalAttack", alias = "EA")]
    pub elemental_attack: f64,
    #[serde(default, alias = "physicalAttack", alias = "PA")]
    pub physical_attack: f64,
    #[serde(default, alias = "elementalDefense", alias = "ED")]
    pub elemental_defense: f64,
    #[serde(default, alias = "physicalDefense", alias = "PD")]
    pub physical_defense: f64,
}

impl StatBundle {
    pub const ZERO: StatBundle = StatBundle {
        hp: 0.0,
        speed: 0.0,
        elemental_attack: 0.0,
        physical_attack: 0.0,
        elemental_defense: 0.0,
        physical_defense: 0.0,
    };

    pub fn add_from(&mut self, other: &StatBundle) {
        self.hp += sanitize(other.hp);
        self.speed += sanitize(other.speed);
        self.elemental_attack += sanitize(other.elemental_attack);
        self.physical_attack += sanitize(other.physical_attack);
        self.elemental_defense += sanitize(other.elemental_defense);
        self.physical_defense += sanitize(other.physical_defense);
    }
}

/// A creature's innate stats at the fixed low reference level. Immutable
/// reference data, seed for the growth curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseStats15 {
    #[serde(default, alias = "HP", alias = "Hp")]
    pub hp: f64,
    #[serde(default, alias = "Speed", alias = "SPD")]
    pub speed: f64,
    #[serde(default, alias = "elementalAttack", alias = "EA")]
    pub elemental_attack: f64,
    #[serde(default, alias = "physicalAttack", alias = "PA")]
    pub physical_attack: f64,
    #[serde(default, alias = "elementalDefense", alias = "ED")]
    pub elemental_defense: f64,
    #[serde(default, alias = "physicalDefense", alias = "PD")]
    pub physical_defense: f64,
}

/// One color tier per stat. Absent fields default to Green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorSet {
    #[serde(default)]
    pub hp: ColorTier,
    #[serde(default)]
    pub speed: ColorTier,
    #[serde(default)]
    pub elemental_attack: ColorTier,
    #[serde(default)]
    pub physical_attack: ColorTier,
    #[serde(default)]
    pub elemental_defense: ColorTier,
    #[serde(default)]
    pub physical_defense: ColorTier,
}

impl ColorSet {
    /// All-Green set used for hypothetical baseline builds.
    pub const ALL_GREEN: ColorSet = ColorSet {
        hp: ColorTier::Green,
        speed: ColorTier::Green,
        elemental_attack: ColorTier::Green,
        physical_attack: ColorTier::Green,
        elemental_defense: ColorTier::Green,
        physical_defense: ColorTier::Green,
    };
}

/// Manually allocated bonus points, added verbatim to the derived stat.
/// Negative or non-finite values are clamped to 0 at the point of use; no
/// invariant ties the allocation total to a level here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BonusAllocation {
    #[serde(default)]
    pub hp: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub elemental_attack: f64,
    #[serde(default)]
    pub physical_attack: f64,
    #[serde(default)]
    pub elemental_defense: f64,
    #[serde(default)]
    pub physical_defense: f64,
}

/// Final stats for a slot at the competitive level. Cheap to recompute; never
/// cached beyond the current slot configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedStats {
    pub hp: f64,
    pub speed: f64,
    pub elemental_attack: f64,
    pub physical_attack: f64,
    pub elemental_defense: f64,
    pub physical_defense: f64,
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Derived stats at the competitive level from base data, colors, bonus
/// points, and the summed relic bundle.
///
/// Returns `None` when base data is absent (unknown creature) so callers can
/// distinguish an empty slot from a zero-stat one. Pure: same inputs, same
/// output.
pub fn compute_derived_stats(
    base: Option<&BaseStats15>,
    colors: &ColorSet,
    bonus: &BonusAllocation,
    relic_bundle: &StatBundle,
) -> Option<DerivedStats> {
    let base = base?;
    let level = COMPETITIVE_LEVEL;
    let one = |seed: f64, color: ColorTier, extra: f64, relic: f64, is_hp: bool| {
        stat_at_level(seed, level, color, is_hp) + sanitize(extra) + sanitize(relic)
    };
    Some(DerivedStats {
        hp: one(base.hp, colors.hp, bonus.hp, relic_bundle.hp, true),
        speed: one(base.speed, colors.speed, bonus.speed, relic_bundle.speed, false),
        elemental_attack: one(
            base.elemental_attack,
            colors.elemental_attack,
            bonus.elemental_attack,
            relic_bundle.elemental_attack,
            false,
        ),
        physical_attack: one(
            base.physical_attack,
            colors.physical_attack,
            bonus.physical_attack,
            relic_bundle.physical_attack,
            false,
        ),
        elemental_defense: one(
            base.elemental_defense,
            colors.elemental_defense,
            bonus.elemental_defense,
            relic_bundle.elemental_defense,
            false,
        ),
        physical_defense: one(
            base.physical_defense,
            colors.physical_defense,
            bonus.physical_defense,
            relic_bundle.physical_defense,
            false,
        ),
    })
}
