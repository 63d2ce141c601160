//! Stat growth curves: base-15 seed values scaled to a target level.
//!
//! The curve constants mirror the original game's tuning exactly. They are
//! balance data, not derivable values.

use serde::{Deserialize, Deserializer, Serialize};

/// Fixed competitive level used by every downstream consumer.
pub const COMPETITIVE_LEVEL: u32 = 35;

/// Per-stat quality tier acting as a growth-rate input (IV-like).
///
/// The source tool defaulted inconsistently (White in some call sites, Green
/// in others); this implementation defaults to Green uniformly, including for
/// unrecognized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Red,
    White,
    #[default]
    Green,
}

/// Colors arrive from the same loosely cased JSON as elements do; any string
/// coerces through [ColorTier::parse] rather than failing the record.
impl<'de> Deserialize<'de> for ColorTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ColorTier::parse(&raw))
    }
}

impl ColorTier {
    /// Growth factor fed into the per-level curve.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Red => 1.0,
            Self::White => 2.0,
            Self::Green => 3.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::White => "white",
            Self::Green => "green",
        }
    }

    /// Case-insensitive parse; anything unrecognized falls back to Green.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "red" => Self::Red,
            "white" => Self::White,
            _ => Self::Green,
        }
    }
}

/// Final stat at `level` for a base-15 seed and color tier.
///
/// HP grows on a steeper curve than the other five stats. The result is an
/// integral value (floored). Non-finite bases are coerced to 0 and the level
/// is clamped to `[1, COMPETITIVE_LEVEL]`; this never panics.
pub fn stat_at_level(base15: f64, level: u32, color: ColorTier, is_hp: bool) -> f64 {
    let base = if base15.is_finite() { base15 } else { 0.0 };
    let level = level.clamp(1, COMPETITIVE_LEVEL) as f64;
    let color_factor = color.factor();

    if is_hp {
        let per_level = (12.0 + 2.0 * base + 1.5 * color_factor) / 5.0;
        (per_level * level + 10.0).floor()
    } else {
        let per_level = (3.0 + 2.0 * base + 1.5 * color_factor) / 6.0;
        (per_level * level + 5.0).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_color_parses_as_green() {
        assert_eq!(ColorTier::parse("GREEN"), ColorTier::Green);
        assert_eq!(ColorTier::parse("  White "), ColorTier::White);
        assert_eq!(ColorTier::parse("purple"), ColorTier::Green);
        assert_eq!(ColorTier::parse(""), ColorTier::Green);
    }

    #[test]
    fn json_colors_coerce_instead_of_failing() {
        let parsed: Vec<ColorTier> =
            serde_json::from_str(r#"["RED", "Green", "white", "purple", ""]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                ColorTier::Red,
                ColorTier::Green,
                ColorTier::White,
                ColorTier::Green,
                ColorTier::Green,
            ]
        );
        assert_eq!(serde_json::to_string(&ColorTier::Red).unwrap(), "\"red\"");
    }

    #[test]
    fn level_is_clamped_to_competitive_range() {
        let at_floor = stat_at_level(30.0, 0, ColorTier::Green, false);
        let at_one = stat_at_level(30.0, 1, ColorTier::Green, false);
        let at_cap = stat_at_level(30.0, COMPETITIVE_LEVEL, ColorTier::Green, false);
        let past_cap = stat_at_level(30.0, 99, ColorTier::Green, false);
        assert_eq!(at_floor, at_one);
        assert_eq!(at_cap, past_cap);
    }

    #[test]
    fn non_finite_base_coerces_to_zero() {
        let from_nan = stat_at_level(f64::NAN, 35, ColorTier::Green, true);
        let from_zero = stat_at_level(0.0, 35, ColorTier::Green, true);
        assert_eq!(from_nan, from_zero);
    }
}
