//! Six-element dominance cycle and attack-type multipliers.
//!
//! Each element is strong against exactly one other and weak against exactly
//! one other: a single cycle Fire → Nature → Ice → Wind → Earth → Water →
//! Fire. Physical attacks carry no element and are always neutral.

use serde::{Deserialize, Serialize};

pub const STRONG_MULTIPLIER: f64 = 2.0;
pub const WEAK_MULTIPLIER: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Nature,
    Ice,
    Wind,
    Earth,
    Water,
}

impl Element {
    /// Dominance order: each element is strong against the next (wrapping).
    pub const CYCLE: [Element; 6] = [
        Element::Fire,
        Element::Nature,
        Element::Ice,
        Element::Wind,
        Element::Earth,
        Element::Water,
    ];

    /// The element this one deals 2x damage to.
    pub const fn strong_against(self) -> Element {
        match self {
            Self::Fire => Self::Nature,
            Self::Nature => Self::Ice,
            Self::Ice => Self::Wind,
            Self::Wind => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
        }
    }

    /// The element this one deals 0.5x damage to (reverse of the cycle).
    pub const fn weak_against(self) -> Element {
        match self {
            Self::Fire => Self::Water,
            Self::Nature => Self::Fire,
            Self::Ice => Self::Nature,
            Self::Wind => Self::Ice,
            Self::Earth => Self::Wind,
            Self::Water => Self::Earth,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Nature => "nature",
            Self::Ice => "ice",
            Self::Wind => "wind",
            Self::Earth => "earth",
            Self::Water => "water",
        }
    }

    /// Case-insensitive parse. "physical", empty, or unknown strings resolve
    /// to `None` (elementless, multiplier-neutral).
    pub fn parse(value: &str) -> Option<Element> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fire" => Some(Self::Fire),
            "nature" => Some(Self::Nature),
            "ice" => Some(Self::Ice),
            "wind" => Some(Self::Wind),
            "earth" => Some(Self::Earth),
            "water" => Some(Self::Water),
            _ => None,
        }
    }
}

fn single_multiplier(attack: Element, defender: Element) -> f64 {
    if attack.strong_against() == defender {
        STRONG_MULTIPLIER
    } else if attack.weak_against() == defender {
        WEAK_MULTIPLIER
    } else {
        1.0
    }
}

/// Combined attack multiplier against a defender's typing (1-2 types in
/// practice).
///
/// Per-type multipliers are combined by product, so a dual-weak defender
/// takes 4x rather than 2x. An elementless attack or empty defender typing is
/// neutral. The result is always positive.
pub fn multiplier(attack: Option<Element>, defender_types: &[Element]) -> f64 {
    let Some(attack) = attack else {
        return 1.0;
    };
    defender_types
        .iter()
        .map(|defender| single_multiplier(attack, *defender))
        .product()
}
