//! Relic catalog: gear-like items contributing a flat stat bundle, each valid
//! at exactly one level tier. Slotting a relic into the wrong tier
//! contributes nothing; there is no cross-tier fallback.

use std::collections::HashMap;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::engine::stats::StatBundle;

pub const DEFAULT_RELICS_PATH: &str = "data/relics.json";

/// The four fixed gear tiers, by required level.
pub const RELIC_TIERS: [u32; 4] = [10, 20, 30, 35];

/// Canonical relic identity key: uppercase, apostrophes stripped, any run of
/// non-alphanumeric characters collapsed to a single underscore, trimmed.
/// Two display strings with the same key are the same relic.
pub fn canonical_relic_key(display: &str) -> String {
    let mut key = String::with_capacity(display.len());
    let mut pending_separator = false;
    for ch in display.chars() {
        if ch == '\'' || ch == '\u{2019}' {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_separator && !key.is_empty() {
                key.push('_');
            }
            pending_separator = false;
            key.extend(ch.to_uppercase());
        } else {
            pending_separator = true;
        }
    }
    key
}

/// One catalog row: a relic at its required tier with its stat bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelicRecord {
    pub name: String,
    #[serde(alias = "level")]
    pub tier: u32,
    #[serde(default, alias = "stats", alias = "bonus")]
    pub bundle: StatBundle,
}

impl RelicRecord {
    pub fn key(&self) -> String {
        canonical_relic_key(&self.name)
    }
}

/// Indexed relic lookup, keyed strictly by `(tier, canonical key)`.
#[derive(Debug, Clone, Default)]
pub struct RelicCatalog {
    rows: Vec<RelicRecord>,
    by_tier_key: HashMap<(u32, String), StatBundle>,
}

impl RelicCatalog {
    pub fn from_records(rows: Vec<RelicRecord>) -> Self {
        let by_tier_key = rows
            .iter()
            .map(|row| ((row.tier, row.key()), row.bundle))
            .collect();
        RelicCatalog { rows, by_tier_key }
    }

    pub fn rows(&self) -> &[RelicRecord] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bundle for a relic at exactly this tier. Accepts a display string or a
    /// canonical key; wrong tier or unknown key is `None`.
    pub fn lookup(&self, tier: u32, name_or_key: &str) -> Option<&StatBundle> {
        self.by_tier_key
            .get(&(tier, canonical_relic_key(name_or_key)))
    }

    /// All catalog rows at one tier, for re-ranking alternatives.
    pub fn tier_rows(&self, tier: u32) -> impl Iterator<Item = &RelicRecord> {
        self.rows.iter().filter(move |row| row.tier == tier)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    relics: Vec<RelicRecord>,
}

/// Load the relic catalog (`{ "relics": [...] }`). `None` when missing or
/// unparseable; callers degrade to an empty catalog.
pub fn load_relic_catalog(path: &str) -> Option<RelicCatalog> {
    let data = fs::read_to_string(path).ok()?;
    let file: CatalogFile = serde_json::from_str(&data).ok()?;
    Some(RelicCatalog::from_records(file.relics))
}

/// A slot's equipped relics, one optional entry per tier. This is the stable
/// shape a persistence collaborator round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicSlots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier10: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier20: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier30: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier35: Option<String>,
}

impl RelicSlots {
    pub fn entries(&self) -> [(u32, Option<&str>); 4] {
        [
            (10, self.tier10.as_deref()),
            (20, self.tier20.as_deref()),
            (30, self.tier30.as_deref()),
            (35, self.tier35.as_deref()),
        ]
    }
}

/// Sum of the valid entries' bundles. Empty slots, unknown keys, and
/// tier-mismatched relics contribute zero; order never matters.
pub fn sum_relic_bonuses(slots: &RelicSlots, catalog: &RelicCatalog) -> StatBundle {
    let mut total = StatBundle::ZERO;
    for (tier, entry) in slots.entries() {
        let Some(name) = entry else {
            continue;
        };
        if let Some(bundle) = catalog.lookup(tier, name) {
            total.add_from(bundle);
        }
    }
    total
}
