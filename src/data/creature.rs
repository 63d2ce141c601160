//! Creature roster: base-15 stats, typing, and move lists per creature.
//! Loaded once at startup; the engine only ever sees the normalized record.

use std::fs;

use serde::{Deserialize, Deserializer, Serialize};

use crate::engine::damage::Move;
use crate::engine::stats::BaseStats15;
use crate::engine::types::Element;

pub const DEFAULT_ROSTER_PATH: &str = "data/creatures.json";

/// Normalized creature record. Casing variants and loose element strings in
/// upstream JSON are absorbed at deserialization; unknown elements are
/// dropped rather than failing the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    #[serde(default, deserialize_with = "elements_from_loose")]
    pub elements: Vec<Element>,
    #[serde(alias = "base15", alias = "base_stats")]
    pub base: BaseStats15,
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default, alias = "enhancedMoves")]
    pub enhanced_moves: Vec<Move>,
    /// Drives an external point-cost, not used by the engine itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
}

fn elements_from_loose<'de, D>(deserializer: D) -> Result<Vec<Element>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(raw.iter().filter_map(|tag| Element::parse(tag)).collect())
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    creatures: Vec<CreatureRecord>,
}

/// Load the creature roster from a single JSON file
/// (`{ "creatures": [...] }`). Returns `None` if the file is missing or
/// unparseable.
pub fn load_roster(path: &str) -> Option<Vec<CreatureRecord>> {
    let data = fs::read_to_string(path).ok()?;
    let file: RosterFile = serde_json::from_str(&data).ok()?;
    Some(file.creatures)
}
