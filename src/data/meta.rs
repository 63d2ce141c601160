//! Meta pool: the creatures currently considered competitively relevant,
//! used as the sampling population for aggregate risk estimation.

use std::fs;

use serde::{Deserialize, Serialize};

pub const DEFAULT_META_PATH: &str = "data/meta.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaPoolEntry {
    pub name: String,
    /// Qualitative tier label from the external tier list (e.g. "S", "A").
    #[serde(default, alias = "tier", skip_serializing_if = "Option::is_none")]
    pub tier_label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetaFile {
    #[serde(default)]
    meta: Vec<MetaPoolEntry>,
}

/// Load the meta pool (`{ "meta": [...] }`). `None` when missing or
/// unparseable; callers degrade to an empty pool.
pub fn load_meta_pool(path: &str) -> Option<Vec<MetaPoolEntry>> {
    let data = fs::read_to_string(path).ok()?;
    let file: MetaFile = serde_json::from_str(&data).ok()?;
    Some(file.meta)
}
