//! Startup-loaded reference tables (DataRegistry) shared by the CLI, server,
//! and analysis runs. An explicit context object passed via Arc; there are no
//! module-level globals.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use crate::data::creature::{load_roster, CreatureRecord, DEFAULT_ROSTER_PATH};
use crate::data::loader::normalize_name;
use crate::data::meta::{load_meta_pool, MetaPoolEntry, DEFAULT_META_PATH};
use crate::data::relic::{load_relic_catalog, RelicCatalog, DEFAULT_RELICS_PATH};

/// Read-only registry of static reference data loaded once at startup.
#[derive(Debug, Clone)]
pub struct DataRegistry {
    creatures: Vec<CreatureRecord>,
    /// Normalized name -> index into `creatures`.
    by_name: HashMap<String, usize>,
    relics: RelicCatalog,
    meta_pool: Vec<MetaPoolEntry>,
}

impl DataRegistry {
    /// Load all reference data from the default paths. The creature roster is
    /// required; a missing relic catalog or meta pool degrades to empty.
    /// Returns an Arc so the registry can be shared across handlers and
    /// worker threads.
    pub fn load() -> Result<Arc<DataRegistry>, io::Error> {
        let creatures = load_roster(DEFAULT_ROSTER_PATH).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("creature roster missing or invalid: {DEFAULT_ROSTER_PATH}"),
            )
        })?;
        let relics = load_relic_catalog(DEFAULT_RELICS_PATH).unwrap_or_default();
        let meta_pool = load_meta_pool(DEFAULT_META_PATH).unwrap_or_default();
        Ok(Arc::new(Self::from_parts(creatures, relics, meta_pool)))
    }

    /// Build a registry from already-loaded parts (tests, embedding).
    pub fn from_parts(
        creatures: Vec<CreatureRecord>,
        relics: RelicCatalog,
        meta_pool: Vec<MetaPoolEntry>,
    ) -> DataRegistry {
        let by_name = creatures
            .iter()
            .enumerate()
            .map(|(index, record)| (normalize_name(&record.name), index))
            .collect();
        DataRegistry {
            creatures,
            by_name,
            relics,
            meta_pool,
        }
    }

    pub fn creatures(&self) -> &[CreatureRecord] {
        &self.creatures
    }

    pub fn relics(&self) -> &RelicCatalog {
        &self.relics
    }

    pub fn meta_pool(&self) -> &[MetaPoolEntry] {
        &self.meta_pool
    }

    /// Resolve a creature by display name or normalized key. `None` means
    /// missing reference data; callers show a placeholder instead of failing.
    pub fn resolve_creature(&self, name: &str) -> Option<&CreatureRecord> {
        let index = *self.by_name.get(&normalize_name(name))?;
        self.creatures.get(index)
    }
}
