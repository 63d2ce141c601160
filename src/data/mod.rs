pub mod creature;
pub mod loader;
pub mod meta;
pub mod registry;
pub mod relic;
pub mod validate;

pub use creature::{load_roster, CreatureRecord, DEFAULT_ROSTER_PATH};
pub use loader::normalize_name;
pub use meta::{load_meta_pool, MetaPoolEntry, DEFAULT_META_PATH};
pub use registry::DataRegistry;
pub use relic::{
    canonical_relic_key, load_relic_catalog, sum_relic_bonuses, RelicCatalog, RelicRecord,
    RelicSlots, DEFAULT_RELICS_PATH, RELIC_TIERS,
};
pub use validate::{
    validate_reference_data, validate_registry, ValidationDiagnostic, ValidationReport,
    ValidationSeverity,
};
