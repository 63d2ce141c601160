//! Reference-data validation: diagnostics over the creature roster, relic
//! catalog, and meta pool. Externally sourced data is routinely incomplete;
//! the engine tolerates that at runtime, and this report surfaces it ahead of
//! time.

use std::collections::HashSet;
use std::fmt;

use crate::data::creature::CreatureRecord;
use crate::data::loader::normalize_name;
use crate::data::meta::MetaPoolEntry;
use crate::data::registry::DataRegistry;
use crate::data::relic::{RelicCatalog, RELIC_TIERS};
use crate::engine::stats::BaseStats15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Validate a loaded registry's reference tables.
pub fn validate_registry(registry: &DataRegistry) -> ValidationReport {
    validate_reference_data(registry.creatures(), registry.relics(), registry.meta_pool())
}

pub fn validate_reference_data(
    creatures: &[CreatureRecord],
    relics: &RelicCatalog,
    meta_pool: &[MetaPoolEntry],
) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_creatures(creatures, &mut report);
    validate_relics(relics, &mut report);
    validate_meta_pool(creatures, meta_pool, &mut report);
    report
}

fn validate_creatures(creatures: &[CreatureRecord], report: &mut ValidationReport) {
    let mut seen_names = HashSet::new();
    for record in creatures {
        let context = format!("creature '{}'", record.name);
        if record.name.trim().is_empty() {
            report.push(ValidationSeverity::Error, "creature", "empty name");
            continue;
        }
        if !seen_names.insert(normalize_name(&record.name)) {
            report.push(
                ValidationSeverity::Error,
                &context,
                "duplicate name after normalization",
            );
        }
        validate_base_stats(&record.base, &context, report);
        if record.elements.is_empty() {
            report.push(ValidationSeverity::Warning, &context, "no elements");
        }
        if record.elements.len() > 2 {
            report.push(
                ValidationSeverity::Warning,
                &context,
                format!("{} elements; at most 2 observed in data", record.elements.len()),
            );
        }
        if record.moves.is_empty() {
            report.push(ValidationSeverity::Warning, &context, "empty move list");
        }
        for mv in record.moves.iter().chain(record.enhanced_moves.iter()) {
            if !mv.power.is_finite() || mv.power < 0.0 {
                report.push(
                    ValidationSeverity::Error,
                    &context,
                    format!("move '{}' has invalid power", mv.name),
                );
            }
            if mv.hits == 0 {
                report.push(
                    ValidationSeverity::Warning,
                    &context,
                    format!("move '{}' has 0 hits; treated as 1", mv.name),
                );
            }
        }
    }
}

fn validate_base_stats(base: &BaseStats15, context: &str, report: &mut ValidationReport) {
    let fields = [
        ("hp", base.hp),
        ("speed", base.speed),
        ("elemental_attack", base.elemental_attack),
        ("physical_attack", base.physical_attack),
        ("elemental_defense", base.elemental_defense),
        ("physical_defense", base.physical_defense),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            report.push(
                ValidationSeverity::Error,
                context,
                format!("base stat '{field}' is not finite"),
            );
        } else if value < 0.0 {
            report.push(
                ValidationSeverity::Error,
                context,
                format!("base stat '{field}' is negative"),
            );
        } else if value == 0.0 {
            report.push(
                ValidationSeverity::Info,
                context,
                format!("base stat '{field}' is 0"),
            );
        }
    }
}

fn validate_relics(relics: &RelicCatalog, report: &mut ValidationReport) {
    let mut seen_keys = HashSet::new();
    for row in relics.rows() {
        let context = format!("relic '{}'", row.name);
        if !RELIC_TIERS.contains(&row.tier) {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!("unsupported tier {}", row.tier),
            );
        }
        if !seen_keys.insert((row.tier, row.key())) {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!("duplicate (tier {}, key {}) row", row.tier, row.key()),
            );
        }
    }
}

fn validate_meta_pool(
    creatures: &[CreatureRecord],
    meta_pool: &[MetaPoolEntry],
    report: &mut ValidationReport,
) {
    let roster: HashSet<String> = creatures
        .iter()
        .map(|record| normalize_name(&record.name))
        .collect();
    for entry in meta_pool {
        if !roster.contains(&normalize_name(&entry.name)) {
            report.push(
                ValidationSeverity::Warning,
                format!("meta '{}'", entry.name),
                "not present in the creature roster; it will be skipped when scoring",
            );
        }
    }
}
