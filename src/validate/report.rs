//! Validation report and entry point

use crate::models::Catalog;
use crate::parser::UnknownField;
use crate::vocabulary::Vocabulary;

use super::checks;
use super::types::{Severity, Violation, ViolationKind};

/// Entry id used for collection-level violations with no single owner.
pub const COLLECTION: &str = "<collection>";

fn make_violation(
    entry_id: &str,
    field: &str,
    kind: ViolationKind,
    severity: Severity,
    message: &str,
) -> Violation {
    Violation {
        entry_id: entry_id.to_string(),
        field: field.to_string(),
        kind,
        severity,
        message: message.to_string(),
    }
}

/// Accumulator for validation findings. Checks push into a sink rather
/// than returning lists so collection-level and per-entry checks compose.
pub trait ReportSink {
    fn add_violation(&mut self, violation: Violation);

    fn add_fatal(&mut self, entry_id: &str, field: &str, kind: ViolationKind, message: &str) {
        self.add_violation(make_violation(
            entry_id,
            field,
            kind,
            Severity::Fatal,
            message,
        ));
    }

    fn add_warning(&mut self, entry_id: &str, field: &str, kind: ViolationKind, message: &str) {
        self.add_violation(make_violation(
            entry_id,
            field,
            kind,
            Severity::Warning,
            message,
        ));
    }
}

/// Validation results for one run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn fatals(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Fatal)
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count()
    }

    /// True when nothing blocks rendering.
    pub fn is_valid(&self) -> bool {
        self.fatals() == 0
    }

    /// Fatal violations formatted as `id/field: message`, for the
    /// precondition error and CI output.
    pub fn fatal_lines(&self) -> Vec<String> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Fatal)
            .map(|v| format!("{}/{}: {}", v.entry_id, v.field, v.message))
            .collect()
    }
}

impl ReportSink for ValidationReport {
    fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

/// Run every check over the collection.
///
/// Never fails for data-content problems; all findings accumulate in the
/// returned report. `unknown_fields` comes from the loader, which is the
/// only place that sees keys serde dropped.
pub fn validate_catalog(
    catalog: &Catalog,
    vocabulary: &Vocabulary,
    unknown_fields: &[UnknownField],
) -> ValidationReport {
    let mut report = ValidationReport::new();
    validate_into(catalog, vocabulary, unknown_fields, &mut report);
    report
}

fn validate_into(
    catalog: &Catalog,
    vocabulary: &Vocabulary,
    unknown_fields: &[UnknownField],
    sink: &mut impl ReportSink,
) {
    // === Per-entry checks ===
    for (index, entry) in catalog.resources.iter().enumerate() {
        let id = entry.report_id(index);

        checks::check_required_fields(entry, &id, sink);
        checks::check_vocabulary(entry, &id, vocabulary, sink);
        checks::check_cardinality(entry, &id, sink);
        checks::check_set_duplicates(entry, &id, sink);
        checks::check_url(entry, &id, sink);
        checks::check_dates(entry, &id, sink);
        checks::check_content_quality(entry, &id, sink);
    }

    // === Collection-level checks ===
    checks::check_unique_ids(catalog, sink);
    checks::check_related(catalog, sink);
    checks::check_duplicate_urls(catalog, sink);
    checks::check_unknown_fields(catalog, unknown_fields, sink);
}
