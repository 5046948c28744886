//! Validator for the resource catalog
//!
//! Checks structural and referential validity of a loaded collection
//! against the controlled vocabulary. Findings accumulate into a
//! `ValidationReport`; fatal findings block rendering, warnings do not.

mod checks;
mod report;
mod types;

pub use report::{validate_catalog, ReportSink, ValidationReport, COLLECTION};
pub use types::{Severity, Violation, ViolationKind};
