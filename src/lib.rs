//! Arsenal - catalog compiler for curated engineering resource lists
//!
//! Arsenal keeps an "awesome list" honest: resources live in YAML with
//! structured metadata, a controlled vocabulary constrains every
//! classification field, and the published Markdown document is compiled
//! from data rather than edited by hand.
//!
//! The pipeline has two halves:
//! - validation accumulates every violation in one pass and never fails
//!   on data content, and
//! - rendering refuses to run while fatal violations exist, then emits a
//!   deterministic document from the validated collection.

pub mod config;
pub mod error;
pub mod fs;
pub mod models;
pub mod output;
pub mod parser;
pub mod render;
pub mod stats;
pub mod validate;
pub mod vocabulary;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{ArsenalError, ArsenalResult};
pub use models::{Catalog, FlexibleDate, RawDate, ResourceEntry};
pub use parser::{load_catalog, load_vocabulary, UnknownField};
pub use render::render_document;
pub use stats::CatalogStats;
pub use validate::{validate_catalog, Severity, ValidationReport, Violation, ViolationKind};
pub use vocabulary::{Term, VocabField, Vocabulary};
