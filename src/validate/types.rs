//! Violation types

/// One validation finding against an entry or the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Id of the offending entry (`resource_N` when the id is missing),
    /// or `<collection>` for collection-level findings
    pub entry_id: String,
    /// Field the finding is about
    pub field: String,
    pub kind: ViolationKind,
    pub severity: Severity,
    pub message: String,
}

/// Taxonomy of violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Missing or malformed field, cardinality, quality advisory
    Schema,
    /// Value not in the controlled vocabulary
    Vocabulary,
    /// Duplicate id, dangling or self `related` reference, duplicate URL
    Referential,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::Schema => write!(f, "schema"),
            ViolationKind::Vocabulary => write!(f, "vocabulary"),
            ViolationKind::Referential => write!(f, "referential"),
        }
    }
}

/// Whether a violation blocks rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Fatal => write!(f, "fatal"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
