//! Error types for Arsenal
//!
//! Uses `thiserror` for library errors. Data-content problems are never
//! errors; they are reported as `validate::Violation` values. Only
//! structural failures (unreadable or unparseable storage, rendering
//! attempted on an invalid collection) surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Arsenal operations
pub type ArsenalResult<T> = Result<T, ArsenalError>;

/// Main error type for Arsenal operations
#[derive(Error, Debug)]
pub enum ArsenalError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Data or vocabulary file is missing
    #[error("data file not found: {path}")]
    DataFileNotFound { path: PathBuf },

    /// Unparseable YAML storage
    #[error("invalid YAML in {file}: {message}")]
    Yaml { file: PathBuf, message: String },

    /// Malformed TOML configuration
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Render attempted on a collection with fatal violations
    #[error("cannot render: {} fatal violation(s) block output", .violations.len())]
    Precondition { violations: Vec<String> },
}
