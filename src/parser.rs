//! Loaders for the YAML storage files
//!
//! Only structural failures (missing file, unparseable YAML) error here;
//! data-content problems are left for the validator. Unknown keys on an
//! entry are collected during deserialization and reported later as
//! warnings with did-you-mean suggestions.

use std::fs;
use std::path::Path;

use crate::error::{ArsenalError, ArsenalResult};
use crate::models::Catalog;
use crate::vocabulary::Vocabulary;

/// An unknown key encountered while deserializing the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField {
    /// Index into `Catalog::resources`, when the key sat under an entry
    pub entry_index: Option<usize>,
    /// Key name (last path segment)
    pub key: String,
    /// Full dotted path, e.g. `resources.3.whyusefl`
    pub path: String,
}

/// Load and deserialize `resources.yaml`, collecting unknown-key paths.
pub fn load_catalog(path: &Path) -> ArsenalResult<(Catalog, Vec<UnknownField>)> {
    let content = read_data_file(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(&content);
    let catalog: Catalog = serde_ignored::deserialize(deserializer, |path| {
        unknown_paths.push(path.to_string());
    })
    .map_err(|e| ArsenalError::Yaml {
        file: path.to_path_buf(),
        message: format_yaml_error(&e),
    })?;

    let unknown = unknown_paths
        .into_iter()
        .map(|p| parse_unknown_path(&p))
        .collect();

    Ok((catalog, unknown))
}

/// Load and deserialize `vocabulary.yaml`.
pub fn load_vocabulary(path: &Path) -> ArsenalResult<Vocabulary> {
    let content = read_data_file(path)?;

    serde_yaml_ng::from_str(&content).map_err(|e| ArsenalError::Yaml {
        file: path.to_path_buf(),
        message: format_yaml_error(&e),
    })
}

fn read_data_file(path: &Path) -> ArsenalResult<String> {
    if !path.is_file() {
        return Err(ArsenalError::DataFileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn parse_unknown_path(path: &str) -> UnknownField {
    let mut segments = path.split('.');
    let entry_index = match (segments.next(), segments.next()) {
        (Some("resources"), Some(idx)) => idx.parse::<usize>().ok(),
        _ => None,
    };
    let key = path.rsplit('.').next().unwrap_or(path).to_string();

    UnknownField {
        entry_index,
        key,
        path: path.to_string(),
    }
}

fn format_yaml_error(err: &serde_yaml_ng::Error) -> String {
    match err.location() {
        Some(loc) => format!("Line {}, column {}: {}", loc.line(), loc.column(), err),
        None => err.to_string(),
    }
}
