//! Configuration module for Arsenal
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ARSENAL_*)
//! 3. Project config (arsenal.toml)
//! 4. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArsenalError, ArsenalResult};

/// Input/output path configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_resources_path")]
    pub resources: PathBuf,

    #[serde(default = "default_vocabulary_path")]
    pub vocabulary: PathBuf,

    #[serde(default = "default_output_path")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            resources: default_resources_path(),
            vocabulary: default_vocabulary_path(),
            output: default_output_path(),
        }
    }
}

fn default_resources_path() -> PathBuf {
    PathBuf::from("data/resources.yaml")
}

fn default_vocabulary_path() -> PathBuf {
    PathBuf::from("data/vocabulary.yaml")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("README.md")
}

/// Document header configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_intro")]
    pub intro: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            intro: default_intro(),
        }
    }
}

fn default_title() -> String {
    "Engineering Arsenal".to_string()
}

fn default_intro() -> String {
    "A curated collection of tools, articles, and repos that earned their \
     place in real systems. Each entry carries structured metadata and an \
     honest assessment of maturity and effort."
        .to_string()
}

/// Renderer tuning: section limits and predicate inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_section_limit")]
    pub quick_wins_limit: usize,

    #[serde(default = "default_section_limit")]
    pub trending_limit: usize,

    #[serde(default = "default_popular_tags_limit")]
    pub popular_tags_limit: usize,

    /// Effort level that qualifies an entry as a quick win
    #[serde(default = "default_quick_win_effort")]
    pub quick_win_effort: String,

    /// Maturity levels counted as production-ready
    #[serde(default = "default_production_ready")]
    pub production_ready: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            quick_wins_limit: default_section_limit(),
            trending_limit: default_section_limit(),
            popular_tags_limit: default_popular_tags_limit(),
            quick_win_effort: default_quick_win_effort(),
            production_ready: default_production_ready(),
        }
    }
}

fn default_section_limit() -> usize {
    3
}

fn default_popular_tags_limit() -> usize {
    12
}

fn default_quick_win_effort() -> String {
    "Low".to_string()
}

fn default_production_ready() -> Vec<String> {
    vec!["Battle-tested".to_string(), "Emerging".to_string()]
}

/// Validation policy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    /// Treat warnings as failures (CI mode)
    #[serde(default)]
    pub strict_warnings: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub document: DocumentConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArsenalResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArsenalResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| ArsenalError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load `arsenal.toml` from the project root if present, else defaults.
    pub fn load_or_default(project_root: &Path) -> (Self, Vec<ConfigWarning>) {
        let config_path = project_root.join("arsenal.toml");
        if config_path.exists() {
            if let Ok((config, warnings)) = Self::load_with_warnings(&config_path) {
                return (config.with_env_overrides(), warnings);
            }
        }
        (Self::default().with_env_overrides(), Vec::new())
    }

    /// Apply environment variable overrides (ARSENAL_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("ARSENAL_DATA") {
            self.paths.resources = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("ARSENAL_VOCABULARY") {
            self.paths.vocabulary = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("ARSENAL_OUTPUT") {
            self.paths.output = PathBuf::from(path);
        }

        if let Ok(val) = std::env::var("ARSENAL_STRICT_WARNINGS") {
            self.validation.strict_warnings = val.to_lowercase() != "false" && val != "0";
        }

        self
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "resources",
        "vocabulary",
        "output",
        "document",
        "title",
        "intro",
        "render",
        "quick_wins_limit",
        "trending_limit",
        "popular_tags_limit",
        "quick_win_effort",
        "production_ready",
        "validation",
        "strict_warnings",
    ];

    best_match(unknown, CANDIDATES)
}

/// Closest candidate within edit distance 2, used for did-you-mean hints
/// on both config keys and entry fields.
pub fn best_match(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.paths.resources, PathBuf::from("data/resources.yaml"));
        assert_eq!(config.paths.output, PathBuf::from("README.md"));
        assert_eq!(config.render.quick_wins_limit, 3);
        assert_eq!(config.render.popular_tags_limit, 12);
        assert_eq!(config.render.quick_win_effort, "Low");
        assert!(!config.validation.strict_warnings);
    }

    #[test]
    fn test_config_parse_toml() {
        let toml = r#"
[paths]
resources = "catalog/entries.yaml"
output = "CATALOG.md"

[document]
title = "My List"

[render]
quick_wins_limit = 5
production_ready = ["Battle-tested"]

[validation]
strict_warnings = true
"#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.paths.resources, PathBuf::from("catalog/entries.yaml"));
        assert_eq!(config.paths.vocabulary, PathBuf::from("data/vocabulary.yaml"));
        assert_eq!(config.document.title, "My List");
        assert_eq!(config.render.quick_wins_limit, 5);
        assert_eq!(config.render.production_ready, vec!["Battle-tested"]);
        assert!(config.validation.strict_warnings);
    }

    #[test]
    fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arsenal.toml");

        fs::write(&path, "rendr = 1\n").unwrap();

        let (_config, warnings) = Config::load_with_warnings(&path).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "rendr");
        assert_eq!(warnings[0].line, Some(1));
        assert_eq!(warnings[0].suggestion, Some("render".to_string()));
    }

    #[test]
    fn test_env_override_paths() {
        // SAFETY: Single-threaded test, no concurrent access to env vars
        unsafe { std::env::set_var("ARSENAL_DATA", "custom/resources.yaml") };
        unsafe { std::env::set_var("ARSENAL_OUTPUT", "OUT.md") };
        let config = Config::default().with_env_overrides();
        assert_eq!(config.paths.resources, PathBuf::from("custom/resources.yaml"));
        assert_eq!(config.paths.output, PathBuf::from("OUT.md"));
        unsafe { std::env::remove_var("ARSENAL_DATA") };
        unsafe { std::env::remove_var("ARSENAL_OUTPUT") };
    }

    #[test]
    fn test_env_override_strict_warnings() {
        // SAFETY: Single-threaded test, no concurrent access to env vars
        unsafe { std::env::set_var("ARSENAL_STRICT_WARNINGS", "1") };
        let config = Config::default().with_env_overrides();
        assert!(config.validation.strict_warnings);
        unsafe { std::env::remove_var("ARSENAL_STRICT_WARNINGS") };
    }

    #[test]
    fn test_best_match_distance_bound() {
        assert_eq!(
            best_match("summry", crate::models::ENTRY_FIELDS),
            Some("summary".to_string())
        );
        assert_eq!(best_match("zzzzzz", crate::models::ENTRY_FIELDS), None);
    }

    #[test]
    fn test_config_malformed_toml_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arsenal.toml");
        fs::write(&path, "[paths\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ArsenalError::Config { .. }));
    }
}
