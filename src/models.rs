//! Core data models for Arsenal
//!
//! Defines the fundamental data structures used throughout Arsenal:
//! - `ResourceEntry`: one curated link with its classification metadata
//! - `Catalog`: the full collection as stored in `resources.yaml`
//! - `FlexibleDate`: a date in year, year-month, or full-date granularity
//!
//! Classification fields (`domains`, `type`, `maturity`, `tags`, `good_for`,
//! `effort`) are plain strings here; membership is checked against the
//! controlled vocabulary at validation time, not at deserialization time,
//! so that a contributor sees every problem in one pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known entry field names, used for did-you-mean suggestions on
/// unknown keys.
pub const ENTRY_FIELDS: &[&str] = &[
    "id",
    "title",
    "url",
    "domains",
    "type",
    "maturity",
    "effort",
    "tags",
    "summary",
    "why_useful",
    "good_for",
    "github_stars",
    "published",
    "last_updated",
    "added",
    "setup_time_minutes",
    "prerequisites",
    "use_cases",
    "related",
    "language",
    "license",
    "source_owner",
];

/// Top-level structure of `resources.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub resources: Vec<ResourceEntry>,
}

/// One curated link.
///
/// Required fields deserialize with defaults so that a missing field is a
/// reportable `SchemaViolation`, never a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Unique slug, stable key (REQUIRED)
    #[serde(default)]
    pub id: String,

    /// Display title (REQUIRED)
    #[serde(default)]
    pub title: String,

    /// Absolute URL (REQUIRED)
    #[serde(default)]
    pub url: String,

    /// Vocabulary domain names, 1-3 members (REQUIRED)
    #[serde(default)]
    pub domains: Vec<String>,

    /// Vocabulary type name (REQUIRED)
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Vocabulary maturity name (REQUIRED)
    #[serde(default)]
    pub maturity: String,

    /// Vocabulary effort name; drives the quick-wins section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,

    /// Vocabulary tag names, 3-6 members (REQUIRED)
    #[serde(default)]
    pub tags: Vec<String>,

    /// One-paragraph description (REQUIRED)
    #[serde(default)]
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_useful: Option<String>,

    /// Vocabulary good_for names (REQUIRED)
    #[serde(default)]
    pub good_for: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_stars: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<RawDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<RawDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<RawDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_time_minutes: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,

    /// Ids of related entries; each must resolve within the collection
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_owner: Option<String>,
}

impl ResourceEntry {
    /// Id used in violation reports: the declared id, or a positional
    /// placeholder when the id itself is missing.
    pub fn report_id(&self, index: usize) -> String {
        if self.id.is_empty() {
            format!("resource_{index}")
        } else {
            self.id.clone()
        }
    }

    /// The `added` date, when present and well-formed. Callers that run
    /// after validation may flatten the parse without losing anything.
    pub fn added_date(&self) -> Option<FlexibleDate> {
        self.added.as_ref().and_then(|d| d.parse().ok())
    }

    /// Newest of the three entry dates, for the "data as of" badge.
    pub fn newest_date(&self) -> Option<FlexibleDate> {
        [&self.published, &self.last_updated, &self.added]
            .into_iter()
            .flatten()
            .filter_map(|d| d.parse().ok())
            .max()
    }
}

/// A date field as written in the data file, before granularity parsing.
///
/// YAML writes year-only dates as bare integers (`published: 2023`), so
/// this accepts both scalar shapes and normalizes to a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawDate(pub String);

impl RawDate {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Result<FlexibleDate, DateError> {
        self.0.parse()
    }
}

impl fmt::Display for RawDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDateDe {
    Text(String),
    Year(i64),
}

impl<'de> Deserialize<'de> for RawDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match RawDateDe::deserialize(deserializer)? {
            RawDateDe::Text(s) => Ok(Self(s)),
            RawDateDe::Year(y) => Ok(Self(y.to_string())),
        }
    }
}

/// Error produced when a date field does not parse under any accepted
/// granularity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date '{value}': expected YYYY, YYYY-MM, or YYYY-MM-DD")]
pub struct DateError {
    pub value: String,
}

/// A date in one of three granularities: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`.
///
/// Ordering is by (year, month, day) with absent components sorting first,
/// so `2024` < `2024-01` < `2024-01-15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlexibleDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl FromStr for FlexibleDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DateError {
            value: s.to_string(),
        };

        let mut parts = s.split('-');
        let year_part = parts.next().ok_or_else(err)?;
        if year_part.len() != 4 {
            return Err(err());
        }
        let year: i32 = year_part.parse().map_err(|_| err())?;

        let month = match parts.next() {
            None => None,
            Some(m) => {
                if m.len() != 2 {
                    return Err(err());
                }
                let m: u32 = m.parse().map_err(|_| err())?;
                if !(1..=12).contains(&m) {
                    return Err(err());
                }
                Some(m)
            }
        };

        let day = match parts.next() {
            None => None,
            Some(d) => {
                if d.len() != 2 {
                    return Err(err());
                }
                let d: u32 = d.parse().map_err(|_| err())?;
                let month = month.ok_or_else(err)?;
                // chrono knows month lengths and leap years
                if chrono::NaiveDate::from_ymd_opt(year, month, d).is_none() {
                    return Err(err());
                }
                Some(d)
            }
        };

        if parts.next().is_some() {
            return Err(err());
        }

        Ok(Self { year, month, day })
    }
}

impl fmt::Display for FlexibleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.day) {
            (Some(m), Some(d)) => write!(f, "{:04}-{:02}-{:02}", self.year, m, d),
            (Some(m), None) => write!(f, "{:04}-{:02}", self.year, m),
            _ => write!(f, "{:04}", self.year),
        }
    }
}

impl FlexibleDate {
    /// Human label for the "data as of" badge: "June 2024" when a month
    /// is known, otherwise just the year.
    pub fn badge_label(&self) -> String {
        match self.month {
            Some(m) => {
                let date = chrono::NaiveDate::from_ymd_opt(self.year, m, 1)
                    .unwrap_or_default();
                date.format("%B %Y").to_string()
            }
            None => format!("{}", self.year),
        }
    }
}
