//! Individual validation checks
//!
//! Each check is independent and pushes findings into a `ReportSink`;
//! none of them short-circuits, so one run reports every problem.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::best_match;
use crate::models::{Catalog, ResourceEntry, ENTRY_FIELDS};
use crate::parser::UnknownField;
use crate::vocabulary::{VocabField, Vocabulary};

use super::report::{ReportSink, COLLECTION};
use super::types::ViolationKind;

/// Canonical GitHub repo URL shape: https://github.com/owner/repo
static GITHUB_REPO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/[\w.-]+/[\w.-]+/?$").expect("valid pattern")
});

/// Phrases that say nothing; flagged so summaries stay concrete.
const GENERIC_PHRASES: &[&str] = &[
    "great tool",
    "awesome",
    "amazing",
    "best",
    "perfect",
    "helps you",
    "makes it easy",
    "simple tool",
];

const SUMMARY_MIN: usize = 50;
const SUMMARY_MAX: usize = 300;
const WHY_USEFUL_MIN: usize = 30;
const TITLE_MAX: usize = 50;

const DOMAINS_MAX: usize = 3;
const TAGS_MIN: usize = 3;
const TAGS_MAX: usize = 6;

pub fn check_required_fields(entry: &ResourceEntry, id: &str, sink: &mut impl ReportSink) {
    let scalars = [
        ("id", entry.id.is_empty()),
        ("title", entry.title.is_empty()),
        ("url", entry.url.is_empty()),
        ("type", entry.kind.is_empty()),
        ("maturity", entry.maturity.is_empty()),
        ("summary", entry.summary.trim().is_empty()),
    ];
    for (field, missing) in scalars {
        if missing {
            sink.add_fatal(id, field, ViolationKind::Schema, "missing required field");
        }
    }

    let sets = [
        ("domains", entry.domains.is_empty()),
        ("tags", entry.tags.is_empty()),
        ("good_for", entry.good_for.is_empty()),
    ];
    for (field, missing) in sets {
        if missing {
            sink.add_fatal(id, field, ViolationKind::Schema, "missing required field");
        }
    }
}

pub fn check_vocabulary(
    entry: &ResourceEntry,
    id: &str,
    vocab: &Vocabulary,
    sink: &mut impl ReportSink,
) {
    let mut check_value = |field: &str, vocab_field: VocabField, value: &str| {
        if value.is_empty() || vocab.contains(vocab_field, value) {
            return;
        }
        sink.add_fatal(
            id,
            field,
            ViolationKind::Vocabulary,
            &format!(
                "'{}' is not in the vocabulary (valid: {})",
                value,
                vocab.names(vocab_field).join(", ")
            ),
        );
    };

    for domain in &entry.domains {
        check_value("domains", VocabField::Domains, domain);
    }
    check_value("type", VocabField::Types, &entry.kind);
    check_value("maturity", VocabField::Maturity, &entry.maturity);
    if let Some(effort) = &entry.effort {
        check_value("effort", VocabField::Effort, effort);
    }
    for tag in &entry.tags {
        check_value("tags", VocabField::Tags, tag);
    }
    for value in &entry.good_for {
        check_value("good_for", VocabField::GoodFor, value);
    }
}

/// Soft bounds: contributors get a nudge, rendering is not blocked.
pub fn check_cardinality(entry: &ResourceEntry, id: &str, sink: &mut impl ReportSink) {
    if entry.domains.len() > DOMAINS_MAX {
        sink.add_warning(
            id,
            "domains",
            ViolationKind::Schema,
            &format!(
                "{} domains listed, recommend at most {}",
                entry.domains.len(),
                DOMAINS_MAX
            ),
        );
    }

    if !entry.tags.is_empty() && entry.tags.len() < TAGS_MIN {
        sink.add_warning(
            id,
            "tags",
            ViolationKind::Schema,
            &format!("{} tags listed, recommend at least {}", entry.tags.len(), TAGS_MIN),
        );
    }
    if entry.tags.len() > TAGS_MAX {
        sink.add_warning(
            id,
            "tags",
            ViolationKind::Schema,
            &format!("{} tags listed, recommend at most {}", entry.tags.len(), TAGS_MAX),
        );
    }
}

/// Set-valued fields must not repeat members.
pub fn check_set_duplicates(entry: &ResourceEntry, id: &str, sink: &mut impl ReportSink) {
    let fields = [
        ("domains", &entry.domains),
        ("tags", &entry.tags),
        ("good_for", &entry.good_for),
        ("related", &entry.related),
    ];

    for (field, values) in fields {
        let mut seen = HashSet::new();
        for value in values {
            if !seen.insert(value.as_str()) {
                sink.add_fatal(
                    id,
                    field,
                    ViolationKind::Schema,
                    &format!("duplicate value '{value}'"),
                );
            }
        }
    }
}

pub fn check_url(entry: &ResourceEntry, id: &str, sink: &mut impl ReportSink) {
    if entry.url.is_empty() {
        return; // covered by the required-field check
    }

    let parsed = match Url::parse(&entry.url) {
        Ok(parsed) => parsed,
        Err(e) => {
            sink.add_fatal(
                id,
                "url",
                ViolationKind::Schema,
                &format!("malformed URL: {e}"),
            );
            return;
        }
    };

    if parsed.host_str().map_or(true, |h| h.is_empty()) {
        sink.add_fatal(id, "url", ViolationKind::Schema, "URL has no host");
        return;
    }

    if parsed.scheme() != "https" {
        sink.add_warning(
            id,
            "url",
            ViolationKind::Schema,
            "consider an HTTPS URL if available",
        );
    }

    if parsed.host_str() == Some("github.com") && !GITHUB_REPO_RE.is_match(&entry.url) {
        sink.add_warning(
            id,
            "url",
            ViolationKind::Schema,
            "GitHub URLs should be https://github.com/owner/repo",
        );
    }
}

pub fn check_dates(entry: &ResourceEntry, id: &str, sink: &mut impl ReportSink) {
    let fields = [
        ("published", &entry.published),
        ("last_updated", &entry.last_updated),
        ("added", &entry.added),
    ];

    for (field, value) in fields {
        if let Some(raw) = value {
            if let Err(e) = raw.parse() {
                sink.add_fatal(id, field, ViolationKind::Schema, &e.to_string());
            }
        }
    }
}

/// Advisory checks on prose quality. Lengths are in characters, not bytes.
pub fn check_content_quality(entry: &ResourceEntry, id: &str, sink: &mut impl ReportSink) {
    let summary_len = entry.summary.chars().count();
    if summary_len > 0 && summary_len < SUMMARY_MIN {
        sink.add_warning(
            id,
            "summary",
            ViolationKind::Schema,
            &format!("summary is {summary_len} chars, recommend {SUMMARY_MIN}+"),
        );
    } else if summary_len > SUMMARY_MAX {
        sink.add_warning(
            id,
            "summary",
            ViolationKind::Schema,
            &format!("summary is {summary_len} chars, recommend under {SUMMARY_MAX}"),
        );
    }

    // Absent counts as length zero; the nudge applies either way.
    let why_len = entry
        .why_useful
        .as_deref()
        .unwrap_or_default()
        .chars()
        .count();
    if why_len < WHY_USEFUL_MIN {
        sink.add_warning(
            id,
            "why_useful",
            ViolationKind::Schema,
            "why_useful is very short, be more specific",
        );
    }

    if entry.title.chars().count() > TITLE_MAX {
        sink.add_warning(
            id,
            "title",
            ViolationKind::Schema,
            "title is long, consider shortening",
        );
    }

    let summary_lower = entry.summary.to_lowercase();
    let why_lower = entry
        .why_useful
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    for phrase in GENERIC_PHRASES {
        if summary_lower.contains(phrase) || why_lower.contains(phrase) {
            sink.add_warning(
                id,
                "summary",
                ViolationKind::Schema,
                &format!("avoid generic phrase '{phrase}', be more specific"),
            );
        }
    }
}

/// Exactly one violation per duplicate beyond the first occurrence.
pub fn check_unique_ids(catalog: &Catalog, sink: &mut impl ReportSink) {
    let mut seen = HashSet::new();
    for entry in &catalog.resources {
        if entry.id.is_empty() {
            continue; // covered by the required-field check
        }
        if !seen.insert(entry.id.as_str()) {
            sink.add_fatal(
                &entry.id,
                "id",
                ViolationKind::Referential,
                &format!("duplicate id '{}'", entry.id),
            );
        }
    }
}

pub fn check_related(catalog: &Catalog, sink: &mut impl ReportSink) {
    let all_ids: HashSet<&str> = catalog
        .resources
        .iter()
        .map(|e| e.id.as_str())
        .filter(|id| !id.is_empty())
        .collect();

    for (index, entry) in catalog.resources.iter().enumerate() {
        let id = entry.report_id(index);
        for related in &entry.related {
            if related == &entry.id {
                sink.add_fatal(
                    &id,
                    "related",
                    ViolationKind::Referential,
                    "entry references itself",
                );
            } else if !all_ids.contains(related.as_str()) {
                sink.add_fatal(
                    &id,
                    "related",
                    ViolationKind::Referential,
                    &format!("unknown related id '{related}'"),
                );
            }
        }
    }
}

/// The same resource listed twice under cosmetically different URLs.
pub fn check_duplicate_urls(catalog: &Catalog, sink: &mut impl ReportSink) {
    let mut seen: HashMap<String, String> = HashMap::new();
    for (index, entry) in catalog.resources.iter().enumerate() {
        if entry.url.is_empty() {
            continue;
        }
        let id = entry.report_id(index);
        let normalized = normalize_url(&entry.url);
        match seen.get(&normalized) {
            Some(first) => {
                sink.add_warning(
                    &id,
                    "url",
                    ViolationKind::Referential,
                    &format!("duplicate URL, already used by '{first}'"),
                );
            }
            None => {
                seen.insert(normalized, id);
            }
        }
    }
}

pub fn check_unknown_fields(
    catalog: &Catalog,
    unknown_fields: &[UnknownField],
    sink: &mut impl ReportSink,
) {
    for field in unknown_fields {
        let id = field
            .entry_index
            .and_then(|i| catalog.resources.get(i).map(|e| e.report_id(i)))
            .unwrap_or_else(|| COLLECTION.to_string());

        let message = match best_match(&field.key, ENTRY_FIELDS) {
            Some(suggestion) => {
                format!("unknown field '{}', did you mean '{}'?", field.key, suggestion)
            }
            None => format!("unknown field '{}'", field.key),
        };
        sink.add_warning(&id, &field.key, ViolationKind::Schema, &message);
    }
}

/// Normalize for duplicate detection: lowercase, strip a trailing slash
/// and a `www.` host prefix.
fn normalize_url(url: &str) -> String {
    url.to_lowercase()
        .trim_end_matches('/')
        .replace("www.", "")
}
