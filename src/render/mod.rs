//! Markdown document renderer
//!
//! Rendering is gated on a clean validation report: any fatal violation
//! refuses to produce output. The document itself is a pure function of
//! the collection, the vocabulary, and the config, so re-rendering
//! unchanged input yields a byte-identical file.

pub mod group;
pub mod sections;
pub mod table;

use crate::config::Config;
use crate::error::{ArsenalError, ArsenalResult};
use crate::models::Catalog;
use crate::stats::CatalogStats;
use crate::validate::ValidationReport;
use crate::vocabulary::Vocabulary;

/// Render the full document, refusing if the report carries fatals.
pub fn render_document(
    catalog: &Catalog,
    vocabulary: &Vocabulary,
    config: &Config,
    report: &ValidationReport,
) -> ArsenalResult<String> {
    if !report.is_valid() {
        return Err(ArsenalError::Precondition {
            violations: report.fatal_lines(),
        });
    }
    Ok(render_unchecked(catalog, vocabulary, config))
}

/// Assemble the document without the precondition gate. Callers outside
/// tests should go through [`render_document`].
pub fn render_unchecked(catalog: &Catalog, vocabulary: &Vocabulary, config: &Config) -> String {
    let entries = &catalog.resources;
    let stats = CatalogStats::compute(entries, &config.render);
    let groups = group::group_by_domain(entries, vocabulary);

    let mut parts = vec![sections::header(config, &stats)];

    if !groups.is_empty() {
        parts.push(sections::navigation(&groups, vocabulary));
    }

    let quick_wins = sections::quick_wins_section(entries, config);
    if !quick_wins.is_empty() {
        parts.push(quick_wins);
    }

    for (domain, members) in &groups {
        parts.push(sections::domain_section(domain, members, vocabulary));
    }

    let trending = sections::trending_section(entries, config);
    if !trending.is_empty() {
        parts.push(trending);
    }

    if stats.total > 0 {
        parts.push(sections::stats_section(&stats));
    }

    parts.push(sections::footer(config));

    parts.join("\n")
}
