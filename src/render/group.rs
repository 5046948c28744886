//! Grouping, ordering, and predicate filters
//!
//! Pure functions over a validated collection. All orderings are total
//! and deterministic so that repeated runs over unchanged input produce
//! byte-identical documents.

use std::cmp::Ordering;

use crate::config::RenderConfig;
use crate::models::ResourceEntry;
use crate::vocabulary::Vocabulary;

/// Partition entries by each declared domain, in vocabulary order.
///
/// An entry with domains {A, B} appears under both A and B. Domains with
/// no entries are omitted. Entries within a group are sorted by stars
/// descending (missing stars last) with a case-insensitive title
/// tiebreak.
pub fn group_by_domain<'a>(
    entries: &'a [ResourceEntry],
    vocab: &Vocabulary,
) -> Vec<(String, Vec<&'a ResourceEntry>)> {
    let mut groups = Vec::new();

    for term in &vocab.domains {
        let mut members: Vec<&ResourceEntry> = entries
            .iter()
            .filter(|e| e.domains.iter().any(|d| d == &term.name))
            .collect();
        if members.is_empty() {
            continue;
        }
        sort_by_stars(&mut members);
        groups.push((term.name.clone(), members));
    }

    groups
}

/// Stars descending, entries without a count last, titles ascending
/// case-insensitively on ties.
pub fn sort_by_stars(entries: &mut [&ResourceEntry]) {
    entries.sort_by(|a, b| {
        star_key(b)
            .cmp(&star_key(a))
            .then_with(|| title_key(a).cmp(&title_key(b)))
    });
}

fn star_key(entry: &ResourceEntry) -> Option<u64> {
    entry.github_stars
}

fn title_key(entry: &ResourceEntry) -> String {
    entry.title.to_lowercase()
}

/// Quick wins: configured effort level AND production-ready maturity.
///
/// Battle-tested entries lead, then stars descending, then title. The
/// maturity-first ordering survives here because the section exists to
/// rank impact, not popularity.
pub fn quick_wins<'a>(
    entries: &'a [ResourceEntry],
    config: &RenderConfig,
) -> Vec<&'a ResourceEntry> {
    let mut wins: Vec<&ResourceEntry> = entries
        .iter()
        .filter(|e| {
            e.effort.as_deref() == Some(config.quick_win_effort.as_str())
                && config.production_ready.iter().any(|m| m == &e.maturity)
        })
        .collect();

    wins.sort_by(|a, b| {
        maturity_rank(a, config)
            .cmp(&maturity_rank(b, config))
            .then_with(|| star_key(b).cmp(&star_key(a)))
            .then_with(|| title_key(a).cmp(&title_key(b)))
    });
    wins.truncate(config.quick_wins_limit);
    wins
}

fn maturity_rank(entry: &ResourceEntry, config: &RenderConfig) -> usize {
    config
        .production_ready
        .iter()
        .position(|m| m == &entry.maturity)
        .unwrap_or(usize::MAX)
}

/// Recently added: `added` date descending (entries without one last),
/// then stars, then title.
pub fn recently_added<'a>(
    entries: &'a [ResourceEntry],
    config: &RenderConfig,
) -> Vec<&'a ResourceEntry> {
    let mut recent: Vec<&ResourceEntry> = entries.iter().collect();
    recent.sort_by(|a, b| {
        cmp_dates_desc(a, b)
            .then_with(|| star_key(b).cmp(&star_key(a)))
            .then_with(|| title_key(a).cmp(&title_key(b)))
    });
    recent.truncate(config.trending_limit);
    recent
}

fn cmp_dates_desc(a: &ResourceEntry, b: &ResourceEntry) -> Ordering {
    b.added_date().cmp(&a.added_date())
}
