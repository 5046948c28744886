//! Aggregate statistics over a validated collection
//!
//! Everything here derives from entry data alone. The "newest data"
//! date is the maximum date found in the collection, never the wall
//! clock, so a rebuild over unchanged input is byte-identical.

use std::collections::HashMap;

use crate::config::RenderConfig;
use crate::models::{FlexibleDate, ResourceEntry};

#[derive(Debug, Clone, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub domains_covered: usize,
    /// First production-ready maturity level, the headline of the mix line
    pub top_maturity: String,
    pub top_maturity_pct: u32,
    pub production_ready_pct: u32,
    pub low_effort_pct: u32,
    pub avg_stars: Option<u64>,
    /// (tag, count), count descending then tag ascending
    pub popular_tags: Vec<(String, usize)>,
    /// Newest date present anywhere in the collection
    pub newest_date: Option<FlexibleDate>,
}

impl CatalogStats {
    pub fn compute(entries: &[ResourceEntry], config: &RenderConfig) -> Self {
        let total = entries.len();
        if total == 0 {
            return Self::default();
        }

        let top_maturity = config
            .production_ready
            .first()
            .cloned()
            .unwrap_or_default();
        let top_count = if top_maturity.is_empty() {
            0
        } else {
            entries.iter().filter(|e| e.maturity == top_maturity).count()
        };
        let production_ready = entries
            .iter()
            .filter(|e| config.production_ready.iter().any(|m| m == &e.maturity))
            .count();
        let low_effort = entries
            .iter()
            .filter(|e| e.effort.as_deref() == Some(config.quick_win_effort.as_str()))
            .count();

        let mut domains: Vec<&str> = entries
            .iter()
            .flat_map(|e| e.domains.iter().map(String::as_str))
            .collect();
        domains.sort_unstable();
        domains.dedup();

        let stars: Vec<u64> = entries.iter().filter_map(|e| e.github_stars).collect();
        let avg_stars = if stars.is_empty() {
            None
        } else {
            Some(stars.iter().sum::<u64>() / stars.len() as u64)
        };

        let mut tag_counts: HashMap<&str, usize> = HashMap::new();
        for entry in entries {
            for tag in &entry.tags {
                *tag_counts.entry(tag.as_str()).or_default() += 1;
            }
        }
        let mut popular_tags: Vec<(String, usize)> = tag_counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        popular_tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        popular_tags.truncate(config.popular_tags_limit);

        let newest_date = entries.iter().filter_map(|e| e.newest_date()).max();

        Self {
            total,
            domains_covered: domains.len(),
            top_maturity,
            top_maturity_pct: pct(top_count, total),
            production_ready_pct: pct(production_ready, total),
            low_effort_pct: pct(low_effort, total),
            avg_stars,
            popular_tags,
            newest_date,
        }
    }
}

fn pct(part: usize, total: usize) -> u32 {
    ((part * 100) / total) as u32
}
