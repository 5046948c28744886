//! Document section builders
//!
//! Each function returns one Markdown section as a string; `render`
//! in the parent module concatenates them in order. No section reads
//! the clock or any state outside the validated collection, the
//! vocabulary, and the config.

use crate::config::Config;
use crate::models::ResourceEntry;
use crate::stats::CatalogStats;
use crate::vocabulary::Vocabulary;

use super::group;
use super::table::{escape_cell, format_count, render_table};

pub fn header(config: &Config, stats: &CatalogStats) -> String {
    let mut badges = vec![
        badge("Resources", &stats.total.to_string(), "blue"),
        badge("Domains", &stats.domains_covered.to_string(), "green"),
    ];
    if let Some(date) = &stats.newest_date {
        badges.push(badge("Data", &date.badge_label(), "orange"));
    }

    format!(
        "# {}\n\n{}\n\n{}\n",
        config.document.title,
        config.document.intro,
        badges.join(" ")
    )
}

fn badge(label: &str, value: &str, color: &str) -> String {
    // shields.io static badge; spaces and dashes need escaping
    let encode = |s: &str| s.replace('-', "--").replace(' ', "%20");
    format!(
        "![{label}](https://img.shields.io/badge/{}-{}-{color})",
        encode(label),
        encode(value)
    )
}

pub fn navigation(
    groups: &[(String, Vec<&ResourceEntry>)],
    vocab: &Vocabulary,
) -> String {
    let mut out = String::from("## Contents\n\n");
    for (domain, members) in groups {
        let title = display_title(vocab, domain);
        let noun = if members.len() == 1 {
            "resource"
        } else {
            "resources"
        };
        out.push_str(&format!(
            "- [{title}](#{}) — {} {noun}\n",
            anchor(title),
            members.len()
        ));
    }
    out
}

pub fn domain_section(
    domain: &str,
    members: &[&ResourceEntry],
    vocab: &Vocabulary,
) -> String {
    let rows: Vec<Vec<String>> = members
        .iter()
        .map(|e| {
            vec![
                linked_title(e),
                stars_cell(e),
                maturity_cell(e, vocab),
                tags_cell(e),
                escape_cell(&e.summary),
            ]
        })
        .collect();

    format!(
        "## {}\n\n{}",
        display_title(vocab, domain),
        render_table(&["Resource", "Stars", "Maturity", "Tags", "Summary"], &rows)
    )
}

pub fn quick_wins_section(entries: &[ResourceEntry], config: &Config) -> String {
    let wins = group::quick_wins(entries, &config.render);
    if wins.is_empty() {
        return String::new();
    }

    let rows: Vec<Vec<String>> = wins
        .iter()
        .map(|e| {
            vec![
                linked_title(e),
                maturity_plain(e),
                stars_cell(e),
                escape_cell(e.why_useful.as_deref().unwrap_or(&e.summary)),
            ]
        })
        .collect();

    format!(
        "## ⚡ Quick Wins\n\n{}-effort, production-ready picks.\n\n{}",
        config.render.quick_win_effort,
        render_table(&["Resource", "Maturity", "Stars", "Why"], &rows)
    )
}

pub fn trending_section(entries: &[ResourceEntry], config: &Config) -> String {
    let recent = group::recently_added(entries, &config.render);
    let recent: Vec<&ResourceEntry> = recent
        .into_iter()
        .filter(|e| e.added.is_some())
        .collect();
    if recent.is_empty() {
        return String::new();
    }

    let rows: Vec<Vec<String>> = recent
        .iter()
        .map(|e| {
            vec![
                linked_title(e),
                e.added_date()
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                stars_cell(e),
            ]
        })
        .collect();

    format!(
        "## 🌱 Recently Added\n\n{}",
        render_table(&["Resource", "Added", "Stars"], &rows)
    )
}

pub fn stats_section(stats: &CatalogStats) -> String {
    let mut out = String::from("## 📊 Catalog Stats\n\n");
    out.push_str(&format!(
        "- **{}** resources across **{}** domains\n",
        stats.total, stats.domains_covered
    ));
    let mut mix = Vec::new();
    if !stats.top_maturity.is_empty() {
        mix.push(format!("{}: {}%", stats.top_maturity, stats.top_maturity_pct));
    }
    mix.push(format!("Production-ready: {}%", stats.production_ready_pct));
    mix.push(format!("Low-effort: {}%", stats.low_effort_pct));
    out.push_str(&format!("- {}\n", mix.join(" · ")));
    if let Some(avg) = stats.avg_stars {
        out.push_str(&format!(
            "- Average GitHub stars: {}\n",
            format_count(avg)
        ));
    }

    if !stats.popular_tags.is_empty() {
        out.push_str("\n**Popular tags:** ");
        let tags: Vec<String> = stats
            .popular_tags
            .iter()
            .map(|(tag, _)| format!("`{tag}`"))
            .collect();
        out.push_str(&tags.join(" "));
        out.push('\n');
    }

    out
}

pub fn footer(config: &Config) -> String {
    format!(
        "---\n\nContributions welcome — add an entry to `{}` and run `arsenal generate`.\n\n\
         <!-- Generated by arsenal from {} - DO NOT EDIT directly -->\n",
        config.paths.resources.display(),
        config.paths.resources.display()
    )
}

fn display_title<'a>(vocab: &'a Vocabulary, domain: &'a str) -> &'a str {
    vocab
        .domain(domain)
        .map(|t| t.display_title())
        .unwrap_or(domain)
}

fn linked_title(entry: &ResourceEntry) -> String {
    format!("[{}]({})", escape_cell(&entry.title), entry.url)
}

fn stars_cell(entry: &ResourceEntry) -> String {
    entry
        .github_stars
        .map(format_count)
        .unwrap_or_else(|| "—".to_string())
}

fn maturity_cell(entry: &ResourceEntry, vocab: &Vocabulary) -> String {
    let emoji = vocab.maturity_emoji(&entry.maturity);
    if emoji.is_empty() {
        entry.maturity.clone()
    } else {
        format!("{} {}", emoji, entry.maturity)
    }
}

fn maturity_plain(entry: &ResourceEntry) -> String {
    entry.maturity.clone()
}

fn tags_cell(entry: &ResourceEntry) -> String {
    entry
        .tags
        .iter()
        .map(|t| format!("`{t}`"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// GitHub-style heading anchor: lowercase, spaces become hyphens,
/// everything but alphanumerics and hyphens dropped.
pub fn anchor(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c == ' ' {
                Some('-')
            } else if c == '-' {
                Some('-')
            } else {
                None
            }
        })
        .collect()
}
