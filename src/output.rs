//! Human-readable terminal output
//!
//! Pure `format_*` functions build strings; the thin `print_*` wrappers
//! are the only place that touches stdout/stderr. Color is applied only
//! when stdout is a terminal and neither `NO_COLOR` nor
//! `ARSENAL_NO_COLOR` is set.

use crossterm::style::Stylize;
use is_terminal::IsTerminal;
use similar::{ChangeTag, TextDiff};

use crate::config::ConfigWarning;
use crate::validate::{Severity, ValidationReport, Violation};

pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("ARSENAL_NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// One violation as a report line: `✗ id/field [kind] message`.
pub fn format_violation(violation: &Violation, color: bool) -> String {
    let marker = match violation.severity {
        Severity::Fatal => "✗",
        Severity::Warning => "⚠",
    };
    let line = format!(
        "{marker} {}/{} [{}] {}",
        violation.entry_id, violation.field, violation.kind, violation.message
    );

    if !color {
        return line;
    }
    match violation.severity {
        Severity::Fatal => format!("{}", line.red()),
        Severity::Warning => format!("{}", line.yellow()),
    }
}

/// Full validation report: violations sorted fatal-first, then a
/// one-line summary.
pub fn format_report(report: &ValidationReport, color: bool) -> String {
    let mut out = String::new();

    let mut ordered: Vec<&Violation> = report.violations.iter().collect();
    ordered.sort_by_key(|v| match v.severity {
        Severity::Fatal => 0,
        Severity::Warning => 1,
    });

    for violation in ordered {
        out.push_str(&format_violation(violation, color));
        out.push('\n');
    }
    if !report.violations.is_empty() {
        out.push('\n');
    }
    out.push_str(&format_summary(report, color));
    out
}

pub fn format_summary(report: &ValidationReport, color: bool) -> String {
    let fatals = report.fatals();
    let warnings = report.warnings();

    if fatals == 0 && warnings == 0 {
        let line = "✓ validation passed".to_string();
        return if color {
            format!("{}", line.green())
        } else {
            line
        };
    }

    let line = format!(
        "{} fatal violation(s), {} warning(s)",
        fatals, warnings
    );
    if !color {
        line
    } else if fatals > 0 {
        format!("{}", line.red())
    } else {
        format!("{}", line.yellow())
    }
}

pub fn format_config_warning(warning: &ConfigWarning) -> String {
    let mut line = format!(
        "⚠ unknown config key '{}' in {}",
        warning.key,
        warning.file.display()
    );
    if let Some(n) = warning.line {
        line.push_str(&format!(" (line {n})"));
    }
    if let Some(s) = &warning.suggestion {
        line.push_str(&format!(" — did you mean '{s}'?"));
    }
    line
}

/// Unified diff between the document on disk and the fresh render.
pub fn format_diff(path: &str, old: &str, new: &str, color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();

    out.push_str(&diff_line(&format!("--- a/{path}"), ChangeTag::Equal, color, true));
    out.push('\n');
    out.push_str(&diff_line(&format!("+++ b/{path}"), ChangeTag::Equal, color, true));
    out.push('\n');

    for change in diff.iter_all_changes() {
        if change.tag() == ChangeTag::Equal {
            continue;
        }
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        let value = change.value().trim_end_matches('\n');
        out.push_str(&diff_line(
            &format!("{sign} {value}"),
            change.tag(),
            color,
            false,
        ));
        out.push('\n');
    }

    out
}

fn diff_line(s: &str, tag: ChangeTag, color: bool, header: bool) -> String {
    if !color {
        return s.to_string();
    }
    if header {
        return format!("{}", s.cyan());
    }
    match tag {
        ChangeTag::Delete => format!("{}", s.red()),
        ChangeTag::Insert => format!("{}", s.green()),
        ChangeTag::Equal => format!("{}", s.dim()),
    }
}

pub fn print_report(report: &ValidationReport) {
    print!("{}", format_report(report, supports_color()));
    println!();
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        eprintln!("{}", format_config_warning(warning));
    }
}
