//! Markdown pipe tables with display-width alignment
//!
//! Columns are padded to uniform display width so the generated source
//! stays readable in a plain editor, not just after Markdown rendering.
//! Width is measured with `unicode-width` since cells carry emoji.

use unicode_width::UnicodeWidthStr;

/// Render a pipe table. Panics are impossible: a row shorter than the
/// header is padded with empty cells.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();

    out.push('|');
    for (i, header) in headers.iter().enumerate() {
        out.push(' ');
        out.push_str(&pad(header, widths[i]));
        out.push_str(" |");
    }
    out.push('\n');

    out.push('|');
    for width in &widths {
        out.push_str(&format!(" {} |", "-".repeat(*width)));
    }
    out.push('\n');

    for row in rows {
        out.push('|');
        for i in 0..columns {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            out.push(' ');
            out.push_str(&pad(cell, widths[i]));
            out.push_str(" |");
        }
        out.push('\n');
    }

    out
}

fn pad(s: &str, width: usize) -> String {
    let deficit = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(deficit))
}

/// Make arbitrary text safe inside a table cell: pipes escaped, newlines
/// collapsed to spaces.
pub fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\n', '\r'], " ")
}

/// Thousands-separated integer, e.g. `29,000`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
