//! Filtering, ordering and table rendering of probe results.
//!
//! Rendering is plain text and deterministic: the same rows and options always produce
//! byte-identical output. Two layouts are supported:
//! - **compact**: fixed column widths, cells truncated with `...` on character boundaries,
//!   measured in terminal cells so wide characters keep the columns aligned,
//!   PR and issue counts condensed to a number plus marker letters
//! - **long**: columns sized to their widest cell, nothing truncated, counts spelled out
//!
//! # Compact markers
//! - PRs: `d` has drafts, `r` has PRs needing review
//! - Issues: `b` has bugs, `f` has feature requests, `!` has urgent issues

use crate::core::{
    options::{OutputFormat, RunOptions},
    state::{IssueSummary, PullRequestSummary, RepositoryResult},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";
const COLUMN_GAP: &str = "  ";
const PLACEHOLDER: &str = "-";
const URGENT_MARKER: &str = "🚨";

const HEADERS: [&str; 6] = ["Repository", "Branch", "Changes", "Last Commit", "PRs", "Issues"];
const COMPACT_WIDTHS: [usize; 6] = [22, 18, 8, 24, 6, 8];

/// Shorten `value` to at most `width` terminal cells, marking the cut with `...`
pub fn truncate(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    let (budget, marker) = if width <= ELLIPSIS.len() {
        (width, "")
    } else {
        (width - ELLIPSIS.len(), ELLIPSIS)
    };

    let mut shortened = String::new();
    let mut used = 0;
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        shortened.push(c);
    }
    shortened.push_str(marker);
    shortened
}

/// Left-align `cell` in `width` terminal cells
fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}

/// Apply the active filters, then the optional recency sort. Input order is kept otherwise.
pub fn select<'a>(results: &'a [RepositoryResult], options: &RunOptions) -> Vec<&'a RepositoryResult> {
    let mut rows: Vec<&RepositoryResult> = results.iter().filter(|r| options.keeps(r)).collect();
    if options.sort_by_recency {
        // Stable, so ties (including all the epoch-0 unknowns at the end) keep input order
        rows.sort_by(|a, b| b.last_commit_epoch.cmp(&a.last_commit_epoch));
    }
    rows
}

/// Header, separator and one line per surviving row
pub fn render(results: &[RepositoryResult], options: &RunOptions) -> String {
    render_rows(&select(results, options), options.format)
}

pub fn render_rows(rows: &[&RepositoryResult], format: OutputFormat) -> String {
    let cells: Vec<[String; 6]> = rows.iter().map(|row| row_cells(row, format)).collect();

    let widths = match format {
        OutputFormat::Compact => COMPACT_WIDTHS,
        OutputFormat::Long => {
            let mut widths = HEADERS.map(|h| h.width());
            for row in &cells {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.width());
                }
            }
            widths
        }
    };

    let header = format_line(&HEADERS.map(str::to_string), &widths, format);
    let separator = "-".repeat(header.width());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &cells {
        out.push_str(&format_line(row, &widths, format));
        out.push('\n');
    }
    out
}

fn format_line(cells: &[String; 6], widths: &[usize; 6], format: OutputFormat) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let cell = match format {
                OutputFormat::Compact => truncate(cell, width),
                OutputFormat::Long => cell.clone(),
            };
            pad(&cell, width)
        })
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn row_cells(row: &RepositoryResult, format: OutputFormat) -> [String; 6] {
    let name = row.repo.display_name().to_string();
    let changes = row.changes.to_string();

    if !row.status.is_ok() {
        let placeholder = PLACEHOLDER.to_string();
        return [
            name,
            placeholder.clone(),
            changes,
            placeholder.clone(),
            placeholder.clone(),
            placeholder,
        ];
    }

    let (prs, issues) = match format {
        OutputFormat::Compact => (
            compact_pull_requests(&row.pull_requests),
            compact_issues(&row.issues),
        ),
        OutputFormat::Long => (
            long_pull_requests(&row.pull_requests),
            long_issues(&row.issues),
        ),
    };

    [
        name,
        row.branch.clone(),
        changes,
        row.last_commit_summary.clone(),
        prs,
        issues,
    ]
}

fn compact_pull_requests(prs: &PullRequestSummary) -> String {
    let mut cell = prs.total.to_string();
    if prs.drafts > 0 {
        cell.push('d');
    }
    if prs.needs_review > 0 {
        cell.push('r');
    }
    cell
}

fn compact_issues(issues: &IssueSummary) -> String {
    let mut cell = issues.total.to_string();
    if issues.bugs > 0 {
        cell.push('b');
    }
    if issues.enhancements > 0 {
        cell.push('f');
    }
    if issues.urgent > 0 {
        cell.push('!');
    }
    cell
}

fn long_pull_requests(prs: &PullRequestSummary) -> String {
    if prs.total == 0 {
        return "none".to_string();
    }
    format!(
        "{} open ({} drafts, {} need review)",
        prs.total, prs.drafts, prs.needs_review
    )
}

fn long_issues(issues: &IssueSummary) -> String {
    if issues.total == 0 {
        return "none".to_string();
    }
    let mut cell = format!(
        "{} open ({} bugs, {} features)",
        issues.total, issues.bugs, issues.enhancements
    );
    if issues.urgent > 0 {
        cell.push(' ');
        cell.push_str(URGENT_MARKER);
    }
    cell
}
