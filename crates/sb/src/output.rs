//! Output formatting helpers for the `sb` CLI.
//!
//! Provides JSON output, table formatting, and human-readable star
//! display in both compact (row) and detailed (multi-line) formats.

use serde::Serialize;
use starboard_core::linkcheck::youtube_video_id;
use starboard_core::month::contributions_for_month;
use starboard_core::star::{Contribution, Star};
use std::io::{self, Write};

/// A view model for JSON output.
///
/// Field names are mapped from the internal `Star` type; empty optional
/// fields are omitted, and a contribution count is included so list
/// consumers do not need to re-derive it.
#[derive(Serialize)]
pub struct StarView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub contributions: usize,
}

impl StarView {
    /// Build a `StarView` from a `Star`.
    pub fn from_star(star: &Star) -> Self {
        Self {
            id: star.id.clone(),
            name: star.name.clone(),
            role: if star.role.is_empty() {
                None
            } else {
                Some(star.role.clone())
            },
            bio: if star.bio.is_empty() {
                None
            } else {
                Some(star.bio.clone())
            },
            contributions: star.contributions.len(),
        }
    }
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
///
/// Each row is a `Vec<String>` with columns matching the headers.
/// Column widths are computed from the data for alignment.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    // Compute column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    // Print header
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{:<width$}", header, width = widths[i]);
    }
    let _ = writeln!(handle);

    // Print separator
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{}", "-".repeat(*width));
    }
    let _ = writeln!(handle);

    // Print rows
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                let _ = write!(handle, "  ");
            }
            if i < widths.len() {
                let _ = write!(handle, "{:<width$}", cell, width = widths[i]);
            } else {
                let _ = write!(handle, "{}", cell);
            }
        }
        let _ = writeln!(handle);
    }
}

/// Format a star as a compact row for list output.
///
/// Returns a vector of column values suitable for [`output_table`].
/// When `month` is given, the count column only covers that month.
pub fn format_star_row(star: &Star, month: Option<&str>) -> Vec<String> {
    let count = match month {
        Some(prefix) => contributions_for_month(&star.contributions, prefix).len(),
        None => star.contributions.len(),
    };
    vec![
        star.id.clone(),
        star.name.clone(),
        star.role.clone(),
        count.to_string(),
    ]
}

/// Format a star in detailed multi-line view.
pub fn format_star_detail(star: &Star) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{} ({})", star.name, star.id));
    if !star.role.is_empty() {
        lines.push(format!("Role: {}", star.role));
    }
    if !star.bio.is_empty() {
        lines.push(String::new());
        lines.push(star.bio.clone());
    }

    if star.contributions.is_empty() {
        lines.push(String::new());
        lines.push("No contributions yet.".to_string());
    } else {
        lines.push(String::new());
        lines.push(format!("CONTRIBUTIONS ({})", star.contributions.len()));
        for (index, contribution) in star.contributions.iter().enumerate() {
            lines.push(format_contribution_line(index, contribution));
        }
    }

    lines.join("\n")
}

/// Format a single contribution as an indexed one-liner.
///
/// Format: `[{index}] {month} [{kind}] {title} -- {url}`
pub fn format_contribution_line(index: usize, contribution: &Contribution) -> String {
    let mut line = format!(
        "[{}] {} [{}] {} -- {}",
        index, contribution.month, contribution.kind, contribution.title, contribution.url,
    );
    if contribution.kind.as_str() == "youtube" {
        if let Some(video_id) = youtube_video_id(&contribution.url) {
            line.push_str(&format!(" (video {})", video_id));
        }
    }
    line
}
