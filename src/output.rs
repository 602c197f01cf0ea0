//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Build
//!
//! One line per file written, path first, with a short detail where it helps:
//!
//! ```text
//!   built  talks/2025-11-11-wang.html  (Causal Inference with Many Treatments)
//!   built  seminars.html  (12 talks)
//!   built  index.html
//!   built  jsm.html
//!   built  awards.html
//!   built  style.css
//! Done. Site written to dist
//! ```
//!
//! ## Check
//!
//! An inventory of the talks in listing order, grouped by season:
//!
//! ```text
//! Fall 2025 (2 talks)
//!     001 Causal Inference with Many Treatments
//!         Slug: 2025-11-11-wang
//!         Date: November 11, 2025
//!         Speaker: Jane Doe
//!     002 ...
//!
//! 12 talks in _talks
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::site::{BuildEvent, BuildReport, CheckReport};

/// Longest title shown after a built talk page.
const TITLE_WIDTH: usize = 60;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// First `max` characters of `text`.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format a single build progress event as display lines.
pub fn format_build_event(event: &BuildEvent) -> Vec<String> {
    match event {
        BuildEvent::NoTalks { talks_dir } => {
            vec![format!("No .md files found in {}", talks_dir.display())]
        }
        BuildEvent::Built(page) => match &page.detail {
            Some(detail) => vec![format!(
                "  built  {}  ({})",
                page.path,
                truncate_chars(detail, TITLE_WIDTH)
            )],
            None => vec![format!("  built  {}", page.path)],
        },
    }
}

pub fn print_build_event(event: &BuildEvent) {
    for line in format_build_event(event) {
        println!("{}", line);
    }
}

/// Closing line after a successful build.
pub fn format_build_summary(report: &BuildReport) -> Vec<String> {
    vec![format!("Done. Site written to {}", report.output_dir.display())]
}

pub fn print_build_summary(report: &BuildReport) {
    for line in format_build_summary(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the talk inventory produced by `check`.
///
/// Information-first: each talk leads with its positional index and title,
/// with slug, date and speaker as indented context. Optional fields are
/// omitted rather than shown empty.
pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();

    for season in &report.seasons {
        lines.push(format!(
            "{} ({})",
            season.label,
            plural(season.talks.len(), "talk", "talks")
        ));
        for (i, talk) in season.talks.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(i + 1), talk.title));
            lines.push(format!("{}Slug: {}", indent(2), talk.slug));
            if let Some(date) = &talk.date {
                lines.push(format!("{}Date: {}", indent(2), date));
            }
            if !talk.speaker.is_empty() {
                lines.push(format!("{}Speaker: {}", indent(2), talk.speaker));
            }
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "{} in {}",
        plural(report.talk_count(), "talk", "talks"),
        report.talks_dir.display()
    ));
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
