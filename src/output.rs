//! CLI summary formatting.
//!
//! ```text
//! Squared (crop, 400px)
//! 001 input.jpg
//!     Output: sqrl-crop-input.jpg
//! 002 trips/beach.png
//!     Output: sqrl-crop-beach.png
//!
//! Failed
//! 001 broken.jpg
//!     Error: Failed to decode broken.jpg: ...
//!
//! 2 squared, 1 failed
//! ```
//!
//! [`format_report`] is pure (returns `Vec<String>`) for testability;
//! [`print_report`] writes it to stdout. Paths are shown relative to the
//! directory the run was rooted at when possible.

use crate::process::ProcessReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Format the summary of a run.
pub fn format_report(report: &ProcessReport, root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.squared.is_empty() {
        lines.push(format!("Squared ({}, {}px)", report.mode, report.size));
        for (i, item) in report.squared.iter().enumerate() {
            lines.push(format!(
                "{} {}",
                format_index(i + 1),
                display_path(&item.source, root)
            ));
            lines.push(format!(
                "{}Output: {}",
                indent(1),
                display_path(&item.output, root)
            ));
        }
    }

    if !report.failed.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Failed".to_string());
        for (i, item) in report.failed.iter().enumerate() {
            lines.push(format!(
                "{} {}",
                format_index(i + 1),
                display_path(&item.source, root)
            ));
            lines.push(format!("{}Error: {}", indent(1), item.error));
        }
    }

    if report.total() == 0 {
        lines.push("No images found".to_string());
    } else {
        lines.push(String::new());
        lines.push(format!(
            "{} squared, {} failed",
            report.squared.len(),
            report.failed.len()
        ));
    }

    lines
}

pub fn print_report(report: &ProcessReport, root: &Path) {
    for line in format_report(report, root) {
        println!("{}", line);
    }
}
