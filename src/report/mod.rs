//! Plain-text audit report.
//!
//! The report has two sections (complexity alerts, then oversized front-end
//! files). Each has a title, the filter in effect, and either a fixed-width
//! table or an all-clear message. Rendering is pure; writing replaces the
//! previous report.

use crate::config::AuditConfig;
use crate::core::{FileSizeRecord, FunctionMetric};
use anyhow::Result;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

pub const NAME_COLUMN_WIDTH: usize = 40;
pub const MAX_NAME_LEN: usize = 38;
const TRUNCATED_PREFIX_LEN: usize = 35;
const ELLIPSIS: &str = "...";
const RULE_WIDTH: usize = 120;

/// Everything the renderer needs. Built once per run and discarded after
/// writing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub high_complexity: Vec<FunctionMetric>,
    pub large_files: Vec<FileSizeRecord>,
    pub ccn_threshold: u32,
    pub file_size_threshold: usize,
    pub frontend_root: PathBuf,
    pub frontend_extensions: Vec<String>,
}

impl Report {
    pub fn new(
        config: &AuditConfig,
        high_complexity: Vec<FunctionMetric>,
        large_files: Vec<FileSizeRecord>,
    ) -> Self {
        Self {
            high_complexity,
            large_files,
            ccn_threshold: config.ccn_threshold,
            file_size_threshold: config.file_size_threshold,
            frontend_root: config.frontend_root.clone(),
            frontend_extensions: config.normalized_extensions(),
        }
    }
}

/// Shorten names over 38 characters to 35 characters plus `...`.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_LEN {
        let prefix: String = name.chars().take(TRUNCATED_PREFIX_LEN).collect();
        format!("{prefix}{ELLIPSIS}")
    } else {
        name.to_string()
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn render_complexity_section(report: &Report, out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "=== High Cyclomatic Complexity (CCN) Functions Report ==="
    )?;
    writeln!(
        out,
        "Filter: only functions with CCN > {}\n",
        report.ccn_threshold
    )?;

    if report.high_complexity.is_empty() {
        writeln!(out, "Excellent!")?;
        return writeln!(
            out,
            "No functions with cyclomatic complexity greater than {} were detected in the project.",
            report.ccn_threshold
        );
    }

    writeln!(
        out,
        "Total functions found: {}\n",
        report.high_complexity.len()
    )?;
    writeln!(
        out,
        "{:<5} | {:<width$} | {}",
        "CCN",
        "Function/Method",
        "File",
        width = NAME_COLUMN_WIDTH
    )?;
    writeln!(out, "{}", rule())?;
    report.high_complexity.iter().try_for_each(|metric| {
        writeln!(
            out,
            "{:<5} | {:<width$} | {}",
            metric.complexity,
            truncate_name(&metric.function_name),
            metric.file_path.display(),
            width = NAME_COLUMN_WIDTH
        )
    })?;
    writeln!(out, "\n{}", rule())?;
    writeln!(
        out,
        "* Suggestion: consider refactoring these functions to make them more readable, testable and maintainable."
    )
}

fn render_file_size_section(report: &Report, out: &mut String) -> fmt::Result {
    let extensions = report
        .frontend_extensions
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "=== Large Frontend Files Report ===")?;
    writeln!(
        out,
        "Filter: {} files with more than {} lines in '{}'\n",
        extensions,
        report.file_size_threshold,
        report.frontend_root.display()
    )?;

    if report.large_files.is_empty() {
        writeln!(out, "Excellent!")?;
        return writeln!(
            out,
            "No frontend files with more than {} lines were detected.",
            report.file_size_threshold
        );
    }

    writeln!(out, "Total files found: {}\n", report.large_files.len())?;
    writeln!(out, "{:<8} | {}", "Lines", "File")?;
    writeln!(out, "{}", rule())?;
    report.large_files.iter().try_for_each(|record| {
        writeln!(
            out,
            "{:<8} | {}",
            record.line_count,
            record.file_path.display()
        )
    })?;
    writeln!(out, "\n{}", rule())?;
    writeln!(
        out,
        "* Suggestion: consider splitting these files into smaller components or hooks, or extracting utilities."
    )
}

/// Render the full report text.
pub fn render_report(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render_complexity_section(report, &mut out)?;
    out.push_str("\n\n");
    render_file_size_section(report, &mut out)?;
    Ok(out)
}

/// Render and write the report, replacing any existing file.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    crate::io::write_file(path, &render_report(report)?)
}

pub fn complexity_summary(alerts: usize) -> String {
    if alerts == 0 {
        "Complexity report clean.".to_string()
    } else {
        format!("Complexity report generated with {alerts} alerts.")
    }
}

pub fn file_size_summary(alerts: usize) -> String {
    if alerts == 0 {
        "Large files report clean.".to_string()
    } else {
        format!("Large files report generated with {alerts} alerts.")
    }
}
