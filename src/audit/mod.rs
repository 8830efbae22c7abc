//! The audit pipeline: capability check, complexity scan, file size scan,
//! report.
//!
//! Every phase runs sequentially and hands an owned result to the next one.
//! Console progress is written to the supplied writer so callers decide
//! where it goes.

pub mod file_size;
pub mod threshold;

pub use file_size::{FileSizeAudit, FileSizeAuditor};
pub use threshold::{high_complexity, large_files, select_and_sort};

use crate::config::AuditConfig;
use crate::core::{FileSizeRecord, FunctionMetric, SkippedFile};
use crate::extraction::MetricExtractor;
use crate::io::ExclusionFilter;
use crate::report::{self, Report};
use anyhow::{Context, Result};
use std::io::Write;

/// Run extraction and keep the functions over the CCN threshold.
pub fn scan_complexity(
    extractor: &dyn MetricExtractor,
    config: &AuditConfig,
) -> Result<(Vec<FunctionMetric>, Vec<SkippedFile>)> {
    let extraction = extractor
        .analyze(&config.roots, &config.exclude_patterns)
        .with_context(|| format!("{} extraction failed", extractor.name()))?;
    log::info!(
        "Extracted {} functions from {} files",
        extraction.function_count(),
        extraction.files.len()
    );
    Ok((
        high_complexity(&extraction.files, config.ccn_threshold),
        extraction.skipped,
    ))
}

/// Count lines below the front-end root and keep the oversized files.
pub fn scan_file_sizes(config: &AuditConfig) -> Result<(Vec<FileSizeRecord>, Vec<SkippedFile>)> {
    let audit = FileSizeAuditor::new(
        &config.frontend_root,
        config.normalized_extensions(),
        config.file_size_threshold,
    )
    .with_exclusion(ExclusionFilter::new(&config.size_exclude_patterns))
    .audit()?;
    log::info!(
        "Counted lines in {} files under {}",
        audit.scanned,
        config.frontend_root.display()
    );
    Ok((
        large_files(audit.oversized, config.file_size_threshold),
        audit.skipped,
    ))
}

/// Run every phase and write the report.
///
/// The capability check happens before any file is touched; its
/// [`crate::errors::AuditError::CapabilityUnavailable`] is returned as the
/// root cause so callers can tell it apart from other failures.
pub fn run_audit(
    config: &AuditConfig,
    extractor: &dyn MetricExtractor,
    console: &mut dyn Write,
) -> Result<Report> {
    extractor.ensure_available()?;

    writeln!(console, "Evaluating cyclomatic complexity (CCN)...")?;
    let (high_complexity, unmeasured) = scan_complexity(extractor, config)?;
    for skip in &unmeasured {
        writeln!(
            console,
            "Could not analyze {}: {}",
            skip.path.display(),
            skip.error.reason()
        )?;
    }
    writeln!(
        console,
        "{}",
        report::complexity_summary(high_complexity.len())
    )?;

    writeln!(console, "Evaluating frontend file sizes...")?;
    let (large_files, skipped) = scan_file_sizes(config)?;
    for skip in &skipped {
        writeln!(
            console,
            "Could not read {}: {}",
            skip.path.display(),
            skip.error.reason()
        )?;
    }
    writeln!(console, "{}", report::file_size_summary(large_files.len()))?;

    let report = Report::new(config, high_complexity, large_files);
    report::write_report(&report, &config.output)?;
    writeln!(
        console,
        "Report file created/updated: {}",
        config.output.display()
    )?;

    Ok(report)
}
