use crate::core::{FileSizeRecord, SkippedFile};
use crate::errors::{AuditError, Result};
use crate::io::{count_lines, ExclusionFilter, FileWalker};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct FileSizeAudit {
    /// Files over the threshold, in discovery order.
    pub oversized: Vec<FileSizeRecord>,
    pub scanned: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Counts lines in every front-end source file below one root.
pub struct FileSizeAuditor {
    root: PathBuf,
    extensions: Vec<String>,
    exclusion: ExclusionFilter,
    threshold: usize,
}

impl FileSizeAuditor {
    pub fn new(root: impl Into<PathBuf>, extensions: Vec<String>, threshold: usize) -> Self {
        Self {
            root: root.into(),
            extensions,
            exclusion: ExclusionFilter::default(),
            threshold,
        }
    }

    pub fn with_exclusion(mut self, exclusion: ExclusionFilter) -> Self {
        self.exclusion = exclusion;
        self
    }

    /// Walk the root and record files over the threshold.
    ///
    /// A file that cannot be read or decoded is logged and skipped; only a
    /// missing root fails the audit.
    pub fn audit(&self) -> Result<FileSizeAudit> {
        if !self.root.is_dir() {
            return Err(AuditError::RootNotFound(self.root.clone()));
        }

        let walker = FileWalker::new(&self.root)
            .with_extensions(&self.extensions)
            .with_exclusion(self.exclusion.clone());

        let mut result = FileSizeAudit::default();
        for path in walker.iter() {
            result.scanned += 1;
            match count_lines(&path) {
                Ok(lines) if lines > self.threshold => {
                    result.oversized.push(FileSizeRecord::new(path, lines));
                }
                Ok(_) => {}
                Err(error) => {
                    log::warn!("Could not read {}: {}", path.display(), error.reason());
                    result.skipped.push(SkippedFile::new(path, error));
                }
            }
        }
        Ok(result)
    }
}
