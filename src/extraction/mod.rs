//! Metric extraction engines.
//!
//! A [`MetricExtractor`] turns a set of root directories plus exclusion
//! patterns into per-file function metrics. The audit pipeline only talks to
//! this trait, so engines can be swapped through configuration.

use crate::analyzers::AnalyzerRegistry;
use crate::config::EngineKind;
use crate::core::{FileMetrics, Language, SkippedFile};
use crate::errors::{AuditError, Result};
use crate::io::{ExclusionFilter, FileWalker};
use std::path::{Path, PathBuf};

pub mod lizard;

pub use lizard::LizardExtractor;

/// Output of one extraction run.
#[derive(Debug, Default)]
pub struct Extraction {
    pub files: Vec<FileMetrics>,
    /// Files the engine found but could not measure.
    pub skipped: Vec<SkippedFile>,
}

impl Extraction {
    pub fn function_count(&self) -> usize {
        self.files.iter().map(|f| f.functions.len()).sum()
    }
}

pub trait MetricExtractor {
    fn name(&self) -> &str;

    /// Fails when the engine cannot run at all. Called before any scanning.
    fn ensure_available(&self) -> Result<()>;

    fn analyze(&self, roots: &[PathBuf], exclude_patterns: &[String]) -> Result<Extraction>;
}

/// Build the extractor selected in the configuration.
pub fn create_extractor(engine: EngineKind) -> Box<dyn MetricExtractor> {
    match engine {
        EngineKind::Builtin => Box::new(BuiltinExtractor::new(AnalyzerRegistry::with_defaults())),
        EngineKind::Lizard => Box::new(LizardExtractor::new()),
    }
}

/// In-process extraction through an [`AnalyzerRegistry`].
pub struct BuiltinExtractor {
    registry: AnalyzerRegistry,
}

impl BuiltinExtractor {
    pub fn new(registry: AnalyzerRegistry) -> Self {
        Self { registry }
    }

    fn analyze_root(&self, root: &Path, exclusion: &ExclusionFilter, out: &mut Extraction) {
        if !root.exists() {
            log::warn!("Skipping missing root {}", root.display());
            return;
        }

        let walker = FileWalker::new(root)
            .with_extensions(self.registry.supported_extensions())
            .with_exclusion(exclusion.clone());

        for path in walker.iter() {
            self.analyze_path(path, out);
        }
    }

    fn analyze_path(&self, path: PathBuf, out: &mut Extraction) {
        let Some(analyzer) = self.registry.analyzer_for(&path) else {
            return;
        };
        log::debug!("Analyzing {} with {}", path.display(), analyzer.name());
        match self.registry.analyze_file(&path) {
            Ok(functions) => out
                .files
                .push(FileMetrics::new(path, analyzer.language(), functions)),
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e.reason());
                out.skipped.push(SkippedFile::new(path, e));
            }
        }
    }
}

impl MetricExtractor for BuiltinExtractor {
    fn name(&self) -> &str {
        "builtin"
    }

    fn ensure_available(&self) -> Result<()> {
        if self.registry.is_empty() {
            return Err(AuditError::capability(
                self.name(),
                "Register at least one language analyzer before running an audit.",
            ));
        }
        Ok(())
    }

    fn analyze(&self, roots: &[PathBuf], exclude_patterns: &[String]) -> Result<Extraction> {
        let exclusion = ExclusionFilter::new(exclude_patterns);
        let mut extraction = Extraction::default();
        for root in roots {
            self.analyze_root(root, &exclusion, &mut extraction);
        }
        Ok(extraction)
    }
}

pub(crate) fn language_of(path: &Path) -> Language {
    Language::from_path(path)
}
