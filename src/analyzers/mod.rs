use crate::core::{FunctionMetric, Language};
use crate::errors::{AuditError, Result};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;
pub mod syntax_tree;

/// Per-language cyclomatic complexity capability.
///
/// Implementations are registered in an [`AnalyzerRegistry`] under every
/// extension they claim; aggregation and rendering never see which one ran.
pub trait LanguageAnalyzer: Send + Sync {
    fn name(&self) -> &'static str;
    fn language(&self) -> Language;
    /// Extensions handled, without the leading dot.
    fn extensions(&self) -> &'static [&'static str];
    fn analyze_source(&self, path: &Path, source: &str) -> Result<Vec<FunctionMetric>>;
}

/// Language analyzers keyed by lowercase file extension.
#[derive(Clone, Default)]
pub struct AnalyzerRegistry {
    by_extension: BTreeMap<String, Arc<dyn LanguageAnalyzer>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in analyzer.
    pub fn with_defaults() -> Self {
        type AnalyzerFactory = fn() -> Arc<dyn LanguageAnalyzer>;

        static BUILTIN_ANALYZERS: &[AnalyzerFactory] = &[
            || Arc::new(javascript::JavaScriptAnalyzer::new_javascript()),
            || Arc::new(javascript::JavaScriptAnalyzer::new_typescript()),
            || Arc::new(javascript::JavaScriptAnalyzer::new_tsx()),
            || Arc::new(python::PythonAnalyzer::new()),
            || Arc::new(java::JavaAnalyzer::new()),
            || Arc::new(rust::RustAnalyzer::new()),
        ];

        BUILTIN_ANALYZERS
            .iter()
            .fold(Self::new(), |registry, factory| registry.with(factory()))
    }

    /// Register `analyzer` for each of its extensions, replacing any
    /// analyzer already registered for them.
    pub fn register(&mut self, analyzer: Arc<dyn LanguageAnalyzer>) {
        for ext in analyzer.extensions() {
            if let Some(previous) = self
                .by_extension
                .insert(ext.to_ascii_lowercase(), Arc::clone(&analyzer))
            {
                log::debug!(
                    "Analyzer '{}' replaces '{}' for .{}",
                    analyzer.name(),
                    previous.name(),
                    ext
                );
            }
        }
    }

    pub fn with(mut self, analyzer: Arc<dyn LanguageAnalyzer>) -> Self {
        self.register(analyzer);
        self
    }

    pub fn analyzer_for(&self, path: &Path) -> Option<&dyn LanguageAnalyzer> {
        let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
        self.by_extension.get(&ext).map(|a| a.as_ref())
    }

    pub fn supported_extensions(&self) -> Vec<&str> {
        self.by_extension.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }

    /// Read and analyze a single file with whichever analyzer claims it.
    pub fn analyze_file(&self, path: &Path) -> Result<Vec<FunctionMetric>> {
        let analyzer = self.analyzer_for(path).ok_or_else(|| {
            AuditError::parse(path, "no analyzer registered for this file type")
        })?;
        let source = std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
        analyzer.analyze_source(path, &source)
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.by_extension.iter().map(|(ext, a)| (ext, a.name())))
            .finish()
    }
}
