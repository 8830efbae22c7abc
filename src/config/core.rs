use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_REPORT_FILE: &str = "complejidad_reporte.txt";
pub const CONFIG_FILE_NAME: &str = ".complexity-audit.toml";

/// Which metric extraction capability to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// In-process tree-sitter and syn analyzers
    #[default]
    Builtin,
    /// External `lizard` executable
    Lizard,
}

/// Everything an audit run needs to know.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Directories scanned for function complexity.
    pub roots: Vec<PathBuf>,

    /// Glob patterns matched against full paths; matches are skipped.
    pub exclude_patterns: Vec<String>,

    /// Functions with complexity strictly above this are reported.
    pub ccn_threshold: u32,

    /// Directory audited for oversized files.
    pub frontend_root: PathBuf,

    /// Extensions (without dot) considered by the file size audit.
    pub frontend_extensions: Vec<String>,

    /// Glob patterns skipped by the file size audit only. Empty by default:
    /// every allow-listed file under `frontend_root` is counted.
    pub size_exclude_patterns: Vec<String>,

    /// Files with strictly more lines than this are reported.
    pub file_size_threshold: usize,

    /// Report destination; overwritten on every run.
    pub output: PathBuf,

    pub engine: EngineKind,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("src"), PathBuf::from("java-engine/src")],
            exclude_patterns: default_exclude_patterns(),
            ccn_threshold: 10,
            frontend_root: PathBuf::from("src"),
            frontend_extensions: ["ts", "tsx", "js", "jsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            size_exclude_patterns: Vec::new(),
            file_size_threshold: 100,
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            engine: EngineKind::Builtin,
        }
    }
}

fn default_exclude_patterns() -> Vec<String> {
    ["*/node_modules/*", "*/dist/*", "*/dist-java-engine/*", "*/target/*"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl AuditConfig {
    /// Extensions with any leading dot removed, as written in the report.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.frontend_extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect()
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output: Option<PathBuf>,
    pub ccn_threshold: Option<u32>,
    pub file_size_threshold: Option<usize>,
    pub engine: Option<EngineKind>,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: AuditConfig) -> AuditConfig {
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(threshold) = self.ccn_threshold {
            config.ccn_threshold = threshold;
        }
        if let Some(threshold) = self.file_size_threshold {
            config.file_size_threshold = threshold;
        }
        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert_eq!(config.ccn_threshold, 10);
        assert_eq!(config.file_size_threshold, 100);
        assert_eq!(config.output, PathBuf::from("complejidad_reporte.txt"));
        assert_eq!(config.engine, EngineKind::Builtin);
        assert!(config
            .exclude_patterns
            .contains(&"*/node_modules/*".to_string()));
        assert!(config.size_exclude_patterns.is_empty());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = ConfigOverrides {
            ccn_threshold: Some(15),
            ..Default::default()
        };
        let config = overrides.apply(AuditConfig::default());
        assert_eq!(config.ccn_threshold, 15);
        assert_eq!(config.file_size_threshold, 100);
    }

    #[test]
    fn test_normalized_extensions_strip_dots() {
        let config = AuditConfig {
            frontend_extensions: vec![".ts".into(), "tsx".into()],
            ..Default::default()
        };
        assert_eq!(config.normalized_extensions(), vec!["ts", "tsx"]);
    }
}
