// Export modules for library usage
pub mod analyzers;
pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::core::{FileMetrics, FileSizeRecord, FunctionMetric, Language, SkippedFile};

pub use crate::analyzers::{AnalyzerRegistry, LanguageAnalyzer};

pub use crate::audit::{run_audit, select_and_sort, FileSizeAuditor};

pub use crate::config::{AuditConfig, EngineKind};

pub use crate::errors::AuditError;

pub use crate::extraction::{BuiltinExtractor, Extraction, LizardExtractor, MetricExtractor};

pub use crate::io::ExclusionFilter;

pub use crate::report::{render_report, truncate_name, write_report, Report};
