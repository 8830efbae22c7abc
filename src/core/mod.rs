use crate::errors::AuditError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single function or method discovered by a metric extractor.
///
/// Records carry no identity beyond their fields: two overloads with the same
/// name and complexity in different files are both kept.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionMetric {
    pub file_path: PathBuf,
    pub function_name: String,
    pub complexity: u32,
    pub start_line: usize,
    pub end_line: usize,
}

impl FunctionMetric {
    pub fn new(file_path: PathBuf, function_name: impl Into<String>, complexity: u32) -> Self {
        Self {
            file_path,
            function_name: function_name.into(),
            complexity,
            start_line: 0,
            end_line: 0,
        }
    }

    pub fn with_span(mut self, start_line: usize, end_line: usize) -> Self {
        self.start_line = start_line;
        self.end_line = end_line;
        self
    }

    pub fn is_complex(&self, threshold: u32) -> bool {
        self.complexity > threshold
    }
}

/// All functions found in one source file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileMetrics {
    pub path: PathBuf,
    pub language: Language,
    pub functions: Vec<FunctionMetric>,
}

impl FileMetrics {
    pub fn new(path: PathBuf, language: Language, functions: Vec<FunctionMetric>) -> Self {
        Self {
            path,
            language,
            functions,
        }
    }
}

/// Line count of one front-end source file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSizeRecord {
    pub file_path: PathBuf,
    pub line_count: usize,
}

impl FileSizeRecord {
    pub fn new(file_path: PathBuf, line_count: usize) -> Self {
        Self {
            file_path,
            line_count,
        }
    }
}

/// A file left out of a scan because it could not be read, decoded or parsed.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: AuditError,
}

impl SkippedFile {
    pub fn new(path: PathBuf, error: AuditError) -> Self {
        Self { path, error }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Java,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&str, Language)] = &[
            ("rs", Language::Rust),
            ("py", Language::Python),
            ("js", Language::JavaScript),
            ("jsx", Language::JavaScript),
            ("mjs", Language::JavaScript),
            ("cjs", Language::JavaScript),
            ("ts", Language::TypeScript),
            ("tsx", Language::TypeScript),
            ("mts", Language::TypeScript),
            ("cts", Language::TypeScript),
            ("java", Language::Java),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(e, _)| e.eq_ignore_ascii_case(ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .map(|ext| Self::from_extension(&ext.to_string_lossy()))
            .unwrap_or(Language::Unknown)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::Rust => "Rust",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Java => "Java",
            Language::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}
