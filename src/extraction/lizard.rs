use super::{language_of, Extraction, MetricExtractor};
use crate::core::{FileMetrics, FunctionMetric};
use crate::errors::{AuditError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

const PROGRAM: &str = "lizard";
const INSTALL_HINT: &str = "Please install it by running: pip install lizard";

// lizard --csv columns
const COL_CCN: usize = 1;
const COL_FILE: usize = 6;
const COL_NAME: usize = 7;
const COL_START: usize = 9;
const COL_END: usize = 10;

/// Extraction through the external `lizard` command.
pub struct LizardExtractor {
    program: PathBuf,
}

impl LizardExtractor {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(PROGRAM),
        }
    }

    /// Use a specific executable instead of searching `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn resolve(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|e| {
            log::debug!("{} not found: {e}", self.program.display());
            AuditError::capability(PROGRAM, INSTALL_HINT)
        })
    }
}

impl Default for LizardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricExtractor for LizardExtractor {
    fn name(&self) -> &str {
        PROGRAM
    }

    fn ensure_available(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }

    fn analyze(&self, roots: &[PathBuf], exclude_patterns: &[String]) -> Result<Extraction> {
        let program = self.resolve()?;
        let mut command = Command::new(program);
        command.arg("--csv");
        for pattern in exclude_patterns {
            command.arg("-x").arg(pattern);
        }
        command.args(roots);

        log::debug!("Running {command:?}");
        let output = command
            .output()
            .map_err(|e| AuditError::external(PROGRAM, e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        // lizard exits non-zero when it finds warnings; only an empty
        // result together with a failure status is an error.
        if !output.status.success() && stdout.trim().is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AuditError::external(PROGRAM, stderr.trim().to_string()));
        }

        Ok(Extraction {
            files: parse_csv(&stdout)?,
            skipped: Vec::new(),
        })
    }
}

/// Group lizard CSV rows into per-file metrics, keeping first-seen order.
pub fn parse_csv(text: &str) -> Result<Vec<FileMetrics>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut files: Vec<FileMetrics> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();

    for record in reader.records() {
        let record = record.map_err(|e| AuditError::external(PROGRAM, e.to_string()))?;
        let Some(metric) = parse_row(&record) else {
            continue;
        };
        let slot = *index.entry(metric.file_path.clone()).or_insert_with(|| {
            let path = metric.file_path.clone();
            files.push(FileMetrics::new(path.clone(), language_of(&path), Vec::new()));
            files.len() - 1
        });
        files[slot].functions.push(metric);
    }

    Ok(files)
}

fn parse_row(record: &csv::StringRecord) -> Option<FunctionMetric> {
    // Header rows and anything else without a numeric CCN are skipped.
    let complexity = record.get(COL_CCN)?.trim().parse::<u32>().ok()?;
    let file = record.get(COL_FILE)?.trim();
    let name = record.get(COL_NAME)?.trim();
    let start = field_usize(record, COL_START);
    let end = field_usize(record, COL_END);
    Some(FunctionMetric::new(PathBuf::from(file), name, complexity).with_span(start, end))
}

fn field_usize(record: &csv::StringRecord, column: usize) -> usize {
    record
        .get(column)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use indoc::indoc;

    #[test]
    fn test_parse_csv_groups_by_file() {
        let text = indoc! {r#"
            12,15,120,2,14,"handleDrop@10-24@src/views/Flow.tsx","src/views/Flow.tsx","handleDrop","handleDrop( event , node )",10,24
            3,2,20,0,3,"render@30-32@src/views/Flow.tsx","src/views/Flow.tsx","render","render( )",30,32
            8,11,90,1,9,"Engine::run@5-14@java-engine/src/Engine.java","java-engine/src/Engine.java","Engine::run","Engine::run( String cmd )",5,14
        "#};
        let files = parse_csv(text).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, PathBuf::from("src/views/Flow.tsx"));
        assert_eq!(files[0].language, Language::TypeScript);
        assert_eq!(files[0].functions.len(), 2);
        assert_eq!(files[0].functions[0].complexity, 15);
        assert_eq!(files[0].functions[0].start_line, 10);
        assert_eq!(files[1].functions[0].function_name, "Engine::run");
        assert_eq!(files[1].language, Language::Java);
    }

    #[test]
    fn test_parse_csv_skips_header_rows() {
        let text = "NLOC,CCN,token,PARAM,length,location,file,function,long_name,start,end\n";
        assert!(parse_csv(text).unwrap().is_empty());
    }

    #[test]
    fn test_missing_program_is_capability_error() {
        let extractor = LizardExtractor::with_program("definitely-not-lizard-7f3a");
        let err = extractor.ensure_available().unwrap_err();
        assert!(matches!(err, AuditError::CapabilityUnavailable { .. }));
        assert_eq!(err.hint(), Some(INSTALL_HINT));
    }
}
