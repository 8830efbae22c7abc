use crate::analyzers::AnalyzerRegistry;
use crate::core::FunctionMetric;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Analyze one file with the built-in analyzers and list its functions.
pub fn inspect_file(path: &Path, json: bool, out: &mut dyn Write) -> Result<Vec<FunctionMetric>> {
    let registry = AnalyzerRegistry::with_defaults();
    let functions = registry
        .analyze_file(path)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&functions)?)?;
    } else {
        for func in &functions {
            writeln!(
                out,
                "Name: {}, CCN: {}, Lines: {}-{}",
                func.function_name, func.complexity, func.start_line, func.end_line
            )?;
        }
    }
    Ok(functions)
}
