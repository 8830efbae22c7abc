use super::syntax_tree::{extract_functions, LanguageRules};
use super::LanguageAnalyzer;
use crate::core::{FunctionMetric, Language};
use crate::errors::Result;
use std::path::Path;

static PYTHON_RULES: LanguageRules = LanguageRules {
    function_kinds: &["function_definition"],
    class_kinds: &["class_definition"],
    decision_kinds: &[
        "if_statement",
        "elif_clause",
        "for_statement",
        "while_statement",
        "except_clause",
        "conditional_expression",
        "for_in_clause",
        "if_clause",
        "case_clause",
    ],
    case_kinds: &[],
    logical_kinds: &["boolean_operator"],
    logical_operators: &["and", "or"],
    binding_fields: &[],
};

pub struct PythonAnalyzer;

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAnalyzer for PythonAnalyzer {
    fn name(&self) -> &'static str {
        "python"
    }

    fn language(&self) -> Language {
        Language::Python
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn analyze_source(&self, path: &Path, source: &str) -> Result<Vec<FunctionMetric>> {
        extract_functions(
            &tree_sitter_python::LANGUAGE.into(),
            &PYTHON_RULES,
            path,
            source,
        )
    }
}
