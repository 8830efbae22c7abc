use super::syntax_tree::{extract_functions, LanguageRules};
use super::LanguageAnalyzer;
use crate::core::{FunctionMetric, Language};
use crate::errors::Result;
use std::path::Path;

static JAVA_RULES: LanguageRules = LanguageRules {
    function_kinds: &[
        "method_declaration",
        "constructor_declaration",
        "compact_constructor_declaration",
    ],
    class_kinds: &[
        "class_declaration",
        "interface_declaration",
        "enum_declaration",
        "record_declaration",
    ],
    decision_kinds: &[
        "if_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
        "catch_clause",
        "ternary_expression",
    ],
    case_kinds: &["switch_label"],
    logical_kinds: &["binary_expression"],
    logical_operators: &["&&", "||"],
    binding_fields: &[],
};

pub struct JavaAnalyzer;

impl JavaAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAnalyzer for JavaAnalyzer {
    fn name(&self) -> &'static str {
        "java"
    }

    fn language(&self) -> Language {
        Language::Java
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn analyze_source(&self, path: &Path, source: &str) -> Result<Vec<FunctionMetric>> {
        extract_functions(&tree_sitter_java::LANGUAGE.into(), &JAVA_RULES, path, source)
    }
}
