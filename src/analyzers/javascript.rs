use super::syntax_tree::{extract_functions, LanguageRules};
use super::LanguageAnalyzer;
use crate::core::{FunctionMetric, Language};
use crate::errors::Result;
use std::path::Path;
use tree_sitter::Language as Grammar;

static JS_RULES: LanguageRules = LanguageRules {
    function_kinds: &[
        "function_declaration",
        "function_expression",
        "function",
        "generator_function_declaration",
        "generator_function",
        "arrow_function",
        "method_definition",
    ],
    class_kinds: &["class_declaration", "class", "abstract_class_declaration"],
    decision_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "while_statement",
        "do_statement",
        "catch_clause",
        "ternary_expression",
    ],
    case_kinds: &["switch_case"],
    logical_kinds: &["binary_expression"],
    logical_operators: &["&&", "||", "??"],
    binding_fields: &[
        ("variable_declarator", "name"),
        ("pair", "key"),
        ("assignment_expression", "left"),
        ("field_definition", "property"),
        ("public_field_definition", "name"),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    JavaScript,
    TypeScript,
    Tsx,
}

/// JavaScript and TypeScript analyzer.
///
/// TSX gets its own grammar because JSX elements are not valid TypeScript.
pub struct JavaScriptAnalyzer {
    dialect: Dialect,
}

impl JavaScriptAnalyzer {
    pub fn new_javascript() -> Self {
        Self {
            dialect: Dialect::JavaScript,
        }
    }

    pub fn new_typescript() -> Self {
        Self {
            dialect: Dialect::TypeScript,
        }
    }

    pub fn new_tsx() -> Self {
        Self {
            dialect: Dialect::Tsx,
        }
    }

    fn grammar(&self) -> Grammar {
        match self.dialect {
            Dialect::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl LanguageAnalyzer for JavaScriptAnalyzer {
    fn name(&self) -> &'static str {
        match self.dialect {
            Dialect::JavaScript => "javascript",
            Dialect::TypeScript => "typescript",
            Dialect::Tsx => "tsx",
        }
    }

    fn language(&self) -> Language {
        match self.dialect {
            Dialect::JavaScript => Language::JavaScript,
            Dialect::TypeScript | Dialect::Tsx => Language::TypeScript,
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self.dialect {
            Dialect::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Dialect::TypeScript => &["ts", "mts", "cts"],
            Dialect::Tsx => &["tsx"],
        }
    }

    fn analyze_source(&self, path: &Path, source: &str) -> Result<Vec<FunctionMetric>> {
        extract_functions(&self.grammar(), &JS_RULES, path, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn analyze(analyzer: &JavaScriptAnalyzer, source: &str) -> Vec<(String, u32)> {
        analyzer
            .analyze_source(Path::new("test.ts"), source)
            .unwrap()
            .into_iter()
            .map(|f| (f.function_name, f.complexity))
            .collect()
    }

    #[test]
    fn test_straight_line_function_has_complexity_one() {
        let found = analyze(
            &JavaScriptAnalyzer::new_javascript(),
            "function add(a, b) { return a + b; }",
        );
        assert_eq!(found, vec![("add".to_string(), 1)]);
    }

    #[test]
    fn test_counts_branches_loops_and_operators() {
        let source = indoc! {r#"
            function check(items, flag) {
                if (flag && items.length > 0) {
                    for (const item of items) {
                        while (item.next) { item = item.next; }
                    }
                } else if (flag || items) {
                    return flag ? 1 : 2;
                }
                try { run(); } catch (e) { log(e); }
                return items ?? [];
            }
        "#};
        // if, &&, for, while, else-if, ||, ternary, catch, ?? = 9 decisions
        let found = analyze(&JavaScriptAnalyzer::new_javascript(), source);
        assert_eq!(found, vec![("check".to_string(), 10)]);
    }

    #[test]
    fn test_switch_default_is_not_a_decision() {
        let source = indoc! {r#"
            function pick(kind) {
                switch (kind) {
                    case "a": return 1;
                    case "b": return 2;
                    default: return 0;
                }
            }
        "#};
        let found = analyze(&JavaScriptAnalyzer::new_javascript(), source);
        assert_eq!(found, vec![("pick".to_string(), 3)]);
    }

    #[test]
    fn test_nested_functions_are_measured_separately() {
        let source = indoc! {r#"
            const outer = (xs) => {
                const inner = (x) => { if (x) { return 1; } return 0; };
                return xs.map(inner);
            };
        "#};
        let found = analyze(&JavaScriptAnalyzer::new_typescript(), source);
        assert_eq!(
            found,
            vec![("outer".to_string(), 1), ("inner".to_string(), 2)]
        );
    }

    #[test]
    fn test_methods_are_qualified_by_class() {
        let source = indoc! {r#"
            class Store {
                load(id: string): void {
                    if (id) { this.fetch(id); }
                }
            }
        "#};
        let found = analyze(&JavaScriptAnalyzer::new_typescript(), source);
        assert_eq!(found, vec![("Store::load".to_string(), 2)]);
    }

    #[test]
    fn test_tsx_components_parse() {
        let source = indoc! {r#"
            export function Panel({ open }: { open: boolean }) {
                return open ? <div className="panel" /> : null;
            }
        "#};
        let found = analyze(&JavaScriptAnalyzer::new_tsx(), source);
        assert_eq!(found, vec![("Panel".to_string(), 2)]);
    }

    #[test]
    fn test_line_span_is_one_based() {
        let source = "\nfunction a() {\n  return 1;\n}\n";
        let metrics = JavaScriptAnalyzer::new_javascript()
            .analyze_source(Path::new("a.js"), source)
            .unwrap();
        assert_eq!((metrics[0].start_line, metrics[0].end_line), (2, 4));
    }
}
