//! Table-driven cyclomatic complexity over tree-sitter syntax trees.
//!
//! Each language supplies a [`LanguageRules`] table naming the node kinds that
//! start a function, open a class scope, or add a decision point. Complexity
//! starts at 1 per function; nested functions are measured on their own and
//! contribute nothing to the function that contains them.

use crate::core::FunctionMetric;
use crate::errors::{AuditError, Result};
use std::path::Path;
use tree_sitter::{Language as Grammar, Node, Parser};

pub const ANONYMOUS: &str = "(anonymous)";

pub struct LanguageRules {
    /// Nodes measured as separate functions.
    pub function_kinds: &'static [&'static str],
    /// Nodes whose name qualifies the methods declared directly inside them.
    pub class_kinds: &'static [&'static str],
    /// Nodes that each add one decision point.
    pub decision_kinds: &'static [&'static str],
    /// Case labels; they count unless their first token is `default`.
    pub case_kinds: &'static [&'static str],
    /// Binary nodes checked for a short-circuit operator.
    pub logical_kinds: &'static [&'static str],
    pub logical_operators: &'static [&'static str],
    /// Parent `(kind, field)` pairs whose field names an otherwise anonymous
    /// function, e.g. `const handler = () => {}`.
    pub binding_fields: &'static [(&'static str, &'static str)],
}

impl LanguageRules {
    fn is_function(&self, node: Node) -> bool {
        self.function_kinds.contains(&node.kind())
    }

    fn is_class(&self, node: Node) -> bool {
        self.class_kinds.contains(&node.kind())
    }

    fn decision_weight(&self, node: Node) -> u32 {
        let kind = node.kind();
        if self.decision_kinds.contains(&kind) {
            return 1;
        }
        if self.case_kinds.contains(&kind) {
            let is_default = node
                .child(0)
                .map(|first| first.kind() == "default")
                .unwrap_or(false);
            return u32::from(!is_default);
        }
        if self.logical_kinds.contains(&kind) {
            let is_logical = node
                .child_by_field_name("operator")
                .map(|op| self.logical_operators.contains(&op.kind()))
                .unwrap_or(false);
            return u32::from(is_logical);
        }
        0
    }
}

/// Parse `source` with `grammar` and measure every function in it.
pub fn extract_functions(
    grammar: &Grammar,
    rules: &LanguageRules,
    path: &Path,
    source: &str,
) -> Result<Vec<FunctionMetric>> {
    let mut parser = Parser::new();
    parser
        .set_language(grammar)
        .map_err(|e| AuditError::parse(path, format!("incompatible grammar: {e}")))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AuditError::parse(path, "parser returned no tree"))?;

    let root = tree.root_node();
    if root.has_error() {
        log::debug!("{} contains syntax errors; measuring what parsed", path.display());
    }

    let mut functions = Vec::new();
    let mut collector = Collector {
        rules,
        source: source.as_bytes(),
        path,
        functions: &mut functions,
    };
    collector.visit(root, None);
    Ok(functions)
}

struct Collector<'a> {
    rules: &'a LanguageRules,
    source: &'a [u8],
    path: &'a Path,
    functions: &'a mut Vec<FunctionMetric>,
}

impl Collector<'_> {
    fn visit(&mut self, node: Node, class: Option<&str>) {
        if self.rules.is_function(node) {
            self.record(node, class);
            self.visit_children(node, None);
            return;
        }

        if self.rules.is_class(node) {
            let name = self.field_text(node, "name");
            self.visit_children(node, Some(name.as_deref().unwrap_or(ANONYMOUS)));
            return;
        }

        self.visit_children(node, class);
    }

    fn visit_children(&mut self, node: Node, class: Option<&str>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, class);
        }
    }

    fn record(&mut self, node: Node, class: Option<&str>) {
        let name = self.function_name(node);
        let qualified = match class {
            Some(class) => format!("{class}::{name}"),
            None => name,
        };
        let complexity = 1 + self.decisions(node);
        let metric = FunctionMetric::new(self.path.to_path_buf(), qualified, complexity)
            .with_span(node.start_position().row + 1, node.end_position().row + 1);
        self.functions.push(metric);
    }

    fn decisions(&self, function: Node) -> u32 {
        let mut total = 0;
        let mut cursor = function.walk();
        for child in function.children(&mut cursor) {
            total += self.decisions_in(child);
        }
        total
    }

    fn decisions_in(&self, node: Node) -> u32 {
        if self.rules.is_function(node) {
            return 0;
        }
        let mut total = self.rules.decision_weight(node);
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            total += self.decisions_in(child);
        }
        total
    }

    fn function_name(&self, node: Node) -> String {
        if let Some(name) = self.field_text(node, "name") {
            return name;
        }
        node.parent()
            .and_then(|parent| {
                self.rules
                    .binding_fields
                    .iter()
                    .find(|(kind, _)| *kind == parent.kind())
                    .and_then(|(_, field)| self.field_text(parent, field))
            })
            .unwrap_or_else(|| ANONYMOUS.to_string())
    }

    fn field_text(&self, node: Node, field: &str) -> Option<String> {
        node.child_by_field_name(field)
            .and_then(|n| n.utf8_text(self.source).ok())
            .map(|s| s.to_string())
    }
}
