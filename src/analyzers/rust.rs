use super::LanguageAnalyzer;
use crate::core::{FunctionMetric, Language};
use crate::errors::{AuditError, Result};
use std::path::{Path, PathBuf};
use syn::spanned::Spanned;
use syn::visit::{self, Visit};

/// Rust analyzer built on `syn`.
///
/// Closures count toward the function that contains them; nested `fn` items
/// are reported on their own.
pub struct RustAnalyzer;

impl RustAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAnalyzer for RustAnalyzer {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn language(&self) -> Language {
        Language::Rust
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rs"]
    }

    fn analyze_source(&self, path: &Path, source: &str) -> Result<Vec<FunctionMetric>> {
        let file = syn::parse_file(source).map_err(|e| AuditError::parse(path, e.to_string()))?;
        let mut collector = FunctionCollector {
            path: path.to_path_buf(),
            owner: None,
            functions: Vec::new(),
        };
        collector.visit_file(&file);
        Ok(collector.functions)
    }
}

struct FunctionCollector {
    path: PathBuf,
    owner: Option<String>,
    functions: Vec<FunctionMetric>,
}

impl FunctionCollector {
    fn record(&mut self, name: String, block: &syn::Block, span: proc_macro2::Span) {
        let qualified = match &self.owner {
            Some(owner) => format!("{owner}::{name}"),
            None => name,
        };
        let mut counter = DecisionCounter { decisions: 0 };
        counter.visit_block(block);
        let metric = FunctionMetric::new(self.path.clone(), qualified, 1 + counter.decisions)
            .with_span(span.start().line, span.end().line);
        self.functions.push(metric);
    }

    fn with_owner(&mut self, owner: Option<String>, f: impl FnOnce(&mut Self)) {
        let previous = std::mem::replace(&mut self.owner, owner);
        f(self);
        self.owner = previous;
    }
}

impl<'ast> Visit<'ast> for FunctionCollector {
    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.record(node.sig.ident.to_string(), &node.block, node.span());
        self.with_owner(None, |this| visit::visit_item_fn(this, node));
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        let owner = type_name(&node.self_ty);
        self.with_owner(owner, |this| visit::visit_item_impl(this, node));
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.record(node.sig.ident.to_string(), &node.block, node.span());
        self.with_owner(None, |this| visit::visit_impl_item_fn(this, node));
    }

    fn visit_item_trait(&mut self, node: &'ast syn::ItemTrait) {
        let owner = Some(node.ident.to_string());
        self.with_owner(owner, |this| visit::visit_item_trait(this, node));
    }

    fn visit_trait_item_fn(&mut self, node: &'ast syn::TraitItemFn) {
        if let Some(block) = &node.default {
            self.record(node.sig.ident.to_string(), block, node.span());
        }
        self.with_owner(None, |this| visit::visit_trait_item_fn(this, node));
    }
}

fn type_name(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        syn::Type::Reference(reference) => type_name(&reference.elem),
        _ => None,
    }
}

struct DecisionCounter {
    decisions: u32,
}

impl<'ast> Visit<'ast> for DecisionCounter {
    // Nested items are separate functions.
    fn visit_item(&mut self, _node: &'ast syn::Item) {}

    fn visit_expr_if(&mut self, node: &'ast syn::ExprIf) {
        self.decisions += 1;
        visit::visit_expr_if(self, node);
    }

    fn visit_expr_while(&mut self, node: &'ast syn::ExprWhile) {
        self.decisions += 1;
        visit::visit_expr_while(self, node);
    }

    fn visit_expr_for_loop(&mut self, node: &'ast syn::ExprForLoop) {
        self.decisions += 1;
        visit::visit_expr_for_loop(self, node);
    }

    fn visit_expr_loop(&mut self, node: &'ast syn::ExprLoop) {
        self.decisions += 1;
        visit::visit_expr_loop(self, node);
    }

    fn visit_expr_match(&mut self, node: &'ast syn::ExprMatch) {
        self.decisions += node.arms.len().saturating_sub(1) as u32;
        visit::visit_expr_match(self, node);
    }

    fn visit_arm(&mut self, node: &'ast syn::Arm) {
        if node.guard.is_some() {
            self.decisions += 1;
        }
        visit::visit_arm(self, node);
    }

    fn visit_expr_binary(&mut self, node: &'ast syn::ExprBinary) {
        if matches!(node.op, syn::BinOp::And(_) | syn::BinOp::Or(_)) {
            self.decisions += 1;
        }
        visit::visit_expr_binary(self, node);
    }
}
