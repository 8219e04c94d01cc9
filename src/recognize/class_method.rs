//! Recognizer for the class/method dialect.
//!
//! Works on successive text spans: the pattern matchers find headers, the
//! block extractor delimits their bodies, and each body is recognized
//! recursively. Within any body only matches at the body's own level are
//! reported; anything inside a nested `{}` region belongs to the recursion
//! for that region.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::Recognizer;
use crate::block::{extract_block, DepthScanner};
use crate::error::AnalyzeError;
use crate::labels::Labels;
use crate::mode::Dialect;
use crate::patterns::{
    class_headers, control_headers, else_clause, method_headers, variable_decls, ControlHeader,
    ControlKind, MethodHeader, VariableDecl,
};
use crate::tree::TreeBuilder;

lazy_static! {
    static ref CLASS_KEYWORD: Regex = Regex::new(r"\bclass\b").unwrap();
}

/// Recognizer for classes, methods, declarations, and braced control flow.
pub struct ClassMethodRecognizer {
    labels: &'static Labels,
}

impl ClassMethodRecognizer {
    pub fn new(labels: &'static Labels) -> Self {
        Self { labels }
    }

    /// Every class header outside nested scopes, each with its body.
    fn classes(&self, text: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        let mut scanner = DepthScanner::new(text);
        let headers: Vec<_> = class_headers(text)
            .into_iter()
            .filter(|h| !scanner.depth_at(h.start).is_nested())
            .collect();

        if headers.is_empty() {
            tree.emit(self.labels.no_class);
            return Ok(());
        }

        for header in headers {
            tree.emit(self.labels.class);
            tree.nested(|t| {
                t.emit_field(self.labels.name, header.name);
                let body = extract_block(text, header.body_start);
                debug!(
                    class = header.name,
                    body_len = body.len(),
                    "extracted class body"
                );
                self.class_body(body.slice(text), t)
            })?;
        }

        Ok(())
    }

    /// Attributes first, then methods.
    fn class_body(&self, body: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        let attributes = top_level_decls(body);
        self.variable_section(self.labels.attributes, &attributes, tree)?;

        let methods = top_level_methods(body);
        debug!(count = methods.len(), "methods found in class body");

        if !methods.is_empty() {
            tree.emit(self.labels.methods);
            tree.nested(|t| {
                for method in &methods {
                    self.method(body, method, t)?;
                }
                Ok(())
            })?;
        }

        if attributes.is_empty() && methods.is_empty() {
            tree.emit(self.labels.empty_class);
        }

        Ok(())
    }

    /// Top-level methods when the text has no class.
    fn methods(&self, text: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        let methods = top_level_methods(text);

        if methods.is_empty() {
            tree.emit(self.labels.no_method);
            return Ok(());
        }

        for method in &methods {
            self.method(text, method, tree)?;
        }
        Ok(())
    }

    fn method(
        &self,
        text: &str,
        method: &MethodHeader<'_>,
        tree: &mut TreeBuilder,
    ) -> Result<(), AnalyzeError> {
        debug!(method = method.name, "recognized method");
        tree.emit(self.labels.method);
        tree.nested(|t| {
            t.emit_field(self.labels.type_, method.return_type);
            t.emit_field(self.labels.name, method.name);
            let parameters = if method.parameters.is_empty() {
                self.labels.no_parameters
            } else {
                method.parameters
            };
            t.emit_field(self.labels.parameters, parameters);

            let body = extract_block(text, method.body_start);
            self.block_contents(body.slice(text), t)
        })
    }

    /// Local declarations, then control structures in source order.
    fn block_contents(&self, body: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        let locals = top_level_decls(body);
        self.variable_section(self.labels.variables, &locals, tree)?;

        let mut scanner = DepthScanner::new(body);
        for header in control_headers(body) {
            if scanner.depth_at(header.start).is_nested() {
                continue;
            }
            self.control(body, &header, tree)?;
        }
        Ok(())
    }

    fn control(
        &self,
        text: &str,
        header: &ControlHeader<'_>,
        tree: &mut TreeBuilder,
    ) -> Result<(), AnalyzeError> {
        let label = match header.kind {
            ControlKind::If => self.labels.if_,
            ControlKind::For => self.labels.for_,
            ControlKind::While => self.labels.while_,
        };

        tree.emit(label);
        tree.nested(|t| {
            t.emit_field(self.labels.condition, header.condition);
            let then_block = extract_block(text, header.body_start);
            self.block_contents(then_block.slice(text), t)?;

            if header.kind != ControlKind::If {
                return Ok(());
            }
            if let Some(else_start) = else_clause(text, then_block.end) {
                t.emit(self.labels.else_);
                t.nested(|t| {
                    let else_block = extract_block(text, else_start);
                    self.block_contents(else_block.slice(text), t)
                })?;
            }
            Ok(())
        })
    }

    /// Emit `section` with one `Variable` node per declaration. Emits
    /// nothing when `decls` is empty.
    fn variable_section(
        &self,
        section: &str,
        decls: &[VariableDecl<'_>],
        tree: &mut TreeBuilder,
    ) -> Result<(), AnalyzeError> {
        if decls.is_empty() {
            return Ok(());
        }

        tree.emit(section);
        tree.nested(|t| {
            for decl in decls {
                self.variable(decl, t)?;
            }
            Ok(())
        })
    }

    fn variable(&self, decl: &VariableDecl<'_>, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        tree.emit(self.labels.variable);
        tree.nested(|t| {
            t.emit_field(self.labels.type_, decl.var_type);
            t.emit_field(self.labels.name, decl.name);
            t.emit_field(self.labels.value, decl.value.unwrap_or(self.labels.no_value));
            Ok(())
        })
    }
}

/// Declarations at the body's own level. `for (int i = 0; …)` initializers
/// sit inside parentheses and are left out.
fn top_level_decls(body: &str) -> Vec<VariableDecl<'_>> {
    let mut scanner = DepthScanner::new(body);
    variable_decls(body)
        .into_iter()
        .filter(|d| {
            let depth = scanner.depth_at(d.start);
            !depth.is_nested() && !depth.is_parenthesized()
        })
        .collect()
}

/// Method headers at the text's own level.
fn top_level_methods(text: &str) -> Vec<MethodHeader<'_>> {
    let mut scanner = DepthScanner::new(text);
    method_headers(text)
        .into_iter()
        .filter(|m| !scanner.depth_at(m.start).is_nested())
        .collect()
}

impl Recognizer for ClassMethodRecognizer {
    fn dialect(&self) -> Dialect {
        Dialect::ClassMethod
    }

    fn recognize(&self, text: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        if CLASS_KEYWORD.is_match(text) {
            self.classes(text, tree)
        } else if text.contains('(') {
            self.methods(text, tree)
        } else {
            let decls = variable_decls(text);
            if decls.is_empty() {
                tree.emit(self.labels.unrecognized);
                Ok(())
            } else {
                self.variable_section(self.labels.variables, &decls, tree)
            }
        }
    }
}
