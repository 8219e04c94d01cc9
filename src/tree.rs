//! Derivation tree builder.
//!
//! The tree is kept as a flat list of `(depth, label)` nodes in emission
//! order; rendering indents each label by its depth. Recognizers receive the
//! builder as an explicit `&mut` context and bracket children with
//! [`TreeBuilder::nested`], which keeps every indent paired with an outdent.

use serde::Serialize;

use crate::error::AnalyzeError;

/// Default nesting limit for a derivation tree.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard ceiling on any nesting limit; keeps recognizer recursion well inside
/// the default thread stack.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// A single rendered line of the derivation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub depth: usize,
    pub label: String,
}

/// Accumulates derivation nodes for one analysis pass.
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    depth: usize,
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl TreeBuilder {
    /// Create an empty builder that refuses to nest deeper than `max_depth`,
    /// clamped to [`MAX_DEPTH_LIMIT`].
    pub fn new(max_depth: usize) -> Self {
        Self {
            nodes: Vec::new(),
            depth: 0,
            max_depth: max_depth.min(MAX_DEPTH_LIMIT),
        }
    }

    /// Append a node at the current depth.
    pub fn emit(&mut self, label: impl Into<String>) {
        self.nodes.push(Node {
            depth: self.depth,
            label: label.into(),
        });
    }

    /// Append a `key: value` leaf at the current depth.
    pub fn emit_field(&mut self, key: &str, value: impl std::fmt::Display) {
        self.emit(format!("{}: {}", key, value));
    }

    /// Increase the depth by one.
    pub fn indent(&mut self) -> Result<(), AnalyzeError> {
        if self.depth >= self.max_depth {
            return Err(AnalyzeError::TooDeeplyNested {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Decrease the depth by one. Never goes below zero.
    pub fn outdent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run `f` one level deeper, restoring the depth afterwards even if `f`
    /// fails.
    pub fn nested<F>(&mut self, f: F) -> Result<(), AnalyzeError>
    where
        F: FnOnce(&mut Self) -> Result<(), AnalyzeError>,
    {
        self.indent()?;
        let result = f(self);
        self.outdent();
        result
    }

    /// Clear all nodes and return to depth 0.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.depth = 0;
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// Render nodes as indented lines, `indent` repeated once per depth level.
/// Every line, including the last, ends with a newline.
pub fn render(nodes: &[Node], indent: &str) -> String {
    let mut out = String::new();
    for node in nodes {
        for _ in 0..node.depth {
            out.push_str(indent);
        }
        out.push_str(&node.label);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_and_render() {
        let mut tree = TreeBuilder::default();
        tree.emit("Programa");
        tree.nested(|t| {
            t.emit("Clase");
            t.nested(|t| {
                t.emit_field("Nombre", "A");
                Ok(())
            })
        })
        .unwrap();
        tree.emit("Fin");

        assert_eq!(tree.depth(), 0);
        assert_eq!(
            render(tree.nodes(), "  "),
            "Programa\n  Clase\n    Nombre: A\nFin\n"
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut tree = TreeBuilder::new(2);
        assert!(tree.indent().is_ok());
        assert!(tree.indent().is_ok());
        assert_eq!(
            tree.indent(),
            Err(AnalyzeError::TooDeeplyNested { limit: 2 })
        );
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_depth_limit_is_clamped() {
        let mut tree = TreeBuilder::new(100_000);
        for _ in 0..MAX_DEPTH_LIMIT {
            tree.indent().unwrap();
        }
        assert_eq!(
            tree.indent(),
            Err(AnalyzeError::TooDeeplyNested {
                limit: MAX_DEPTH_LIMIT
            })
        );
    }

    #[test]
    fn test_nested_restores_depth_on_error() {
        let mut tree = TreeBuilder::new(1);
        let result = tree.nested(|t| t.nested(|_| Ok(())));
        assert!(result.is_err());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_outdent_saturates_and_reset_clears() {
        let mut tree = TreeBuilder::default();
        tree.outdent();
        assert_eq!(tree.depth(), 0);

        tree.emit("x");
        tree.indent().unwrap();
        tree.reset();
        assert_eq!(tree.depth(), 0);
        assert!(tree.nodes().is_empty());
    }
}
