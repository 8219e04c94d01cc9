//! Analyzer facade.
//!
//! Owns the most recently supplied source text and the configuration, and
//! runs one analysis per call: detect the dialect once, run that dialect's
//! recognizer to completion, render. Nothing but the source text survives
//! between calls.
//!
//! An `Analyzer` is not meant to be shared; concurrent callers each use
//! their own instance.

use serde::Serialize;
use tracing::debug;

use crate::chars::{char_entries, render_listing, CharEntry};
use crate::config::Config;
use crate::error::AnalyzeError;
use crate::labels::Labels;
use crate::mode::{self, Dialect};
use crate::recognize;
use crate::tree::{render, Node, TreeBuilder};

/// The structured result of one structural analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derivation {
    pub dialect: Dialect,
    /// Tree nodes in emission order; the first is always the root.
    pub nodes: Vec<Node>,
}

/// Structural and character-level analyzer for one caller.
#[derive(Debug)]
pub struct Analyzer {
    source: String,
    config: Config,
    tree: TreeBuilder,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        let tree = TreeBuilder::new(config.max_depth);
        Self {
            source: String::new(),
            config,
            tree,
        }
    }

    /// The text supplied to the most recent call.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn labels(&self) -> &'static Labels {
        self.config.labels()
    }

    /// Analyze `source` and return the derivation, or `None` for empty input.
    pub fn analyze(&mut self, source: &str) -> Result<Option<Derivation>, AnalyzeError> {
        self.source.clear();
        self.source.push_str(source);
        self.tree.reset();

        if self.source.is_empty() {
            return Ok(None);
        }

        let dialect = mode::detect(&self.source);
        debug!(%dialect, len = self.source.len(), "detected dialect");

        let labels = self.labels();
        let recognizer = recognize::for_dialect(dialect, labels);
        let source = self.source.as_str();

        self.tree.emit(labels.program);
        self.tree.nested(|t| recognizer.recognize(source, t))?;

        Ok(Some(Derivation {
            dialect,
            nodes: self.tree.nodes().to_vec(),
        }))
    }

    /// Analyze `source` and return the rendered derivation tree, or the
    /// empty-input message.
    pub fn analyze_structure(&mut self, source: &str) -> Result<String, AnalyzeError> {
        match self.analyze(source)? {
            Some(derivation) => Ok(self.render(&derivation)),
            None => Ok(self.labels().empty_source.to_string()),
        }
    }

    /// Render a derivation with this analyzer's title and indentation.
    pub fn render(&self, derivation: &Derivation) -> String {
        let mut out = String::new();
        out.push_str(self.labels().tree_title);
        out.push('\n');
        out.push_str(&render(&derivation.nodes, &self.config.indent()));
        out
    }

    /// Classify every non-whitespace character of `source`.
    pub fn characters(&mut self, source: &str) -> Vec<CharEntry> {
        self.source.clear();
        self.source.push_str(source);
        char_entries(&self.source)
    }

    /// Render the character-by-character listing of `source`, or the
    /// empty-input message.
    pub fn analyze_characters(&mut self, source: &str) -> String {
        if source.is_empty() {
            self.source.clear();
            return self.labels().empty_source.to_string();
        }
        let entries = self.characters(source);
        render_listing(&entries, self.labels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Language;

    #[test]
    fn test_empty_input() {
        let mut analyzer = Analyzer::default();
        assert_eq!(
            analyzer.analyze_structure("").unwrap(),
            "Error: El código fuente está vacío."
        );
        assert_eq!(
            analyzer.analyze_characters(""),
            "Error: El código fuente está vacío."
        );
        assert_eq!(analyzer.analyze("").unwrap(), None);
    }

    #[test]
    fn test_structure_has_title_and_root() {
        let mut analyzer = Analyzer::default();
        let out = analyzer.analyze_structure("int x = 5;").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Árbol de derivación:");
        assert_eq!(lines[1], "Programa");
        assert_eq!(lines[2], "  Variables");
    }

    #[test]
    fn test_source_is_replaced_each_call() {
        let mut analyzer = Analyzer::default();
        analyzer.analyze_structure("int a;").unwrap();
        assert_eq!(analyzer.source(), "int a;");
        analyzer.analyze_characters("b");
        assert_eq!(analyzer.source(), "b");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let mut analyzer = Analyzer::default();
        let text = "class A { int a; void f() { if (a > 0) { a = 1; } } }";
        let first = analyzer.analyze_structure(text).unwrap();
        analyzer.analyze_structure("si x entonces\nfinsi").unwrap();
        let second = analyzer.analyze_structure(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dialect_is_reported() {
        let mut analyzer = Analyzer::default();
        let derivation = analyzer
            .analyze("mientras x < 3 hacer\nx = x + 1\nfinmientras")
            .unwrap()
            .unwrap();
        assert_eq!(derivation.dialect, Dialect::Pseudocode);
        assert_eq!(derivation.nodes[0], Node { depth: 0, label: "Programa".into() });
    }

    #[test]
    fn test_english_labels() {
        let config = Config {
            language: Language::En,
            ..Config::default()
        };
        let mut analyzer = Analyzer::new(config);
        let out = analyzer.analyze_structure("public class A {").unwrap();
        assert_eq!(
            out,
            "Derivation tree:\nProgram\n  Class\n    Name: A\n    Empty class or no recognizable elements\n"
        );
        assert_eq!(analyzer.analyze_characters(""), "Error: source text is empty.");
    }

    #[test]
    fn test_too_deep_input_is_an_error() {
        let config = Config {
            max_depth: 8,
            ..Config::default()
        };
        let mut analyzer = Analyzer::new(config);
        let text = "si a entonces\n".repeat(20);
        assert_eq!(
            analyzer.analyze_structure(&text),
            Err(AnalyzeError::TooDeeplyNested { limit: 8 })
        );
        // the analyzer stays usable
        assert!(analyzer.analyze_structure("int x;").is_ok());
    }

    #[test]
    fn test_unvalidated_depth_is_capped() {
        let config = Config {
            max_depth: 100_000,
            ..Config::default()
        };
        let mut analyzer = Analyzer::new(config);
        let text = "si a entonces\n".repeat(20_000);
        assert_eq!(
            analyzer.analyze_structure(&text),
            Err(AnalyzeError::TooDeeplyNested {
                limit: crate::tree::MAX_DEPTH_LIMIT
            })
        );
    }
}
