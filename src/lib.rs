//! Sintaxis - dual-mode structural analyzer.
//!
//! Sintaxis reads a fragment of source text, decides whether it is
//! class/method code or Spanish `si … entonces` pseudocode, and produces an
//! indented derivation tree of the structure it recognizes. It can also
//! classify every non-whitespace character of the input.
//!
//! # Architecture
//!
//! - `block`: delimiter-balanced block extraction
//! - `mode`: dialect detection
//! - `patterns`: regex recognizers for headers and declarations
//! - `recognize`: one recognizer per dialect, driving a `TreeBuilder`
//! - `tree`: depth-tracked node builder and renderer
//! - `chars`: per-character classification
//! - `labels`: Spanish and English display strings
//! - `analyzer`: the facade that ties the above together
//! - `config`, `report`, `cli`: the command-line surface
//!
//! # Example
//!
//! ```
//! let tree = sintaxis::analyze_structure("int x = 5;").unwrap();
//! assert!(tree.contains("Variable"));
//! ```

pub mod analyzer;
pub mod block;
pub mod chars;
pub mod cli;
pub mod config;
pub mod error;
pub mod labels;
pub mod mode;
pub mod patterns;
pub mod recognize;
pub mod report;
pub mod tree;

pub use analyzer::{Analyzer, Derivation};
pub use block::{extract_block, Span};
pub use chars::{classify, CharCategory, CharEntry};
pub use config::Config;
pub use error::AnalyzeError;
pub use labels::{Labels, Language};
pub use mode::Dialect;
pub use recognize::Recognizer;
pub use tree::{Node, TreeBuilder};

/// Render the derivation tree of `source` with the default configuration.
pub fn analyze_structure(source: &str) -> Result<String, AnalyzeError> {
    Analyzer::default().analyze_structure(source)
}

/// Render the character listing of `source` with the default configuration.
pub fn analyze_characters(source: &str) -> String {
    Analyzer::default().analyze_characters(source)
}
