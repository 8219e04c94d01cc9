//! Structural recognizers, one per dialect.
//!
//! A recognizer walks the source text and emits derivation nodes into the
//! builder it is handed. The caller owns the builder and emits the root node;
//! recognizers only write children.

mod class_method;
mod pseudocode;

pub use class_method::ClassMethodRecognizer;
pub use pseudocode::PseudocodeRecognizer;

use crate::error::AnalyzeError;
use crate::labels::Labels;
use crate::mode::Dialect;
use crate::tree::TreeBuilder;

/// Recognizer trait for one input dialect.
pub trait Recognizer: Send + Sync {
    /// The dialect this recognizer handles.
    fn dialect(&self) -> Dialect;

    /// Walk `text` and emit the recognized structure into `tree`.
    ///
    /// Malformed input yields partial output or explicit error leaves; the
    /// only failure is nesting beyond the builder's depth limit.
    fn recognize(&self, text: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError>;
}

/// Get the recognizer for a dialect.
pub fn for_dialect(dialect: Dialect, labels: &'static Labels) -> Box<dyn Recognizer> {
    match dialect {
        Dialect::ClassMethod => Box::new(ClassMethodRecognizer::new(labels)),
        Dialect::Pseudocode => Box::new(PseudocodeRecognizer::new(labels)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_dialect() {
        let labels = &Labels::SPANISH;
        assert_eq!(
            for_dialect(Dialect::ClassMethod, labels).dialect(),
            Dialect::ClassMethod
        );
        assert_eq!(
            for_dialect(Dialect::Pseudocode, labels).dialect(),
            Dialect::Pseudocode
        );
    }
}
