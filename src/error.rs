//! Error types for structural analysis.

use thiserror::Error;

/// Errors raised by the analyzer core.
///
/// Malformed input never produces an error: unterminated blocks and missing
/// terminators are recovered in place. The only failure is input nested
/// beyond the configured limit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("input is too deeply nested (limit is {limit} levels)")]
    TooDeeplyNested { limit: usize },
}
