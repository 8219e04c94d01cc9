//! Dialect detection.
//!
//! A keyword heuristic, not a grammar: text containing at least two
//! distinct pseudocode keywords is pseudocode unless it also carries a
//! marker that only the class/method dialect uses. Mixed inputs always go to the
//! class/method recognizer.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// The input syntax chosen for one analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// C-family classes, methods, declarations, and braced control flow.
    ClassMethod,
    /// Line-oriented `si … entonces` / `mientras … hacer` pseudocode.
    Pseudocode,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::ClassMethod => "class_method",
            Dialect::Pseudocode => "pseudocode",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimum number of distinct pseudocode keywords for a pseudocode verdict.
const MIN_PSEUDO_KEYWORDS: usize = 2;

/// The seven pseudocode keywords, matched as substrings of lower-cased text.
const PSEUDO_KEYWORDS: &[&str] = &[
    "si",
    "entonces",
    "sino",
    "finsi",
    "mientras",
    "hacer",
    "finmientras",
];

lazy_static! {
    /// Markers that only appear in the class/method dialect.
    static ref CLASS_METHOD_MARKERS: Vec<Regex> = vec![
        Regex::new(r"\bclass\b").unwrap(),
        Regex::new(r"\b(public|private|protected)\b").unwrap(),
        Regex::new(r"\bif\s*\(").unwrap(),
        Regex::new(r"\bwhile\s*\(").unwrap(),
    ];
}

/// Count the distinct pseudocode keywords present in `text`.
///
/// Keywords count wherever they occur, so `finsi` alone contributes both
/// `si` and `finsi`.
pub fn pseudo_keyword_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    PSEUDO_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count()
}

/// Whether `text` carries an unambiguous class/method marker.
pub fn has_class_method_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    CLASS_METHOD_MARKERS.iter().any(|re| re.is_match(&lower))
}

/// Decide which recognizer should handle `text`.
pub fn detect(text: &str) -> Dialect {
    if pseudo_keyword_count(text) >= MIN_PSEUDO_KEYWORDS && !has_class_method_marker(text) {
        Dialect::Pseudocode
    } else {
        Dialect::ClassMethod
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pseudocode() {
        let text = "si x > 0 entonces\ny = 1\nfinsi";
        assert_eq!(pseudo_keyword_count(text), 3);
        assert_eq!(detect(text), Dialect::Pseudocode);

        assert_eq!(
            detect("MIENTRAS i < 10 HACER\ni = i + 1\nFIN MIENTRAS"),
            Dialect::Pseudocode
        );
    }

    #[test]
    fn test_single_keyword_is_not_enough() {
        assert_eq!(detect("hacer = 1"), Dialect::ClassMethod);
    }

    #[test]
    fn test_keywords_count_as_substrings() {
        assert_eq!(pseudo_keyword_count("sino"), 2); // si, sino
        assert_eq!(pseudo_keyword_count("FinMientras"), 2); // mientras, finmientras
        assert_eq!(pseudo_keyword_count("int decision = 1;"), 1);

        assert_eq!(detect("finsi\nx = 1"), Dialect::Pseudocode);
        assert_eq!(detect("sino\nx = 1"), Dialect::Pseudocode);
        assert_eq!(detect("finmientras\nx = 1"), Dialect::Pseudocode);
    }

    #[test]
    fn test_class_markers_win() {
        let text = "public class A { } si x entonces finsi";
        assert!(pseudo_keyword_count(text) >= 2);
        assert_eq!(detect(text), Dialect::ClassMethod);

        let text = "si a entonces\nwhile (x) { }\nfinsi";
        assert_eq!(detect(text), Dialect::ClassMethod);
    }

    #[test]
    fn test_plain_code_is_class_method() {
        assert_eq!(detect("int x = 5;"), Dialect::ClassMethod);
        assert_eq!(detect("void f() { }"), Dialect::ClassMethod);
    }
}
