//! Recognizer for the structured pseudocode dialect.
//!
//! Recursive descent where every token is a whole line:
//!
//! ```text
//! si <condición> entonces        mientras <condición> hacer
//!   ...                            ...
//! sino                           finmientras
//!   ...
//! finsi
//! ```
//!
//! Keywords are case-insensitive. Blank lines are skipped and surrounding
//! whitespace is ignored. A missing `finsi` / `finmientras` ends the
//! construct at end of input.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::Recognizer;
use crate::error::AnalyzeError;
use crate::labels::Labels;
use crate::mode::Dialect;
use crate::tree::TreeBuilder;

lazy_static! {
    static ref IF_HEADER: Regex = Regex::new(r"(?i)^si\s+(.+?)\s+entonces$").unwrap();
    static ref WHILE_HEADER: Regex = Regex::new(r"(?i)^mientras\s+(.+?)\s+hacer$").unwrap();
    static ref ELSE_LINE: Regex = Regex::new(r"(?i)^sino\b\s*(.*)$").unwrap();
    static ref END_IF_LINE: Regex = Regex::new(r"(?i)^fin[ _]?si\b").unwrap();
    static ref END_WHILE_LINE: Regex = Regex::new(r"(?i)^fin[ _]?mientras\b").unwrap();
    static ref ASSIGNMENT: Regex = Regex::new(r"^([\p{L}_]\w*)\s*=([^=].*)$").unwrap();
}

fn is_else_or_end_if(line: &str) -> bool {
    ELSE_LINE.is_match(line) || END_IF_LINE.is_match(line)
}

fn is_end_if(line: &str) -> bool {
    END_IF_LINE.is_match(line)
}

fn is_end_while(line: &str) -> bool {
    END_WHILE_LINE.is_match(line)
}

fn never(_: &str) -> bool {
    false
}

/// Non-blank, trimmed lines with a read position.
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consume the next line if `matches` accepts it.
    fn advance_if(&mut self, matches: fn(&str) -> bool) -> bool {
        match self.peek() {
            Some(line) if matches(line) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }
}

/// One pass over a pseudocode text.
struct Walk<'a> {
    cursor: LineCursor<'a>,
    labels: &'static Labels,
}

impl<'a> Walk<'a> {
    /// Consume lines until `stop` accepts one (left unconsumed) or input ends.
    fn sequence(
        &mut self,
        tree: &mut TreeBuilder,
        stop: fn(&str) -> bool,
    ) -> Result<(), AnalyzeError> {
        while let Some(line) = self.cursor.peek() {
            if stop(line) {
                break;
            }
            self.cursor.advance();
            self.line(line, tree)?;
        }
        Ok(())
    }

    /// Dispatch a single line whose cursor position has already been consumed.
    fn line(&mut self, line: &'a str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        if let Some(caps) = IF_HEADER.captures(line) {
            let condition = caps.get(1).map_or("", |m| m.as_str());
            trace!(condition, "conditional header");
            self.conditional(condition, tree)
        } else if let Some(caps) = WHILE_HEADER.captures(line) {
            let condition = caps.get(1).map_or("", |m| m.as_str());
            trace!(condition, "loop header");
            self.repetition(condition, tree)
        } else if let Some((target, value)) = assignment(line) {
            tree.emit_field(self.labels.assignment, format!("{} = {}", target, value));
            Ok(())
        } else {
            tree.emit_field(self.labels.statement, line);
            Ok(())
        }
    }

    fn conditional(&mut self, condition: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        let labels = self.labels;
        tree.emit(labels.pseudo_if);
        tree.nested(|t| {
            t.emit_field(labels.condition, condition);
            t.emit(labels.pseudo_then);
            t.nested(|t| self.sequence(t, is_else_or_end_if))?;

            let else_line = self.cursor.peek().and_then(|line| ELSE_LINE.captures(line));
            if let Some(caps) = else_line {
                let rest = caps.get(1).map_or("", |m| m.as_str()).trim();
                self.cursor.advance();
                t.emit(labels.pseudo_else);
                t.nested(|t| {
                    if !rest.is_empty() {
                        self.line(rest, t)?;
                    }
                    self.sequence(t, is_end_if)
                })?;
            }

            self.cursor.advance_if(is_end_if);
            Ok(())
        })
    }

    fn repetition(&mut self, condition: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        let labels = self.labels;
        tree.emit(labels.pseudo_while);
        tree.nested(|t| {
            t.emit_field(labels.condition, condition);
            t.emit(labels.pseudo_do);
            t.nested(|t| self.sequence(t, is_end_while))?;
            self.cursor.advance_if(is_end_while);
            Ok(())
        })
    }
}

/// Split `name = expression`. Comparisons (`==`) and empty right-hand sides
/// are not assignments.
fn assignment(line: &str) -> Option<(&str, &str)> {
    let caps = ASSIGNMENT.captures(line)?;
    let target = caps.get(1)?.as_str();
    let value = caps.get(2)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some((target, value))
    }
}

/// Recognizer for `si`/`mientras` pseudocode.
pub struct PseudocodeRecognizer {
    labels: &'static Labels,
}

impl PseudocodeRecognizer {
    pub fn new(labels: &'static Labels) -> Self {
        Self { labels }
    }
}

impl Recognizer for PseudocodeRecognizer {
    fn dialect(&self) -> Dialect {
        Dialect::Pseudocode
    }

    fn recognize(&self, text: &str, tree: &mut TreeBuilder) -> Result<(), AnalyzeError> {
        let mut walk = Walk {
            cursor: LineCursor::new(text),
            labels: self.labels,
        };
        walk.sequence(tree, never)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::render;

    fn recognize(text: &str) -> String {
        let recognizer = PseudocodeRecognizer::new(&Labels::SPANISH);
        let mut tree = TreeBuilder::default();
        recognizer.recognize(text, &mut tree).unwrap();
        render(tree.nodes(), "  ")
    }

    #[test]
    fn test_if_else() {
        let out = recognize("si x > 0 entonces\ny = 1\nsino\ny = 2\nfinsi");
        let expected = "\
Si
  Condición: x > 0
  Entonces
    Asignación: y = 1
  Sino
    Asignación: y = 2
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_loop_with_nested_if() {
        let out = recognize(
            "i = 0\nMIENTRAS i < 10 HACER\n  si i == 5 entonces\n    escribir i\n  finsi\n  i=i+1\nFinMientras\nfin",
        );
        let expected = "\
Asignación: i = 0
Mientras
  Condición: i < 10
  Hacer
    Si
      Condición: i == 5
      Entonces
        Sentencia: escribir i
    Asignación: i = i+1
Sentencia: fin
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_missing_terminators_run_to_end() {
        let out = recognize("si a entonces\nmientras b hacer\nx = 1");
        let expected = "\
Si
  Condición: a
  Entonces
    Mientras
      Condición: b
      Hacer
        Asignación: x = 1
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_else_line_with_trailing_statement() {
        let out = recognize("si a entonces\nx = 1\nsino x = 2\nfin si");
        assert!(out.contains("  Sino\n    Asignación: x = 2\n"));
        assert!(!out.contains("Sentencia"));
    }

    #[test]
    fn test_blank_lines_and_stray_terminators() {
        let out = recognize("\n\n  finsi  \n\nsino\n");
        assert_eq!(out, "Sentencia: finsi\nSentencia: sino\n");
    }

    #[test]
    fn test_assignment_split() {
        assert_eq!(assignment("total = a + b"), Some(("total", "a + b")));
        assert_eq!(assignment("año=2024"), Some(("año", "2024")));
        assert_eq!(assignment("x == y"), None);
        assert_eq!(assignment("x ="), None);
        assert_eq!(assignment("1 = x"), None);
    }

    #[test]
    fn test_depth_limit() {
        let text = "si a entonces\n".repeat(50);
        let recognizer = PseudocodeRecognizer::new(&Labels::SPANISH);
        let mut tree = TreeBuilder::new(16);
        assert_eq!(
            recognizer.recognize(&text, &mut tree),
            Err(AnalyzeError::TooDeeplyNested { limit: 16 })
        );
    }
}
