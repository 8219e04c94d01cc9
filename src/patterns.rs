//! Structural patterns for the class/method dialect.
//!
//! Each pattern is an independent matcher returning typed results that
//! borrow from the scanned text. Offsets are byte positions relative to the
//! text passed in. Matchers report every occurrence; callers decide which
//! ones belong to the current scope.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::block::{extract_delimited, Delimiters};

lazy_static! {
    /// `[public] class Name {`
    static ref CLASS_HEADER: Regex = Regex::new(
        r"(?:\b(public)\s+)?\bclass\s+(\w+)\s*\{"
    ).unwrap();

    /// `[visibility] [static] Type name(params) {`
    static ref METHOD_HEADER: Regex = Regex::new(
        r"(?:\b(public|private|protected)\s+)?(?:\b(static)\s+)?([\w<>\[\]]+)\s+(\w+)\s*\(([^)]*)\)\s*\{"
    ).unwrap();

    /// `[visibility] [static|final]* Type[<Generic>] name [= value];`
    static ref VARIABLE_DECL: Regex = Regex::new(
        r"(?:\b(public|private|protected)\s+)?(?:\b(?:static|final)\s+)*([\w\[\]]+(?:<[^;{}()=]+>)?)\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*(?:=\s*([^;]+))?;"
    ).unwrap();

    /// Keyword that opens a parenthesized control header.
    static ref CONTROL_KEYWORD: Regex = Regex::new(r"\b(if|for|while)\s*\(").unwrap();

    /// `else {` directly after a then-block.
    static ref ELSE_CLAUSE: Regex = Regex::new(r"^\s*else\s*\{").unwrap();

    static ref OPEN_BRACE: Regex = Regex::new(r"^\s*\{").unwrap();
}

/// Words that can sit in type or name position but never start a
/// declaration or method header.
const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "catch", "try", "return", "throw",
    "throws", "new", "goto", "break", "continue", "package", "import", "yield", "assert",
    "synchronized",
];

fn is_statement_keyword(word: &str) -> bool {
    STATEMENT_KEYWORDS.contains(&word)
}

/// A recognized class header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader<'a> {
    pub visibility: Option<&'a str>,
    pub name: &'a str,
    /// Offset where the header match begins.
    pub start: usize,
    /// Offset just after the opening `{`.
    pub body_start: usize,
}

/// A recognized method header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodHeader<'a> {
    pub visibility: Option<&'a str>,
    pub is_static: bool,
    pub return_type: &'a str,
    pub name: &'a str,
    /// Raw parameter list, trimmed.
    pub parameters: &'a str,
    pub start: usize,
    pub body_start: usize,
}

/// A recognized variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl<'a> {
    pub visibility: Option<&'a str>,
    pub var_type: &'a str,
    pub name: &'a str,
    /// Initializer expression, trimmed; `None` when absent.
    pub value: Option<&'a str>,
    pub start: usize,
}

/// Kind of braced control structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    If,
    For,
    While,
}

impl ControlKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "if" => Some(ControlKind::If),
            "for" => Some(ControlKind::For),
            "while" => Some(ControlKind::While),
            _ => None,
        }
    }
}

/// A recognized `if (…) {`, `for (…) {`, or `while (…) {` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlHeader<'a> {
    pub kind: ControlKind,
    /// Text between the balanced parentheses, trimmed.
    pub condition: &'a str,
    pub start: usize,
    pub body_start: usize,
}

fn group<'a>(caps: &Captures<'a>, i: usize) -> Option<&'a str> {
    caps.get(i).map(|m| m.as_str())
}

/// Find every class header in `text`.
pub fn class_headers(text: &str) -> Vec<ClassHeader<'_>> {
    CLASS_HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(ClassHeader {
                visibility: group(&caps, 1),
                name: group(&caps, 2)?,
                start: whole.start(),
                body_start: whole.end(),
            })
        })
        .collect()
}

/// Find every method header in `text`.
///
/// Matches whose type or name is a statement keyword (`else if (…) {`,
/// `new Foo() {`) are dropped.
pub fn method_headers(text: &str) -> Vec<MethodHeader<'_>> {
    METHOD_HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let return_type = group(&caps, 3)?;
            let name = group(&caps, 4)?;
            if is_statement_keyword(return_type) || is_statement_keyword(name) {
                return None;
            }
            Some(MethodHeader {
                visibility: group(&caps, 1),
                is_static: caps.get(2).is_some(),
                return_type,
                name,
                parameters: group(&caps, 5).unwrap_or("").trim(),
                start: whole.start(),
                body_start: whole.end(),
            })
        })
        .collect()
}

/// Find every variable declaration in `text`.
pub fn variable_decls(text: &str) -> Vec<VariableDecl<'_>> {
    VARIABLE_DECL
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let var_type = group(&caps, 2)?;
            let name = group(&caps, 3)?;
            if is_statement_keyword(var_type) {
                return None;
            }
            Some(VariableDecl {
                visibility: group(&caps, 1),
                var_type,
                name,
                value: group(&caps, 4).map(str::trim),
                start: whole.start(),
            })
        })
        .collect()
}

/// Find every braced control header in `text`, in source order.
///
/// Conditions are delimited by balancing parentheses, so calls and grouped
/// sub-expressions inside a condition are kept intact. Headers without an
/// opening `{` after the condition (`} while (x);`, single-statement bodies)
/// are not reported.
pub fn control_headers(text: &str) -> Vec<ControlHeader<'_>> {
    let mut headers = Vec::new();

    for caps in CONTROL_KEYWORD.captures_iter(text) {
        let (Some(whole), Some(keyword)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(kind) = ControlKind::from_keyword(keyword.as_str()) else {
            continue;
        };

        let condition = extract_delimited(text, whole.end(), Delimiters::PARENS);
        if condition.end >= text.len() {
            continue;
        }
        let after = condition.end + 1;
        let Some(brace) = OPEN_BRACE.find(&text[after..]) else {
            continue;
        };

        headers.push(ControlHeader {
            kind,
            condition: condition.slice(text).trim(),
            start: whole.start(),
            body_start: after + brace.end(),
        });
    }

    headers
}

/// If `text[then_end..]` is `} else {`, return the offset just after the
/// else block's opening `{`.
///
/// `then_end` is the offset of the then-block's closing `}`.
pub fn else_clause(text: &str, then_end: usize) -> Option<usize> {
    if text.as_bytes().get(then_end) != Some(&b'}') {
        return None;
    }
    let after = then_end + 1;
    ELSE_CLAUSE.find(&text[after..]).map(|m| after + m.end())
}
