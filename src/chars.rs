//! Character classification and the character-by-character listing.

use serde::Serialize;

use crate::labels::{CategoryLabels, Labels};

/// Lexical category of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharCategory {
    Letter,
    Digit,
    Space,
    Tab,
    Newline,
    CarriageReturn,
    OtherWhitespace,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Semicolon,
    Assignment,
    Arithmetic,
    Comparison,
    DoubleQuote,
    SingleQuote,
    Dot,
    Comma,
    Special,
}

impl CharCategory {
    pub fn is_whitespace(&self) -> bool {
        matches!(
            self,
            CharCategory::Space
                | CharCategory::Tab
                | CharCategory::Newline
                | CharCategory::CarriageReturn
                | CharCategory::OtherWhitespace
        )
    }

    /// Display name from a label table.
    pub fn label(&self, labels: &CategoryLabels) -> &'static str {
        match self {
            CharCategory::Letter => labels.letter,
            CharCategory::Digit => labels.digit,
            CharCategory::Space => labels.space,
            CharCategory::Tab => labels.tab,
            CharCategory::Newline => labels.newline,
            CharCategory::CarriageReturn => labels.carriage_return,
            CharCategory::OtherWhitespace => labels.other_whitespace,
            CharCategory::OpenBrace => labels.open_brace,
            CharCategory::CloseBrace => labels.close_brace,
            CharCategory::OpenParen => labels.open_paren,
            CharCategory::CloseParen => labels.close_paren,
            CharCategory::Semicolon => labels.semicolon,
            CharCategory::Assignment => labels.assignment,
            CharCategory::Arithmetic => labels.arithmetic,
            CharCategory::Comparison => labels.comparison,
            CharCategory::DoubleQuote => labels.double_quote,
            CharCategory::SingleQuote => labels.single_quote,
            CharCategory::Dot => labels.dot,
            CharCategory::Comma => labels.comma,
            CharCategory::Special => labels.special,
        }
    }
}

/// Classify one character. Total over `char`.
pub fn classify(c: char) -> CharCategory {
    match c {
        ' ' => CharCategory::Space,
        '\t' => CharCategory::Tab,
        '\n' => CharCategory::Newline,
        '\r' => CharCategory::CarriageReturn,
        c if c.is_whitespace() => CharCategory::OtherWhitespace,
        c if c.is_alphabetic() => CharCategory::Letter,
        c if c.is_numeric() => CharCategory::Digit,
        '{' => CharCategory::OpenBrace,
        '}' => CharCategory::CloseBrace,
        '(' => CharCategory::OpenParen,
        ')' => CharCategory::CloseParen,
        ';' => CharCategory::Semicolon,
        '=' => CharCategory::Assignment,
        '+' | '-' | '*' | '/' => CharCategory::Arithmetic,
        '<' | '>' | '!' => CharCategory::Comparison,
        '"' => CharCategory::DoubleQuote,
        '\'' => CharCategory::SingleQuote,
        '.' => CharCategory::Dot,
        ',' => CharCategory::Comma,
        _ => CharCategory::Special,
    }
}

/// One row of the character listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharEntry {
    /// 0-based character (not byte) position.
    pub position: usize,
    pub character: char,
    pub category: CharCategory,
}

/// Classify every non-whitespace character of `text`, in order.
pub fn char_entries(text: &str) -> Vec<CharEntry> {
    text.chars()
        .enumerate()
        .filter_map(|(position, character)| {
            let category = classify(character);
            if category.is_whitespace() {
                None
            } else {
                Some(CharEntry {
                    position,
                    character,
                    category,
                })
            }
        })
        .collect()
}

/// Render the listing: a title, an underline, and one line per entry.
pub fn render_listing(entries: &[CharEntry], labels: &Labels) -> String {
    let mut out = String::new();
    out.push_str(labels.chars_title);
    out.push('\n');
    out.push_str(&"=".repeat(labels.chars_title.chars().count()));
    out.push('\n');

    for entry in entries {
        out.push_str(&format!(
            "{} {:>3}: '{}' ({})\n",
            labels.position,
            entry.position,
            entry.character,
            entry.category.label(&labels.categories)
        ));
    }

    out
}
