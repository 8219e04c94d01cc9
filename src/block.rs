//! Balanced-delimiter block extraction.
//!
//! Blocks are delimited purely by depth counting, so nested blocks of the
//! same kind never confuse the scan. A block whose closing delimiter is
//! missing extends to the end of the text.

/// Half-open byte range into a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice `text` by this span.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An ASCII open/close delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: u8,
    pub close: u8,
}

impl Delimiters {
    /// Scope delimiters: `{` and `}`.
    pub const BRACES: Delimiters = Delimiters {
        open: b'{',
        close: b'}',
    };

    /// Grouping delimiters: `(` and `)`.
    pub const PARENS: Delimiters = Delimiters {
        open: b'(',
        close: b')',
    };
}

/// Extract the brace block starting at `start`.
///
/// `start` must point just after the opening `{`. The returned span covers
/// the block contents and excludes the closing `}`.
pub fn extract_block(text: &str, start: usize) -> Span {
    extract_delimited(text, start, Delimiters::BRACES)
}

/// Extract the block starting at `start` for an arbitrary delimiter pair.
///
/// The scan begins inside the block (depth 1). Each opening delimiter
/// increments the depth and each closing delimiter decrements it; the block
/// ends at the closing delimiter that brings the depth back to 0. When that
/// never happens the span runs to the end of `text`.
pub fn extract_delimited(text: &str, start: usize, delims: Delimiters) -> Span {
    let bytes = text.as_bytes();
    let start = start.min(bytes.len());
    let mut depth = 1usize;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if b == delims.open {
            depth += 1;
        } else if b == delims.close {
            depth -= 1;
            if depth == 0 {
                return Span::new(start, start + offset);
            }
        }
    }

    Span::new(start, bytes.len())
}

/// Open brace and parenthesis counts at one offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Depth {
    pub braces: isize,
    pub parens: isize,
}

impl Depth {
    /// Inside a nested `{}` region.
    pub fn is_nested(&self) -> bool {
        self.braces > 0
    }

    /// Inside an open `(`.
    pub fn is_parenthesized(&self) -> bool {
        self.parens > 0
    }
}

/// Running delimiter depth over one text.
///
/// Queries at non-decreasing offsets only scan the bytes since the previous
/// query, so filtering every match of a body costs a single pass. A query
/// before the previous offset restarts from the beginning.
pub struct DepthScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: Depth,
}

impl<'a> DepthScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            depth: Depth::default(),
        }
    }

    /// Depth of `text[..pos]`.
    pub fn depth_at(&mut self, pos: usize) -> Depth {
        let pos = pos.min(self.bytes.len());
        if pos < self.pos {
            self.pos = 0;
            self.depth = Depth::default();
        }

        for &b in &self.bytes[self.pos..pos] {
            match b {
                b'{' => self.depth.braces += 1,
                b'}' => self.depth.braces -= 1,
                b'(' => self.depth.parens += 1,
                b')' => self.depth.parens -= 1,
                _ => {}
            }
        }
        self.pos = pos;
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_block() {
        let text = "{ int x = 1; } rest";
        let span = extract_block(text, 1);
        assert_eq!(span.slice(text), " int x = 1; ");
        assert_eq!(&text[span.end..span.end + 1], "}");
    }

    #[test]
    fn test_extract_nested_blocks() {
        let text = "class A { void f() { if (x) { y(); } } void g() { } } tail";
        let start = text.find('{').unwrap() + 1;
        let span = extract_block(text, start);
        let body = span.slice(text);
        assert_eq!(body, " void f() { if (x) { y(); } } void g() { } ");
        assert_eq!(body.matches('{').count(), body.matches('}').count());
    }

    #[test]
    fn test_unterminated_block_runs_to_end() {
        let text = "{ int x; { nested";
        let span = extract_block(text, 1);
        assert_eq!(span.end, text.len());
        assert_eq!(span.slice(text), " int x; { nested");
    }

    #[test]
    fn test_empty_and_out_of_range_start() {
        let text = "{";
        let span = extract_block(text, 1);
        assert!(span.is_empty());

        let span = extract_block(text, 10);
        assert_eq!(span, Span::new(1, 1));
    }

    #[test]
    fn test_extract_parens() {
        let text = "if (isValid(a) && (b > c)) {";
        let start = text.find('(').unwrap() + 1;
        let span = extract_delimited(text, start, Delimiters::PARENS);
        assert_eq!(span.slice(text), "isValid(a) && (b > c)");
    }

    #[test]
    fn test_balanced_for_many_depths() {
        for k in 0..20 {
            let inner = format!("{}{}", "{ a ".repeat(k), "} ".repeat(k));
            let text = format!("{{{}}} after", inner);
            let span = extract_block(&text, 1);
            let body = span.slice(&text);
            assert_eq!(body, inner);
            assert_eq!(body.matches('{').count(), k);
            assert_eq!(body.matches('}').count(), k);
        }
    }

    #[test]
    fn test_depth_scanner() {
        let body = " int a; void f() { int b; } int c; ";
        let mut scanner = DepthScanner::new(body);
        assert!(!scanner.depth_at(body.find("int a").unwrap()).is_nested());
        assert!(scanner.depth_at(body.find("int b").unwrap()).is_nested());
        assert!(!scanner.depth_at(body.find("int c").unwrap()).is_nested());
        assert_eq!(scanner.depth_at(body.len()), Depth::default());
    }

    #[test]
    fn test_depth_scanner_parens_and_rewind() {
        let body = "for (int i = 0; i < n; i++) { int j; }";
        let mut scanner = DepthScanner::new(body);
        let j = body.find("int j").unwrap();
        let i = body.find("int i").unwrap();

        let at_j = scanner.depth_at(j);
        assert!(!at_j.is_parenthesized());
        assert!(at_j.is_nested());

        // an earlier offset rescans from the start
        let at_i = scanner.depth_at(i);
        assert_eq!(at_i, Depth { braces: 0, parens: 1 });
        assert_eq!(scanner.depth_at(j), at_j);
    }
}
