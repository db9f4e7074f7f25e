use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::ast::{Position, Token, TokenKind};

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^`([^`]+)`").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^_(.*?)_").unwrap());
static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^~~(.*?)~~").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)").unwrap());
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Characters that open a styling span. An unmatched one is dropped.
fn is_style_marker(ch: char) -> bool {
    matches!(ch, '`' | '*' | '_' | '~')
}

/// Splits one line of text into inline tokens.
///
/// The lexer walks a single cursor left to right. At each position it tries,
/// in order: inline code, bold, italic, strikethrough, link, image, and a
/// plain text run. Spans do not nest: the inner text of a styled span is kept
/// verbatim.
///
/// Every token sits on the same `line`; columns start at 0 for the first
/// char of the fragment.
pub struct InlineLexer<'a> {
    input: &'a str,
    line: usize,
    /// Byte offset into `input`
    offset: usize,
    /// Char offset into `input`
    column: usize,
}

impl<'a> InlineLexer<'a> {
    pub fn new(input: &'a str, line: usize) -> Self {
        InlineLexer {
            input,
            line,
            offset: 0,
            column: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Drops the char under the cursor without emitting anything.
    fn skip_char(&mut self) {
        if let Some(ch) = self.rest().chars().next() {
            self.offset += ch.len_utf8();
            self.column += 1;
        }
    }

    /// Emits a token spanning `consumed` and moves the cursor past it.
    fn consume(&mut self, kind: TokenKind, value: &str, consumed: &str) -> Token {
        let start = Position::new(self.line, self.column);
        self.offset += consumed.len();
        self.column += consumed.chars().count();
        Token::leaf(kind, value, start, Position::new(self.line, self.column))
    }

    fn styled(&mut self, kind: TokenKind, caps: &Captures<'_>) -> Token {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        self.consume(kind, inner, &caps[0])
    }

    /// Length in bytes of the text run at the cursor, or 0 if the cursor
    /// sits on a styling marker.
    ///
    /// A run stops before the next styling marker, before `[`, and before a
    /// `!` that is directly followed by `[`.
    fn text_run_len(&self) -> usize {
        let rest = self.rest();
        let mut chars = rest.char_indices().peekable();

        match chars.next() {
            Some((_, first)) if !is_style_marker(first) => {}
            _ => return 0,
        }

        while let Some((idx, ch)) = chars.next() {
            let stops = is_style_marker(ch)
                || ch == '['
                || (ch == '!' && matches!(chars.peek(), Some((_, '['))));
            if stops {
                return idx;
            }
        }
        rest.len()
    }

    /// Returns the next token, or `None` once the fragment is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }

            if let Some(caps) = INLINE_CODE.captures(rest) {
                return Some(self.styled(TokenKind::InlineCode, &caps));
            }
            if let Some(caps) = BOLD.captures(rest) {
                return Some(self.styled(TokenKind::Bold, &caps));
            }
            if let Some(caps) = ITALIC.captures(rest) {
                return Some(self.styled(TokenKind::Italic, &caps));
            }
            if let Some(caps) = STRIKETHROUGH.captures(rest) {
                return Some(self.styled(TokenKind::Strikethrough, &caps));
            }
            if let Some(caps) = LINK.captures(rest) {
                let token = self.styled(TokenKind::Link, &caps);
                return Some(token.with_url(&caps[2]));
            }
            if let Some(caps) = IMAGE.captures(rest) {
                let token = self.consume(TokenKind::Image, "", &caps[0]);
                return Some(token.with_url(&caps[2]).with_alt(&caps[1]));
            }

            let len = self.text_run_len();
            if len > 0 {
                let text = &rest[..len];
                return Some(self.consume(TokenKind::Text, text, text));
            }

            // Lone marker with no partner
            self.skip_char();
        }
    }

    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }
}

impl Iterator for InlineLexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenizes `input` as inline content sitting on `line`.
pub fn tokenize_inline(input: &str, line: usize) -> Vec<Token> {
    InlineLexer::new(input, line).tokenize()
}

#[test]
fn test_styled_spans() {
    let kinds: Vec<TokenKind> = tokenize_inline("`c`**b**_i_~~s~~", 1)
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::InlineCode,
            TokenKind::Bold,
            TokenKind::Italic,
            TokenKind::Strikethrough,
        ]
    );
}

#[test]
fn test_lone_marker_dropped() {
    let tokens = tokenize_inline("2 * 3", 4);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "2 ");
    assert_eq!(tokens[1].value, " 3");
    assert_eq!(tokens[1].start, Position::new(4, 3));
}
