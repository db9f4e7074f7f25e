use serde::{Deserialize, Serialize};

use crate::ast::TokenKind;

/// A location in the scanned text: 1-based line, 0-based column.
///
/// Columns count chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// One node of the token tree.
///
/// Ownership runs strictly parent to child. Once a scan returns, the
/// tree is never changed by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Raw payload: heading/paragraph text, code contents, raw markup,
    /// link text, or the class name of a [`TokenKind::Class`] wrapper.
    /// Empty for pure containers.
    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Token>>,

    pub start: Position,
    pub end: Position,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Token {
    /// Builds a childless token.
    pub fn leaf(kind: TokenKind, value: impl Into<String>, start: Position, end: Position) -> Self {
        Token {
            kind,
            value: value.into(),
            children: None,
            start,
            end,
            url: None,
            alt: None,
        }
    }

    /// Builds a container with an empty value.
    pub fn container(
        kind: TokenKind,
        children: Vec<Token>,
        start: Position,
        end: Position,
    ) -> Self {
        Token {
            kind,
            value: String::new(),
            children: Some(children),
            start,
            end,
            url: None,
            alt: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Children as a slice; empty for leaves.
    pub fn children(&self) -> &[Token] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Moves this token and its whole subtree down by `offset` lines.
    ///
    /// Columns are left alone.
    pub(crate) fn shift_lines(&mut self, offset: usize) {
        self.start.line += offset;
        self.end.line += offset;
        if let Some(children) = self.children.as_mut() {
            for child in children {
                child.shift_lines(offset);
            }
        }
    }
}
