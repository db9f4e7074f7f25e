use serde::{Deserialize, Serialize};

/// The closed set of node types a scan can produce.
///
/// Block kinds come out of the line scanner, inline kinds out of the
/// per-line lexer. [`TokenKind::Eof`] is only ever emitted once, at the
/// end of a top-level scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// End-of-input sentinel
    Eof,

    // Inline
    /// Literal text run
    Text,
    /// Double-marker span
    ///
    /// # Example
    /// ```text
    /// **bold**
    /// ```
    Bold,
    /// Single-marker span
    ///
    /// # Examples
    /// ```text
    /// _italic_
    /// ```
    Italic,
    /// ```text
    /// ~~struck~~
    /// ```
    Strikethrough,
    /// ```text
    /// `code`
    /// ```
    InlineCode,
    /// `[text](url)`, carries `url`
    Link,
    /// `![alt](url)`, carries `url` and `alt`
    Image,

    // Block
    /// Bracket-quoted class annotation (`["name"]`)
    Class,
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
    Paragraph,
    HorizontalRule,
    Blockquote,
    CodeBlock,
    OrderedList,
    UnorderedList,
    ListItem,
    Table,
    TableHeader,
    TableRow,
    TableCell,
    /// Verbatim markup, emitted unescaped
    RawHtml,
}

impl TokenKind {
    /// Maps a marker count to its heading variant.
    ///
    /// Returns `None` outside `1..=6`.
    pub fn heading(level: usize) -> Option<Self> {
        match level {
            1 => Some(TokenKind::Heading1),
            2 => Some(TokenKind::Heading2),
            3 => Some(TokenKind::Heading3),
            4 => Some(TokenKind::Heading4),
            5 => Some(TokenKind::Heading5),
            6 => Some(TokenKind::Heading6),
            _ => None,
        }
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            TokenKind::Heading1 => Some(1),
            TokenKind::Heading2 => Some(2),
            TokenKind::Heading3 => Some(3),
            TokenKind::Heading4 => Some(4),
            TokenKind::Heading5 => Some(5),
            TokenKind::Heading6 => Some(6),
            _ => None,
        }
    }

    /// Container kinds always carry a `children` list; leaves never do.
    pub fn is_container(self) -> bool {
        match self {
            TokenKind::Class
            | TokenKind::Blockquote
            | TokenKind::OrderedList
            | TokenKind::UnorderedList
            | TokenKind::ListItem
            | TokenKind::Table
            | TokenKind::TableHeader
            | TokenKind::TableRow
            | TokenKind::TableCell => true,
            TokenKind::Eof
            | TokenKind::Text
            | TokenKind::Bold
            | TokenKind::Italic
            | TokenKind::Strikethrough
            | TokenKind::InlineCode
            | TokenKind::Link
            | TokenKind::Image
            | TokenKind::Heading1
            | TokenKind::Heading2
            | TokenKind::Heading3
            | TokenKind::Heading4
            | TokenKind::Heading5
            | TokenKind::Heading6
            | TokenKind::Paragraph
            | TokenKind::HorizontalRule
            | TokenKind::CodeBlock
            | TokenKind::RawHtml => false,
        }
    }

    /// Whether a pending class annotation may attach to this kind.
    pub fn accepts_class(self) -> bool {
        self.heading_level().is_some()
            || matches!(
                self,
                TokenKind::Paragraph | TokenKind::Blockquote | TokenKind::CodeBlock
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_round_trip() {
        for level in 1..=6 {
            let kind = TokenKind::heading(level).unwrap();
            assert_eq!(kind.heading_level(), Some(level as u8));
        }
        assert_eq!(TokenKind::heading(0), None);
        assert_eq!(TokenKind::heading(7), None);
    }

    #[test]
    fn serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&TokenKind::Heading3).unwrap(),
            "\"HEADING_3\""
        );
        assert_eq!(
            serde_json::to_string(&TokenKind::RawHtml).unwrap(),
            "\"RAW_HTML\""
        );
        assert_eq!(
            serde_json::to_string(&TokenKind::InlineCode).unwrap(),
            "\"INLINE_CODE\""
        );
    }
}
