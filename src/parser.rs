use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::{
    ast::{Position, Token, TokenKind},
    lexer::tokenize_inline,
};

/// Deepest class-annotation nesting a scan accepts by default.
pub const MAX_NESTING_DEPTH: usize = 10;

const FENCE: &str = "```";

static CLASS_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\["(.*?)"\]\s*(.*)"#).unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)").unwrap());
static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{3,}$").unwrap());
static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+]\s+").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());
static TABLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[|\s:-]+$").unwrap());
static COMPLETE_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<\w+.*>.*</\w+>$").unwrap());

/// Settings threaded through every scan, nested ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// How many class annotations may nest inside each other.
    /// Values above [`MAX_NESTING_DEPTH`] are clamped to it.
    pub max_nesting_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

/// Fatal scan failures. Either one aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// Class annotations nested deeper than [`ScanOptions::max_nesting_depth`]
    #[error("Maximum nesting depth exceeded: depth {depth} is above the limit of {max}")]
    NestingDepthExceeded { depth: usize, max: usize },

    /// A `|` row that is not followed by an alignment line
    #[error("Invalid table syntax: missing separator line after line {line}")]
    MissingTableSeparator { line: usize },
}

/// A non-blank input line and its 1-based number in the original text.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    fn start(&self) -> Position {
        Position::new(self.number, 0)
    }

    fn end(&self) -> Position {
        Position::new(self.number, self.text.chars().count())
    }

    fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Line-by-line block scanner.
///
/// Blank lines are dropped before scanning starts; they carry no meaning.
/// Each remaining line is matched against the block recognizers in a fixed
/// order and the first match wins:
///
/// 1. class annotation `["name"] content`
/// 2. heading `# ..` through `###### ..`
/// 3. horizontal rule `---`
/// 4. blockquote `> ..`
/// 5. fenced code block
/// 6. unordered (`-`, `*`, `+`) and ordered (`1.`) lists
/// 7. table (`|` rows with an alignment line)
/// 8. raw markup `<...>`
/// 9. inline content
pub struct Parser<'a> {
    lines: Vec<Line<'a>>,
    /// Number of lines in the input, blanks included
    line_count: usize,
    position: usize,
    depth: usize,
    options: ScanOptions,
}

impl<'a> Parser<'a> {
    /// Creates a top-level scanner.
    pub fn new(input: &'a str, mut options: ScanOptions) -> Result<Self, ScanError> {
        options.max_nesting_depth = options.max_nesting_depth.min(MAX_NESTING_DEPTH);
        Self::at_depth(input, 0, options)
    }

    /// Every scanner, top-level or nested, is built here, so this is the
    /// one place the depth ceiling is enforced.
    fn at_depth(input: &'a str, depth: usize, options: ScanOptions) -> Result<Self, ScanError> {
        if depth > options.max_nesting_depth {
            return Err(ScanError::NestingDepthExceeded {
                depth,
                max: options.max_nesting_depth,
            });
        }

        let lines = input
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(idx, text)| Line {
                number: idx + 1,
                text,
            })
            .collect();

        Ok(Parser {
            lines,
            line_count: input.lines().count(),
            position: 0,
            depth,
            options,
        })
    }

    fn current(&self) -> Option<Line<'a>> {
        self.lines.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Scans every line. A top-level scan ends with one [`TokenKind::Eof`].
    pub fn parse(mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();

        while let Some(line) = self.current() {
            self.parse_line(line, &mut tokens)?;
        }

        if self.depth == 0 {
            let eof = Position::new(self.line_count + 1, 0);
            tokens.push(Token::leaf(TokenKind::Eof, "", eof, eof));
        }

        Ok(tokens)
    }

    fn parse_line(&mut self, line: Line<'a>, tokens: &mut Vec<Token>) -> Result<(), ScanError> {
        let block = if let Some(token) = self.parse_class(line)? {
            Some(token)
        } else if let Some(token) = self.parse_heading(line) {
            Some(token)
        } else if let Some(token) = self.parse_horizontal_rule(line) {
            Some(token)
        } else if let Some(token) = self.parse_blockquote(line) {
            Some(token)
        } else if let Some(token) = self.parse_code_block(line) {
            Some(token)
        } else if let Some(token) =
            self.parse_list(line, &UNORDERED_ITEM, TokenKind::UnorderedList)
        {
            Some(token)
        } else if let Some(token) = self.parse_list(line, &ORDERED_ITEM, TokenKind::OrderedList) {
            Some(token)
        } else if let Some(token) = self.parse_table(line)? {
            Some(token)
        } else {
            self.parse_raw_html(line)
        };

        match block {
            Some(token) => {
                trace!(line = line.number, kind = ?token.kind, depth = self.depth, "block");
                tokens.push(token);
            }
            None => {
                self.advance();
                let inline = tokenize_inline(line.text, line.number);
                if inline.is_empty() {
                    tokens.push(Token::leaf(
                        TokenKind::Paragraph,
                        line.text,
                        line.start(),
                        line.end(),
                    ));
                } else {
                    tokens.extend(inline);
                }
            }
        }
        Ok(())
    }

    /// `["name"]` alone, or `["name"] content` where the content is scanned
    /// again one level deeper. The nested tokens are moved onto this line;
    /// their columns stay relative to the content.
    fn parse_class(&mut self, line: Line<'a>) -> Result<Option<Token>, ScanError> {
        let Some(caps) = CLASS_ANNOTATION.captures(line.trimmed()) else {
            return Ok(None);
        };
        let class_name = caps.get(1).map_or("", |m| m.as_str());
        let content = caps.get(2).map_or("", |m| m.as_str()).trim();

        let children = if content.is_empty() {
            Vec::new()
        } else {
            trace!(line = line.number, depth = self.depth + 1, class = class_name, "nested scan");
            let mut nested = Parser::at_depth(content, self.depth + 1, self.options)?.parse()?;
            for token in &mut nested {
                token.shift_lines(line.number - 1);
            }
            nested
        };

        self.advance();
        Ok(Some(
            Token::container(TokenKind::Class, children, line.start(), line.end())
                .with_value(class_name),
        ))
    }

    fn parse_heading(&mut self, line: Line<'a>) -> Option<Token> {
        let caps = HEADING.captures(line.trimmed())?;
        let kind = TokenKind::heading(caps[1].len())?;
        let text = caps.get(2).map_or("", |m| m.as_str()).trim();

        self.advance();
        Some(Token::leaf(kind, text, line.start(), line.end()))
    }

    fn parse_horizontal_rule(&mut self, line: Line<'a>) -> Option<Token> {
        if !HORIZONTAL_RULE.is_match(line.trimmed()) {
            return None;
        }
        self.advance();
        Some(Token::leaf(
            TokenKind::HorizontalRule,
            "",
            line.start(),
            line.end(),
        ))
    }

    /// Consumes every following `>` line. Each stripped line is tokenized
    /// inline; a line that yields nothing becomes a paragraph.
    fn parse_blockquote(&mut self, line: Line<'a>) -> Option<Token> {
        if !line.trimmed().starts_with('>') {
            return None;
        }

        let mut children = Vec::new();
        let mut end = line.end();

        while let Some(quoted) = self.current() {
            let Some(content) = quoted.trimmed().strip_prefix('>') else {
                break;
            };
            let content = content.trim_start();

            let inline = tokenize_inline(content, quoted.number);
            if inline.is_empty() {
                children.push(Token::leaf(
                    TokenKind::Paragraph,
                    content,
                    quoted.start(),
                    quoted.end(),
                ));
            } else {
                children.extend(inline);
            }

            end = quoted.end();
            self.advance();
        }

        Some(Token::container(
            TokenKind::Blockquote,
            children,
            line.start(),
            end,
        ))
    }

    /// Lines between an opening and a closing fence are kept verbatim.
    /// Without a closing fence the text falls back to a paragraph.
    fn parse_code_block(&mut self, line: Line<'a>) -> Option<Token> {
        let opening = line.trimmed();
        if !opening.starts_with(FENCE) {
            return None;
        }
        self.advance();

        let mut body: Vec<&str> = Vec::new();
        let mut end = line.end();

        while let Some(inner) = self.current() {
            self.advance();
            end = inner.end();
            if inner.trimmed() == FENCE {
                let code = body.join("\n");
                return Some(Token::leaf(
                    TokenKind::CodeBlock,
                    code.trim_end(),
                    line.start(),
                    end,
                ));
            }
            body.push(inner.text);
        }

        let mut text = opening.to_string();
        for inner in body {
            text.push('\n');
            text.push_str(inner);
        }
        Some(Token::leaf(
            TokenKind::Paragraph,
            text.trim_end(),
            line.start(),
            end,
        ))
    }

    /// One list token, one item per consecutive line that carries `marker`.
    fn parse_list(&mut self, line: Line<'a>, marker: &Regex, kind: TokenKind) -> Option<Token> {
        if !marker.is_match(line.trimmed()) {
            return None;
        }

        let mut items = Vec::new();
        let mut end = line.end();

        while let Some(item) = self.current() {
            let trimmed = item.trimmed();
            let Some(found) = marker.find(trimmed) else {
                break;
            };
            let content = &trimmed[found.end()..];

            items.push(Token::container(
                TokenKind::ListItem,
                tokenize_inline(content, item.number),
                item.start(),
                item.end(),
            ));
            end = item.end();
            self.advance();
        }

        Some(Token::container(kind, items, line.start(), end))
    }

    /// A `|` row followed by an alignment line, then any number of rows.
    fn parse_table(&mut self, line: Line<'a>) -> Result<Option<Token>, ScanError> {
        if !is_table_row(line) {
            return Ok(None);
        }

        let header = table_row(line, TokenKind::TableHeader);
        self.advance();

        match self.current() {
            Some(separator) if TABLE_SEPARATOR.is_match(separator.trimmed()) => self.advance(),
            _ => {
                return Err(ScanError::MissingTableSeparator { line: line.number });
            }
        }

        let mut end = self.lines[self.position - 1].end();
        let mut rows = vec![header];

        while let Some(row) = self.current() {
            if !is_table_row(row) {
                break;
            }
            rows.push(table_row(row, TokenKind::TableRow));
            end = row.end();
            self.advance();
        }

        Ok(Some(Token::container(
            TokenKind::Table,
            rows,
            line.start(),
            end,
        )))
    }

    /// `<tag>...` up to and including the next line that opens with `</`,
    /// unless the first line already holds the opening and closing tags.
    fn parse_raw_html(&mut self, line: Line<'a>) -> Option<Token> {
        let trimmed = line.trimmed();
        if !(trimmed.starts_with('<') && trimmed.ends_with('>')) {
            return None;
        }
        self.advance();

        let mut markup = line.text.to_string();
        let mut end = line.end();

        if !COMPLETE_ELEMENT.is_match(trimmed) {
            while let Some(next) = self.current() {
                markup.push('\n');
                markup.push_str(next.text);
                end = next.end();
                self.advance();
                if next.trimmed().starts_with("</") {
                    break;
                }
            }
        }

        Some(Token::leaf(TokenKind::RawHtml, markup, line.start(), end))
    }
}

fn is_table_row(line: Line<'_>) -> bool {
    line.trimmed().starts_with('|')
}

/// Splits a `|` row into cells. Empty cells are dropped; each cell's column
/// is its offset within the trimmed row.
fn table_row(line: Line<'_>, kind: TokenKind) -> Token {
    let row = line.trimmed();
    let mut cells = Vec::new();
    let mut offset = 0;

    for piece in row.split('|') {
        let cell = piece.trim();
        if !cell.is_empty() {
            let leading = piece.len() - piece.trim_start().len();
            let column = row[..offset + leading].chars().count();
            cells.push(Token::container(
                TokenKind::TableCell,
                tokenize_inline(cell, line.number),
                Position::new(line.number, column),
                Position::new(line.number, column + cell.chars().count()),
            ));
        }
        offset += piece.len() + 1;
    }

    Token::container(kind, cells, line.start(), line.end())
}
