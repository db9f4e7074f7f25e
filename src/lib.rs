pub mod ast;
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{Position, Token, TokenKind};
pub use lexer::{InlineLexer, tokenize_inline};
pub use output::{to_html, to_json, to_json_pretty};
pub use parser::{MAX_NESTING_DEPTH, Parser, ScanError, ScanOptions};

/// Scans `input` into a token tree with the default options.
///
/// # Examples
///
/// ```
/// use classmark::{parse, TokenKind};
///
/// let tokens = parse("## Title").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Heading2);
/// assert_eq!(tokens[0].value, "Title");
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
/// ```
pub fn parse(input: &str) -> Result<Vec<Token>, ScanError> {
    parse_with(input, &ScanOptions::default())
}

/// Scans `input` into a token tree.
pub fn parse_with(input: &str, options: &ScanOptions) -> Result<Vec<Token>, ScanError> {
    tracing::debug!(
        bytes = input.len(),
        max_depth = options.max_nesting_depth,
        "parsing"
    );
    Parser::new(input, *options)?.parse()
}

/// Renders a token tree to HTML. See [`output::to_html`].
pub fn render(tokens: &[Token]) -> String {
    output::to_html(tokens)
}
