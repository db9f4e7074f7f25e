//! Output for scanned token trees.
//!
//! This module turns a token tree into HTML, or into JSON for tooling that
//! wants the tree itself.
//!
//! # Features
//!
//! - **HTML** via [`to_html()`] - one pre-order walk, one string
//! - **Class annotations** - a `["name"]` wrapper either becomes a
//!   `<div class="name">` around its children, or, when it has no children,
//!   puts `class="name"` on the next heading, paragraph, blockquote or code
//!   block
//! - **JSON** via [`to_json()`] / [`to_json_pretty()`], and back again via
//!   [`from_json()`]
//!
//! Nothing is HTML-escaped. Raw markup tokens are written out verbatim, so
//! untrusted input must be sanitized by the caller.
//!
//! # Examples
//!
//! ```
//! use classmark::{parse, output::to_html};
//!
//! let tokens = parse("[\"lead\"]\n# Hello").unwrap();
//! assert_eq!(to_html(&tokens), r#"<h1 class="lead">Hello</h1>"#);
//! ```

use crate::ast::{Token, TokenKind};

/// Open/close fragments for the kinds that render as plain wrappers.
fn tags(kind: TokenKind) -> (&'static str, &'static str) {
    match kind {
        TokenKind::Heading1 => ("<h1>", "</h1>"),
        TokenKind::Heading2 => ("<h2>", "</h2>"),
        TokenKind::Heading3 => ("<h3>", "</h3>"),
        TokenKind::Heading4 => ("<h4>", "</h4>"),
        TokenKind::Heading5 => ("<h5>", "</h5>"),
        TokenKind::Heading6 => ("<h6>", "</h6>"),
        TokenKind::Paragraph => ("<p>", "</p>"),
        TokenKind::Bold => ("<strong>", "</strong>"),
        TokenKind::Italic => ("<em>", "</em>"),
        TokenKind::Strikethrough => ("<del>", "</del>"),
        TokenKind::InlineCode => ("<code>", "</code>"),
        TokenKind::CodeBlock => ("<pre><code>", "</code></pre>"),
        TokenKind::Blockquote => ("<blockquote>", "</blockquote>"),
        TokenKind::OrderedList => ("<ol>", "</ol>"),
        TokenKind::UnorderedList => ("<ul>", "</ul>"),
        TokenKind::ListItem => ("<li>", "</li>"),
        TokenKind::Table => ("<table>", "</table>"),
        TokenKind::TableHeader => ("<thead>", "</thead>"),
        TokenKind::TableRow => ("<tr>", "</tr>"),
        TokenKind::TableCell => ("<td>", "</td>"),
        TokenKind::HorizontalRule => ("<hr>", ""),
        TokenKind::Text
        | TokenKind::Eof
        | TokenKind::Class
        | TokenKind::Link
        | TokenKind::Image
        | TokenKind::RawHtml => ("", ""),
    }
}

/// Puts `class="..."` on the first element of an opening fragment.
fn with_class(open: &str, class: &str) -> String {
    open.replacen('>', &format!(" class=\"{}\">", class), 1)
}

/// Pre-order HTML writer.
///
/// The only state carried between sibling tokens is the pending class set by
/// a childless class wrapper. It is passed into each call and handed back,
/// never stored on the renderer.
pub struct HtmlRenderer {
    out: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer { out: String::new() }
    }

    pub fn render(mut self, tokens: &[Token]) -> String {
        self.render_all(tokens, None);
        self.out
    }

    fn render_all<'t>(
        &mut self,
        tokens: &'t [Token],
        mut pending: Option<&'t str>,
    ) -> Option<&'t str> {
        for token in tokens {
            pending = self.render_token(token, pending);
        }
        pending
    }

    /// Writes one token and its subtree, returning the pending class left
    /// over for the next sibling.
    fn render_token<'t>(&mut self, token: &'t Token, pending: Option<&'t str>) -> Option<&'t str> {
        match token.kind {
            TokenKind::Class => {
                let class = Some(token.value.as_str()).filter(|c| !c.is_empty());
                if !token.has_children() {
                    return class;
                }
                self.out
                    .push_str(&format!("<div class=\"{}\">", token.value));
                self.render_all(token.children(), None);
                self.out.push_str("</div>");
                None
            }
            TokenKind::Link => {
                self.out.push_str(&format!(
                    "<a href=\"{}\" class=\"underline\">{}</a>",
                    token.url.as_deref().unwrap_or(""),
                    token.value
                ));
                pending
            }
            TokenKind::Image => {
                self.out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">",
                    token.url.as_deref().unwrap_or(""),
                    token.alt.as_deref().unwrap_or("")
                ));
                pending
            }
            TokenKind::RawHtml => {
                self.out.push_str(&token.value);
                pending
            }
            kind => {
                let (open, close) = tags(kind);
                let pending = match pending {
                    Some(class) if kind.accepts_class() => {
                        self.out.push_str(&with_class(open, class));
                        None
                    }
                    _ => {
                        self.out.push_str(open);
                        pending
                    }
                };

                let pending = if token.has_children() {
                    self.render_all(token.children(), pending)
                } else {
                    self.out.push_str(&token.value);
                    pending
                };

                self.out.push_str(close);
                pending
            }
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a token tree to HTML.
///
/// Output depends only on the tokens: the same tree always gives the same
/// bytes.
///
/// # Examples
///
/// ```
/// use classmark::{parse, output::to_html};
///
/// let tokens = parse("- **a**\n- b").unwrap();
/// assert_eq!(
///     to_html(&tokens),
///     "<ul><li><strong>a</strong></li><li>b</li></ul>"
/// );
/// ```
pub fn to_html(tokens: &[Token]) -> String {
    tracing::debug!(tokens = tokens.len(), "rendering html");
    HtmlRenderer::new().render(tokens)
}

/// Serializes a token tree to compact JSON.
pub fn to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tokens)
}

/// Serializes a token tree to JSON with 2-space indentation.
///
/// # Examples
///
/// ```
/// use classmark::{parse, output::to_json_pretty};
///
/// let json = to_json_pretty(&parse("# Hi").unwrap()).unwrap();
/// assert!(json.contains("\"type\": \"HEADING_1\""));
/// ```
pub fn to_json_pretty(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Reads a token tree back from the JSON produced by [`to_json()`].
pub fn from_json(json: &str) -> Result<Vec<Token>, serde_json::Error> {
    serde_json::from_str(json)
}
