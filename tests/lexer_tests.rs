// tests/lexer_tests.rs

use classmark::ast::{Position, TokenKind};
use classmark::lexer::{InlineLexer, tokenize_inline};
use pretty_assertions::assert_eq;

fn kinds_and_values(input: &str) -> Vec<(TokenKind, String)> {
    tokenize_inline(input, 1)
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect()
}

// ============================================================================
// Styled spans
// ============================================================================

#[test]
fn test_single_spans() {
    let test_cases = vec![
        ("`let x`", TokenKind::InlineCode, "let x"),
        ("**bold**", TokenKind::Bold, "bold"),
        ("_italic_", TokenKind::Italic, "italic"),
        ("~~gone~~", TokenKind::Strikethrough, "gone"),
        ("plain words", TokenKind::Text, "plain words"),
    ];

    for (input, kind, value) in test_cases {
        let tokens = tokenize_inline(input, 1);
        assert_eq!(tokens.len(), 1, "Failed for input: {}", input);
        assert_eq!(tokens[0].kind, kind, "Failed for input: {}", input);
        assert_eq!(tokens[0].value, value, "Failed for input: {}", input);
        assert_eq!(
            tokens[0].end.column,
            input.chars().count(),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_mixed_line() {
    assert_eq!(
        kinds_and_values("Some **bold**, _italic_ and `code`."),
        vec![
            (TokenKind::Text, "Some ".to_string()),
            (TokenKind::Bold, "bold".to_string()),
            (TokenKind::Text, ", ".to_string()),
            (TokenKind::Italic, "italic".to_string()),
            (TokenKind::Text, " and ".to_string()),
            (TokenKind::InlineCode, "code".to_string()),
            (TokenKind::Text, ".".to_string()),
        ]
    );
}

#[test]
fn test_spans_do_not_nest() {
    // Outer span keeps inner markers as literal text
    let tokens = tokenize_inline("**_both_**", 1);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Bold);
    assert_eq!(tokens[0].value, "_both_");

    let tokens = tokenize_inline("`**not bold**`", 1);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::InlineCode);
    assert_eq!(tokens[0].value, "**not bold**");
}

#[test]
fn test_bold_wins_over_italic() {
    let tokens = tokenize_inline("**a** _b_", 1);
    assert_eq!(tokens[0].kind, TokenKind::Bold);
    assert_eq!(tokens[2].kind, TokenKind::Italic);
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn test_single_star_is_not_italic() {
    assert_eq!(
        kinds_and_values("*a* b"),
        vec![
            (TokenKind::Text, "a".to_string()),
            (TokenKind::Text, " b".to_string()),
        ]
    );
}

// ============================================================================
// Links and images
// ============================================================================

#[test]
fn test_link() {
    let tokens = tokenize_inline("see [docs](https://example.com) now", 1);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Link);
    assert_eq!(tokens[1].value, "docs");
    assert_eq!(tokens[1].url.as_deref(), Some("https://example.com"));
    assert_eq!(tokens[1].alt, None);
    assert_eq!(tokens[2].value, " now");
}

#[test]
fn test_image() {
    let tokens = tokenize_inline("![a cat](cat.png)", 1);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Image);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens[0].url.as_deref(), Some("cat.png"));
    assert_eq!(tokens[0].alt.as_deref(), Some("a cat"));
}

#[test]
fn test_brackets_and_bangs_stay_text() {
    let text: String = tokenize_inline("Wow! [not a link] ok", 1)
        .into_iter()
        .inspect(|t| assert_eq!(t.kind, TokenKind::Text))
        .map(|t| t.value)
        .collect();
    assert_eq!(text, "Wow! [not a link] ok");
}

// ============================================================================
// Degraded input
// ============================================================================

#[test]
fn test_unmatched_markers_are_dropped() {
    let test_cases = vec![
        ("a_b", "ab"),
        ("~x", "x"),
        ("**open", "open"),
        ("tick ` here", "tick  here"),
    ];

    for (input, expected) in test_cases {
        let text: String = tokenize_inline(input, 1)
            .into_iter()
            .map(|t| t.value)
            .collect();
        assert_eq!(text, expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_only_markers_yield_nothing() {
    assert!(tokenize_inline("*", 1).is_empty());
    assert!(tokenize_inline("~ _", 1).len() == 1);
    assert!(tokenize_inline("", 1).is_empty());
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_tokens_are_contiguous() {
    let tokens = tokenize_inline("a **b** c ~~d~~ [e](f) ![g](h) `i`", 7);
    assert_eq!(tokens[0].start, Position::new(7, 0));
    for pair in tokens.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    assert!(tokens.iter().all(|t| t.start.line == 7 && t.end.line == 7));
    assert_eq!(tokens.last().unwrap().end.column, 34);
}

#[test]
fn test_columns_count_chars() {
    let tokens = tokenize_inline("héllo **wörld**", 1);
    assert_eq!(tokens[0].end.column, 6);
    assert_eq!(tokens[1].start.column, 6);
    assert_eq!(tokens[1].end.column, 15);
}

#[test]
fn test_lexer_is_an_iterator() {
    let mut lexer = InlineLexer::new("**a**b", 2);
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Bold));
    assert_eq!(lexer.next().map(|t| t.value), Some("b".to_string()));
    assert_eq!(lexer.next(), None);
}
