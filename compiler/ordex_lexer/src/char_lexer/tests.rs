#![allow(clippy::unwrap_used)]

use super::*;
use ordex_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn lex_char(source: &str) -> (Vec<Token>, DiagnosticQueue) {
    let mut queue = DiagnosticQueue::new();
    let tokens = crate::lex(source, LexMode::Char, &mut queue);
    (tokens, queue)
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_char(source).0.into_iter().map(|t| t.kind).collect()
}

#[test]
fn quoted_single_char() {
    let (tokens, queue) = lex_char("'a'");
    assert_eq!(tokens[0], Token::new(TokenKind::Literal, "a", 1, 1));
    assert!(queue.is_empty());
}

#[test]
fn escaped_quote() {
    let (tokens, _) = lex_char(r"'\''");
    assert_eq!(tokens[0].text, "'");
}

#[test]
fn words_split_into_classes() {
    assert_eq!(
        kinds("dAsW"),
        vec![
            TokenKind::Digit,
            TokenKind::NotAlpha,
            TokenKind::Whitespace,
            TokenKind::NotAlphaNumeric,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn split_tokens_keep_columns() {
    let (tokens, _) = lex_char(" d3");
    assert_eq!(tokens[0].column, 2);
    assert_eq!(tokens[1], Token::new(TokenKind::Integer, "3", 1, 3));
}

#[test]
fn counted_bounds() {
    assert_eq!(
        kinds("'a'{2,10}"),
        vec![
            TokenKind::Literal,
            TokenKind::LeftBrace,
            TokenKind::Integer,
            TokenKind::Comma,
            TokenKind::Integer,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn action_prefix() {
    assert_eq!(
        kinds("=[d]"),
        vec![
            TokenKind::Equal,
            TokenKind::LeftBracket,
            TokenKind::Digit,
            TokenKind::RightBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn string_token() {
    let (tokens, _) = lex_char("\"a\\tb\"");
    assert_eq!(tokens[0], Token::new(TokenKind::String, "a\tb", 1, 1));
}

#[test]
fn non_class_letter_is_error() {
    let (tokens, queue) = lex_char("dx");
    assert_eq!(tokens[0].kind, TokenKind::Digit);
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(queue.error_count(), 1);
    assert!(queue.contains_code(ErrorCode::E0002));
    let diag = queue.peek().next().unwrap();
    assert_eq!((diag.line, diag.column), (1, 2));
}

#[test]
fn empty_literal_is_error() {
    let (tokens, queue) = lex_char("''");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert!(queue.contains_code(ErrorCode::E0003));
}

#[test]
fn multi_char_literal_is_error() {
    let (_, queue) = lex_char("'ab'");
    assert!(queue.contains_code(ErrorCode::E0004));
}

#[test]
fn unterminated_literal_is_error() {
    let (tokens, queue) = lex_char("'a");
    assert_eq!(kinds("'a"), vec![TokenKind::Error, TokenKind::Eof]);
    assert_eq!(tokens[0].text, "'a");
    assert!(queue.contains_code(ErrorCode::E0001));
}

#[test]
fn invalid_escape_points_at_escape() {
    let (_, queue) = lex_char(r"'\q'");
    let diag = queue.peek().next().unwrap();
    assert_eq!(diag.code, ErrorCode::E0005);
    assert_eq!(diag.column, 3);
}

#[test]
fn unknown_punctuation_is_error() {
    let (_, queue) = lex_char("#");
    assert!(queue.contains_code(ErrorCode::E0002));
}
