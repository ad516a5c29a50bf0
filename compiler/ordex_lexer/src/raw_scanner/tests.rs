use super::*;
use pretty_assertions::assert_eq;

fn tags(source: &str) -> Vec<RawTag> {
    let mut scanner = RawScanner::new(source);
    let mut out = Vec::new();
    loop {
        let token = scanner.next_token();
        out.push(token.tag);
        if token.tag == RawTag::Eof {
            return out;
        }
    }
}

#[test]
fn punctuation_and_words() {
    assert_eq!(
        tags("(ab)+ 12"),
        vec![
            RawTag::Punct(TokenKind::LeftParen),
            RawTag::Word,
            RawTag::Punct(TokenKind::RightParen),
            RawTag::Punct(TokenKind::Plus),
            RawTag::Integer,
            RawTag::Eof,
        ]
    );
}

#[test]
fn mixed_digits_and_letters_are_a_word() {
    assert_eq!(tags("3d"), vec![RawTag::Word, RawTag::Eof]);
}

#[test]
fn quoted_content_excludes_quotes() {
    let mut scanner = RawScanner::new("  'x\\'y'");
    let token = scanner.next_token();
    assert_eq!(token.tag, RawTag::Quoted);
    assert_eq!(token.column, 3);
    assert_eq!(scanner.content(&token), "x\\'y");
}

#[test]
fn string_tag() {
    let mut scanner = RawScanner::new("\"abc\"");
    let token = scanner.next_token();
    assert_eq!(token.tag, RawTag::String);
    assert_eq!(scanner.content(&token), "abc");
}

#[test]
fn unterminated_at_newline_and_eof() {
    assert_eq!(tags("'ab\n"), vec![RawTag::Unterminated, RawTag::Eof]);
    assert_eq!(tags("\"ab"), vec![RawTag::Unterminated, RawTag::Eof]);
    assert_eq!(tags("'a\\"), vec![RawTag::Unterminated, RawTag::Eof]);
}

#[test]
fn unknown_character_is_invalid() {
    assert_eq!(tags("#"), vec![RawTag::Invalid, RawTag::Eof]);
}

#[test]
fn positions_span_lines() {
    let mut scanner = RawScanner::new("a\n  b");
    scanner.next_token();
    let second = scanner.next_token();
    assert_eq!((second.line, second.column), (2, 3));
}
