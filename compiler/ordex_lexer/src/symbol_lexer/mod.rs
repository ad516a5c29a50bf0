//! Symbol-mode lexer.
//!
//! Units are whole symbol names. A bare word or digit run is a literal name;
//! a bare word that is exactly one class letter lexes as that class. Quoted
//! literals may hold any non-empty name, which is how a symbol literally
//! named `d` is written.

use ordex_diagnostic::DiagnosticQueue;
use ordex_ir::{Token, TokenKind};

use crate::char_lexer::{invalid, unterminated};
use crate::cook_escape::cook;
use crate::lex_error::{error_token, LexError, LexErrorKind};
use crate::raw_scanner::{RawScanner, RawTag};
use crate::{LexMode, TokenSource};

/// Lexer for patterns over named symbols.
#[derive(Clone, Debug)]
pub struct SymbolLexer<'a> {
    scanner: RawScanner<'a>,
}

impl<'a> SymbolLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        SymbolLexer {
            scanner: RawScanner::new(source),
        }
    }
}

impl TokenSource for SymbolLexer<'_> {
    fn mode(&self) -> LexMode {
        LexMode::Symbol
    }

    fn next_token(&mut self, queue: &mut DiagnosticQueue) -> Token {
        let raw = self.scanner.next_token();
        let text = self.scanner.text(&raw);
        match raw.tag {
            RawTag::Eof => Token::eof(raw.line, raw.column),
            RawTag::Punct(kind) => Token::new(kind, text, raw.line, raw.column),
            RawTag::Integer => Token::new(TokenKind::Integer, text, raw.line, raw.column),
            RawTag::Word => {
                let mut chars = text.chars();
                let kind = match (chars.next(), chars.next()) {
                    (Some(c), None) => TokenKind::from_class_letter(c),
                    _ => None,
                };
                Token::new(
                    kind.unwrap_or(TokenKind::Literal),
                    text,
                    raw.line,
                    raw.column,
                )
            }
            RawTag::Quoted => match cook(&self.scanner, &raw, queue) {
                Ok(content) if content.is_empty() => error_token(
                    LexError::new(LexErrorKind::EmptyLiteral, raw.line, raw.column),
                    text,
                    queue,
                ),
                Ok(content) => Token::new(TokenKind::Literal, content, raw.line, raw.column),
                Err(token) => token,
            },
            RawTag::String => match cook(&self.scanner, &raw, queue) {
                Ok(content) => Token::new(TokenKind::String, content, raw.line, raw.column),
                Err(token) => token,
            },
            RawTag::Unterminated => unterminated(text, raw.line, raw.column, queue),
            RawTag::Invalid => invalid(text, raw.line, raw.column, queue),
        }
    }
}
