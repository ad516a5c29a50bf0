//! Char-mode lexer.
//!
//! Every unit of the pattern is one character. Bare words are split into
//! per-character class tokens (`d`, `a`, `W`, ...) and digit runs, so `dd`
//! lexes as two `Digit` tokens and `d3` as `Digit` then `Integer`. Quoted
//! literals must hold exactly one character.

use std::collections::VecDeque;

use ordex_diagnostic::DiagnosticQueue;
use ordex_ir::{Token, TokenKind};

use crate::cook_escape::cook;
use crate::lex_error::{error_token, LexError, LexErrorKind};
use crate::raw_scanner::{RawScanner, RawTag};
use crate::{LexMode, TokenSource};

/// Lexer for patterns over single characters.
#[derive(Clone, Debug)]
pub struct CharLexer<'a> {
    scanner: RawScanner<'a>,
    /// Tokens split off a bare word, not yet handed out.
    pending: VecDeque<Token>,
}

impl<'a> CharLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        CharLexer {
            scanner: RawScanner::new(source),
            pending: VecDeque::new(),
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "pattern sources are far shorter than u32::MAX characters"
    )]
    fn split_word(&mut self, word: &str, line: u32, column: u32, queue: &mut DiagnosticQueue) {
        let chars: Vec<char> = word.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let col = column + i as u32;
            let c = chars[i];
            if c.is_ascii_digit() {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let digits: String = chars[start..i].iter().collect();
                self.pending
                    .push_back(Token::new(TokenKind::Integer, digits, line, col));
                continue;
            }
            let token = match TokenKind::from_class_letter(c) {
                Some(kind) => Token::new(kind, c.to_string(), line, col),
                None => error_token(
                    LexError::new(LexErrorKind::UnrecognizedChar(c), line, col),
                    &c.to_string(),
                    queue,
                ),
            };
            self.pending.push_back(token);
            i += 1;
        }
    }
}

impl TokenSource for CharLexer<'_> {
    fn mode(&self) -> LexMode {
        LexMode::Char
    }

    fn next_token(&mut self, queue: &mut DiagnosticQueue) -> Token {
        if let Some(token) = self.pending.pop_front() {
            return token;
        }

        let raw = self.scanner.next_token();
        let text = self.scanner.text(&raw);
        match raw.tag {
            RawTag::Eof => Token::eof(raw.line, raw.column),
            RawTag::Punct(kind) => Token::new(kind, text, raw.line, raw.column),
            RawTag::Integer => Token::new(TokenKind::Integer, text, raw.line, raw.column),
            RawTag::Word => {
                self.split_word(text, raw.line, raw.column, queue);
                self.pending
                    .pop_front()
                    .unwrap_or_else(|| Token::eof(raw.line, raw.column))
            }
            RawTag::Quoted => match cook(&self.scanner, &raw, queue) {
                Ok(content) => match content.chars().count() {
                    1 => Token::new(TokenKind::Literal, content, raw.line, raw.column),
                    0 => error_token(
                        LexError::new(LexErrorKind::EmptyLiteral, raw.line, raw.column),
                        text,
                        queue,
                    ),
                    _ => error_token(
                        LexError::new(
                            LexErrorKind::MultiCharLiteral { text: content },
                            raw.line,
                            raw.column,
                        ),
                        text,
                        queue,
                    ),
                },
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

/// Report a quoted run with no closing quote.
pub(crate) fn unterminated(
    text: &str,
    line: u32,
    column: u32,
    queue: &mut DiagnosticQueue,
) -> Token {
    let quote = text.chars().next().unwrap_or('\'');
    error_token(
        LexError::new(LexErrorKind::Unterminated { quote }, line, column),
        text,
        queue,
    )
}

/// Report a character that starts no token.
pub(crate) fn invalid(text: &str, line: u32, column: u32, queue: &mut DiagnosticQueue) -> Token {
    let c = text.chars().next().unwrap_or_default();
    error_token(
        LexError::new(LexErrorKind::UnrecognizedChar(c), line, column),
        text,
        queue,
    )
}

#[cfg(test)]
mod tests;
