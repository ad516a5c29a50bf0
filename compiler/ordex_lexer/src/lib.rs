//! Lexers for ordex pattern sources.
//!
//! Two flavors share one raw scanner:
//!
//! - [`CharLexer`]: units are single characters; bare words split into class tokens
//! - [`SymbolLexer`]: units are whole symbol names
//!
//! Lexers never fail. A problem is reported to the [`DiagnosticQueue`] and an
//! `Error` token takes the place of the bad input, so the parser sees one
//! stream regardless of errors.

mod char_lexer;
mod cook_escape;
mod cursor;
mod lex_error;
mod raw_scanner;
mod symbol_lexer;

use std::fmt;

use ordex_diagnostic::DiagnosticQueue;
use ordex_ir::{Token, TokenKind};

pub use char_lexer::CharLexer;
pub use cook_escape::unescape;
pub use lex_error::{LexError, LexErrorKind};
pub use symbol_lexer::SymbolLexer;

/// Which unit a pattern source is written over.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LexMode {
    /// Each unit is a single character.
    #[default]
    Char,
    /// Each unit is a named symbol.
    Symbol,
}

impl fmt::Display for LexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexMode::Char => f.write_str("char"),
            LexMode::Symbol => f.write_str("symbol"),
        }
    }
}

/// A pull-based token stream.
///
/// After the first `Eof` every further call returns `Eof` again.
pub trait TokenSource {
    fn mode(&self) -> LexMode;

    fn next_token(&mut self, queue: &mut DiagnosticQueue) -> Token;
}

/// Either lexer flavor, chosen at runtime.
#[derive(Clone, Debug)]
pub enum Lexer<'a> {
    Char(CharLexer<'a>),
    Symbol(SymbolLexer<'a>),
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, mode: LexMode) -> Self {
        match mode {
            LexMode::Char => Lexer::Char(CharLexer::new(source)),
            LexMode::Symbol => Lexer::Symbol(SymbolLexer::new(source)),
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn mode(&self) -> LexMode {
        match self {
            Lexer::Char(lexer) => lexer.mode(),
            Lexer::Symbol(lexer) => lexer.mode(),
        }
    }

    fn next_token(&mut self, queue: &mut DiagnosticQueue) -> Token {
        match self {
            Lexer::Char(lexer) => lexer.next_token(queue),
            Lexer::Symbol(lexer) => lexer.next_token(queue),
        }
    }
}

/// Lex a whole source, returning every token up to and including `Eof`.
pub fn lex(source: &str, mode: LexMode, queue: &mut DiagnosticQueue) -> Vec<Token> {
    let mut lexer = Lexer::new(source, mode);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token(queue);
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
