//! Lexer errors and their conversion into diagnostics.

use ordex_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use ordex_ir::{Token, TokenKind};

/// A lexer error at a 1-based source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
}

/// What went wrong while lexing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing quote.
    Unterminated { quote: char },
    /// A character that starts no token in the current mode.
    UnrecognizedChar(char),
    /// `''` with nothing between the quotes.
    EmptyLiteral,
    /// Char-mode quoted literal with more than one character.
    MultiCharLiteral { text: String },
    /// Backslash followed by a character with no escape meaning.
    InvalidEscape(char),
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        LexError { kind, line, column }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::Unterminated { .. } => ErrorCode::E0001,
            LexErrorKind::UnrecognizedChar(_) => ErrorCode::E0002,
            LexErrorKind::EmptyLiteral => ErrorCode::E0003,
            LexErrorKind::MultiCharLiteral { .. } => ErrorCode::E0004,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0005,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).at(self.line, self.column);
        match self.kind {
            LexErrorKind::Unterminated { quote } => diag
                .with_message(format!("unterminated literal, missing closing {quote}")),
            LexErrorKind::UnrecognizedChar(c) => {
                diag.with_message(format!("unrecognized character {c:?}"))
            }
            LexErrorKind::EmptyLiteral => diag
                .with_message("empty quoted literal")
                .with_note("a literal must hold at least one character"),
            LexErrorKind::MultiCharLiteral { text } => diag
                .with_message(format!("literal '{text}' holds more than one character"))
                .with_note("use a string \"...\" to match a sequence of characters"),
            LexErrorKind::InvalidEscape(c) => diag
                .with_message(format!("invalid escape sequence \\{c}"))
                .with_note("valid escapes are \\\\ \\' \\\" \\n \\t \\r"),
        }
    }
}

/// Report `err` and produce the `Error` token that stands in its place.
pub(crate) fn error_token(err: LexError, text: &str, queue: &mut DiagnosticQueue) -> Token {
    let token = Token::new(TokenKind::Error, text, err.line, err.column);
    queue.add(err.into_diagnostic());
    token
}

#[cfg(test)]
mod tests;
