//! Parse error types.
//!
//! Every variant maps to one `E1xxx` code. `Lexical` marks an abort caused
//! by an `Error` token whose diagnostic the lexer already queued.

use ordex_diagnostic::{Diagnostic, ErrorCode};
use ordex_ir::{Token, TokenKind};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
    },
    ExpectedTerm {
        found: TokenKind,
    },
    EmptyString,
    Unclosed {
        open: TokenKind,
        open_line: u32,
        open_column: u32,
    },
    InvalidBounds {
        reason: String,
    },
    InvalidActionPrefix {
        reason: &'static str,
    },
    InvalidSetMember {
        reason: String,
    },
    Lexical,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: u32, column: u32) -> Self {
        ParseError { kind, line, column }
    }

    /// Build an error positioned at `token`.
    pub fn at(kind: ParseErrorKind, token: &Token) -> Self {
        ParseError::new(kind, token.line, token.column)
    }

    pub fn code(&self) -> Option<ErrorCode> {
        let code = match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedTerm { .. } | ParseErrorKind::EmptyString => ErrorCode::E1002,
            ParseErrorKind::Unclosed { .. } => ErrorCode::E1003,
            ParseErrorKind::InvalidBounds { .. } => ErrorCode::E1004,
            ParseErrorKind::InvalidActionPrefix { .. } => ErrorCode::E1005,
            ParseErrorKind::InvalidSetMember { .. } => ErrorCode::E1006,
            ParseErrorKind::Lexical => return None,
        };
        Some(code)
    }

    /// Convert to a diagnostic, or `None` when the lexer already reported it.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        let code = self.code()?;
        let diag = Diagnostic::error(code).at(self.line, self.column);
        let diag = match &self.kind {
            ParseErrorKind::UnexpectedToken { found, expected } => {
                diag.with_message(format!("unexpected {found}, expected {expected}"))
            }
            ParseErrorKind::ExpectedTerm { found } => {
                diag.with_message(format!("expected a term, found {found}"))
            }
            ParseErrorKind::EmptyString => diag
                .with_message("empty string")
                .with_note("a string must hold at least one character"),
            ParseErrorKind::Unclosed {
                open,
                open_line,
                open_column,
            } => diag
                .with_message(format!("unclosed {open}"))
                .with_note(format!("opened at {open_line}:{open_column}")),
            ParseErrorKind::InvalidBounds { reason } => {
                diag.with_message(format!("invalid repetition bounds: {reason}"))
            }
            ParseErrorKind::InvalidActionPrefix { reason } => {
                diag.with_message(format!("invalid action prefix: {reason}"))
            }
            ParseErrorKind::InvalidSetMember { reason } => {
                diag.with_message(format!("invalid set member: {reason}"))
            }
            ParseErrorKind::Lexical => return None,
        };
        Some(diag)
    }
}
