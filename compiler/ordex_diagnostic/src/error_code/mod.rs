//! Error codes for all pattern-compiler diagnostics.
//!
//! Each code is a unique identifier (e.g. `E1001`) whose first digit names
//! the phase that produced it.

use std::fmt;

/// Error codes for all pattern-compiler diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexical errors
/// - E1xxx: Syntax errors
/// - E2xxx: Bind / engine errors
/// - E3xxx: Configuration errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Unterminated quoted literal or string
    E0001,
    /// Unrecognized character
    E0002,
    /// Empty quoted literal
    E0003,
    /// Char-mode literal holds more than one character
    E0004,
    /// Invalid escape sequence
    E0005,

    // Syntax Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected a term
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Invalid repetition bounds
    E1004,
    /// Invalid action prefix
    E1005,
    /// Invalid set member
    E1006,

    // Bind Errors (E2xxx)
    /// Literal range whose high bound does not exceed its low bound
    E2001,
    /// Symbol was never registered
    E2002,
    /// Duplicate literal set name
    E2003,
    /// Pattern added after the engine was bound
    E2004,
    /// No ordinal left for a new symbol
    E2005,

    // Configuration Errors (E3xxx)
    /// Malformed configuration
    E3001,
    /// Class list does not cover every action of its pattern
    E3002,

    // Internal Errors (E9xxx)
    /// Too many errors
    E9001,
}

impl ErrorCode {
    /// All error codes, in declaration order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E9001,
    ];

    /// Get the string representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description, used by `--explain` style output.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated quoted literal or string",
            ErrorCode::E0002 => "unrecognized character",
            ErrorCode::E0003 => "empty quoted literal",
            ErrorCode::E0004 => "char-mode literal holds more than one character",
            ErrorCode::E0005 => "invalid escape sequence",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected a term",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "invalid repetition bounds",
            ErrorCode::E1005 => "invalid action prefix",
            ErrorCode::E1006 => "invalid set member",
            ErrorCode::E2001 => "literal range high bound must exceed its low bound",
            ErrorCode::E2002 => "symbol was never registered",
            ErrorCode::E2003 => "duplicate literal set name",
            ErrorCode::E2004 => "pattern added after the engine was bound",
            ErrorCode::E2005 => "symbol alphabet exhausted",
            ErrorCode::E3001 => "malformed configuration",
            ErrorCode::E3002 => "class list does not cover every action",
            ErrorCode::E9001 => "too many errors",
        }
    }

    /// Check if this is a lexical error (E0xxx range).
    pub fn is_lexical(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a syntax error (E1xxx range).
    pub fn is_syntax(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a bind error (E2xxx range).
    pub fn is_bind(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a configuration error (E3xxx range).
    pub fn is_config(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
