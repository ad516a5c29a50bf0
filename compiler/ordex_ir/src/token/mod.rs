//! Lexer output: token kinds and positioned tokens.

use std::fmt;

/// Closed set of token kinds produced by both lexer flavors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Eof,
    /// A token the lexer could not recognize. The diagnostic has already
    /// been reported when this is produced.
    Error,
    Literal,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Plus,
    Star,
    Optional,
    Wildcard,
    Dash,
    Caret,
    Or,
    String,
    Digit,
    NotDigit,
    Whitespace,
    NotWhitespace,
    Alpha,
    NotAlpha,
    AlphaNumeric,
    NotAlphaNumeric,
    LeftBrace,
    RightBrace,
    Comma,
    Integer,
    Equal,
}

impl TokenKind {
    /// Map a single punctuation character to its token kind.
    pub fn from_punct(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '^' => TokenKind::Caret,
            '-' => TokenKind::Dash,
            '.' => TokenKind::Wildcard,
            '?' => TokenKind::Optional,
            '|' => TokenKind::Or,
            '*' => TokenKind::Star,
            '+' => TokenKind::Plus,
            ',' => TokenKind::Comma,
            '=' => TokenKind::Equal,
            _ => return None,
        };
        Some(kind)
    }

    /// Map a predefined class letter (`d D a A s S w W`) to its token kind.
    pub fn from_class_letter(c: char) -> Option<TokenKind> {
        let kind = match c {
            'd' => TokenKind::Digit,
            'D' => TokenKind::NotDigit,
            'a' => TokenKind::Alpha,
            'A' => TokenKind::NotAlpha,
            's' => TokenKind::Whitespace,
            'S' => TokenKind::NotWhitespace,
            'w' => TokenKind::AlphaNumeric,
            'W' => TokenKind::NotAlphaNumeric,
            _ => return None,
        };
        Some(kind)
    }

    /// Check if this kind is one of the eight predefined classes.
    pub fn is_class(self) -> bool {
        matches!(
            self,
            TokenKind::Digit
                | TokenKind::NotDigit
                | TokenKind::Alpha
                | TokenKind::NotAlpha
                | TokenKind::Whitespace
                | TokenKind::NotWhitespace
                | TokenKind::AlphaNumeric
                | TokenKind::NotAlphaNumeric
        )
    }

    /// Whether a predefined class kind is the negated form.
    pub fn is_negated_class(self) -> bool {
        matches!(
            self,
            TokenKind::NotDigit
                | TokenKind::NotAlpha
                | TokenKind::NotWhitespace
                | TokenKind::NotAlphaNumeric
        )
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of pattern",
            TokenKind::Error => "invalid token",
            TokenKind::Literal => "literal",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::Plus => "`+`",
            TokenKind::Star => "`*`",
            TokenKind::Optional => "`?`",
            TokenKind::Wildcard => "`.`",
            TokenKind::Dash => "`-`",
            TokenKind::Caret => "`^`",
            TokenKind::Or => "`|`",
            TokenKind::String => "string",
            TokenKind::Digit => "class `d`",
            TokenKind::NotDigit => "class `D`",
            TokenKind::Whitespace => "class `s`",
            TokenKind::NotWhitespace => "class `S`",
            TokenKind::Alpha => "class `a`",
            TokenKind::NotAlpha => "class `A`",
            TokenKind::AlphaNumeric => "class `w`",
            TokenKind::NotAlphaNumeric => "class `W`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Integer => "integer",
            TokenKind::Equal => "`=`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A lexed token with its cooked text and 1-based source position.
///
/// For `Literal` and `String` tokens `text` holds the unescaped content;
/// for everything else it is the source slice.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Create an end-of-input token at the given position.
    pub fn eof(line: u32, column: u32) -> Self {
        Token::new(TokenKind::Eof, "", line, column)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
