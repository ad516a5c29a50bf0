//! Recursive descent parser for ordex patterns.
//!
//! Grammar:
//!
//! ```text
//! Or        := Sequence ('|' Sequence)*
//! Sequence  := Term+                       // stops at EOF, '|', ')'
//! Term      := [ActionPrefix] Subterm [Postfix]
//! Postfix   := '+' | '*' | '?' | '{' Integer [',' Integer] '}'
//! Subterm   := Literal | '(' Or ')' | '[' Set ']' | '.' | String | Class
//! Set       := ['^'] SetMember+
//! ```
//!
//! The action prefix is `=` in char mode and `NAME=` in symbol mode. Every
//! error is reported to the [`DiagnosticQueue`] and aborts the parse.

mod classes;
mod error;
mod grammar;
mod literal_sets;

pub use classes::{class_items, WHITESPACE};
pub use error::{ParseError, ParseErrorKind};
pub use literal_sets::LiteralSets;

use ordex_diagnostic::DiagnosticQueue;
use ordex_ir::{Expr, Token, TokenKind};
use ordex_lexer::{LexMode, Lexer, TokenSource};
use tracing::debug;

/// A parsed pattern and the action names declared in it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOutput {
    pub expr: Expr,
    /// Symbol-mode action names, indexed by action index. Empty in char mode.
    pub action_names: Vec<String>,
}

/// Parser state.
///
/// Holds one token of lookahead. Consumes its token source to completion or
/// to the first error.
pub struct Parser<'a, T: TokenSource> {
    lexer: T,
    sets: &'a LiteralSets,
    queue: &'a mut DiagnosticQueue,
    peeked: Option<Token>,
    action_names: Vec<String>,
    next_action: u32,
}

impl<'a, T: TokenSource> Parser<'a, T> {
    pub fn new(lexer: T, sets: &'a LiteralSets, queue: &'a mut DiagnosticQueue) -> Self {
        Parser {
            lexer,
            sets,
            queue,
            peeked: None,
            action_names: Vec::new(),
            next_action: 0,
        }
    }

    /// Parse a whole pattern.
    ///
    /// Returns `None` after reporting the first error.
    pub fn parse(mut self) -> Option<ParseOutput> {
        let mode = self.mode();
        debug!(%mode, "parse start");
        let result = self.parse_or().and_then(|expr| {
            let token = self.current();
            if token.is(TokenKind::Eof) {
                Ok(expr)
            } else {
                Err(self.unexpected("end of pattern"))
            }
        });

        match result {
            Ok(expr) => {
                debug!(actions = self.next_action, "parse finished: {expr}");
                Some(ParseOutput {
                    expr,
                    action_names: self.action_names,
                })
            }
            Err(err) => {
                debug!(kind = ?err.kind, "parse failed");
                if let Some(diag) = err.to_diagnostic() {
                    self.queue.add(diag);
                }
                None
            }
        }
    }

    // ─── Token Navigation ─────────────────────────────────────────

    #[inline]
    fn mode(&self) -> LexMode {
        self.lexer.mode()
    }

    /// The lookahead token, lexing it if needed.
    fn current(&mut self) -> &Token {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token(self.queue),
        };
        self.peeked.insert(token)
    }

    #[inline]
    fn current_kind(&mut self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    fn check(&mut self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume and return the lookahead token.
    fn advance(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token(self.queue),
        }
    }

    /// Consume a token of `kind` or fail with an unexpected-token error.
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Error for the lookahead token. An `Error` token becomes `Lexical`.
    fn unexpected(&mut self, expected: &'static str) -> ParseError {
        let token = self.current();
        let kind = if token.is(TokenKind::Error) {
            ParseErrorKind::Lexical
        } else {
            ParseErrorKind::UnexpectedToken {
                found: token.kind,
                expected,
            }
        };
        ParseError::at(kind, token)
    }

    fn allocate_action(&mut self, name: Option<String>) -> u32 {
        let index = self.next_action;
        self.next_action += 1;
        if let Some(name) = name {
            self.action_names.push(name);
        }
        index
    }
}

/// Parse `source` in the given mode.
///
/// Named literal sets in `sets` are expanded where the pattern refers to them.
pub fn parse_pattern(
    source: &str,
    mode: LexMode,
    sets: &LiteralSets,
    queue: &mut DiagnosticQueue,
) -> Option<ParseOutput> {
    Parser::new(Lexer::new(source, mode), sets, queue).parse()
}
