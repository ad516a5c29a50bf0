//! Alternation, sequence, term and postfix parsing.

mod set;

use ordex_ir::stack::ensure_sufficient_stack;
use ordex_ir::{Expr, SetItem, Token, TokenKind, MAX_ALLOWED_COUNT};
use ordex_lexer::{LexMode, TokenSource};

use crate::classes::class_items;
use crate::{ParseError, ParseErrorKind, Parser};

impl<T: TokenSource> Parser<'_, T> {
    /// `Or := Sequence ('|' Sequence)*`
    pub(crate) fn parse_or(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut branches = vec![self.parse_sequence()?];
            while self.check(TokenKind::Or) {
                self.advance();
                branches.push(self.parse_sequence()?);
            }
            Ok(Expr::alternation(branches))
        })
    }

    /// `Sequence := Term+`, stopping at end of input, `|` or `)`.
    fn parse_sequence(&mut self) -> Result<Expr, ParseError> {
        let mut terms = Vec::new();
        while !matches!(
            self.current_kind(),
            TokenKind::Eof | TokenKind::Or | TokenKind::RightParen
        ) {
            terms.push(self.parse_term()?);
        }
        if terms.is_empty() {
            return Err(self.expected_term());
        }
        Ok(Expr::sequence(terms))
    }

    /// `Term := [ActionPrefix] Subterm [Postfix]`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let (subterm, index) = match self.parse_action_prefix()? {
            ActionPrefix::None(Some(token)) => (self.literal_term(token), None),
            ActionPrefix::None(None) => (self.parse_subterm()?, None),
            ActionPrefix::Index(index) => (self.parse_subterm()?, Some(index)),
        };
        let term = self.parse_postfix(subterm)?;
        Ok(match index {
            Some(index) => Expr::action(term, index),
            None => term,
        })
    }

    /// Parse an optional action prefix.
    ///
    /// In symbol mode a literal or integer is consumed to look for the `=`
    /// after it; when none follows, the consumed token is handed back as the
    /// start of the term.
    fn parse_action_prefix(&mut self) -> Result<ActionPrefix, ParseError> {
        match (self.mode(), self.current_kind()) {
            (LexMode::Char, TokenKind::Equal) => {
                self.advance();
                Ok(ActionPrefix::Index(self.allocate_action(None)))
            }
            (LexMode::Char, TokenKind::Integer) => {
                let token = self.advance();
                if self.check(TokenKind::Equal) {
                    return Err(ParseError::at(
                        ParseErrorKind::InvalidActionPrefix {
                            reason: "char-mode actions are written `=term`",
                        },
                        &token,
                    ));
                }
                Err(ParseError::at(
                    ParseErrorKind::ExpectedTerm {
                        found: TokenKind::Integer,
                    },
                    &token,
                ))
            }
            (LexMode::Symbol, TokenKind::Equal) => {
                let token = self.advance();
                Err(ParseError::at(
                    ParseErrorKind::InvalidActionPrefix {
                        reason: "symbol-mode actions need a name, as in `NAME=term`",
                    },
                    &token,
                ))
            }
            (LexMode::Symbol, TokenKind::Literal | TokenKind::Integer) => {
                let token = self.advance();
                if self.check(TokenKind::Equal) {
                    self.advance();
                    Ok(ActionPrefix::Index(self.allocate_action(Some(token.text))))
                } else {
                    Ok(ActionPrefix::None(Some(token)))
                }
            }
            _ => Ok(ActionPrefix::None(None)),
        }
    }

    /// `Subterm := Literal | '(' Or ')' | '[' Set ']' | '.' | String | Class`
    fn parse_subterm(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::Literal => {
                let token = self.advance();
                Ok(self.literal_term(token))
            }
            TokenKind::Integer if self.mode() == LexMode::Symbol => {
                let token = self.advance();
                Ok(self.literal_term(token))
            }
            TokenKind::LeftParen => {
                let open = self.advance();
                let inner = self.parse_or()?;
                self.expect_close(&open, TokenKind::RightParen, "`)`")?;
                Ok(inner)
            }
            TokenKind::LeftBracket => {
                let open = self.advance();
                self.parse_set(&open)
            }
            TokenKind::Wildcard => {
                self.advance();
                Ok(Expr::Wildcard)
            }
            TokenKind::String => {
                let token = self.advance();
                if token.text.is_empty() {
                    return Err(ParseError::at(ParseErrorKind::EmptyString, &token));
                }
                Ok(Expr::sequence(
                    token.text.chars().map(Expr::literal).collect(),
                ))
            }
            kind if kind.is_class() => {
                self.advance();
                Ok(class_set(kind))
            }
            _ => Err(self.expected_term()),
        }
    }

    /// A literal symbol, or the expansion of a literal set it names.
    fn literal_term(&self, token: Token) -> Expr {
        match self.sets.get(&token.text) {
            Some(members) => Expr::set(false, members.iter().map(SetItem::literal).collect()),
            None => Expr::Literal(token.text),
        }
    }

    /// `Postfix := '+' | '*' | '?' | '{' Integer [',' Integer] '}'`
    fn parse_postfix(&mut self, term: Expr) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::Plus => {
                self.advance();
                Ok(Expr::one_or_more(term))
            }
            TokenKind::Star => {
                self.advance();
                Ok(Expr::zero_or_more(term))
            }
            TokenKind::Optional => {
                self.advance();
                Ok(Expr::optional(term))
            }
            TokenKind::LeftBrace => {
                let open = self.advance();
                let min = self.parse_bound()?;
                let max = if self.check(TokenKind::Comma) {
                    self.advance();
                    self.parse_bound()?
                } else {
                    min
                };
                self.expect_close(&open, TokenKind::RightBrace, "`}`")?;
                check_bounds(min, max, &open)?;
                Ok(Expr::counted(term, min, max))
            }
            _ => Ok(term),
        }
    }

    fn parse_bound(&mut self) -> Result<u32, ParseError> {
        let token = self.expect(TokenKind::Integer, "an integer bound")?;
        token.text.parse::<u32>().map_err(|_| {
            ParseError::at(
                ParseErrorKind::InvalidBounds {
                    reason: format!("{} exceeds the maximum of {MAX_ALLOWED_COUNT}", token.text),
                },
                &token,
            )
        })
    }

    /// Consume the closing delimiter matching `open`.
    ///
    /// Running out of input reports the opening delimiter as unclosed.
    fn expect_close(
        &mut self,
        open: &Token,
        close: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        if self.check(TokenKind::Eof) {
            let eof = self.current();
            return Err(ParseError::at(
                ParseErrorKind::Unclosed {
                    open: open.kind,
                    open_line: open.line,
                    open_column: open.column,
                },
                eof,
            ));
        }
        self.expect(close, expected)
    }

    fn expected_term(&mut self) -> ParseError {
        let token = self.current();
        let kind = if token.is(TokenKind::Error) {
            ParseErrorKind::Lexical
        } else {
            ParseErrorKind::ExpectedTerm { found: token.kind }
        };
        ParseError::at(kind, token)
    }
}

/// Result of looking for an action prefix.
enum ActionPrefix {
    /// A prefix was consumed and allocated this action index.
    Index(u32),
    /// No prefix. Holds a literal consumed while looking for one.
    None(Option<Token>),
}

/// The `Set` a predefined class desugars to.
fn class_set(kind: TokenKind) -> Expr {
    match class_items(kind) {
        Some((negate, items)) => Expr::set(negate, items),
        None => Expr::Wildcard,
    }
}

/// Validate `{min,max}`: `0 <= min <= max <= MAX_ALLOWED_COUNT` and `max > 0`.
fn check_bounds(min: u32, max: u32, open: &Token) -> Result<(), ParseError> {
    let reason = if max == 0 {
        "a repetition must allow at least one occurrence".to_string()
    } else if min > max {
        format!("minimum {min} is greater than maximum {max}")
    } else if max > MAX_ALLOWED_COUNT {
        format!("{max} exceeds the maximum of {MAX_ALLOWED_COUNT}")
    } else {
        return Ok(());
    };
    Err(ParseError::at(ParseErrorKind::InvalidBounds { reason }, open))
}
