//! `[...]` set parsing.

use ordex_ir::{Expr, SetItem, Token, TokenKind};
use ordex_lexer::{LexMode, TokenSource};

use crate::classes::class_items;
use crate::{ParseError, ParseErrorKind, Parser};

impl<T: TokenSource> Parser<'_, T> {
    /// `Set := ['^'] SetMember+ ']'`, with the `[` already consumed.
    ///
    /// A member is a literal, a `low-high` range, a predefined class or the
    /// name of a literal set. Classes and named sets are merged in.
    pub(crate) fn parse_set(&mut self, open: &Token) -> Result<Expr, ParseError> {
        let negate = if self.check(TokenKind::Caret) {
            self.advance();
            true
        } else {
            false
        };

        let mut items: Vec<SetItem> = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::RightBracket => {
                    let close = self.advance();
                    if items.is_empty() {
                        return Err(set_error("a set needs at least one member", &close));
                    }
                    return Ok(Expr::set(negate, items));
                }
                TokenKind::Eof => {
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
                TokenKind::Error => return Err(self.unexpected("a set member")),
                _ => self.parse_set_member(&mut items)?,
            }
        }
    }

    fn parse_set_member(&mut self, items: &mut Vec<SetItem>) -> Result<(), ParseError> {
        let token = self.advance();
        match token.kind {
            kind if kind.is_class() => match class_items(kind) {
                Some((false, class)) => items.extend(class),
                _ => {
                    return Err(set_error(
                        &format!("negated {kind} cannot appear inside a set"),
                        &token,
                    ))
                }
            },
            TokenKind::String => items.extend(token.text.chars().map(SetItem::literal)),
            TokenKind::Literal | TokenKind::Integer if self.is_symbol_text(&token) => {
                if self.check(TokenKind::Dash) {
                    self.advance();
                    let high = self.advance();
                    if high.is(TokenKind::Error) {
                        return Err(ParseError::at(ParseErrorKind::Lexical, &high));
                    }
                    if !self.is_symbol_text(&high) {
                        return Err(set_error(
                            &format!("expected the upper bound of a range, found {}", high.kind),
                            &high,
                        ));
                    }
                    items.push(SetItem::range(token.text, high.text));
                } else if let Some(members) = self.sets.get(&token.text) {
                    items.extend(members.iter().map(SetItem::literal));
                } else {
                    items.push(SetItem::Literal(token.text));
                }
            }
            kind => {
                return Err(set_error(&format!("{kind} is not a set member"), &token));
            }
        }
        Ok(())
    }

    /// Whether `token` names a symbol in the current mode.
    fn is_symbol_text(&self, token: &Token) -> bool {
        match token.kind {
            TokenKind::Literal => true,
            TokenKind::Integer => self.mode() == LexMode::Symbol,
            _ => false,
        }
    }
}

fn set_error(reason: &str, token: &Token) -> ParseError {
    ParseError::at(
        ParseErrorKind::InvalidSetMember {
            reason: reason.to_owned(),
        },
        token,
    )
}
