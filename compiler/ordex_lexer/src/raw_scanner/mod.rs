//! Mode-independent raw scanner.
//!
//! Produces `(tag, span)` pairs without interpreting words or cooking quoted
//! content. Both lexer flavors sit on top of this and decide what a word or a
//! quoted run means in their mode.

use ordex_ir::TokenKind;

use crate::cursor::Cursor;

/// Classification of a raw token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawTag {
    /// Single punctuation character.
    Punct(TokenKind),
    /// Run of ASCII digits.
    Integer,
    /// Run of alphanumeric or `_` characters that is not all digits.
    Word,
    /// `'...'` run, closing quote included.
    Quoted,
    /// `"..."` run, closing quote included.
    String,
    /// Quoted run cut off by a newline or end of input.
    Unterminated,
    /// Character that starts no token.
    Invalid,
    Eof,
}

/// A raw token: tag plus byte span and start position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl RawToken {
    /// Byte span of the content between the quotes of a `Quoted` or `String` token.
    pub fn quoted_content(&self) -> (usize, usize) {
        (self.start + 1, self.end.saturating_sub(1).max(self.start + 1))
    }
}

#[inline]
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Raw scanner over a pattern source.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        RawScanner {
            cursor: Cursor::new(source),
        }
    }

    /// Source text of a token.
    pub fn text(&self, token: &RawToken) -> &'a str {
        self.cursor.slice(token.start, token.end)
    }

    /// Source text between the quotes of a quoted token.
    pub fn content(&self, token: &RawToken) -> &'a str {
        let (start, end) = token.quoted_content();
        self.cursor.slice(start, end)
    }

    /// Scan the next raw token, skipping leading whitespace.
    pub fn next_token(&mut self) -> RawToken {
        self.cursor.eat_while(char::is_whitespace);

        let start = self.cursor.pos();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let tag = match self.cursor.current() {
            None => RawTag::Eof,
            Some(quote @ ('\'' | '"')) => self.quoted(quote),
            Some(c) => {
                if let Some(kind) = TokenKind::from_punct(c) {
                    self.cursor.advance();
                    RawTag::Punct(kind)
                } else if is_word_char(c) {
                    self.word(start)
                } else {
                    self.cursor.advance();
                    RawTag::Invalid
                }
            }
        };

        RawToken {
            tag,
            start,
            end: self.cursor.pos(),
            line,
            column,
        }
    }

    // ─── Words & Integers ─────────────────────────────────────────

    fn word(&mut self, start: usize) -> RawTag {
        self.cursor.eat_while(is_word_char);
        let text = self.cursor.slice(start, self.cursor.pos());
        if text.bytes().all(|b| b.is_ascii_digit()) {
            RawTag::Integer
        } else {
            RawTag::Word
        }
    }

    // ─── Quoted Runs ──────────────────────────────────────────────

    fn quoted(&mut self, quote: char) -> RawTag {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.current() {
                None | Some('\n') => return RawTag::Unterminated,
                Some('\\') => {
                    self.cursor.advance();
                    if self.cursor.current().is_none() {
                        return RawTag::Unterminated;
                    }
                    self.cursor.advance();
                }
                Some(c) if c == quote => {
                    self.cursor.advance();
                    return if quote == '"' {
                        RawTag::String
                    } else {
                        RawTag::Quoted
                    };
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
