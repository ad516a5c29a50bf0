//! Character cursor over a pattern source.
//!
//! Tracks the byte offset used for slicing alongside the 1-based
//! line/column reported in diagnostics. Columns count characters, not bytes.

/// Forward-only cursor over `&str` source text.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consume and return the current character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advance while `pred` holds for the current character.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text between two byte offsets previously returned by [`pos`](Self::pos).
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }
}
