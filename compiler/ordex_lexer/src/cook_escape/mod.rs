//! Escape processing for quoted literals and strings.
//!
//! Valid escapes in both quote styles: `\\` `\'` `\"` `\n` `\t` `\r`.

use ordex_diagnostic::DiagnosticQueue;
use ordex_ir::Token;

use crate::lex_error::{error_token, LexError, LexErrorKind};
use crate::raw_scanner::{RawScanner, RawToken};

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        _ => None,
    }
}

/// Unescape quoted content (the text between the quotes).
///
/// On an invalid escape returns the offending character and its
/// character offset within `content`.
pub fn unescape(content: &str) -> Result<String, (char, usize)> {
    if !content.contains('\\') {
        return Ok(content.to_string());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().enumerate();
    while let Some((_, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((i, esc)) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => return Err((esc, i)),
            },
            // The raw scanner never closes a run on a dangling backslash.
            None => return Err(('\\', content.chars().count())),
        }
    }
    Ok(result)
}

/// Cook the content of a `Quoted` or `String` raw token.
///
/// An invalid escape is reported at its own column and yields the `Error`
/// token to hand to the parser instead.
#[allow(
    clippy::cast_possible_truncation,
    reason = "pattern sources are far shorter than u32::MAX characters"
)]
pub(crate) fn cook(
    scanner: &RawScanner<'_>,
    raw: &RawToken,
    queue: &mut DiagnosticQueue,
) -> Result<String, Token> {
    unescape(scanner.content(raw)).map_err(|(esc, offset)| {
        let err = LexError::new(
            LexErrorKind::InvalidEscape(esc),
            raw.line,
            raw.column + 1 + offset as u32,
        );
        error_token(err, scanner.text(raw), queue)
    })
}
