//! Desugaring of the predefined classes `d a s w` and their negations.

use ordex_ir::{SetItem, TokenKind};

/// The six whitespace symbols matched by `s`.
pub const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}'];

/// Items of a predefined class and whether the class is negated.
///
/// Returns `None` for token kinds that are not classes.
pub fn class_items(kind: TokenKind) -> Option<(bool, Vec<SetItem>)> {
    let lower = || SetItem::range("a", "z");
    let upper = || SetItem::range("A", "Z");
    let digits = || SetItem::range("0", "9");

    let items = match kind {
        TokenKind::Digit | TokenKind::NotDigit => vec![digits()],
        TokenKind::Alpha | TokenKind::NotAlpha => vec![lower(), upper()],
        TokenKind::Whitespace | TokenKind::NotWhitespace => WHITESPACE
            .iter()
            .map(|c| SetItem::Literal(c.to_string()))
            .collect(),
        TokenKind::AlphaNumeric | TokenKind::NotAlphaNumeric => {
            vec![lower(), upper(), digits()]
        }
        _ => return None,
    };
    Some((kind.is_negated_class(), items))
}

#[cfg(test)]
mod tests;
