#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn digit_is_a_single_range() {
    assert_eq!(
        class_items(TokenKind::Digit),
        Some((false, vec![SetItem::range("0", "9")]))
    );
}

#[test]
fn negated_forms_share_items() {
    let (neg, items) = class_items(TokenKind::NotAlphaNumeric).unwrap();
    assert!(neg);
    assert_eq!(items, class_items(TokenKind::AlphaNumeric).unwrap().1);
}

#[test]
fn whitespace_has_six_members() {
    let (_, items) = class_items(TokenKind::Whitespace).unwrap();
    assert_eq!(items.len(), 6);
}

#[test]
fn non_class_is_none() {
    assert_eq!(class_items(TokenKind::Plus), None);
}
