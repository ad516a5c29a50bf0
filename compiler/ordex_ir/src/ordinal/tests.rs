#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

fn map_of(symbols: &[&str]) -> OrdinalMap {
    let mut map = OrdinalMap::new();
    for s in symbols {
        map.insert(s).unwrap();
    }
    map
}

#[test]
fn ordinals_follow_first_encounter_order() {
    let map = map_of(&["e", "a", "c"]);
    assert_eq!(map.get("e"), Some(Ordinal::new(0)));
    assert_eq!(map.get("a"), Some(Ordinal::new(1)));
    assert_eq!(map.get("c"), Some(Ordinal::new(2)));
    assert_eq!(map.len(), 3);
    assert_eq!(map.width(), 4);
}

#[test]
fn reinsert_is_idempotent() {
    let mut map = map_of(&["x", "y"]);
    assert_eq!(map.insert("x").unwrap(), Ordinal::new(0));
    assert_eq!(map.insert("y").unwrap(), Ordinal::new(1));
    assert_eq!(map.len(), 2);
}

#[test]
fn unknown_is_one_past_the_end() {
    let map = map_of(&["a", "b"]);
    assert_eq!(map.unknown(), Ordinal::new(2));
    assert_eq!(map.lookup("zzz"), Ordinal::new(2));
    assert_eq!(map.lookup("b"), Ordinal::new(1));
}

#[test]
fn range_uses_text_order_not_ordinal_order() {
    // Registered out of order on purpose.
    let map = map_of(&["e", "c", "a", "d", "b"]);
    let texts: Vec<&str> = map
        .range("b", "d")
        .map(|o| map.text(o).unwrap())
        .collect();
    assert_eq!(texts, vec!["b", "c", "d"]);
}

#[test]
fn range_includes_multi_character_symbols_between_bounds() {
    let map = map_of(&["0", "9", "10", "5"]);
    let texts: Vec<&str> = map
        .range("0", "9")
        .map(|o| map.text(o).unwrap())
        .collect();
    assert_eq!(texts, vec!["0", "10", "5", "9"]);
}

#[test]
fn inverted_range_is_empty() {
    let map = map_of(&["a", "b"]);
    assert_eq!(map.range("b", "a").count(), 0);
}

#[test]
fn frozen_map_rejects_new_symbols_only() {
    let mut map = map_of(&["a"]);
    map.freeze();
    assert!(map.is_frozen());
    assert_eq!(map.insert("a").unwrap(), Ordinal::new(0));
    let err = map.insert("b").unwrap_err();
    assert_eq!(err.symbol(), "b");
    assert!(matches!(err, InsertError::Frozen { .. }));
    assert_eq!(map.len(), 1);
}

#[test]
fn exhausted_map_refuses_instead_of_wrapping() {
    let mut map = OrdinalMap {
        unknown: Ordinal::new(u32::MAX),
        ..OrdinalMap::new()
    };
    assert_eq!(
        map.insert("a"),
        Err(InsertError::Full {
            symbol: "a".to_owned()
        })
    );
    assert!(map.is_empty());
    assert_eq!(map.unknown(), Ordinal::new(u32::MAX));
}
