#![allow(clippy::unwrap_used)]

use super::*;
use ordex_engine::MatchMode;
use pretty_assertions::assert_eq;

fn entries(patterns: &[&str]) -> Vec<PatternEntry> {
    patterns.iter().map(|p| PatternEntry::new(*p)).collect()
}

#[test]
fn compiles_in_order() {
    let compiled = compile(
        &entries(&["FIRST=x SECOND=y", "z"]),
        LexMode::Symbol,
        &LiteralSets::new(),
        false,
    )
    .unwrap();
    assert_eq!(compiled.action_counts, vec![2, 0]);
    assert_eq!(
        compiled.action_names,
        vec![vec!["FIRST".to_owned(), "SECOND".to_owned()], vec![]]
    );
    assert_eq!(compiled.engine.pattern_count(), 2);
}

#[test]
fn parse_failure_names_the_pattern() {
    let err = compile(
        &entries(&["'a'", "'b'{0}"]),
        LexMode::Char,
        &LiteralSets::new(),
        false,
    )
    .unwrap_err();
    match err {
        ConfigError::Pattern {
            index,
            code,
            messages,
            ..
        } => {
            assert_eq!(index, 1);
            assert_eq!(code, ErrorCode::E1004);
            assert_eq!(messages.len(), 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bind_failure_is_reported() {
    let err = compile(
        &entries(&["['d'-'b']"]),
        LexMode::Char,
        &LiteralSets::new(),
        false,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2001);
}

#[test]
fn byte_alphabet_is_registered_first() {
    let compiled = compile(&entries(&["'z'"]), LexMode::Char, &LiteralSets::new(), true).unwrap();
    assert_eq!(compiled.engine.symbol_ordinal("z").raw(), u32::from(b'z'));
    assert!(compiled.engine.match_chars("z", MatchMode::Exact).is_some());
}

#[test]
fn duplicate_literal_sets_are_rejected() {
    let defs = vec![
        SymbolSet {
            name: "V".to_owned(),
            symbol_set: vec!["a".to_owned()],
        },
        SymbolSet {
            name: "V".to_owned(),
            symbol_set: vec!["e".to_owned()],
        },
    ];
    assert!(matches!(literal_sets(&defs), Err(ConfigError::DuplicateSet(name)) if name == "V"));
}
