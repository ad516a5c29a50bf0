#![allow(clippy::unwrap_used)]

use super::*;
use crate::PatternEntry;
use pretty_assertions::assert_eq;

fn symbolizer(default: Option<&str>) -> Symbolizer {
    let config = SymbolizerConfig {
        patterns: vec![
            PatternEntry::new("d+ \"RD\"").with_symbol("ORDINAL"),
            PatternEntry::new("d+").with_symbol("NUM"),
            PatternEntry::new("d w*").with_symbol("ALNUM"),
        ],
        default: default.map(str::to_owned),
        symbol_sets: Vec::new(),
    };
    Symbolizer::new(&config).unwrap()
}

#[test]
fn first_matching_pattern_wins() {
    let s = symbolizer(None);
    assert_eq!(s.symbolize("3RD"), "ORDINAL");
    assert_eq!(s.symbolize("42"), "NUM");
    assert_eq!(s.symbolize("4B"), "ALNUM");
}

#[test]
fn unmatched_tokens_use_default_or_themselves() {
    assert_eq!(symbolizer(None).symbolize("MAIN"), "MAIN");
    assert_eq!(symbolizer(Some("WORD")).symbolize("MAIN"), "WORD");
}

#[test]
fn candidates_list_every_reading() {
    let s = symbolizer(None);
    assert_eq!(s.candidates("3RD"), vec!["ORDINAL", "ALNUM", "3RD"]);
    assert_eq!(s.candidates("7"), vec!["NUM", "ALNUM", "7"]);
    assert_eq!(s.candidates("ST"), vec!["ST"]);
}

#[test]
fn symbolize_all_maps_each_token() {
    let s = symbolizer(Some("WORD"));
    assert_eq!(
        s.symbolize_all(&["12", "MAIN", "ST"]),
        vec!["NUM", "WORD", "WORD"]
    );
}

#[test]
fn every_pattern_needs_a_symbol() {
    let config = SymbolizerConfig {
        patterns: vec![PatternEntry::new("d+")],
        ..SymbolizerConfig::default()
    };
    assert!(matches!(
        Symbolizer::new(&config),
        Err(ConfigError::MissingSymbol { index: 0 })
    ));
}

#[test]
fn classes_cover_symbols_inside_their_ranges() {
    let s = Symbolizer::from_json(
        r#"{ "PATTERNS": [{ "PATTERN": "d+", "SYMBOL": "NUM" }], "DEFAULT": "OTHER" }"#,
    )
    .unwrap();
    for token in ["0", "9", "5", "42", "09", "371"] {
        assert_eq!(s.symbolize(token), "NUM", "{token}");
    }
    assert_eq!(s.symbolize("4x"), "OTHER");
}
