//! End-to-end scenarios: tokenizer, symbolizer and pattern matcher chained
//! together the way a record classifier uses them.

#![allow(clippy::unwrap_used)]

use ordex_classify::{
    PatternEntry, PatternMatcher, PatternMatcherConfig, Symbolizer, Tokenizer,
};
use ordex_diagnostic::DiagnosticQueue;
use ordex_engine::{ActionResult, Engine, MatchMode};
use ordex_lexer::LexMode;
use ordex_parse::{parse_pattern, LiteralSets};
use pretty_assertions::assert_eq;

#[test]
fn number_and_word_actions_over_byte_alphabet() {
    let mut queue = DiagnosticQueue::new();
    let sets = LiteralSets::new();
    let mut engine = Engine::new();
    engine.register_byte_alphabet().unwrap();

    let mut names = Vec::new();
    for source in ["NUM=d+", "WORD=a+"] {
        let output = parse_pattern(source, LexMode::Symbol, &sets, &mut queue).unwrap();
        names.push(output.action_names);
        engine.add_pattern(output.expr, &mut queue).unwrap();
    }
    engine.bind(&mut queue).unwrap();

    let found = engine.match_chars("42", MatchMode::Exact).unwrap();
    assert_eq!(found.pattern, 0);
    assert_eq!(
        found.actions,
        vec![ActionResult {
            sub_expr: 0,
            enter: 0,
            exit: 2
        }]
    );
    assert_eq!(names[found.pattern][0], "NUM");

    let found = engine.match_chars("abc", MatchMode::Exact).unwrap();
    assert_eq!(found.pattern, 1);
    assert_eq!(
        found.actions,
        vec![ActionResult {
            sub_expr: 0,
            enter: 0,
            exit: 3
        }]
    );
    assert_eq!(names[found.pattern][0], "WORD");
}

#[test]
fn pattern_matcher_classifies_characters() {
    let config = PatternMatcherConfig {
        patterns: vec![PatternEntry::new("NUM=d+"), PatternEntry::new("WORD=a+")],
        byte_alphabet: true,
        ..PatternMatcherConfig::default()
    };
    let matcher = PatternMatcher::new(&config).unwrap();
    let found = matcher.process(&["4", "2"]).unwrap();
    assert_eq!((found.pattern, found.classes), (0, vec!["NUM".to_owned(), "NUM".to_owned()]));
    let found = matcher.process(&["a", "b", "c"]).unwrap();
    assert_eq!(found.pattern, 1);
}

const TOKENIZER: &str = r#"{
    "FRAMING": ",",
    "PATTERNS": [{ "PATTERN": "=d+ =(a a+)" }],
    "NOSPLIT": [{ "PATTERN": "d+ ('S' 'T' | 'N' 'D' | 'R' 'D' | 'T' 'H')" }]
}"#;

const SYMBOLIZER: &str = r#"{
    "PATTERNS": [
        { "PATTERN": "d+ ('S' 'T' | 'N' 'D' | 'R' 'D' | 'T' 'H')", "SYMBOL": "ORDINAL" },
        { "PATTERN": "d+", "SYMBOL": "NUM" },
        { "PATTERN": "\"ST\" | \"AVE\" | \"RD\"", "SYMBOL": "TYPE" },
        { "PATTERN": "','", "SYMBOL": "COMMA" }
    ],
    "DEFAULT": "NAME"
}"#;

const MATCHER: &str = r#"{
    "PATTERNS": [
        { "PATTERN": "HOUSE=NUM STREET=((ORDINAL | NAME)+) TYPE COMMA? UNIT=(NUM | UNIT_TYPE NUM)?" },
        { "PATTERN": "HOUSE=NUM STREET=((ORDINAL | NAME)+)" }
    ],
    "SYMBOL_SETS": [{ "NAME": "UNIT_TYPE", "SYMBOL_SET": ["APT", "STE"] }],
    "DEFAULT": "OTHER"
}"#;

#[test]
fn address_pipeline() {
    let tokenizer = Tokenizer::from_json(TOKENIZER).unwrap();
    let symbolizer = Symbolizer::from_json(SYMBOLIZER).unwrap();
    let matcher = PatternMatcher::from_json(MATCHER).unwrap();

    let tokens = tokenizer.tokenize("100MAIN 3RD ST, 4");
    assert_eq!(tokens, vec!["100", "MAIN", "3RD", "ST", ",", "4"]);

    let symbols = symbolizer.symbolize_all(&tokens);
    assert_eq!(symbols, vec!["NUM", "NAME", "ORDINAL", "TYPE", "COMMA", "NUM"]);

    let found = matcher.process(&symbols).unwrap();
    assert_eq!(found.pattern, 0);
    assert_eq!(
        found.classes,
        vec!["HOUSE", "STREET", "STREET", "OTHER", "OTHER", "UNIT"]
    );
}

#[test]
fn ambiguous_tokens_go_through_multi_process() {
    let symbolizer = Symbolizer::from_json(SYMBOLIZER).unwrap();
    let matcher = PatternMatcher::from_json(MATCHER).unwrap();

    // `RD` is both a street type and, by default, a name.
    let tokens = ["12", "RD"];
    let candidates: Vec<Vec<String>> = tokens
        .iter()
        .map(|token| {
            let mut options = symbolizer.candidates(token);
            options.push("NAME".to_owned());
            options
        })
        .collect();
    let found = matcher.multi_process(&candidates).unwrap();
    assert_eq!(found.pattern, 1);
    assert_eq!(found.classes, vec!["HOUSE", "STREET"]);
}
