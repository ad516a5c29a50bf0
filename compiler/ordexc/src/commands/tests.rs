#![allow(clippy::unwrap_used)]

use super::*;
use ordex_engine::MatchMode;
use ordex_lexer::LexMode;
use pretty_assertions::assert_eq;

fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), CommandError>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn dump_shows_tree_and_nfa() {
    let text = output(|out| dump("'a' ='b'+", LexMode::Char, out));
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("tree: 'a' 0=('b'+)"));
    assert_eq!(lines.next(), Some("ordinals:"));
    assert_eq!(lines.next(), Some("  #0 \"a\""));
    assert_eq!(lines.next(), Some("  #1 \"b\""));
    assert_eq!(lines.next(), Some("nfa: n0 -> n1"));
    assert!(text.contains("+0"));
}

#[test]
fn dump_reports_diagnostics() {
    let err = dump("'a'{0}", LexMode::Char, &mut Vec::new()).unwrap_err();
    assert!(err.report().contains("E1004"));
}

#[test]
fn match_prints_action_spans() {
    let options = MatchOptions {
        mode: LexMode::Symbol,
        match_mode: MatchMode::Exact,
    };
    let text = output(|out| {
        run_match(&["HOUSE=NUM STREET=NAME+"], "NUM NAME NAME", options, out)
    });
    assert_eq!(
        text,
        "pattern 0 matched 3 of 3 symbols\n  HOUSE [0, 1) \"NUM\"\n  STREET [1, 3) \"NAME NAME\"\n"
    );
}

#[test]
fn char_match_labels_actions_by_index() {
    let text = output(|out| run_match(&["=d+ =a+"], "12th", MatchOptions::default(), out));
    assert_eq!(
        text,
        "pattern 0 matched 4 of 4 symbols\n  0 [0, 2) \"12\"\n  1 [2, 4) \"th\"\n"
    );
}

#[test]
fn char_match_covers_the_whole_class_range() {
    let text = output(|out| run_match(&["d+"], "5381", MatchOptions::default(), out));
    assert_eq!(text, "pattern 0 matched 4 of 4 symbols\n");
}

#[test]
fn no_match_is_not_an_error() {
    let text = output(|out| run_match(&["'a'"], "b", MatchOptions::default(), out));
    assert_eq!(text, "no match\n");
}

#[test]
fn explain_known_and_unknown_codes() {
    let text = output(|out| explain("e1004", out));
    assert_eq!(text, "E1004 (syntax): invalid repetition bounds\n");
    assert!(matches!(
        explain("E7777", &mut Vec::new()),
        Err(CommandError::UnknownCode(_))
    ));
}

#[test]
fn lines_are_processed_in_order() {
    let mut input = "a b\nc\n".as_bytes();
    let text = output(|out| for_each_line(&mut input, out, str::to_uppercase));
    assert_eq!(text, "A B\nC\n");
}

#[test]
fn missing_config_file() {
    let err = tokenize("/nonexistent/ordex.json", &mut "".as_bytes(), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CommandError::Read { .. }));
}
