use super::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_code_position_and_message() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected `)`")
        .at(1, 4);
    assert_eq!(diag.to_string(), "error[E1001] 1:4: unexpected `)`");
}

#[test]
fn renders_without_position_and_with_notes() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("empty range")
        .with_note("`'d'` sorts before `'b'`");
    assert!(!diag.has_position());
    assert_eq!(
        diag.to_string(),
        "error[E2001]: empty range\n  = note: `'d'` sorts before `'b'`"
    );
}

#[test]
fn warnings_are_not_errors() {
    let diag = Diagnostic::warning(ErrorCode::E1001);
    assert!(!diag.is_error());
    assert!(Diagnostic::error(ErrorCode::E1001).is_error());
}
