use super::*;
use pretty_assertions::assert_eq;

#[test]
fn codes_per_kind() {
    let cases = [
        (LexErrorKind::Unterminated { quote: '\'' }, ErrorCode::E0001),
        (LexErrorKind::UnrecognizedChar('#'), ErrorCode::E0002),
        (LexErrorKind::EmptyLiteral, ErrorCode::E0003),
        (
            LexErrorKind::MultiCharLiteral {
                text: "ab".to_string(),
            },
            ErrorCode::E0004,
        ),
        (LexErrorKind::InvalidEscape('q'), ErrorCode::E0005),
    ];
    for (kind, code) in cases {
        assert_eq!(LexError::new(kind, 1, 1).code(), code);
    }
}

#[test]
fn diagnostic_carries_position() {
    let diag = LexError::new(LexErrorKind::UnrecognizedChar('#'), 2, 7).into_diagnostic();
    assert_eq!((diag.line, diag.column), (2, 7));
    assert_eq!(diag.message, "unrecognized character '#'");
}
