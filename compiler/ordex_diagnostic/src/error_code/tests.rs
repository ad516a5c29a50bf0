use super::*;
use std::collections::HashSet;

#[test]
fn codes_are_unique() {
    let strs: HashSet<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    assert_eq!(strs.len(), ErrorCode::ALL.len());
}

#[test]
fn every_code_belongs_to_one_phase() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_lexical(),
            code.is_syntax(),
            code.is_bind(),
            code.is_config(),
        ];
        let count = phases.iter().filter(|&&p| p).count();
        if *code == ErrorCode::E9001 {
            assert_eq!(count, 0);
        } else {
            assert_eq!(count, 1, "{code} should be in exactly one phase");
        }
    }
}

#[test]
fn every_code_has_a_description() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty());
    }
}

#[test]
fn display_matches_as_str() {
    assert_eq!(ErrorCode::E1004.to_string(), "E1004");
}
