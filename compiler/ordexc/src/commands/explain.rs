//! The `explain` command: describe an error code.

use std::io::Write;

use super::{parse_code, CommandError};

pub fn explain(code: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let Some(code) = parse_code(code) else {
        return Err(CommandError::UnknownCode(code.to_owned()));
    };
    let phase = if code.is_lexical() {
        "lexical"
    } else if code.is_syntax() {
        "syntax"
    } else if code.is_bind() {
        "bind"
    } else if code.is_config() {
        "configuration"
    } else {
        "internal"
    };
    writeln!(out, "{code} ({phase}): {}", code.description())?;
    Ok(())
}
