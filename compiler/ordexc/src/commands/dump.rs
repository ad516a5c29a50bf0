//! The `dump` command: show how a pattern parses and compiles.

use std::io::Write;

use ordex_diagnostic::DiagnosticQueue;
use ordex_engine::Engine;
use ordex_lexer::LexMode;
use ordex_parse::{parse_pattern, LiteralSets};

use super::CommandError;

/// Print the parsed tree, the action names and the NFA of `pattern`.
pub fn dump(pattern: &str, mode: LexMode, out: &mut impl Write) -> Result<(), CommandError> {
    let mut queue = DiagnosticQueue::new();
    let Some(output) = parse_pattern(pattern, mode, &LiteralSets::new(), &mut queue) else {
        return Err(CommandError::Diagnostics(queue.messages()));
    };

    writeln!(out, "tree: {}", output.expr)?;
    if !output.action_names.is_empty() {
        writeln!(out, "actions: {}", output.action_names.join(", "))?;
    }

    let mut engine = Engine::new();
    if engine.add_pattern(output.expr, &mut queue).is_err() || engine.bind(&mut queue).is_err() {
        return Err(CommandError::Diagnostics(queue.messages()));
    }
    writeln!(out, "ordinals:")?;
    for (text, ordinal) in engine.ordinals().iter() {
        writeln!(out, "  {ordinal} {text:?}")?;
    }
    if let Some((start, end)) = engine.pattern_nodes(0) {
        writeln!(out, "nfa: {start} -> {end}")?;
    }
    write!(out, "{}", engine.nfa())?;
    Ok(())
}
