//! The `match` command: run patterns against one input.

use std::io::Write;

use ordex_diagnostic::DiagnosticQueue;
use ordex_engine::{Engine, EngineMatch, MatchMode};
use ordex_lexer::LexMode;
use ordex_parse::{parse_pattern, LiteralSets};

use super::CommandError;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchOptions {
    pub mode: LexMode,
    pub match_mode: MatchMode,
}

/// Compile `patterns` into one engine and match `input`.
///
/// Char-mode input is matched character by character over the byte
/// alphabet; symbol-mode input is split on whitespace.
pub fn run_match<S: AsRef<str>>(
    patterns: &[S],
    input: &str,
    options: MatchOptions,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let mut queue = DiagnosticQueue::new();
    let sets = LiteralSets::new();
    let mut engine = Engine::new();
    if options.mode == LexMode::Char {
        engine
            .register_byte_alphabet()
            .map_err(|err| CommandError::Diagnostics(vec![err.to_string()]))?;
    }
    let mut names = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let Some(output) = parse_pattern(pattern.as_ref(), options.mode, &sets, &mut queue) else {
            return Err(CommandError::Diagnostics(queue.messages()));
        };
        names.push(output.action_names);
        if engine.add_pattern(output.expr, &mut queue).is_err() {
            return Err(CommandError::Diagnostics(queue.messages()));
        }
    }
    if engine.bind(&mut queue).is_err() {
        return Err(CommandError::Diagnostics(queue.messages()));
    }

    let (found, units): (Option<EngineMatch>, Vec<String>) = match options.mode {
        LexMode::Char => (
            engine.match_chars(input, options.match_mode),
            input.chars().map(String::from).collect(),
        ),
        LexMode::Symbol => {
            let symbols: Vec<String> = input.split_whitespace().map(str::to_owned).collect();
            (engine.match_symbols(&symbols, options.match_mode), symbols)
        }
    };

    let Some(found) = found else {
        writeln!(out, "no match")?;
        return Ok(());
    };
    writeln!(out, "pattern {} matched {} of {} symbols", found.pattern, found.end, units.len())?;
    let joiner = if options.mode == LexMode::Char { "" } else { " " };
    for action in &found.actions {
        let label = names[found.pattern]
            .get(action.sub_expr as usize)
            .map_or_else(|| action.sub_expr.to_string(), Clone::clone);
        let text = units[action.enter..action.exit].join(joiner);
        writeln!(out, "  {label} [{}, {}) {text:?}", action.enter, action.exit)?;
    }
    Ok(())
}
