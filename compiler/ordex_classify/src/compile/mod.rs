//! Shared pattern compilation for the consumers.

use ordex_diagnostic::{DiagnosticQueue, ErrorCode};
use ordex_engine::Engine;
use ordex_lexer::LexMode;
use ordex_parse::{parse_pattern, LiteralSets};
use tracing::debug;

use crate::{ConfigError, PatternEntry, SymbolSet};

/// A bound engine plus per-pattern parse results.
#[derive(Debug)]
pub(crate) struct Compiled {
    pub engine: Engine,
    /// Action count of each pattern.
    pub action_counts: Vec<u32>,
    /// Symbol-mode action names of each pattern.
    pub action_names: Vec<Vec<String>>,
}

/// Build the literal-set table, rejecting repeated names.
pub(crate) fn literal_sets(defs: &[SymbolSet]) -> Result<LiteralSets, ConfigError> {
    let mut sets = LiteralSets::new();
    for def in defs {
        if !sets.add(&def.name, &def.symbol_set) {
            return Err(ConfigError::DuplicateSet(def.name.clone()));
        }
    }
    Ok(sets)
}

/// Parse every entry in `mode` and bind them into one engine.
pub(crate) fn compile(
    entries: &[PatternEntry],
    mode: LexMode,
    sets: &LiteralSets,
    byte_alphabet: bool,
) -> Result<Compiled, ConfigError> {
    let mut queue = DiagnosticQueue::new();
    let mut engine = Engine::new();
    if byte_alphabet {
        engine
            .register_byte_alphabet()
            .map_err(|err| ConfigError::Bind {
                code: ErrorCode::E2005,
                messages: vec![err.to_string()],
            })?;
    }

    let mut action_counts = Vec::with_capacity(entries.len());
    let mut action_names = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(output) = parse_pattern(&entry.pattern, mode, sets, &mut queue) else {
            return Err(ConfigError::Pattern {
                index,
                pattern: entry.pattern.clone(),
                code: first_code(&queue),
                messages: queue.messages(),
            });
        };
        action_counts.push(output.expr.action_count());
        action_names.push(output.action_names);
        if engine.add_pattern(output.expr, &mut queue).is_err() {
            return Err(bind_error(&queue));
        }
    }
    if engine.bind(&mut queue).is_err() {
        return Err(bind_error(&queue));
    }

    debug!(%mode, patterns = entries.len(), "patterns compiled");
    Ok(Compiled {
        engine,
        action_counts,
        action_names,
    })
}

fn bind_error(queue: &DiagnosticQueue) -> ConfigError {
    ConfigError::Bind {
        code: first_code(queue),
        messages: queue.messages(),
    }
}

fn first_code(queue: &DiagnosticQueue) -> ErrorCode {
    queue.peek().next().map_or(ErrorCode::E3001, |diag| diag.code)
}

#[cfg(test)]
mod tests;
