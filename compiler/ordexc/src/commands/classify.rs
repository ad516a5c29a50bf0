//! The consumer commands: `tokenize`, `symbolize` and `classify`.
//!
//! Each reads a JSON configuration file, then processes stdin-style input
//! one record per line.

use std::io::{BufRead, Write};

use ordex_classify::{PatternMatcher, Symbolizer, Tokenizer};
use tracing::debug;

use super::{for_each_line, read_file, CommandError};

/// Print the tokens of each line, separated by single spaces.
pub fn tokenize(
    config: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let tokenizer = Tokenizer::from_json(&read_file(config)?)?;
    debug!(config, "tokenizer loaded");
    for_each_line(input, out, |line| tokenizer.tokenize(line).join(" "))
}

/// Print the symbol of each whitespace-separated token.
pub fn symbolize(
    config: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let symbolizer = Symbolizer::from_json(&read_file(config)?)?;
    debug!(config, "symbolizer loaded");
    for_each_line(input, out, |line| {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        symbolizer.symbolize_all(&tokens).join(" ")
    })
}

/// Print `pattern: class class ...` for each line of symbols.
pub fn classify(
    config: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let matcher = PatternMatcher::from_json(&read_file(config)?)?;
    debug!(config, "pattern matcher loaded");
    for_each_line(input, out, |line| {
        let symbols: Vec<&str> = line.split_whitespace().collect();
        match matcher.process(&symbols) {
            Some(found) => format!("{}: {}", found.pattern, found.classes.join(" ")),
            None => "no match".to_owned(),
        }
    })
}
