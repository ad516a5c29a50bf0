//! Command handlers for the `ordex` CLI.
//!
//! Each handler writes its output to `out` and returns a [`CommandError`]
//! on failure; `main` prints the error and exits with status 1.

use std::io::{self, BufRead, Write};
use std::path::Path;

use ordex_classify::ConfigError;
use ordex_diagnostic::ErrorCode;
use thiserror::Error;

mod classify;
mod dump;
mod explain;
mod matching;

pub use classify::{classify, symbolize, tokenize};
pub use dump::dump;
pub use explain::explain;
pub use matching::{run_match, MatchOptions};

#[derive(Debug, Error)]
pub enum CommandError {
    /// Pattern diagnostics, already rendered.
    #[error("{}", .0.join("\n"))]
    Diagnostics(Vec<String>),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("cannot read `{path}`: {source}")]
    Read { path: String, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("unknown error code `{0}`")]
    UnknownCode(String),
}

impl CommandError {
    /// Full report for stderr, including nested diagnostics.
    pub fn report(&self) -> String {
        match self {
            CommandError::Config(err) => {
                let mut report = format!("error[{}]: {err}", err.code());
                for message in err.messages() {
                    report.push('\n');
                    report.push_str(message);
                }
                report
            }
            CommandError::Diagnostics(_) => self.to_string(),
            _ => format!("error: {self}"),
        }
    }
}

/// Read a configuration file into a string.
pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(Path::new(path)).map_err(|source| CommandError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Apply `line_fn` to every line of `input`, writing one result line each.
pub(crate) fn for_each_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    mut line_fn: impl FnMut(&str) -> String,
) -> Result<(), CommandError> {
    for line in input.lines() {
        let line = line?;
        writeln!(out, "{}", line_fn(&line))?;
    }
    Ok(())
}

pub(crate) fn parse_code(text: &str) -> Option<ErrorCode> {
    ErrorCode::ALL
        .iter()
        .copied()
        .find(|code| code.as_str().eq_ignore_ascii_case(text))
}

#[cfg(test)]
mod tests;
