//! Token to symbol mapping.

use ordex_engine::{Engine, MatchMode};
use ordex_lexer::LexMode;

use crate::compile::{compile, literal_sets};
use crate::{ConfigError, SymbolizerConfig};

/// Maps each token to the symbol of the first char-mode pattern that
/// matches it in full.
#[derive(Debug)]
pub struct Symbolizer {
    engine: Engine,
    /// Indexed by pattern.
    symbols: Vec<String>,
    default: Option<String>,
}

impl Symbolizer {
    pub fn new(config: &SymbolizerConfig) -> Result<Self, ConfigError> {
        let symbols = config
            .patterns
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .symbol
                    .clone()
                    .ok_or(ConfigError::MissingSymbol { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let sets = literal_sets(&config.symbol_sets)?;
        let compiled = compile(&config.patterns, LexMode::Char, &sets, true)?;
        Ok(Symbolizer {
            engine: compiled.engine,
            symbols,
            default: config.default.clone(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(&SymbolizerConfig::from_json(json)?)
    }

    /// Symbol for `token`: the first matching pattern's symbol, else the
    /// default, else the token itself.
    pub fn symbolize<'a>(&'a self, token: &'a str) -> &'a str {
        match self.engine.match_chars(token, MatchMode::Exact) {
            Some(found) => self.symbols[found.pattern].as_str(),
            None => self.default.as_deref().unwrap_or(token),
        }
    }

    /// Every symbol `token` could stand for, followed by the token itself.
    pub fn candidates(&self, token: &str) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        for found in self.engine.all_char_matches(token, MatchMode::Exact) {
            let symbol = &self.symbols[found.pattern];
            if !candidates.contains(symbol) {
                candidates.push(symbol.clone());
            }
        }
        if !candidates.iter().any(|c| c == token) {
            candidates.push(token.to_owned());
        }
        candidates
    }

    pub fn symbolize_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.symbolize(token.as_ref()).to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests;
