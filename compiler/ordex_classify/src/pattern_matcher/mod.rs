//! Whole-record classification.
//!
//! Each pattern carries one class per action. A record (a sequence of
//! symbols) is matched in full; every position inside an action span gets
//! that action's class, every other position gets the default class.

use ordex_engine::{Engine, EngineMatch, MatchMode};
use ordex_lexer::LexMode;
use rayon::prelude::*;
use tracing::debug;

use crate::compile::{compile, literal_sets};
use crate::{ConfigError, PatternMatcherConfig};

/// Result of classifying one record.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Classification {
    /// Index of the winning pattern.
    pub pattern: usize,
    /// One class per input symbol.
    pub classes: Vec<String>,
}

#[derive(Debug)]
pub struct PatternMatcher {
    engine: Engine,
    /// `classes[pattern][action]`.
    classes: Vec<Vec<String>>,
    default: String,
}

impl PatternMatcher {
    pub fn new(config: &PatternMatcherConfig) -> Result<Self, ConfigError> {
        let sets = literal_sets(&config.symbol_sets)?;
        let compiled = compile(
            &config.patterns,
            LexMode::Symbol,
            &sets,
            config.byte_alphabet,
        )?;

        let mut classes = Vec::with_capacity(config.patterns.len());
        for (index, (entry, names)) in config
            .patterns
            .iter()
            .zip(compiled.action_names)
            .enumerate()
        {
            let list = entry.classes.clone().unwrap_or(names);
            let actions = compiled.action_counts[index];
            if list.len() < actions as usize {
                return Err(ConfigError::MissingClasses {
                    index,
                    actions,
                    classes: list.len(),
                });
            }
            classes.push(list);
        }

        debug!(patterns = classes.len(), "pattern matcher ready");
        Ok(PatternMatcher {
            engine: compiled.engine,
            classes,
            default: config.default.clone().unwrap_or_default(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(&PatternMatcherConfig::from_json(json)?)
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Classify one record of symbols.
    pub fn process<S: AsRef<str>>(&self, symbols: &[S]) -> Option<Classification> {
        let found = self.engine.match_symbols(symbols, MatchMode::Exact)?;
        Some(self.classify(&found, symbols.len()))
    }

    /// Classify a record whose positions each have several candidate symbols.
    pub fn multi_process<C, S>(&self, candidates: &[C]) -> Option<Classification>
    where
        C: AsRef<[S]>,
        S: AsRef<str>,
    {
        let found = self.engine.multi_match(candidates, MatchMode::Exact)?;
        Some(self.classify(&found, candidates.len()))
    }

    /// Classify many records in parallel on the global rayon pool.
    ///
    /// Results keep the input order.
    pub fn process_batch<R, S>(&self, records: &[R]) -> Vec<Option<Classification>>
    where
        R: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        debug!(records = records.len(), "classifying batch");
        records
            .par_iter()
            .map(|record| self.process(record.as_ref()))
            .collect()
    }

    fn classify(&self, found: &EngineMatch, len: usize) -> Classification {
        let mut classes = vec![self.default.clone(); len];
        let names = &self.classes[found.pattern];
        for action in &found.actions {
            let Some(name) = names.get(action.sub_expr as usize) else {
                continue;
            };
            for class in &mut classes[action.enter..action.exit] {
                class.clone_from(name);
            }
        }
        Classification {
            pattern: found.pattern,
            classes,
        }
    }
}
