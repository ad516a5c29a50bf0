//! Record tokenizer.
//!
//! A record is first cut on whitespace and framing characters. Each
//! resulting word is then checked against the no-split patterns, and if
//! none matches, against the split patterns: the action spans of the
//! winning split pattern become separate tokens.

use ordex_engine::{Engine, MatchMode};
use ordex_lexer::LexMode;
use tracing::trace;

use crate::compile::{compile, literal_sets};
use crate::{ConfigError, PatternEntry, TokenizerConfig};

#[derive(Debug)]
pub struct Tokenizer {
    whitespace: Vec<char>,
    framing: Vec<char>,
    split: Option<Engine>,
    nosplit: Option<Engine>,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Result<Self, ConfigError> {
        let sets = literal_sets(&config.symbol_sets)?;
        let build = |entries: &[PatternEntry]| -> Result<Option<Engine>, ConfigError> {
            if entries.is_empty() {
                return Ok(None);
            }
            Ok(Some(compile(entries, LexMode::Char, &sets, true)?.engine))
        };
        Ok(Tokenizer {
            whitespace: config.whitespace.chars().collect(),
            framing: config.framing.chars().collect(),
            split: build(&config.patterns)?,
            nosplit: build(&config.nosplit)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(&TokenizerConfig::from_json(json)?)
    }

    /// Split `record` into tokens.
    pub fn tokenize(&self, record: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut word_start = None;
        for (pos, c) in record.char_indices() {
            let is_framing = self.framing.contains(&c);
            if is_framing || self.whitespace.contains(&c) {
                if let Some(start) = word_start.take() {
                    self.split_word(&record[start..pos], &mut tokens);
                }
                if is_framing {
                    tokens.push(c.to_string());
                }
            } else if word_start.is_none() {
                word_start = Some(pos);
            }
        }
        if let Some(start) = word_start {
            self.split_word(&record[start..], &mut tokens);
        }
        tokens
    }

    fn split_word(&self, word: &str, tokens: &mut Vec<String>) {
        let keep = self
            .nosplit
            .as_ref()
            .is_some_and(|engine| engine.match_chars(word, MatchMode::Exact).is_some());
        let found = if keep {
            None
        } else {
            self.split
                .as_ref()
                .and_then(|engine| engine.match_chars(word, MatchMode::Exact))
        };
        let Some(found) = found else {
            tokens.push(word.to_owned());
            return;
        };
        trace!(word, pattern = found.pattern, "splitting word");

        // Byte offset of every char boundary, including the end.
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(pos, _)| pos)
            .chain(std::iter::once(word.len()))
            .collect();
        let mut spans: Vec<(usize, usize)> = found
            .actions
            .iter()
            .filter(|action| action.exit > action.enter)
            .map(|action| (action.enter, action.exit))
            .collect();
        spans.sort_unstable();

        let mut cursor = 0;
        for (enter, exit) in spans {
            if enter < cursor {
                continue;
            }
            if enter > cursor {
                tokens.push(word[bounds[cursor]..bounds[enter]].to_owned());
            }
            tokens.push(word[bounds[enter]..bounds[exit]].to_owned());
            cursor = exit;
        }
        let last = bounds.len() - 1;
        if cursor < last {
            tokens.push(word[bounds[cursor]..].to_owned());
        }
    }
}
