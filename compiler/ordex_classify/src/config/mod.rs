//! JSON configuration for the three consumers.
//!
//! Keys are upper-case, e.g.
//!
//! ```text
//! {
//!   "WHITESPACE": " \t",
//!   "PATTERNS": [{ "PATTERN": "=d+ =a+" }],
//!   "NOSPLIT": [{ "PATTERN": "d+ 'x' d+" }]
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::ConfigError;

/// One pattern and what it maps to.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct PatternEntry {
    pub pattern: String,
    /// Output symbol (symbolizer).
    #[serde(default)]
    pub symbol: Option<String>,
    /// Class per action index (pattern matcher).
    #[serde(default)]
    pub classes: Option<Vec<String>>,
}

impl PatternEntry {
    pub fn new(pattern: impl Into<String>) -> Self {
        PatternEntry {
            pattern: pattern.into(),
            ..PatternEntry::default()
        }
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }
}

/// A named literal set usable from patterns.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct SymbolSet {
    pub name: String,
    pub symbol_set: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Characters that separate tokens and are dropped.
    #[serde(default = "default_whitespace")]
    pub whitespace: String,
    /// Characters that separate tokens and are kept as tokens of their own.
    #[serde(default)]
    pub framing: String,
    /// Char-mode split patterns; their action spans become sub-tokens.
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
    /// Char-mode patterns for tokens that are never split.
    #[serde(default)]
    pub nosplit: Vec<PatternEntry>,
    #[serde(default)]
    pub symbol_sets: Vec<SymbolSet>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            whitespace: default_whitespace(),
            framing: String::new(),
            patterns: Vec::new(),
            nosplit: Vec::new(),
            symbol_sets: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct SymbolizerConfig {
    /// Char-mode patterns, each with a `SYMBOL`.
    pub patterns: Vec<PatternEntry>,
    /// Symbol for tokens no pattern matches. Unset keeps the token itself.
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub symbol_sets: Vec<SymbolSet>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct PatternMatcherConfig {
    /// Symbol-mode patterns. `CLASSES` falls back to the action names.
    pub patterns: Vec<PatternEntry>,
    /// Class for positions outside every action span.
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub symbol_sets: Vec<SymbolSet>,
    /// Register all single-byte symbols before the patterns.
    #[serde(default)]
    pub byte_alphabet: bool,
}

fn default_whitespace() -> String {
    " \t\r\n".to_owned()
}

/// Parse a configuration from JSON text.
pub(crate) fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

impl TokenizerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        from_json(json)
    }
}

impl SymbolizerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        from_json(json)
    }
}

impl PatternMatcherConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        from_json(json)
    }
}
