//! Record classification on top of the ordex engine.
//!
//! Three consumers, each built from a JSON configuration:
//!
//! - [`Tokenizer`]: splits a record into tokens on whitespace and framing
//!   characters, then carves tokens along the action spans of split patterns
//! - [`Symbolizer`]: maps each token to the symbol of the first char-mode
//!   pattern it matches
//! - [`PatternMatcher`]: matches a whole symbol sequence against symbol-mode
//!   patterns and assigns a class to every position

mod compile;
mod config;
mod error;
mod pattern_matcher;
mod symbolizer;
mod tokenizer;

pub use config::{
    PatternEntry, PatternMatcherConfig, SymbolSet, SymbolizerConfig, TokenizerConfig,
};
pub use error::ConfigError;
pub use pattern_matcher::{Classification, PatternMatcher};
pub use symbolizer::Symbolizer;
pub use tokenizer::Tokenizer;
