//! Failures while building a consumer from its configuration.

use ordex_diagnostic::ErrorCode;
use thiserror::Error;

/// Why a consumer could not be built.
///
/// Pattern and bind failures carry the code of the first diagnostic and
/// the rendered messages of the phase that failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("pattern {index} `{pattern}` does not compile")]
    Pattern {
        index: usize,
        pattern: String,
        code: ErrorCode,
        messages: Vec<String>,
    },

    #[error("patterns failed to bind")]
    Bind {
        code: ErrorCode,
        messages: Vec<String>,
    },

    #[error("literal set `{0}` is defined more than once")]
    DuplicateSet(String),

    #[error("pattern {index} has no SYMBOL")]
    MissingSymbol { index: usize },

    #[error("pattern {index} has {actions} actions but only {classes} classes")]
    MissingClasses {
        index: usize,
        actions: u32,
        classes: usize,
    },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::Json(_) | ConfigError::MissingSymbol { .. } => ErrorCode::E3001,
            ConfigError::MissingClasses { .. } => ErrorCode::E3002,
            ConfigError::DuplicateSet(_) => ErrorCode::E2003,
            ConfigError::Pattern { code, .. } | ConfigError::Bind { code, .. } => *code,
        }
    }

    /// Diagnostics behind this error, one rendered message each.
    pub fn messages(&self) -> &[String] {
        match self {
            ConfigError::Pattern { messages, .. } | ConfigError::Bind { messages, .. } => messages,
            _ => &[],
        }
    }
}
