//! Diagnostic queue: the buffered listener every phase reports into.
//!
//! Features:
//! - Error limits so one broken pattern file cannot flood the output
//! - Deduplication of identical back-to-back diagnostics
//! - `ErrorGuaranteed` proof that errors were emitted
//!
//! Diagnostics stay in emission order. One queue often collects reports from
//! several pattern sources, so their line/column values are not comparable.

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic identical to the one just queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Buffered collection of diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let Some(output) = parse_pattern("'a'+", LexMode::Char, &sets, &mut queue) else {
///     for message in queue.messages() { eprintln!("{message}"); }
///     return;
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Count of errors (not warnings/notes).
    error_count: usize,
    /// Set once the limit note has been queued.
    limit_noted: bool,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            limit_noted: false,
            config,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was queued, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            if !self.limit_noted {
                self.limit_noted = true;
                self.diagnostics.push(too_many_errors(self.config.error_limit));
            }
            return false;
        }

        if self.config.deduplicate && self.diagnostics.last() == Some(&diag) {
            return false;
        }

        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Emit an error diagnostic and get proof it was emitted.
    ///
    /// The proof is returned even when the diagnostic itself was filtered:
    /// filtering only happens when an equivalent error is already queued.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error called with a non-error");
        self.add(diag);
        ErrorGuaranteed::new()
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Check whether any queued diagnostic carries `code`.
    pub fn contains_code(&self, code: ErrorCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    /// Rendered messages, one per diagnostic.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Return all diagnostics and reset the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        self.limit_noted = false;
        std::mem::take(&mut self.diagnostics)
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
fn too_many_errors(limit: usize) -> Diagnostic {
    Diagnostic::warning(ErrorCode::E9001)
        .with_message(format!("stopped reporting after {limit} errors"))
}
