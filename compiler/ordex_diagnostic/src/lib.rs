//! Diagnostic system for pattern compilation.
//!
//! Every phase (lexing, parsing, binding, configuration) reports failures as
//! a [`Diagnostic`] pushed into a [`DiagnosticQueue`], the buffered listener
//! callers inspect after a call returns `None` / `Err`.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error was
//! emitted, so a phase cannot fail without having said why:
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! fn bind(...) -> Result<BoundExpr, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
