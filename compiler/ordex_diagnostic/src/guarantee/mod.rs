//! Proof that an error was reported.

use std::fmt;

/// Zero-size token that can only be obtained by emitting an error.
///
/// Fallible phases return `Result<T, ErrorGuaranteed>`: the caller knows the
/// reason is already sitting in the diagnostic queue.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    /// Only the queue creates guarantees.
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Recover a guarantee from a non-zero error count.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}

impl std::error::Error for ErrorGuaranteed {}

#[cfg(test)]
mod tests;
