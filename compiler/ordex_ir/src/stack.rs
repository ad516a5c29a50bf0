//! Stack growth for the recursive tree walks (parse, bind, NFA generation).
//!
//! Deeply nested patterns like `((((((a))))))` recurse once per level in
//! every phase. Wrapping the recursive step in [`ensure_sufficient_stack`]
//! grows the stack on demand instead of overflowing.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
