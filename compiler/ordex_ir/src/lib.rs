//! Ordex IR - shared data types for the pattern compiler.
//!
//! This crate contains the structures every phase agrees on:
//! - `Token` / `TokenKind` produced by the lexers
//! - `Expr`, the pattern tree produced by the parser
//! - `OrdinalMap`, the growing symbol-text to ordinal table used by binding
//! - `OrdinalSet`, the fixed-width bit vector used as an NFA arc label
//!
//! # Design Philosophy
//!
//! - **Symbols are text**: the alphabet is discovered from the patterns, so a
//!   symbol is any string (one character in char mode, a word in symbol mode).
//! - **Ordinals are dense**: once binding starts, the matcher only ever sees
//!   `Ordinal` values and `OrdinalSet` labels, never symbol text.

mod ast;
mod ordinal;
mod ordinal_set;
pub mod stack;
mod token;

pub use ast::{Expr, SetItem, MAX_ALLOWED_COUNT};
pub use ordinal::{InsertError, Ordinal, OrdinalMap};
pub use ordinal_set::OrdinalSet;
pub use token::{Token, TokenKind};
