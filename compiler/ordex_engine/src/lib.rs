//! Ordex engine: binds pattern trees to a shared ordinal alphabet, compiles
//! them into one Thompson NFA arena and matches symbol sequences against
//! every registered pattern.
//!
//! # Phases
//!
//! 1. [`Engine::add_pattern`] runs [`setup_bind`]: each literal symbol gets an
//!    ordinal in first-encounter order.
//! 2. [`Engine::bind`] freezes the alphabet, resolves every tree to a
//!    [`BoundExpr`] and wires it into the [`Nfa`].
//! 3. `match_*` / [`Engine::multi_match`] simulate each pattern in
//!    registration order; the first one that accepts wins, with its longest
//!    accepting length and the spans of its actions.

mod bind;
mod engine;
mod generate;
mod nfa;
mod simulate;

pub use bind::{setup_bind, Binder, BoundExpr};
pub use engine::{ActionResult, Engine, EngineMatch};
pub use nfa::{ActionMarker, Arc, ArcId, ArcLabel, Nfa, Node, NodeId};
pub use simulate::{Input, MatchMode};
