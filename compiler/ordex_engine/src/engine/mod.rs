//! The matching engine: pattern registration, global binding and matching.

use ordex_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use ordex_ir::{Expr, InsertError, Ordinal, OrdinalMap, OrdinalSet};
use tracing::{debug, trace};

use crate::bind::{setup_bind, Binder};
use crate::nfa::{Nfa, NodeId};
use crate::simulate::{simulate, Fragment, Input, MatchMode, Scratch, Slots};

/// Span of one action on the accepting path.
///
/// `enter..exit` is half-open and counted in input symbols.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActionResult {
    pub sub_expr: u32,
    pub enter: usize,
    pub exit: usize,
}

/// A successful match.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EngineMatch {
    /// Registration index of the winning pattern.
    pub pattern: usize,
    /// Number of input symbols consumed.
    pub end: usize,
    /// One entry per action traversed, ordered by action index.
    pub actions: Vec<ActionResult>,
}

#[derive(Clone, Debug)]
struct Pattern {
    expr: Expr,
    fragment: Option<Fragment>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Phase {
    /// Accepting patterns and symbols.
    Collecting,
    Bound,
    /// Binding failed; the engine never matches.
    Failed(ErrorGuaranteed),
}

/// Compiles patterns over a shared ordinal alphabet and matches against them.
///
/// Usage is two-phase: register symbols and patterns, then [`bind`](Self::bind)
/// once. Matching an engine that is not bound finds nothing.
#[derive(Clone, Debug)]
pub struct Engine {
    map: OrdinalMap,
    patterns: Vec<Pattern>,
    nfa: Nfa,
    phase: Phase,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            map: OrdinalMap::new(),
            patterns: Vec::new(),
            nfa: Nfa::new(),
            phase: Phase::Collecting,
        }
    }

    // ─── Registration ─────────────────────────────────────────────

    /// Pre-register a symbol so it gets the next ordinal.
    pub fn register_symbol(&mut self, text: &str) -> Result<Ordinal, InsertError> {
        self.map.insert(text)
    }

    /// Register all 256 single-byte symbols in byte order.
    ///
    /// Called first, this pins byte `b` to ordinal `b`.
    pub fn register_byte_alphabet(&mut self) -> Result<(), InsertError> {
        for byte in 0..=u8::MAX {
            self.map.insert(char::from(byte).encode_utf8(&mut [0; 4]))?;
        }
        Ok(())
    }

    /// Register a pattern and its literal symbols.
    ///
    /// Returns the pattern's index. Fails with `E2004` once the engine is
    /// bound; after a failed bind, returns that bind's error unchanged.
    pub fn add_pattern(
        &mut self,
        expr: Expr,
        queue: &mut DiagnosticQueue,
    ) -> Result<usize, ErrorGuaranteed> {
        match self.phase {
            Phase::Collecting => {}
            Phase::Bound => return Err(queue.emit_error(pattern_after_bind(&expr.to_string()))),
            Phase::Failed(err) => return Err(err),
        }
        if let Err(err) = setup_bind(&expr, &mut self.map) {
            return Err(queue.emit_error(
                Diagnostic::error(ErrorCode::E2005).with_message(err.to_string()),
            ));
        }
        let index = self.patterns.len();
        trace!(index, "pattern registered: {expr}");
        self.patterns.push(Pattern {
            expr,
            fragment: None,
        });
        Ok(index)
    }

    // ─── Binding ──────────────────────────────────────────────────

    /// Freeze the alphabet, bind every pattern and build the NFA.
    ///
    /// Every pattern is bound so all problems are reported; any failure
    /// leaves the engine permanently unable to match.
    pub fn bind(&mut self, queue: &mut DiagnosticQueue) -> Result<(), ErrorGuaranteed> {
        match self.phase {
            Phase::Bound => return Ok(()),
            Phase::Failed(err) => return Err(err),
            Phase::Collecting => {}
        }

        self.map.freeze();
        let mut binder = Binder::new(&self.map, queue);
        let mut bound = Vec::with_capacity(self.patterns.len());
        let mut failure = None;
        for pattern in &self.patterns {
            match binder.bind(&pattern.expr) {
                Ok(expr) => bound.push(expr),
                Err(err) => failure = Some(err),
            }
        }
        if let Some(err) = failure {
            self.phase = Phase::Failed(err);
            debug!("bind failed");
            return Err(err);
        }

        for (pattern, expr) in self.patterns.iter_mut().zip(&bound) {
            let start = self.nfa.add_node();
            let end = self.nfa.add_node();
            self.nfa.generate(expr, start, end);
            pattern.fragment = Some(Fragment {
                start,
                end,
                action_count: pattern.expr.action_count(),
            });
        }
        self.phase = Phase::Bound;
        debug!(
            patterns = self.patterns.len(),
            ordinals = self.map.len(),
            nodes = self.nfa.node_count(),
            arcs = self.nfa.arc_count(),
            "engine bound"
        );
        Ok(())
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.phase == Phase::Bound
    }

    #[inline]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// The alphabet.
    #[inline]
    pub fn ordinals(&self) -> &OrdinalMap {
        &self.map
    }

    #[inline]
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// Start and end node of a bound pattern.
    pub fn pattern_nodes(&self, pattern: usize) -> Option<(NodeId, NodeId)> {
        let fragment = self.patterns.get(pattern)?.fragment?;
        Some((fragment.start, fragment.end))
    }

    /// Ordinal of `text`, or the reserved unknown ordinal.
    #[inline]
    pub fn symbol_ordinal(&self, text: &str) -> Ordinal {
        self.map.lookup(text)
    }

    // ─── Matching ─────────────────────────────────────────────────

    /// Match a sequence of symbol texts.
    pub fn match_symbols<S: AsRef<str>>(&self, symbols: &[S], mode: MatchMode) -> Option<EngineMatch> {
        let input: Vec<Input> = symbols
            .iter()
            .map(|s| Input::Symbol(self.map.lookup(s.as_ref())))
            .collect();
        self.run(&input, mode)
    }

    /// Match each character of `text` as one symbol.
    pub fn match_chars(&self, text: &str, mode: MatchMode) -> Option<EngineMatch> {
        self.run(&self.char_input(text), mode)
    }

    /// Every pattern that accepts `text`, in registration order.
    pub fn all_char_matches(&self, text: &str, mode: MatchMode) -> Vec<EngineMatch> {
        let input = self.char_input(text);
        self.accepting(&input, mode).collect()
    }

    /// Match a sequence of resolved ordinals.
    pub fn match_ordinals(&self, ordinals: &[Ordinal], mode: MatchMode) -> Option<EngineMatch> {
        let input: Vec<Input> = ordinals.iter().copied().map(Input::Symbol).collect();
        self.run(&input, mode)
    }

    /// Match where each position may be any of several symbols.
    ///
    /// An arc advances when its label shares at least one ordinal with the
    /// position's candidates.
    pub fn multi_match<C, S>(&self, candidates: &[C], mode: MatchMode) -> Option<EngineMatch>
    where
        C: AsRef<[S]>,
        S: AsRef<str>,
    {
        let input: Vec<Input> = candidates
            .iter()
            .map(|options| {
                let mut set = OrdinalSet::new(self.map.width());
                for option in options.as_ref() {
                    set.insert(self.map.lookup(option.as_ref()));
                }
                Input::Candidates(set)
            })
            .collect();
        self.run(&input, mode)
    }

    fn char_input(&self, text: &str) -> Vec<Input> {
        let mut buf = [0; 4];
        text.chars()
            .map(|c| Input::Symbol(self.map.lookup(c.encode_utf8(&mut buf))))
            .collect()
    }

    /// Try every pattern in registration order; the first that accepts wins.
    fn run(&self, input: &[Input], mode: MatchMode) -> Option<EngineMatch> {
        let found = self.accepting(input, mode).next();
        if found.is_none() {
            trace!(len = input.len(), "no pattern accepted");
        }
        found
    }

    /// Lazily simulate each pattern, yielding the ones that accept.
    ///
    /// Yields nothing unless the engine is bound.
    fn accepting<'s>(
        &'s self,
        input: &'s [Input],
        mode: MatchMode,
    ) -> impl Iterator<Item = EngineMatch> + 's {
        let patterns = if self.phase == Phase::Bound {
            self.patterns.as_slice()
        } else {
            &[]
        };
        let mut scratch = Scratch::new(self.nfa.node_count());
        patterns
            .iter()
            .enumerate()
            .filter_map(move |(index, pattern)| {
                let fragment = pattern.fragment?;
                let (end, slots) = simulate(&self.nfa, fragment, input, mode, &mut scratch)?;
                trace!(pattern = index, end, "pattern accepted");
                Some(EngineMatch {
                    pattern: index,
                    end,
                    actions: action_results(&slots),
                })
            })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "action indices come from u32 counters"
)]
fn action_results(slots: &Slots) -> Vec<ActionResult> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| match (slot.enter, slot.exit) {
            (Some(enter), Some(exit)) => Some(ActionResult {
                sub_expr: i as u32,
                enter,
                exit,
            }),
            _ => None,
        })
        .collect()
}

fn pattern_after_bind(what: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2004)
        .with_message(format!("cannot add `{what}`: the engine is already bound"))
        .with_note("register every pattern before calling bind")
}
