//! Pike-style NFA simulation with per-thread action spans.
//!
//! All threads advance in lock step over the input. Within one step a node
//! is claimed by the first thread that reaches it, and threads are ordered
//! by arc priority, so the surviving thread at any node is the one that
//! followed the most greedy path. Each thread carries one slot per action
//! holding its first entry and last exit position.
//!
//! The closure walk uses an explicit work stack, and every buffer lives in a
//! per-call [`Scratch`], so a bound engine can be shared between threads.

use ordex_ir::{Ordinal, OrdinalSet};
use smallvec::{smallvec, SmallVec};

use crate::nfa::{Arc, ArcLabel, Nfa, NodeId};

/// What the simulation compares an arc label against at one position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// One known symbol.
    Symbol(Ordinal),
    /// Every symbol the position might be.
    Candidates(OrdinalSet),
}

impl Input {
    #[inline]
    fn accepts(&self, label: &OrdinalSet) -> bool {
        match self {
            Input::Symbol(ordinal) => label.contains(*ordinal),
            Input::Candidates(candidates) => label.intersects(candidates),
        }
    }
}

/// How much of the input a match has to cover.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum MatchMode {
    /// Longest non-empty prefix.
    #[default]
    Prefix,
    /// The whole input.
    Exact,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Slot {
    pub enter: Option<usize>,
    pub exit: Option<usize>,
}

pub(crate) type Slots = SmallVec<[Slot; 4]>;

#[derive(Clone, Debug)]
struct Thread {
    node: NodeId,
    slots: Slots,
}

/// Buffers for one match call.
#[derive(Debug)]
pub(crate) struct Scratch {
    /// Step number at which each node was last claimed.
    claimed: Vec<u32>,
    step: u32,
    stack: Vec<(NodeId, Slots)>,
    current: Vec<Thread>,
    next: Vec<Thread>,
}

impl Scratch {
    pub fn new(node_count: usize) -> Self {
        Scratch {
            claimed: vec![0; node_count],
            step: 0,
            stack: Vec::new(),
            current: Vec::new(),
            next: Vec::new(),
        }
    }

    fn next_step(&mut self) {
        self.step += 1;
    }
}

/// A pattern's fragment in the shared arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Fragment {
    pub start: NodeId,
    pub end: NodeId,
    pub action_count: u32,
}

/// Run one pattern over `input`.
///
/// Returns the accepted length and the action slots of the accepting
/// thread, or `None` if the pattern accepts nowhere `mode` allows.
pub(crate) fn simulate(
    nfa: &Nfa,
    fragment: Fragment,
    input: &[Input],
    mode: MatchMode,
    scratch: &mut Scratch,
) -> Option<(usize, Slots)> {
    scratch.current.clear();
    scratch.next.clear();
    scratch.next_step();

    let empty: Slots = smallvec![Slot::default(); fragment.action_count as usize];
    let mut current = std::mem::take(&mut scratch.current);
    let mut next = std::mem::take(&mut scratch.next);
    add_thread(nfa, scratch, &mut current, fragment.start, empty, 0);

    let mut best = None;
    for pos in 0..=input.len() {
        let accepting = match mode {
            MatchMode::Prefix => pos > 0,
            MatchMode::Exact => pos == input.len(),
        };
        if accepting {
            if let Some(thread) = current.iter().find(|t| t.node == fragment.end) {
                best = Some((pos, thread.slots.clone()));
            }
        }
        if pos == input.len() || current.is_empty() {
            break;
        }

        scratch.next_step();
        for thread in &current {
            for arc in nfa.outgoing(thread.node) {
                let ArcLabel::Symbols(label) = &arc.label else {
                    continue;
                };
                if input[pos].accepts(label) {
                    let mut slots = thread.slots.clone();
                    apply_markers(arc, pos, pos + 1, &mut slots);
                    add_thread(nfa, scratch, &mut next, arc.target, slots, pos + 1);
                }
            }
        }
        std::mem::swap(&mut current, &mut next);
        next.clear();
    }

    scratch.current = current;
    scratch.next = next;
    best
}

/// Add `node` and its epsilon closure to `list`, in priority order.
fn add_thread(
    nfa: &Nfa,
    scratch: &mut Scratch,
    list: &mut Vec<Thread>,
    node: NodeId,
    slots: Slots,
    pos: usize,
) {
    scratch.stack.push((node, slots));
    while let Some((node, slots)) = scratch.stack.pop() {
        let claimed = &mut scratch.claimed[node.index()];
        if *claimed == scratch.step {
            continue;
        }
        *claimed = scratch.step;

        // Reversed so the first-created arc is popped first.
        for arc in nfa.outgoing(node).rev() {
            if matches!(arc.label, ArcLabel::Epsilon) {
                let mut next_slots = slots.clone();
                apply_markers(arc, pos, pos, &mut next_slots);
                scratch.stack.push((arc.target, next_slots));
            }
        }
        list.push(Thread { node, slots });
    }
}

/// Apply an arc's action markers: entries keep the first position, exits
/// the last.
fn apply_markers(arc: &Arc, enter: usize, exit: usize, slots: &mut Slots) {
    for marker in &arc.actions {
        let Some(slot) = slots.get_mut(marker.action as usize) else {
            continue;
        };
        if marker.entering {
            slot.enter.get_or_insert(enter);
        } else {
            slot.exit = Some(exit);
        }
    }
}
