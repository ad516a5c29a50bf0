//! NFA arena.
//!
//! Nodes and arcs live in two dense vectors owned by the [`Nfa`] and are
//! addressed by [`NodeId`] / [`ArcId`]. Every pattern registered with an
//! engine gets its own start/end pair inside the one shared arena.
//!
//! An arc's position in its source node's outgoing list is its priority:
//! the simulation tries arcs in creation order, which is how greedy
//! quantifiers prefer to keep repeating.

use std::fmt;

use ordex_ir::{Ordinal, OrdinalSet};
use smallvec::SmallVec;

/// Index of a node in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Index of an arc in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ArcId(u32);

impl ArcId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What an arc consumes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArcLabel {
    /// Taken without consuming input.
    Epsilon,
    /// Taken when the current symbol's ordinal is in the set.
    Symbols(OrdinalSet),
}

/// Records that taking an arc enters or leaves an action's sub-expression.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActionMarker {
    pub entering: bool,
    pub action: u32,
}

impl fmt::Display for ActionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.entering { '+' } else { '-' };
        write!(f, "{sign}{}", self.action)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Arc {
    pub label: ArcLabel,
    pub actions: SmallVec<[ActionMarker; 2]>,
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Node {
    /// Outgoing arcs in priority order.
    pub outgoing: Vec<ArcId>,
    pub incoming: Vec<ArcId>,
}

#[derive(Clone, Debug, Default)]
pub struct Nfa {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
}

impl Nfa {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "counted unrolling bounds the arena far below u32::MAX"
    )]
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::default());
        id
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "counted unrolling bounds the arena far below u32::MAX"
    )]
    pub fn add_arc(&mut self, source: NodeId, target: NodeId, label: ArcLabel) -> ArcId {
        let id = ArcId(self.arcs.len() as u32);
        self.arcs.push(Arc {
            label,
            actions: SmallVec::new(),
            source,
            target,
        });
        self.nodes[source.index()].outgoing.push(id);
        self.nodes[target.index()].incoming.push(id);
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn arc(&self, id: ArcId) -> &Arc {
        &self.arcs[id.index()]
    }

    /// Outgoing arcs of `node` in priority order.
    pub fn outgoing(&self, node: NodeId) -> impl DoubleEndedIterator<Item = &Arc> + '_ {
        self.nodes[node.index()]
            .outgoing
            .iter()
            .map(move |&id| &self.arcs[id.index()])
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Tag arcs created since `first_new` that leave `start` (entering) or
    /// arrive at `end` (exiting) with `action`.
    pub(crate) fn tag_action(&mut self, first_new: usize, start: NodeId, end: NodeId, action: u32) {
        for arc in &mut self.arcs[first_new..] {
            if arc.source == start {
                arc.actions.push(ActionMarker {
                    entering: true,
                    action,
                });
            }
            if arc.target == end {
                arc.actions.push(ActionMarker {
                    entering: false,
                    action,
                });
            }
        }
    }
}

/// One arc per line: `n0 -> n1 [#0-#9 #12] +0`.
impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arc in &self.arcs {
            write!(f, "{} -> {} ", arc.source, arc.target)?;
            match &arc.label {
                ArcLabel::Epsilon => f.write_str("eps")?,
                ArcLabel::Symbols(set) => write_set(f, set)?,
            }
            for marker in &arc.actions {
                write!(f, " {marker}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render a set as ordinal runs, e.g. `[#0-#9 #12]`.
fn write_set(f: &mut fmt::Formatter<'_>, set: &OrdinalSet) -> fmt::Result {
    let mut runs: Vec<(Ordinal, Ordinal)> = Vec::new();
    for ordinal in set.iter() {
        match runs.last_mut() {
            Some((_, last)) if last.raw() + 1 == ordinal.raw() => *last = ordinal,
            _ => runs.push((ordinal, ordinal)),
        }
    }
    f.write_str("[")?;
    for (i, (low, high)) in runs.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        if low == high {
            write!(f, "{low}")?;
        } else {
            write!(f, "{low}-{high}")?;
        }
    }
    f.write_str("]")
}
