//! Thompson construction from a bound pattern tree.
//!
//! Each node wires itself between a given start and end node. Loops get
//! their own inner entry/exit nodes so a back edge never touches the
//! caller's nodes; without that, an alternative sharing `start`/`end` with
//! a loop could be re-entered after one iteration.

use ordex_ir::stack::ensure_sufficient_stack;

use crate::bind::BoundExpr;
use crate::nfa::{ArcLabel, Nfa, NodeId};

impl Nfa {
    /// Wire `expr` between `start` and `end`.
    ///
    /// Arcs are created in preference order: a quantified body before its
    /// skip or exit arc, so the simulation explores greedy paths first.
    pub fn generate(&mut self, expr: &BoundExpr, start: NodeId, end: NodeId) {
        ensure_sufficient_stack(|| match expr {
            BoundExpr::Symbols(set) => {
                self.add_arc(start, end, ArcLabel::Symbols(set.clone()));
            }
            BoundExpr::Sequence(items) => {
                let mut from = start;
                for (i, item) in items.iter().enumerate() {
                    let to = if i + 1 == items.len() {
                        end
                    } else {
                        self.add_node()
                    };
                    self.generate(item, from, to);
                    from = to;
                }
                if items.is_empty() {
                    self.add_arc(start, end, ArcLabel::Epsilon);
                }
            }
            BoundExpr::Or(items) => {
                for item in items {
                    self.generate(item, start, end);
                }
            }
            BoundExpr::Optional(inner) => {
                self.generate(inner, start, end);
                self.add_arc(start, end, ArcLabel::Epsilon);
            }
            BoundExpr::OneOrMore(inner) => self.generate_loop(inner, start, end, false),
            BoundExpr::ZeroOrMore(inner) => self.generate_loop(inner, start, end, true),
            BoundExpr::Counted { inner, min, max } => {
                if *max == 0 {
                    self.add_arc(start, end, ArcLabel::Epsilon);
                }
                let mut from = start;
                for copy in 0..*max {
                    let to = if copy + 1 == *max { end } else { self.add_node() };
                    self.generate(inner, from, to);
                    if copy >= *min {
                        self.add_arc(from, to, ArcLabel::Epsilon);
                    }
                    from = to;
                }
            }
            BoundExpr::Action { inner, index } => {
                let first_new = self.arc_count();
                self.generate(inner, start, end);
                self.tag_action(first_new, start, end, *index);
            }
        });
    }

    /// `start -> entry`, body `entry -> exit`, `exit -> entry` (repeat),
    /// `exit -> end`, plus `start -> end` when zero iterations are allowed.
    fn generate_loop(&mut self, inner: &BoundExpr, start: NodeId, end: NodeId, skippable: bool) {
        let entry = self.add_node();
        let exit = self.add_node();
        self.add_arc(start, entry, ArcLabel::Epsilon);
        self.generate(inner, entry, exit);
        self.add_arc(exit, entry, ArcLabel::Epsilon);
        self.add_arc(exit, end, ArcLabel::Epsilon);
        if skippable {
            self.add_arc(start, end, ArcLabel::Epsilon);
        }
    }
}

#[cfg(test)]
mod tests;
