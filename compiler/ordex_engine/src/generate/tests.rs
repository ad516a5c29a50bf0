#![allow(clippy::unwrap_used)]

use super::*;
use crate::nfa::ActionMarker;
use ordex_ir::{Ordinal, OrdinalSet};
use pretty_assertions::assert_eq;

fn sym(raw: u32) -> BoundExpr {
    BoundExpr::Symbols(OrdinalSet::singleton(4, Ordinal::new(raw)))
}

fn build(expr: &BoundExpr) -> (Nfa, NodeId, NodeId) {
    let mut nfa = Nfa::new();
    let start = nfa.add_node();
    let end = nfa.add_node();
    nfa.generate(expr, start, end);
    (nfa, start, end)
}

fn is_epsilon(nfa: &Nfa, source: NodeId, target: NodeId) -> bool {
    nfa.outgoing(source)
        .any(|arc| arc.target == target && arc.label == ArcLabel::Epsilon)
}

#[test]
fn leaf_is_one_arc() {
    let (nfa, start, end) = build(&sym(0));
    assert_eq!(nfa.arc_count(), 1);
    assert_eq!(nfa.outgoing(start).next().unwrap().target, end);
}

#[test]
fn sequence_chains_fresh_nodes() {
    let (nfa, _, _) = build(&BoundExpr::Sequence(vec![sym(0), sym(1), sym(2)]));
    assert_eq!(nfa.node_count(), 4);
    assert_eq!(nfa.arc_count(), 3);
}

#[test]
fn or_shares_start_and_end() {
    let (nfa, start, end) = build(&BoundExpr::Or(vec![sym(0), sym(1)]));
    assert_eq!(nfa.node_count(), 2);
    assert!(nfa.outgoing(start).all(|arc| arc.target == end));
}

#[test]
fn optional_prefers_body_over_skip() {
    let (nfa, start, end) = build(&BoundExpr::Optional(Box::new(sym(0))));
    let labels: Vec<bool> = nfa
        .outgoing(start)
        .map(|arc| arc.label == ArcLabel::Epsilon)
        .collect();
    assert_eq!(labels, vec![false, true]);
    assert!(is_epsilon(&nfa, start, end));
}

#[test]
fn loops_use_inner_nodes() {
    let (nfa, start, end) = build(&BoundExpr::ZeroOrMore(Box::new(sym(0))));
    // start, end, entry, exit
    assert_eq!(nfa.node_count(), 4);
    assert!(nfa.node(start).incoming.is_empty());
    assert!(nfa.node(end).outgoing.is_empty());
    assert!(is_epsilon(&nfa, start, end));

    let (nfa, start, end) = build(&BoundExpr::OneOrMore(Box::new(sym(0))));
    assert!(!is_epsilon(&nfa, start, end));
    assert!(nfa.node(start).incoming.is_empty());
}

#[test]
fn counted_unrolls_max_copies_with_skips_after_min() {
    let expr = BoundExpr::Counted {
        inner: Box::new(sym(0)),
        min: 2,
        max: 4,
    };
    let (nfa, _, _) = build(&expr);
    // four copies plus a skip arc for the third and fourth
    assert_eq!(nfa.arc_count(), 4 + 2);
    assert_eq!(nfa.node_count(), 5);
}

#[test]
fn action_tags_its_own_boundary() {
    let expr = BoundExpr::Action {
        inner: Box::new(BoundExpr::Sequence(vec![sym(0), sym(1)])),
        index: 2,
    };
    let (nfa, start, end) = build(&expr);
    let first = nfa.outgoing(start).next().unwrap();
    assert_eq!(
        first.actions.as_slice(),
        &[ActionMarker {
            entering: true,
            action: 2
        }]
    );
    let last = nfa.arc(nfa.node(end).incoming[0]);
    assert_eq!(
        last.actions.as_slice(),
        &[ActionMarker {
            entering: false,
            action: 2
        }]
    );
}

#[test]
fn nested_actions_tag_independently() {
    let expr = BoundExpr::Action {
        inner: Box::new(BoundExpr::Sequence(vec![
            BoundExpr::Action {
                inner: Box::new(sym(0)),
                index: 1,
            },
            sym(1),
        ])),
        index: 0,
    };
    let (nfa, start, _) = build(&expr);
    let first = nfa.outgoing(start).next().unwrap();
    let markers: Vec<String> = first.actions.iter().map(ToString::to_string).collect();
    assert_eq!(markers, vec!["+1", "-1", "+0"]);
}
