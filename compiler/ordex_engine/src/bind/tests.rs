#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

fn map_of(symbols: &[&str]) -> OrdinalMap {
    let mut map = OrdinalMap::new();
    for symbol in symbols {
        map.insert(symbol).unwrap();
    }
    map.freeze();
    map
}

fn bind_one(expr: &Expr, map: &OrdinalMap) -> (Result<BoundExpr, ErrorGuaranteed>, DiagnosticQueue) {
    let mut queue = DiagnosticQueue::new();
    let result = Binder::new(map, &mut queue).bind(expr);
    (result, queue)
}

fn symbols(bound: BoundExpr) -> OrdinalSet {
    match bound {
        BoundExpr::Symbols(set) => set,
        other => panic!("expected a symbol set, got {other:?}"),
    }
}

fn raw(set: &OrdinalSet) -> Vec<u32> {
    set.iter().map(Ordinal::raw).collect()
}

#[test]
fn setup_bind_registers_in_traversal_order() {
    let expr = Expr::Sequence(vec![
        Expr::literal("b"),
        Expr::set(false, vec![SetItem::literal("a"), SetItem::range("c", "e")]),
        Expr::one_or_more(Expr::range("x", "z")),
    ]);
    let mut map = OrdinalMap::new();
    setup_bind(&expr, &mut map).unwrap();
    let order: Vec<&str> = (0..map.len())
        .map(|i| map.text(Ordinal::new(i as u32)).unwrap())
        .collect();
    assert_eq!(order, vec!["b", "a", "c", "e", "x", "z"]);
}

#[test]
fn setup_bind_is_idempotent() {
    let expr = Expr::Sequence(vec![Expr::literal("a"), Expr::literal("b")]);
    let mut map = OrdinalMap::new();
    setup_bind(&expr, &mut map).unwrap();
    let before: Vec<(String, Ordinal)> = map.iter().map(|(t, o)| (t.to_string(), o)).collect();
    setup_bind(&expr, &mut map).unwrap();
    let after: Vec<(String, Ordinal)> = map.iter().map(|(t, o)| (t.to_string(), o)).collect();
    assert_eq!(before, after);
    assert_eq!(map.len(), 2);
}

#[test]
fn setup_bind_on_frozen_map_fails_for_new_symbols() {
    let mut map = map_of(&["a"]);
    assert!(setup_bind(&Expr::literal("a"), &mut map).is_ok());
    assert_eq!(
        setup_bind(&Expr::literal("b"), &mut map),
        Err(InsertError::Frozen {
            symbol: "b".to_string()
        })
    );
}

#[test]
fn literal_binds_to_single_ordinal() {
    let map = map_of(&["a", "b"]);
    let (result, _) = bind_one(&Expr::literal("b"), &map);
    let set = symbols(result.unwrap());
    assert_eq!(set.width(), 3);
    assert_eq!(raw(&set), vec![1]);
}

#[test]
fn range_follows_text_order_not_ordinals() {
    // Registration order differs from text order on purpose.
    let map = map_of(&["e", "a", "c", "b", "d"]);
    let (result, _) = bind_one(&Expr::range("b", "d"), &map);
    let set = symbols(result.unwrap());
    let texts: Vec<&str> = set.iter().map(|o| map.text(o).unwrap()).collect();
    assert_eq!(texts, vec!["c", "b", "d"]);
}

#[test]
fn range_with_high_not_above_low_fails() {
    let map = map_of(&["a", "b"]);
    for expr in [Expr::range("b", "a"), Expr::range("a", "a")] {
        let (result, queue) = bind_one(&expr, &map);
        assert!(result.is_err());
        assert!(queue.contains_code(ErrorCode::E2001));
    }
}

#[test]
fn unregistered_symbol_fails() {
    let map = map_of(&["a"]);
    let (result, queue) = bind_one(&Expr::literal("zz"), &map);
    assert!(result.is_err());
    assert!(queue.contains_code(ErrorCode::E2002));
}

#[test]
fn negated_set_includes_unknown() {
    let map = map_of(&["a", "b", "c"]);
    let expr = Expr::set(true, vec![SetItem::literal("a")]);
    let (result, _) = bind_one(&expr, &map);
    let set = symbols(result.unwrap());
    assert!(!set.contains(map.lookup("a")));
    assert!(set.contains(map.lookup("b")));
    assert!(set.contains(map.unknown()));
    assert_eq!(set.count(), 3);
}

#[test]
fn wildcard_is_every_ordinal() {
    let map = map_of(&["a", "b"]);
    let (result, _) = bind_one(&Expr::Wildcard, &map);
    assert_eq!(raw(&symbols(result.unwrap())), vec![0, 1, 2]);
}

#[test]
fn composite_failure_short_circuits() {
    let map = map_of(&["a", "b"]);
    let expr = Expr::Sequence(vec![
        Expr::range("b", "a"),
        Expr::literal("missing"),
    ]);
    let (result, queue) = bind_one(&expr, &map);
    assert!(result.is_err());
    assert_eq!(queue.error_count(), 1);
    assert!(queue.contains_code(ErrorCode::E2001));
}

#[test]
fn composites_keep_their_shape() {
    let map = map_of(&["a"]);
    let expr = Expr::action(Expr::counted(Expr::literal("a"), 1, 2), 0);
    let (result, _) = bind_one(&expr, &map);
    let single = OrdinalSet::singleton(2, Ordinal::new(0));
    assert_eq!(
        result.unwrap(),
        BoundExpr::Action {
            inner: Box::new(BoundExpr::Counted {
                inner: Box::new(BoundExpr::Symbols(single)),
                min: 1,
                max: 2,
            }),
            index: 0,
        }
    );
}
