//! Two-phase ordinal binding.
//!
//! [`setup_bind`] walks a pattern tree and registers every literal it names
//! in the shared [`OrdinalMap`]. Once every pattern sharing the alphabet has
//! been set up, the map is frozen and [`Binder::bind`] resolves each tree to
//! a [`BoundExpr`] whose leaves are concrete [`OrdinalSet`]s.
//!
//! NFA generation only accepts `BoundExpr`, so an unbound tree can never
//! reach it.

use ordex_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use ordex_ir::stack::ensure_sufficient_stack;
use ordex_ir::{Expr, InsertError, Ordinal, OrdinalMap, OrdinalSet, SetItem};

/// A pattern tree with every leaf resolved to the ordinals it accepts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BoundExpr {
    /// `Literal`, `LiteralRange`, `Set` and `Wildcard` all bind to one set.
    Symbols(OrdinalSet),
    Sequence(Vec<BoundExpr>),
    Or(Vec<BoundExpr>),
    Optional(Box<BoundExpr>),
    Counted {
        inner: Box<BoundExpr>,
        min: u32,
        max: u32,
    },
    OneOrMore(Box<BoundExpr>),
    ZeroOrMore(Box<BoundExpr>),
    Action {
        inner: Box<BoundExpr>,
        index: u32,
    },
}

/// Register every literal symbol of `expr` in `map`.
///
/// Symbols are inserted in traversal order. Symbols already present keep
/// their ordinal, so running this twice changes nothing.
pub fn setup_bind(expr: &Expr, map: &mut OrdinalMap) -> Result<(), InsertError> {
    ensure_sufficient_stack(|| match expr {
        Expr::Literal(text) => map.insert(text).map(drop),
        Expr::LiteralRange { low, high } => {
            map.insert(low)?;
            map.insert(high).map(drop)
        }
        Expr::Set { items, .. } => {
            for item in items {
                match item {
                    SetItem::Literal(text) => {
                        map.insert(text)?;
                    }
                    SetItem::Range { low, high } => {
                        map.insert(low)?;
                        map.insert(high)?;
                    }
                }
            }
            Ok(())
        }
        Expr::Wildcard => Ok(()),
        Expr::Sequence(items) | Expr::Or(items) => {
            items.iter().try_for_each(|item| setup_bind(item, map))
        }
        Expr::Optional(inner)
        | Expr::OneOrMore(inner)
        | Expr::ZeroOrMore(inner)
        | Expr::Counted { inner, .. }
        | Expr::Action { inner, .. } => setup_bind(inner, map),
    })
}

/// Resolves pattern trees against a frozen ordinal map.
pub struct Binder<'a> {
    map: &'a OrdinalMap,
    queue: &'a mut DiagnosticQueue,
}

impl<'a> Binder<'a> {
    pub fn new(map: &'a OrdinalMap, queue: &'a mut DiagnosticQueue) -> Self {
        Binder { map, queue }
    }

    /// Bind `expr`, stopping at the first leaf that fails.
    pub fn bind(&mut self, expr: &Expr) -> Result<BoundExpr, ErrorGuaranteed> {
        ensure_sufficient_stack(|| {
            let bound = match expr {
                Expr::Literal(text) => BoundExpr::Symbols(self.literal_set(text)?),
                Expr::LiteralRange { low, high } => {
                    BoundExpr::Symbols(self.range_set(low, high)?)
                }
                Expr::Set { negate, items } => {
                    let mut set = OrdinalSet::new(self.map.width());
                    for item in items {
                        let item_set = match item {
                            SetItem::Literal(text) => self.literal_set(text)?,
                            SetItem::Range { low, high } => self.range_set(low, high)?,
                        };
                        set.union_with(&item_set);
                    }
                    if *negate {
                        set.negate();
                    }
                    BoundExpr::Symbols(set)
                }
                Expr::Wildcard => BoundExpr::Symbols(OrdinalSet::full(self.map.width())),
                Expr::Sequence(items) => BoundExpr::Sequence(self.bind_all(items)?),
                Expr::Or(items) => BoundExpr::Or(self.bind_all(items)?),
                Expr::Optional(inner) => BoundExpr::Optional(Box::new(self.bind(inner)?)),
                Expr::Counted { inner, min, max } => BoundExpr::Counted {
                    inner: Box::new(self.bind(inner)?),
                    min: *min,
                    max: *max,
                },
                Expr::OneOrMore(inner) => BoundExpr::OneOrMore(Box::new(self.bind(inner)?)),
                Expr::ZeroOrMore(inner) => BoundExpr::ZeroOrMore(Box::new(self.bind(inner)?)),
                Expr::Action { inner, index } => BoundExpr::Action {
                    inner: Box::new(self.bind(inner)?),
                    index: *index,
                },
            };
            Ok(bound)
        })
    }

    fn bind_all(&mut self, items: &[Expr]) -> Result<Vec<BoundExpr>, ErrorGuaranteed> {
        items.iter().map(|item| self.bind(item)).collect()
    }

    fn ordinal(&mut self, text: &str) -> Result<Ordinal, ErrorGuaranteed> {
        match self.map.get(text) {
            Some(ordinal) => Ok(ordinal),
            None => Err(self.queue.emit_error(
                Diagnostic::error(ErrorCode::E2002)
                    .with_message(format!("symbol `{text}` was never registered"))
                    .with_note("every pattern must be set up before the engine is bound"),
            )),
        }
    }

    fn literal_set(&mut self, text: &str) -> Result<OrdinalSet, ErrorGuaranteed> {
        let ordinal = self.ordinal(text)?;
        Ok(OrdinalSet::singleton(self.map.width(), ordinal))
    }

    /// Every registered symbol sorting within `low..=high`.
    ///
    /// Fails unless `high` sorts strictly after `low`.
    fn range_set(&mut self, low: &str, high: &str) -> Result<OrdinalSet, ErrorGuaranteed> {
        self.ordinal(low)?;
        self.ordinal(high)?;
        if high <= low {
            return Err(self.queue.emit_error(
                Diagnostic::error(ErrorCode::E2001)
                    .with_message(format!("invalid range `{low}`-`{high}`"))
                    .with_note("the upper bound must sort after the lower bound"),
            ));
        }
        let mut set = OrdinalSet::new(self.map.width());
        for ordinal in self.map.range(low, high) {
            set.insert(ordinal);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests;
