//! Pattern expression tree.
//!
//! Built once by the parser, then handed to the engine for binding. The tree
//! is owned top-down; no node refers back to its parent.

use std::fmt;

/// Upper bound for both numbers of a `{m,n}` counted repetition.
///
/// Counted expressions are unrolled into `max` copies, so this also bounds
/// the NFA size contributed by a single repetition.
pub const MAX_ALLOWED_COUNT: u32 = 10;

/// One member of a `[...]` set.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SetItem {
    /// A single registered symbol.
    Literal(String),
    /// Every registered symbol whose text sorts within `low..=high`.
    Range { low: String, high: String },
}

impl SetItem {
    pub fn literal(text: impl Into<String>) -> Self {
        SetItem::Literal(text.into())
    }

    pub fn range(low: impl Into<String>, high: impl Into<String>) -> Self {
        SetItem::Range {
            low: low.into(),
            high: high.into(),
        }
    }
}

/// A node in the pattern tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// e.g. `'a'` or `NAME`
    Literal(String),
    /// Symbol range ordered by symbol text, e.g. `'a'-'f'`.
    LiteralRange { low: String, high: String },
    /// e.g. `[abc]`, `[^a-z]`, or a predefined class like `d`.
    Set { negate: bool, items: Vec<SetItem> },
    /// `.`
    Wildcard,
    /// Adjacent terms.
    Sequence(Vec<Expr>),
    /// Alternation, e.g. `a | b`.
    Or(Vec<Expr>),
    /// `e?`
    Optional(Box<Expr>),
    /// `e{min,max}`
    Counted { inner: Box<Expr>, min: u32, max: u32 },
    /// `e+`
    OneOrMore(Box<Expr>),
    /// `e*`
    ZeroOrMore(Box<Expr>),
    /// A sub-expression whose matched span is reported back to the caller.
    Action { inner: Box<Expr>, index: u32 },
}

impl Expr {
    pub fn literal(text: impl Into<String>) -> Self {
        Expr::Literal(text.into())
    }

    pub fn range(low: impl Into<String>, high: impl Into<String>) -> Self {
        Expr::LiteralRange {
            low: low.into(),
            high: high.into(),
        }
    }

    pub fn set(negate: bool, items: Vec<SetItem>) -> Self {
        Expr::Set { negate, items }
    }

    pub fn optional(inner: Expr) -> Self {
        Expr::Optional(Box::new(inner))
    }

    pub fn counted(inner: Expr, min: u32, max: u32) -> Self {
        Expr::Counted {
            inner: Box::new(inner),
            min,
            max,
        }
    }

    pub fn one_or_more(inner: Expr) -> Self {
        Expr::OneOrMore(Box::new(inner))
    }

    pub fn zero_or_more(inner: Expr) -> Self {
        Expr::ZeroOrMore(Box::new(inner))
    }

    pub fn action(inner: Expr, index: u32) -> Self {
        Expr::Action {
            inner: Box::new(inner),
            index,
        }
    }

    /// Wrap `items` in a `Sequence` unless there is exactly one.
    pub fn sequence(mut items: Vec<Expr>) -> Self {
        if items.len() == 1 {
            items.swap_remove(0)
        } else {
            Expr::Sequence(items)
        }
    }

    /// Wrap `items` in an `Or` unless there is exactly one.
    pub fn alternation(mut items: Vec<Expr>) -> Self {
        if items.len() == 1 {
            items.swap_remove(0)
        } else {
            Expr::Or(items)
        }
    }

    /// Number of action slots this tree needs (highest index + 1).
    pub fn action_count(&self) -> u32 {
        match self {
            Expr::Literal(_) | Expr::LiteralRange { .. } | Expr::Set { .. } | Expr::Wildcard => 0,
            Expr::Sequence(items) | Expr::Or(items) => {
                items.iter().map(Expr::action_count).max().unwrap_or(0)
            }
            Expr::Optional(inner)
            | Expr::OneOrMore(inner)
            | Expr::ZeroOrMore(inner)
            | Expr::Counted { inner, .. } => inner.action_count(),
            Expr::Action { inner, index } => (index + 1).max(inner.action_count()),
        }
    }

    /// Single-symbol leaves render without parentheses.
    fn is_atom(&self) -> bool {
        matches!(
            self,
            Expr::Literal(_) | Expr::LiteralRange { .. } | Expr::Set { .. } | Expr::Wildcard
        )
    }

    fn fmt_grouped(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_atom() {
            write!(f, "{self}")
        } else {
            write!(f, "({self})")
        }
    }
}

/// Write `text` as a quoted literal, escaping quotes and control characters.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in text.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            _ => write!(f, "{c}")?,
        }
    }
    f.write_str("'")
}

impl fmt::Display for SetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetItem::Literal(text) => write_quoted(f, text),
            SetItem::Range { low, high } => {
                write_quoted(f, low)?;
                f.write_str("-")?;
                write_quoted(f, high)
            }
        }
    }
}

/// Debug rendering of a pattern tree (the "dump" of a compiled pattern).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(text) => write_quoted(f, text),
            Expr::LiteralRange { low, high } => {
                write_quoted(f, low)?;
                f.write_str("-")?;
                write_quoted(f, high)
            }
            Expr::Set { negate, items } => {
                f.write_str("[")?;
                if *negate {
                    f.write_str("^")?;
                }
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Expr::Wildcard => f.write_str("."),
            Expr::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    if matches!(item, Expr::Or(_) | Expr::Sequence(_)) {
                        write!(f, "({item})")?;
                    } else {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Expr::Or(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Expr::Optional(inner) => {
                inner.fmt_grouped(f)?;
                f.write_str("?")
            }
            Expr::OneOrMore(inner) => {
                inner.fmt_grouped(f)?;
                f.write_str("+")
            }
            Expr::ZeroOrMore(inner) => {
                inner.fmt_grouped(f)?;
                f.write_str("*")
            }
            Expr::Counted { inner, min, max } => {
                inner.fmt_grouped(f)?;
                if min == max {
                    write!(f, "{{{min}}}")
                } else {
                    write!(f, "{{{min},{max}}}")
                }
            }
            Expr::Action { inner, index } => {
                write!(f, "{index}=")?;
                inner.fmt_grouped(f)
            }
        }
    }
}
