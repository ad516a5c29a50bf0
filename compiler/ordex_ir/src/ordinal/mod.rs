//! Symbol text to dense ordinal mapping.
//!
//! Ordinals are handed out in first-encounter order while patterns are being
//! registered, but the map also keeps the symbols sorted by text: literal
//! ranges enumerate registered symbols in that sort order, not by ordinal.
//!
//! Once frozen (at engine bind time) the map has `N` entries with ordinals
//! `0..N`, and ordinal `N` is reserved for "a symbol never seen during
//! binding".

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

/// Dense identifier of a registered symbol.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Ordinal(u32);

impl Ordinal {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Ordinal(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a new symbol could not be registered.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum InsertError {
    /// The map is frozen.
    Frozen { symbol: String },
    /// Every ordinal below the reserved one is taken.
    Full { symbol: String },
}

impl InsertError {
    pub fn symbol(&self) -> &str {
        match self {
            InsertError::Frozen { symbol } | InsertError::Full { symbol } => symbol,
        }
    }
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::Frozen { symbol } => write!(
                f,
                "cannot register symbol `{symbol}`: the ordinal map is already bound"
            ),
            InsertError::Full { symbol } => write!(
                f,
                "cannot register symbol `{symbol}`: no ordinals left"
            ),
        }
    }
}

impl std::error::Error for InsertError {}

/// Growing map from symbol text to ordinal, ordered by text.
#[derive(Clone, Default, Debug)]
pub struct OrdinalMap {
    /// Sorted view used for lookups and range enumeration.
    by_text: BTreeMap<String, Ordinal>,
    /// Reverse table, indexed by ordinal.
    texts: Vec<String>,
    /// Next free ordinal, reserved for unknown symbols.
    unknown: Ordinal,
    frozen: bool,
}

impl OrdinalMap {
    pub fn new() -> Self {
        OrdinalMap::default()
    }

    /// Number of registered symbols (`N`).
    #[inline]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Bit width of an ordinal set over this map: every symbol plus "unknown".
    #[inline]
    pub fn width(&self) -> usize {
        self.texts.len() + 1
    }

    /// The reserved ordinal for symbols never registered.
    #[inline]
    pub fn unknown(&self) -> Ordinal {
        self.unknown
    }

    /// Get the ordinal of `text`, registering it with the next free ordinal
    /// if absent. Registering an already-present symbol never changes it.
    pub fn insert(&mut self, text: &str) -> Result<Ordinal, InsertError> {
        if let Some(&ordinal) = self.by_text.get(text) {
            return Ok(ordinal);
        }
        if self.frozen {
            return Err(InsertError::Frozen {
                symbol: text.to_owned(),
            });
        }
        let ordinal = self.unknown;
        let Some(next) = ordinal.raw().checked_add(1) else {
            return Err(InsertError::Full {
                symbol: text.to_owned(),
            });
        };
        self.texts.push(text.to_owned());
        self.by_text.insert(text.to_owned(), ordinal);
        self.unknown = Ordinal::new(next);
        Ok(ordinal)
    }

    /// Get the ordinal of a registered symbol.
    #[inline]
    pub fn get(&self, text: &str) -> Option<Ordinal> {
        self.by_text.get(text).copied()
    }

    /// Get the ordinal of `text`, or the reserved unknown ordinal.
    #[inline]
    pub fn lookup(&self, text: &str) -> Ordinal {
        self.get(text).unwrap_or_else(|| self.unknown())
    }

    /// Symbol text of a registered ordinal.
    pub fn text(&self, ordinal: Ordinal) -> Option<&str> {
        self.texts.get(ordinal.index()).map(String::as_str)
    }

    /// Registered symbols whose text lies in `low..=high`, in text order.
    ///
    /// Returns nothing when `low > high`.
    pub fn range<'a>(&'a self, low: &'a str, high: &'a str) -> impl Iterator<Item = Ordinal> + 'a {
        let bounds = if low <= high {
            Some((Bound::Included(low), Bound::Included(high)))
        } else {
            None
        };
        bounds
            .into_iter()
            .flat_map(move |bounds| self.by_text.range::<str, _>(bounds).map(|(_, &o)| o))
    }

    /// All `(text, ordinal)` pairs in text order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Ordinal)> {
        self.by_text.iter().map(|(text, &o)| (text.as_str(), o))
    }

    /// Stop accepting new symbols. Lookups of existing ones keep working.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

#[cfg(test)]
mod tests;
