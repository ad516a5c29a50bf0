//! Fixed-width ordinal bit set, used as the label of NFA symbol arcs.
//!
//! The width is fixed at construction (`OrdinalMap::width()`, i.e. every
//! registered symbol plus the reserved unknown ordinal). Bits past the width
//! in the last word are always zero; `negate` and `full` mask them off so
//! equality and counting never see them.

use smallvec::{smallvec, SmallVec};
use std::fmt;

use crate::Ordinal;

const WORD_BITS: usize = 64;

/// Inline capacity covers a 256-symbol byte alphabet plus the unknown ordinal.
type Words = SmallVec<[u64; 5]>;

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct OrdinalSet {
    width: usize,
    words: Words,
}

impl OrdinalSet {
    /// Empty set of the given width.
    pub fn new(width: usize) -> Self {
        OrdinalSet {
            width,
            words: smallvec![0; width.div_ceil(WORD_BITS)],
        }
    }

    /// Set containing every ordinal below `width`.
    pub fn full(width: usize) -> Self {
        let mut set = OrdinalSet {
            width,
            words: smallvec![u64::MAX; width.div_ceil(WORD_BITS)],
        };
        set.clear_tail();
        set
    }

    /// Set containing exactly one ordinal.
    pub fn singleton(width: usize, ordinal: Ordinal) -> Self {
        let mut set = OrdinalSet::new(width);
        set.insert(ordinal);
        set
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Add an ordinal. Ordinals outside the width are ignored.
    pub fn insert(&mut self, ordinal: Ordinal) {
        let i = ordinal.index();
        if i < self.width {
            self.words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
        }
    }

    pub fn remove(&mut self, ordinal: Ordinal) {
        let i = ordinal.index();
        if i < self.width {
            self.words[i / WORD_BITS] &= !(1u64 << (i % WORD_BITS));
        }
    }

    #[inline]
    pub fn contains(&self, ordinal: Ordinal) -> bool {
        let i = ordinal.index();
        i < self.width && self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0
    }

    /// In-place union. Both sets must have the same width.
    pub fn union_with(&mut self, other: &OrdinalSet) {
        debug_assert_eq!(self.width, other.width, "ordinal set width mismatch");
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= *b;
        }
    }

    /// In-place intersection. Both sets must have the same width.
    pub fn intersect_with(&mut self, other: &OrdinalSet) {
        debug_assert_eq!(self.width, other.width, "ordinal set width mismatch");
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a &= *b;
        }
    }

    /// Check whether the two sets share at least one ordinal.
    pub fn intersects(&self, other: &OrdinalSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Complement within the set's width.
    pub fn negate(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.clear_tail();
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Members in ascending ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = Ordinal> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                let index = wi * WORD_BITS + bit;
                // Width is bounded by the ordinal map, which never exceeds u32.
                u32::try_from(index).ok().map(Ordinal::new)
            })
        })
    }

    fn clear_tail(&mut self) {
        let used = self.width % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}

impl fmt::Debug for OrdinalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Ordinal::raw)).finish()
    }
}
