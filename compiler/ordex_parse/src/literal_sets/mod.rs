//! Named literal-set macros.
//!
//! A literal set gives a name to a group of symbols. When a pattern names
//! the set, the parser expands it into an unordered `Set` of its members.
//! Members that name an earlier set are expanded when the new set is added,
//! so a stored set only ever holds plain symbols.

use rustc_hash::FxHashMap;
use tracing::trace;

#[derive(Clone, Debug, Default)]
pub struct LiteralSets {
    sets: FxHashMap<String, Vec<String>>,
}

impl LiteralSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `name` as the set of `members`.
    ///
    /// Returns `false` if `name` is already defined; the existing definition
    /// is kept.
    pub fn add<S: AsRef<str>>(&mut self, name: &str, members: &[S]) -> bool {
        if self.sets.contains_key(name) {
            return false;
        }

        let mut expanded: Vec<String> = Vec::with_capacity(members.len());
        for member in members {
            let member = member.as_ref();
            match self.sets.get(member) {
                Some(inner) => {
                    for symbol in inner {
                        if !expanded.contains(symbol) {
                            expanded.push(symbol.clone());
                        }
                    }
                }
                None => {
                    if !expanded.iter().any(|s| s == member) {
                        expanded.push(member.to_owned());
                    }
                }
            }
        }

        trace!(name, members = expanded.len(), "literal set added");
        self.sets.insert(name.to_owned(), expanded);
        true
    }

    /// Members of a defined set.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.sets.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
