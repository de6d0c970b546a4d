//! Owned Set
//!
//! The user's collected ids. Kept sorted so the persisted form is stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnedSet(BTreeSet<u32>);

impl OwnedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending ids
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Copy with `id` added if absent, removed if present
    pub fn toggled(&self, id: u32) -> Self {
        let mut next = self.clone();
        if !next.0.remove(&id) {
            next.0.insert(id);
        }
        next
    }

    pub(crate) fn insert(&mut self, id: u32) {
        self.0.insert(id);
    }
}

impl FromIterator<u32> for OwnedSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
