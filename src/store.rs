use std::collections::{HashMap, HashSet};

use crate::{MvError, Result};

/// An in-memory multi-value dictionary: each key maps to a set of
/// unique string members.
///
/// The mapping itself is the single source of truth for key existence.
/// A key is created implicitly by the first [`add`](Self::add) and
/// removed implicitly when its last member is removed, so a present key
/// always holds at least one member. Queries return owned copies; the
/// internal mapping is never exposed for aliasing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MultiValueStore {
    entries: HashMap<String, HashSet<String>>,
}

impl MultiValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all keys, or `None` if the store is empty.
    ///
    /// Whole-store emptiness is a valid steady state, which is why this
    /// is an `Option` rather than an error. No ordering guarantee.
    pub fn keys(&self) -> Option<Vec<String>> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.keys().cloned().collect())
    }

    /// Returns a copy of the member set for `key`.
    ///
    /// Unlike [`keys`](Self::keys), asking for a specific missing key is
    /// an error, not an empty result.
    pub fn members(&self, key: &str) -> Result<HashSet<String>> {
        self.entries
            .get(key)
            .cloned()
            .ok_or(MvError::KeyNotFound)
    }

    /// Inserts `member` into `key`'s set, creating the key if absent.
    ///
    /// Fails with [`MvError::ValueExists`] if the member is already
    /// present under the key; the store is unchanged on failure.
    pub fn add(&mut self, key: String, member: String) -> Result<()> {
        let set = self.entries.entry(key).or_default();
        if !set.insert(member) {
            return Err(MvError::ValueExists);
        }
        Ok(())
    }

    /// Removes `member` from `key`'s set.
    ///
    /// If the member was the last one under the key, the key is removed
    /// entirely. Fails with [`MvError::KeyNotFound`] or
    /// [`MvError::ValueNotFound`]; the store is unchanged on failure.
    pub fn remove(&mut self, key: &str, member: &str) -> Result<()> {
        let set = self.entries.get_mut(key).ok_or(MvError::KeyNotFound)?;
        if !set.remove(member) {
            return Err(MvError::ValueNotFound);
        }
        if set.is_empty() {
            self.entries.remove(key);
        }
        Ok(())
    }

    /// Deletes `key` and all of its members.
    ///
    /// Fails with [`MvError::KeyNotFound`] if the key is absent.
    pub fn remove_all(&mut self, key: &str) -> Result<()> {
        self.entries
            .remove(key)
            .map(|_| ())
            .ok_or(MvError::KeyNotFound)
    }

    /// Resets the store to empty. Always succeeds, idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns whether `key` is present. Never errors.
    pub fn key_exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns whether `member` is present under `key`. `false` if the
    /// key itself is absent. Never errors.
    pub fn value_exists(&self, key: &str, member: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|set| set.contains(member))
    }

    /// Returns every member across every key flattened into one list,
    /// or `None` if the store is empty.
    ///
    /// This is a multiset flattening: the same string appearing under
    /// two keys appears twice in the result. Order is unspecified.
    pub fn all_members(&self) -> Option<Vec<String>> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.values().flatten().cloned().collect())
    }

    /// Returns a snapshot of the full key to member-set mapping, or
    /// `None` if the store is empty.
    ///
    /// The snapshot is an owned copy, so mutating it cannot corrupt the
    /// store's invariants.
    pub fn items(&self) -> Option<HashMap<String, HashSet<String>>> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.clone())
    }

    /// Returns the members common to `key_a` and `key_b`.
    ///
    /// An absent key is treated as an empty set, so absent inputs yield
    /// an empty intersection rather than an error.
    pub fn intersection(&self, key_a: &str, key_b: &str) -> HashSet<String> {
        match (self.entries.get(key_a), self.entries.get(key_b)) {
            (Some(a), Some(b)) => a.intersection(b).cloned().collect(),
            _ => HashSet::new(),
        }
    }

    /// Returns the number of keys in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
