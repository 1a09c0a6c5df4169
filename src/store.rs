//! Lexicon Store
//!
//! The shared word → meanings mapping.
//!
//! ## Responsibilities
//! - Concurrent structural operations (insert/remove of whole entries)
//! - Exclusive per-entry read-modify-write for meaning-list mutation
//! - Snapshot reads (callers never observe a half-updated list)
//!
//! ## Concurrency Model
//! Two layers of protection, matching the two kinds of operation:
//!
//! - **Structural**: `DashMap` shards make insert/remove of entries atomic
//!   without a store-wide lock; operations on unrelated keys proceed in
//!   parallel.
//! - **Per-entry**: each entry owns its meaning list behind an
//!   `Arc<Mutex<_>>`. A read-modify-write clones the `Arc`, releases the
//!   map shard, and only then takes the entry mutex, so a long mutation on
//!   one word never blocks structural traffic on others.
//!
//! Two operations targeting the same word are serialized by the entry
//! mutex; a plain concurrent map alone would only cover the structural
//! layer.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;

/// A single entry's meaning list, behind its own lock
type Meanings = Arc<Mutex<Vec<String>>>;

/// Concurrent word → meanings store with per-entry mutation exclusivity
#[derive(Default)]
pub struct Lexicon {
    entries: DashMap<String, Meanings>,
}

impl Lexicon {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Look up a word, returning a snapshot of its meanings
    ///
    /// The returned list is a copy taken under the entry lock; it does not
    /// reflect mutations made after the call.
    pub fn get(&self, word: &str) -> Option<Vec<String>> {
        let meanings = self.entries.get(word)?.value().clone();
        let snapshot = meanings.lock().clone();
        Some(snapshot)
    }

    /// Insert a new entry if (and only if) the word is absent
    ///
    /// Returns true if the entry was created, false if the word already
    /// existed (in which case nothing is mutated).
    pub fn insert_new(&self, word: impl Into<String>, meanings: Vec<String>) -> bool {
        match self.entries.entry(word.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(meanings)));
                true
            }
        }
    }

    /// Remove an entry; true if the word existed
    pub fn remove(&self, word: &str) -> bool {
        self.entries.remove(word).is_some()
    }

    /// Apply `f` to a word's meaning list under that entry's exclusive lock
    ///
    /// Returns `None` if the word is absent at invocation time. `f` runs
    /// under the entry mutex and must not perform I/O. The map shard is
    /// released before the entry lock is taken, so structural operations
    /// on other keys never wait on `f`.
    pub fn mutate<R>(&self, word: &str, f: impl FnOnce(&mut Vec<String>) -> R) -> Option<R> {
        let meanings = self.entries.get(word)?.value().clone();
        let mut guard = meanings.lock();
        Some(f(&mut guard))
    }

    /// Snapshot of all words currently in the store
    ///
    /// Iteration order over the underlying concurrent map is unspecified;
    /// callers needing determinism must sort or otherwise order the result.
    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }

    /// Snapshot of all entries, each meaning list copied under its lock
    pub fn entries(&self) -> Vec<(String, Vec<String>)> {
        self.entries
            .iter()
            .map(|e| (e.key().clone(), e.value().lock().clone()))
            .collect()
    }

    /// Whether the word is present
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
