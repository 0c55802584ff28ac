//! Single-entry memo slots over a key store.
//!
//! Graph dumps are commonly grouped so the same subject or predicate repeats
//! across many consecutive lines. A [`LookupCache`] turns those runs into
//! O(1) repeats without building a full LRU: each logical lookup position
//! (subject, predicate, object) gets its own slot holding the last-seen
//! (key, id) pair.
//!
//! # Key invariants
//!
//! - Slots are independent: a repeated subject never evicts a repeated
//!   predicate's entry. Sharing one slot across positions is cache thrash.
//! - A cache is owned by its encoder and created fresh per run — never a
//!   process-wide global — so multiple encoders do not interfere.
//! - Staleness is impossible because the underlying store is read-only for
//!   the life of the run.

use chriple_dict::{Id, KeyLookup};

/// Hit/miss counters for the end-of-run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
struct Slot {
    key: String,
    id: Id,
}

/// Fixed-size set of independent single-entry memo slots.
#[derive(Debug)]
pub struct LookupCache {
    slots: Vec<Option<Slot>>,
    stats: CacheStats,
}

impl LookupCache {
    /// Create a cache with `slot_count` independent slots, all empty.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: (0..slot_count).map(|_| None).collect(),
            stats: CacheStats::default(),
        }
    }

    /// Resolve `key` through slot `slot`, querying `store` only on miss.
    ///
    /// Panics if `slot` is out of range; slot indices are fixed at encoder
    /// construction, so an out-of-range index is a programming error.
    pub fn resolve<S: KeyLookup>(&mut self, slot: usize, key: &str, store: &S) -> Id {
        if let Some(entry) = &self.slots[slot] {
            if entry.key == key {
                self.stats.hits += 1;
                return entry.id;
            }
        }

        let id = store.get(key);
        self.stats.misses += 1;
        match &mut self.slots[slot] {
            Some(entry) => {
                // Reuse the slot's allocation across runs of similar keys.
                entry.key.clear();
                entry.key.push_str(key);
                entry.id = id;
            }
            empty => {
                *empty = Some(Slot {
                    key: key.to_string(),
                    id,
                });
            }
        }
        id
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

// ===========================================================================
// Tests
// ===========================================================================
