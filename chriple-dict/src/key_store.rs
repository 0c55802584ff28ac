//! Key ↔ id dictionaries: build-side `KeyStoreBuilder` and read-side `KeyStore`.
//!
//! A key store maps an exact text key (noun or predicate surface form) to a
//! small integer id assigned at build time. Two independent instances exist
//! in practice — one for nouns, one for predicates — but they are
//! structurally identical.
//!
//! # Lifecycle
//!
//! 1. **Build** → `KeyStoreBuilder::insert` / `insert_unique` over the whole
//!    corpus, ids assigned sequentially from 1.
//! 2. **Persist** → `dict_io::write_key_store` writes rows in insertion order.
//! 3. **Encode** → `dict_io::read_key_store` loads a read-only `KeyStore`;
//!    `get` is deterministic and side-effect-free for the entire run.
//!
//! # Key invariants
//!
//! - Id 0 is reserved as the miss sentinel ([`MISS_ID`]); real ids start at 1.
//! - Keys match byte-for-byte; no normalization is performed.
//! - Duplicate rows are tolerated on the read side: the first-inserted id
//!   wins. The builder never dedupes rows (`insert` is append-only and not
//!   idempotent); `insert_unique` is the build-pass entry point that skips
//!   keys already present.

use std::collections::HashMap;

/// Integer identifier assigned to a key at dictionary-build time.
pub type Id = u64;

/// Sentinel id meaning "unknown/unmapped key" (lookup miss).
pub const MISS_ID: Id = 0;

/// Point lookup over a key dictionary.
///
/// The seam between the lookup cache and the store: encoding code is generic
/// over this trait so tests can substitute a counting store.
pub trait KeyLookup {
    /// Return the id for an exact textual match, or [`MISS_ID`] if the key
    /// was never inserted.
    fn get(&self, key: &str) -> Id;
}

// ---------------------------------------------------------------------------
// KeyStore (read side)
// ---------------------------------------------------------------------------

/// Read-only key → id dictionary for the encoding run.
///
/// Holds the reverse map of a persisted store. When the persisted rows
/// contain duplicates for a key, the first-inserted id wins.
#[derive(Debug, Default)]
pub struct KeyStore {
    reverse: HashMap<String, Id>,
    row_count: u64,
}

impl KeyStore {
    /// Build a store from rows in insertion order. Row `i` holds id `i + 1`.
    ///
    /// Used by `dict_io` when loading a persisted store and by tests.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut reverse = HashMap::new();
        let mut row_count: u64 = 0;
        for row in rows {
            row_count += 1;
            // First-inserted id wins for duplicate keys.
            reverse.entry(row.into()).or_insert(row_count);
        }
        Self { reverse, row_count }
    }

    /// Look up a key. Returns [`MISS_ID`] on miss.
    pub fn get(&self, key: &str) -> Id {
        self.reverse.get(key).copied().unwrap_or(MISS_ID)
    }

    /// True if the key has an entry.
    pub fn contains(&self, key: &str) -> bool {
        self.reverse.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// True if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// Number of persisted rows, counting duplicates.
    pub fn row_count(&self) -> u64 {
        self.row_count
    }
}

impl KeyLookup for KeyStore {
    fn get(&self, key: &str) -> Id {
        KeyStore::get(self, key)
    }
}

// ---------------------------------------------------------------------------
// KeyStoreBuilder (build side)
// ---------------------------------------------------------------------------

/// Append-only dictionary builder for the bulk build pass.
///
/// `insert` assigns the next sequential id starting at 1 and is NOT
/// idempotent: inserting the same key twice appends two rows with two
/// different ids. Rebuilding into a non-empty builder is therefore the
/// caller's bug; the build pass uses `insert_unique`, which returns the
/// existing id instead of appending. There is no delete.
#[derive(Debug, Default)]
pub struct KeyStoreBuilder {
    rows: Vec<String>,
    reverse: HashMap<String, Id>,
}

impl KeyStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row and assign the next sequential id.
    ///
    /// Duplicate keys get duplicate rows; the reverse map keeps the
    /// first-inserted id, matching the read-side policy.
    pub fn insert(&mut self, key: &str) -> Id {
        self.rows.push(key.to_string());
        let id = self.rows.len() as Id;
        *self.reverse.entry(key.to_string()).or_insert(id)
    }

    /// Insert only if the key has no entry yet; returns the key's id either way.
    pub fn insert_unique(&mut self, key: &str) -> Id {
        if let Some(&id) = self.reverse.get(key) {
            return id;
        }
        self.insert(key)
    }

    /// Look up a key without inserting. Returns [`MISS_ID`] on miss.
    pub fn get(&self, key: &str) -> Id {
        self.reverse.get(key).copied().unwrap_or(MISS_ID)
    }

    /// Number of rows appended so far (counting duplicates).
    pub fn row_count(&self) -> u64 {
        self.rows.len() as u64
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in insertion order (row `i` holds id `i + 1`).
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|s| s.as_str())
    }

    /// Convert into a read-side store without a round-trip through disk.
    pub fn into_key_store(self) -> KeyStore {
        KeyStore {
            row_count: self.rows.len() as u64,
            reverse: self.reverse,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
