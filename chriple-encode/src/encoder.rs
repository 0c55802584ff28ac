//! The triple encoder: raw text triple → integer triple.
//!
//! Subject and object resolve against the noun store through two distinct
//! cache slots (within one triple they are frequently different keys, so a
//! shared slot would thrash); the predicate resolves against the predicate
//! store through its own cache. A resolution miss is NOT an error: id 0 is
//! propagated into the output, signaling "this text was not in the
//! dictionary" — the pipeline is best-effort lossy compression of a corpus
//! that may predate or outgrow the dictionaries.

use crate::cache::{CacheStats, LookupCache};
use crate::triple::{EncodedTriple, RawTriple};
use chriple_dict::KeyLookup;

/// Noun-cache slot for the subject position.
const SUBJECT_SLOT: usize = 0;
/// Noun-cache slot for the object position.
const OBJECT_SLOT: usize = 1;
/// Predicate-cache slot (the only one).
const PREDICATE_SLOT: usize = 0;

/// Dictionary encoder over two read-only key stores.
///
/// Owns its caches (fresh per run, never global), borrows the stores.
#[derive(Debug)]
pub struct TripleEncoder<'a, N: KeyLookup, P: KeyLookup> {
    nouns: &'a N,
    predicates: &'a P,
    noun_cache: LookupCache,
    predicate_cache: LookupCache,
}

impl<'a, N: KeyLookup, P: KeyLookup> TripleEncoder<'a, N, P> {
    pub fn new(nouns: &'a N, predicates: &'a P) -> Self {
        Self {
            nouns,
            predicates,
            noun_cache: LookupCache::new(2),
            predicate_cache: LookupCache::new(1),
        }
    }

    /// Encode one triple. Never fails; misses become id 0.
    pub fn encode(&mut self, raw: &RawTriple) -> EncodedTriple {
        EncodedTriple {
            subject: self
                .noun_cache
                .resolve(SUBJECT_SLOT, &raw.subject, self.nouns),
            predicate: self
                .predicate_cache
                .resolve(PREDICATE_SLOT, &raw.predicate, self.predicates),
            object: self.noun_cache.resolve(OBJECT_SLOT, &raw.object, self.nouns),
        }
    }

    /// Cache counters as `(noun, predicate)` for the run report.
    pub fn cache_stats(&self) -> (CacheStats, CacheStats) {
        (self.noun_cache.stats(), self.predicate_cache.stats())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
