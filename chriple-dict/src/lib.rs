//! Persistent text → id dictionaries for chriple encoding.
//!
//! A chriple corpus replaces every textual noun and predicate with a small
//! integer id. This crate owns the two persistent lookup structures behind
//! that replacement: the build-side [`KeyStoreBuilder`], the read-side
//! [`KeyStore`], and their on-disk format ([`dict_io`]).

pub mod dict_io;
pub mod error;
pub mod key_store;

pub use error::{DictError, Result};
pub use key_store::{Id, KeyLookup, KeyStore, KeyStoreBuilder, MISS_ID};
