//! Streaming dictionary-encoding pipeline for RDF triple dumps.
//!
//! Data flow: compressed bytes → [`reader::TripleReader`] → raw text triple
//! → [`encoder::TripleEncoder`] (consulting two cached key stores) → integer
//! triple → [`writer::TripleWriter`] → compressed bytes.
//!
//! The pipeline is single-threaded and strictly sequential. Key stores are
//! opened read-only for the whole run; caches are per-encoder values. If
//! callers ever parallelize over stream segments, stores may be shared
//! across workers (queries are side-effect-free) but each worker needs its
//! own encoder — the single-slot caches rely on consecutive-key locality.

pub mod cache;
pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod triple;
pub mod writer;

pub use cache::{CacheStats, LookupCache};
pub use encoder::TripleEncoder;
pub use error::{EncodeError, Result};
pub use pipeline::{open_key_store, run, MalformedPolicy, RunReport};
pub use reader::{Delimiter, GzTripleReader, TripleReader};
pub use triple::{EncodedTriple, RawTriple};
pub use writer::{GzTripleWriter, TripleWriter};
