//! The encoding run: read line → encode → write line, strictly sequential.
//!
//! No internal concurrency and no buffering of in-flight triples beyond what
//! the stream/compression layers do. No retries anywhere: all I/O is local
//! and deterministic, so the only recovery behavior is the configurable
//! skip-on-malformed-line.

use crate::cache::CacheStats;
use crate::encoder::TripleEncoder;
use crate::error::{EncodeError, Result};
use crate::reader::TripleReader;
use crate::writer::TripleWriter;
use chriple_dict::{dict_io, KeyLookup, KeyStore};
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// What to do with a line that does not split into 3 or 4 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Fail fast on the first malformed line.
    #[default]
    Abort,
    /// Skip the line, count it, and report the count at the end.
    Skip,
}

/// Counters for a completed encoding run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunReport {
    pub triples_written: u64,
    pub lines_skipped: u64,
    pub noun_cache: CacheStats,
    pub predicate_cache: CacheStats,
}

/// Open a key store read-only for the run.
///
/// A missing or corrupt store is [`EncodeError::DictionaryUnavailable`] —
/// fatal before any processing begins.
pub fn open_key_store(path: &Path) -> Result<KeyStore> {
    dict_io::read_key_store(path).map_err(|source| EncodeError::DictionaryUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Drive the full pipeline to completion.
///
/// The caller still owns sink finalization (gzip trailer); this only
/// flushes. On error, partial output is invalid and the run must be
/// repeated — there is no resumability.
pub fn run<R, N, P, W>(
    reader: TripleReader<R>,
    encoder: &mut TripleEncoder<'_, N, P>,
    writer: &mut TripleWriter<W>,
    policy: MalformedPolicy,
) -> Result<RunReport>
where
    R: BufRead,
    N: KeyLookup,
    P: KeyLookup,
    W: Write,
{
    let start = Instant::now();
    let mut lines_skipped: u64 = 0;

    for item in reader {
        match item {
            Ok(raw) => {
                let encoded = encoder.encode(&raw);
                writer.write(&encoded)?;
            }
            Err(EncodeError::MalformedLine { line, field_count })
                if policy == MalformedPolicy::Skip =>
            {
                warn!(line, field_count, "skipping malformed line");
                lines_skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    writer.flush()?;

    let (noun_cache, predicate_cache) = encoder.cache_stats();
    let report = RunReport {
        triples_written: writer.written(),
        lines_skipped,
        noun_cache,
        predicate_cache,
    };

    let secs = start.elapsed().as_secs_f64();
    info!(
        "encoded {} triples in {:.1}s ({:.2}M triples/s), {} lines skipped, noun cache {}/{} hits, predicate cache {}/{} hits",
        report.triples_written,
        secs,
        report.triples_written as f64 / secs.max(f64::EPSILON) / 1_000_000.0,
        report.lines_skipped,
        report.noun_cache.hits,
        report.noun_cache.hits + report.noun_cache.misses,
        report.predicate_cache.hits,
        report.predicate_cache.hits + report.predicate_cache.misses,
    );

    Ok(report)
}

// ===========================================================================
// Tests
// ===========================================================================
