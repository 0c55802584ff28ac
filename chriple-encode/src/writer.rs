//! Streaming triple writer over any byte sink.
//!
//! Decouples "produce a result" from "where it goes": the sink may be a
//! gzip-compressed file or plain standard output. Writes are buffered and
//! flushed in streaming fashion; the whole output is never materialized.
//! A gzip sink is only a valid artifact after [`TripleWriter::finish`] has
//! written the trailer — on the fatal-error path the partial file must be
//! treated as invalid and the run repeated.

use crate::error::Result;
use crate::triple::EncodedTriple;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writer type for a gzip-compressed output file.
pub type GzTripleWriter = TripleWriter<GzEncoder<BufWriter<File>>>;

/// Serializes encoded triples one per line: `"{s} {p} {o}\n"`.
#[derive(Debug)]
pub struct TripleWriter<W: Write> {
    out: W,
    written: u64,
}

impl<W: Write> TripleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Write one encoded triple, newline-terminated.
    pub fn write(&mut self, triple: &EncodedTriple) -> io::Result<()> {
        writeln!(self.out, "{triple}")?;
        self.written += 1;
        Ok(())
    }

    /// Flush buffered bytes to the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Number of triples written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Unwrap the sink (tests inspect the buffer this way).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TripleWriter<GzEncoder<BufWriter<File>>> {
    /// Create a gzip-compressed output file.
    pub fn create_gzip(path: &Path) -> Result<GzTripleWriter> {
        let file = BufWriter::new(File::create(path)?);
        Ok(TripleWriter::new(GzEncoder::new(
            file,
            Compression::default(),
        )))
    }

    /// Write the gzip trailer and flush. Returns the triple count.
    pub fn finish(self) -> io::Result<u64> {
        let written = self.written;
        self.out.finish()?.flush()?;
        Ok(written)
    }
}

impl TripleWriter<BufWriter<io::Stdout>> {
    /// Write uncompressed triples to standard output.
    pub fn stdout() -> Self {
        TripleWriter::new(BufWriter::new(io::stdout()))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
