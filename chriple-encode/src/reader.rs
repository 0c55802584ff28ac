//! Streaming triple reader over a compressed (or plain) text source.
//!
//! Finite, single-pass, not restartable: consuming the iterator twice
//! requires reopening the source. Each line splits into exactly 3 or 4
//! delimiter-separated fields; the trailing fourth field (the `.` terminator
//! of N-Triples-style dumps) is parsed and discarded. Fields are trimmed.
//! Anything else is a [`EncodeError::MalformedLine`], which the pipeline
//! handles per its configured policy.

use crate::error::{EncodeError, Result};
use crate::triple::RawTriple;
use flate2::bufread::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Field boundary of the input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Tab-separated (the RDF dump format used in practice).
    #[default]
    Tab,
    /// Space-separated (legacy format).
    Space,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Space => ' ',
        }
    }
}

/// Reader type for a gzip-compressed dump file.
pub type GzTripleReader = TripleReader<BufReader<MultiGzDecoder<BufReader<File>>>>;

/// Lazy iterator of [`RawTriple`]s over any buffered byte source.
#[derive(Debug)]
pub struct TripleReader<R: BufRead> {
    reader: R,
    delimiter: Delimiter,
    line_no: u64,
    buf: String,
}

impl<R: BufRead> TripleReader<R> {
    pub fn new(reader: R, delimiter: Delimiter) -> Self {
        Self {
            reader,
            delimiter,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// 1-based number of the last line yielded (or attempted).
    pub fn line_no(&self) -> u64 {
        self.line_no
    }

    fn parse_line(&self) -> Result<RawTriple> {
        let mut fields = self.buf.split(self.delimiter.as_char());
        let subject = fields.next().map(str::trim).unwrap_or("");
        let predicate = fields.next().map(str::trim);
        let object = fields.next().map(str::trim);
        // Fourth field, if present, is discarded; a fifth is malformed.
        let fourth = fields.next();
        let extra = fields.next();

        match (predicate, object, extra) {
            (Some(p), Some(o), None) => Ok(RawTriple {
                subject: subject.to_string(),
                predicate: p.to_string(),
                object: o.to_string(),
            }),
            _ => {
                let field_count = 1
                    + predicate.is_some() as usize
                    + object.is_some() as usize
                    + fourth.is_some() as usize
                    + extra.map_or(0, |_| 1 + fields.count());
                Err(EncodeError::MalformedLine {
                    line: self.line_no,
                    field_count,
                })
            }
        }
    }
}

impl TripleReader<BufReader<MultiGzDecoder<BufReader<File>>>> {
    /// Open a gzip-compressed dump file.
    pub fn open_gzip(path: &Path, delimiter: Delimiter) -> Result<GzTripleReader> {
        let file = BufReader::new(File::open(path)?);
        let decoder = BufReader::new(MultiGzDecoder::new(file));
        Ok(TripleReader::new(decoder, delimiter))
    }
}

impl<R: BufRead> Iterator for TripleReader<R> {
    type Item = Result<RawTriple>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_no += 1;
            while self.buf.ends_with('\n') || self.buf.ends_with('\r') {
                self.buf.pop();
            }
            // Blank lines (e.g. a trailing newline) are not triples.
            if self.buf.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line());
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
