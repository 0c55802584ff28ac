//! Error types for chriple-encode

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Encoding pipeline error type
#[derive(Error, Debug)]
pub enum EncodeError {
    /// An input line did not split into 3 or 4 fields.
    ///
    /// Policy-driven: the pipeline either aborts on this or skips the line
    /// and counts it — never silently ignores it.
    #[error("malformed line {line}: expected 3 or 4 fields, found {field_count}")]
    MalformedLine { line: u64, field_count: usize },

    /// A key store could not be opened (missing or corrupt file). Fatal
    /// before any processing begins.
    #[error("dictionary {} unavailable: {source}", path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        source: chriple_dict::DictError,
    },

    /// Read or write failure. Fatal; partial output must be treated as
    /// invalid by the caller.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
