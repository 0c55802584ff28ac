//! Error types for chriple-dict

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, DictError>;

/// Dictionary error type
#[derive(Error, Debug)]
pub enum DictError {
    /// Underlying file I/O failed (missing store, unreadable file, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but does not parse (bad magic, truncation,
    /// invalid UTF-8)
    #[error("corrupt dictionary: {0}")]
    Corrupt(String),
}

impl DictError {
    /// Create a corrupt-store error
    pub fn corrupt(msg: impl Into<String>) -> Self {
        DictError::Corrupt(msg.into())
    }
}
