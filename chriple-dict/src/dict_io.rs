//! Dictionary I/O: binary serialization for key stores.
//!
//! ## Format
//!
//! **Key store** (`*.dict`):
//! ```text
//! magic: "CHD1" (4B)
//! count: u64 LE
//! For each row: len: u32 LE, utf8_bytes: [u8; len]
//! ```
//!
//! Rows are written in insertion order, so row `i` holds id `i + 1`.
//! The loader enforces the UTF-8 contract at this boundary: a store with
//! invalid UTF-8 rows fails to open rather than being transcoded. A file
//! must end exactly at the last counted row; trailing bytes are rejected
//! as corruption.

use crate::error::{DictError, Result};
use crate::key_store::{KeyStore, KeyStoreBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Magic bytes for a key store file.
const DICT_MAGIC: [u8; 4] = *b"CHD1";

/// Write a builder's rows to a key store file.
pub fn write_key_store(path: &Path, builder: &KeyStoreBuilder) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(&DICT_MAGIC)?;
    out.write_all(&builder.row_count().to_le_bytes())?;
    for row in builder.rows() {
        out.write_all(&(row.len() as u32).to_le_bytes())?;
        out.write_all(row.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Parse a key store from a byte buffer.
pub fn read_key_store_from_bytes(data: &[u8]) -> Result<KeyStore> {
    if data.len() < 12 {
        return Err(DictError::corrupt("key store too small"));
    }
    if data[0..4] != DICT_MAGIC {
        return Err(DictError::corrupt("key store: invalid magic"));
    }
    let count = u64::from_le_bytes(data[4..12].try_into().unwrap());
    let mut rows = Vec::with_capacity(count.min(u32::MAX as u64) as usize);
    let mut pos = 12;
    for _ in 0..count {
        if pos + 4 > data.len() {
            return Err(DictError::corrupt("key store truncated"));
        }
        let len = u32::from_le_bytes(data[pos..pos + 4].try_into().unwrap()) as usize;
        pos += 4;
        if pos + len > data.len() {
            return Err(DictError::corrupt("key store row truncated"));
        }
        let s = std::str::from_utf8(&data[pos..pos + len])
            .map_err(|e| DictError::corrupt(format!("key store: invalid UTF-8: {}", e)))?;
        rows.push(s.to_string());
        pos += len;
    }
    if pos != data.len() {
        return Err(DictError::corrupt(
            "key store: trailing bytes after last row",
        ));
    }
    Ok(KeyStore::from_rows(rows))
}

/// Read a key store from a binary file.
pub fn read_key_store(path: &Path) -> Result<KeyStore> {
    read_key_store_from_bytes(&std::fs::read(path)?)
}

// ===========================================================================
// Tests
// ===========================================================================
