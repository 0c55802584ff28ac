//! Triple value types shared across the pipeline.

use chriple_dict::Id;
use std::fmt;

/// A raw text triple as read from the dump.
///
/// Exactly three meaningful fields; a fourth input field, if present, was
/// parsed and discarded by the reader. Fields are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// A dictionary-encoded triple.
///
/// An id of [`chriple_dict::MISS_ID`] means the text was not in the
/// dictionary; misses are data, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedTriple {
    pub subject: Id,
    pub predicate: Id,
    pub object: Id,
}

impl fmt::Display for EncodedTriple {
    /// Wire form: three integers, single spaces, no terminator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_triple_display() {
        let t = EncodedTriple {
            subject: 5,
            predicate: 2,
            object: 7,
        };
        assert_eq!(t.to_string(), "5 2 7");
    }

    #[test]
    fn test_miss_id_displays_as_zero() {
        let t = EncodedTriple {
            subject: 0,
            predicate: 2,
            object: 7,
        };
        assert_eq!(t.to_string(), "0 2 7");
    }
}
