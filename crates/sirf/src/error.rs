use std::str::Utf8Error;

use thiserror::Error;

/// Errors produced while reading a SIRF container.
///
/// Every variant is recoverable: a malformed buffer is reported to the caller
/// and never read past its end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SirfError {
    /// No record with the requested name exists in the container.
    #[error("record not found")]
    NotFound,

    /// A positional lookup asked for a record past the end of the container.
    #[error("record index {index} out of range (container holds {count} records)")]
    OutOfRange { index: u64, count: u32 },

    /// A header or record span would extend past the end of the buffer.
    #[error("truncated container: {needed} bytes needed at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: u64,
        available: usize,
    },

    /// The container header does not start with the expected magic value.
    #[error("invalid magic: found {found:#010x}, expected {expected:#010x}")]
    BadMagic { found: u32, expected: u32 },

    /// The byte following a record name is not a null terminator.
    #[error("missing name terminator at offset {offset}")]
    BadTerminator { offset: usize },

    /// A record name is not valid UTF-8.
    #[error("record name is not valid utf-8: {0}")]
    InvalidName(#[from] Utf8Error),
}
