//! # SIRF — Simple Indexed Record File
//!
//! Read-side support for SIRF containers: a flat, self-describing buffer
//! holding a sequence of named, variable-length opaque records. Records are
//! retrieved by name or by 0-based position, as zero-copy slices of the
//! caller's buffer.
//!
//! ## Layout
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ HEADER (8 bytes)                              │
//! │                                               │
//! │ magic (u32) "SIRF" | recordcnt (u32)          │
//! ├───────────────────────────────────────────────┤
//! │ RECORDS (contiguous, no padding)              │
//! │                                               │
//! │ size (u64) | namelen (u16) | name | 0x00      │
//! │ payload (size bytes)                          │
//! │                                               │
//! │ ... repeated recordcnt times ...              │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! All integers are big-endian. A record occupies
//! `10 + namelen + 1 + size` bytes, and the next record starts immediately
//! after it.
//!
//! How the buffer is obtained (read from disk, mapped, received over the
//! network) is up to the caller; this crate never performs I/O and never
//! writes containers.
//!
//! ## Example
//! ```rust
//! let mut buf = b"SIRF".to_vec();
//! buf.extend_from_slice(&1u32.to_be_bytes());
//! buf.extend_from_slice(&5u64.to_be_bytes());
//! buf.extend_from_slice(&4u16.to_be_bytes());
//! buf.extend_from_slice(b"logo\0hello");
//!
//! let container = sirf::Container::parse(&buf).unwrap();
//! assert_eq!(container.get_payload("logo").unwrap(), b"hello");
//! assert_eq!(container.index(0).unwrap().name_bytes(), b"logo");
//! assert!(container.index(1).is_err());
//! ```

mod container;
mod error;
mod format;
mod options;
mod record;
mod scan;

#[cfg(test)]
mod testutil;

pub use container::{find_record, get_payload, index, Container, ContainerSummary};
pub use error::SirfError;
pub use format::{
    ContainerHeader, RecordHeader, CONTAINER_HEADER_BYTES, MAGIC, RECORD_HEADER_BYTES,
};
pub use options::ReadOptions;
pub use record::RecordHandle;
pub use scan::Records;
