//! SIRF binary layout constants and header read helpers.
//!
//! All integers are big-endian and nothing is padded:
//!
//! ```text
//! container: [magic: u32][recordcnt: u32][record 0][record 1]...
//! record:    [size: u64][namelen: u16][name: namelen bytes][0x00][payload: size bytes]
//! ```

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::SirfError;

/// Magic number identifying SIRF containers (ASCII "SIRF").
pub const MAGIC: u32 = 0x5349_5246;

/// Size of the container header in bytes: 4 (`magic`) + 4 (`recordcnt`).
pub const CONTAINER_HEADER_BYTES: usize = 4 + 4;

/// Size of a record header in bytes: 8 (`size`) + 2 (`namelen`).
pub const RECORD_HEADER_BYTES: usize = 8 + 2;

/// Builds a [`SirfError::Truncated`] for a read of `needed` bytes at `offset`.
pub(crate) fn truncated(buf: &[u8], offset: usize, needed: u64) -> SirfError {
    SirfError::Truncated {
        offset,
        needed,
        available: buf.len().saturating_sub(offset),
    }
}

/// The fixed header at the start of every container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Format identifier, expected to equal [`MAGIC`].
    pub magic: u32,
    /// Number of records that follow the header.
    pub recordcnt: u32,
}

impl ContainerHeader {
    /// Reads the container header from the first 8 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`SirfError::Truncated`] if `buf` is shorter than
    /// [`CONTAINER_HEADER_BYTES`]. The magic value is not checked here.
    pub fn read_from(buf: &[u8]) -> Result<Self, SirfError> {
        let short = |_| truncated(buf, 0, CONTAINER_HEADER_BYTES as u64);
        let mut rdr = buf;
        let magic = rdr.read_u32::<BigEndian>().map_err(short)?;
        let recordcnt = rdr.read_u32::<BigEndian>().map_err(short)?;
        Ok(Self { magic, recordcnt })
    }
}

/// The fixed part of a record, preceding its name and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Payload length in bytes.
    pub size: u64,
    /// Name length in bytes, excluding the null terminator.
    pub namelen: u16,
}

impl RecordHeader {
    /// Reads a record header starting at `offset` in `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`SirfError::Truncated`] if fewer than
    /// [`RECORD_HEADER_BYTES`] bytes remain at `offset`.
    pub fn read_at(buf: &[u8], offset: usize) -> Result<Self, SirfError> {
        let short = |_| truncated(buf, offset, RECORD_HEADER_BYTES as u64);
        let mut rdr = buf.get(offset..).unwrap_or_default();
        let size = rdr.read_u64::<BigEndian>().map_err(short)?;
        let namelen = rdr.read_u16::<BigEndian>().map_err(short)?;
        Ok(Self { size, namelen })
    }

    /// Total bytes the record occupies: header + payload + name + terminator.
    ///
    /// Saturates at `u64::MAX`, so a corrupt `size` produces a span that no
    /// buffer can hold rather than wrapping around.
    pub fn total_size(&self) -> u64 {
        (RECORD_HEADER_BYTES as u64)
            .saturating_add(self.size)
            .saturating_add(u64::from(self.namelen))
            .saturating_add(1)
    }

    /// Offset of the terminator byte, relative to the record start.
    pub fn terminator_start(&self) -> usize {
        RECORD_HEADER_BYTES + usize::from(self.namelen)
    }

    /// Offset of the first payload byte, relative to the record start.
    pub fn payload_start(&self) -> usize {
        self.terminator_start() + 1
    }
}
