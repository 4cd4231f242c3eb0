use std::fmt;

use crate::error::SirfError;
use crate::format::{RecordHeader, RECORD_HEADER_BYTES};

/// A located record inside a container buffer.
///
/// Handles are produced only by the scanner after the record's whole span
/// has been checked against the buffer length, so the accessors below never
/// need to re-validate. The `'a` lifetime ties the handle (and every slice
/// it hands out) to the caller's buffer.
#[derive(Clone, Copy)]
pub struct RecordHandle<'a> {
    buf: &'a [u8],
    offset: usize,
    header: RecordHeader,
}

impl<'a> RecordHandle<'a> {
    /// Caller guarantees `offset + header.total_size() <= buf.len()`.
    pub(crate) fn new(buf: &'a [u8], offset: usize, header: RecordHeader) -> Self {
        Self {
            buf,
            offset,
            header,
        }
    }

    /// Byte offset of the record header within the container buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The parsed record header.
    pub fn header(&self) -> RecordHeader {
        self.header
    }

    /// Name length in bytes, excluding the terminator.
    pub fn name_len(&self) -> usize {
        usize::from(self.header.namelen)
    }

    /// Payload length in bytes.
    pub fn payload_len(&self) -> usize {
        // Fits: the whole span was bounds-checked against the buffer.
        self.header.size as usize
    }

    /// Bytes occupied by the record, header included.
    pub fn total_size(&self) -> u64 {
        self.header.total_size()
    }

    /// Absolute offset of the first name byte.
    pub fn name_offset(&self) -> usize {
        self.offset + RECORD_HEADER_BYTES
    }

    /// Absolute offset of the terminator byte that follows the name.
    pub fn terminator_offset(&self) -> usize {
        self.offset + self.header.terminator_start()
    }

    /// Absolute offset of the first payload byte.
    pub fn payload_offset(&self) -> usize {
        self.offset + self.header.payload_start()
    }

    /// The record name, without its null terminator.
    pub fn name_bytes(&self) -> &'a [u8] {
        let start = self.name_offset();
        &self.buf[start..start + self.name_len()]
    }

    /// The record name as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`SirfError::InvalidName`] if the name is not valid UTF-8.
    /// Names carry no mandated encoding, so this is only a convenience.
    pub fn name_str(&self) -> Result<&'a str, SirfError> {
        Ok(std::str::from_utf8(self.name_bytes())?)
    }

    /// The opaque payload, borrowed from the container buffer.
    pub fn payload_bytes(&self) -> &'a [u8] {
        let start = self.payload_offset();
        &self.buf[start..start + self.payload_len()]
    }

    pub(crate) fn terminator(&self) -> u8 {
        self.buf[self.terminator_offset()]
    }
}

impl fmt::Debug for RecordHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordHandle")
            .field("offset", &self.offset)
            .field("name", &String::from_utf8_lossy(self.name_bytes()))
            .field("size", &self.header.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::encode_record;

    fn handle_at(buf: &[u8], offset: usize) -> RecordHandle<'_> {
        let header = RecordHeader::read_at(buf, offset).unwrap();
        assert!(offset as u64 + header.total_size() <= buf.len() as u64);
        RecordHandle::new(buf, offset, header)
    }

    #[test]
    fn name_and_payload_slices() {
        let mut buf = Vec::new();
        encode_record(&mut buf, b"config", b"\x01\x02\x03");
        let rec = handle_at(&buf, 0);

        assert_eq!(rec.name_bytes(), b"config");
        assert_eq!(rec.name_str().unwrap(), "config");
        assert_eq!(rec.payload_bytes(), b"\x01\x02\x03");
        assert_eq!(rec.terminator(), 0);
        assert_eq!(rec.total_size(), 10 + 6 + 1 + 3);
    }

    #[test]
    fn payload_offset_includes_record_header() {
        let mut buf = vec![0xFF; 8];
        encode_record(&mut buf, b"ab", b"xyz");
        let rec = handle_at(&buf, 8);

        assert_eq!(rec.name_offset(), 8 + 10);
        assert_eq!(rec.terminator_offset(), 8 + 10 + 2);
        assert_eq!(rec.payload_offset(), 8 + 10 + 2 + 1);
        assert_eq!(rec.payload_bytes(), b"xyz");
    }

    #[test]
    fn empty_name_and_payload() {
        let mut buf = Vec::new();
        encode_record(&mut buf, b"", b"");
        let rec = handle_at(&buf, 0);

        assert!(rec.name_bytes().is_empty());
        assert!(rec.payload_bytes().is_empty());
        assert_eq!(rec.name_len(), 0);
        assert_eq!(rec.payload_len(), 0);
    }

    #[test]
    fn non_utf8_name_is_reported() {
        let mut buf = Vec::new();
        encode_record(&mut buf, &[0xC3, 0x28], b"v");
        let rec = handle_at(&buf, 0);

        assert_eq!(rec.name_bytes(), &[0xC3, 0x28]);
        assert!(matches!(rec.name_str(), Err(SirfError::InvalidName(_))));
    }

    #[test]
    fn debug_shows_metadata_not_payload() {
        let mut buf = Vec::new();
        encode_record(&mut buf, b"blob", &[7u8; 64]);
        let dbg = format!("{:?}", handle_at(&buf, 0));
        assert!(dbg.contains("blob"));
        assert!(dbg.contains("size: 64"));
    }
}
