//! Forward-only, bounds-checked traversal of the records in a container.

use std::iter::FusedIterator;

use tracing::{trace, warn};

use crate::error::SirfError;
use crate::format::{truncated, RecordHeader, CONTAINER_HEADER_BYTES};
use crate::record::RecordHandle;

/// Iterator over the records of a container, in scan order.
///
/// The cursor starts right after the container header and advances by each
/// record's [`total_size`](RecordHeader::total_size). Before a record is
/// yielded its full span is checked against the buffer length, so a
/// truncated or corrupt container produces an error instead of an
/// out-of-bounds read. After the first error the iterator is exhausted.
pub struct Records<'a> {
    buf: &'a [u8],
    offset: usize,
    remaining: u32,
    check_terminator: bool,
    failed: bool,
}

impl<'a> Records<'a> {
    pub(crate) fn new(buf: &'a [u8], recordcnt: u32, check_terminator: bool) -> Self {
        Self {
            buf,
            offset: CONTAINER_HEADER_BYTES,
            remaining: recordcnt,
            check_terminator,
            failed: false,
        }
    }

    /// Current cursor position: the offset of the next record header.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn step(&mut self) -> Result<RecordHandle<'a>, SirfError> {
        let header = RecordHeader::read_at(self.buf, self.offset)?;
        let span = header.total_size();
        let available = self.buf.len().saturating_sub(self.offset);
        if span > available as u64 {
            return Err(truncated(self.buf, self.offset, span));
        }

        let record = RecordHandle::new(self.buf, self.offset, header);
        if self.check_terminator && record.terminator() != 0 {
            return Err(SirfError::BadTerminator {
                offset: record.terminator_offset(),
            });
        }

        trace!(
            offset = self.offset,
            namelen = header.namelen,
            size = header.size,
            "visiting sirf record"
        );
        // span <= available, so it fits in usize.
        self.offset += span as usize;
        Ok(record)
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<RecordHandle<'a>, SirfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match self.step() {
            Ok(record) => Some(Ok(record)),
            Err(err) => {
                warn!(offset = self.offset, error = %err, "malformed sirf container");
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.remaining as usize))
        }
    }
}

impl FusedIterator for Records<'_> {}

/// Returns the first record, in scan order, whose name equals `name`.
pub(crate) fn find_by_name<'a>(
    records: Records<'a>,
    name: &[u8],
) -> Result<RecordHandle<'a>, SirfError> {
    for record in records {
        let record = record?;
        if record.name_bytes() == name {
            return Ok(record);
        }
    }
    Err(SirfError::NotFound)
}

/// Returns the record at 0-based `position`, skipping exactly `position`
/// records from the first one.
pub(crate) fn index_by_position(
    mut records: Records<'_>,
    recordcnt: u32,
    position: u64,
) -> Result<RecordHandle<'_>, SirfError> {
    let out_of_range = SirfError::OutOfRange {
        index: position,
        count: recordcnt,
    };
    if position >= u64::from(recordcnt) {
        return Err(out_of_range);
    }

    // position < recordcnt <= u32::MAX
    for skipped in records.by_ref().take(position as usize) {
        skipped?;
    }
    records.next().unwrap_or(Err(out_of_range))
}
