use tracing::{debug, warn};

use crate::error::SirfError;
use crate::format::{ContainerHeader, CONTAINER_HEADER_BYTES};
use crate::options::ReadOptions;
use crate::record::RecordHandle;
use crate::scan::{find_by_name, index_by_position, Records};

/// A read-only view over a SIRF container held in a caller-owned buffer.
///
/// [`parse`](Container::parse) validates the header once; every lookup after
/// that walks the records from the first one, checking each span against the
/// buffer length. Nothing is copied or allocated: handles and payload slices
/// borrow the original buffer, so they cannot outlive it.
///
/// `Container` is `Copy` and holds only shared references, so any number of
/// threads may query the same buffer concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Container<'a> {
    data: &'a [u8],
    header: ContainerHeader,
    options: ReadOptions,
}

/// Result of a full validation walk, see [`Container::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSummary {
    /// Number of records walked.
    pub records: u32,
    /// Bytes covered by the header and all records.
    pub used_bytes: usize,
    /// Bytes after the last record, ignored by lookups.
    pub trailing_bytes: usize,
}

impl<'a> Container<'a> {
    /// Parses the container header with default [`ReadOptions`].
    ///
    /// # Errors
    ///
    /// - [`SirfError::Truncated`] if `data` is shorter than the 8-byte header.
    /// - [`SirfError::BadMagic`] if the header does not start with `"SIRF"`.
    pub fn parse(data: &'a [u8]) -> Result<Self, SirfError> {
        Self::parse_with(data, ReadOptions::default())
    }

    /// Parses the container header using `options`.
    ///
    /// Records are not touched here; they are validated lazily as lookups
    /// walk over them, or all at once by [`validate`](Container::validate).
    pub fn parse_with(data: &'a [u8], options: ReadOptions) -> Result<Self, SirfError> {
        let header = ContainerHeader::read_from(data).map_err(|err| {
            warn!(bytes = data.len(), error = %err, "sirf container header unreadable");
            err
        })?;

        if options.check_magic && header.magic != options.magic {
            let err = SirfError::BadMagic {
                found: header.magic,
                expected: options.magic,
            };
            warn!(error = %err, "rejecting sirf container");
            return Err(err);
        }

        debug!(
            records = header.recordcnt,
            bytes = data.len(),
            "parsed sirf container header"
        );
        Ok(Self {
            data,
            header,
            options,
        })
    }

    /// The magic value stored in the header.
    pub fn magic(&self) -> u32 {
        self.header.magic
    }

    /// Number of records the header declares.
    pub fn len(&self) -> usize {
        self.header.recordcnt as usize
    }

    /// Returns `true` if the header declares zero records.
    pub fn is_empty(&self) -> bool {
        self.header.recordcnt == 0
    }

    /// The underlying buffer.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Iterates over every record in scan order.
    ///
    /// Yields at most [`len`](Container::len) items; the first error ends the
    /// iteration.
    pub fn records(&self) -> Records<'a> {
        Records::new(self.data, self.header.recordcnt, self.options.check_terminator)
    }

    /// Finds a record by exact name.
    ///
    /// Names are compared byte for byte, terminator excluded. If several
    /// records share a name, the first one in scan order (lowest offset) is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`SirfError::NotFound`] if no record has this name.
    /// - [`SirfError::Truncated`] / [`SirfError::BadTerminator`] if the walk
    ///   reaches a malformed record before finding a match.
    pub fn find_record<N: AsRef<[u8]>>(&self, name: N) -> Result<RecordHandle<'a>, SirfError> {
        find_by_name(self.records(), name.as_ref())
    }

    /// Returns the payload of the record named `name`.
    ///
    /// Same lookup and errors as [`find_record`](Container::find_record).
    pub fn get_payload<N: AsRef<[u8]>>(&self, name: N) -> Result<&'a [u8], SirfError> {
        self.find_record(name).map(|record| record.payload_bytes())
    }

    /// Returns the record at 0-based `position`.
    ///
    /// # Errors
    ///
    /// - [`SirfError::OutOfRange`] if `position >= len()`.
    /// - [`SirfError::Truncated`] / [`SirfError::BadTerminator`] if any record
    ///   up to and including `position` is malformed.
    pub fn index(&self, position: u64) -> Result<RecordHandle<'a>, SirfError> {
        index_by_position(self.records(), self.header.recordcnt, position)
    }

    /// Walks every record and checks that the buffer holds all of them.
    ///
    /// # Errors
    ///
    /// Returns the first [`SirfError::Truncated`] or
    /// [`SirfError::BadTerminator`] encountered.
    pub fn validate(&self) -> Result<ContainerSummary, SirfError> {
        let mut used_bytes = CONTAINER_HEADER_BYTES;
        for record in self.records() {
            used_bytes += record?.total_size() as usize;
        }
        let summary = ContainerSummary {
            records: self.header.recordcnt,
            used_bytes,
            trailing_bytes: self.data.len() - used_bytes,
        };
        debug!(
            records = summary.records,
            used_bytes = summary.used_bytes,
            trailing_bytes = summary.trailing_bytes,
            "validated sirf container"
        );
        Ok(summary)
    }
}

/// Finds the record named `name` in `data`.
///
/// Parses the header with default [`ReadOptions`] and delegates to
/// [`Container::find_record`].
pub fn find_record<N: AsRef<[u8]>>(data: &[u8], name: N) -> Result<RecordHandle<'_>, SirfError> {
    Container::parse(data)?.find_record(name)
}

/// Returns the payload of the record named `name` in `data`.
pub fn get_payload<N: AsRef<[u8]>>(data: &[u8], name: N) -> Result<&[u8], SirfError> {
    Container::parse(data)?.get_payload(name)
}

/// Returns the record at 0-based `position` in `data`.
pub fn index(data: &[u8], position: u64) -> Result<RecordHandle<'_>, SirfError> {
    Container::parse(data)?.index(position)
}
