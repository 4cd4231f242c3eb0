//! Test-only container encoder. The crate itself never writes containers.

use byteorder::{BigEndian, WriteBytesExt};

use crate::format::MAGIC;

/// Appends one record: size(u64) | namelen(u16) | name | 0x00 | payload.
pub(crate) fn encode_record(out: &mut Vec<u8>, name: &[u8], payload: &[u8]) {
    out.write_u64::<BigEndian>(payload.len() as u64).unwrap();
    out.write_u16::<BigEndian>(name.len() as u16).unwrap();
    out.extend_from_slice(name);
    out.write_u8(0).unwrap();
    out.extend_from_slice(payload);
}

/// Builds a full container in memory.
pub(crate) struct ContainerBuilder {
    magic: u32,
    records: Vec<(Vec<u8>, Vec<u8>)>,
}

impl ContainerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            magic: MAGIC,
            records: Vec::new(),
        }
    }

    pub(crate) fn magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self
    }

    pub(crate) fn record(mut self, name: &[u8], payload: &[u8]) -> Self {
        self.records.push((name.to_vec(), payload.to_vec()));
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.write_u32::<BigEndian>(self.magic).unwrap();
        out.write_u32::<BigEndian>(self.records.len() as u32).unwrap();
        for (name, payload) in &self.records {
            encode_record(&mut out, name, payload);
        }
        out
    }
}

/// The three-record container used throughout the tests.
pub(crate) fn sample() -> Vec<u8> {
    ContainerBuilder::new()
        .record(b"a", b"apple")
        .record(b"bb", b"banana")
        .record(b"ccc", b"")
        .build()
}
