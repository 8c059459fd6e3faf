//! Store header
//!
//! Fixed-size metadata block at offset 0.

use bytes::{Buf, BufMut};

use crate::error::{FlatError, Result};

/// Format identifier: "PROD" read as a little-endian u32
pub const MAGIC: u32 = 0x444F_5250;

/// Header size: magic (4) + version (4) + count (4) + created (8) + modified (8) + reserved (32)
pub const HEADER_SIZE: usize = 60;

const RESERVED_LEN: usize = 32;

/// Metadata describing the records that follow it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Must equal [`MAGIC`] for the file to be accepted
    pub magic: u32,

    /// Stored, never interpreted
    pub version: u32,

    /// Number of records physically appended after the header
    pub record_count: u32,

    /// Seconds since epoch, set once
    pub created_at: u64,

    /// Seconds since epoch, bumped on every append
    pub modified_at: u64,
}

impl Header {
    /// Fresh header for an empty store
    pub fn new(version: u32, now: u64) -> Self {
        Self {
            magic: MAGIC,
            version,
            record_count: 0,
            created_at: now,
            modified_at: now,
        }
    }

    /// Encode into exactly [`HEADER_SIZE`] bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        buf.put_u32_le(self.magic);
        buf.put_u32_le(self.version);
        buf.put_u32_le(self.record_count);
        buf.put_u64_le(self.created_at);
        buf.put_u64_le(self.modified_at);
        buf.put_bytes(0, RESERVED_LEN);
        debug_assert_eq!(buf.len(), HEADER_SIZE);
        buf
    }

    /// Decode from the first [`HEADER_SIZE`] bytes of `bytes`.
    ///
    /// Does not check the magic; see [`Header::validate`].
    pub fn decode(mut bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(FlatError::Truncated {
                expected: HEADER_SIZE,
                found: bytes.len(),
            });
        }

        let header = Self {
            magic: bytes.get_u32_le(),
            version: bytes.get_u32_le(),
            record_count: bytes.get_u32_le(),
            created_at: bytes.get_u64_le(),
            modified_at: bytes.get_u64_le(),
        };
        // Reserved block is ignored on read
        bytes.advance(RESERVED_LEN);

        Ok(header)
    }

    /// Reject headers written by something other than this format
    pub fn validate(&self) -> Result<()> {
        if self.magic != MAGIC {
            return Err(FlatError::InvalidMagic { found: self.magic });
        }
        Ok(())
    }
}
