//! On-disk Format Module
//!
//! Byte-exact encoding of the store header and product records.
//!
//! ## Responsibilities
//! - Fixed-width, padding-free, little-endian layout
//! - Explicit encode/decode (never relies on compiler struct layout)
//! - Silent truncation of text fields to their capacity
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ Header (60 bytes, offset 0)                                │
//! │ ┌─────────┬───────────┬──────────┬──────────┬────────────┐ │
//! │ │Magic (4)│Version (4)│ Count (4)│Created(8)│Modified (8)│ │
//! │ └─────────┴───────────┴──────────┴──────────┴────────────┘ │
//! │ ┌────────────────────────────────────────────────────────┐ │
//! │ │ Reserved (32, zero-filled)                             │ │
//! │ └────────────────────────────────────────────────────────┘ │
//! ├────────────────────────────────────────────────────────────┤
//! │ Record 0 (103 bytes, offset 60)                            │
//! │ ┌────────┬──────────┬──────────────┬─────────┬─────────┬──┐│
//! │ │Code (4)│ Name (60)│ Category (30)│Price (4)│Stock (4)│A ││
//! │ └────────┴──────────┴──────────────┴─────────┴─────────┴──┘│
//! ├────────────────────────────────────────────────────────────┤
//! │ Record 1 (offset 60 + 103)                                 │
//! │ ... (record_count records total)                           │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod header;
mod record;
mod text;

pub use header::{Header, HEADER_SIZE, MAGIC};
pub use record::{Product, CATEGORY_LEN, NAME_LEN, RECORD_SIZE};
pub use text::truncate_field;

/// Version written into headers of newly created stores
pub const FORMAT_VERSION: u32 = 1;

/// Byte offset of the record at `index`
pub fn record_offset(index: u32) -> u64 {
    HEADER_SIZE as u64 + index as u64 * RECORD_SIZE as u64
}
