//! Store Module
//!
//! Flat record store: one header followed by fixed-width product records.
//!
//! ## Responsibilities
//! - Create the store file with an empty header
//! - Append records and keep `record_count` in step with them
//! - Replay records in insertion order, skipping inactive ones
//! - Aggregate inventory value while scanning
//!
//! ## Lifecycle
//! ```text
//!   create ──► (append)* ──► (scan)*
//! ```
//! Append and scan reopen the file on every call; nothing is held between
//! operations and there is no locking. One writer, no concurrent readers.

mod record_store;
mod scan;

use std::path::Path;

use crate::error::Result;
use crate::format::{Header, Product};

pub use record_store::{RecordStore, StoreInfo};
pub use scan::{Scan, ScanResult, ScanSummary};

/// Create (or truncate) a store at `path` with default config
pub fn create(path: impl AsRef<Path>) -> Result<Header> {
    RecordStore::new(path.as_ref()).create()
}

/// Append a product to the store at `path`, creating it if missing
pub fn append(path: impl AsRef<Path>, product: &Product) -> Result<u32> {
    RecordStore::new(path.as_ref()).append(product)
}

/// Lazily scan the active products of the store at `path`
pub fn scan(path: impl AsRef<Path>) -> Result<Scan> {
    RecordStore::new(path.as_ref()).scan()
}
