//! Record Store
//!
//! File-level create / append / lookup operations.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::config::{Config, SyncStrategy};
use crate::error::{FlatError, Result};
use crate::format::{record_offset, Header, Product, HEADER_SIZE};

use super::scan::Scan;

/// Handle on a flat record store file
///
/// Holds only the path and config. Every operation opens the file, does its
/// work and drops the handle before returning, on success and error alike.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Location of the store file
    path: PathBuf,

    /// Store configuration
    config: Config,
}

/// Snapshot of a store's header and physical state
#[derive(Debug, Clone, PartialEq)]
pub struct StoreInfo {
    pub header: Header,

    /// Records with the active flag set
    pub active: u32,

    /// Records kept on disk but hidden from scans
    pub inactive: u32,

    /// Sum of `price * stock` over active records
    pub total_value: f64,

    /// Actual file length in bytes
    pub file_len: u64,

    /// Length implied by the header's record count
    pub expected_len: u64,
}

impl StoreInfo {
    /// Whether the file length agrees with the header's record count
    pub fn is_consistent(&self) -> bool {
        self.file_len == self.expected_len
    }
}

impl RecordStore {
    /// Store at `path` with default config
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, Config::default())
    }

    /// Store at `path` with an explicit config
    pub fn with_config(path: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Create or truncate the file and write an empty header
    pub fn create(&self) -> Result<Header> {
        let mut file = File::create(&self.path)?;
        let header = Header::new(self.config.format_version, unix_now());

        file.write_all(&header.encode())?;
        self.sync(&file)?;

        debug!(path = %self.path.display(), version = header.version, "created store");
        Ok(header)
    }

    /// Append a product and return its record index.
    ///
    /// The stored record is always active, whatever `product.active` says.
    /// A missing file is created first. The record is written right after the
    /// last counted record, then the header is rewritten in place. A crash
    /// between the two writes leaves the header understating the records on
    /// disk; the next append overwrites the uncounted tail.
    pub fn append(&self, product: &Product) -> Result<u32> {
        let mut file = match self.open_rw() {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.create()?;
                self.open_rw()?
            }
            Err(e) => return Err(e.into()),
        };

        let mut header = read_header(&mut file)?;
        header.validate()?;

        let index = header.record_count;
        let next_count = index.checked_add(1).ok_or(FlatError::Overflow)?;
        let offset = record_offset(index);

        let file_len = file.metadata()?.len();
        if file_len < offset {
            return Err(FlatError::Truncated {
                expected: offset as usize,
                found: file_len as usize,
            });
        }
        if file_len > offset {
            warn!(
                path = %self.path.display(),
                file_len,
                expected = offset,
                "bytes past the last counted record will be overwritten"
            );
        }

        let mut record = product.clone();
        record.active = true;

        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&record.encode())?;
        if file_len > offset {
            file.set_len(record_offset(next_count))?;
        }

        header.record_count = next_count;
        header.modified_at = unix_now();
        file.seek(SeekFrom::Start(0))?;
        file.write_all(&header.encode())?;
        self.sync(&file)?;

        debug!(
            path = %self.path.display(),
            index,
            code = record.code,
            "appended record"
        );
        Ok(index)
    }

    /// Start a lazy scan over active records
    pub fn scan(&self) -> Result<Scan> {
        let file = self.open_read()?;
        Scan::new(file)
    }

    /// First active product with the given code
    pub fn find(&self, code: u32) -> Result<Option<Product>> {
        for product in self.scan()? {
            let product = product?;
            if product.code == code {
                return Ok(Some(product));
            }
        }
        Ok(None)
    }

    /// Read and validate the header only
    pub fn header(&self) -> Result<Header> {
        let mut file = self.open_read()?;
        let header = read_header(&mut file)?;
        header.validate()?;
        Ok(header)
    }

    /// Header plus record counts and file length
    pub fn info(&self) -> Result<StoreInfo> {
        let file_len = std::fs::metadata(&self.path)
            .map_err(|e| self.not_found_or(e))?
            .len();

        let result = self.scan()?.collect_all()?;
        let header = result.header;

        Ok(StoreInfo {
            header,
            active: result.summary.active,
            inactive: result.summary.inactive,
            total_value: result.summary.total_value,
            file_len,
            expected_len: record_offset(header.record_count),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the store file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn open_rw(&self) -> io::Result<File> {
        OpenOptions::new().read(true).write(true).open(&self.path)
    }

    fn open_read(&self) -> Result<File> {
        File::open(&self.path).map_err(|e| self.not_found_or(e))
    }

    fn not_found_or(&self, err: io::Error) -> FlatError {
        if err.kind() == io::ErrorKind::NotFound {
            FlatError::NotFound(self.path.clone())
        } else {
            FlatError::Io(err)
        }
    }

    fn sync(&self, file: &File) -> Result<()> {
        if self.config.sync_strategy == SyncStrategy::EveryAppend {
            file.sync_all()?;
        }
        Ok(())
    }
}

/// Read up to [`HEADER_SIZE`] bytes from the current position and decode them
pub(crate) fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    let mut buf = Vec::with_capacity(HEADER_SIZE);
    reader.by_ref().take(HEADER_SIZE as u64).read_to_end(&mut buf)?;
    Header::decode(&buf)
}

/// Seconds since the Unix epoch
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
