//! Sequential scan over stored records

use std::fs::File;
use std::io::{BufReader, Read};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::format::{Header, Product, RECORD_SIZE};

use super::record_store::read_header;

/// Running totals of a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScanSummary {
    /// Records yielded
    pub active: u32,

    /// Records skipped because their active flag is clear
    pub inactive: u32,

    /// Sum of `price * stock` over yielded records
    pub total_value: f64,
}

/// Fully drained scan
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub header: Header,
    pub products: Vec<Product>,
    pub summary: ScanSummary,
}

/// Lazy iterator over the active records of a store
///
/// Reads exactly `header.record_count` records in file order. Stops after the
/// first error. Restart by calling `scan` again.
pub struct Scan {
    reader: BufReader<File>,
    header: Header,
    /// Records read so far, active or not
    position: u32,
    summary: ScanSummary,
    failed: bool,
}

impl Scan {
    /// Read and validate the header, leaving the reader at the first record
    pub(crate) fn new(file: File) -> Result<Self> {
        let mut reader = BufReader::new(file);
        let header = read_header(&mut reader)?;
        header.validate()?;

        debug!(record_count = header.record_count, "starting scan");

        Ok(Self {
            reader,
            header,
            position: 0,
            summary: ScanSummary::default(),
            failed: false,
        })
    }

    /// Header read when the scan started
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Totals over the records yielded so far
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Drain the scan, returning every active product and the final totals
    pub fn collect_all(mut self) -> Result<ScanResult> {
        let mut products = Vec::new();
        for product in self.by_ref() {
            products.push(product?);
        }

        Ok(ScanResult {
            header: self.header,
            products,
            summary: self.summary,
        })
    }

    fn read_record(&mut self) -> Result<Product> {
        let mut buf = Vec::with_capacity(RECORD_SIZE);
        self.reader
            .by_ref()
            .take(RECORD_SIZE as u64)
            .read_to_end(&mut buf)?;
        Product::decode(&buf)
    }
}

impl Iterator for Scan {
    type Item = Result<Product>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed && self.position < self.header.record_count {
            let product = match self.read_record() {
                Ok(product) => product,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };
            self.position += 1;

            if !product.active {
                self.summary.inactive += 1;
                continue;
            }

            self.summary.active += 1;
            self.summary.total_value += product.value();
            return Some(Ok(product));
        }
        None
    }
}
