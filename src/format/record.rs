//! Product record
//!
//! One fixed-width entry following the header.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};

use crate::error::{FlatError, Result};

use super::text::{get_text, put_text, truncate_field};

/// Capacity of the name field, including its NUL terminator
pub const NAME_LEN: usize = 60;

/// Capacity of the category field, including its NUL terminator
pub const CATEGORY_LEN: usize = 30;

/// Record size: code (4) + name (60) + category (30) + price (4) + stock (4) + active (1)
pub const RECORD_SIZE: usize = 4 + NAME_LEN + CATEGORY_LEN + 4 + 4 + 1;

/// A single inventory product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Intended to be unique; the store does not enforce it
    pub code: u32,
    pub name: String,
    pub category: String,
    pub price: f32,
    pub stock: u32,

    /// Inactive records are skipped by scans but still occupy storage
    pub active: bool,
}

impl Product {
    /// Build an active product, truncating text to what the layout can hold
    pub fn new(
        code: u32,
        name: impl AsRef<str>,
        category: impl AsRef<str>,
        price: f32,
        stock: u32,
    ) -> Self {
        Self {
            code,
            name: truncate_field(name.as_ref(), NAME_LEN).to_string(),
            category: truncate_field(category.as_ref(), CATEGORY_LEN).to_string(),
            price,
            stock,
            active: true,
        }
    }

    /// Inventory value of this product: `price * stock`
    pub fn value(&self) -> f64 {
        self.price as f64 * self.stock as f64
    }

    /// Encode into exactly [`RECORD_SIZE`] bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(RECORD_SIZE);
        self.encode_into(&mut buf);
        buf
    }

    /// Append the encoded record to `buf`
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.code);
        put_text(buf, &self.name, NAME_LEN);
        put_text(buf, &self.category, CATEGORY_LEN);
        buf.put_f32_le(self.price);
        buf.put_u32_le(self.stock);
        buf.put_u8(u8::from(self.active));
    }

    /// Decode from the first [`RECORD_SIZE`] bytes of `bytes`
    pub fn decode(mut bytes: &[u8]) -> Result<Self> {
        if bytes.len() < RECORD_SIZE {
            return Err(FlatError::Truncated {
                expected: RECORD_SIZE,
                found: bytes.len(),
            });
        }

        Ok(Self {
            code: bytes.get_u32_le(),
            name: get_text(&mut bytes, NAME_LEN),
            category: get_text(&mut bytes, CATEGORY_LEN),
            price: bytes.get_f32_le(),
            stock: bytes.get_u32_le(),
            active: bytes.get_u8() != 0,
        })
    }
}
