//! Tests for the on-disk format
//!
//! These tests verify:
//! - Header and record widths
//! - Encoded bytes land at fixed offsets
//! - Text truncation at field capacity
//! - Decoding of hand-built buffers

use flatstore::format::{
    record_offset, truncate_field, Header, Product, CATEGORY_LEN, HEADER_SIZE, MAGIC, NAME_LEN,
    RECORD_SIZE,
};
use flatstore::FlatError;

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_sizes() {
    assert_eq!(HEADER_SIZE, 60);
    assert_eq!(RECORD_SIZE, 103);
    assert_eq!(Header::new(1, 0).encode().len(), HEADER_SIZE);
    assert_eq!(Product::new(1, "a", "b", 1.0, 1).encode().len(), RECORD_SIZE);
}

#[test]
fn test_record_offsets() {
    assert_eq!(record_offset(0), 60);
    assert_eq!(record_offset(1), 163);
    assert_eq!(record_offset(5), 60 + 5 * 103);
}

#[test]
fn test_magic_spells_prod() {
    assert_eq!(&MAGIC.to_le_bytes(), b"PROD");
}

// =============================================================================
// Header Tests
// =============================================================================

#[test]
fn test_header_new_is_empty() {
    let header = Header::new(1, 1_700_000_000);

    assert_eq!(header.magic, MAGIC);
    assert_eq!(header.version, 1);
    assert_eq!(header.record_count, 0);
    assert_eq!(header.created_at, 1_700_000_000);
    assert_eq!(header.modified_at, 1_700_000_000);
}

#[test]
fn test_header_decode_hand_built() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&MAGIC.to_le_bytes());
    bytes.extend_from_slice(&7u32.to_le_bytes());
    bytes.extend_from_slice(&12u32.to_le_bytes());
    bytes.extend_from_slice(&100u64.to_le_bytes());
    bytes.extend_from_slice(&200u64.to_le_bytes());
    bytes.extend_from_slice(&[0xAA; 32]); // reserved contents are ignored

    let header = Header::decode(&bytes).unwrap();

    assert_eq!(header.version, 7);
    assert_eq!(header.record_count, 12);
    assert_eq!(header.created_at, 100);
    assert_eq!(header.modified_at, 200);
    assert!(header.validate().is_ok());
}

#[test]
fn test_header_version_passes_through() {
    let header = Header::new(99, 5);
    let decoded = Header::decode(&header.encode()).unwrap();

    assert_eq!(decoded.version, 99);
    assert!(decoded.validate().is_ok());
}

#[test]
fn test_header_reserved_zeroed() {
    let bytes = Header::new(1, 123).encode();
    assert!(bytes[28..60].iter().all(|&b| b == 0));
}

// =============================================================================
// Record Tests
// =============================================================================

#[test]
fn test_product_new_truncates_long_text() {
    let long_name = "N".repeat(200);
    let long_category = "C".repeat(200);

    let product = Product::new(1, &long_name, &long_category, 1.0, 1);

    assert_eq!(product.name.len(), NAME_LEN - 1);
    assert_eq!(product.category.len(), CATEGORY_LEN - 1);
}

#[test]
fn test_encode_truncates_even_without_new() {
    let product = Product {
        code: 9,
        name: "x".repeat(NAME_LEN * 2),
        category: "y".repeat(CATEGORY_LEN * 2),
        price: 2.5,
        stock: 4,
        active: true,
    };

    let bytes = product.encode();
    assert_eq!(bytes.len(), RECORD_SIZE);

    let decoded = Product::decode(&bytes).unwrap();
    assert_eq!(decoded.name, "x".repeat(NAME_LEN - 1));
    assert_eq!(decoded.category, "y".repeat(CATEGORY_LEN - 1));
    assert_eq!(decoded.code, 9);
    assert_eq!(decoded.stock, 4);
}

#[test]
fn test_decode_preserves_fields() {
    let product = Product::new(100003, "Monitor Dell 27\"", "Electronice", 1200.0, 20);
    let decoded = Product::decode(&product.encode()).unwrap();

    assert_eq!(decoded, product);
}

#[test]
fn test_decode_inactive_flag() {
    let mut product = Product::new(5, "Old", "Misc", 1.0, 1);
    product.active = false;

    let decoded = Product::decode(&product.encode()).unwrap();
    assert!(!decoded.active);
}

#[test]
fn test_decode_invalid_utf8_is_lossy() {
    let mut bytes = Product::new(1, "ok", "cat", 1.0, 1).encode();
    bytes[4] = 0xFF;

    let decoded = Product::decode(&bytes).unwrap();
    assert_eq!(decoded.name, "\u{FFFD}k");
}

#[test]
fn test_decode_truncated_record() {
    let bytes = Product::new(1, "a", "b", 1.0, 1).encode();
    let err = Product::decode(&bytes[..RECORD_SIZE - 1]).unwrap_err();

    assert!(matches!(err, FlatError::Truncated { .. }));
}

#[test]
fn test_truncate_field_multibyte() {
    // 29 two-byte chars fill 58 bytes; a 30th would leave no room for the NUL
    let name = "ă".repeat(40);
    let truncated = truncate_field(&name, NAME_LEN);

    assert_eq!(truncated.len(), 58);
    assert_eq!(truncated.chars().count(), 29);
}
