//! Fixed-capacity NUL-terminated text fields

use bytes::{Buf, BufMut};

/// Longest prefix of `s` that fits a field of `capacity` bytes with a
/// trailing NUL, cut at the first embedded NUL and on a char boundary.
pub fn truncate_field(s: &str, capacity: usize) -> &str {
    let s = s.split('\0').next().unwrap_or("");
    let max = capacity.saturating_sub(1);
    if s.len() <= max {
        return s;
    }

    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Write `s` as exactly `capacity` bytes, zero-padded
pub(crate) fn put_text<B: BufMut>(buf: &mut B, s: &str, capacity: usize) {
    let text = truncate_field(s, capacity);
    buf.put_slice(text.as_bytes());
    buf.put_bytes(0, capacity - text.len());
}

/// Read a `capacity`-byte field up to its first NUL
pub(crate) fn get_text<B: Buf>(buf: &mut B, capacity: usize) -> String {
    let mut raw = vec![0u8; capacity];
    buf.copy_to_slice(&mut raw);
    let end = raw.iter().position(|&b| b == 0).unwrap_or(capacity);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}
