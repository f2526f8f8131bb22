//! Fixed-width record primitives.
//!
//! A record is a run of `W` bytes holding an unsigned integer stored most-significant byte first.

use std::cmp::Ordering;
use std::fmt;

use crate::sort::SortError;

/// Widest record whose value fits into a `u128`.
pub const MAX_DECODABLE_WIDTH: usize = 16;

/// Record width in bytes. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordWidth(usize);

impl RecordWidth {
    /// Plain 8-bit values.
    pub const BYTE: RecordWidth = RecordWidth(1);
    /// Unsigned 24-bit values.
    pub const TRIBYTE: RecordWidth = RecordWidth(3);

    /// Creates a record width, rejecting zero.
    pub fn new(width: usize) -> Result<Self, SortError> {
        if width == 0 {
            return Err(SortError::InvalidWidth(width));
        }

        return Ok(RecordWidth(width));
    }

    /// Returns the width in bytes.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of complete records in a store of `len` bytes.
    pub fn records_in(self, len: u64) -> u64 {
        len / self.0 as u64
    }

    /// Number of trailing bytes of a store of `len` bytes that do not form a complete record.
    pub fn remainder_of(self, len: u64) -> u64 {
        len % self.0 as u64
    }

    /// Byte offset of the record with the given index.
    pub fn offset_of(self, index: u64) -> u64 {
        index * self.0 as u64
    }
}

impl Default for RecordWidth {
    fn default() -> Self {
        RecordWidth::BYTE
    }
}

impl fmt::Display for RecordWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compares two records of equal width as unsigned big-endian integers.
///
/// For byte strings of the same length the numeric order of their big-endian values is exactly
/// their lexicographic order, so no decoding is needed and any width is supported.
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    debug_assert_eq!(a.len(), b.len(), "records of different width");
    a.cmp(b)
}

/// Decodes a record into its unsigned value.
/// Returns [`None`] if the record is wider than [`MAX_DECODABLE_WIDTH`].
pub fn decode(record: &[u8]) -> Option<u128> {
    if record.len() > MAX_DECODABLE_WIDTH {
        return None;
    }

    Some(record.iter().fold(0u128, |acc, &byte| (acc << 8) | byte as u128))
}

/// Encodes `value` into `record` most-significant byte first, padding with leading zeros.
/// Returns [`None`] and leaves `record` untouched if the value does not fit.
pub fn encode(value: u128, record: &mut [u8]) -> Option<()> {
    let bytes = value.to_be_bytes();

    if record.len() >= bytes.len() {
        let (padding, tail) = record.split_at_mut(record.len() - bytes.len());
        padding.fill(0);
        tail.copy_from_slice(&bytes);
    } else {
        let (overflow, tail) = bytes.split_at(bytes.len() - record.len());
        if overflow.iter().any(|&byte| byte != 0) {
            return None;
        }
        record.copy_from_slice(tail);
    }

    return Some(());
}
