//! Little-endian word loads from a byte slice.
//!
//! Loads are bounds-checked slice indexing, so an out-of-range offset panics
//! instead of touching adjacent memory. The hashing code never computes one.

/// Loads 8 bytes at `offset` as a little-endian `u64`.
///
/// # Panics
///
/// Panics if `offset + 8 > data.len()`.
#[inline]
#[must_use]
pub const fn fetch64_le(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
        data[offset + 4],
        data[offset + 5],
        data[offset + 6],
        data[offset + 7],
    ])
}

/// Loads the final partial word at `offset`.
///
/// Only the low three bits of `tail` count: `tail & 7` bytes are read and
/// zero-extended, and `0` means a full 8-byte word.
///
/// # Panics
///
/// Panics if the bytes selected by `tail` run past the end of `data`.
#[inline]
#[must_use]
pub const fn tail64_le(data: &[u8], offset: usize, tail: usize) -> u64 {
    let size = tail & 7;
    if size == 0 {
        return fetch64_le(data, offset);
    }

    let mut r = 0_u64;
    let mut i = 0;
    while i < size {
        r |= (data[offset + i] as u64) << (8 * i);
        i += 1;
    }
    r
}
