//! Single-pass t1ha2 64-bit hashing.
//!
//! t1ha2 ("Fast Positive Hash", second generation) is a fast
//! non-cryptographic hash for hash tables, checksums and deduplication keys.
//! This crate implements the "at once" variant, which hashes a whole buffer
//! in one pass, bit-exact with the reference test vectors.
//!
//! # Key properties
//!
//! - **Deterministic**: same `(data, seed)` always yields the same digest
//! - **`const fn` core**: no allocation, no shared state, no I/O
//! - **Canonical big-endian digest bytes**: see [`Digest`]
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! Not collision- or preimage-resistant against adversarial input.
//!
//! ```
//! assert_eq!(t1ha2_atonce::hash64(b"test", 0), [0xA0, 0xA7, 0x28, 0x1A, 0xA0, 0x8A, 0xDD, 0x7B]);
//! assert_eq!(t1ha2_atonce::digest(b"0", 0).to_string(), "4B0B7D3CDE9FBCE6");
//! ```
//!
//! # References
//!
//! - Leonid Yuriev, "t1ha: Fast Positive Hash", <https://github.com/erthink/t1ha>

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod digest;
pub mod error;
pub mod fetch;
pub mod hasher;
pub mod hex;
pub mod mix;
pub mod selfcheck;

mod atonce;

#[cfg(test)]
mod tests;

pub use atonce::{BLOCK_LEN, t1ha2_atonce};
pub use digest::{DIGEST_LEN, Digest};
pub use error::{HexError, ParseDigestError, SelfCheckError};
pub use hasher::{T1haBuildHasher, T1haHasher};
pub use selfcheck::selfcheck;

/// Hashes `data` and returns the canonical big-endian digest bytes.
#[inline]
#[must_use]
pub const fn hash64(data: &[u8], seed: u64) -> [u8; DIGEST_LEN] {
    t1ha2_atonce(data, seed).to_be_bytes()
}

/// Hashes `data` into a [`Digest`].
#[inline]
#[must_use]
pub const fn digest(data: &[u8], seed: u64) -> Digest {
    Digest::from_u64(t1ha2_atonce(data, seed))
}
