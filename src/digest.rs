//! 64-bit digest value and its canonical byte/text forms.
//!
//! The canonical serialization is **big-endian**: `to_bytes()[0]` holds the
//! most significant byte, and `Display` prints those bytes as 16 uppercase
//! hex digits. Published t1ha reference vectors use the same convention.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseDigestError;
use crate::hex;

/// Number of bytes in a serialized digest.
pub const DIGEST_LEN: usize = 8;

/// Result of hashing one buffer.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(u64);

impl Digest {
    /// Wraps a raw hash value.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw hash value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Canonical big-endian bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; DIGEST_LEN] {
        self.0.to_be_bytes()
    }

    /// Reads canonical big-endian bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    /// Little-endian bytes, for callers that store digests natively on
    /// little-endian hosts. Not the canonical form.
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; DIGEST_LEN] {
        self.0.to_le_bytes()
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<u64> for Digest {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Digest> for u64 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.to_bytes()
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:#018x})", self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    /// Parses exactly 16 hex digits, most significant byte first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DIGEST_LEN * 2 {
            return Err(ParseDigestError::InvalidLength(s.len()));
        }
        let mut buf = [0_u8; DIGEST_LEN];
        hex::decode_into(s, &mut buf)?;
        Ok(Self::from_bytes(buf))
    }
}
