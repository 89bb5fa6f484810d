//! Errors at the crate boundary. Hashing itself cannot fail.

/// Failure to decode a hex string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Input has an odd number of characters.
    #[error("hex string has odd length {0}")]
    OddLength(usize),
    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {found:?} at index {index}")]
    InvalidDigit {
        /// Byte index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
    /// Digit count differs from the destination buffer.
    #[error("expected {expected} hex digits, got {found}")]
    LengthMismatch {
        /// Digits the destination needs.
        expected: usize,
        /// Digits supplied.
        found: usize,
    },
}

/// Failure to parse a [`Digest`](crate::Digest) from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDigestError {
    /// Not exactly 16 hex digits.
    #[error("digest must be 16 hex digits, got {0}")]
    InvalidLength(usize),
    /// See [`HexError::InvalidDigit`].
    #[error(transparent)]
    InvalidDigit(#[from] HexError),
}

/// A reference vector that did not reproduce.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelfCheckError {
    /// Computed digest differs from the published one.
    #[error("selfcheck {case}: expected {expected:016X}, got {actual:016X}")]
    Mismatch {
        /// Name of the failing case, e.g. `bin7-1p7`.
        case: String,
        /// Published value.
        expected: u64,
        /// Computed value.
        actual: u64,
    },
}

/// Result alias for hex decoding.
pub type Result<T> = std::result::Result<T, HexError>;
