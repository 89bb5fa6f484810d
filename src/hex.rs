//! Hex text helpers for digests and test fixtures, over the `hex` crate.

use ::hex::FromHexError;

use crate::error::{HexError, Result};

/// Encodes `bytes` as uppercase hex, two digits per byte.
#[must_use]
pub fn encode_upper(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Decodes a hex string (either case) into bytes.
///
/// # Errors
///
/// [`HexError::OddLength`] if `text` has an odd number of characters,
/// [`HexError::InvalidDigit`] on the first non-hex character.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    ::hex::decode(text).map_err(|err| map_error(text, err, text.len()))
}

/// Decodes `text` into exactly `out.len()` bytes.
///
/// # Errors
///
/// As [`decode`], plus [`HexError::LengthMismatch`] when `text` does not
/// hold exactly `2 * out.len()` digits.
pub fn decode_into(text: &str, out: &mut [u8]) -> Result<()> {
    let expected = out.len() * 2;
    ::hex::decode_to_slice(text, out).map_err(|err| map_error(text, err, expected))
}

/// `hex` reports the offending byte as a `char`. Every byte before `index`
/// is an ASCII hex digit, so `index` is a char boundary and the real
/// character can be recovered from `text`.
fn map_error(text: &str, err: FromHexError, expected: usize) -> HexError {
    match err {
        FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidDigit {
            index,
            found: text.get(index..).and_then(|s| s.chars().next()).unwrap_or(c),
        },
        FromHexError::OddLength => HexError::OddLength(text.len()),
        FromHexError::InvalidStringLength => HexError::LengthMismatch {
            expected,
            found: text.len(),
        },
    }
}
