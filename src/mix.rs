//! Magic primes and the 64-bit mixing primitives.
//!
//! Every function here is total: arithmetic wraps modulo 2⁶⁴ and the
//! 128-bit products come from native `u128`.

/// Finalization multiplier.
pub const PRIME_0: u64 = 0xEC99_BF0D_8372_CAAB;
/// Multiplier for the partial tail word.
pub const PRIME_1: u64 = 0x8243_4FE9_0EDC_EF39;
/// Multiplier for the third-from-last tail word.
pub const PRIME_2: u64 = 0xD4F0_6DB9_9D67_BE4B;
/// Multiplier for the second tail word.
pub const PRIME_3: u64 = 0xBD9C_ACC2_2C6E_9571;
/// Multiplier for the first of four tail words.
pub const PRIME_4: u64 = 0x9C06_FAF4_D023_E3AB;
/// Block/squash multiplier for `a`, final `mux64` prime.
pub const PRIME_5: u64 = 0xC060_724A_8424_F345;
/// Block/squash multiplier for `b`, finalization multiplier for `y`.
pub const PRIME_6: u64 = 0xCB5A_F53A_E3AA_AC31;

// ---------------------------------------------------------------------------
// Arithmetic helpers
// ---------------------------------------------------------------------------

/// Rotates `v` right by `s` bits.
#[inline]
#[must_use]
pub const fn rot64(v: u64, s: u32) -> u64 {
    v.rotate_right(s)
}

/// Full 64×64 → 128-bit product, returned as `(low, high)`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn mul_64x64_128(a: u64, b: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128);
    (product as u64, (product >> 64) as u64)
}

/// XOR of both halves of `v · prime`.
#[inline]
#[must_use]
pub const fn mux64(v: u64, prime: u64) -> u64 {
    let (lo, hi) = mul_64x64_128(v, prime);
    lo ^ hi
}

// ---------------------------------------------------------------------------
// Mixing steps
// ---------------------------------------------------------------------------

/// Folds input word `v` into `target`, carrying the high half of the
/// product into `other`.
///
/// Returns the updated `(target, other)` pair.
#[inline]
#[must_use]
pub const fn mixup64(target: u64, other: u64, v: u64, prime: u64) -> (u64, u64) {
    let (lo, hi) = mul_64x64_128(other.wrapping_add(v), prime);
    (target ^ lo, other.wrapping_add(hi))
}

/// Closing avalanche of the two remaining accumulators.
#[inline]
#[must_use]
pub const fn final64(a: u64, b: u64) -> u64 {
    let x = a.wrapping_add(rot64(b, 41)).wrapping_mul(PRIME_0);
    let y = rot64(a, 23).wrapping_add(b).wrapping_mul(PRIME_6);
    mux64(x ^ y, PRIME_5)
}
