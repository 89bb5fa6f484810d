//! Single-pass t1ha2 over a whole buffer.
//!
//! The hash runs in five stages over four accumulators `a, b, c, d`:
//! `init_ab`/`init_cd`, the 32-byte block loop, `squash`, the tail bands,
//! and `final64`. `c` and `d` only take part when the input is longer than
//! one block.

use crate::fetch::{fetch64_le, tail64_le};
use crate::mix::{self, PRIME_1, PRIME_2, PRIME_3, PRIME_4, PRIME_5, PRIME_6, rot64};

/// Bytes consumed by one iteration of the block loop.
pub const BLOCK_LEN: usize = 32;

/// The four accumulator words of one hash invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct State {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

impl State {
    /// `a = seed`, `b = length`. `c` and `d` stay zero until `init_cd`.
    #[inline]
    const fn init_ab(seed: u64, length: u64) -> Self {
        Self {
            a: seed,
            b: length,
            c: 0,
            d: 0,
        }
    }

    #[inline]
    const fn init_cd(&mut self, seed: u64, length: u64) {
        self.c = rot64(length, 23).wrapping_add(!seed);
        self.d = (!length).wrapping_add(rot64(seed, 19));
    }

    /// Mixes one 32-byte block starting at `offset`.
    ///
    /// `d02`/`c13` read `c`/`d` before this block touches them, and `c`/`d`
    /// are updated from `a`/`b` before those change.
    #[inline]
    const fn block(&mut self, data: &[u8], offset: usize) {
        let w0 = fetch64_le(data, offset);
        let w1 = fetch64_le(data, offset + 8);
        let w2 = fetch64_le(data, offset + 16);
        let w3 = fetch64_le(data, offset + 24);

        let d02 = w0.wrapping_add(rot64(w2.wrapping_add(self.d), 56));
        let c13 = w1.wrapping_add(rot64(w3.wrapping_add(self.c), 19));
        self.d ^= self.b.wrapping_add(rot64(w1, 38));
        self.c ^= self.a.wrapping_add(rot64(w0, 57));
        self.b ^= PRIME_6.wrapping_mul(c13.wrapping_add(w2));
        self.a ^= PRIME_5.wrapping_mul(d02.wrapping_add(w3));
    }

    #[inline]
    const fn squash(&mut self) {
        self.a ^= PRIME_6.wrapping_mul(self.c.wrapping_add(rot64(self.d, 23)));
        self.b ^= PRIME_5.wrapping_mul(rot64(self.c, 19).wrapping_add(self.d));
    }

    /// Consumes the last `len` (0..=32) bytes at `offset` and finalizes.
    ///
    /// `len` is 32 only for a 32-byte input, which never enters the block
    /// loop and goes through the four-word band.
    #[inline]
    const fn tail_ab(self, data: &[u8], mut offset: usize, len: usize) -> u64 {
        let Self { mut a, mut b, .. } = self;

        match len {
            0 => {}
            1..=8 => {
                (b, a) = mix::mixup64(b, a, tail64_le(data, offset, len), PRIME_1);
            }
            9..=16 => {
                (a, b) = mix::mixup64(a, b, fetch64_le(data, offset), PRIME_2);
                offset += 8;
                (b, a) = mix::mixup64(b, a, tail64_le(data, offset, len), PRIME_1);
            }
            17..=24 => {
                (b, a) = mix::mixup64(b, a, fetch64_le(data, offset), PRIME_3);
                offset += 8;
                (a, b) = mix::mixup64(a, b, fetch64_le(data, offset), PRIME_2);
                offset += 8;
                (b, a) = mix::mixup64(b, a, tail64_le(data, offset, len), PRIME_1);
            }
            // 25..=31, or exactly 32 when the block loop was skipped.
            _ => {
                (a, b) = mix::mixup64(a, b, fetch64_le(data, offset), PRIME_4);
                offset += 8;
                (b, a) = mix::mixup64(b, a, fetch64_le(data, offset), PRIME_3);
                offset += 8;
                (a, b) = mix::mixup64(a, b, fetch64_le(data, offset), PRIME_2);
                offset += 8;
                (b, a) = mix::mixup64(b, a, tail64_le(data, offset, len), PRIME_1);
            }
        }

        mix::final64(a, b)
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Computes the t1ha2 64-bit hash of `data` in one pass.
///
/// The result is the native integer value. Use [`hash64`](crate::hash64)
/// or [`Digest::to_bytes`](crate::Digest::to_bytes) for the canonical
/// big-endian byte form.
///
/// ```
/// assert_eq!(t1ha2_atonce::t1ha2_atonce(b"test", 0), 0xA0A7_281A_A08A_DD7B);
/// ```
#[must_use]
pub const fn t1ha2_atonce(data: &[u8], seed: u64) -> u64 {
    let length = data.len();
    let mut state = State::init_ab(seed, length as u64);
    let mut offset = 0;
    let mut residual = length;

    if length > BLOCK_LEN {
        state.init_cd(seed, length as u64);
        while offset + BLOCK_LEN <= length {
            state.block(data, offset);
            offset += BLOCK_LEN;
        }
        state.squash();
        residual = length % BLOCK_LEN;
    }

    state.tail_ab(data, offset, residual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_ab_takes_seed_and_length() {
        let s = State::init_ab(7, 40);
        assert_eq!((s.a, s.b, s.c, s.d), (7, 40, 0, 0));
    }

    #[test]
    fn init_cd_with_zero_seed() {
        let mut s = State::init_ab(0, 64);
        s.init_cd(0, 64);
        assert_eq!(s.c, rot64(64, 23).wrapping_add(u64::MAX));
        assert_eq!(s.d, !64_u64);
    }

    #[test]
    fn block_only_reads_32_bytes() {
        let mut data = [0xA5_u8; 40];
        let mut s1 = State::init_ab(1, 2);
        s1.init_cd(1, 2);
        let mut s2 = s1;
        s1.block(&data, 0);
        data[32..].fill(0);
        s2.block(&data, 0);
        assert_eq!(s1, s2);
    }

    #[test]
    fn squash_leaves_cd_untouched() {
        let mut s = State {
            a: 1,
            b: 2,
            c: 3,
            d: 4,
        };
        s.squash();
        assert_eq!((s.c, s.d), (3, 4));
        assert_ne!((s.a, s.b), (1, 2));
    }
}
