//! `std::hash` integration.
//!
//! t1ha2 consumes its whole input in one pass, so [`T1haHasher`] collects
//! every `write` into a buffer and hashes it once in `finish`.

use std::fmt;
use std::hash::{BuildHasher, Hasher};

use crate::atonce::t1ha2_atonce;

/// Builds [`T1haHasher`]s that share one seed.
///
/// ```
/// use std::collections::HashMap;
/// use t1ha2_atonce::T1haBuildHasher;
///
/// let mut map = HashMap::with_hasher(T1haBuildHasher::with_seed(42));
/// map.insert("key", 1);
/// assert_eq!(map.get("key"), Some(&1));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct T1haBuildHasher {
    seed: u64,
}

impl T1haBuildHasher {
    /// Seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Uses `seed` for every hasher built.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl BuildHasher for T1haBuildHasher {
    type Hasher = T1haHasher;

    fn build_hasher(&self) -> T1haHasher {
        T1haHasher::with_seed(self.seed)
    }
}

impl fmt::Debug for T1haBuildHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("T1haBuildHasher")
            .field("seed", &format_args!("{:#018x}", self.seed))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Hasher
// ---------------------------------------------------------------------------

/// Buffering [`Hasher`] over [`t1ha2_atonce`].
#[derive(Clone, Default)]
pub struct T1haHasher {
    seed: u64,
    buffer: Vec<u8>,
}

impl T1haHasher {
    /// Creates an empty hasher with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seed(0)
    }

    /// Creates an empty hasher with the given seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            buffer: Vec::new(),
        }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl Hasher for T1haHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn finish(&self) -> u64 {
        t1ha2_atonce(&self.buffer, self.seed)
    }
}

impl fmt::Debug for T1haHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("T1haHasher")
            .field("seed", &format_args!("{:#018x}", self.seed))
            .field("buffered", &self.buffer.len())
            .finish()
    }
}
