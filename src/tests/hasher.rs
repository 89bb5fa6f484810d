use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};

use crate::{T1haBuildHasher, T1haHasher, t1ha2_atonce};

#[test]
fn empty_hasher_matches_empty_input() {
    assert_eq!(T1haHasher::new().finish(), 0);
    assert_eq!(T1haHasher::with_seed(u64::MAX).finish(), 0x772C_7311_BE32_FF42);
}

/// Several writes hash as one concatenated buffer.
#[test]
fn writes_concatenate() {
    let mut h = T1haHasher::with_seed(9);
    h.write(b"te");
    h.write(b"");
    h.write(b"st");
    assert_eq!(h.as_bytes(), b"test");
    assert_eq!(h.finish(), t1ha2_atonce(b"test", 9));
}

#[test]
fn finish_is_repeatable() {
    let mut h = T1haHasher::new();
    h.write(&[1, 2, 3]);
    assert_eq!(h.finish(), h.finish());
    h.write(&[4]);
    assert_eq!(h.finish(), t1ha2_atonce(&[1, 2, 3, 4], 0));
}

#[test]
fn build_hasher_carries_seed() {
    let build = T1haBuildHasher::with_seed(0xDEAD_BEEF);
    assert_eq!(build.seed(), 0xDEAD_BEEF);
    let mut h = build.build_hasher();
    h.write(b"0");
    assert_eq!(h.finish(), t1ha2_atonce(b"0", 0xDEAD_BEEF));
}

#[test]
fn default_seed_is_zero() {
    assert_eq!(T1haBuildHasher::default().seed(), 0);
    assert_eq!(T1haBuildHasher::new(), T1haBuildHasher::default());
}

#[test]
fn hash_one_uses_written_bytes() {
    let build = T1haBuildHasher::new();
    let mut manual = build.build_hasher();
    manual.write_u64(42);
    assert_eq!(build.hash_one(42_u64), manual.finish());
    assert_eq!(build.hash_one(42_u64), t1ha2_atonce(&42_u64.to_ne_bytes(), 0));
}

#[test]
fn seeds_separate_hash_one() {
    let a = T1haBuildHasher::with_seed(1).hash_one("key");
    let b = T1haBuildHasher::with_seed(2).hash_one("key");
    assert_ne!(a, b);
}

#[test]
fn works_as_hashmap_hasher() {
    let mut map = HashMap::with_hasher(T1haBuildHasher::with_seed(7));
    for i in 0_u64..1_000 {
        map.insert(i, i * 3);
    }
    assert_eq!(map.len(), 1_000);
    for i in 0_u64..1_000 {
        assert_eq!(map.get(&i), Some(&(i * 3)), "missing key {i}");
    }
}

#[test]
fn build_hasher_is_send_sync_copy() {
    fn assert_traits<T: Send + Sync + Copy>() {}
    assert_traits::<T1haBuildHasher>();
}
