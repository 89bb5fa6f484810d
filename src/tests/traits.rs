use crate::{Digest, T1haBuildHasher, T1haHasher};

#[test]
fn hasher_debug_format() {
    let mut h = T1haHasher::with_seed(0x10);
    std::hash::Hasher::write(&mut h, b"abc");
    let dbg = format!("{h:?}");
    assert!(dbg.contains("T1haHasher"));
    assert!(dbg.contains("0x0000000000000010"));
    assert!(dbg.contains("buffered: 3"));
}

#[test]
fn build_hasher_debug_format() {
    let dbg = format!("{:?}", T1haBuildHasher::with_seed(u64::MAX));
    assert!(dbg.contains("T1haBuildHasher"));
    assert!(dbg.contains("0xffffffffffffffff"));
}

#[test]
fn default_hasher_is_empty() {
    let h = T1haHasher::default();
    assert!(h.as_bytes().is_empty());
}

#[test]
fn digest_is_hashable() {
    let mut set = std::collections::HashSet::new();
    set.insert(Digest::from_u64(1));
    set.insert(Digest::from_u64(1));
    set.insert(Digest::from_u64(2));
    assert_eq!(set.len(), 2);
}

#[test]
fn concurrent_calls_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| crate::t1ha2_atonce(b"test", 0)))
        .collect();
    for h in handles {
        assert_eq!(h.join().ok(), Some(0xA0A7_281A_A08A_DD7B));
    }
}
