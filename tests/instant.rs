#![cfg(feature = "std")]
use monotime::{codec, duration_between, Clock, Duration, Instant, ManualClock, StdClock};
use serde::{Deserialize, Serialize};
use std::{
    collections::{hash_map::DefaultHasher, HashSet},
    hash::{Hash, Hasher},
    thread,
};

fn hash_of(x: &Instant) -> u64 {
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn instants_from_many_threads_are_comparable() {
    let start = Instant::now();
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || (0..100).map(|_| StdClock.now()).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        let readings = handle.join().unwrap();
        assert!(readings.windows(2).all(|w| w[0] <= w[1]));
        assert!(readings.iter().all(|&x| x >= start));
    }

    let end = Instant::now();
    assert_eq!(duration_between(start, end), end - start);
    assert_eq!(duration_between(end, start), Duration::ZERO);
}

#[test]
fn ordering_and_equality_agree() {
    let values = [0, 1, 2, 1_000_000_000, u64::MAX - 1, u64::MAX];
    for &a in values.iter() {
        for &b in values.iter() {
            let (a, b) = (Instant::from_nanos(a), Instant::from_nanos(b));
            assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
            if a == b {
                assert_eq!(hash_of(&a), hash_of(&b));
            }
        }
    }
}

#[test]
fn equal_instants_collapse_in_sets() {
    let clock = ManualClock::new(10);
    let a = clock.now();
    let b = Instant::from_instant(&a);
    clock.advance(Duration::from_nanos(1));
    let c = clock.now();

    let set: HashSet<_> = vec![a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Span {
    start: Instant,
    length: Duration,
}

#[test]
fn serde_is_transparent() {
    let span = Span {
        start: Instant::from_nanos(1_000_000_000),
        length: Duration::from_nanos(500_000_000),
    };
    let bytes = serde_cbor::to_vec(&span).unwrap();

    #[derive(Deserialize)]
    struct RawSpan {
        start: u64,
        length: u64,
    }
    let raw: RawSpan = serde_cbor::from_slice(&bytes).unwrap();
    assert_eq!(raw.start, 1_000_000_000);
    assert_eq!(raw.length, 500_000_000);

    let back: Span = serde_cbor::from_slice(&bytes).unwrap();
    assert_eq!(back, span);
}

#[test]
fn codec_preserves_live_instants() {
    assert!(codec::ROUND_TRIP_SAFE);
    let instant = Instant::now().add_secs(0.25);
    let mut buf = [0u8; codec::MAX_ENCODED_LEN];
    let len = codec::encode_into(instant, &mut buf).unwrap();
    assert_eq!(codec::decode(&mut buf[..len]).unwrap(), instant);
    assert_eq!(codec::from_slice(&codec::to_vec(instant)).unwrap(), instant);
}
