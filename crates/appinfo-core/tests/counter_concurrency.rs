#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use appinfo_core::RequestCounter;

#[test]
fn concurrent_increments_are_consecutive_and_unique() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 250;

    let counter = Arc::new(RequestCounter::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let c = Arc::clone(&counter);
            thread::spawn(move || (0..PER_THREAD).map(|_| c.increment()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = BTreeSet::new();
    for h in handles {
        for v in h.join().unwrap() {
            assert!(seen.insert(v), "duplicate value {v}");
        }
    }

    let total = THREADS * PER_THREAD;
    assert_eq!(seen, (1..=total).collect::<BTreeSet<_>>());
    assert_eq!(counter.current(), total);
}
