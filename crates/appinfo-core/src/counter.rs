//! Per-instance request counter.
//!
//! Each process owns exactly one counter. It starts at zero, is never
//! persisted, and is not shared between instances, so horizontally scaled
//! deployments report independent values.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestCounter {
    handled: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment by 1 and return the post-increment value.
    ///
    /// A single `fetch_add` both bumps and reads, so concurrent callers always
    /// observe distinct consecutive values.
    pub fn increment(&self) -> u64 {
        self.handled.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Current value without mutating.
    pub fn current(&self) -> u64 {
        self.handled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let c = RequestCounter::new();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn increment_returns_post_value() {
        let c = RequestCounter::new();
        assert_eq!(c.increment(), 1);
        assert_eq!(c.increment(), 2);
        assert_eq!(c.current(), 2);
    }
}
