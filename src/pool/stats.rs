// src/pool/stats.rs
//! Pool statistics.
//!
//! All counters use `Relaxed` ordering; snapshots are eventually
//! consistent and intended for monitoring and tests, not for control
//! flow.

use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) struct PoolStatsInner {
    pub(crate) acquired: AtomicUsize,
    pub(crate) allocated: AtomicUsize,
    pub(crate) released: AtomicUsize,
    pub(crate) discarded: AtomicUsize,
    pub(crate) evicted: AtomicUsize,
}

impl PoolStatsInner {
    pub(crate) fn new() -> Self {
        Self {
            acquired: AtomicUsize::new(0),
            allocated: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
            discarded: AtomicUsize::new(0),
            evicted: AtomicUsize::new(0),
        }
    }

    pub(crate) fn snapshot(&self, available: usize) -> PoolStats {
        PoolStats {
            available,
            acquired: self.acquired.load(Ordering::Relaxed),
            allocated: self.allocated.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of pool counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers currently idle in the free-store (approximate).
    pub available: usize,
    /// Total acquire calls.
    pub acquired: usize,
    /// Acquires that constructed a fresh buffer (store was empty).
    pub allocated: usize,
    /// Total buffers returned through release.
    pub released: usize,
    /// Released buffers rejected by the retention policy and dropped.
    pub discarded: usize,
    /// Policy-admitted buffers dropped because the store was full.
    pub evicted: usize,
}

impl PoolStats {
    /// Fraction of acquires served from the free-store rather than by
    /// constructing a fresh buffer. Between 0.0 and 1.0.
    pub fn reuse_rate(&self) -> f64 {
        if self.acquired == 0 {
            return 0.0;
        }
        (self.acquired - self.allocated) as f64 / self.acquired as f64
    }
}
