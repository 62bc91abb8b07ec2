// src/pool/core.rs
//! Buffer pool with fixed-capacity and growable variants.
//!
//! # Ownership
//!
//! [`BufferPool::acquire`] hands out a [`PooledBuffer`], a move-only
//! RAII handle. Dropping the handle releases the buffer: the retention
//! policy decides whether it re-enters the free-store or is dropped.
//! Because release consumes the handle, use-after-release and
//! double-release are compile errors rather than runtime checks.
//!
//! # Variants
//!
//! - [`BufferPool::fixed`]: fresh buffers carry exactly the nominal
//!   capacity, and only buffers still at that capacity are retained at
//!   release. Every acquire therefore observes `capacity == nominal`.
//! - [`BufferPool::growable`]: fresh buffers start at zero capacity and
//!   every released buffer is retained (up to the idle cap), so a buffer
//!   that grew while held may serve a later acquire already sized for
//!   large payloads.

use super::config::PoolConfig;
use super::policy::RetentionPolicy;
use super::stats::{PoolStats, PoolStatsInner};
use super::store::FreeStore;
use crate::buffer::Buffer;
use std::sync::Arc;
use std::sync::atomic::Ordering;

/// Pool state shared between the handle and every outstanding buffer.
struct Shared {
    store: FreeStore,
    policy: RetentionPolicy,
    /// Capacity given to freshly constructed buffers.
    fresh_capacity: usize,
    stats: PoolStatsInner,
}

/// Thread-safe pool of reusable byte buffers.
///
/// Cloning the pool is cheap and yields another handle to the same
/// shared state, so a single pool can be handed to many worker threads.
///
/// # Example
///
/// ```rust
/// use bufpool::BufferPool;
/// use std::thread;
///
/// let pool = BufferPool::fixed(1024);
///
/// let handles: Vec<_> = (0..4).map(|_| {
///     let pool = pool.clone();
///     thread::spawn(move || {
///         for i in 0..1000u32 {
///             let mut buf = pool.acquire();
///             buf.put_u32(i);
///         } // released on drop
///     })
/// }).collect();
/// for h in handles { h.join().unwrap(); }
///
/// println!("reuse rate: {:.1}%", pool.stats().reuse_rate() * 100.0);
/// ```
#[derive(Clone)]
pub struct BufferPool {
    shared: Arc<Shared>,
}

impl BufferPool {
    /// Creates a fixed-capacity pool.
    ///
    /// Every buffer returned by [`acquire`](Self::acquire) has
    /// `capacity == nominal` and `len == 0`. A buffer that grew past the
    /// nominal capacity while held is discarded at release, so it can
    /// never be handed back out.
    pub fn fixed(nominal: usize) -> Self {
        Self::fixed_with_config(nominal, PoolConfig::default())
    }

    /// Creates a fixed-capacity pool with an explicit configuration.
    pub fn fixed_with_config(nominal: usize, config: PoolConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                store: FreeStore::new(config.max_idle),
                policy: RetentionPolicy::Exact(nominal),
                fresh_capacity: nominal,
                stats: PoolStatsInner::new(),
            }),
        }
    }

    /// Creates a growable pool.
    ///
    /// Fresh buffers start with zero capacity; released buffers are
    /// retained at whatever capacity they reached, so acquires make no
    /// capacity guarantee beyond `len == 0`.
    pub fn growable() -> Self {
        Self::growable_with_config(PoolConfig::default())
    }

    /// Creates a growable pool with an explicit configuration.
    pub fn growable_with_config(config: PoolConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                store: FreeStore::new(config.max_idle),
                policy: RetentionPolicy::Always,
                fresh_capacity: 0,
                stats: PoolStatsInner::new(),
            }),
        }
    }

    /// Acquires a buffer, constructing a fresh one if the store is empty.
    ///
    /// Never fails. The returned buffer always has `len == 0`; a reused
    /// buffer is cleared before being handed out so stale length from a
    /// previous holder is never visible.
    #[inline]
    pub fn acquire(&self) -> PooledBuffer {
        self.shared.stats.acquired.fetch_add(1, Ordering::Relaxed);

        let mut buffer = match self.shared.store.take() {
            Some(buf) => buf,
            None => {
                self.shared.stats.allocated.fetch_add(1, Ordering::Relaxed);
                Buffer::with_capacity(self.shared.fresh_capacity)
            }
        };
        buffer.clear();

        PooledBuffer {
            buffer: Some(buffer),
            shared: Arc::clone(&self.shared),
        }
    }

    /// The retention policy this pool applies at release time.
    pub fn policy(&self) -> RetentionPolicy {
        self.shared.policy
    }

    /// Number of buffers currently idle in the free-store (approximate).
    #[inline]
    pub fn available(&self) -> usize {
        self.shared.store.len()
    }

    /// Returns a snapshot of pool statistics.
    ///
    /// All counters use `Relaxed` ordering; values are eventually consistent.
    pub fn stats(&self) -> PoolStats {
        self.shared.stats.snapshot(self.shared.store.len())
    }

    /// Pre-constructs buffers until roughly `target` are idle (capped at
    /// `max_idle`).
    ///
    /// Because the store's length and insert are not one transaction,
    /// concurrent `warm` calls may transiently overshoot by a small
    /// constant.
    pub fn warm(&self, target: usize) {
        let current = self.shared.store.len();
        for _ in current..target {
            if !self
                .shared
                .store
                .put(Buffer::with_capacity(self.shared.fresh_capacity))
            {
                break;
            }
        }
    }

    /// Drains the free-store, dropping every idle buffer.
    ///
    /// Outstanding [`PooledBuffer`] handles are unaffected; their
    /// buffers re-enter the (now empty) store on release as usual.
    pub fn clear(&self) {
        self.shared.store.clear();
    }
}

/// A buffer borrowed from a [`BufferPool`].
///
/// Dereferences to [`Buffer`]. On drop the buffer is released back to
/// the pool: the retention policy decides whether it is stored for
/// reuse or dropped. Use [`discard`](Self::discard) to bypass retention
/// or [`leak`](Self::leak) to detach the buffer from the pool entirely.
pub struct PooledBuffer {
    buffer: Option<Buffer>,
    shared: Arc<Shared>,
}

impl PooledBuffer {
    /// Detaches the buffer from the pool without releasing it.
    ///
    /// The pool never sees this buffer again; the caller owns it outright.
    pub fn leak(mut self) -> Buffer {
        // buffer is Some until drop/leak/discard, each of which consumes.
        self.buffer.take().unwrap_or_default()
    }

    /// Drops the buffer immediately, bypassing the retention policy.
    pub fn discard(mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.shared.stats.discarded.fetch_add(1, Ordering::Relaxed);
            drop(buffer);
        }
    }

    /// Capacity of the underlying buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, Buffer::capacity)
    }
}

impl std::ops::Deref for PooledBuffer {
    type Target = Buffer;
    fn deref(&self) -> &Self::Target {
        // Invariant: Some until the handle is consumed.
        self.buffer.as_ref().expect("pooled buffer already taken")
    }
}

impl std::ops::DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.buffer.as_mut().expect("pooled buffer already taken")
    }
}

impl std::fmt::Debug for PooledBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledBuffer")
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl Drop for PooledBuffer {
    /// Releases the buffer: policy-admitted buffers re-enter the store
    /// (unless it is full), rejected ones are dropped here.
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.shared.stats.released.fetch_add(1, Ordering::Relaxed);

            if self.shared.policy.admits(&buffer) {
                if !self.shared.store.put(buffer) {
                    self.shared.stats.evicted.fetch_add(1, Ordering::Relaxed);
                }
            } else {
                self.shared.stats.discarded.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
