// src/pool/config.rs
//! Pool configuration.

/// Configuration for a [`crate::pool::BufferPool`].
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of idle buffers the free-store retains.
    ///
    /// A release against a full store drops the buffer instead of
    /// keeping it, bounding idle memory. The bound is best-effort under
    /// heavy concurrency (see the store documentation).
    pub max_idle: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { max_idle: 64 }
    }
}
