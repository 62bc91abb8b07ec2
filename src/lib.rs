// src/lib.rs
//! # Byte Buffer Pooling
//!
//! A small library for reusing byte buffers across concurrent callers,
//! built around a lock-free free-store and a retention policy applied at
//! release time.
//!
//! Features:
//! - Growable [`Buffer`] with independent length and capacity tracking
//! - Lock-free, bounded-time acquire and release under any number of threads
//! - Fixed-capacity pools that discard buffers which grew past their
//!   nominal size, bounding idle memory
//! - Growable pools that retain grown buffers so large payloads stop
//!   triggering reallocation
//! - Move-only pooled handles: use-after-release and double-release are
//!   compile errors, not runtime checks

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod error;
pub mod pool;

// Re-export main types
pub use buffer::Buffer;
pub use error::{BufferError, Result};
pub use pool::{BufferPool, PoolConfig, PoolStats, PooledBuffer, RetentionPolicy};

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::error::{BufferError, Result};
    pub use crate::pool::{BufferPool, PoolConfig, PoolStats, PooledBuffer, RetentionPolicy};
}
