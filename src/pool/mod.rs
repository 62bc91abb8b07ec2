// src/pool/mod.rs
//! Buffer pooling: free-store, retention policy, and the pool itself.
//!
//! A [`BufferPool`] composes a lock-free store of idle buffers with a
//! [`RetentionPolicy`] and a buffer constructor. Two variants exist:
//! fixed-capacity ([`BufferPool::fixed`]) and growable
//! ([`BufferPool::growable`]); see [`BufferPool`] for the contract of
//! each.

mod config;
mod core;
mod policy;
mod stats;
mod store;

pub use config::PoolConfig;
pub use policy::RetentionPolicy;
pub use self::core::{BufferPool, PooledBuffer};
pub use stats::PoolStats;
