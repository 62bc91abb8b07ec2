// src/pool/policy.rs
//! Retention policy evaluated when a buffer is released.
//!
//! The policy is a pure predicate over the released buffer; it performs
//! no I/O and mutates nothing, so it can be unit-tested in isolation
//! from the store.

use crate::buffer::Buffer;

/// Decides whether a released buffer re-enters the free-store.
///
/// A buffer the policy rejects is dropped at release time; it never
/// becomes visible to a later acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Retain only buffers whose capacity equals the nominal size.
    ///
    /// Used by fixed-capacity pools: a buffer that grew while held has
    /// a larger capacity and is discarded, which keeps every stored
    /// buffer at the nominal size and bounds idle memory.
    Exact(usize),
    /// Retain every released buffer regardless of capacity.
    ///
    /// Used by growable pools: a buffer that grew is kept at its grown
    /// capacity so a later acquire may skip reallocation.
    Always,
}

impl RetentionPolicy {
    /// Returns `true` if the released buffer should be kept for reuse.
    #[inline]
    pub fn admits(&self, buffer: &Buffer) -> bool {
        match self {
            Self::Exact(nominal) => buffer.capacity() == *nominal,
            Self::Always => true,
        }
    }
}
