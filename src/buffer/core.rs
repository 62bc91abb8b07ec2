// src/buffer/core.rs
//! Core buffer structure and cursor/length management.
//!
//! This module provides the fundamental [`Buffer`] type: a contiguous,
//! owned byte region whose length and capacity are tracked independently.
//! Appends grow the backing storage by reallocation and never fail;
//! capacity is never shrunk implicitly.

use crate::error::{BufferError, Result};

/// A growable linear buffer with a read cursor.
///
/// Writes append at the end of the valid data and grow the backing
/// storage as needed. Reads consume from an independent cursor with
/// bounds checking.
///
/// # Examples
///
/// ```
/// use bufpool::Buffer;
/// # use bufpool::BufferError;
///
/// let mut buf = Buffer::with_capacity(1024);
/// buf.put_u32(42);
/// buf.put_bytes(b"hello");
/// assert_eq!(buf.len(), 9);
/// assert_eq!(buf.get_u32()?, 42);
/// # Ok::<(), BufferError>(())
/// ```
#[derive(Clone, Default)]
pub struct Buffer {
    /// Valid data; `data.len()` is the buffer length, `data.capacity()`
    /// the backing-store capacity.
    pub(crate) data: Vec<u8>,
    /// Current read position, always <= `data.len()`.
    pub(crate) pos: usize,
}

impl Buffer {
    /// Creates an empty buffer with no backing allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bufpool::Buffer;
    ///
    /// let buf = Buffer::new();
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            pos: 0,
        }
    }

    /// Creates an empty buffer with at least `capacity` bytes pre-allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bufpool::Buffer;
    ///
    /// let buf = Buffer::with_capacity(8192);
    /// assert_eq!(buf.capacity(), 8192);
    /// assert_eq!(buf.len(), 0);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Creates a buffer from existing data with the cursor at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bufpool::Buffer;
    ///
    /// let buf = Buffer::from_vec(vec![1, 2, 3]);
    /// assert_eq!(buf.len(), 3);
    /// assert_eq!(buf.pos(), 0);
    /// ```
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// Total capacity of the backing storage.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Length of valid data in the buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains no valid data.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current read position.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of bytes available to read from the current position.
    ///
    /// # Examples
    ///
    /// ```
    /// use bufpool::Buffer;
    /// # use bufpool::BufferError;
    ///
    /// let mut buf = Buffer::new();
    /// buf.put_u32(1);
    /// buf.put_u32(2);
    /// assert_eq!(buf.remaining(), 8);
    /// buf.get_u32()?;
    /// assert_eq!(buf.remaining(), 4);
    /// # Ok::<(), BufferError>(())
    /// ```
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Checks whether at least `count` bytes are available to read.
    #[inline(always)]
    pub fn has_remaining(&self, count: usize) -> bool {
        self.remaining() >= count
    }

    /// Sets the read position.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::PositionOutOfBounds`] if `pos` exceeds the
    /// buffer length.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(BufferError::PositionOutOfBounds);
        }
        self.pos = pos;
        Ok(())
    }

    /// Advances the read position by `incr`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::PositionOutOfBounds`] if the new position
    /// would exceed the buffer length.
    pub fn incr_pos(&mut self, incr: usize) -> Result<()> {
        if self.pos + incr > self.data.len() {
            return Err(BufferError::PositionOutOfBounds);
        }
        self.pos += incr;
        Ok(())
    }

    /// Clears length and cursor for reuse, keeping the allocation.
    ///
    /// Capacity is unchanged; the backing storage is retained so the
    /// next writer reuses it without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use bufpool::Buffer;
    ///
    /// let mut buf = Buffer::with_capacity(64);
    /// buf.put_bytes(b"scratch");
    /// buf.clear();
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.capacity(), 64);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
        self.pos = 0;
    }

    /// Ensures capacity for at least `additional` more bytes.
    ///
    /// Similar to [`Vec::reserve`]; never shrinks.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Returns a slice of all valid data.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable slice of all valid data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns the backing vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("pos", &self.pos)
            .finish()
    }
}
