// src/buffer/ops.rs
//! Buffer read/write operations.
//!
//! Writers append past the end of valid data and grow the backing store
//! as needed; they have no failure mode. Readers consume from the cursor
//! with bounds checking and return [`BufferError::BufferOverflow`] when
//! fewer bytes remain than requested.

use super::core::Buffer;
use crate::error::{BufferError, Result};

impl Buffer {
    /// Appends a single byte.
    #[inline]
    pub fn put_byte(&mut self, val: u8) {
        self.data.push(val);
    }

    /// Appends a slice of bytes.
    #[inline]
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Appends a `u32` in big-endian format.
    #[inline]
    pub fn put_u32(&mut self, val: u32) {
        self.data.extend_from_slice(&val.to_be_bytes());
    }

    /// Appends a `u64` in big-endian format.
    #[inline]
    pub fn put_u64(&mut self, val: u64) {
        self.data.extend_from_slice(&val.to_be_bytes());
    }

    /// Reads a single byte from the cursor.
    #[inline]
    pub fn get_byte(&mut self) -> Result<u8> {
        if self.pos >= self.data.len() {
            return Err(BufferError::BufferOverflow);
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads a `u32` in big-endian format from the cursor.
    #[inline]
    pub fn get_u32(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(self.get_bytes_ref(4)?);
        Ok(u32::from_be_bytes(bytes))
    }

    /// Reads a `u64` in big-endian format from the cursor.
    #[inline]
    pub fn get_u64(&mut self) -> Result<u64> {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(self.get_bytes_ref(8)?);
        Ok(u64::from_be_bytes(bytes))
    }

    /// Reads `len` bytes from the cursor, returning an owned `Vec`.
    #[inline]
    pub fn get_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        Ok(self.get_bytes_ref(len)?.to_vec())
    }

    /// Reads `len` bytes from the cursor as a slice reference (zero-copy).
    #[inline]
    pub fn get_bytes_ref(&mut self, len: usize) -> Result<&[u8]> {
        if self.pos + len > self.data.len() {
            return Err(BufferError::BufferOverflow);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_u32() {
        let mut buf = Buffer::new();
        buf.put_u32(0x12345678);
        assert_eq!(buf.get_u32().unwrap(), 0x12345678);
    }

    #[test]
    fn test_put_get_u64() {
        let mut buf = Buffer::new();
        buf.put_u64(0xDEADBEEFCAFEBABE);
        assert_eq!(buf.get_u64().unwrap(), 0xDEADBEEFCAFEBABE);
    }

    #[test]
    fn test_put_get_bytes() {
        let mut buf = Buffer::new();
        buf.put_bytes(b"hello world");
        assert_eq!(buf.get_bytes(5).unwrap(), b"hello");
        assert_eq!(buf.get_bytes_ref(6).unwrap(), b" world");
    }

    #[test]
    fn test_read_past_end() {
        let mut buf = Buffer::new();
        buf.put_bytes(b"abc");
        assert!(matches!(buf.get_bytes(4), Err(BufferError::BufferOverflow)));
        assert_eq!(buf.get_bytes(3).unwrap(), b"abc");
        assert!(matches!(buf.get_byte(), Err(BufferError::BufferOverflow)));
    }

    #[test]
    fn test_mixed_write_then_read() {
        let mut buf = Buffer::with_capacity(64);
        buf.put_u32(7);
        buf.put_byte(0xFF);
        buf.put_bytes(b"payload");
        buf.put_u64(99);

        assert_eq!(buf.get_u32().unwrap(), 7);
        assert_eq!(buf.get_byte().unwrap(), 0xFF);
        assert_eq!(buf.get_bytes(7).unwrap(), b"payload");
        assert_eq!(buf.get_u64().unwrap(), 99);
        assert_eq!(buf.remaining(), 0);
    }
}
