// src/error.rs
//! Error types for buffer operations with conversion support.

use std::fmt;

/// Errors that can occur during buffer operations.
///
/// Pool acquire and release have no failure mode; only the checked
/// read-side buffer accessors produce these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Position exceeds buffer length
    PositionOutOfBounds,
    /// Attempted to read beyond the valid data
    BufferOverflow,
    /// I/O error (for compatibility)
    Io(String),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfBounds => write!(f, "Position out of bounds"),
            Self::BufferOverflow => write!(f, "Buffer overflow"),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for BufferError {}

/// Convert BufferError to std::io::Error
impl From<BufferError> for std::io::Error {
    fn from(err: BufferError) -> Self {
        use std::io::ErrorKind;
        match err {
            BufferError::BufferOverflow => {
                std::io::Error::new(ErrorKind::UnexpectedEof, err)
            }
            BufferError::Io(msg) => std::io::Error::new(ErrorKind::Other, msg),
            _ => std::io::Error::new(ErrorKind::Other, err),
        }
    }
}

/// Convert std::io::Error to BufferError
impl From<std::io::Error> for BufferError {
    fn from(err: std::io::Error) -> Self {
        BufferError::Io(err.to_string())
    }
}

/// Convert BufferError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<BufferError> for anyhow::Error {
    fn from(err: BufferError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Result type alias for buffer operations
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`bufpool::Result<T>`) or use the conversion traits.
pub type Result<T> = std::result::Result<T, BufferError>;

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}
