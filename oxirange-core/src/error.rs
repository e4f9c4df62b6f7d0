//! Error types for OxiRange operations.
//!
//! This module provides the error type shared by the range coder and
//! the filters built on top of it. The taxonomy is deliberately small:
//! I/O failures from the underlying source/sink, short side-channel
//! reads, and structural corruption detected by stream framing.
//!
//! Note that the range decoder itself never reports a short read of
//! its own input: an exhausted source substitutes `0xFF` bytes and
//! decoding continues (see `oxirange-rc`). Only genuine I/O errors
//! propagate from it.

use std::io;
use thiserror::Error;

/// The main error type for OxiRange operations.
#[derive(Debug, Error)]
pub enum OxiRangeError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A side channel ran out of bytes where the format requires them.
    #[error("Unexpected end of stream: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Corrupted data in a framed stream.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Byte offset where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },
}

/// Result type alias for OxiRange operations.
pub type Result<T> = std::result::Result<T, OxiRangeError>;

impl OxiRangeError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiRangeError::unexpected_eof(4);
        assert!(err.to_string().contains("4 more bytes"));

        let err = OxiRangeError::corrupted(16, "stream length overflow");
        assert!(err.to_string().contains("offset 16"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: OxiRangeError = io_err.into();
        assert!(matches!(err, OxiRangeError::Io(_)));
    }
}
