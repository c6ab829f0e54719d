//! Error types for typed data buffers.
//!
//! All fallible operations return [`Result`]; nothing in the crate aborts the
//! host process on malformed input or out-of-range offsets.

use crate::memory::MemoryError;
use thiserror::Error;

/// Main error type for buffer and value operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataError {
    /// A read would extend past the end of the buffer
    #[error("out of bounds: {size} byte(s) at offset {offset:#x} exceeds buffer length {len}")]
    OutOfBounds { offset: u64, size: u64, len: u64 },

    /// Malformed construction input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A type descriptor that cannot produce a usable value
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// The memory source could not supply the requested bytes
    #[error("memory read failed: {0}")]
    Memory(#[from] MemoryError),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for buffer operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Convert buffer errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<DataError> for pyo3::PyErr {
    fn from(err: DataError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIndexError, PyTypeError, PyValueError};

        match err {
            DataError::OutOfBounds { .. } => PyIndexError::new_err(err.to_string()),
            DataError::InvalidArgument(msg) => PyValueError::new_err(msg),
            DataError::InvalidType(msg) => PyTypeError::new_err(msg),
            _ => PyException::new_err(err.to_string()),
        }
    }
}
