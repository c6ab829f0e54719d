//! Typed, byte-order-aware views over raw data captured from a debuggee.
//!
//! The central type is [`DataBuffer`]: an owned block of bytes together with
//! the byte order and address width of the target it came from. Typed reads
//! are bounds checked and all-or-nothing; [`Value`] reinterprets a buffer as a
//! typed, optionally addressed value for display.

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod logging;
pub mod memory;
pub mod value;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use crate::config::DataConfig;
pub use crate::core::{
    Address, AddressKind, BasicType, ByteOrder, DataType, Status, INVALID_ADDRESS,
};
pub use crate::data::{DataBuffer, Primitive, TypedView};
pub use crate::error::{DataError, Result};
pub use crate::memory::{MemoryError, MemoryRegion, MemorySource};
pub use crate::value::{bind, Value};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn typedbuf(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(py, m)
}
