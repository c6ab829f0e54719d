//! Python bindings for typed data buffers.
//!
//! Only compiled with the `python-ext` feature.

pub mod data;
pub mod status;

use pyo3::prelude::*;

/// Register all Python bindings with the module.
pub fn register_python_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    data::register_data_bindings(py, m)?;
    m.add_function(wrap_pyfunction!(crate::logging::init_logging, m)?)?;
    Ok(())
}
