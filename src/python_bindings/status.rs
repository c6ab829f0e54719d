//! Python-visible `Status`: the error channel for zero-on-failure getters.

use crate::core::Status;
use pyo3::prelude::*;

/// Outcome of the reads that reported through this object.
#[pyclass(name = "Status")]
#[derive(Clone, Default)]
pub struct PyStatus {
    pub(crate) inner: Status,
}

#[pymethods]
impl PyStatus {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    pub fn success(&self) -> bool {
        self.inner.success()
    }

    pub fn fail(&self) -> bool {
        self.inner.fail()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Error message, or `None` when nothing failed.
    fn get_cstring(&self) -> Option<String> {
        self.inner.error().map(|e| e.to_string())
    }

    fn __str__(&self) -> String {
        self.inner.description()
    }

    fn __repr__(&self) -> String {
        format!("Status({})", self.inner)
    }
}
