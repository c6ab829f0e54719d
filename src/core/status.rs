//! Explicit error channel for zero-on-failure accessors.

use crate::error::DataError;
use std::fmt;

/// Outcome of the most recent operation that reported through this channel.
///
/// A fresh `Status` is successful. Failing operations record their error and
/// leave it in place until the caller inspects and clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    error: Option<DataError>,
}

impl Status {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    pub fn fail(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&DataError> {
        self.error.as_ref()
    }

    pub fn clear(&mut self) {
        self.error = None;
    }

    /// Record the outcome of `result`, returning its value or `T::default()`.
    pub fn record<T: Default>(&mut self, result: crate::error::Result<T>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => {
                self.error = Some(e);
                T::default()
            }
        }
    }

    /// Human-readable description, `"success"` when nothing failed.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(e) => write!(f, "error: {e}"),
            None => write!(f, "success"),
        }
    }
}

impl From<DataError> for Status {
    fn from(err: DataError) -> Self {
        Self { error: Some(err) }
    }
}
