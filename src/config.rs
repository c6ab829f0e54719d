//! Configuration for buffer descriptions and bounded string reads.

use serde::{Deserialize, Serialize};

/// Tunables shared by diagnostic printing and string extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Number of bytes rendered per hex dump line
    pub bytes_per_line: usize,
    /// Maximum number of bytes scanned for a NUL terminator
    pub max_string_length: usize,
    /// Whether to append a printable-ASCII column to the hex dump
    pub show_ascii: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            bytes_per_line: 16,
            max_string_length: 4096,
            show_ascii: true,
        }
    }
}

impl DataConfig {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    /// Deserialize from JSON string. Missing fields take their defaults.
    pub fn from_json(json_str: &str) -> Result<Self, String> {
        serde_json::from_str(json_str).map_err(|e| e.to_string())
    }
}
