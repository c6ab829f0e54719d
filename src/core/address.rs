//! Address types for values bound to target memory.
//!
//! An [`Address`] records where a block of bytes was read from. Values that
//! exist only as detached data carry [`Address::invalid`], whose numeric value
//! is the all-ones sentinel [`INVALID_ADDRESS`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel meaning "no valid address".
pub const INVALID_ADDRESS: u64 = u64::MAX;

/// The kind of address representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    /// Runtime address in the inspected process
    Load,
    /// No backing location
    Invalid,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AddressKind::Load => "load",
            AddressKind::Invalid => "invalid",
        };
        write!(f, "{s}")
    }
}

/// A location that a buffer's bytes came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// The kind of address this represents
    pub kind: AddressKind,
    /// The numeric value of the address
    pub value: u64,
    /// Bit width (16, 32, or 64)
    pub bits: u8,
}

impl Address {
    /// Create a new Address.
    ///
    /// Fails if `bits` is not 16, 32 or 64, or if `value` does not fit.
    pub fn new(kind: AddressKind, value: u64, bits: u8) -> Result<Self, String> {
        if ![16, 32, 64].contains(&bits) {
            return Err("bits must be 16, 32, or 64".to_string());
        }

        if kind != AddressKind::Invalid && value > Self::max_value(bits) {
            return Err(format!(
                "value {:#x} exceeds maximum for {}-bit address",
                value, bits
            ));
        }

        Ok(Address { kind, value, bits })
    }

    /// Load address in a target whose pointers are `address_byte_size` bytes wide.
    pub fn load(value: u64, address_byte_size: u32) -> Result<Self, String> {
        let bits = address_byte_size
            .checked_mul(8)
            .and_then(|b| u8::try_from(b).ok())
            .ok_or_else(|| format!("unsupported address byte size {address_byte_size}"))?;
        Self::new(AddressKind::Load, value, bits)
    }

    /// The "no address" marker.
    pub fn invalid() -> Self {
        Address {
            kind: AddressKind::Invalid,
            value: INVALID_ADDRESS,
            bits: 64,
        }
    }

    fn max_value(bits: u8) -> u64 {
        match bits {
            16 => 0xFFFF,
            32 => 0xFFFF_FFFF,
            _ => u64::MAX,
        }
    }

    /// Check if the address refers to a real location.
    pub fn is_valid(&self) -> bool {
        self.kind != AddressKind::Invalid
            && self.value != INVALID_ADDRESS
            && self.value <= Self::max_value(self.bits)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    /// Deserialize from JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, String> {
        serde_json::from_str(json_str).map_err(|e| e.to_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "<invalid address>");
        }
        let width = usize::from(self.bits / 4);
        write!(f, "{}:{:#0w$x}", self.kind, self.value, w = width + 2)
    }
}
