//! MemorySource: bounded reads of target memory by load address.
//!
//! The process subsystem implements [`MemorySource`] for a live debuggee.
//! [`MemoryRegion`] is an in-process stand-in: one contiguous mapped range
//! starting at a base address. Implementations must enforce bounds and never
//! return a short read.

use crate::core::address::INVALID_ADDRESS;
use crate::core::ByteOrder;
use tracing::trace;

/// Errors that can occur during memory reads.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("address {address:#x} is not mapped")]
    Unmapped { address: u64 },
    #[error("read of {len} byte(s) at {address:#x} runs past the mapped range")]
    Truncated { address: u64, len: usize },
    #[error("invalid address")]
    InvalidAddress,
}

/// Bounded memory reads by load address.
pub trait MemorySource {
    /// Read exactly `len` bytes starting at `address`.
    fn read_memory(&self, address: u64, len: usize) -> Result<Vec<u8>, MemoryError>;

    /// Byte order of the target.
    fn byte_order(&self) -> ByteOrder;

    /// Pointer width of the target in bytes.
    fn address_byte_size(&self) -> u32;
}

/// A single mapped range of target memory held in-process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion {
    base: u64,
    data: Vec<u8>,
    byte_order: ByteOrder,
    address_byte_size: u32,
}

impl MemoryRegion {
    pub fn new(base: u64, data: Vec<u8>, byte_order: ByteOrder, address_byte_size: u32) -> Self {
        Self {
            base,
            data,
            byte_order,
            address_byte_size,
        }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Translate `address..address+len` to an index range into `data`.
    ///
    /// `address` itself must be mapped, even for zero-length spans.
    fn span(&self, address: u64, len: usize) -> Result<std::ops::Range<usize>, MemoryError> {
        if address == INVALID_ADDRESS {
            return Err(MemoryError::InvalidAddress);
        }
        if address < self.base || address - self.base >= self.data.len() as u64 {
            return Err(MemoryError::Unmapped { address });
        }
        let start = (address - self.base) as usize;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(MemoryError::Truncated { address, len })?;
        Ok(start..end)
    }

    /// Overwrite target memory, as a running debuggee would.
    pub fn write_memory(&mut self, address: u64, bytes: &[u8]) -> Result<(), MemoryError> {
        let span = self.span(address, bytes.len())?;
        self.data[span].copy_from_slice(bytes);
        Ok(())
    }
}

impl MemorySource for MemoryRegion {
    fn read_memory(&self, address: u64, len: usize) -> Result<Vec<u8>, MemoryError> {
        let span = self.span(address, len)?;
        trace!(address, len, "memory read");
        Ok(self.data[span].to_vec())
    }

    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn address_byte_size(&self) -> u32 {
        self.address_byte_size
    }
}
