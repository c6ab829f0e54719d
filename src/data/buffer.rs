//! DataBuffer: an owned block of target bytes with its decoding parameters.
//!
//! Byte order and address width are buffer-wide. A buffer that was never
//! populated has neither; reads and in-place encoders then fall back to the
//! host's byte order and pointer width.

use crate::core::ByteOrder;
use crate::error::{DataError, Result};
use crate::memory::MemorySource;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Contiguous bytes captured from (or synthesized for) a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBuffer {
    #[serde(with = "hex_bytes")]
    bytes: Vec<u8>,
    byte_order: Option<ByteOrder>,
    address_byte_size: Option<u32>,
}

impl DataBuffer {
    /// An empty buffer with unspecified byte order and address width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a buffer without validation. Empty `bytes` are allowed.
    pub(crate) fn from_parts(bytes: Vec<u8>, byte_order: ByteOrder, address_byte_size: u32) -> Self {
        Self {
            bytes,
            byte_order: Some(byte_order),
            address_byte_size: Some(address_byte_size),
        }
    }

    /// Copy `len` bytes of target memory starting at `address`.
    ///
    /// Byte order and address width are taken from the memory source.
    pub fn from_memory<M: MemorySource + ?Sized>(
        source: &M,
        address: u64,
        len: usize,
    ) -> Result<Self> {
        let bytes = source.read_memory(address, len)?;
        debug!(address, len, "captured buffer from memory");
        Ok(Self::from_parts(
            bytes,
            source.byte_order(),
            source.address_byte_size(),
        ))
    }

    /// Replace contents and parameters wholesale.
    ///
    /// Fails with `InvalidArgument` for an empty source or a zero address
    /// width; the buffer is left untouched in that case.
    pub fn set_data(
        &mut self,
        bytes: &[u8],
        byte_order: ByteOrder,
        address_byte_size: u32,
    ) -> Result<()> {
        let span = crate::span_trace!("set_data", len = bytes.len());
        let _guard = span.enter();
        if bytes.is_empty() {
            return Err(DataError::InvalidArgument("empty byte source".to_string()));
        }
        if address_byte_size == 0 {
            return Err(DataError::InvalidArgument(
                "address byte size must be positive".to_string(),
            ));
        }
        self.replace(bytes.to_vec(), byte_order, address_byte_size);
        Ok(())
    }

    pub(crate) fn replace(&mut self, bytes: Vec<u8>, byte_order: ByteOrder, address_byte_size: u32) {
        debug!(len = bytes.len(), %byte_order, address_byte_size, "buffer contents replaced");
        self.bytes = bytes;
        self.byte_order = Some(byte_order);
        self.address_byte_size = Some(address_byte_size);
    }

    /// Copy `other`'s bytes onto the end of this buffer.
    ///
    /// Bytes are copied verbatim; this buffer's byte order keeps governing
    /// reads. A buffer without parameters adopts those of `other`.
    pub fn append(&mut self, other: &DataBuffer) {
        let span = crate::span_trace!("append", len = other.bytes.len());
        let _guard = span.enter();
        if other.bytes.is_empty() {
            return;
        }
        if self.byte_order.is_none() {
            self.byte_order = other.byte_order;
        }
        if self.address_byte_size.is_none() {
            self.address_byte_size = other.address_byte_size;
        }
        self.bytes.extend_from_slice(&other.bytes);
        trace!(appended = other.bytes.len(), len = self.bytes.len(), "buffer appended");
    }

    /// Drop contents and parameters, returning to the freshly created state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A buffer is valid once it holds backing bytes.
    pub fn is_valid(&self) -> bool {
        !self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Effective byte order (host order when never set).
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order.unwrap_or_else(ByteOrder::native)
    }

    /// Effective address width in bytes (host pointer width when never set).
    pub fn address_byte_size(&self) -> u32 {
        self.address_byte_size
            .unwrap_or(std::mem::size_of::<usize>() as u32)
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = Some(byte_order);
    }

    pub fn set_address_byte_size(&mut self, address_byte_size: u32) -> Result<()> {
        if address_byte_size == 0 {
            return Err(DataError::InvalidArgument(
                "address byte size must be positive".to_string(),
            ));
        }
        self.address_byte_size = Some(address_byte_size);
        Ok(())
    }

    /// Borrow exactly `len` bytes at `offset`, or fail without reading any.
    pub(crate) fn bytes_at(&self, offset: u64, len: u64) -> Result<&[u8]> {
        let buf_len = self.bytes.len() as u64;
        match offset.checked_add(len) {
            Some(end) if end <= buf_len => Ok(&self.bytes[offset as usize..end as usize]),
            _ => {
                debug!(offset, size = len, len = buf_len, "read out of bounds");
                Err(DataError::OutOfBounds {
                    offset,
                    size: len,
                    len: buf_len,
                })
            }
        }
    }

    /// Copy `len` raw bytes starting at `offset`.
    pub fn read_raw(&self, offset: u64, len: usize) -> Result<Vec<u8>> {
        self.bytes_at(offset, len as u64).map(<[u8]>::to_vec)
    }

    /// Lowercase hex encoding of the whole buffer.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DataError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| DataError::Serialization(e.to_string()))
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(d)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRegion;

    fn buffer(bytes: &[u8]) -> DataBuffer {
        let mut buf = DataBuffer::new();
        buf.set_data(bytes, ByteOrder::Little, 8).unwrap();
        buf
    }

    #[test]
    fn test_new_is_empty_and_invalid() {
        let buf = DataBuffer::new();
        assert_eq!(buf.len(), 0);
        assert!(!buf.is_valid());
        assert_eq!(buf.byte_order(), ByteOrder::native());
        assert_eq!(buf.address_byte_size() as usize, std::mem::size_of::<usize>());
    }

    #[test]
    fn test_set_data_replaces_wholesale() {
        let mut buf = buffer(b"0123456789");
        buf.set_data(b"A\0\0\0", ByteOrder::Big, 4).unwrap();
        assert_eq!(buf.bytes(), b"A\0\0\0");
        assert_eq!(buf.byte_order(), ByteOrder::Big);
        assert_eq!(buf.address_byte_size(), 4);
    }

    #[test]
    fn test_set_data_rejects_bad_input() {
        let mut buf = buffer(b"keep");
        assert!(matches!(
            buf.set_data(b"", ByteOrder::Little, 8),
            Err(DataError::InvalidArgument(_))
        ));
        assert!(matches!(
            buf.set_data(b"x", ByteOrder::Little, 0),
            Err(DataError::InvalidArgument(_))
        ));
        assert_eq!(buf.bytes(), b"keep");
    }

    #[test]
    fn test_append_copies_and_keeps_receiver_params() {
        let mut a = buffer(b"A\0\0\0");
        let mut b = DataBuffer::new();
        b.set_data(b"BCD", ByteOrder::Big, 4).unwrap();

        a.append(&b);
        assert_eq!(a.bytes(), b"A\0\0\0BCD");
        assert_eq!(a.byte_order(), ByteOrder::Little);
        assert_eq!(a.address_byte_size(), 8);
        assert_eq!(b.bytes(), b"BCD");
    }

    #[test]
    fn test_append_is_associative() {
        let b = buffer(b"bb");
        let c = buffer(b"ccc");

        let mut stepwise = buffer(b"a");
        stepwise.append(&b);
        stepwise.append(&c);

        let mut bc = b.clone();
        bc.append(&c);
        let mut combined = buffer(b"a");
        combined.append(&bc);

        assert_eq!(stepwise.bytes(), combined.bytes());
    }

    #[test]
    fn test_append_to_fresh_buffer_adopts_params() {
        let mut other = DataBuffer::new();
        other.set_data(b"xy", ByteOrder::Big, 4).unwrap();
        let mut fresh = DataBuffer::new();
        fresh.append(&other);
        assert_eq!(fresh.byte_order(), ByteOrder::Big);
        assert_eq!(fresh.address_byte_size(), 4);

        fresh.append(&DataBuffer::new());
        assert_eq!(fresh.len(), 2);
    }

    #[test]
    fn test_read_raw_is_all_or_nothing() {
        let buf = buffer(b"abcdef");
        assert_eq!(buf.read_raw(2, 3).unwrap(), b"cde");
        assert_eq!(buf.read_raw(6, 0).unwrap(), Vec::<u8>::new());
        assert_eq!(
            buf.read_raw(4, 3),
            Err(DataError::OutOfBounds {
                offset: 4,
                size: 3,
                len: 6
            })
        );
        assert!(buf.read_raw(u64::MAX, 2).is_err());
    }

    #[test]
    fn test_from_memory() {
        let mem = MemoryRegion::new(0x2000, vec![1, 2, 3, 4, 5, 6], ByteOrder::Big, 4);
        let buf = DataBuffer::from_memory(&mem, 0x2002, 3).unwrap();
        assert_eq!(buf.bytes(), &[3, 4, 5]);
        assert_eq!(buf.byte_order(), ByteOrder::Big);
        assert_eq!(buf.address_byte_size(), 4);
        assert!(matches!(
            DataBuffer::from_memory(&mem, 0x2004, 8),
            Err(DataError::Memory(_))
        ));
    }

    #[test]
    fn test_clear() {
        let mut buf = buffer(b"abc");
        buf.clear();
        assert!(!buf.is_valid());
        assert_eq!(buf, DataBuffer::new());
    }

    #[test]
    fn test_json_roundtrip() {
        let buf = buffer(&[0xde, 0xad, 0xbe, 0xef]);
        let json = buf.to_json().unwrap();
        assert!(json.contains("deadbeef"));
        assert_eq!(DataBuffer::from_json(&json).unwrap(), buf);
        assert!(matches!(
            DataBuffer::from_json(r#"{"bytes":"zz","byte_order":null,"address_byte_size":null}"#),
            Err(DataError::Serialization(_))
        ));
    }
}
