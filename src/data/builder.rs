//! Building buffers from primitive arrays and C strings.
//!
//! One encoder serves both entry points: `from_*` produces a fresh buffer,
//! `set_from_*` replaces an existing buffer's contents in place while
//! keeping its byte order and address width.

use crate::core::ByteOrder;
use crate::data::{DataBuffer, Primitive};
use crate::error::{DataError, Result};

/// Encode `values` back to back at a stride of `T::SIZE`.
pub fn encode_array<T: Primitive>(values: &[T], order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * T::SIZE);
    for value in values {
        value.encode_into(order, &mut out);
    }
    out
}

fn check_address_byte_size(address_byte_size: u32) -> Result<()> {
    if address_byte_size == 0 {
        return Err(DataError::InvalidArgument(
            "address byte size must be positive".to_string(),
        ));
    }
    Ok(())
}

impl DataBuffer {
    /// A new buffer holding `values` encoded in `byte_order`.
    ///
    /// An empty slice yields a valid zero-length result.
    pub fn from_array<T: Primitive>(
        byte_order: ByteOrder,
        address_byte_size: u32,
        values: &[T],
    ) -> Result<Self> {
        check_address_byte_size(address_byte_size)?;
        Ok(Self::from_parts(
            encode_array(values, byte_order),
            byte_order,
            address_byte_size,
        ))
    }

    /// A new buffer holding the bytes of `text`, without a terminator.
    pub fn from_c_string(byte_order: ByteOrder, address_byte_size: u32, text: &str) -> Result<Self> {
        check_address_byte_size(address_byte_size)?;
        Ok(Self::from_parts(
            text.as_bytes().to_vec(),
            byte_order,
            address_byte_size,
        ))
    }

    /// Replace the contents with `values`, encoded in this buffer's byte order.
    pub fn set_from_array<T: Primitive>(&mut self, values: &[T]) {
        let order = self.byte_order();
        let address_byte_size = self.address_byte_size();
        self.replace(encode_array(values, order), order, address_byte_size);
    }

    /// Replace the contents with the bytes of `text`, without a terminator.
    pub fn set_from_c_string(&mut self, text: &str) {
        let order = self.byte_order();
        let address_byte_size = self.address_byte_size();
        self.replace(text.as_bytes().to_vec(), order, address_byte_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    #[test]
    fn test_encode_stride_and_order() {
        assert_eq!(
            encode_array(&[1u16, 0x0203], ByteOrder::Big),
            vec![0x00, 0x01, 0x02, 0x03]
        );
        assert_eq!(
            encode_array(&[1u16, 0x0203], ByteOrder::Little),
            vec![0x01, 0x00, 0x03, 0x02]
        );
        assert!(encode_array::<u64>(&[], ByteOrder::Little).is_empty());
    }

    #[test]
    fn test_from_u64_array() {
        let buf = DataBuffer::from_array(ByteOrder::Little, 8, &[1u64, 2, 3, 4, 5]).unwrap();
        assert_eq!(buf.len(), 40);
        for (i, expected) in (1u64..=5).enumerate() {
            assert_eq!(buf.read::<u64>(i as u64 * 8).unwrap(), expected);
        }
    }

    #[test]
    fn test_from_signed_and_double_arrays() {
        let buf = DataBuffer::from_array(ByteOrder::Big, 4, &[2i32, -2]).unwrap();
        assert_eq!(buf.read::<i32>(0).unwrap(), 2);
        assert_eq!(buf.read::<i32>(4).unwrap(), -2);
        assert_eq!(buf.read::<u32>(4).unwrap(), 4_294_967_294);

        let buf = DataBuffer::from_array(ByteOrder::Little, 8, &[1.5f64, 6.25, 2.75]).unwrap();
        assert!((buf.read::<f64>(8).unwrap() - 6.25).abs() < f64::EPSILON);
        assert!((buf.read::<f64>(16).unwrap() - 2.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_array_is_not_an_error() {
        let buf = DataBuffer::from_array::<u32>(ByteOrder::Little, 8, &[]).unwrap();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.byte_order(), ByteOrder::Little);
    }

    #[test]
    fn test_zero_address_width_rejected() {
        assert!(matches!(
            DataBuffer::from_array(ByteOrder::Little, 0, &[1u8]),
            Err(DataError::InvalidArgument(_))
        ));
        assert!(DataBuffer::from_c_string(ByteOrder::Little, 0, "x").is_err());
    }

    #[test]
    fn test_c_string_has_no_terminator() {
        let buf = DataBuffer::from_c_string(ByteOrder::Little, 8, "hello!").unwrap();
        assert_eq!(buf.len(), 6);
        let mut status = Status::new();
        let codes: Vec<u8> = (0..6).map(|i| buf.get_u8(&mut status, i)).collect();
        assert_eq!(codes, vec![104, 101, 108, 108, 111, 33]);
        assert!(status.success());
    }

    #[test]
    fn test_set_from_array_keeps_parameters() {
        let mut buf = DataBuffer::new();
        buf.set_data(b"xxxxxxxxxxxx", ByteOrder::Big, 4).unwrap();
        buf.set_from_array(&[2i64, -2]);
        assert_eq!(buf.len(), 16);
        assert_eq!(buf.byte_order(), ByteOrder::Big);
        assert_eq!(buf.address_byte_size(), 4);
        assert_eq!(buf.read::<i32>(0).unwrap(), 0);
        assert_eq!(buf.read::<i32>(4).unwrap(), 2);
        assert_eq!(buf.read::<i64>(8).unwrap(), -2);
    }

    #[test]
    fn test_set_on_fresh_buffer_uses_host_defaults() {
        let mut buf = DataBuffer::new();
        buf.set_from_array(&[2i64, -2]);
        // Host order: the low half of each 64-bit element comes first on
        // little-endian hosts.
        if ByteOrder::native() == ByteOrder::Little {
            assert_eq!(buf.read::<i32>(0).unwrap(), 2);
            assert_eq!(buf.read::<i32>(8).unwrap(), -2);
        }
        assert_eq!(buf.read::<i64>(8).unwrap(), -2);

        buf.set_from_c_string("hello!");
        assert_eq!(buf.bytes(), b"hello!");
    }
}
