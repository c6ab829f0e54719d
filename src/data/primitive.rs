//! Typed, bounds-checked reads over a [`DataBuffer`].
//!
//! Every read is all-or-nothing: if `offset + size_of::<T>()` exceeds the
//! buffer, nothing is decoded and the read fails with `OutOfBounds`. The
//! `get_*` family reports through a [`Status`] and yields zero on failure.

use crate::config::DataConfig;
use crate::core::{ByteOrder, Status};
use crate::data::DataBuffer;
use crate::error::{DataError, Result};
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width scalar that can be decoded from and encoded to target bytes.
pub trait Primitive: Copy + Default + PartialEq + fmt::Debug + sealed::Sealed + 'static {
    /// Encoded width in bytes.
    const SIZE: usize;
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Decode from the first `SIZE` bytes of `bytes`.
    ///
    /// Callers guarantee `bytes.len() >= SIZE`.
    fn decode(bytes: &[u8], order: ByteOrder) -> Self;

    /// Append the encoding of `self` to `out`.
    fn encode_into(self, order: ByteOrder, out: &mut Vec<u8>);
}

macro_rules! impl_primitive {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();
                const NAME: &'static str = $name;

                fn decode(bytes: &[u8], order: ByteOrder) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    match order {
                        ByteOrder::Little => <$ty>::from_le_bytes(raw),
                        ByteOrder::Big => <$ty>::from_be_bytes(raw),
                    }
                }

                fn encode_into(self, order: ByteOrder, out: &mut Vec<u8>) {
                    match order {
                        ByteOrder::Little => out.extend_from_slice(&self.to_le_bytes()),
                        ByteOrder::Big => out.extend_from_slice(&self.to_be_bytes()),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    i8 => "sint8",
    i16 => "sint16",
    i32 => "sint32",
    i64 => "sint64",
    f32 => "float",
    f64 => "double",
}

macro_rules! status_getters {
    ($($fn_name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Read a `", stringify!($ty), "` at `offset`; zero on failure.")]
            pub fn $fn_name(&self, status: &mut Status, offset: u64) -> $ty {
                self.get::<$ty>(status, offset)
            }
        )*
    };
}

impl DataBuffer {
    /// Decode a `T` at `offset` using the buffer's byte order.
    pub fn read<T: Primitive>(&self, offset: u64) -> Result<T> {
        let bytes = self.bytes_at(offset, T::SIZE as u64)?;
        Ok(T::decode(bytes, self.byte_order()))
    }

    /// Like [`read`](Self::read), reporting failure through `status` and
    /// returning `T::default()` in that case.
    pub fn get<T: Primitive>(&self, status: &mut Status, offset: u64) -> T {
        status.record(self.read(offset))
    }

    status_getters! {
        get_u8 => u8,
        get_u16 => u16,
        get_u32 => u32,
        get_u64 => u64,
        get_i8 => i8,
        get_i16 => i16,
        get_i32 => i32,
        get_i64 => i64,
        get_f32 => f32,
        get_f64 => f64,
    }

    /// Read a target pointer: an unsigned integer `address_byte_size` wide.
    pub fn read_address(&self, offset: u64) -> Result<u64> {
        match self.address_byte_size() {
            1 => self.read::<u8>(offset).map(u64::from),
            2 => self.read::<u16>(offset).map(u64::from),
            4 => self.read::<u32>(offset).map(u64::from),
            8 => self.read::<u64>(offset),
            other => Err(DataError::InvalidArgument(format!(
                "cannot decode a {other}-byte address"
            ))),
        }
    }

    pub fn get_address(&self, status: &mut Status, offset: u64) -> u64 {
        status.record(self.read_address(offset))
    }

    /// Read a NUL-terminated string starting at `offset`.
    ///
    /// At most `max_len` bytes are scanned. The terminator must lie inside
    /// the buffer; invalid UTF-8 is replaced.
    pub fn read_c_string(&self, offset: u64, max_len: usize) -> Result<String> {
        let rest = self.bytes_at(offset, (self.len() as u64).saturating_sub(offset))?;
        let window = &rest[..rest.len().min(max_len)];
        match window.iter().position(|b| *b == 0) {
            Some(nul) => Ok(String::from_utf8_lossy(&window[..nul]).into_owned()),
            None if window.len() == rest.len() => Err(DataError::OutOfBounds {
                offset,
                size: rest.len() as u64 + 1,
                len: self.len() as u64,
            }),
            None => Err(DataError::InvalidArgument(format!(
                "no terminator within {max_len} bytes"
            ))),
        }
    }

    /// [`read_c_string`](Self::read_c_string) bounded by the default
    /// [`DataConfig::max_string_length`]; empty on failure.
    pub fn get_c_string(&self, status: &mut Status, offset: u64) -> String {
        let max_len = DataConfig::default().max_string_length;
        status.record(self.read_c_string(offset, max_len))
    }
}
