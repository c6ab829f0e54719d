//! Values: a buffer reinterpreted as a typed, optionally addressed object.
//!
//! This is the seam to the debugger's value subsystem. A [`Value`] owns a copy
//! of its backing bytes and an opaque [`DataType`] tag. Values bound without a
//! load address are detached: every address query reports invalid.
//!
//! Binding never panics. Invalid type descriptors, including pointers derived
//! from an invalid base type, surface as [`DataError::InvalidType`].

use crate::core::{Address, BasicType, DataType, INVALID_ADDRESS};
use crate::data::DataBuffer;
use crate::error::{DataError, Result};
use crate::log_error;
use crate::memory::MemorySource;
use std::fmt;
use tracing::debug;

/// A typed view of a buffer, as presented to the display layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    name: String,
    data_type: DataType,
    data: DataBuffer,
    location: Option<Address>,
    error: Option<DataError>,
}

/// Bind `buffer` as a value of `data_type`, optionally located at `load_address`.
///
/// The buffer must hold at least one value's worth of bytes. A load address
/// equal to [`INVALID_ADDRESS`] is treated as absent.
pub fn bind(
    name: &str,
    buffer: &DataBuffer,
    data_type: &DataType,
    load_address: Option<u64>,
) -> Result<Value> {
    let size = data_type
        .byte_size(buffer.address_byte_size())
        .ok_or_else(|| {
            DataError::InvalidType(format!("type '{}' cannot back a value", data_type.name))
        })?;
    buffer.bytes_at(0, size)?;

    let location = match load_address.filter(|a| *a != INVALID_ADDRESS) {
        Some(addr) => Some(
            Address::load(addr, buffer.address_byte_size()).map_err(DataError::InvalidArgument)?,
        ),
        None => None,
    };

    debug!(value = name, ty = %data_type, size, located = location.is_some(), "bound value");
    Ok(Value {
        name: name.to_string(),
        data_type: data_type.clone(),
        data: buffer.clone(),
        location,
        error: None,
    })
}

impl Value {
    /// A value that exists only to carry `error`.
    pub fn invalid(name: impl Into<String>, error: DataError) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::invalid(),
            data: DataBuffer::new(),
            location: None,
            error: Some(error),
        }
    }

    /// Detached value over `data`; never addressable.
    pub fn from_data(name: impl Into<String>, data: &DataBuffer, data_type: &DataType) -> Self {
        let name = name.into();
        match bind(&name, data, data_type, None) {
            Ok(value) => value,
            Err(e) => Self::invalid(name, log_error!(e, "create value from data")),
        }
    }

    /// Value of `data_type` read from target memory at `address`.
    ///
    /// The object at an address is the pointee of a pointer holding that
    /// address, so the pointer type is derived first; a type that has no
    /// valid pointer form yields an invalid value.
    pub fn from_address<M: MemorySource + ?Sized>(
        name: impl Into<String>,
        memory: &M,
        address: u64,
        data_type: &DataType,
    ) -> Self {
        let name = name.into();
        let pointer_type = data_type.pointer_type();
        let Some(pointee) = pointer_type.pointee_type() else {
            let err = DataError::InvalidType(format!(
                "no pointer type for '{}'",
                data_type.name
            ));
            return Self::invalid(name, log_error!(err, "create value from address"));
        };

        let result = pointee
            .byte_size(memory.address_byte_size())
            .ok_or_else(|| DataError::InvalidType(format!("type '{}' has no size", pointee.name)))
            .and_then(|size| {
                let len = usize::try_from(size)
                    .map_err(|_| DataError::InvalidArgument(format!("size {size} too large")))?;
                DataBuffer::from_memory(memory, address, len)
            })
            .and_then(|data| bind(&name, &data, pointee, Some(address)));

        match result {
            Ok(value) => value,
            Err(e) => Self::invalid(name, log_error!(e, "create value from address")),
        }
    }

    /// Re-read this value's bytes from `memory` at its load address.
    ///
    /// Reads exactly the type's size. Detached and invalid values cannot be
    /// refreshed; on failure the previously captured bytes are kept.
    pub fn refresh<M: MemorySource + ?Sized>(&mut self, memory: &M) -> Result<()> {
        if !self.is_valid() {
            return Err(DataError::InvalidArgument("value is invalid".into()));
        }
        let address = self.load_address();
        if address == INVALID_ADDRESS {
            return Err(DataError::InvalidArgument("value has no address".into()));
        }
        let size = self.byte_size();
        let len = usize::try_from(size)
            .map_err(|_| DataError::InvalidArgument(format!("size {size} too large")))?;
        let data = DataBuffer::from_memory(memory, address, len)?;
        debug!(value = %self.name, address, len, "value refreshed");
        self.data = data;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none() && self.data_type.is_valid()
    }

    pub fn error(&self) -> Option<&DataError> {
        self.error.as_ref()
    }

    /// Load address, or [`INVALID_ADDRESS`] for detached values.
    pub fn load_address(&self) -> u64 {
        match &self.location {
            Some(addr) if addr.is_valid() => addr.value,
            _ => INVALID_ADDRESS,
        }
    }

    /// Location of the value; [`Address::invalid`] for detached values.
    pub fn address(&self) -> Address {
        match &self.location {
            Some(addr) if addr.is_valid() => addr.clone(),
            _ => Address::invalid(),
        }
    }

    /// A pointer value holding this value's load address.
    pub fn address_of(&self) -> Value {
        let name = format!("&{}", self.name);
        if !self.is_valid() {
            return Self::invalid(name, DataError::InvalidArgument("value is invalid".into()));
        }
        let addr = self.load_address();
        if addr == INVALID_ADDRESS {
            return Self::invalid(name, DataError::InvalidArgument("value has no address".into()));
        }

        let order = self.data.byte_order();
        let width = self.data.address_byte_size();
        let encoded = match width {
            4 => u32::try_from(addr).map(|a| crate::data::builder::encode_array(&[a], order)),
            8 => Ok(crate::data::builder::encode_array(&[addr], order)),
            other => {
                return Self::invalid(
                    name,
                    DataError::InvalidArgument(format!("cannot encode a {other}-byte address")),
                )
            }
        };
        match encoded {
            Ok(bytes) => Value {
                name,
                data_type: self.data_type.pointer_type(),
                data: DataBuffer::from_parts(bytes, order, width),
                location: None,
                error: None,
            },
            Err(_) => Self::invalid(
                name,
                DataError::InvalidArgument(format!("address {addr:#x} does not fit")),
            ),
        }
    }

    /// Copy of the backing bytes.
    pub fn data(&self) -> DataBuffer {
        self.data.clone()
    }

    /// Size of the value per its type, zero when invalid.
    pub fn byte_size(&self) -> u64 {
        self.data_type
            .byte_size(self.data.address_byte_size())
            .unwrap_or(0)
    }

    /// Rendered scalar value; `None` for invalid values and opaque types.
    pub fn value_string(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        if self.data_type.is_pointer() {
            let addr = self.data.read_address(0).ok()?;
            let width = self.data.address_byte_size() as usize * 2;
            return Some(format!("{addr:#0w$x}", w = width + 2));
        }
        let basic = self.data_type.basic_type()?;
        render_basic(&self.data, basic).ok()
    }
}

fn render_basic(data: &DataBuffer, basic: BasicType) -> Result<String> {
    let size = basic
        .byte_size(data.address_byte_size())
        .ok_or_else(|| DataError::InvalidType(basic.name().to_string()))?;
    let text = match basic {
        BasicType::Bool => (data.read::<u8>(0)? != 0).to_string(),
        BasicType::Char | BasicType::SignedChar | BasicType::UnsignedChar => {
            let b = data.read::<u8>(0)?;
            if b.is_ascii_graphic() || b == b' ' {
                format!("'{}'", b as char)
            } else {
                format!("'\\x{b:02x}'")
            }
        }
        BasicType::Float => data.read::<f32>(0)?.to_string(),
        BasicType::Double => data.read::<f64>(0)?.to_string(),
        _ if basic.is_signed() => match size {
            2 => data.read::<i16>(0)?.to_string(),
            4 => data.read::<i32>(0)?.to_string(),
            _ => data.read::<i64>(0)?.to_string(),
        },
        _ => match size {
            2 => data.read::<u16>(0)?.to_string(),
            4 => data.read::<u32>(0)?.to_string(),
            _ => data.read::<u64>(0)?.to_string(),
        },
    };
    Ok(text)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(e) = &self.error {
            return write!(f, "{}: <invalid value: {}>", self.name, e);
        }
        match self.value_string() {
            Some(v) => write!(f, "({}) {} = {}", self.data_type, self.name, v),
            None => write!(
                f,
                "({}) {} = <{} bytes>",
                self.data_type,
                self.name,
                self.byte_size()
            ),
        }
    }
}
