//! Python-visible `Data` class over [`DataBuffer`].
//!
//! Offset-based getters take a `Status` and return zero when the read is out
//! of range, recording the failure there. The `uint8`, `uint32`, ...
//! properties return the whole typed projection.

use super::status::PyStatus;
use crate::config::DataConfig;
use crate::core::ByteOrder;
use crate::data::DataBuffer;
use pyo3::prelude::*;

/// Python wrapper around a typed data buffer.
#[pyclass(name = "Data")]
#[derive(Clone, Default)]
pub struct PyData {
    inner: DataBuffer,
}

macro_rules! py_data_methods {
    ($($getter:ident, $prop:ident, $setter:ident => $ty:ty),* $(,)? ; $($rest:tt)*) => {
        #[pymethods]
        impl PyData {
            $(
                pub fn $getter(&self, status: &mut PyStatus, offset: u64) -> $ty {
                    self.inner.get::<$ty>(&mut status.inner, offset)
                }

                #[getter]
                pub fn $prop(&self) -> Vec<$ty> {
                    self.inner.view::<$ty>().to_vec()
                }

                pub fn $setter(&mut self, values: Vec<$ty>) {
                    self.inner.set_from_array(&values);
                }
            )*

            $($rest)*
        }
    };
}

macro_rules! py_array_constructors {
    ($($create:ident => $ty:ty),* $(,)?) => {
        $(
            #[pyfunction]
            pub fn $create(order: &str, address_byte_size: u32, values: Vec<$ty>) -> PyResult<PyData> {
                let order = order.parse::<ByteOrder>()?;
                let inner = DataBuffer::from_array(order, address_byte_size, &values)?;
                Ok(PyData { inner })
            }
        )*

        fn register_array_constructors(m: &Bound<'_, PyModule>) -> PyResult<()> {
            $(m.add_function(wrap_pyfunction!($create, m)?)?;)*
            Ok(())
        }
    };
}

py_array_constructors! {
    create_data_from_uint8_array => u8,
    create_data_from_uint16_array => u16,
    create_data_from_uint32_array => u32,
    create_data_from_uint64_array => u64,
    create_data_from_sint8_array => i8,
    create_data_from_sint16_array => i16,
    create_data_from_sint32_array => i32,
    create_data_from_sint64_array => i64,
    create_data_from_float_array => f32,
    create_data_from_double_array => f64,
}

#[pyfunction]
pub fn create_data_from_cstring(
    order: &str,
    address_byte_size: u32,
    text: &str,
) -> PyResult<PyData> {
    let inner = DataBuffer::from_c_string(order.parse::<ByteOrder>()?, address_byte_size, text)?;
    Ok(PyData { inner })
}

py_data_methods! {
    get_unsigned_int8, uint8, set_data_from_uint8_array => u8,
    get_unsigned_int16, uint16, set_data_from_uint16_array => u16,
    get_unsigned_int32, uint32, set_data_from_uint32_array => u32,
    get_unsigned_int64, uint64, set_data_from_uint64_array => u64,
    get_signed_int8, sint8, set_data_from_sint8_array => i8,
    get_signed_int16, sint16, set_data_from_sint16_array => i16,
    get_signed_int32, sint32, set_data_from_sint32_array => i32,
    get_signed_int64, sint64, set_data_from_sint64_array => i64,
    get_float, float, set_data_from_float_array => f32,
    get_double, double, set_data_from_double_array => f64;

    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: Vec<u8>, order: &str, address_byte_size: u32) -> PyResult<()> {
        self.inner
            .set_data(&data, order.parse::<ByteOrder>()?, address_byte_size)?;
        Ok(())
    }

    pub fn set_data_from_cstring(&mut self, text: &str) {
        self.inner.set_from_c_string(text);
    }

    pub fn append(&mut self, other: &PyData) {
        self.inner.append(&other.inner);
    }

    pub fn get_address(&self, status: &mut PyStatus, offset: u64) -> u64 {
        self.inner.get_address(&mut status.inner, offset)
    }

    pub fn get_string(&self, status: &mut PyStatus, offset: u64) -> String {
        self.inner.get_c_string(&mut status.inner, offset)
    }

    /// Raw bytes at `offset`; empty when the range is out of bounds.
    pub fn read_raw_data(&self, status: &mut PyStatus, offset: u64, size: usize) -> Vec<u8> {
        status.inner.record(self.inner.read_raw(offset, size))
    }

    pub fn get_byte_order(&self) -> String {
        self.inner.byte_order().to_string()
    }

    pub fn get_address_byte_size(&self) -> u32 {
        self.inner.address_byte_size()
    }

    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Hex dump with `bytes_per_line` bytes per row.
    #[pyo3(signature = (bytes_per_line = 16))]
    pub fn describe(&self, bytes_per_line: usize) -> String {
        let config = DataConfig {
            bytes_per_line,
            ..DataConfig::default()
        };
        self.inner.describe(&config)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Data(len={}, byte_order='{}', address_byte_size={})",
            self.inner.len(),
            self.inner.byte_order(),
            self.inner.address_byte_size()
        )
    }
}

/// Register data-buffer Python bindings.
pub fn register_data_bindings(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyData>()?;
    m.add_class::<PyStatus>()?;
    m.add_function(wrap_pyfunction!(create_data_from_cstring, m)?)?;
    register_array_constructors(m)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_getters_return_zero() {
        let data = create_data_from_uint32_array("little", 8, vec![1, 2]).unwrap();
        let mut status = PyStatus::default();

        assert_eq!(data.get_unsigned_int32(&mut status, 4), 2);
        assert!(status.success());

        assert_eq!(data.get_unsigned_int32(&mut status, 6), 0);
        assert!(status.fail());
        status.clear();

        assert_eq!(data.get_double(&mut status, 8), 0.0);
        assert!(status.fail());
        status.clear();

        assert_eq!(data.get_string(&mut status, 8), "");
        assert!(data.read_raw_data(&mut status, 4, 8).is_empty());
        assert!(status.fail());
    }

    #[test]
    fn test_thirty_two_bit_constructors_and_setters() {
        let mut data = create_data_from_sint32_array("big", 4, vec![2, -2]).unwrap();
        assert_eq!(data.sint32(), vec![2, -2]);
        assert_eq!(data.uint32(), vec![2, 4_294_967_294]);

        data.set_data_from_uint32_array(vec![5, 6, 7]);
        assert_eq!(data.uint32(), vec![5, 6, 7]);
        assert_eq!(data.get_byte_order(), "big");

        data.set_data_from_sint32_array(vec![-1]);
        let mut status = PyStatus::default();
        assert_eq!(data.get_signed_int32(&mut status, 0), -1);
        assert!(status.success());
    }

    #[test]
    fn test_set_data_then_append() {
        let mut data = PyData::new();
        data.set_data(b"A\0\0\0".to_vec(), "little", 8).unwrap();
        let mut tail = PyData::new();
        tail.set_data(b"BCD".to_vec(), "big", 8).unwrap();
        data.append(&tail);

        let mut status = PyStatus::default();
        let codes: Vec<u8> = (0..7)
            .map(|i| data.get_unsigned_int8(&mut status, i))
            .collect();
        assert_eq!(codes, vec![65, 0, 0, 0, 66, 67, 68]);
        assert_eq!(data.get_unsigned_int32(&mut status, 0), 65);
        assert!(status.success());

        assert!(data.set_data(Vec::new(), "little", 8).is_err());
        assert!(data.set_data(vec![1], "middle", 8).is_err());
    }
}
