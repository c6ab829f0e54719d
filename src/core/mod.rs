//! Core leaf types shared by buffers and values.
//!
//! Byte order, addresses and the opaque type descriptor are supplied by the
//! surrounding debugger; [`Status`] is the explicit error channel used by the
//! zero-on-failure accessors.

pub mod address;
pub mod byte_order;
pub mod data_type;
pub mod status;

pub use address::{Address, AddressKind, INVALID_ADDRESS};
pub use byte_order::ByteOrder;
pub use data_type::{BasicType, DataType, DataTypeKind};
pub use status::Status;
