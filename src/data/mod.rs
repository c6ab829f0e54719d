//! The typed data buffer and everything that reads or builds one.
//!
//! - `buffer`: owned bytes plus byte order and address width
//! - `primitive`: bounds-checked typed reads
//! - `builder`: encoding of primitive arrays and C strings
//! - `view`: read-only typed projections over a buffer
//! - `describe`: hex dump used for diagnostic printing

pub mod buffer;
pub mod builder;
pub mod describe;
pub mod primitive;
pub mod view;

pub use buffer::DataBuffer;
pub use primitive::Primitive;
pub use view::TypedView;
