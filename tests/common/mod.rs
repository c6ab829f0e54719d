//! Shared fixtures for integration tests.
//!
//! Models a small debuggee: an array of two `struct foo { uint32_t a;
//! uint32_t b; float c; }` mapped at a fixed load address.

#![allow(dead_code)]

use typedbuf::{ByteOrder, DataType, MemoryRegion};

/// Load address of `foobar[0]`.
pub const FOOBAR_ADDR: u64 = 0x7ffe_0000;

/// Size of one `struct foo`.
pub const FOO_SIZE: u64 = 12;

/// Encode `[(a, b, c)]` as a little-endian array of `struct foo`.
pub fn foo_bytes(items: &[(u32, u32, f32)]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(items.len() * FOO_SIZE as usize);
    for (a, b, c) in items {
        bytes.extend_from_slice(&a.to_le_bytes());
        bytes.extend_from_slice(&b.to_le_bytes());
        bytes.extend_from_slice(&c.to_le_bytes());
    }
    bytes
}

/// `foo foobar[2] = {{1, 9, 3.25}, {8, 7, 3.25}}` on a 64-bit little-endian target.
pub fn foobar_memory() -> MemoryRegion {
    MemoryRegion::new(
        FOOBAR_ADDR,
        foo_bytes(&[(1, 9, 3.25), (8, 7, 3.25)]),
        ByteOrder::Little,
        8,
    )
}

pub fn foo_type() -> DataType {
    DataType::opaque("foo", FOO_SIZE)
}
