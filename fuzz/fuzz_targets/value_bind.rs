#![no_main]
use libfuzzer_sys::fuzz_target;
use typedbuf::{BasicType, ByteOrder, DataType, MemoryRegion, Value};

const TYPES: [BasicType; 6] = [
    BasicType::Invalid,
    BasicType::Void,
    BasicType::Char,
    BasicType::Int,
    BasicType::Long,
    BasicType::Double,
];

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let ty = DataType::basic(TYPES[data[0] as usize % TYPES.len()]);
    let ty = if data[1] & 1 == 1 { ty.pointer_type() } else { ty };
    let mem = MemoryRegion::new(0x1000, data[2..].to_vec(), ByteOrder::Little, 8);
    let addr = 0x1000 + u64::from(data[1] >> 1);
    let value = Value::from_address("fuzz", &mem, addr, &ty);
    let _ = value.value_string();
    let _ = value.address_of().value_string();
    let _ = value.to_string();
});
