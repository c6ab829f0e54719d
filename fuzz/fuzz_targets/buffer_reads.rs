#![no_main]
use libfuzzer_sys::fuzz_target;
use typedbuf::{ByteOrder, DataBuffer, Status};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let (head, body) = data.split_at(9);
    let order = if head[0] & 1 == 0 {
        ByteOrder::Little
    } else {
        ByteOrder::Big
    };
    let mut offset = [0u8; 8];
    offset.copy_from_slice(&head[1..9]);
    let offset = u64::from_le_bytes(offset);

    let mut buf = DataBuffer::new();
    if buf.set_data(body, order, 8).is_err() {
        return;
    }
    let mut status = Status::new();
    let _ = buf.get_u64(&mut status, offset);
    let _ = buf.get_f32(&mut status, offset);
    let _ = buf.get_address(&mut status, offset);
    let _ = buf.get_c_string(&mut status, offset);
    let _ = buf.read_raw(offset, body.len());
    let _ = buf.view::<u32>().to_vec();
});
