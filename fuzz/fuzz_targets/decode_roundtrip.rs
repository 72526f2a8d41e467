#![no_main]

use libfuzzer_sys::fuzz_target;
use strictleb_wire::{decode_i32, decode_i64, decode_u32, decode_u64};

// Fuzz target: minimal encode->decode roundtrip.
//
// Takes 8 bytes of fuzz input as an integer, encodes it as minimal LEB128
// for each type it fits, then asserts the strict decoder returns the same
// value and consumes the whole encoding.
fn encode_unsigned(mut value: u64) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

fn encode_signed(mut value: i64) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if (value == 0 && byte & 0x40 == 0) || (value == -1 && byte & 0x40 != 0) {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let raw = u64::from_le_bytes(data[..8].try_into().unwrap());

    let buf = encode_unsigned(raw);
    assert_eq!(decode_u64(&buf).unwrap(), (raw, buf.len()));

    let buf = encode_signed(raw as i64);
    assert_eq!(decode_i64(&buf).unwrap(), (raw as i64, buf.len()));

    if let Ok(v) = u32::try_from(raw) {
        let buf = encode_unsigned(raw);
        assert_eq!(decode_u32(&buf).unwrap(), (v, buf.len()));
    }
    if let Ok(v) = i32::try_from(raw as i64) {
        let buf = encode_signed(raw as i64);
        assert_eq!(decode_i32(&buf).unwrap(), (v, buf.len()));
    }
});
