//! Test support for the strictleb integration tests and benches.
//!
//! The production crates only decode. The tests need encodings to feed the
//! decoder, so this crate carries a minimal LEB128 encoder, a padding helper
//! that produces longer-than-minimal canonical encodings, and a reference
//! decoder built on `i128` arithmetic that defines "valid" independently of
//! the bit-level rules in `strictleb-wire`.

#![allow(clippy::pedantic)]

use strictleb_wire::LebType;

/// Minimal unsigned LEB128 encoding of `value`.
pub fn encode_unsigned(mut value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(10);
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

/// Minimal signed LEB128 encoding of `value`.
pub fn encode_signed(mut value: i64) -> Vec<u8> {
    let mut out = Vec::with_capacity(10);
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        let done = (value == 0 && byte & 0x40 == 0) || (value == -1 && byte & 0x40 != 0);
        if done {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// Extend a minimal encoding to exactly `groups` bytes with fill groups.
///
/// `negative` selects the sign fill (`0xFF … 0x7F`) over the zero fill
/// (`0x80 … 0x00`). The result encodes the same value.
///
/// # Panics
///
/// Panics if `groups` is shorter than the minimal encoding.
pub fn pad(mut minimal: Vec<u8>, groups: usize, negative: bool) -> Vec<u8> {
    assert!(groups >= minimal.len(), "cannot shrink an encoding");
    if groups == minimal.len() {
        return minimal;
    }
    let (more, last) = if negative { (0xFF, 0x7F) } else { (0x80, 0x00) };
    if let Some(tail) = minimal.last_mut() {
        *tail |= 0x80;
    }
    while minimal.len() < groups - 1 {
        minimal.push(more);
    }
    minimal.push(last);
    minimal
}

/// Minimal encoding of `value` for the given type.
///
/// Signed types take the value as `i64`, unsigned types as `u64`; callers
/// pass values already inside the type's range.
pub fn encode_as(ty: LebType, value: i128) -> Vec<u8> {
    if ty.is_signed() {
        encode_signed(value as i64)
    } else {
        encode_unsigned(value as u64)
    }
}

/// Inclusive value range of a type.
pub fn type_range(ty: LebType) -> (i128, i128) {
    match ty {
        LebType::I32 => (i32::MIN as i128, i32::MAX as i128),
        LebType::U32 => (0, u32::MAX as i128),
        LebType::I64 => (i64::MIN as i128, i64::MAX as i128),
        LebType::U64 => (0, u64::MAX as i128),
    }
}

/// Reference decoder.
///
/// Reads groups into an `i128`, sign-extends signed encodings from bit 6 of
/// the terminator, and accepts the result iff it used at most `max_groups`
/// groups and lies inside the type's range. Returns `None` for every kind
/// of failure.
pub fn reference_decode(ty: LebType, bytes: &[u8]) -> Option<(i128, usize)> {
    let mut value: i128 = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if i >= ty.max_groups() {
            return None;
        }
        let shift = 7 * i as u32;
        value |= i128::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            let bits = shift + 7;
            if ty.is_signed() && byte & 0x40 != 0 {
                value |= -1i128 << bits;
            }
            let (min, max) = type_range(ty);
            return (min..=max).contains(&value).then_some((value, i + 1));
        }
    }
    None
}
