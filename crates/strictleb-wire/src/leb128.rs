use crate::error::LebError;
use crate::value::{LebType, LebValue};

const CONTINUATION_BIT: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7F;
const SIGN_BIT: u8 = 0x40;

/// Maximum number of LEB128 groups for an integer of `bits` width.
/// ceil(bits / 7): 5 for 32-bit, 10 for 64-bit.
pub const fn max_groups(bits: u32) -> usize {
    bits.div_ceil(7) as usize
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
}

/// A fixed-width integer that [`decode`] can produce.
///
/// Sealed: implemented for `i32`, `u32`, `i64` and `u64` only. The width and
/// signedness constants drive every difference between the four decoders.
pub trait LebInt: Copy + sealed::Sealed {
    const TYPE: LebType;
    const BITS: u32;
    const SIGNED: bool;
    const MAX_GROUPS: usize = max_groups(Self::BITS);

    /// Reinterpret the low `BITS` bits of the accumulator as `Self`.
    fn from_raw(raw: u64) -> Self;
}

impl LebInt for i32 {
    const TYPE: LebType = LebType::I32;
    const BITS: u32 = 32;
    const SIGNED: bool = true;

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn from_raw(raw: u64) -> Self {
        raw as u32 as i32
    }
}

impl LebInt for u32 {
    const TYPE: LebType = LebType::U32;
    const BITS: u32 = 32;
    const SIGNED: bool = false;

    #[allow(clippy::cast_possible_truncation)]
    fn from_raw(raw: u64) -> Self {
        raw as u32
    }
}

impl LebInt for i64 {
    const TYPE: LebType = LebType::I64;
    const BITS: u32 = 64;
    const SIGNED: bool = true;

    #[allow(clippy::cast_possible_wrap)]
    fn from_raw(raw: u64) -> Self {
        raw as i64
    }
}

impl LebInt for u64 {
    const TYPE: LebType = LebType::U64;
    const BITS: u32 = 64;
    const SIGNED: bool = false;

    fn from_raw(raw: u64) -> Self {
        raw
    }
}

/// Decode a strictly canonical LEB128 value of type `T` from the start of `buf`.
///
/// Bytes after the terminating group are left untouched, so `buf` may be
/// the remainder of a larger binary payload.
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success, with `bytes_consumed` in
/// `1..=T::MAX_GROUPS`.
///
/// # Errors
///
/// - [`LebError::Truncated`] if `buf` ends while the continuation bit is set.
/// - [`LebError::TooLong`] if no terminating byte appears within
///   `T::MAX_GROUPS` bytes.
/// - [`LebError::Overflow`] if the terminating byte's bits beyond the type's
///   width are not all zero (unsigned) or all copies of the sign bit (signed).
///
/// # Canonical terminators
///
/// Only the last of the `MAX_GROUPS` groups can straddle the type's width.
/// Its in-range bits are the low `used` bits; the rest must be fill:
///
/// | Type | used | Legal 5th/10th byte patterns (payload)       |
/// |------|------|----------------------------------------------|
/// | u32  | 4    | `0b000_xxxx`                                 |
/// | i32  | 4    | `0b000_0xxx` or `0b111_1xxx`                 |
/// | u64  | 1    | `0x00`, `0x01`                               |
/// | i64  | 1    | `0x00`, `0x7F`                               |
pub fn decode<T: LebInt>(buf: &[u8]) -> Result<(T, usize), LebError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if i >= T::MAX_GROUPS {
            return Err(LebError::TooLong {
                ty: T::TYPE,
                offset: i,
            });
        }

        // shift stays below 64 here, bits past the accumulator are checked
        // against the fill pattern instead of being stored
        let payload = byte & PAYLOAD_MASK;
        result |= u64::from(payload) << shift;
        let group_shift = shift;
        shift += 7;

        if byte & CONTINUATION_BIT == 0 {
            if !is_canonical_terminator::<T>(payload, group_shift) {
                return Err(LebError::Overflow {
                    ty: T::TYPE,
                    offset: i,
                    byte,
                });
            }

            if T::SIGNED && shift < u64::BITS && payload & SIGN_BIT != 0 {
                result |= !0u64 << shift;
            }

            return Ok((T::from_raw(result), i + 1));
        }
    }

    Err(LebError::Truncated {
        ty: T::TYPE,
        offset: buf.len(),
    })
}

/// Check the out-of-width bits of a terminating group starting at bit `group_shift`.
fn is_canonical_terminator<T: LebInt>(payload: u8, group_shift: u32) -> bool {
    let used_bits = (T::BITS - group_shift).min(7);
    if used_bits == 7 {
        return true;
    }

    let high = payload >> used_bits;
    let negative = T::SIGNED && payload & (1 << (used_bits - 1)) != 0;
    let fill = if negative { PAYLOAD_MASK >> used_bits } else { 0 };
    high == fill
}

/// Decode a signed 32-bit LEB128 value. See [`decode`].
///
/// # Errors
///
/// See [`decode`].
pub fn decode_i32(buf: &[u8]) -> Result<(i32, usize), LebError> {
    decode(buf)
}

/// Decode an unsigned 32-bit LEB128 value. See [`decode`].
///
/// # Errors
///
/// See [`decode`].
pub fn decode_u32(buf: &[u8]) -> Result<(u32, usize), LebError> {
    decode(buf)
}

/// Decode a signed 64-bit LEB128 value. See [`decode`].
///
/// # Errors
///
/// See [`decode`].
pub fn decode_i64(buf: &[u8]) -> Result<(i64, usize), LebError> {
    decode(buf)
}

/// Decode an unsigned 64-bit LEB128 value. See [`decode`].
///
/// # Errors
///
/// See [`decode`].
pub fn decode_u64(buf: &[u8]) -> Result<(u64, usize), LebError> {
    decode(buf)
}

/// Decode a value whose type is chosen at runtime.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_as(ty: LebType, buf: &[u8]) -> Result<(LebValue, usize), LebError> {
    match ty {
        LebType::I32 => decode_i32(buf).map(|(v, n)| (LebValue::I32(v), n)),
        LebType::U32 => decode_u32(buf).map(|(v, n)| (LebValue::U32(v), n)),
        LebType::I64 => decode_i64(buf).map(|(v, n)| (LebValue::I64(v), n)),
        LebType::U64 => decode_u64(buf).map(|(v, n)| (LebValue::U64(v), n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of<T: LebInt + std::fmt::Debug>(buf: &[u8]) -> ErrorKind {
        decode::<T>(buf).unwrap_err().kind()
    }

    #[test]
    fn group_limits() {
        assert_eq!(i32::MAX_GROUPS, 5);
        assert_eq!(u32::MAX_GROUPS, 5);
        assert_eq!(i64::MAX_GROUPS, 10);
        assert_eq!(u64::MAX_GROUPS, 10);
    }

    #[test]
    fn decode_zero() {
        assert_eq!(decode_i32(&[0x00]).unwrap(), (0, 1));
        assert_eq!(decode_u64(&[0x00]).unwrap(), (0, 1));
    }

    #[test]
    fn decode_single_byte_negative() {
        // 0x70 has bit 6 set: -16 signed, 112 unsigned
        assert_eq!(decode_i32(&[0x70]).unwrap(), (-16, 1));
        assert_eq!(decode_i64(&[0x70]).unwrap(), (-16, 1));
        assert_eq!(decode_u32(&[0x70]).unwrap(), (112, 1));
    }

    #[test]
    fn decode_multi_byte() {
        assert_eq!(decode_u32(&[0x80, 0x01]).unwrap(), (128, 2));
        assert_eq!(decode_i32(&[0x80, 0x01]).unwrap(), (128, 2));
        assert_eq!(decode_i32(&[0xF3, 0x7F]).unwrap(), (-13, 2));
    }

    #[test]
    fn decode_with_trailing_bytes() {
        // Trailing bytes after the terminator are never read
        assert_eq!(decode_i32(&[0x0F, 0x00]).unwrap(), (15, 1));
        assert_eq!(decode_u32(&[0xAC, 0x02, 0xFF, 0xFF]).unwrap(), (300, 2));
    }

    #[test]
    fn decode_empty_input() {
        let err = decode_u32(&[]).unwrap_err();
        assert_eq!(
            err,
            LebError::Truncated {
                ty: LebType::U32,
                offset: 0
            }
        );
    }

    #[test]
    fn decode_truncated() {
        let err = decode_i32(&[0x80]).unwrap_err();
        assert_eq!(
            err,
            LebError::Truncated {
                ty: LebType::I32,
                offset: 1
            }
        );
        assert_eq!(kind_of::<u64>(&[0xFF, 0xFF, 0xFF]), ErrorKind::Truncated);
    }

    #[test]
    fn full_width_continuation_without_more_input_is_truncated() {
        // Five continuation groups and nothing after: input ran out first
        assert_eq!(kind_of::<u32>(&[0x80; 5]), ErrorKind::Truncated);
        assert_eq!(kind_of::<i64>(&[0x80; 10]), ErrorKind::Truncated);
    }

    #[test]
    fn decode_too_long() {
        let err = decode_u32(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]).unwrap_err();
        assert_eq!(
            err,
            LebError::TooLong {
                ty: LebType::U32,
                offset: 5
            }
        );

        let mut buf = [0x80; 11];
        buf[10] = 0x00;
        assert_eq!(kind_of::<u64>(&buf), ErrorKind::TooLong);
    }

    #[test]
    fn u32_fifth_byte_limits() {
        assert_eq!(
            decode_u32(&[0x80, 0x80, 0x80, 0x80, 0x0F]).unwrap(),
            (0xF000_0000, 5)
        );
        let err = decode_u32(&[0x83, 0x86, 0x89, 0x8C, 0x10]).unwrap_err();
        assert_eq!(
            err,
            LebError::Overflow {
                ty: LebType::U32,
                offset: 4,
                byte: 0x10
            }
        );
    }

    #[test]
    fn i32_fifth_byte_sign_fill() {
        assert_eq!(
            decode_i32(&[0x80, 0x80, 0x80, 0x80, 0x7F]).unwrap(),
            (i32::MIN >> 3, 5)
        );
        assert_eq!(
            decode_i32(&[0xFF, 0xFF, 0xFF, 0xFF, 0x07]).unwrap(),
            (i32::MAX, 5)
        );
        assert_eq!(
            decode_i32(&[0x80, 0x80, 0x80, 0x80, 0x78]).unwrap(),
            (i32::MIN, 5)
        );
        // sign bit (bit 3) set but fill bits clear
        assert_eq!(kind_of::<i32>(&[0x80, 0x80, 0x80, 0x80, 0x08]), ErrorKind::Overflow);
        // sign bit clear but fill bits set
        assert_eq!(kind_of::<i32>(&[0x80, 0x80, 0x80, 0x80, 0x70]), ErrorKind::Overflow);
    }

    #[test]
    fn i64_tenth_byte() {
        let mut buf = [0x80; 10];
        buf[9] = 0x7F;
        assert_eq!(decode_i64(&buf).unwrap(), (i64::MIN, 10));

        buf[9] = 0x00;
        assert_eq!(decode_i64(&buf).unwrap(), (0, 10));

        for bad in [0x01, 0x02, 0x40, 0x3F, 0x7E] {
            buf[9] = bad;
            assert_eq!(kind_of::<i64>(&buf), ErrorKind::Overflow, "byte {bad:#04X}");
        }
    }

    #[test]
    fn u64_tenth_byte() {
        let mut buf = [0x80; 10];
        buf[9] = 0x01;
        assert_eq!(decode_u64(&buf).unwrap(), (1 << 63, 10));

        let max = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        assert_eq!(decode_u64(&max).unwrap(), (u64::MAX, 10));

        buf[9] = 0x02;
        assert_eq!(kind_of::<u64>(&buf), ErrorKind::Overflow);
    }

    #[test]
    fn padded_encodings_keep_value() {
        // 49155 padded with zero groups up to the 32-bit limit
        assert_eq!(decode_i32(&[0x83, 0x80, 0x03]).unwrap(), (49155, 3));
        assert_eq!(decode_i32(&[0x83, 0x80, 0x83, 0x00]).unwrap(), (49155, 4));
        assert_eq!(
            decode_i32(&[0x83, 0x80, 0x83, 0x80, 0x00]).unwrap(),
            (49155, 5)
        );
        // -89 padded with sign groups
        assert_eq!(decode_i32(&[0xA7, 0x7F]).unwrap(), (-89, 2));
        assert_eq!(decode_i32(&[0xA7, 0xFF, 0xFF, 0x7F]).unwrap(), (-89, 4));
    }

    #[test]
    fn decode_as_dispatches_on_type() {
        assert_eq!(
            decode_as(LebType::I32, &[0x70]).unwrap(),
            (LebValue::I32(-16), 1)
        );
        assert_eq!(
            decode_as(LebType::U32, &[0x70]).unwrap(),
            (LebValue::U32(112), 1)
        );
        assert_eq!(
            decode_as(LebType::U64, &[0xE5, 0x8E, 0x26]).unwrap(),
            (LebValue::U64(624_485), 3)
        );
        assert_eq!(
            decode_as(LebType::I64, &[0xC0, 0xBB, 0x78]).unwrap(),
            (LebValue::I64(-123_456), 3)
        );
    }
}
