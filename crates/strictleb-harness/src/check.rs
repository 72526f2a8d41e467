use strictleb_wire::{ErrorKind, LebType, LebValue, decode_as};

use crate::case::CaseFailure;

/// What decoding a [`Vector`]'s bytes must produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expect {
    /// Success with this value and consumed length.
    Value { value: LebValue, len: usize },
    /// Failure of this kind.
    Error(ErrorKind),
}

/// One conformance row: input bytes and the expected outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vector {
    pub bytes: &'static [u8],
    pub expect: Expect,
}

impl Vector {
    pub const fn ok(bytes: &'static [u8], len: usize, value: LebValue) -> Self {
        Self {
            bytes,
            expect: Expect::Value { value, len },
        }
    }

    pub const fn err(bytes: &'static [u8], kind: ErrorKind) -> Self {
        Self {
            bytes,
            expect: Expect::Error(kind),
        }
    }
}

/// Check one vector against the decoder for `ty`.
///
/// # Errors
///
/// Returns a [`CaseFailure`] describing the mismatch.
pub fn check_vector(ty: LebType, vector: &Vector) -> Result<(), CaseFailure> {
    match vector.expect {
        Expect::Value { value, len } => expect_ok(ty, vector.bytes, value, len),
        Expect::Error(kind) => expect_err(ty, vector.bytes, kind),
    }
}

/// Require `bytes` to decode as `ty` to exactly `(value, len)`.
///
/// # Errors
///
/// Returns a [`CaseFailure`] if decoding fails, or yields a different value
/// or length.
pub fn expect_ok(
    ty: LebType,
    bytes: &[u8],
    value: LebValue,
    len: usize,
) -> Result<(), CaseFailure> {
    match decode_as(ty, bytes) {
        Ok((got, got_len)) if got == value && got_len == len => Ok(()),
        Ok((got, got_len)) => Err(CaseFailure::new(format!(
            "expected {value} (len {len}), but got {got} (len {got_len}) for {ty} {}",
            format_bytes(bytes)
        ))),
        Err(e) => Err(CaseFailure::new(format!(
            "expected {value} (len {len}), but failed with status {}: {e}",
            e.status()
        ))),
    }
}

/// Require `bytes` to fail to decode as `ty` with the given kind.
///
/// # Errors
///
/// Returns a [`CaseFailure`] if decoding succeeds or fails differently.
pub fn expect_err(ty: LebType, bytes: &[u8], kind: ErrorKind) -> Result<(), CaseFailure> {
    match decode_as(ty, bytes) {
        Err(e) if e.kind() == kind => Ok(()),
        Err(e) => Err(CaseFailure::new(format!(
            "expected {kind:?} failure, but failed with {e}"
        ))),
        Ok((got, got_len)) => Err(CaseFailure::new(format!(
            "expected {kind:?} failure, but got {got} (len {got_len}) for {ty} {}",
            format_bytes(bytes)
        ))),
    }
}

/// `E5 8E 26` style rendering of raw bytes.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `[80 01]` style rendering for diagnostics.
fn format_bytes(bytes: &[u8]) -> String {
    format!("[{}]", format_hex(bytes))
}
