//! Implementation of `strictleb decode`.
//!
//! Decodes a single value from the start of the input and reports the value
//! and the number of bytes consumed. Bytes after the terminating group are
//! reported as trailing, never consumed.
//!
//! # Plain output
//!
//! ```text
//! -16 (i32, 1 byte)
//! 624485 (u64, 3 bytes, 2 trailing)
//! ```
//!
//! # JSON output
//!
//! ```text
//! {"type":"i32","len":1,"value":-16}
//! {"type":"u32","len":-3,"error":"u32 LEB128 overflow: ..."}
//! ```
//!
//! A failed decode exits with code 1 in both modes.
use anyhow::{Result, anyhow};
use log::debug;
use serde::Serialize;
use strictleb_harness::format_hex;
use strictleb_wire::{LebValue, decode_as};

use crate::DecodeArgs;
use crate::hex_input::parse_hex;

/// JSON shape for one decode attempt. `len` follows the "length ≤ 0 means
/// failure" convention: the consumed length on success, the negative
/// error status otherwise.
#[derive(Serialize)]
pub struct DecodeOutput {
    #[serde(rename = "type")]
    pub ty: String,
    pub len: isize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the `strictleb decode` command.
///
/// # Errors
///
/// Returns an error if the hex input is invalid or the bytes do not hold a
/// canonical value of the requested type.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    debug!("decoding {} as {}", format_hex(&bytes), args.ty);

    let result = decode_as(args.ty, &bytes);

    if args.json {
        let output = match result {
            Ok((value, len)) => DecodeOutput {
                ty: args.ty.to_string(),
                len: signed_len(len),
                value: Some(json_value(value)),
                error: None,
            },
            Err(e) => DecodeOutput {
                ty: args.ty.to_string(),
                len: e.status(),
                value: None,
                error: Some(e.to_string()),
            },
        };
        println!("{}", serde_json::to_string(&output)?);
        return match result {
            Ok(_) => Ok(()),
            Err(_) => Err(anyhow!("decode failed")),
        };
    }

    let (value, len) = result?;
    let trailing = bytes.len() - len;
    let unit = if len == 1 { "byte" } else { "bytes" };
    if trailing == 0 {
        println!("{value} ({}, {len} {unit})", args.ty);
    } else {
        println!("{value} ({}, {len} {unit}, {trailing} trailing)", args.ty);
    }
    Ok(())
}

pub fn json_value(value: LebValue) -> serde_json::Value {
    match value {
        LebValue::I32(v) => v.into(),
        LebValue::U32(v) => v.into(),
        LebValue::I64(v) => v.into(),
        LebValue::U64(v) => v.into(),
    }
}

/// Consumed lengths never exceed 10, so the conversion cannot fail.
pub fn signed_len(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}
