//! Implementation of `strictleb scan`.
//!
//! Walks the input with a [`LebReader`], decoding one value of the chosen
//! type after another until the input is exhausted.
//!
//! # Plain output
//!
//! ```text
//! offset  len  bytes           value
//! 0x0000  3    E5 8E 26        624485
//! 0x0003  1    70              112
//! ```
//!
//! On a malformed value the rows decoded so far are still printed, followed
//! by the error (stderr, or an `"error"` field in JSON mode), and the
//! command exits with code 1.
use anyhow::{Result, anyhow};
use log::debug;
use serde::Serialize;
use strictleb_harness::format_hex;
use strictleb_wire::{LebError, LebReader, LebValue};

use crate::ScanArgs;
use crate::cmd_decode::{json_value, signed_len};
use crate::hex_input::parse_hex;

#[derive(Serialize)]
struct ScanEntry {
    offset: usize,
    len: isize,
    value: serde_json::Value,
}

#[derive(Serialize)]
struct ScanOutput {
    #[serde(rename = "type")]
    ty: String,
    values: Vec<ScanEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Decoded value with its position in the input.
struct Row {
    offset: usize,
    len: usize,
    value: LebValue,
}

/// Run the `strictleb scan` command.
///
/// # Errors
///
/// Returns an error if the hex input is invalid or any value in it is
/// malformed.
pub fn run(args: &ScanArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let (rows, failure) = scan(&bytes, args);
    debug!("scanned {} values from {} bytes", rows.len(), bytes.len());

    if args.json {
        let output = ScanOutput {
            ty: args.ty.to_string(),
            values: rows
                .iter()
                .map(|row| ScanEntry {
                    offset: row.offset,
                    len: signed_len(row.len),
                    value: json_value(row.value),
                })
                .collect(),
            error: failure.map(|e| e.to_string()),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("offset  len  bytes           value");
        for row in &rows {
            let raw = format_hex(&bytes[row.offset..row.offset + row.len]);
            println!("{:#06x}  {:<3}  {raw:<14}  {}", row.offset, row.len, row.value);
        }
    }

    match failure {
        None => Ok(()),
        Some(e) => Err(anyhow!(e).context(format!("scan stopped after {} values", rows.len()))),
    }
}

fn scan(bytes: &[u8], args: &ScanArgs) -> (Vec<Row>, Option<LebError>) {
    let mut reader = LebReader::new(bytes);
    let mut rows = Vec::new();

    while !reader.is_empty() {
        let offset = reader.position();
        match reader.read_as(args.ty) {
            Ok(value) => rows.push(Row {
                offset,
                len: reader.position() - offset,
                value,
            }),
            Err(e) => return (rows, Some(e)),
        }
    }

    (rows, None)
}
