//! Implementation of `strictleb list`.
//!
//! Prints one conformance case name per line, in run order, followed by the
//! decoder type and row count:
//!
//! ```text
//! i32leb       i32  38 vectors
//! i32leb_ext   i32  13 vectors
//! ...
//! ```
use anyhow::Result;
use strictleb_harness::TABLES;

pub fn run() -> Result<()> {
    for table in &TABLES {
        println!(
            "{:<12} {}  {} vectors",
            table.name,
            table.ty,
            table.vectors.len()
        );
    }
    Ok(())
}
