//! strictleb command-line tool: run the LEB128 conformance suite and decode
//! LEB128 values from hex input with strict canonical-form validation.
//!
//! # Command overview
//!
//! ```text
//! strictleb <COMMAND> [OPTIONS]
//!
//! Commands:
//!   run        Run the conformance suite and print the progress protocol
//!   list       List the conformance case names
//!   decode     Decode one LEB128 value from hex bytes
//!   scan       Decode consecutive LEB128 values until the input is exhausted
//!   help       Print help information
//!
//! Global options:
//!   -v, --verbose    Debug logging and failure diagnostics
//!   -h, --help       Print help
//!   -V, --version    Print version
//! ```
//!
//! # Exit codes
//!
//! | Command         | Code                                             |
//! |-----------------|--------------------------------------------------|
//! | run             | number of failed cases (saturated to 255)        |
//! | everything else | 0 on success, 1 on error or failed decode        |
//!
//! Log output and error details go to stderr so stdout can be piped cleanly.
use std::process;

use clap::{Parser, Subcommand};
use strictleb_wire::LebType;

mod cmd_decode;
mod cmd_list;
mod cmd_run;
mod cmd_scan;
mod hex_input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Strict LEB128 decoder toolkit.
#[derive(Parser)]
#[command(name = "strictleb", version, about = "Strict LEB128 decoder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging and per-case failure diagnostics.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Run the conformance suite and print the progress protocol.
    Run(RunArgs),
    /// List the conformance case names in run order.
    List,
    /// Decode one LEB128 value from hex bytes.
    Decode(DecodeArgs),
    /// Decode consecutive LEB128 values until the input is exhausted.
    Scan(ScanArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `strictleb run`.
///
/// Prints the progress protocol on stdout:
///
/// ```text
/// ##>8
/// ##+i32leb
/// ##-ok
/// ...
/// ```
///
/// The process exits with the number of failed cases.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Only run cases whose name contains this substring.
    #[arg(long)]
    pub filter: Option<String>,
}

/// Arguments for `strictleb decode`.
///
/// ```text
/// ┌─────────────┬──────────────────────────────────────────────────────┐
/// │ Flag        │ Values / default                                     │
/// ├─────────────┼──────────────────────────────────────────────────────┤
/// │ -t / --type │ i32 | u32 | i64 | u64 (default u64)                  │
/// │ --json      │ emit {"type", "len", "value" | "error"}              │
/// └─────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// In JSON output a failed decode reports a negative `len`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Hex bytes, e.g. `e58e26`, `"e5 8e 26"` or `0xe5,0x8e,0x26`.
    #[arg(required = true, num_args = 1..)]
    pub hex: Vec<String>,

    /// Target integer type.
    #[arg(short = 't', long = "type", default_value = "u64")]
    pub ty: LebType,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `strictleb scan`.
///
/// Reads values of a single type back to back, the way a binary-format
/// parser walks a vector of LEB128 fields. Stops with an error at the first
/// malformed value.
#[derive(clap::Args)]
pub struct ScanArgs {
    /// Hex bytes holding one or more consecutive values.
    #[arg(required = true, num_args = 1..)]
    pub hex: Vec<String>,

    /// Target integer type for every value.
    #[arg(short = 't', long = "type", default_value = "u64")]
    pub ty: LebType,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => cmd_run::run(&args, cli.verbose),
        Commands::List => cmd_list::run().map(|()| 0),
        Commands::Decode(args) => cmd_decode::run(&args).map(|()| 0),
        Commands::Scan(args) => cmd_scan::run(&args).map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

/// Install `env_logger` on stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
