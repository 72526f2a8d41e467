#![warn(clippy::pedantic)]

pub mod case;
pub mod check;
pub mod config;
pub mod error;
pub mod runner;
pub mod vectors;

pub use case::{CaseFailure, TestCase};
pub use check::{Expect, Vector, check_vector, expect_err, expect_ok, format_hex};
pub use config::RunnerConfig;
pub use error::HarnessError;
pub use runner::{FailedCase, Report, Runner};
pub use vectors::{TABLES, VectorTable, conformance_suite};
