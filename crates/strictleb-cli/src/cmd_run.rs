//! Implementation of `strictleb run`.
//!
//! Runs the built-in conformance suite through the harness [`Runner`] and
//! streams the progress protocol to stdout. The returned exit code is the
//! number of failed cases, so a shell or CI step can test `$? -eq 0`.
//!
//! With `--verbose`, each failing case's diagnostic is written between its
//! `##+name` and `##-fail` lines, and `debug!` logging is enabled on stderr.
use std::io;

use anyhow::{Context, Result};
use log::info;
use strictleb_harness::{Runner, RunnerConfig, conformance_suite};

use crate::RunArgs;

/// Run the `strictleb run` command.
///
/// # Errors
///
/// Returns an error if the filter matches no case or stdout cannot be
/// written.
pub fn run(args: &RunArgs, verbose: bool) -> Result<i32> {
    let config = RunnerConfig {
        filter: args.filter.clone(),
        verbose,
    };
    let cases = conformance_suite();

    let mut stdout = io::stdout().lock();
    let report = Runner::new(config)
        .run(&cases, &mut stdout)
        .context("conformance run aborted")?;

    info!(
        "{} passed, {} failed of {} cases",
        report.passed(),
        report.failed,
        report.total
    );
    Ok(report.exit_code())
}
