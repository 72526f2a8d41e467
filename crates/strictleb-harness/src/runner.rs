use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};

use crate::case::{CaseFailure, TestCase};
use crate::config::RunnerConfig;
use crate::error::HarnessError;

/// Runs an ordered list of [`TestCase`]s and writes the progress protocol.
///
/// # Progress protocol
///
/// ```text
/// ##>3          total number of selected cases
/// ##+i32leb     case starts
/// ##-ok         case passed
/// ##+u32leb
///   <message>   failure diagnostic (verbose only)
/// ##-fail       case failed
/// ...
/// ```
///
/// A predicate that panics is reported as a failed case; the run continues
/// with the next case.
pub struct Runner {
    config: RunnerConfig,
}

/// A case that did not pass, with its diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedCase {
    pub name: String,
    pub failure: CaseFailure,
}

/// Outcome of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of cases announced in the `##>` line.
    pub total: usize,
    /// Number of cases that ended in `##-fail`.
    pub failed: usize,
    /// The failed cases in run order.
    pub failures: Vec<FailedCase>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.total.saturating_sub(self.failed)
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code: the failed count, saturated to 255.
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.failed.min(255)).unwrap_or(255)
    }
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every selected case in order, writing the protocol to `out`.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::NoMatchingCases`] if a filter is set and selects
    ///   nothing; no output is written in that case.
    /// - [`HarnessError::Io`] if writing to `out` fails.
    pub fn run<W: Write>(&self, cases: &[TestCase], out: &mut W) -> Result<Report, HarnessError> {
        let selected: Vec<&TestCase> = cases
            .iter()
            .filter(|case| self.config.selects(case.name()))
            .collect();

        if selected.is_empty() {
            if let Some(filter) = &self.config.filter {
                return Err(HarnessError::NoMatchingCases {
                    filter: filter.clone(),
                });
            }
        }

        let mut report = Report {
            total: selected.len(),
            ..Report::default()
        };

        writeln!(out, "##>{}", report.total)?;

        for case in selected {
            writeln!(out, "##+{}", case.name())?;
            debug!("running case {}", case.name());

            match run_guarded(case) {
                Ok(()) => {
                    writeln!(out, "##-ok")?;
                }
                Err(failure) => {
                    warn!("case {} failed: {failure}", case.name());
                    if self.config.verbose {
                        writeln!(out, "  {failure}")?;
                    }
                    writeln!(out, "##-fail")?;
                    report.failed += 1;
                    report.failures.push(FailedCase {
                        name: case.name().to_string(),
                        failure,
                    });
                }
            }
        }

        out.flush()?;
        debug!("{} of {} cases passed", report.passed(), report.total);
        Ok(report)
    }
}

fn run_guarded(case: &TestCase) -> Result<(), CaseFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| case.run())) {
        Ok(result) => result,
        Err(payload) => Err(CaseFailure::new(format!(
            "panicked: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
