/// Errors that stop a harness run before every selected case has reported.
///
/// A failing case is not an error: it is counted in the
/// [`Report`](crate::runner::Report). These variants cover the conditions
/// under which the progress protocol itself cannot be produced.
///
/// ```text
/// ┌─────────────────┬──────────────────────────────────────────────┐
/// │ Variant         │ Cause                                        │
/// ├─────────────────┼──────────────────────────────────────────────┤
/// │ Io              │ Writing the progress protocol failed         │
/// │ NoMatchingCases │ The configured filter selected no case       │
/// └─────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("no test case matches filter {filter:?}")]
    NoMatchingCases { filter: String },
}
