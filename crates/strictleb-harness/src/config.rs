/// Configuration for a harness [`Runner`](crate::runner::Runner).
///
/// ```text
/// ┌─────────┬──────────────────────────────────────────────────────────┐
/// │ Field   │ Purpose                                                  │
/// ├─────────┼──────────────────────────────────────────────────────────┤
/// │ filter  │ Only run cases whose name contains this substring        │
/// │ verbose │ Write each failure diagnostic into the progress output   │
/// └─────────┴──────────────────────────────────────────────────────────┘
/// ```
///
/// The default runs every case and keeps the progress output to the bare
/// protocol lines, so it can be parsed by a driver that only understands
/// `##>`, `##+` and `##-` prefixes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Case name filter. When `None`, every case runs.
    pub filter: Option<String>,

    /// When set, the diagnostic of a failed case is written on its own
    /// line, indented by two spaces, just before `##-fail`.
    pub verbose: bool,
}

impl RunnerConfig {
    /// Whether a case with this name is selected by the filter.
    pub fn selects(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|f| name.contains(f))
    }
}
