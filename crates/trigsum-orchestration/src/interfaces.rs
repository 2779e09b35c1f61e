//! Orchestration interfaces.

use std::time::Duration;

use trigsum_core::calculator::{SeriesError, SeriesSum};

use crate::report::ComparisonReport;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a full comparison report.
    fn present_report(&self, report: &ComparisonReport);

    /// Present a non-fatal warning.
    fn present_warning(&self, warning: &str);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single strategy run.
#[derive(Debug, Clone)]
pub struct SummationResult {
    /// Strategy name.
    pub strategy: String,
    /// Worker threads used.
    pub threads: usize,
    /// Display label, e.g. "ThreadPerChunk (4 threads)".
    pub label: String,
    /// The computed sum or a structured error.
    pub outcome: Result<SeriesSum, SeriesError>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl SummationResult {
    /// The computed sum, if the run succeeded.
    #[must_use]
    pub fn sum(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|s| s.sum)
    }
}
