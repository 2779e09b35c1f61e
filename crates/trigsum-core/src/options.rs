//! Series parameters and run options.

use serde::Serialize;

use crate::calculator::SeriesError;
use crate::constants::{
    DEFAULT_COMPARISON_TOLERANCE, DEFAULT_POOL_THREADS, DEFAULT_THREAD_COUNTS, MIN_EPSILON,
};

/// Validated `(x, ε)` pair shared read-only by every worker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesParams {
    /// Series argument.
    pub x: f64,
    /// Convergence threshold on |aₙ|.
    pub epsilon: f64,
}

impl SeriesParams {
    /// Validate and build parameters.
    ///
    /// x must be finite. ε must be finite and at least [`MIN_EPSILON`], which
    /// keeps ⌈1/ε⌉ inside the range of exactly representable indices.
    pub fn new(x: f64, epsilon: f64) -> Result<Self, SeriesError> {
        if !x.is_finite() {
            return Err(SeriesError::InvalidInput(format!(
                "x must be finite, got {x}"
            )));
        }
        let epsilon = validate_epsilon(epsilon)?;
        Ok(Self { x, epsilon })
    }
}

/// Check that ε is finite and at least [`MIN_EPSILON`].
pub fn validate_epsilon(epsilon: f64) -> Result<f64, SeriesError> {
    if !epsilon.is_finite() || epsilon < MIN_EPSILON {
        return Err(SeriesError::Config(format!(
            "epsilon must be a finite number >= {MIN_EPSILON:e}, got {epsilon}"
        )));
    }
    Ok(epsilon)
}

/// Options for a comparison run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Thread counts for the thread-per-chunk strategy.
    pub thread_counts: Vec<usize>,
    /// Worker pool size for the pooled strategy.
    pub pool_threads: usize,
    /// Relative tolerance for cross-checking strategies.
    pub tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            thread_counts: DEFAULT_THREAD_COUNTS.to_vec(),
            pool_threads: DEFAULT_POOL_THREADS,
            tolerance: DEFAULT_COMPARISON_TOLERANCE,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are missing.
    ///
    /// Zero thread counts are left in place; the partitioner rejects them.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.thread_counts.is_empty() {
            self.thread_counts = DEFAULT_THREAD_COUNTS.to_vec();
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            self.tolerance = DEFAULT_COMPARISON_TOLERANCE;
        }
        self
    }
}
