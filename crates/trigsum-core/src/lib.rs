//! # trigsum-core
//!
//! Core library for evaluating the cosine series S = Σ cos(nx)/n.
//! Implements single-threaded, thread-per-chunk, and worker-pool summation,
//! and the closed-form control value −ln(2·sin(x/2)) they are checked against.

pub mod calculator;
pub mod constants;
pub mod control;
pub mod options;
pub mod partition;
pub mod pool;
pub mod registry;
pub mod sequential;
pub mod term;
pub mod threads;

// Re-exports
pub use calculator::{
    PooledSummer, SeriesError, SeriesSum, SingleThreadedSummer, Summer, ThreadPerChunkSummer,
};
pub use constants::{exit_codes, DEFAULT_EPSILON, DEFAULT_POOL_THREADS, DEFAULT_THREAD_COUNTS};
pub use control::{analytical_sum, control_value, is_close};
pub use options::{Options, SeriesParams};
pub use partition::{plan, Chunk, PartialResult, PartitionPlan};
pub use pool::pool_sum;
pub use registry::{DefaultFactory, SummerFactory};
pub use sequential::single_threaded_sum;
pub use term::{term, term_range_sum};
pub use threads::multi_threaded_sum;

/// Sum the series at x with the default threshold, single-threaded.
///
/// This is a convenience function for simple use cases. For thread counts
/// and strategy selection, use the `Summer` trait directly.
///
/// # Example
/// ```
/// let s = trigsum_core::series_sum(std::f64::consts::PI).unwrap();
/// assert!((s + std::f64::consts::LN_2).abs() < 1e-6);
/// ```
pub fn series_sum(x: f64) -> Result<f64, SeriesError> {
    single_threaded_sum(x, DEFAULT_EPSILON).map(|(sum, _)| sum)
}
