//! Range partitioning of series indices across workers.
//!
//! The upper bound max_n = ⌈1/ε⌉ + 100 always lies past the convergence
//! point, since |aₙ| ≤ 1/n. Chunks beyond that point are cheap: their first
//! term already fails the threshold and they contribute 0.0.

use serde::Serialize;
use tracing::debug;

use crate::calculator::SeriesError;
use crate::constants::MAX_N_MARGIN;
use crate::options::{validate_epsilon, SeriesParams};
use crate::term::accumulate;

/// A contiguous run of series indices assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Position of this chunk in the plan.
    pub index: usize,
    /// First index (inclusive, ≥ 1).
    pub start_n: u64,
    /// Last index (inclusive). `start_n - 1` for an empty chunk.
    pub end_n: u64,
}

impl Chunk {
    /// Number of indices covered.
    #[must_use]
    pub fn len(&self) -> u64 {
        (self.end_n + 1).saturating_sub(self.start_n)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum this chunk's range with early stop.
    #[must_use]
    pub fn sum(&self, params: SeriesParams) -> PartialResult {
        let sum = accumulate(params, self.start_n, self.end_n);
        debug!(
            chunk = self.index,
            start_n = self.start_n,
            end_n = self.end_n,
            sum,
            "chunk summed"
        );
        PartialResult { chunk: *self, sum }
    }
}

/// Partial sum produced by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartialResult {
    pub chunk: Chunk,
    pub sum: f64,
}

/// Ordered split of `[1, max_n]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionPlan {
    /// Upper bound ⌈1/ε⌉ + 100.
    pub max_n: u64,
    /// `max_n / num_threads`; the last chunk absorbs the remainder.
    pub chunk_size: u64,
    pub chunks: Vec<Chunk>,
}

/// Upper index bound ⌈1/ε⌉ + [`MAX_N_MARGIN`].
pub fn max_terms(epsilon: f64) -> Result<u64, SeriesError> {
    let epsilon = validate_epsilon(epsilon)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bound = (1.0 / epsilon).ceil() as u64;
    Ok(bound + MAX_N_MARGIN)
}

/// Split `[1, max_n]` into `num_threads` contiguous chunks.
///
/// Chunk i covers `[i·chunk_size + 1, (i+1)·chunk_size]`, except the last,
/// which ends at `max_n`. With more threads than indices every chunk but the
/// last is empty.
///
/// # Errors
///
/// [`SeriesError::Config`] for `num_threads == 0` or an unusable epsilon.
pub fn plan(epsilon: f64, num_threads: usize) -> Result<PartitionPlan, SeriesError> {
    if num_threads == 0 {
        return Err(SeriesError::Config(
            "num_threads must be at least 1".to_string(),
        ));
    }
    let max_n = max_terms(epsilon)?;
    let threads = num_threads as u64;
    let chunk_size = max_n / threads;

    let chunks: Vec<Chunk> = (0..num_threads)
        .map(|i| {
            let i_u64 = i as u64;
            let end_n = if i + 1 < num_threads {
                (i_u64 + 1) * chunk_size
            } else {
                max_n
            };
            Chunk {
                index: i,
                start_n: i_u64 * chunk_size + 1,
                end_n,
            }
        })
        .collect();

    debug!(max_n, chunk_size, num_threads, "partition planned");
    Ok(PartitionPlan {
        max_n,
        chunk_size,
        chunks,
    })
}

/// Combine partial results in chunk order.
///
/// Summing in a fixed order keeps repeated runs bit-identical regardless of
/// which worker finished first.
///
/// # Errors
///
/// [`SeriesError::Worker`] for the lowest-indexed non-finite partial sum.
pub fn combine(mut partials: Vec<PartialResult>) -> Result<f64, SeriesError> {
    partials.sort_by_key(|p| p.chunk.index);
    if let Some(bad) = partials.iter().find(|p| !p.sum.is_finite()) {
        return Err(SeriesError::Worker(format!(
            "chunk {} [{}, {}] produced a non-finite sum",
            bad.chunk.index, bad.chunk.start_n, bad.chunk.end_n
        )));
    }
    Ok(partials.iter().fold(0.0, |acc, p| acc + p.sum))
}
