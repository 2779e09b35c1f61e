//! Worker-pool summation.
//!
//! Builds a rayon pool of exactly `num_threads` workers for the call, runs
//! every partition chunk on it, and tears it down on return. At most
//! `num_threads` chunks are in flight at once.

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{info, warn};

use crate::calculator::SeriesError;
use crate::options::SeriesParams;
use crate::partition::{combine, plan, PartialResult};

/// Sum the series on a fixed-size worker pool scoped to this call.
///
/// Same contract as [`crate::threads::multi_threaded_sum`]; the two results
/// are bit-identical for identical inputs because both combine in chunk order.
pub fn pool_sum(x: f64, epsilon: f64, num_threads: usize) -> Result<f64, SeriesError> {
    let params = SeriesParams::new(x, epsilon)?;
    let plan = plan(params.epsilon, num_threads)?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("trigsum-pool-{i}"))
        .build()
        .map_err(|e| SeriesError::Worker(format!("failed to build worker pool: {e}")))?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pool.install(|| {
            plan.chunks
                .par_iter()
                .map(|chunk| chunk.sum(params))
                .collect::<Vec<PartialResult>>()
        })
    }));

    let partials = match outcome {
        Ok(partials) => partials,
        Err(_) => {
            let err = SeriesError::Worker("pool worker panicked".to_string());
            warn!(error = %err, "pooled summation failed");
            return Err(err);
        }
    };

    let total = combine(partials)?;
    info!(sum = total, num_threads, "pooled summation finished");
    Ok(total)
}
