//! Thread-per-chunk summation.
//!
//! Spawns exactly one named OS thread per partition chunk. Each worker sends
//! its `PartialResult` over a channel; the caller joins every thread before
//! combining, so no worker outlives the call.

use std::thread;

use crossbeam_channel::bounded;
use tracing::{info, warn};

use crate::calculator::SeriesError;
use crate::options::SeriesParams;
use crate::partition::{combine, plan, PartialResult};

/// Sum the series with one OS thread per chunk of the partition plan.
///
/// # Errors
///
/// [`SeriesError::Config`] for `num_threads == 0` or a bad epsilon,
/// [`SeriesError::InvalidInput`] for non-finite x, and
/// [`SeriesError::Worker`] if a thread cannot be spawned, panics, or yields a
/// non-finite partial sum.
pub fn multi_threaded_sum(x: f64, epsilon: f64, num_threads: usize) -> Result<f64, SeriesError> {
    let params = SeriesParams::new(x, epsilon)?;
    let plan = plan(params.epsilon, num_threads)?;

    let (tx, rx) = bounded::<PartialResult>(plan.chunks.len());
    let mut handles = Vec::with_capacity(plan.chunks.len());
    let mut failure = None;

    for chunk in plan.chunks.iter().copied() {
        let tx = tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("trigsum-chunk-{}", chunk.index))
            .spawn(move || {
                // The receiver outlives every worker, so the send cannot fail.
                let _ = tx.send(chunk.sum(params));
            });
        match spawned {
            Ok(handle) => handles.push((chunk.index, handle)),
            Err(e) => {
                failure = Some(SeriesError::Worker(format!(
                    "failed to spawn thread for chunk {}: {e}",
                    chunk.index
                )));
                break;
            }
        }
    }
    drop(tx);

    for (index, handle) in handles {
        if handle.join().is_err() && failure.is_none() {
            failure = Some(SeriesError::Worker(format!("chunk {index} worker panicked")));
        }
    }
    if let Some(err) = failure {
        warn!(error = %err, "thread-per-chunk summation failed");
        return Err(err);
    }

    let total = combine(rx.iter().collect())?;
    info!(sum = total, num_threads, "thread-per-chunk summation finished");
    Ok(total)
}
