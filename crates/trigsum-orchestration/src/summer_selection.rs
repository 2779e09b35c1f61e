//! Strategy selection logic.

use std::sync::Arc;

use trigsum_core::calculator::{SeriesError, Summer};
use trigsum_core::options::Options;
use trigsum_core::registry::SummerFactory;

/// Get the summers to run for an algorithm selection.
///
/// `all` runs the single-threaded baseline first, then one thread-per-chunk
/// run per entry of `opts.thread_counts`, then the worker pool.
pub fn get_summers_to_run(
    algo: &str,
    opts: &Options,
    factory: &dyn SummerFactory,
) -> Result<Vec<Arc<dyn Summer>>, SeriesError> {
    match algo {
        "all" => {
            let mut summers = vec![factory.get("single", 1)?];
            for &threads in &opts.thread_counts {
                summers.push(factory.get("threads", threads)?);
            }
            summers.push(factory.get("pool", opts.pool_threads)?);
            Ok(summers)
        }
        "threads" => opts
            .thread_counts
            .iter()
            .map(|&threads| factory.get("threads", threads))
            .collect(),
        "pool" => Ok(vec![factory.get("pool", opts.pool_threads)?]),
        name => Ok(vec![factory.get(name, 1)?]),
    }
}
