//! Summer traits, the shared error type, and the three concrete strategies.
//!
//! `Summer` is the public trait consumed by orchestration. Each strategy is a
//! thin adapter over one of the free functions in `sequential`, `threads`
//! and `pool`.

use serde::Serialize;

use crate::options::SeriesParams;
use crate::pool::pool_sum;
use crate::sequential::single_threaded_sum;
use crate::threads::multi_threaded_sum;

/// Error type for series evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// x lies where −ln(2·sin(x/2)) is undefined.
    #[error("domain error at x = {x}: {reason}")]
    Domain {
        /// The offending argument.
        x: f64,
        /// Which condition failed.
        reason: &'static str,
    },

    /// An argument is outside the accepted range (n = 0, non-finite x).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (thread count, epsilon, unknown strategy).
    #[error("configuration error: {0}")]
    Config(String),

    /// A parallel worker panicked or produced a non-finite partial sum.
    #[error("worker failure: {0}")]
    Worker(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies: {0}")]
    Mismatch(String),
}

/// Outcome of one full series evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSum {
    /// The truncated series sum.
    pub sum: f64,
    /// Index of the first excluded term. Only the single-threaded strategy reports it.
    pub terms_counted: Option<u64>,
}

/// Public trait for summation strategies, consumed by orchestration.
pub trait Summer: Send + Sync {
    /// Evaluate the series for the given parameters.
    fn sum(&self, params: &SeriesParams) -> Result<SeriesSum, SeriesError>;

    /// Get the name of this strategy.
    fn name(&self) -> &str;

    /// Number of worker threads this strategy uses.
    fn threads(&self) -> usize;

    /// Human-readable label including the thread count.
    fn label(&self) -> String {
        match self.threads() {
            1 => format!("{} (1 thread)", self.name()),
            t => format!("{} ({t} threads)", self.name()),
        }
    }
}

/// Accumulates from n = 1 on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleThreadedSummer;

impl SingleThreadedSummer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Summer for SingleThreadedSummer {
    fn sum(&self, params: &SeriesParams) -> Result<SeriesSum, SeriesError> {
        let (sum, terms_counted) = single_threaded_sum(params.x, params.epsilon)?;
        Ok(SeriesSum {
            sum,
            terms_counted: Some(terms_counted),
        })
    }

    fn name(&self) -> &str {
        "SingleThreaded"
    }

    fn threads(&self) -> usize {
        1
    }
}

/// Spawns one OS thread per partition chunk.
#[derive(Debug, Clone, Copy)]
pub struct ThreadPerChunkSummer {
    threads: usize,
}

impl ThreadPerChunkSummer {
    #[must_use]
    pub fn new(threads: usize) -> Self {
        Self { threads }
    }
}

impl Summer for ThreadPerChunkSummer {
    fn sum(&self, params: &SeriesParams) -> Result<SeriesSum, SeriesError> {
        let sum = multi_threaded_sum(params.x, params.epsilon, self.threads)?;
        Ok(SeriesSum {
            sum,
            terms_counted: None,
        })
    }

    fn name(&self) -> &str {
        "ThreadPerChunk"
    }

    fn threads(&self) -> usize {
        self.threads
    }
}

/// Runs the partition chunks on a fixed-size worker pool.
#[derive(Debug, Clone, Copy)]
pub struct PooledSummer {
    threads: usize,
}

impl PooledSummer {
    #[must_use]
    pub fn new(threads: usize) -> Self {
        Self { threads }
    }
}

impl Summer for PooledSummer {
    fn sum(&self, params: &SeriesParams) -> Result<SeriesSum, SeriesError> {
        let sum = pool_sum(params.x, params.epsilon, self.threads)?;
        Ok(SeriesSum {
            sum,
            terms_counted: None,
        })
    }

    fn name(&self) -> &str {
        "WorkerPool"
    }

    fn threads(&self) -> usize {
        self.threads
    }
}
