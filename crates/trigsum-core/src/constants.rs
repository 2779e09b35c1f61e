//! Constants for series summation defaults and configuration.

/// Default convergence threshold: summation stops once |aₙ| < ε.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Extra indices added to ⌈1/ε⌉ when sizing the partition upper bound.
pub const MAX_N_MARGIN: u64 = 100;

/// Largest ⌈1/ε⌉ accepted (2^53): every index up to here is exact in `f64`.
pub const MAX_SERIES_TERMS: u64 = 1 << 53;

/// Smallest accepted epsilon, `1 / MAX_SERIES_TERMS`.
#[allow(clippy::cast_precision_loss)]
pub const MIN_EPSILON: f64 = 1.0 / MAX_SERIES_TERMS as f64;

/// Relative tolerance used to recognise x = π in the analytical shortcut.
pub const PI_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Any sin(x/2) at or below this is treated as a singularity of the control value;
/// sin(π) itself rounds to 1.22e-16.
pub const HALF_SINE_FLOOR: f64 = f64::EPSILON;

/// Default relative tolerance for cross-checking strategies against each other.
pub const DEFAULT_COMPARISON_TOLERANCE: f64 = 1e-5;

/// Thread counts exercised by the raw-thread strategy when none are given.
pub const DEFAULT_THREAD_COUNTS: [usize; 3] = [2, 4, 8];

/// Worker pool size used when none is given.
pub const DEFAULT_POOL_THREADS: usize = 4;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// x lies on a singularity of the control value.
    pub const ERROR_DOMAIN: i32 = 5;
}
