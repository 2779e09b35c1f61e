//! Single-threaded summation from n = 1.

use tracing::{debug, info};

use crate::calculator::SeriesError;
use crate::options::SeriesParams;
use crate::term::{non_finite_term, term_unchecked};

/// Sum cos(nx)/n from n = 1 until the first term with |aₙ| < ε.
///
/// Returns `(sum, terms_counted)`, where `terms_counted` is the index of the
/// first term that failed the threshold. That term is not included, so the
/// last term added is `terms_counted - 1`.
///
/// Terminates for every finite x since |cos(nx)/n| ≤ 1/n, or at the first
/// term where n·x overflows.
///
/// # Errors
///
/// [`SeriesError::InvalidInput`] for non-finite x or a non-finite term;
/// [`SeriesError::Config`] for an unusable epsilon.
pub fn single_threaded_sum(x: f64, epsilon: f64) -> Result<(f64, u64), SeriesError> {
    let params = SeriesParams::new(x, epsilon)?;
    debug!(x = params.x, epsilon = params.epsilon, "single-threaded summation");

    let mut total = 0.0;
    let mut n: u64 = 1;
    loop {
        let a = term_unchecked(params.x, n);
        if !a.is_finite() {
            return Err(non_finite_term(params.x, n));
        }
        if a.abs() < params.epsilon {
            break;
        }
        total += a;
        n += 1;
    }

    info!(sum = total, terms_counted = n, "single-threaded summation finished");
    Ok((total, n))
}
