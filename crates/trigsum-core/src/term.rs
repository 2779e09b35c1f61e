//! Series terms aₙ = cos(nx)/n and range summation with early stop.

use crate::calculator::SeriesError;
use crate::options::SeriesParams;

/// Term without argument checks. Callers guarantee n ≥ 1.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn term_unchecked(x: f64, n: u64) -> f64 {
    let n = n as f64;
    (n * x).cos() / n
}

/// Sum over `start_n..=end_n`, breaking before the first term with |aₙ| < ε.
///
/// A non-finite term (n·x overflowed) also ends the range and is added, so
/// the returned sum is non-finite and callers can reject it.
#[inline]
pub(crate) fn accumulate(params: SeriesParams, start_n: u64, end_n: u64) -> f64 {
    let mut sum = 0.0;
    for n in start_n..=end_n {
        let a = term_unchecked(params.x, n);
        if !a.is_finite() {
            return sum + a;
        }
        if a.abs() < params.epsilon {
            break;
        }
        sum += a;
    }
    sum
}

pub(crate) fn non_finite_term(x: f64, n: u64) -> SeriesError {
    SeriesError::InvalidInput(format!(
        "term {n} is not finite for x = {x:e} (n·x overflows)"
    ))
}

/// Single term aₙ = cos(n·x)/n.
///
/// # Errors
///
/// [`SeriesError::InvalidInput`] for n = 0.
pub fn term(x: f64, n: u64) -> Result<f64, SeriesError> {
    if n == 0 {
        return Err(SeriesError::InvalidInput(
            "series index n starts at 1".to_string(),
        ));
    }
    Ok(term_unchecked(x, n))
}

/// Sum of aₙ for n in `[start_n, end_n]`, stopping early at the first term
/// whose magnitude is below `epsilon` (that term is not added).
///
/// A range that starts past the convergence point contributes 0.0, and an
/// empty range (`start_n > end_n`) does too.
///
/// # Errors
///
/// [`SeriesError::InvalidInput`] for `start_n == 0`, non-finite x, or a
/// term that overflows to non-finite inside the range;
/// [`SeriesError::Config`] for an unusable epsilon.
pub fn term_range_sum(x: f64, start_n: u64, end_n: u64, epsilon: f64) -> Result<f64, SeriesError> {
    let params = SeriesParams::new(x, epsilon)?;
    if start_n == 0 {
        return Err(SeriesError::InvalidInput(
            "range must start at n >= 1".to_string(),
        ));
    }
    let sum = accumulate(params, start_n, end_n);
    if !sum.is_finite() {
        let n = (start_n..=end_n)
            .find(|&n| !term_unchecked(x, n).is_finite())
            .unwrap_or(start_n);
        return Err(non_finite_term(x, n));
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn term_values() {
        assert!((term(PI, 1).unwrap() + 1.0).abs() < 1e-15);
        assert!((term(PI, 2).unwrap() - 0.5).abs() < 1e-15);
        assert!((term(0.0, 4).unwrap() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn term_rejects_zero_index() {
        assert!(matches!(term(1.0, 0), Err(SeriesError::InvalidInput(_))));
    }

    #[test]
    fn range_sum_first_ten_terms_at_pi() {
        // -1 + 1/2 - 1/3 + ... + 1/10
        let expected: f64 = (1..=10)
            .map(|n| {
                let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
                sign / f64::from(n)
            })
            .sum();
        let result = term_range_sum(PI, 1, 10, 1e-7).unwrap();
        assert!(result.is_finite());
        assert!((result - expected).abs() < 1e-12, "got {result}");
    }

    #[test]
    fn range_sum_past_convergence_is_zero() {
        // |cos(nπ)/n| = 1/n < 1e-3 for n > 1000
        let result = term_range_sum(PI, 5_000, 10_000, 1e-3).unwrap();
        assert_eq!(result.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn range_sum_stops_before_small_term() {
        // cos(π/2) rounds to ~6e-17, far below epsilon, so nothing is added.
        let result = term_range_sum(FRAC_PI_2, 1, 1_000, 1e-7).unwrap();
        assert_eq!(result.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn range_sum_respects_end() {
        let one = term_range_sum(PI, 1, 1, 1e-7).unwrap();
        assert!((one + 1.0).abs() < 1e-15);
    }

    #[test]
    fn range_sum_empty_range() {
        assert_eq!(term_range_sum(PI, 10, 9, 1e-7).unwrap().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn range_sum_handles_end_at_u64_max() {
        let result = term_range_sum(PI, u64::MAX - 1, u64::MAX, 1e-7).unwrap();
        assert_eq!(result.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn range_sum_rejects_zero_start() {
        assert!(matches!(
            term_range_sum(PI, 0, 10, 1e-7),
            Err(SeriesError::InvalidInput(_))
        ));
    }

    #[test]
    fn range_sum_rejects_overflowing_terms() {
        let err = term_range_sum(1e308, 1, 10, 1e-3).unwrap_err();
        assert!(
            matches!(err, SeriesError::InvalidInput(ref m) if m.contains("term 2")),
            "{err}"
        );
    }

    #[test]
    fn accumulate_stops_at_non_finite_term() {
        let params = SeriesParams::new(1e308, 1e-3).unwrap();
        assert!(accumulate(params, 1, u64::MAX).is_nan());
    }

    #[test]
    fn range_sum_rejects_bad_epsilon() {
        assert!(matches!(
            term_range_sum(PI, 1, 10, 0.0),
            Err(SeriesError::Config(_))
        ));
    }
}
