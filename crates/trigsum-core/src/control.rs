//! Closed-form reference values for Σ cos(nx)/n.
//!
//! For 0 < x < 2π the series converges to −ln(2·sin(x/2)). At x = π the
//! series is the negated alternating harmonic series and the sum is −ln 2.

use std::f64::consts::{LN_2, PI};

use crate::calculator::SeriesError;
use crate::constants::{HALF_SINE_FLOOR, PI_RELATIVE_TOLERANCE};

/// Relative closeness test: |a − b| ≤ `rel_tol` · max(|a|, |b|).
#[inline]
#[must_use]
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Control value y(x) = −ln(2·sin(x/2)).
///
/// # Errors
///
/// Returns [`SeriesError::Domain`] when x is not finite or when
/// sin(x/2) ≤ [`HALF_SINE_FLOOR`], i.e. x/2 sits on (or rounds onto) a
/// multiple of π or inside a negative half-period. No NaN is ever returned.
///
/// ```
/// use trigsum_core::control::control_value;
///
/// let y = control_value(std::f64::consts::PI).unwrap();
/// assert!((y + std::f64::consts::LN_2).abs() < 1e-15);
/// assert!(control_value(0.0).is_err());
/// ```
pub fn control_value(x: f64) -> Result<f64, SeriesError> {
    if !x.is_finite() {
        return Err(SeriesError::Domain {
            x,
            reason: "x is not finite",
        });
    }
    let half_sine = (x / 2.0).sin();
    if half_sine <= HALF_SINE_FLOOR {
        return Err(SeriesError::Domain {
            x,
            reason: "sin(x/2) is not positive at f64 precision",
        });
    }
    Ok(-(2.0 * half_sine).ln())
}

/// Analytical sum of the series.
///
/// Returns −ln 2 exactly when x is within [`PI_RELATIVE_TOLERANCE`] of π,
/// otherwise the general control value.
pub fn analytical_sum(x: f64) -> Result<f64, SeriesError> {
    let control = control_value(x)?;
    if is_close(x, PI, PI_RELATIVE_TOLERANCE) {
        return Ok(-LN_2);
    }
    Ok(control)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    use super::*;

    fn closed_form(x: f64) -> f64 {
        -(2.0 * (x / 2.0).sin()).ln()
    }

    #[test]
    fn control_value_at_pi() {
        let y = control_value(PI).unwrap();
        assert!(is_close(y, -LN_2, 1e-10), "got {y}");
    }

    #[test]
    fn control_value_matches_closed_form() {
        for x in [PI, FRAC_PI_2, FRAC_PI_3] {
            let y = control_value(x).unwrap();
            let expected = closed_form(x);
            assert!(
                is_close(y, expected, 1e-10) || (y - expected).abs() < 1e-15,
                "x={x}: expected {expected}, got {y}"
            );
        }
    }

    #[test]
    fn control_value_singularities() {
        for x in [0.0, 2.0 * PI, -2.0 * PI, 4.0 * PI] {
            assert!(
                matches!(control_value(x), Err(SeriesError::Domain { .. })),
                "x={x} should be a domain error"
            );
        }
    }

    #[test]
    fn control_value_negative_half_period() {
        assert!(matches!(
            control_value(-1.0),
            Err(SeriesError::Domain { .. })
        ));
        assert!(matches!(
            control_value(3.0 * PI),
            Err(SeriesError::Domain { .. })
        ));
    }

    #[test]
    fn control_value_rejects_rounding_residue() {
        // sin(π) is 1.22e-16 in f64, not 0.
        assert!((2.0 * PI / 2.0).sin() > 0.0);
        assert!(matches!(
            control_value(2.0 * PI),
            Err(SeriesError::Domain { .. })
        ));
        // Below the floor even though sin(x/2) is positive.
        assert!(matches!(
            control_value(1e-16),
            Err(SeriesError::Domain { .. })
        ));
        assert!(control_value(1e-12).is_ok());
    }

    #[test]
    fn control_value_non_finite() {
        assert!(control_value(f64::NAN).is_err());
        assert!(control_value(f64::NEG_INFINITY).is_err());
        assert!(analytical_sum(f64::INFINITY).is_err());
    }

    #[test]
    fn analytical_sum_for_pi() {
        let s = analytical_sum(PI).unwrap();
        assert!(is_close(s, -LN_2, 1e-10));
        assert_eq!(s.to_bits(), (-LN_2).to_bits());
    }

    #[test]
    fn analytical_sum_recognises_near_pi() {
        let s = analytical_sum(PI * (1.0 + 1e-12)).unwrap();
        assert_eq!(s.to_bits(), (-LN_2).to_bits());
    }

    #[test]
    fn analytical_sum_delegates_elsewhere() {
        let s = analytical_sum(FRAC_PI_2).unwrap();
        assert!(is_close(s, closed_form(FRAC_PI_2), 1e-12));
        assert!(analytical_sum(0.0).is_err());
    }

    #[test]
    fn is_close_basic() {
        assert!(is_close(1.0, 1.0 + 1e-12, 1e-9));
        assert!(!is_close(1.0, 1.1, 1e-9));
        assert!(is_close(0.0, 0.0, 1e-9));
        assert!(!is_close(0.0, 1e-30, 1e-9));
    }
}
