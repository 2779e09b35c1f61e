//! Comparison report assembled from a set of strategy runs.

use std::f64::consts::{LN_2, PI};

use serde::Serialize;
use trigsum_core::calculator::SeriesError;
use trigsum_core::constants::PI_RELATIVE_TOLERANCE;
use trigsum_core::control::{analytical_sum, control_value, is_close};
use trigsum_core::options::SeriesParams;
use trigsum_core::term::term;

use crate::interfaces::SummationResult;

/// Largest |analytical − control| still reported as a match.
const ANALYTICAL_MATCH_TOLERANCE: f64 = 1e-15;

/// One strategy run as it appears in the report.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub label: String,
    pub strategy: String,
    pub threads: usize,
    pub sum: Option<f64>,
    pub terms_counted: Option<u64>,
    pub duration_secs: f64,
    /// Baseline duration divided by this run's; absent for the baseline itself.
    pub speedup: Option<f64>,
    /// |sum − control value|.
    pub abs_error: Option<f64>,
    pub error: Option<String>,
}

/// Whether truncation happened at the requested precision.
#[derive(Debug, Clone, Serialize)]
pub struct PrecisionCheck {
    pub epsilon: f64,
    /// Index of the first excluded term, as reported by the baseline run.
    pub terms_counted: u64,
    /// |a_{terms_counted}|.
    pub first_excluded_term: f64,
    pub satisfied: bool,
}

/// Everything the presenters need to render a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub x: f64,
    pub epsilon: f64,
    pub control_value: f64,
    pub analytical_sum: f64,
    pub x_is_pi: bool,
    pub analytical_matches_control: bool,
    pub runs: Vec<RunSummary>,
    /// |baseline sum + ln 2|.
    pub gap_to_minus_ln2: Option<f64>,
    pub precision: Option<PrecisionCheck>,
}

/// Build the report for a set of runs.
///
/// The baseline is the first successful run that reports a term count, i.e.
/// the single-threaded one.
///
/// # Errors
///
/// [`SeriesError::Domain`] when x is a singularity of the control value.
pub fn build_report(
    params: &SeriesParams,
    results: &[SummationResult],
) -> Result<ComparisonReport, SeriesError> {
    let control = control_value(params.x)?;
    let analytical = analytical_sum(params.x)?;

    let baseline = results.iter().find_map(|r| match &r.outcome {
        Ok(sum) => sum.terms_counted.map(|terms| (r, sum.sum, terms)),
        Err(_) => None,
    });
    let baseline_secs = baseline.map(|(r, _, _)| r.duration.as_secs_f64());

    let runs = results
        .iter()
        .map(|r| {
            let duration_secs = r.duration.as_secs_f64();
            let is_baseline = baseline.is_some_and(|(b, _, _)| std::ptr::eq(b, r));
            let speedup = match baseline_secs {
                Some(base) if !is_baseline && duration_secs > 0.0 => Some(base / duration_secs),
                _ => None,
            };
            let (sum, terms_counted, error) = match &r.outcome {
                Ok(s) => (Some(s.sum), s.terms_counted, None),
                Err(e) => (None, None, Some(e.to_string())),
            };
            RunSummary {
                label: r.label.clone(),
                strategy: r.strategy.clone(),
                threads: r.threads,
                sum,
                terms_counted,
                duration_secs,
                speedup,
                abs_error: sum.map(|s| (s - control).abs()),
                error,
            }
        })
        .collect();

    let precision = baseline
        .map(|(_, _, terms)| {
            let excluded = term(params.x, terms)?.abs();
            Ok::<_, SeriesError>(PrecisionCheck {
                epsilon: params.epsilon,
                terms_counted: terms,
                first_excluded_term: excluded,
                satisfied: excluded < params.epsilon,
            })
        })
        .transpose()?;

    Ok(ComparisonReport {
        x: params.x,
        epsilon: params.epsilon,
        control_value: control,
        analytical_sum: analytical,
        x_is_pi: is_close(params.x, PI, PI_RELATIVE_TOLERANCE),
        analytical_matches_control: (analytical - control).abs() < ANALYTICAL_MATCH_TOLERANCE,
        runs,
        gap_to_minus_ln2: baseline.map(|(_, sum, _)| (sum + LN_2).abs()),
        precision,
    })
}
