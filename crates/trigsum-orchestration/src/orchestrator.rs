//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use trigsum_core::calculator::{SeriesError, Summer};
use trigsum_core::control::is_close;
use trigsum_core::options::SeriesParams;

use crate::interfaces::SummationResult;

/// Execute every summer in order and time each run.
///
/// Runs are sequential: the parallel strategies already occupy the cores, so
/// overlapping them would distort the timings being compared.
pub fn execute_summations(
    summers: &[Arc<dyn Summer>],
    params: &SeriesParams,
) -> Vec<SummationResult> {
    summers
        .iter()
        .map(|summer| {
            let start = Instant::now();
            let outcome = summer.sum(params);
            let duration = start.elapsed();

            match &outcome {
                Ok(result) => info!(
                    strategy = summer.name(),
                    threads = summer.threads(),
                    sum = result.sum,
                    ?duration,
                    "summation complete"
                ),
                Err(e) => warn!(
                    strategy = summer.name(),
                    threads = summer.threads(),
                    error = %e,
                    "summation failed"
                ),
            }

            SummationResult {
                strategy: summer.name().to_string(),
                threads: summer.threads(),
                label: summer.label(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Cross-check successful results against the first successful one.
///
/// # Errors
///
/// [`SeriesError::Mismatch`] when a sum differs beyond the relative
/// `tolerance`. When no run succeeded, the first run's error is returned;
/// with no runs at all, a [`SeriesError::Config`].
pub fn analyze_comparison_results(
    results: &[SummationResult],
    tolerance: f64,
) -> Result<(), SeriesError> {
    let valid: Vec<(&SummationResult, f64)> = results
        .iter()
        .filter_map(|r| r.sum().map(|s| (r, s)))
        .collect();

    let Some(&(first, reference)) = valid.first() else {
        return match results.first() {
            Some(SummationResult { outcome: Err(e), .. }) => Err(e.clone()),
            _ => Err(SeriesError::Config("no strategies were run".into())),
        };
    };

    for &(result, sum) in &valid[1..] {
        if !is_close(reference, sum, tolerance) {
            return Err(SeriesError::Mismatch(format!(
                "{} = {reference:.15} but {} = {sum:.15} (relative tolerance {tolerance:e})",
                first.label, result.label
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{LN_2, PI};
    use std::time::Duration;

    use super::*;
    use trigsum_core::calculator::{
        PooledSummer, SeriesSum, SingleThreadedSummer, ThreadPerChunkSummer,
    };

    fn ok(label: &str, sum: f64) -> SummationResult {
        SummationResult {
            strategy: label.into(),
            threads: 1,
            label: label.into(),
            outcome: Ok(SeriesSum {
                sum,
                terms_counted: None,
            }),
            duration: Duration::from_millis(1),
        }
    }

    fn failed(label: &str) -> SummationResult {
        SummationResult {
            strategy: label.into(),
            threads: 1,
            label: label.into(),
            outcome: Err(SeriesError::Worker("failed".into())),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_all_strategies() {
        let summers: Vec<Arc<dyn Summer>> = vec![
            Arc::new(SingleThreadedSummer::new()),
            Arc::new(ThreadPerChunkSummer::new(2)),
            Arc::new(PooledSummer::new(2)),
        ];
        let params = SeriesParams::new(PI, 1e-6).unwrap();
        let results = execute_summations(&summers, &params);
        assert_eq!(results.len(), 3);
        for r in &results {
            let sum = r.sum().unwrap_or_else(|| panic!("{} failed: {:?}", r.label, r.outcome));
            assert!((sum + LN_2).abs() < 1e-5, "{}: {sum}", r.label);
        }
        assert!(results[0].outcome.as_ref().unwrap().terms_counted.is_some());
        assert!(analyze_comparison_results(&results, 1e-5).is_ok());
    }

    #[test]
    fn execute_records_failures() {
        let summers: Vec<Arc<dyn Summer>> = vec![Arc::new(ThreadPerChunkSummer::new(0))];
        let params = SeriesParams::new(PI, 1e-3).unwrap();
        let results = execute_summations(&summers, &params);
        assert!(matches!(results[0].outcome, Err(SeriesError::Config(_))));
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![ok("A", -0.693_147), ok("B", -0.693_147_1)];
        assert!(analyze_comparison_results(&results, 1e-5).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok("A", -0.69), ok("B", -0.70)];
        let err = analyze_comparison_results(&results, 1e-5).unwrap_err();
        assert!(matches!(err, SeriesError::Mismatch(ref m) if m.contains('B')));
    }

    #[test]
    fn analyze_zero_sums_match() {
        let results = vec![ok("A", 0.0), ok("B", 0.0)];
        assert!(analyze_comparison_results(&results, 1e-5).is_ok());
    }

    #[test]
    fn analyze_ignores_failed_runs() {
        let results = vec![ok("A", 1.0), failed("B"), ok("C", 1.0)];
        assert!(analyze_comparison_results(&results, 1e-5).is_ok());
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let results = vec![ok("A", 1.0), ok("B", 1.0), ok("C", 2.0)];
        assert!(matches!(
            analyze_comparison_results(&results, 1e-5),
            Err(SeriesError::Mismatch(_))
        ));
    }

    #[test]
    fn analyze_no_valid_results_returns_first_error() {
        let results = vec![failed("A")];
        assert!(matches!(
            analyze_comparison_results(&results, 1e-5),
            Err(SeriesError::Worker(_))
        ));
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[], 1e-5),
            Err(SeriesError::Config(_))
        ));
    }
}
