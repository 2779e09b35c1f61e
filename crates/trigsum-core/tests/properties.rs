//! Property-based tests for partitioning and the summation strategies.

use std::f64::consts::PI;

use proptest::prelude::*;

use trigsum_core::control::is_close;
use trigsum_core::partition::{max_terms, plan, Chunk};
use trigsum_core::{multi_threaded_sum, pool_sum, single_threaded_sum, term_range_sum};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Chunks are contiguous, non-overlapping, and cover exactly [1, max_n].
    #[test]
    fn partition_covers_range(eps in 1e-6f64..10.0, threads in 1usize..300) {
        let plan = plan(eps, threads).unwrap();
        prop_assert_eq!(plan.max_n, max_terms(eps).unwrap());
        prop_assert_eq!(plan.chunks.len(), threads);
        prop_assert_eq!(plan.chunks[0].start_n, 1);
        for pair in plan.chunks.windows(2) {
            prop_assert_eq!(pair[1].start_n, pair[0].end_n + 1);
        }
        prop_assert_eq!(plan.chunks.last().unwrap().end_n, plan.max_n);
        let covered: u64 = plan.chunks.iter().map(Chunk::len).sum();
        prop_assert_eq!(covered, plan.max_n);
    }

    /// Same inputs, same plan.
    #[test]
    fn partition_is_deterministic(eps in 1e-6f64..1.0, threads in 1usize..64) {
        prop_assert_eq!(plan(eps, threads).unwrap(), plan(eps, threads).unwrap());
    }

    /// The upper bound lies past the convergence point.
    #[test]
    fn max_n_exceeds_convergence_point(eps in 1e-5f64..1.0) {
        let (_, terms_counted) = single_threaded_sum(PI, eps).unwrap();
        prop_assert!(max_terms(eps).unwrap() >= terms_counted);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// At x = π every term up to ⌈1/ε⌉ passes the threshold, so every
    /// strategy sums the same terms.
    #[test]
    fn strategies_agree_at_pi(eps in 1e-5f64..1e-2, threads in 1usize..9) {
        let (single, _) = single_threaded_sum(PI, eps).unwrap();
        let multi = multi_threaded_sum(PI, eps, threads).unwrap();
        let pooled = pool_sum(PI, eps, threads).unwrap();
        prop_assert!(is_close(single, multi, 1e-5), "{} vs {}", single, multi);
        prop_assert_eq!(multi.to_bits(), pooled.to_bits());
    }

    /// A range starting where 1/n < ε contributes nothing.
    #[test]
    fn tail_ranges_contribute_zero(x in -10.0f64..10.0, eps in 1e-4f64..1e-1, len in 0u64..1000) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let start = (1.0 / eps).ceil() as u64 + 1;
        let sum = term_range_sum(x, start, start + len, eps).unwrap();
        prop_assert_eq!(sum.to_bits(), 0.0f64.to_bits());
    }
}
