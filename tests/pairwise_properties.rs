//! Property-based tests for scales, matrices and weights.
//!
//! Uses proptest to check that the invariants of the method hold for
//! arbitrary scales, judgments and weight vectors.

use proptest::prelude::*;

use pairwise_consensus::domain::consistency::ConsistencyAnalyzer;
use pairwise_consensus::domain::foundation::matrix::is_reciprocal;
use pairwise_consensus::domain::foundation::SquareMatrix;
use pairwise_consensus::domain::pcm::PairwiseComparisonMatrix;
use pairwise_consensus::domain::scale::{informativeness, unify_judgment, unify_to_cardinal, Scale};

const ALTERNATIVES: [&str; 4] = ["A", "B", "C", "D"];

/// A scale together with a gradation count it supports.
fn scale_and_gradations() -> impl Strategy<Value = (Scale, usize)> {
    prop::sample::select(Scale::ALL.to_vec()).prop_flat_map(|scale| {
        let (min, max) = scale.gradation_range();
        (Just(scale), min..=max)
    })
}

/// A reciprocal matrix with upper-triangle entries drawn from [1/9, 9].
fn reciprocal_matrix(n: usize) -> impl Strategy<Value = SquareMatrix> {
    prop::collection::vec(-1.0f64..1.0, n * (n - 1) / 2).prop_map(move |exponents| {
        let mut matrix = SquareMatrix::from_element(n, n, 1.0);
        let mut next = exponents.into_iter();
        for i in 0..n {
            for j in (i + 1)..n {
                let value = 9f64.powf(next.next().unwrap_or(0.0));
                matrix[(i, j)] = value;
                matrix[(j, i)] = 1.0 / value;
            }
        }
        matrix
    })
}

// =============================================================================
// Scale Properties
// =============================================================================

proptest! {
    /// values(scale, n) has n ascending entries in [1, 9]
    #[test]
    fn prop_scale_values_shape((scale, n) in scale_and_gradations()) {
        let values = scale.values(n).unwrap();
        prop_assert_eq!(values.len(), n);
        prop_assert!(values.iter().all(|v| (1.0..=9.0).contains(v)), "{:?}", values);
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
    }

    /// Cardinal mapping is monotonic and lands on an integer in [1, 9]
    #[test]
    fn prop_unify_to_cardinal_monotonic(n in 1usize..=20, a in 1usize..=20, b in 1usize..=20) {
        let (low, high) = (a.min(b).min(n), a.max(b).min(n));
        let low_grade = unify_to_cardinal(n, low).unwrap();
        let high_grade = unify_to_cardinal(n, high).unwrap();
        prop_assert!(low_grade <= high_grade);
        prop_assert!((1..=9).contains(&low_grade));
        prop_assert!((1..=9).contains(&high_grade));
    }

    /// Any positive judgment unifies into [1, 9]
    #[test]
    fn prop_unify_judgment_in_range((scale, n) in scale_and_gradations(), value in 0.01f64..20.0) {
        let unified = unify_judgment(scale, n, value, false).unwrap();
        prop_assert!((1..=9).contains(&unified));
    }

    /// Informativeness grows with the number of grades
    #[test]
    fn prop_informativeness_increasing(n in 2usize..100) {
        prop_assert!(informativeness(n + 1).unwrap() > informativeness(n).unwrap());
    }
}

// =============================================================================
// Matrix Properties
// =============================================================================

proptest! {
    /// Every sequence of accepted judgments, followed by transitive fill,
    /// leaves a reciprocal matrix
    #[test]
    fn prop_pcm_stays_reciprocal(
        judgments in prop::collection::vec(
            (0usize..4, 0usize..4, 0.05f64..12.0, scale_and_gradations()),
            0..12,
        )
    ) {
        let mut pcm = PairwiseComparisonMatrix::new(ALTERNATIVES.to_vec(), "expert");
        for (i, j, value, (scale, n)) in judgments {
            let _ = pcm.add_judgment(ALTERNATIVES[i], ALTERNATIVES[j], value, scale, n);
        }
        prop_assert!(is_reciprocal(pcm.unified(), 1e-12));

        if pcm.check_connectivity() {
            pcm.fill_transitive();
            prop_assert!(pcm.status().is_complete());
        }
        prop_assert!(is_reciprocal(pcm.unified(), 1e-12));
    }
}

// =============================================================================
// Weight Properties
// =============================================================================

proptest! {
    /// Both weighting methods return a probability vector
    #[test]
    fn prop_weights_sum_to_one(matrix in (3usize..=6).prop_flat_map(reciprocal_matrix)) {
        let eigen = ConsistencyAnalyzer::weights_eigenvector(&matrix).unwrap();
        let geometric = ConsistencyAnalyzer::weights_geometric_mean(&matrix).unwrap();

        prop_assert!((eigen.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!((geometric.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!(eigen.iter().all(|w| *w >= 0.0));
        prop_assert!(geometric.iter().all(|w| *w > 0.0));
    }

    /// A matrix built from weights is perfectly consistent and returns them
    #[test]
    fn prop_ideal_matrix_is_consistent(raw in prop::collection::vec(0.05f64..1.0, 3..=6)) {
        let total: f64 = raw.iter().sum();
        let weights: Vec<f64> = raw.iter().map(|w| w / total).collect();
        let ideal = ConsistencyAnalyzer::ideal_pcm(&weights);

        let report = ConsistencyAnalyzer::report(&ideal).unwrap();
        prop_assert!(report.consistency_ratio.abs() < 1e-6, "CR = {}", report.consistency_ratio);
        prop_assert!(report.is_consistent);

        let recovered = ConsistencyAnalyzer::weights_geometric_mean(&ideal).unwrap();
        for (actual, expected) in recovered.iter().zip(&weights) {
            prop_assert!((actual - expected).abs() < 1e-9);
        }
    }
}
