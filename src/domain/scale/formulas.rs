//! Grade-value formulas, one per scale.

use super::kind::ScaleFormula;

const MIN_VALUE: f64 = 1.0;
const MAX_VALUE: f64 = 9.0;

/// Range shared by every multi-grade scale (the 7±2 rule).
const MULTI_GRADE_RANGE: (usize, usize) = (3, 9);

/// Two-grade scale: "equal" or "preferred".
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalFormula;

impl ScaleFormula for OrdinalFormula {
    fn gradation_range(&self) -> (usize, usize) {
        (2, 2)
    }

    fn generate(&self, _gradations: usize) -> Vec<f64> {
        vec![MIN_VALUE, MAX_VALUE]
    }
}

/// Saaty's fundamental 1-9 scale, thinned to roughly uniform integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Saaty9Formula;

impl ScaleFormula for Saaty9Formula {
    fn gradation_range(&self) -> (usize, usize) {
        MULTI_GRADE_RANGE
    }

    fn generate(&self, gradations: usize) -> Vec<f64> {
        if gradations == 9 {
            return (1..=9).map(f64::from).collect();
        }
        if gradations < 2 {
            return vec![MIN_VALUE; gradations];
        }
        let step = (MAX_VALUE - MIN_VALUE) / (gradations - 1) as f64;
        (0..gradations)
            .map(|i| (MIN_VALUE + i as f64 * step).round_ties_even())
            .collect()
    }
}

/// Balanced scale: w/(1-w) over evenly spread weights w.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedFormula;

impl ScaleFormula for BalancedFormula {
    fn gradation_range(&self) -> (usize, usize) {
        MULTI_GRADE_RANGE
    }

    fn generate(&self, gradations: usize) -> Vec<f64> {
        (1..=gradations)
            .map(|i| {
                let w = (i as f64 / (gradations + 1) as f64).min(0.99);
                (w / (1.0 - w)).clamp(MIN_VALUE, MAX_VALUE)
            })
            .collect()
    }
}

/// Power scale: 9^(i/(n-1)).
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerFormula;

impl ScaleFormula for PowerFormula {
    fn gradation_range(&self) -> (usize, usize) {
        MULTI_GRADE_RANGE
    }

    fn generate(&self, gradations: usize) -> Vec<f64> {
        if gradations == 1 {
            return vec![MIN_VALUE];
        }
        let last = (gradations - 1) as f64;
        (0..gradations)
            .map(|i| MAX_VALUE.powf(i as f64 / last))
            .collect()
    }
}

/// Ma-Zheng scale: n/(n+1-i), capped at 9.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaZhengFormula;

impl ScaleFormula for MaZhengFormula {
    fn gradation_range(&self) -> (usize, usize) {
        MULTI_GRADE_RANGE
    }

    fn generate(&self, gradations: usize) -> Vec<f64> {
        let n = gradations as f64;
        (1..=gradations)
            .map(|i| (n / (n + 1.0 - i as f64)).min(MAX_VALUE))
            .collect()
    }
}

/// Donegan-Dodd-McMaster scale: hyperbolic-tangent spacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoneganFormula;

impl ScaleFormula for DoneganFormula {
    fn gradation_range(&self) -> (usize, usize) {
        MULTI_GRADE_RANGE
    }

    fn generate(&self, gradations: usize) -> Vec<f64> {
        if gradations == 1 {
            return vec![MIN_VALUE];
        }
        let last = (gradations - 1) as f64;
        let denominator = 2.0_f64.tanh();
        (1..=gradations)
            .map(|i| {
                let x = (i - 1) as f64 / last;
                (MIN_VALUE + 8.0 * (2.0 * x).tanh() / denominator).clamp(MIN_VALUE, MAX_VALUE)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-4, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn saaty9_full_scale_is_one_to_nine() {
        assert_eq!(
            Saaty9Formula.generate(9),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }

    #[test]
    fn saaty9_thinned_scale_uses_rounded_integers() {
        assert_eq!(Saaty9Formula.generate(5), vec![1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(Saaty9Formula.generate(3), vec![1.0, 5.0, 9.0]);
        assert_eq!(Saaty9Formula.generate(4), vec![1.0, 4.0, 6.0, 9.0]);
    }

    #[test]
    fn balanced_clamps_low_grades_to_one() {
        assert_close(&BalancedFormula.generate(3), &[1.0, 1.0, 3.0]);
    }

    #[test]
    fn power_spans_one_to_nine_geometrically() {
        assert_close(&PowerFormula.generate(3), &[1.0, 3.0, 9.0]);
    }

    #[test]
    fn ma_zheng_grows_hyperbolically() {
        assert_close(&MaZhengFormula.generate(3), &[1.0, 1.5, 3.0]);
    }

    #[test]
    fn ma_zheng_caps_at_nine() {
        let values = MaZhengFormula.generate(9);
        assert_eq!(values[8], 9.0);
        assert_eq!(values[0], 1.0);
    }

    #[test]
    fn donegan_hits_both_endpoints() {
        let values = DoneganFormula.generate(3);
        assert_close(&values, &[1.0, 7.3201, 9.0]);
    }

    #[test]
    fn single_grade_edge_cases_yield_one() {
        assert_eq!(PowerFormula.generate(1), vec![1.0]);
        assert_eq!(DoneganFormula.generate(1), vec![1.0]);
    }
}
