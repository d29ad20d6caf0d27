//! Samples a component function over a small domain for plotting.

use crate::calculations::linear_model::Evaluator;
use crate::models::CurveSample;

/// Six unit-spaced points from 0 to 5 inclusive.
pub const DEFAULT_DOMAIN: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Samples `evaluator(intercept, slope, x)` over [`DEFAULT_DOMAIN`].
pub fn sample(
    evaluator: Evaluator,
    intercept: f64,
    slope: f64,
) -> CurveSample {
    sample_over(evaluator, intercept, slope, &DEFAULT_DOMAIN)
}

/// Samples `evaluator(intercept, slope, x)` for each `x` in `domain`, in order.
pub fn sample_over(
    evaluator: Evaluator,
    intercept: f64,
    slope: f64,
    domain: &[f64],
) -> CurveSample {
    CurveSample {
        domain: domain.to_vec(),
        range: domain
            .iter()
            .map(|&x| evaluator(intercept, slope, x))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::linear_model::{evaluate, worker_consumption};

    #[test]
    fn default_domain_yields_six_unit_points() {
        let curve = sample(worker_consumption, 4.0, 0.8);

        assert_eq!(curve.domain, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(curve.range.len(), 6);
        for (x, y) in curve.points() {
            assert_eq!(y, worker_consumption(4.0, 0.8, x));
        }
    }

    #[test]
    fn sample_is_deterministic() {
        assert_eq!(sample(evaluate, 1.0, -0.3), sample(evaluate, 1.0, -0.3));
    }

    #[test]
    fn sample_over_custom_domain() {
        let curve = sample_over(evaluate, 1.0, 2.0, &[-1.0, 0.5, 10.0]);

        assert_eq!(curve.range, vec![-1.0, 2.0, 21.0]);
    }

    #[test]
    fn sample_over_empty_domain() {
        let curve = sample_over(evaluate, 1.0, 2.0, &[]);

        assert!(curve.domain.is_empty());
        assert!(curve.range.is_empty());
    }
}
