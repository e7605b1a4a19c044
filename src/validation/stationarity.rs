//! Unit-root (stationarity) testing.
//!
//! A Dickey-Fuller style regression of the first difference on the lagged
//! level. The t-statistic on the level coefficient is mapped to an
//! approximate p-value through interpolation of the MacKinnon surface for
//! the constant-only case.

use crate::error::{Error, Result};
use crate::utils::stats::mean;
use crate::validation::report::StationarityTest;

/// Significance level for the stationarity decision.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Minimum observations for a meaningful regression.
const MIN_OBSERVATIONS: usize = 10;

/// Asymptotic quantiles of the Dickey-Fuller tau distribution
/// (constant, no trend), from the MacKinnon tabulation.
const TAU_QUANTILES: &[(f64, f64)] = &[
    (-4.32, 0.001),
    (-3.43, 0.01),
    (-3.12, 0.025),
    (-2.86, 0.05),
    (-2.57, 0.10),
    (-2.17, 0.25),
    (-1.57, 0.50),
    (-0.94, 0.75),
    (-0.44, 0.90),
    (-0.07, 0.95),
    (0.60, 0.99),
];

/// Test the unit-root null on a positional series.
///
/// The regression is `Δy_t = α + β·y_{t-1} + ε_t`; under the null β = 0 and
/// the series has a unit root (non-stationary). Rejection at the 5% level
/// reports the series as stationary.
///
/// # Errors
/// `InsufficientData` below ten observations; `ComputationError` when the
/// regression is degenerate (constant level series).
pub fn adf_test(values: &[f64]) -> Result<StationarityTest> {
    let n = values.len();
    if n < MIN_OBSERVATIONS {
        return Err(Error::InsufficientData {
            needed: MIN_OBSERVATIONS,
            got: n,
        });
    }

    let diff: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let level = &values[..n - 1];

    let x_mean = mean(level);
    let y_mean = mean(&diff);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (x, y) in level.iter().zip(&diff) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if sxx <= f64::EPSILON {
        return Err(Error::ComputationError(
            "level series has zero variance".into(),
        ));
    }

    if syy <= f64::EPSILON {
        // Constant first difference: a deterministic drift leaves no
        // residual variation and no evidence against the unit root.
        let statistic = 0.0;
        let p_value = tau_p_value(statistic);
        return Ok(StationarityTest {
            statistic,
            p_value,
            is_stationary: false,
        });
    }

    let beta = sxy / sxx;
    let rss = (syy - beta * sxy).max(0.0);
    let dof = diff.len() as f64 - 2.0;
    let sigma_sq = rss / dof;

    if !sigma_sq.is_finite() || sigma_sq <= 0.0 {
        return Err(Error::ComputationError(
            "degenerate residual variance in unit-root regression".into(),
        ));
    }

    let se = (sigma_sq / sxx).sqrt();
    let statistic = beta / se;
    let p_value = tau_p_value(statistic);

    Ok(StationarityTest {
        statistic,
        p_value,
        is_stationary: p_value < SIGNIFICANCE_LEVEL,
    })
}

/// Approximate p-value by linear interpolation over the tau quantile grid.
fn tau_p_value(statistic: f64) -> f64 {
    let (first_stat, first_p) = TAU_QUANTILES[0];
    if statistic <= first_stat {
        return first_p / 2.0;
    }

    for window in TAU_QUANTILES.windows(2) {
        let (lo_stat, lo_p) = window[0];
        let (hi_stat, hi_p) = window[1];
        if statistic <= hi_stat {
            let fraction = (statistic - lo_stat) / (hi_stat - lo_stat);
            return lo_p + fraction * (hi_p - lo_p);
        }
    }

    let (_, last_p) = TAU_QUANTILES[TAU_QUANTILES.len() - 1];
    (last_p + 0.005).min(0.9995)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic noise without pulling in an RNG.
    fn pseudo_noise(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| ((i * 17 + 13) % 97) as f64 / 50.0 - 1.0)
            .collect()
    }

    #[test]
    fn white_noise_is_stationary() {
        let result = adf_test(&pseudo_noise(200)).unwrap();
        assert!(result.statistic < 0.0);
        assert!(result.p_value < SIGNIFICANCE_LEVEL);
        assert!(result.is_stationary);
    }

    #[test]
    fn random_walk_yields_a_valid_p_value() {
        let mut series = vec![0.0; 200];
        for i in 1..200 {
            series[i] = series[i - 1] + ((i * 17) % 19) as f64 / 10.0 - 0.9;
        }
        let result = adf_test(&series).unwrap();
        assert!(result.p_value >= 0.0 && result.p_value <= 1.0);
    }

    #[test]
    fn noisy_trend_is_non_stationary() {
        let series: Vec<f64> = (0..200)
            .map(|i| i as f64 * 0.5 + ((i * 13) % 7) as f64 * 0.01)
            .collect();
        let result = adf_test(&series).unwrap();
        assert!(!result.is_stationary);
    }

    #[test]
    fn deterministic_ramp_is_non_stationary() {
        let series: Vec<f64> = (1..=12).map(|i| i as f64).collect();
        let result = adf_test(&series).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!(result.p_value > 0.5);
        assert!(!result.is_stationary);
    }

    #[test]
    fn constant_series_fails_the_regression() {
        let series = vec![5.0; 30];
        assert!(matches!(
            adf_test(&series),
            Err(Error::ComputationError(_))
        ));
    }

    #[test]
    fn short_series_is_rejected() {
        let series = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            adf_test(&series),
            Err(Error::InsufficientData { needed: 10, got: 3 })
        ));
    }

    #[test]
    fn p_value_interpolation_matches_anchors() {
        assert!((tau_p_value(-2.86) - 0.05).abs() < 1e-12);
        assert!((tau_p_value(-3.43) - 0.01).abs() < 1e-12);
        // Between the 5% and 10% anchors.
        let p = tau_p_value(-2.7);
        assert!(p > 0.05 && p < 0.10);
        // Far tails saturate.
        assert!(tau_p_value(-10.0) < 0.001);
        assert!(tau_p_value(5.0) <= 0.9995);
    }
}
