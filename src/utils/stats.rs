//! Basic statistics on positional series.

use statrs::distribution::{ContinuousCDF, Normal};

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (n-1 denominator). NaN below two observations.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Autocorrelation at the given lag.
///
/// Returns NaN when the series is shorter than the lag and 0.0 for a
/// zero-variance series (no linear structure to correlate).
pub fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    if values.len() <= lag {
        return f64::NAN;
    }

    let m = mean(values);
    let denominator: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    if denominator <= f64::EPSILON {
        return 0.0;
    }

    let numerator: f64 = values
        .iter()
        .skip(lag)
        .zip(values.iter())
        .map(|(current, lagged)| (current - m) * (lagged - m))
        .sum();

    numerator / denominator
}

/// Quantile of the standard normal distribution.
pub fn normal_quantile(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    match Normal::new(0.0, 1.0) {
        Ok(normal) => normal.inverse_cdf(p),
        Err(_) => f64::NAN,
    }
}
