//! Linear trend detection.

use crate::error::{Error, Result};
use crate::validation::report::TrendTest;

/// Slope magnitude above which a series is considered trending.
pub const SLOPE_THRESHOLD: f64 = 0.01;

/// Fit a degree-1 least-squares line against the positional index.
///
/// # Errors
/// `InsufficientData` below two observations.
pub fn trend_test(values: &[f64]) -> Result<TrendTest> {
    let n = values.len();
    if n < 2 {
        return Err(Error::InsufficientData { needed: 2, got: n });
    }

    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxx += dx * dx;
        sxy += dx * (y - y_mean);
    }

    // The index is always strictly increasing, so sxx > 0 for n >= 2.
    let slope = sxy / sxx;

    Ok(TrendTest {
        slope,
        has_trend: slope.abs() > SLOPE_THRESHOLD,
    })
}
