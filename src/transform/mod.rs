//! Corrective series transforms driven by validation findings.

use crate::core::Series;
use crate::validation::ValidationReport;

/// First-order differencing: `y'[i] = y[i+1] - y[i]`.
///
/// The result is one element shorter than the input; an empty or
/// single-element input differences to an empty series.
pub fn first_difference(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Difference the series when the report's stationarity test completed and
/// found a unit root; otherwise return the series unchanged.
///
/// The transform never loops: re-validating the result is the caller's
/// responsibility, and a single re-validation pass is the documented usage.
pub fn stationarize(series: &Series, report: &ValidationReport) -> Series {
    if report.needs_differencing() {
        log::debug!(
            "differencing non-stationary series of {} observations",
            series.len()
        );
        Series::from_values(first_difference(series.values()))
    } else {
        series.clone()
    }
}
