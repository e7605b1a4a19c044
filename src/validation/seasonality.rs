//! Seasonality detection through the autocorrelation function.

use crate::error::{Error, Result};
use crate::utils::stats::autocorrelation;
use crate::validation::report::SeasonalityTest;

/// Absolute autocorrelation above which a lag counts as a seasonal peak.
pub const ACF_PEAK_THRESHOLD: f64 = 0.3;

/// Maximum number of lags scanned.
pub const MAX_LAGS: usize = 20;

/// Maximum number of candidate periods reported.
pub const MAX_PERIODS: usize = 3;

/// Minimum series length for a meaningful scan.
pub const MIN_OBSERVATIONS: usize = 20;

/// Scan the autocorrelation function for periodic structure.
///
/// Lags 0 and 1 are skipped (they reflect level and persistence, not
/// periodicity); lags from 2 up to `min(20, n/2)` whose absolute
/// autocorrelation exceeds the peak threshold become candidate periods, the
/// first three at most.
///
/// # Errors
/// `InsufficientData` below twenty observations.
pub fn seasonality_scan(values: &[f64]) -> Result<SeasonalityTest> {
    let n = values.len();
    if n < MIN_OBSERVATIONS {
        return Err(Error::InsufficientData {
            needed: MIN_OBSERVATIONS,
            got: n,
        });
    }

    let max_lag = MAX_LAGS.min(n / 2);
    let mut periods = Vec::new();

    for lag in 2..=max_lag {
        if autocorrelation(values, lag).abs() > ACF_PEAK_THRESHOLD {
            periods.push(lag);
            if periods.len() == MAX_PERIODS {
                break;
            }
        }
    }

    Ok(SeasonalityTest {
        has_seasonality: !periods.is_empty(),
        periods,
    })
}
