//! Assumption validation entry point.

use crate::core::Series;
use crate::validation::report::{TestOutcome, ValidationReport};
use crate::validation::seasonality::{seasonality_scan, MIN_OBSERVATIONS as SEASONALITY_MIN};
use crate::validation::stationarity::adf_test;
use crate::validation::trend::trend_test;

/// Minimum series length for validation to run at all.
pub const MIN_SERIES_LEN: usize = 10;

/// Which assumption checks to run. All are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    pub check_stationarity: bool,
    pub check_seasonality: bool,
    pub check_trend: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_stationarity: true,
            check_seasonality: true,
            check_trend: true,
        }
    }
}

/// Run the requested assumption checks over a cleaned series.
///
/// Below ten observations the report comes back invalid with a single
/// recommendation and no test results. Otherwise every requested sub-test
/// runs; a sub-test that fails internally is captured as a failed outcome
/// without invalidating the series. The seasonality scan additionally
/// requires twenty observations and is silently skipped below that.
pub fn validate(series: &Series, options: &ValidationOptions) -> ValidationReport {
    let values = series.values();

    if values.len() < MIN_SERIES_LEN {
        return ValidationReport::invalid("insufficient data (minimum 10 points)");
    }

    let mut report = ValidationReport::valid();

    if options.check_stationarity {
        let outcome = match adf_test(values) {
            Ok(test) => {
                if !test.is_stationary {
                    report.recommendations.push(
                        "series is non-stationary; difference it or apply a log transform".into(),
                    );
                }
                TestOutcome::Completed(test)
            }
            Err(err) => TestOutcome::Failed {
                error: err.to_string(),
            },
        };
        report.stationarity = Some(outcome);
    }

    if options.check_trend {
        let outcome = match trend_test(values) {
            Ok(test) => {
                if test.has_trend {
                    report
                        .recommendations
                        .push(format!("series has a pronounced trend (slope {:.4})", test.slope));
                }
                TestOutcome::Completed(test)
            }
            Err(err) => TestOutcome::Failed {
                error: err.to_string(),
            },
        };
        report.trend = Some(outcome);
    }

    if options.check_seasonality && values.len() >= SEASONALITY_MIN {
        let outcome = match seasonality_scan(values) {
            Ok(test) => {
                if test.has_seasonality {
                    report.recommendations.push(format!(
                        "series may be periodic with candidate periods {:?}",
                        test.periods
                    ));
                }
                TestOutcome::Completed(test)
            }
            Err(err) => TestOutcome::Failed {
                error: err.to_string(),
            },
        };
        report.seasonality = Some(outcome);
    }

    report
}
