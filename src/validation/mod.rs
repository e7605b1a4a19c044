//! Statistical assumption checks for a candidate forecast series.

mod report;
mod seasonality;
mod stationarity;
mod trend;
mod validator;

pub use report::{SeasonalityTest, StationarityTest, TestOutcome, TrendTest, ValidationReport};
pub use seasonality::seasonality_scan;
pub use stationarity::adf_test;
pub use trend::trend_test;
pub use validator::{validate, ValidationOptions, MIN_SERIES_LEN};
