//! # autoforecast
//!
//! Assumption-validated time series forecasting.
//!
//! Given a cleaned numeric series, the crate tests the statistical
//! assumptions forecasting relies on (stationarity, trend, seasonality),
//! optionally differences the series, picks a model from the test results,
//! and produces point forecasts with held-out accuracy metrics. ARIMA
//! forecasts carry confidence intervals; every model failure degrades into a
//! deterministic recent-mean fallback, so forecasting never aborts once the
//! input itself is acceptable.

#![allow(clippy::upper_case_acronyms)]

pub mod chart;
pub mod core;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod transform;
pub mod utils;
pub mod validation;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::chart::{assemble, ChartPayload};
    pub use crate::core::{ForecastOutcome, Interval, Series};
    pub use crate::engine::forecast;
    pub use crate::error::{Error, Result};
    pub use crate::metrics::{evaluate, Metrics};
    pub use crate::models::{select_model, ModelKind};
    pub use crate::pipeline::{run, PipelineConfig, PipelineReport};
    pub use crate::validation::{validate, ValidationOptions, ValidationReport};
}
