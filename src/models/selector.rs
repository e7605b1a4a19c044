//! Model selection from validation findings.

use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};

/// The closed set of forecasting methods the engine can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[serde(rename = "arima")]
    ARIMA,
    HoltWinters,
    SimpleExponentialSmoothing,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::ARIMA => "arima",
            ModelKind::HoltWinters => "holt_winters",
            ModelKind::SimpleExponentialSmoothing => "simple_exponential_smoothing",
        }
    }
}

/// Pick a forecasting method from the validation findings.
///
/// Seasonality dominates trend: a seasonal series goes to Holt-Winters even
/// when it also trends. A trending, non-seasonal series goes to ARIMA, and
/// everything else to simple exponential smoothing. Absent or failed
/// sub-tests count as no finding.
pub fn select_model(report: &ValidationReport) -> ModelKind {
    let kind = if report.has_seasonality() {
        ModelKind::HoltWinters
    } else if report.has_trend() {
        ModelKind::ARIMA
    } else {
        ModelKind::SimpleExponentialSmoothing
    };
    log::debug!(
        "selected {} (trend={}, seasonality={})",
        kind.as_str(),
        report.has_trend(),
        report.has_seasonality()
    );
    kind
}
