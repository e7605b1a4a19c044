//! Validation report types.

use serde::{Deserialize, Serialize};

/// Result of one statistical sub-test: completed with findings, or failed
/// with the reason. A failed sub-test never invalidates the series; it is
/// simply reported and skipped for recommendation purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestOutcome<T> {
    Completed(T),
    Failed { error: String },
}

impl<T> TestOutcome<T> {
    /// The findings, when the test completed.
    pub fn completed(&self) -> Option<&T> {
        match self {
            TestOutcome::Completed(test) => Some(test),
            TestOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestOutcome::Failed { .. })
    }
}

/// Unit-root test findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationarityTest {
    /// Dickey-Fuller regression t-statistic.
    pub statistic: f64,
    /// Approximate p-value for the unit-root null.
    pub p_value: f64,
    /// Whether the unit-root null was rejected at the 5% level.
    pub is_stationary: bool,
}

/// Linear trend findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendTest {
    /// Least-squares slope against the positional index.
    pub slope: f64,
    /// Whether the slope magnitude exceeds the trend threshold.
    pub has_trend: bool,
}

/// Seasonality scan findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityTest {
    pub has_seasonality: bool,
    /// Candidate periods in scan order, capped at three.
    pub periods: Vec<usize>,
}

/// Outcome of a full validation pass over a series.
///
/// Created fresh per call and immutable once returned. `is_valid` is false
/// only when the series fails the minimum-length precondition; individual
/// sub-test failures are carried in their respective fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub stationarity: Option<TestOutcome<StationarityTest>>,
    pub trend: Option<TestOutcome<TrendTest>>,
    pub seasonality: Option<TestOutcome<SeasonalityTest>>,
    pub recommendations: Vec<String>,
}

impl ValidationReport {
    /// An empty passing report, before any sub-test has run.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            stationarity: None,
            trend: None,
            seasonality: None,
            recommendations: Vec::new(),
        }
    }

    /// A failing report carrying a single recommendation.
    pub fn invalid(recommendation: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            stationarity: None,
            trend: None,
            seasonality: None,
            recommendations: vec![recommendation.into()],
        }
    }

    /// Whether the trend test completed and found a trend.
    pub fn has_trend(&self) -> bool {
        self.trend
            .as_ref()
            .and_then(TestOutcome::completed)
            .map(|t| t.has_trend)
            .unwrap_or(false)
    }

    /// Whether the seasonality scan completed and found candidate periods.
    pub fn has_seasonality(&self) -> bool {
        self.seasonality
            .as_ref()
            .and_then(TestOutcome::completed)
            .map(|t| t.has_seasonality)
            .unwrap_or(false)
    }

    /// Whether the stationarity test completed and rejected the unit root.
    pub fn is_stationary(&self) -> bool {
        self.stationarity
            .as_ref()
            .and_then(TestOutcome::completed)
            .map(|t| t.is_stationary)
            .unwrap_or(false)
    }

    /// Whether differencing is warranted: the stationarity test must have
    /// completed and found the series non-stationary. An absent or failed
    /// test gives no evidence to transform on.
    pub fn needs_differencing(&self) -> bool {
        self.stationarity
            .as_ref()
            .and_then(TestOutcome::completed)
            .map(|t| !t.is_stationary)
            .unwrap_or(false)
    }
}
