//! Forecast result structures.

use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};

/// Lower and upper bound of a confidence interval for one forecast step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether a value falls inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Point forecasts with optional confidence intervals and accuracy metrics.
///
/// `predictions` always has exactly the requested horizon; `intervals` is
/// either absent or the same length. `metrics` is absent when no held-out
/// observations were available for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOutcome {
    pub predictions: Vec<f64>,
    pub intervals: Option<Vec<Interval>>,
    pub metrics: Option<Metrics>,
}

impl ForecastOutcome {
    /// Outcome with point forecasts only.
    pub fn from_predictions(predictions: Vec<f64>) -> Self {
        Self {
            predictions,
            intervals: None,
            metrics: None,
        }
    }

    /// Attach confidence intervals.
    pub fn with_intervals(mut self, intervals: Vec<Interval>) -> Self {
        self.intervals = Some(intervals);
        self
    }

    /// Attach held-out accuracy metrics.
    pub fn with_metrics(mut self, metrics: Option<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.predictions.len()
    }

    /// Whether confidence intervals are present.
    pub fn has_intervals(&self) -> bool {
        self.intervals.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_width_and_containment() {
        let interval = Interval::new(1.0, 3.0);
        assert_eq!(interval.width(), 2.0);
        assert!(interval.contains(2.0));
        assert!(interval.contains(1.0));
        assert!(!interval.contains(3.5));
    }

    #[test]
    fn outcome_builders_compose() {
        let outcome = ForecastOutcome::from_predictions(vec![1.0, 2.0, 3.0])
            .with_intervals(vec![
                Interval::new(0.5, 1.5),
                Interval::new(1.5, 2.5),
                Interval::new(2.5, 3.5),
            ])
            .with_metrics(Some(Metrics {
                mse: 4.0,
                mae: 2.0,
                rmse: 2.0,
            }));

        assert_eq!(outcome.horizon(), 3);
        assert!(outcome.has_intervals());
        assert_eq!(outcome.intervals.as_ref().map(|iv| iv.len()), Some(3));
        assert_eq!(outcome.metrics.map(|m| m.rmse), Some(2.0));
    }

    #[test]
    fn bare_outcome_has_no_intervals_or_metrics() {
        let outcome = ForecastOutcome::from_predictions(vec![0.0; 5]);
        assert_eq!(outcome.horizon(), 5);
        assert!(!outcome.has_intervals());
        assert!(outcome.metrics.is_none());
    }
}
