//! Forecaster trait shared by the model implementations.

use crate::core::Interval;
use crate::error::Result;

/// Common interface for the forecasting strategies.
///
/// Object-safe, so the engine can hold a `Box<dyn Forecaster>` when
/// dispatching.
pub trait Forecaster {
    /// Fit the model to the training observations.
    fn fit(&mut self, values: &[f64]) -> Result<()>;

    /// Produce `horizon` point forecasts.
    fn predict(&self, horizon: usize) -> Result<Vec<f64>>;

    /// Produce point forecasts together with symmetric confidence intervals
    /// at the given coverage level.
    ///
    /// The default implementation forecasts without intervals; only models
    /// with a residual-variance estimate override it.
    fn predict_with_intervals(
        &self,
        horizon: usize,
        level: f64,
    ) -> Result<(Vec<f64>, Option<Vec<Interval>>)> {
        let _ = level;
        Ok((self.predict(horizon)?, None))
    }

    /// Model display name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exponential::TrendSmoothing;

    #[test]
    fn trait_is_object_safe() {
        let mut model: Box<dyn Forecaster> = Box::new(TrendSmoothing::auto());
        let values: Vec<f64> = (0..10).map(|i| i as f64).collect();
        model.fit(&values).unwrap();
        assert_eq!(model.predict(4).unwrap().len(), 4);
    }

    #[test]
    fn default_interval_implementation_returns_none() {
        let mut model = TrendSmoothing::auto();
        let values: Vec<f64> = (0..10).map(|i| 2.0 * i as f64).collect();
        model.fit(&values).unwrap();
        let (predictions, intervals) = model.predict_with_intervals(3, 0.95).unwrap();
        assert_eq!(predictions.len(), 3);
        assert!(intervals.is_none());
    }
}
