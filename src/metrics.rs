//! Forecast accuracy metrics against held-out observations.

use serde::{Deserialize, Serialize};

/// Held-out accuracy metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean squared error.
    pub mse: f64,
    /// Mean absolute error.
    pub mae: f64,
    /// Root mean squared error (`sqrt(mse)` exactly).
    pub rmse: f64,
}

/// Score predictions against held-out observations.
///
/// Returns `None` when the held-out set is empty. When the two slices differ
/// in length the comparison covers the overlapping prefix, so a forecast
/// horizon shorter than the held-out window is scored on what it predicted.
pub fn evaluate(test: &[f64], predictions: &[f64]) -> Option<Metrics> {
    let n = test.len().min(predictions.len());
    if n == 0 {
        return None;
    }

    let mut squared = 0.0;
    let mut absolute = 0.0;
    for (actual, predicted) in test[..n].iter().zip(&predictions[..n]) {
        let error = actual - predicted;
        squared += error * error;
        absolute += error.abs();
    }

    let mse = squared / n as f64;
    Some(Metrics {
        mse,
        mae: absolute / n as f64,
        rmse: mse.sqrt(),
    })
}
