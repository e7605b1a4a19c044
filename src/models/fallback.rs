//! Guaranteed-success fallback forecast.

use crate::error::{Error, Result};

/// Cap on the number of trailing observations the fallback averages.
const WINDOW_CAP: usize = 5;

/// Constant forecast from the mean of the most recent training observations.
///
/// The window is `min(5, train/2)`, clamped to at least one observation so
/// the fallback succeeds for every non-empty training set. Used whenever a
/// proper model fails to fit; for a forecasting service, a flat recent-mean
/// line beats an error.
pub fn recent_mean_forecast(train: &[f64], horizon: usize) -> Result<Vec<f64>> {
    if train.is_empty() {
        return Err(Error::EmptyData);
    }

    let window = (train.len() / 2).min(WINDOW_CAP).max(1);
    let tail = &train[train.len() - window..];
    let mean = tail.iter().sum::<f64>() / window as f64;

    Ok(vec![mean; horizon])
}
