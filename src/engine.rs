//! Forecast engine: train/test split, model dispatch, universal fallback.

use crate::core::{ForecastOutcome, Interval, Series};
use crate::error::{Error, Result};
use crate::metrics;
use crate::models::exponential::{HoltWinters, TrendSmoothing};
use crate::models::{recent_mean_forecast, Forecaster, ModelKind, ARIMA};

/// Forecast horizon used when the caller supplies no hint.
pub const DEFAULT_HORIZON: usize = 10;

/// Fraction of the series used for training; the remainder is held out.
pub const TRAIN_FRACTION: f64 = 0.8;

/// Coverage of the ARIMA confidence intervals.
const CONFIDENCE_LEVEL: f64 = 0.95;

/// Cap on the Holt-Winters seasonal period.
const MAX_SEASONAL_PERIOD: usize = 12;

/// Chronological split: first 80% of the observations train, the rest are
/// held out for scoring. No shuffling.
pub fn split_train_test(values: &[f64]) -> (&[f64], &[f64]) {
    let cut = (values.len() as f64 * TRAIN_FRACTION) as usize;
    values.split_at(cut)
}

/// Fit the requested model on the training portion of the series and
/// forecast `horizon` future points, scoring against the held-out portion.
///
/// Model failures never surface: a Holt-Winters fit problem degrades to the
/// simple-smoothing strategy, and any remaining strategy error is replaced
/// by the recent-mean fallback. The only errors returned are input-shaped:
/// a zero horizon, or a series too short to yield a training set.
pub fn forecast(series: &Series, kind: ModelKind, horizon: usize) -> Result<ForecastOutcome> {
    if horizon == 0 {
        return Err(Error::InvalidParameter("horizon must be at least 1".into()));
    }

    let (train, test) = split_train_test(series.values());
    if train.is_empty() {
        return Err(Error::EmptyData);
    }

    let (predictions, intervals) = match run_strategy(train, kind, horizon) {
        Ok(result) => result,
        Err(err) => {
            log::warn!(
                "{} failed ({err}); using recent-mean fallback",
                kind.as_str()
            );
            (recent_mean_forecast(train, horizon)?, None)
        }
    };

    let metrics = metrics::evaluate(test, &predictions);
    Ok(ForecastOutcome {
        predictions,
        intervals,
        metrics,
    })
}

/// Dispatch one forecasting strategy.
fn run_strategy(
    train: &[f64],
    kind: ModelKind,
    horizon: usize,
) -> Result<(Vec<f64>, Option<Vec<Interval>>)> {
    match kind {
        ModelKind::ARIMA => {
            let mut model = ARIMA::arima_111();
            model.fit(train)?;
            model.predict_with_intervals(horizon, CONFIDENCE_LEVEL)
        }
        ModelKind::HoltWinters => {
            let period = (train.len() / 2).min(MAX_SEASONAL_PERIOD).max(2);
            let mut model = HoltWinters::auto(period);
            match model.fit(train) {
                Ok(()) => Ok((model.predict(horizon)?, None)),
                Err(err) => {
                    log::debug!(
                        "holt-winters fit failed ({err}); degrading to simple smoothing"
                    );
                    simple_smoothing(train, horizon)
                }
            }
        }
        ModelKind::SimpleExponentialSmoothing => simple_smoothing(train, horizon),
    }
}

/// The simple-smoothing strategy, shared by its model kind and by the
/// Holt-Winters degradation path so both produce identical output.
fn simple_smoothing(train: &[f64], horizon: usize) -> Result<(Vec<f64>, Option<Vec<Interval>>)> {
    let mut model = TrendSmoothing::auto();
    model.fit(train)?;
    Ok((model.predict(horizon)?, None))
}
