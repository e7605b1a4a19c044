//! Exponential smoothing models.
//!
//! `TrendSmoothing` is additive-trend (Holt) smoothing, the default for
//! series with neither a detected trend nor seasonality.
//! `HoltWinters` adds an additive seasonal component on top of it.

use crate::error::{Error, Result};
use crate::models::Forecaster;
use crate::utils::optimization::{nelder_mead, NelderMeadConfig};
use crate::utils::stats::mean;

const PARAM_MIN: f64 = 0.0001;
const PARAM_MAX: f64 = 0.9999;

/// Additive-trend exponential smoothing.
///
/// Level: `l_t = α·y_t + (1-α)(l_{t-1} + b_{t-1})`
/// Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// Forecast: `ŷ_{t+h} = l_t + h·b_t`
#[derive(Debug, Clone)]
pub struct TrendSmoothing {
    alpha: Option<f64>,
    beta: Option<f64>,
    optimize: bool,
    level: Option<f64>,
    trend: Option<f64>,
}

impl TrendSmoothing {
    /// Fixed smoothing parameters, both clamped to (0, 1).
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha: Some(alpha.clamp(PARAM_MIN, PARAM_MAX)),
            beta: Some(beta.clamp(PARAM_MIN, PARAM_MAX)),
            optimize: false,
            level: None,
            trend: None,
        }
    }

    /// Parameters chosen by in-sample SSE minimization.
    pub fn auto() -> Self {
        Self {
            alpha: None,
            beta: None,
            optimize: true,
            level: None,
            trend: None,
        }
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    pub fn beta(&self) -> Option<f64> {
        self.beta
    }

    pub fn level(&self) -> Option<f64> {
        self.level
    }

    pub fn trend(&self) -> Option<f64> {
        self.trend
    }

    /// Run the smoothing recursion, returning final state and SSE.
    fn recurse(values: &[f64], alpha: f64, beta: f64) -> (f64, f64, f64) {
        let mut level = values[0];
        let mut trend = values[1] - values[0];
        let mut sse = 0.0;

        for &y in &values[1..] {
            let forecast = level + trend;
            let error = y - forecast;
            sse += error * error;

            let previous = level;
            level = alpha * y + (1.0 - alpha) * (previous + trend);
            trend = beta * (level - previous) + (1.0 - beta) * trend;
        }

        (level, trend, sse)
    }
}

impl Default for TrendSmoothing {
    fn default() -> Self {
        Self::auto()
    }
}

impl Forecaster for TrendSmoothing {
    fn fit(&mut self, values: &[f64]) -> Result<()> {
        if values.len() < 2 {
            return Err(Error::InsufficientData {
                needed: 2,
                got: values.len(),
            });
        }

        if self.optimize {
            let result = nelder_mead(
                |params| Self::recurse(values, params[0], params[1]).2,
                &[0.3, 0.1],
                Some(&[(PARAM_MIN, PARAM_MAX), (PARAM_MIN, PARAM_MAX)]),
                NelderMeadConfig::default(),
            );
            self.alpha = Some(result.optimal_point[0].clamp(PARAM_MIN, PARAM_MAX));
            self.beta = Some(result.optimal_point[1].clamp(PARAM_MIN, PARAM_MAX));
        }

        let alpha = self.alpha.ok_or(Error::FitRequired)?;
        let beta = self.beta.ok_or(Error::FitRequired)?;
        let (level, trend, _) = Self::recurse(values, alpha, beta);
        self.level = Some(level);
        self.trend = Some(trend);
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let level = self.level.ok_or(Error::FitRequired)?;
        let trend = self.trend.ok_or(Error::FitRequired)?;
        Ok((1..=horizon).map(|h| level + h as f64 * trend).collect())
    }

    fn name(&self) -> &str {
        "TrendSmoothing"
    }
}

/// Additive Holt-Winters smoothing: level, trend, and seasonal state.
#[derive(Debug, Clone)]
pub struct HoltWinters {
    alpha: Option<f64>,
    beta: Option<f64>,
    gamma: Option<f64>,
    period: usize,
    optimize: bool,
    level: Option<f64>,
    trend: Option<f64>,
    seasonals: Option<Vec<f64>>,
    n: usize,
}

impl HoltWinters {
    /// Fixed smoothing parameters for the given seasonal period.
    pub fn new(alpha: f64, beta: f64, gamma: f64, period: usize) -> Self {
        Self {
            alpha: Some(alpha.clamp(PARAM_MIN, PARAM_MAX)),
            beta: Some(beta.clamp(PARAM_MIN, PARAM_MAX)),
            gamma: Some(gamma.clamp(PARAM_MIN, PARAM_MAX)),
            period,
            optimize: false,
            level: None,
            trend: None,
            seasonals: None,
            n: 0,
        }
    }

    /// Parameters chosen by in-sample SSE minimization.
    pub fn auto(period: usize) -> Self {
        Self {
            alpha: None,
            beta: None,
            gamma: None,
            period,
            optimize: true,
            level: None,
            trend: None,
            seasonals: None,
            n: 0,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Initial level, trend, and normalized seasonal indices from the first
    /// complete season(s).
    fn initialize(values: &[f64], period: usize) -> (f64, f64, Vec<f64>) {
        let first_season = &values[..period];
        let level = mean(first_season);

        // Average seasonal difference across the first two seasons.
        let trend = if values.len() >= 2 * period {
            (0..period)
                .map(|i| (values[period + i] - values[i]) / period as f64)
                .sum::<f64>()
                / period as f64
        } else {
            0.0
        };

        let mut seasonals: Vec<f64> = first_season.iter().map(|y| y - level).collect();
        let adjustment = seasonals.iter().sum::<f64>() / period as f64;
        for s in &mut seasonals {
            *s -= adjustment;
        }

        (level, trend, seasonals)
    }

    /// Run the smoothing recursion, returning final state and SSE.
    fn recurse(
        values: &[f64],
        period: usize,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> (f64, f64, Vec<f64>, f64) {
        let (mut level, mut trend, mut seasonals) = Self::initialize(values, period);
        let mut sse = 0.0;

        for (t, &y) in values.iter().enumerate().skip(period) {
            let s = seasonals[t % period];
            let forecast = level + trend + s;
            let error = y - forecast;
            sse += error * error;

            let previous = level;
            level = alpha * (y - s) + (1.0 - alpha) * (previous + trend);
            trend = beta * (level - previous) + (1.0 - beta) * trend;
            seasonals[t % period] = gamma * (y - level) + (1.0 - gamma) * s;
        }

        (level, trend, seasonals, sse)
    }
}

impl Forecaster for HoltWinters {
    fn fit(&mut self, values: &[f64]) -> Result<()> {
        if self.period < 2 {
            return Err(Error::InvalidParameter(
                "seasonal period must be at least 2".into(),
            ));
        }
        let needed = 2 * self.period;
        if values.len() < needed {
            return Err(Error::InsufficientData {
                needed,
                got: values.len(),
            });
        }

        if self.optimize {
            let period = self.period;
            let result = nelder_mead(
                |params| Self::recurse(values, period, params[0], params[1], params[2]).3,
                &[0.3, 0.1, 0.1],
                Some(&[
                    (PARAM_MIN, PARAM_MAX),
                    (PARAM_MIN, PARAM_MAX),
                    (PARAM_MIN, PARAM_MAX),
                ]),
                NelderMeadConfig::default(),
            );
            self.alpha = Some(result.optimal_point[0].clamp(PARAM_MIN, PARAM_MAX));
            self.beta = Some(result.optimal_point[1].clamp(PARAM_MIN, PARAM_MAX));
            self.gamma = Some(result.optimal_point[2].clamp(PARAM_MIN, PARAM_MAX));
        }

        let alpha = self.alpha.ok_or(Error::FitRequired)?;
        let beta = self.beta.ok_or(Error::FitRequired)?;
        let gamma = self.gamma.ok_or(Error::FitRequired)?;

        let (level, trend, seasonals, _) =
            Self::recurse(values, self.period, alpha, beta, gamma);
        self.level = Some(level);
        self.trend = Some(trend);
        self.seasonals = Some(seasonals);
        self.n = values.len();
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let level = self.level.ok_or(Error::FitRequired)?;
        let trend = self.trend.ok_or(Error::FitRequired)?;
        let seasonals = self.seasonals.as_ref().ok_or(Error::FitRequired)?;

        Ok((1..=horizon)
            .map(|h| {
                let s = seasonals[(self.n + h - 1) % self.period];
                level + h as f64 * trend + s
            })
            .collect())
    }

    fn name(&self) -> &str {
        "HoltWinters"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn trend_smoothing_learns_a_linear_ramp() {
        let values: Vec<f64> = (0..20).map(|i| 5.0 + 3.0 * i as f64).collect();
        let mut model = TrendSmoothing::new(0.9, 0.9);
        model.fit(&values).unwrap();

        assert!((model.trend().unwrap() - 3.0).abs() < 1.0);
        let predictions = model.predict(5).unwrap();
        assert_eq!(predictions.len(), 5);
        assert!(predictions[1] > predictions[0]);
    }

    #[test]
    fn trend_smoothing_auto_optimizes_parameters() {
        let values: Vec<f64> = (0..30)
            .map(|i| 10.0 + 1.5 * i as f64 + (i as f64 * 0.5).sin())
            .collect();
        let mut model = TrendSmoothing::auto();
        model.fit(&values).unwrap();

        assert!(model.alpha().unwrap() > 0.0);
        assert!(model.beta().unwrap() > 0.0);
        assert_eq!(model.predict(5).unwrap().len(), 5);
    }

    #[test]
    fn trend_smoothing_on_constant_series_forecasts_flat() {
        let values = vec![10.0; 12];
        let mut model = TrendSmoothing::new(0.3, 0.1);
        model.fit(&values).unwrap();

        for prediction in model.predict(3).unwrap() {
            assert!((prediction - 10.0).abs() < 2.0);
        }
    }

    #[test]
    fn trend_smoothing_rejects_single_observation() {
        let mut model = TrendSmoothing::auto();
        assert!(matches!(
            model.fit(&[1.0]),
            Err(Error::InsufficientData { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn trend_smoothing_requires_fit_before_predict() {
        let model = TrendSmoothing::new(0.3, 0.1);
        assert!(matches!(model.predict(3), Err(Error::FitRequired)));
    }

    #[test]
    fn holt_winters_reproduces_an_additive_seasonal_pattern() {
        // Base 10 with a [0, 5, 0, -5] seasonal cycle, no trend.
        let values: Vec<f64> = (0..24)
            .map(|i| 10.0 + [0.0, 5.0, 0.0, -5.0][i % 4])
            .collect();
        let mut model = HoltWinters::auto(4);
        model.fit(&values).unwrap();

        let predictions = model.predict(4).unwrap();
        assert_relative_eq!(predictions[0], 10.0, epsilon = 1.0);
        assert_relative_eq!(predictions[1], 15.0, epsilon = 1.0);
        assert_relative_eq!(predictions[2], 10.0, epsilon = 1.0);
        assert_relative_eq!(predictions[3], 5.0, epsilon = 1.0);
    }

    #[test]
    fn holt_winters_tracks_trend_and_season_together() {
        let values: Vec<f64> = (0..32)
            .map(|i| 0.5 * i as f64 + [0.0, 4.0, 0.0, -4.0][i % 4])
            .collect();
        let mut model = HoltWinters::auto(4);
        model.fit(&values).unwrap();

        let predictions = model.predict(8).unwrap();
        assert_eq!(predictions.len(), 8);
        // Same season one cycle later sits higher by the accumulated trend.
        assert!(predictions[4] > predictions[0]);
    }

    #[test]
    fn holt_winters_needs_two_full_seasons() {
        let mut model = HoltWinters::auto(4);
        let values: Vec<f64> = (0..7).map(|i| i as f64).collect();
        assert!(matches!(
            model.fit(&values),
            Err(Error::InsufficientData { needed: 8, got: 7 })
        ));
    }

    #[test]
    fn holt_winters_rejects_degenerate_period() {
        let mut model = HoltWinters::auto(1);
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert!(matches!(
            model.fit(&values),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn model_names() {
        assert_eq!(TrendSmoothing::auto().name(), "TrendSmoothing");
        assert_eq!(HoltWinters::auto(4).name(), "HoltWinters");
    }
}
