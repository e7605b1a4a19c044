//! ARIMA forecasting model, estimated by conditional least squares.

use crate::core::Interval;
use crate::error::{Error, Result};
use crate::models::Forecaster;
use crate::utils::optimization::{nelder_mead, NelderMeadConfig};
use crate::utils::stats::normal_quantile;

/// ARIMA(p, d, q) forecaster.
///
/// Combines an autoregressive component of order `p`, `d` rounds of
/// differencing, and a moving-average component of order `q`. The engine
/// always dispatches the fixed (1,1,1) order; the orders stay parameters so
/// degenerate configurations remain testable.
#[derive(Debug, Clone)]
pub struct ARIMA {
    p: usize,
    d: usize,
    q: usize,
    intercept: f64,
    ar: Vec<f64>,
    ma: Vec<f64>,
    original: Option<Vec<f64>>,
    differenced: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
    residual_variance: Option<f64>,
}

impl ARIMA {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            p,
            d,
            q,
            intercept: 0.0,
            ar: Vec::new(),
            ma: Vec::new(),
            original: None,
            differenced: None,
            residuals: None,
            residual_variance: None,
        }
    }

    /// The fixed order the forecast engine uses.
    pub fn arima_111() -> Self {
        Self::new(1, 1, 1)
    }

    /// Smallest training length the order can be estimated from.
    pub fn min_observations(&self) -> usize {
        self.d + self.p.max(self.q) + 2
    }

    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar
    }

    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Conditional sum of squares for a candidate parameter vector.
    fn conditional_sse(
        series: &[f64],
        p: usize,
        q: usize,
        intercept: f64,
        ar: &[f64],
        ma: &[f64],
    ) -> f64 {
        let n = series.len();
        let start = p.max(q);
        if n <= start {
            return f64::MAX;
        }

        let mut residuals = vec![0.0; n];
        let mut sse = 0.0;
        for t in start..n {
            let mut prediction = intercept;
            for (i, phi) in ar.iter().enumerate() {
                prediction += phi * (series[t - 1 - i] - intercept);
            }
            for (i, theta) in ma.iter().enumerate() {
                prediction += theta * residuals[t - 1 - i];
            }
            let error = series[t] - prediction;
            residuals[t] = error;
            sse += error * error;
        }
        sse
    }

    /// Estimate intercept, AR, and MA coefficients on the differenced scale.
    fn estimate(&mut self, series: &[f64]) {
        let (p, q) = (self.p, self.q);
        let mean = series.iter().sum::<f64>() / series.len() as f64;

        if p == 0 && q == 0 {
            self.intercept = mean;
            self.ar.clear();
            self.ma.clear();
            return;
        }

        let mut initial = vec![0.0; 1 + p + q];
        initial[0] = mean;
        for i in 0..p {
            initial[1 + i] = 0.1 / (i + 1) as f64;
        }
        for i in 0..q {
            initial[1 + p + i] = 0.1 / (i + 1) as f64;
        }

        // Coefficient bounds keep the process stationary and invertible.
        let mut bounds = vec![(f64::NEG_INFINITY, f64::INFINITY)];
        bounds.extend(std::iter::repeat((-0.99, 0.99)).take(p + q));

        let config = NelderMeadConfig {
            max_iter: 1000,
            tolerance: 1e-8,
            ..Default::default()
        };
        let result = nelder_mead(
            |params| {
                Self::conditional_sse(
                    series,
                    p,
                    q,
                    params[0],
                    &params[1..1 + p],
                    &params[1 + p..],
                )
            },
            &initial,
            Some(&bounds),
            config,
        );

        self.intercept = result.optimal_point[0];
        self.ar = result.optimal_point[1..1 + p].to_vec();
        self.ma = result.optimal_point[1 + p..].to_vec();
    }

    /// In-sample residuals and their variance on the differenced scale.
    fn compute_residuals(&mut self, series: &[f64]) {
        let n = series.len();
        let start = self.p.max(self.q);
        let mut residuals = vec![0.0; n];

        for t in start..n {
            let mut prediction = self.intercept;
            for (i, phi) in self.ar.iter().enumerate() {
                prediction += phi * (series[t - 1 - i] - self.intercept);
            }
            for (i, theta) in self.ma.iter().enumerate() {
                prediction += theta * residuals[t - 1 - i];
            }
            residuals[t] = series[t] - prediction;
        }

        let effective = &residuals[start..];
        if !effective.is_empty() {
            let variance =
                effective.iter().map(|r| r * r).sum::<f64>() / effective.len() as f64;
            self.residual_variance = Some(variance);
        }
        self.residuals = Some(residuals);
    }
}

impl Default for ARIMA {
    fn default() -> Self {
        Self::arima_111()
    }
}

impl Forecaster for ARIMA {
    fn fit(&mut self, values: &[f64]) -> Result<()> {
        let needed = self.min_observations();
        if values.len() < needed {
            return Err(Error::InsufficientData {
                needed,
                got: values.len(),
            });
        }

        self.original = Some(values.to_vec());
        let differenced = difference(values, self.d);
        self.estimate(&differenced);
        self.compute_residuals(&differenced);
        self.differenced = Some(differenced);
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let original = self.original.as_ref().ok_or(Error::FitRequired)?;
        let differenced = self.differenced.as_ref().ok_or(Error::FitRequired)?;
        let residuals = self.residuals.as_ref().ok_or(Error::FitRequired)?;

        if horizon == 0 {
            return Ok(Vec::new());
        }

        // Extend the differenced series step by step; future shocks are zero.
        let mut extended = differenced.clone();
        let mut shocks = residuals.clone();
        for _ in 0..horizon {
            let t = extended.len();
            let mut prediction = self.intercept;
            for (i, phi) in self.ar.iter().enumerate() {
                if t > i {
                    prediction += phi * (extended[t - 1 - i] - self.intercept);
                }
            }
            for (i, theta) in self.ma.iter().enumerate() {
                if t > i {
                    prediction += theta * shocks[t - 1 - i];
                }
            }
            extended.push(prediction);
            shocks.push(0.0);
        }

        let forecast_diff = &extended[differenced.len()..];
        Ok(if self.d > 0 {
            integrate(forecast_diff, original, self.d)
        } else {
            forecast_diff.to_vec()
        })
    }

    fn predict_with_intervals(
        &self,
        horizon: usize,
        level: f64,
    ) -> Result<(Vec<f64>, Option<Vec<Interval>>)> {
        let predictions = self.predict(horizon)?;
        let variance = self.residual_variance.unwrap_or(0.0);
        let z = normal_quantile((1.0 + level) / 2.0);

        // Forecast variance accumulates with the step.
        let intervals = predictions
            .iter()
            .enumerate()
            .map(|(step, &point)| {
                let se = (variance * (step + 1) as f64).sqrt();
                Interval::new(point - z * se, point + z * se)
            })
            .collect();

        Ok((predictions, Some(intervals)))
    }

    fn name(&self) -> &str {
        "ARIMA"
    }
}

/// Apply `d` rounds of first-order differencing.
pub(crate) fn difference(values: &[f64], d: usize) -> Vec<f64> {
    let mut result = values.to_vec();
    for _ in 0..d {
        if result.len() <= 1 {
            return Vec::new();
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Reverse `d` rounds of differencing, seeding each level with the last
/// value of the original series at that differencing depth.
pub(crate) fn integrate(forecast: &[f64], original: &[f64], d: usize) -> Vec<f64> {
    let mut result = forecast.to_vec();
    for depth in (0..d).rev() {
        let seed = if depth == 0 {
            original.last().copied().unwrap_or(0.0)
        } else {
            difference(original, depth).last().copied().unwrap_or(0.0)
        };
        let mut acc = seed;
        for value in result.iter_mut() {
            acc += *value;
            *value = acc;
        }
    }
    result
}
