//! One-shot forecasting pipeline.
//!
//! Runs the full request-scoped sequence: validate the series, difference
//! it when the validator finds a unit root (with a single re-validation of
//! the result), pick a model unless the caller hinted one, forecast, score,
//! and assemble the chart payload. Each invocation is a pure function of
//! its inputs; nothing is retained across calls.

use crate::chart::{assemble, ChartPayload};
use crate::core::{ForecastOutcome, Series};
use crate::engine::{forecast, DEFAULT_HORIZON};
use crate::error::{Error, Result};
use crate::models::{select_model, ModelKind};
use crate::transform::stationarize;
use crate::validation::{validate, ValidationOptions, ValidationReport, MIN_SERIES_LEN};

/// Caller-supplied configuration, with hints from the surrounding service.
///
/// `model` and `horizon` may come from an external configuration generator;
/// when absent, the selector heuristic and the ten-period default apply.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub options: ValidationOptions,
    /// Explicit model choice, bypassing the selector.
    pub model: Option<ModelKind>,
    /// Number of future points to forecast.
    pub horizon: usize,
    pub chart_title: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            options: ValidationOptions::default(),
            model: None,
            horizon: DEFAULT_HORIZON,
            chart_title: None,
        }
    }
}

/// Everything a persistence layer needs from one pipeline run. Identifier
/// assignment and storage are the caller's concern.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// The validation report the forecast was based on (post-transform when
    /// differencing occurred).
    pub report: ValidationReport,
    /// The model that produced the forecast.
    pub model: ModelKind,
    pub outcome: ForecastOutcome,
    pub chart: ChartPayload,
    /// Whether the series was differenced before forecasting.
    pub differenced: bool,
}

/// Run the full pipeline over a cleaned series.
///
/// The only failures that cross this boundary are input-shaped: a series
/// below the validation minimum, or a zero horizon. Sub-test failures stay
/// inside the report and model failures degrade into the fallback forecast.
pub fn run(series: &Series, config: &PipelineConfig) -> Result<PipelineReport> {
    let mut report = validate(series, &config.options);
    if !report.is_valid {
        return Err(Error::InsufficientData {
            needed: MIN_SERIES_LEN,
            got: series.len(),
        });
    }

    let working = stationarize(series, &report);
    let differenced = working.len() != series.len();
    if differenced {
        // One re-validation pass on the transformed series; its findings
        // drive model selection from here on.
        report = validate(&working, &config.options);
    }

    let model = config.model.unwrap_or_else(|| select_model(&report));
    let outcome = forecast(&working, model, config.horizon)?;

    let title = config.chart_title.as_deref().unwrap_or("Forecast");
    let chart = assemble(
        working.values(),
        &outcome.predictions,
        outcome.intervals.as_deref(),
        title,
    );

    Ok(PipelineReport {
        report,
        model,
        outcome,
        chart,
        differenced,
    })
}
