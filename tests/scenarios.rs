//! End-to-end scenarios for the validation and forecasting pipeline.

use autoforecast::core::Series;
use autoforecast::engine::forecast;
use autoforecast::models::{select_model, ModelKind};
use autoforecast::pipeline::{run, PipelineConfig};
use autoforecast::validation::{validate, ValidationOptions};
use autoforecast::Error;

fn series(values: Vec<f64>) -> Series {
    Series::from_values(values)
}

#[test]
fn trending_ramp_selects_arima_with_intervals() {
    let ramp = series((1..=12).map(|i| i as f64).collect());
    let report = validate(&ramp, &ValidationOptions::default());

    assert!(report.is_valid);
    assert!(report.has_trend());
    assert!(!report.is_stationary());

    let model = select_model(&report);
    assert_eq!(model, ModelKind::ARIMA);

    let outcome = forecast(&ramp, model, 3).unwrap();
    assert_eq!(outcome.predictions.len(), 3);
    assert_eq!(outcome.intervals.as_ref().map(|iv| iv.len()), Some(3));
}

#[test]
fn seasonal_series_selects_holt_winters() {
    let values: Vec<f64> = (0..30)
        .map(|i| 10.0 + (2.0 * std::f64::consts::PI * i as f64 / 4.0).sin() * 5.0)
        .collect();
    let seasonal = series(values);
    let report = validate(&seasonal, &ValidationOptions::default());

    let seasonality = report
        .seasonality
        .as_ref()
        .and_then(|outcome| outcome.completed())
        .expect("seasonality scan should complete");
    assert!(seasonality.has_seasonality);
    // The scan reports the period or a divisor of it; for a period-4 wave
    // the half-cycle at lag 2 also lights up.
    assert!(seasonality.periods.iter().any(|&p| p == 4 || p == 2));

    assert_eq!(select_model(&report), ModelKind::HoltWinters);
}

#[test]
fn induced_failure_returns_constant_fallback() {
    // Train shrinks to two equal points: every proper model needs more, so
    // the forecast is their mean repeated.
    let outcome = forecast(&series(vec![4.0, 4.0, 5.0]), ModelKind::ARIMA, 3).unwrap();
    assert_eq!(outcome.predictions, vec![4.0, 4.0, 4.0]);
    assert!(outcome.intervals.is_none());
}

#[test]
fn insufficient_data_is_the_only_pipeline_failure() {
    let short = series(vec![1.0, 2.0, 3.0]);
    let result = run(&short, &PipelineConfig::default());
    assert!(matches!(
        result,
        Err(Error::InsufficientData { needed: 10, got: 3 })
    ));
}

#[test]
fn pipeline_produces_a_complete_bundle() {
    let values: Vec<f64> = (0..50)
        .map(|i| 20.0 + (2.0 * std::f64::consts::PI * i as f64 / 4.0).sin() * 3.0)
        .collect();
    let result = run(&series(values), &PipelineConfig::default()).unwrap();

    assert_eq!(result.model, ModelKind::HoltWinters);
    assert_eq!(result.outcome.predictions.len(), 10);
    assert!(result.outcome.metrics.is_some());
    // Actual + forecast traces at minimum.
    assert!(result.chart.traces.len() >= 2);
}

#[test]
fn forecast_report_and_chart_are_serializable() {
    let values: Vec<f64> = (0..40).map(|i| ((i * i) as f64).sin()).collect();
    let result = run(&series(values), &PipelineConfig::default()).unwrap();

    let report_json = serde_json::to_string(&result.report).unwrap();
    assert!(report_json.contains("\"is_valid\":true"));

    let outcome_json = serde_json::to_string(&result.outcome).unwrap();
    assert!(outcome_json.contains("\"predictions\""));

    let chart_json = serde_json::to_string(&result.chart).unwrap();
    assert!(chart_json.contains("\"traces\""));
}

#[test]
fn hints_bypass_selection_and_default_horizon() {
    let values: Vec<f64> = (0..40).map(|i| ((i * i) as f64).sin()).collect();
    let cfg = PipelineConfig {
        model: Some(ModelKind::SimpleExponentialSmoothing),
        horizon: 6,
        ..PipelineConfig::default()
    };
    let result = run(&series(values), &cfg).unwrap();

    assert_eq!(result.model, ModelKind::SimpleExponentialSmoothing);
    assert_eq!(result.outcome.horizon(), 6);
    assert!(result.outcome.intervals.is_none());
}

#[test]
fn validation_only_options_still_forecast() {
    // With every check disabled the report carries no findings and the
    // selector defaults to simple smoothing.
    let values: Vec<f64> = (0..30).map(|i| i as f64 * 2.0).collect();
    let cfg = PipelineConfig {
        options: ValidationOptions {
            check_stationarity: false,
            check_seasonality: false,
            check_trend: false,
        },
        ..PipelineConfig::default()
    };
    let result = run(&series(values), &cfg).unwrap();

    assert!(!result.differenced);
    assert_eq!(result.model, ModelKind::SimpleExponentialSmoothing);
    assert_eq!(result.outcome.predictions.len(), 10);
}
