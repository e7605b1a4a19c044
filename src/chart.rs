//! Plot payload assembly for forecast results.
//!
//! The payload is a transport-agnostic description of the traces a renderer
//! needs: the observed series, the forecast continuation, and (when
//! intervals exist) a closed confidence band. It serializes directly, so
//! the embedding service can hand it to its charting layer verbatim.

use crate::core::Interval;
use serde::{Deserialize, Serialize};

/// Role of a trace within the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    Actual,
    Forecast,
    ConfidenceBand,
}

/// One plottable trace: positional x values with matching y values.
///
/// For a confidence band the points describe a closed polygon: upper bounds
/// walked forward, then lower bounds walked back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    pub kind: TraceKind,
    pub x: Vec<usize>,
    pub y: Vec<f64>,
}

/// A complete chart: title plus two or three traces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub title: String,
    pub traces: Vec<Trace>,
}

impl ChartPayload {
    /// Find a trace by kind.
    pub fn trace(&self, kind: TraceKind) -> Option<&Trace> {
        self.traces.iter().find(|t| t.kind == kind)
    }
}

/// Package actual observations, forecasts, and optional confidence
/// intervals into a chart payload.
///
/// Actual values sit at indices `[0, n)`; forecasts continue at
/// `[n, n + h)`. Pure and side-effect free.
pub fn assemble(
    actual: &[f64],
    predictions: &[f64],
    intervals: Option<&[Interval]>,
    title: &str,
) -> ChartPayload {
    let n = actual.len();
    let forecast_x: Vec<usize> = (n..n + predictions.len()).collect();

    let mut traces = vec![
        Trace {
            name: "actual".into(),
            kind: TraceKind::Actual,
            x: (0..n).collect(),
            y: actual.to_vec(),
        },
        Trace {
            name: "forecast".into(),
            kind: TraceKind::Forecast,
            x: forecast_x.clone(),
            y: predictions.to_vec(),
        },
    ];

    if let Some(intervals) = intervals {
        let mut x = forecast_x.clone();
        x.extend(forecast_x.iter().rev());
        let mut y: Vec<f64> = intervals.iter().map(|iv| iv.upper).collect();
        y.extend(intervals.iter().rev().map(|iv| iv.lower));
        traces.push(Trace {
            name: "confidence interval".into(),
            kind: TraceKind::ConfidenceBand,
            x,
            y,
        });
    }

    ChartPayload {
        title: title.to_string(),
        traces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actual_and_forecast_indices_are_contiguous() {
        let payload = assemble(&[1.0, 2.0, 3.0], &[4.0, 5.0], None, "test");
        assert_eq!(payload.traces.len(), 2);

        let actual = payload.trace(TraceKind::Actual).unwrap();
        assert_eq!(actual.x, vec![0, 1, 2]);
        assert_eq!(actual.y, vec![1.0, 2.0, 3.0]);

        let forecast = payload.trace(TraceKind::Forecast).unwrap();
        assert_eq!(forecast.x, vec![3, 4]);
        assert_eq!(forecast.y, vec![4.0, 5.0]);
    }

    #[test]
    fn confidence_band_is_a_closed_polygon() {
        let intervals = vec![Interval::new(3.5, 4.5), Interval::new(4.0, 6.0)];
        let payload = assemble(&[1.0, 2.0], &[4.0, 5.0], Some(&intervals), "test");

        let band = payload.trace(TraceKind::ConfidenceBand).unwrap();
        // Upper bounds forward, lower bounds reversed.
        assert_eq!(band.x, vec![2, 3, 3, 2]);
        assert_eq!(band.y, vec![4.5, 6.0, 4.0, 3.5]);
    }

    #[test]
    fn no_band_without_intervals() {
        let payload = assemble(&[1.0], &[2.0], None, "test");
        assert!(payload.trace(TraceKind::ConfidenceBand).is_none());
    }

    #[test]
    fn title_is_carried_through() {
        let payload = assemble(&[], &[], None, "sales forecast");
        assert_eq!(payload.title, "sales forecast");
    }

    #[test]
    fn payload_serializes_to_json() {
        let intervals = vec![Interval::new(0.0, 2.0)];
        let payload = assemble(&[1.0], &[1.5], Some(&intervals), "t");
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"confidence_band\""));
        assert!(json.contains("\"actual\""));
        assert!(json.contains("\"forecast\""));
    }
}
