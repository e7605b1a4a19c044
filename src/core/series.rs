//! Series value object.

use serde::{Deserialize, Serialize};

/// An ordered sequence of finite numeric observations.
///
/// The index is purely positional; no calendar semantics are attached.
/// Construction drops non-finite values (NaN and infinities), mirroring the
/// cleaning contract of the tabular loader that feeds the pipeline, and
/// remembers how many observations were removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    values: Vec<f64>,
    dropped: usize,
}

impl Series {
    /// Build a series from raw observations, dropping non-finite values.
    pub fn from_values<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut dropped = 0;
        let values: Vec<f64> = raw
            .into_iter()
            .filter(|v| {
                if v.is_finite() {
                    true
                } else {
                    dropped += 1;
                    false
                }
            })
            .collect();
        Self { values, dropped }
    }

    /// The cleaned observations in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of cleaned observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no observations survived cleaning.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of non-finite observations removed during construction.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl From<Vec<f64>> for Series {
    fn from(raw: Vec<f64>) -> Self {
        Self::from_values(raw)
    }
}
