//! Error types for the autoforecast library.

use thiserror::Error;

/// Result type alias for validation and forecasting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or forecasting a series.
///
/// Only the input-shaped variants (`EmptyData`, `InsufficientData`,
/// `InvalidParameter`) cross the pipeline boundary; model-level failures are
/// absorbed by the fallback forecast or captured inside the validation
/// report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Not enough observations for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Numerical failure inside a statistical routine.
    #[error("computation error: {0}")]
    ComputationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(Error::EmptyData.to_string(), "empty input data");
        assert_eq!(
            Error::InsufficientData { needed: 10, got: 4 }.to_string(),
            "insufficient data: need at least 10, got 4"
        );
        assert_eq!(
            Error::InvalidParameter("horizon must be at least 1".into()).to_string(),
            "invalid parameter: horizon must be at least 1"
        );
        assert_eq!(
            Error::FitRequired.to_string(),
            "model must be fitted before prediction"
        );
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err = Error::ComputationError("zero variance".into());
        assert_eq!(err.clone(), err);
    }
}
