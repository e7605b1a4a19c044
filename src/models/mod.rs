//! Forecasting models and model selection.

mod traits;

pub mod arima;
pub mod exponential;
pub mod fallback;
pub mod selector;

pub use arima::ARIMA;
pub use exponential::{HoltWinters, TrendSmoothing};
pub use fallback::recent_mean_forecast;
pub use selector::{select_model, ModelKind};
pub use traits::Forecaster;
