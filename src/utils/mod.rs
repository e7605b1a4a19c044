//! Shared numeric utilities.

pub mod optimization;
pub mod stats;

pub use optimization::{nelder_mead, NelderMeadConfig, NelderMeadResult};
pub use stats::{autocorrelation, mean, normal_quantile, std_dev, variance};
