//! Sensitivity of the hedge recommendation to its inputs

pub mod sensitivity;

pub use sensitivity::{coverage_sweep, horizon_sweep, volatility_sweep, SensitivityPoint};
