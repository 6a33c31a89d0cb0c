//! Forecasting over tempora series.
//!
//! Both forecasters stamp future points at the series' first observed
//! gap, starting one interval past the last point. Forecasts are
//! returned on their own; merge with the input series to extend it.

mod naive;
mod smoothing;

pub use naive::NaiveForecaster;
pub use smoothing::SimpleExponentialSmoothing;
