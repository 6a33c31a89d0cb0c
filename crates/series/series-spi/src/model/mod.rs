//! Data model for time series

mod aligned_series;
mod data_point;
mod mean_and_variance;
mod time_series;

pub use aligned_series::{AlignedSeries, PairedPoint};
pub use data_point::DataPoint;
pub use mean_and_variance::MeanAndVariance;
pub use time_series::TimeSeries;
