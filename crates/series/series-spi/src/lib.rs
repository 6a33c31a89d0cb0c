//! Time Series Service Provider Interface
//!
//! Defines the shared data model (points, series, aligned series) and the
//! error types used across the tempora workspace.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{Result, SeriesError};
pub use model::{AlignedSeries, DataPoint, MeanAndVariance, PairedPoint, TimeSeries};
