//! Series error types

use thiserror::Error;

/// Errors that can occur when constructing or querying a time series.
#[derive(Error, Debug)]
pub enum SeriesError {
    /// Operation requires at least one point
    #[error("time series is empty")]
    EmptySeries,

    /// Zip construction received sequences of different lengths
    #[error("length mismatch: {timestamps} timestamps vs {values} values")]
    LengthMismatch { timestamps: usize, values: usize },

    /// Operation requires more points than the series holds
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}
