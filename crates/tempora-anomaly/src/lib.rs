//! Anomaly scoring and detection.
//!
//! Scores normalize a series (z-score, robust z-score); detectors turn a
//! series into 0/1 anomaly flags on the same timestamps.

mod detectors;
mod score;

pub use detectors::{
    DropDetector, FlatlineDetector, RobustZScoreDetector, SpikeDetector, ZScoreDetector,
};
pub use score::{robust_z_score, z_score};
