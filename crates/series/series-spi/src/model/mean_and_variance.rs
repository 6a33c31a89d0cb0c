//! Mean and variance value object.

use serde::{Deserialize, Serialize};

/// Mean together with sample and population variance.
///
/// Sample variance divides by n - 1 to avoid underestimating the
/// standard deviation on small samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanAndVariance {
    pub mean: f64,
    pub sample_variance: f64,
    pub population_variance: f64,
}
