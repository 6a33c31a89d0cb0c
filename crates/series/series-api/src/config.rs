//! Configuration value objects.
//!
//! Durations are carried as whole seconds so the configs stay plain
//! serde structs; accessors convert to `chrono::Duration`.

use chrono::Duration;
use serde::{Deserialize, Serialize};

// ============================================================================
// Resampling
// ============================================================================

/// Fixed-interval resampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResampleConfig {
    pub delta_secs: i64,
}

impl ResampleConfig {
    pub fn new(delta_secs: i64) -> Self {
        Self { delta_secs }
    }

    pub fn delta(&self) -> Duration {
        Duration::seconds(self.delta_secs)
    }
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self { delta_secs: 60 }
    }
}

// ============================================================================
// Windows
// ============================================================================

/// Moving average window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAverageConfig {
    pub window_secs: i64,
}

impl MovingAverageConfig {
    pub fn new(window_secs: i64) -> Self {
        Self { window_secs }
    }

    pub fn window(&self) -> Duration {
        Duration::seconds(self.window_secs)
    }
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self { window_secs: 3600 }
    }
}

// ============================================================================
// Forecasting
// ============================================================================

/// Simple exponential smoothing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Smoothing factor in [0, 1].
    pub alpha: f64,
    /// Number of future points to forecast.
    pub horizon: usize,
}

impl SmoothingConfig {
    pub fn new(alpha: f64, horizon: usize) -> Self {
        Self { alpha, horizon }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            horizon: 1,
        }
    }
}

// ============================================================================
// Anomaly Detection
// ============================================================================

/// Z-score anomaly threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZScoreConfig {
    pub threshold: f64,
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self { threshold: 2.0 }
    }
}

/// Robust (median/MAD) z-score anomaly threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobustZScoreConfig {
    pub threshold: f64,
}

impl RobustZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for RobustZScoreConfig {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

/// Spike (positive jump) detection threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpikeConfig {
    pub threshold: f64,
}

impl SpikeConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for SpikeConfig {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

/// Drop (negative jump) detection threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropConfig {
    pub threshold: f64,
}

impl DropConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for DropConfig {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

/// Flatline (stuck sensor) detection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatlineConfig {
    /// Maximum |delta| between neighbours still considered flat.
    pub tolerance: f64,
    /// Minimum run length to flag.
    pub min_run: usize,
}

impl FlatlineConfig {
    pub fn new(tolerance: f64, min_run: usize) -> Self {
        Self { tolerance, min_run }
    }
}

impl Default for FlatlineConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            min_run: 3,
        }
    }
}
