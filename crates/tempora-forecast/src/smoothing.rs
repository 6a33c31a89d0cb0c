//! Simple exponential smoothing.

use series_api::SmoothingConfig;
use series_spi::{DataPoint, Result, SeriesError, TimeSeries};

/// Simple exponential smoothing (SES) with a flat forecast.
///
/// The level is seeded with the first observation and updated as
/// `level = alpha * x + (1 - alpha) * level`; every forecast point
/// carries the final level.
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    alpha: f64,
    horizon: usize,
}

impl SimpleExponentialSmoothing {
    pub fn new(alpha: f64, horizon: usize) -> Self {
        Self { alpha, horizon }
    }

    pub fn from_config(config: SmoothingConfig) -> Self {
        Self {
            alpha: config.alpha,
            horizon: config.horizon,
        }
    }

    pub fn forecast(&self, ts: &TimeSeries) -> Result<TimeSeries> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(SeriesError::InvalidParameter {
                name: "alpha".to_string(),
                reason: "must be between 0 and 1".to_string(),
            });
        }
        if ts.len() < 2 || self.horizon == 0 {
            return Ok(TimeSeries::empty());
        }

        let points = ts.as_slice();
        let mut level = points[0].value;
        for dp in &points[1..] {
            level = self.alpha * dp.value + (1.0 - self.alpha) * level;
        }

        let interval = points[1].timestamp - points[0].timestamp;
        let last = points[points.len() - 1];
        let mut out = TimeSeries::empty();
        let mut t = last.timestamp;
        for _ in 0..self.horizon {
            t += interval;
            out.add_point(DataPoint {
                timestamp: t,
                value: level,
            });
        }
        Ok(out)
    }
}
