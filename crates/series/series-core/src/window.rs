//! Time-windowed aggregation over the half-open window `(t - w, t]`.

use chrono::Duration;
use series_api::MovingAverageConfig;
use series_spi::{DataPoint, TimeSeries};

/// Local aggregates over a trailing time window.
///
/// Both methods use the same half-open window `(t - window, t]`: the
/// point itself is included, a point exactly `window` in the past is not.
pub trait SeriesWindow {
    /// For every point, reduce the values of all points inside its
    /// window. One output point per input point, same timestamps.
    ///
    /// Re-filters the series per point, O(n²); fine for in-memory
    /// analysis sizes.
    fn rolling_window<F>(&self, window: Duration, reducer: F) -> TimeSeries
    where
        F: Fn(&[f64]) -> f64;

    /// Rolling mean in amortized O(n) via a sliding sum.
    ///
    /// Agrees with `rolling_window` plus a mean reducer on every input,
    /// duplicate timestamps included. `window <= 0` returns a copy.
    fn moving_average(&self, window: Duration) -> TimeSeries;

    /// [`SeriesWindow::moving_average`] driven by a [`MovingAverageConfig`].
    fn moving_average_with_config(&self, config: &MovingAverageConfig) -> TimeSeries {
        self.moving_average(config.window())
    }
}

impl SeriesWindow for TimeSeries {
    fn rolling_window<F>(&self, window: Duration, reducer: F) -> TimeSeries
    where
        F: Fn(&[f64]) -> f64,
    {
        self.map(|dp| {
            let in_window = self.filter(|other| {
                other.timestamp == dp.timestamp
                    || (other.timestamp < dp.timestamp
                        && other.timestamp > dp.timestamp - window)
            });
            DataPoint {
                timestamp: dp.timestamp,
                value: reducer(&in_window.values()),
            }
        })
    }

    fn moving_average(&self, window: Duration) -> TimeSeries {
        if window <= Duration::zero() {
            return self.clone();
        }

        let points = self.as_slice();
        let mut out = TimeSeries::empty();
        let mut sum = 0.0;
        let mut left = 0;
        let mut right = 0; // one past the last point included in the sum

        for dp in points {
            // take in every point up to and including dp's timestamp, so
            // duplicate-timestamp runs share one window
            while right < points.len() && points[right].timestamp <= dp.timestamp {
                sum += points[right].value;
                right += 1;
            }
            // evict points at or beyond the window boundary
            while left < right && dp.timestamp - points[left].timestamp >= window {
                sum -= points[left].value;
                left += 1;
            }
            out.add_point(DataPoint {
                timestamp: dp.timestamp,
                value: sum / (right - left) as f64,
            });
        }
        out
    }
}
