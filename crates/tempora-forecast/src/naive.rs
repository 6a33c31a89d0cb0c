//! Last-value-carried-forward forecasting.

use series_spi::{DataPoint, TimeSeries};

/// Naive forecast: repeat the last observed value.
#[derive(Debug, Clone)]
pub struct NaiveForecaster {
    horizon: usize,
}

impl NaiveForecaster {
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }

    /// Forecast `horizon` future points, all carrying the last observed
    /// value.
    ///
    /// Returns an empty series (rather than an error) when the input has
    /// fewer than two points or the horizon is zero: one point is not
    /// enough to establish the forecast spacing.
    pub fn forecast(&self, ts: &TimeSeries) -> TimeSeries {
        if ts.len() < 2 || self.horizon == 0 {
            return TimeSeries::empty();
        }

        let points = ts.as_slice();
        let interval = points[1].timestamp - points[0].timestamp;
        let last = points[points.len() - 1];

        let mut out = TimeSeries::empty();
        let mut t = last.timestamp;
        for _ in 0..self.horizon {
            t += interval;
            out.add_point(DataPoint {
                timestamp: t,
                value: last.value,
            });
        }
        out
    }
}
