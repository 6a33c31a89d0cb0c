//! Regridding onto a fixed-interval time basis.

use chrono::{DateTime, Duration, Utc};
use series_api::ResampleConfig;
use series_spi::{DataPoint, TimeSeries};

fn duration_secs(d: Duration) -> f64 {
    match d.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e9,
        None => d.num_milliseconds() as f64 / 1e3,
    }
}

/// Linear interpolation between two bracketing points at a grid stamp.
fn linear(prev: &DataPoint, next: &DataPoint, at: DateTime<Utc>) -> f64 {
    let total = duration_secs(next.timestamp - prev.timestamp);
    let elapsed = duration_secs(at - prev.timestamp);
    prev.value + (next.value - prev.value) * (elapsed / total)
}

/// Moves a series onto a fixed-interval grid anchored at its first point.
pub trait SeriesResample {
    /// Walk the grid `t0, t0+delta, …` and emit one point per grid stamp.
    ///
    /// Grid stamps that hit an original point emit that point's value
    /// unchanged; stamps strictly between two original points emit
    /// `combine(prev, next, stamp)`. Gaps wider than `delta` produce one
    /// combined point per grid stamp. The walk stops strictly before the
    /// last original timestamp; the last point itself is emitted only
    /// when the next grid stamp lands exactly on it.
    ///
    /// `delta <= 0` and series with fewer than two points return a copy.
    fn resample<F>(&self, delta: Duration, combine: F) -> TimeSeries
    where
        F: FnMut(&DataPoint, &DataPoint, DateTime<Utc>) -> f64;

    /// Resample with every in-gap grid stamp filled by a constant.
    fn resample_with_default(&self, delta: Duration, default: f64) -> TimeSeries;

    /// Resample with elapsed-fraction linear interpolation.
    fn interpolate(&self, delta: Duration) -> TimeSeries;

    /// [`SeriesResample::interpolate`] driven by a [`ResampleConfig`].
    fn interpolate_with_config(&self, config: &ResampleConfig) -> TimeSeries {
        self.interpolate(config.delta())
    }

    /// Redistribute each point's value evenly over the sub-intervals of
    /// size `delta` spanning the gap to the next point (flow splitting).
    ///
    /// For each consecutive pair the gap is divided into
    /// `n = round(gap / delta)` sub-steps (at least one for a non-zero
    /// gap), each carrying `value / n` and stamped at the sub-step end.
    /// The first point is never re-emitted and the final point's own
    /// value is fully redistributed into nothing, so a series with fewer
    /// than two points yields an empty result. `delta <= 0` returns a
    /// copy.
    fn step(&self, delta: Duration) -> TimeSeries;
}

impl SeriesResample for TimeSeries {
    fn resample<F>(&self, delta: Duration, mut combine: F) -> TimeSeries
    where
        F: FnMut(&DataPoint, &DataPoint, DateTime<Utc>) -> f64,
    {
        if delta <= Duration::zero() || self.len() < 2 {
            return self.clone();
        }

        let points = self.as_slice();
        let last = points[points.len() - 1];
        let mut out = TimeSeries::empty();
        let mut t = points[0].timestamp;
        let mut i = 0;

        while t < last.timestamp {
            // advance to the latest original point at or before t
            while i + 1 < points.len() && points[i + 1].timestamp <= t {
                i += 1;
            }
            if points[i].timestamp == t {
                out.add_point(points[i]);
            } else {
                let value = combine(&points[i], &points[i + 1], t);
                out.add_point(DataPoint::new(t, value));
            }
            t += delta;
        }

        if t == last.timestamp {
            out.add_point(last);
        }
        out
    }

    fn resample_with_default(&self, delta: Duration, default: f64) -> TimeSeries {
        self.resample(delta, |_, _, _| default)
    }

    fn interpolate(&self, delta: Duration) -> TimeSeries {
        self.resample(delta, linear)
    }

    fn step(&self, delta: Duration) -> TimeSeries {
        if delta <= Duration::zero() {
            return self.clone();
        }

        let points = self.as_slice();
        let mut out = TimeSeries::empty();
        for pair in points.windows(2) {
            let gap = pair[1].timestamp - pair[0].timestamp;
            if gap <= Duration::zero() {
                continue;
            }
            let mut n = (duration_secs(gap) / duration_secs(delta)).round() as i64;
            if n < 1 {
                n = 1;
            }
            let share = pair[0].value / n as f64;
            let mut t = pair[0].timestamp;
            for _ in 0..n {
                t += delta;
                out.add_point(DataPoint::new(t, share));
            }
        }
        out
    }
}
