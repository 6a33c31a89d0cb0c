//! Synthetic series generators, mostly for examples and tests.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use series_spi::{DataPoint, TimeSeries};

/// A regular grid of `count` timestamps starting at `start`.
pub fn make_series_index(
    start: DateTime<Utc>,
    interval: Duration,
    count: usize,
) -> Vec<DateTime<Utc>> {
    (0..count).map(|i| start + interval * i as i32).collect()
}

/// A series holding the same value at every index timestamp.
pub fn constant(index: &[DateTime<Utc>], value: f64) -> TimeSeries {
    let mut ts = TimeSeries::empty();
    for &timestamp in index {
        ts.add_point(DataPoint { timestamp, value });
    }
    ts
}

/// A random walk over the index: each value steps ±1.0 from the
/// previous one, starting at `start_value`.
pub fn random_walk(index: &[DateTime<Utc>], start_value: f64) -> TimeSeries {
    let mut rng = rand::rng();
    let mut ts = TimeSeries::empty();
    let mut next = start_value;
    for &timestamp in index {
        ts.add_point(DataPoint {
            timestamp,
            value: next,
        });
        next += if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    }
    ts
}

/// Tile the pattern's values over `[start, end)` at the pattern's own
/// resolution, wrapping around as needed.
///
/// A pattern whose resolution cannot be computed (fewer than two points)
/// is returned unchanged.
pub fn repeat(pattern: &TimeSeries, start: DateTime<Utc>, end: DateTime<Utc>) -> TimeSeries {
    if pattern.is_empty() {
        return TimeSeries::empty();
    }
    let Ok(resolution) = pattern.resolution() else {
        return pattern.clone();
    };

    let values = pattern.values();
    let mut ts = TimeSeries::empty();
    let mut now = start;
    let mut i = 0;
    while now < end {
        if i == values.len() {
            i = 0;
        }
        ts.add_point(DataPoint {
            timestamp: now,
            value: values[i],
        });
        now += resolution;
        i += 1;
    }
    ts
}
