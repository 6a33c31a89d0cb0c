//! Ordered sequence of timestamped values.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};
use crate::model::{DataPoint, MeanAndVariance};

/// An ordered, in-memory time series.
///
/// All alignment and resampling algorithms assume points are in
/// non-decreasing timestamp order. Construction helpers preserve order
/// when fed sorted input; the library never re-sorts on mutation, so
/// callers must append points chronologically.
///
/// Every transformation returns a new `TimeSeries`; the only mutation is
/// the explicit [`TimeSeries::add_point`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<DataPoint>,
}

impl TimeSeries {
    /// An empty series.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series from a slice of points (copied).
    pub fn from_data_points(points: &[DataPoint]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Pair up timestamps and values into a series.
    ///
    /// Fails with [`SeriesError::LengthMismatch`] when the slices differ
    /// in length.
    pub fn zip(timestamps: &[DateTime<Utc>], values: &[f64]) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        let points = timestamps
            .iter()
            .zip(values)
            .map(|(&timestamp, &value)| DataPoint { timestamp, value })
            .collect();
        Ok(Self { points })
    }

    /// Split the series into separate timestamp and value vectors.
    pub fn unzip(&self) -> (Vec<DateTime<Utc>>, Vec<f64>) {
        (self.timestamps(), self.values())
    }

    /// Append a point. The caller is responsible for chronological order.
    pub fn add_point(&mut self, dp: DataPoint) {
        self.points.push(dp);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Borrow the underlying points.
    pub fn as_slice(&self) -> &[DataPoint] {
        &self.points
    }

    /// Defensive copy of the underlying points.
    pub fn data_points(&self) -> Vec<DataPoint> {
        self.points.clone()
    }

    /// The values of all points, in series order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|dp| dp.value).collect()
    }

    /// All timestamps, in series order.
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|dp| dp.timestamp).collect()
    }

    /// The first point in the series.
    pub fn head(&self) -> Result<DataPoint> {
        self.points.first().copied().ok_or(SeriesError::EmptySeries)
    }

    /// The last point in the series.
    pub fn last(&self) -> Result<DataPoint> {
        self.points.last().copied().ok_or(SeriesError::EmptySeries)
    }

    /// The series without its first point.
    pub fn tail(&self) -> TimeSeries {
        if self.is_empty() {
            return TimeSeries::empty();
        }
        TimeSeries::from_data_points(&self.points[1..])
    }

    /// The most frequent interval between consecutive points.
    ///
    /// Ties are broken toward the smaller interval.
    pub fn resolution(&self) -> Result<Duration> {
        if self.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if self.len() == 1 {
            return Err(SeriesError::InsufficientPoints {
                required: 2,
                actual: 1,
            });
        }

        let mut counts: HashMap<i64, usize> = HashMap::new();
        for pair in self.points.windows(2) {
            let gap = pair[1].timestamp - pair[0].timestamp;
            let ns = gap.num_nanoseconds().unwrap_or(i64::MAX);
            *counts.entry(ns).or_insert(0) += 1;
        }

        let mut mode_ns = 0i64;
        let mut mode_count = 0usize;
        for (&ns, &count) in &counts {
            if count > mode_count || (count == mode_count && ns < mode_ns) {
                mode_count = count;
                mode_ns = ns;
            }
        }
        Ok(Duration::nanoseconds(mode_ns))
    }

    /// Points within `[start, end)`.
    pub fn slice(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> TimeSeries {
        self.filter(|dp| dp.timestamp >= start && dp.timestamp < end)
    }

    /// Map a function over whole points.
    pub fn map<F>(&self, f: F) -> TimeSeries
    where
        F: Fn(DataPoint) -> DataPoint,
    {
        TimeSeries {
            points: self.points.iter().map(|&dp| f(dp)).collect(),
        }
    }

    /// Map a function over values, keeping timestamps.
    pub fn map_values<F>(&self, f: F) -> TimeSeries
    where
        F: Fn(f64) -> f64,
    {
        self.map(|dp| DataPoint {
            timestamp: dp.timestamp,
            value: f(dp.value),
        })
    }

    /// Keep only points satisfying the predicate.
    pub fn filter<F>(&self, pred: F) -> TimeSeries
    where
        F: Fn(&DataPoint) -> bool,
    {
        TimeSeries {
            points: self.points.iter().filter(|dp| pred(dp)).copied().collect(),
        }
    }

    /// Group points by a timestamp key function and aggregate each group.
    ///
    /// `g` maps each timestamp to its group key (e.g. truncate to the
    /// hour); `f` reduces a group's points to one value. Groups appear in
    /// first-seen order, stamped with their key.
    pub fn group_by_time<G, F>(&self, g: G, f: F) -> TimeSeries
    where
        G: Fn(DateTime<Utc>) -> DateTime<Utc>,
        F: Fn(&[DataPoint]) -> f64,
    {
        if self.is_empty() {
            return TimeSeries::empty();
        }

        let mut groups: Vec<(DateTime<Utc>, Vec<DataPoint>)> = Vec::new();
        for &dp in &self.points {
            let key = g(dp.timestamp);
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, members)) => members.push(dp),
                None => groups.push((key, vec![dp])),
            }
        }

        let points = groups
            .into_iter()
            .map(|(key, members)| DataPoint {
                timestamp: key,
                value: f(&members),
            })
            .collect();
        TimeSeries { points }
    }

    /// Sum of all values; 0.0 for an empty series.
    pub fn sum(&self) -> f64 {
        self.points.iter().map(|dp| dp.value).sum()
    }

    /// The point with the smallest value.
    pub fn min(&self) -> Result<DataPoint> {
        let mut best = self.head()?;
        for &dp in &self.points {
            if dp.value < best.value {
                best = dp;
            }
        }
        Ok(best)
    }

    /// The point with the largest value.
    pub fn max(&self) -> Result<DataPoint> {
        let mut best = self.head()?;
        for &dp in &self.points {
            if dp.value > best.value {
                best = dp;
            }
        }
        Ok(best)
    }

    /// The p-th percentile of the values (linear interpolation between
    /// closest ranks, position `p * (n + 1) / 100` clamped to the ends).
    pub fn percentile(&self, p: usize) -> Result<f64> {
        if self.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        let mut vs = self.values();
        vs.sort_by(|a, b| a.total_cmp(b));

        let n = vs.len();
        let pos = (p * (n + 1)) as f64 / 100.0;
        if pos < 1.0 {
            Ok(vs[0])
        } else if pos >= n as f64 {
            Ok(vs[n - 1])
        } else {
            let rank = pos.floor() as usize;
            let lower = vs[rank - 1];
            let upper = vs[rank];
            let d = pos - pos.floor();
            Ok(lower + d * (upper - lower))
        }
    }

    /// The median value.
    pub fn median(&self) -> Result<f64> {
        self.percentile(50)
    }

    /// Mean and variance of the values.
    ///
    /// Sample variance divides by n - 1 (Bessel's correction), guarded
    /// for single-point series.
    pub fn mean_and_variance(&self) -> Result<MeanAndVariance> {
        if self.is_empty() {
            return Err(SeriesError::EmptySeries);
        }

        let n = self.len() as f64;
        let mean = self.sum() / n;
        let sum_sq: f64 = self
            .points
            .iter()
            .map(|dp| {
                let diff = dp.value - mean;
                diff * diff
            })
            .sum();
        let population_variance = sum_sq / n;
        let sample_variance = if self.len() > 1 {
            sum_sq / (n - 1.0)
        } else {
            sum_sq
        };
        Ok(MeanAndVariance {
            mean,
            sample_variance,
            population_variance,
        })
    }
}
