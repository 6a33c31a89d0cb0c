//! Paired series produced by joins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{DataPoint, TimeSeries};

/// One matched (or default-filled) timestamp from two joined series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedPoint {
    pub timestamp: DateTime<Utc>,
    pub left_value: f64,
    pub right_value: f64,
}

/// The output of a join: one [`PairedPoint`] per aligned timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    points: Vec<PairedPoint>,
}

impl AlignedSeries {
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn add_point(&mut self, pp: PairedPoint) {
        self.points.push(pp);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn as_slice(&self) -> &[PairedPoint] {
        &self.points
    }

    /// Defensive copy of the underlying pairs.
    pub fn paired_points(&self) -> Vec<PairedPoint> {
        self.points.clone()
    }

    /// Reduce each (left, right) pair to a single value, producing a
    /// plain series on the same timestamps.
    pub fn combine<F>(&self, f: F) -> TimeSeries
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut out = TimeSeries::empty();
        for pp in &self.points {
            out.add_point(DataPoint {
                timestamp: pp.timestamp,
                value: f(pp.left_value, pp.right_value),
            });
        }
        out
    }
}
