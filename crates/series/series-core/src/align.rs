//! Two-series alignment: chronological merge and timestamp joins.

use series_spi::{AlignedSeries, PairedPoint, TimeSeries};

/// Combines two series by timestamp.
///
/// All methods assume both inputs are in non-decreasing timestamp order
/// and return new series; neither input is mutated.
pub trait SeriesAlign {
    /// Merge two series into one chronologically ordered series.
    ///
    /// On equal timestamps the left point is kept and the right point at
    /// that timestamp is dropped. Merging with an empty series yields a
    /// copy of the other.
    fn merge(&self, other: &TimeSeries) -> TimeSeries;

    /// Inner join on exact timestamps.
    ///
    /// Every left point is matched against every right point, so a right
    /// series with duplicate timestamps produces one pair per duplicate.
    /// Either input empty yields an empty result.
    fn join(&self, other: &TimeSeries) -> AlignedSeries;

    /// Left join on exact timestamps.
    ///
    /// Every left point is emitted; the first matching right point
    /// supplies the right value, otherwise `default` is used.
    fn join_left(&self, other: &TimeSeries, default: f64) -> AlignedSeries;

    /// Outer join on exact timestamps.
    ///
    /// First pass emits all left points, matched or filled with
    /// `default_right`; second pass emits right points with no left
    /// match, filled with `default_left`. The output is therefore
    /// left-driven order followed by unmatched right points, NOT globally
    /// time-sorted.
    fn join_outer(&self, other: &TimeSeries, default_left: f64, default_right: f64)
    -> AlignedSeries;
}

impl SeriesAlign for TimeSeries {
    fn merge(&self, other: &TimeSeries) -> TimeSeries {
        let left = self.as_slice();
        let right = other.as_slice();
        let mut merged = TimeSeries::empty();
        let mut li = 0;
        let mut ri = 0;

        while li < left.len() && ri < right.len() {
            if left[li].timestamp < right[ri].timestamp {
                merged.add_point(left[li]);
                li += 1;
            } else if left[li].timestamp == right[ri].timestamp {
                merged.add_point(left[li]);
                li += 1;
                ri += 1;
            } else {
                merged.add_point(right[ri]);
                ri += 1;
            }
        }

        for &dp in &left[li..] {
            merged.add_point(dp);
        }
        for &dp in &right[ri..] {
            merged.add_point(dp);
        }
        merged
    }

    fn join(&self, other: &TimeSeries) -> AlignedSeries {
        if self.is_empty() || other.is_empty() {
            return AlignedSeries::empty();
        }

        let mut res = AlignedSeries::empty();
        for left in self.as_slice() {
            for right in other.as_slice() {
                if left.timestamp == right.timestamp {
                    res.add_point(PairedPoint {
                        timestamp: left.timestamp,
                        left_value: left.value,
                        right_value: right.value,
                    });
                }
            }
        }
        res
    }

    fn join_left(&self, other: &TimeSeries, default: f64) -> AlignedSeries {
        let mut res = AlignedSeries::empty();
        for left in self.as_slice() {
            let right_value = other
                .as_slice()
                .iter()
                .find(|right| right.timestamp == left.timestamp)
                .map(|right| right.value)
                .unwrap_or(default);
            res.add_point(PairedPoint {
                timestamp: left.timestamp,
                left_value: left.value,
                right_value,
            });
        }
        res
    }

    fn join_outer(
        &self,
        other: &TimeSeries,
        default_left: f64,
        default_right: f64,
    ) -> AlignedSeries {
        let mut res = self.join_left(other, default_right);
        for right in other.as_slice() {
            let matched = self
                .as_slice()
                .iter()
                .any(|left| left.timestamp == right.timestamp);
            if !matched {
                res.add_point(PairedPoint {
                    timestamp: right.timestamp,
                    left_value: default_left,
                    right_value: right.value,
                });
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use series_spi::DataPoint;

    fn base() -> DateTime<Utc> {
        Utc.timestamp_opt(0, 0).unwrap()
    }

    fn series(points: &[(i64, f64)]) -> TimeSeries {
        let mut ts = TimeSeries::empty();
        for &(secs, value) in points {
            ts.add_point(DataPoint::new(base() + Duration::seconds(secs), value));
        }
        ts
    }

    #[test]
    fn test_merge_interleaves_chronologically() {
        // merge([(10:00,10),(11:00,20)], [(10:30,15),(12:00,25)])
        let a = series(&[(0, 10.0), (3600, 20.0)]);
        let b = series(&[(1800, 15.0), (7200, 25.0)]);

        let merged = a.merge(&b);
        assert_eq!(merged.values(), vec![10.0, 15.0, 20.0, 25.0]);
        assert_eq!(
            merged.timestamps(),
            vec![
                base(),
                base() + Duration::seconds(1800),
                base() + Duration::seconds(3600),
                base() + Duration::seconds(7200),
            ]
        );
    }

    #[test]
    fn test_merge_equal_timestamp_prefers_left() {
        let a = series(&[(0, 1.0), (10, 2.0)]);
        let b = series(&[(10, 99.0), (20, 3.0)]);
        let merged = a.merge(&b);
        assert_eq!(merged.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_merge_with_empty_is_copy() {
        let a = series(&[(0, 1.0), (10, 2.0)]);
        assert_eq!(a.merge(&TimeSeries::empty()), a);
        assert_eq!(TimeSeries::empty().merge(&a), a);
    }

    #[test]
    fn test_join_matches_exact_timestamps_only() {
        let a = series(&[(0, 1.0), (10, 2.0), (20, 3.0)]);
        let b = series(&[(10, 20.0), (30, 30.0)]);

        let joined = a.join(&b);
        assert_eq!(joined.len(), 1);
        let pp = joined.as_slice()[0];
        assert_eq!(pp.timestamp, base() + Duration::seconds(10));
        assert_eq!(pp.left_value, 2.0);
        assert_eq!(pp.right_value, 20.0);
    }

    #[test]
    fn test_join_disjoint_is_empty() {
        let a = series(&[(0, 1.0), (10, 2.0)]);
        let b = series(&[(5, 1.0), (15, 2.0)]);
        assert!(a.join(&b).is_empty());
    }

    #[test]
    fn test_join_either_empty_is_empty() {
        let a = series(&[(0, 1.0)]);
        assert!(a.join(&TimeSeries::empty()).is_empty());
        assert!(TimeSeries::empty().join(&a).is_empty());
    }

    #[test]
    fn test_join_duplicate_right_timestamps_multiply() {
        let a = series(&[(10, 1.0)]);
        let b = series(&[(10, 2.0), (10, 3.0)]);
        let joined = a.join(&b);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.as_slice()[0].right_value, 2.0);
        assert_eq!(joined.as_slice()[1].right_value, 3.0);
    }

    #[test]
    fn test_join_left_fills_default() {
        // join_left([(10:00,10),(11:00,20)], [(10:00,15)], default=0)
        let a = series(&[(0, 10.0), (3600, 20.0)]);
        let b = series(&[(0, 15.0)]);

        let joined = a.join_left(&b, 0.0);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.as_slice()[0].left_value, 10.0);
        assert_eq!(joined.as_slice()[0].right_value, 15.0);
        assert_eq!(joined.as_slice()[1].left_value, 20.0);
        assert_eq!(joined.as_slice()[1].right_value, 0.0);
    }

    #[test]
    fn test_join_left_first_match_wins() {
        let a = series(&[(10, 1.0)]);
        let b = series(&[(10, 2.0), (10, 3.0)]);
        let joined = a.join_left(&b, 0.0);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined.as_slice()[0].right_value, 2.0);
    }

    #[test]
    fn test_join_outer_disjoint_has_full_length() {
        let a = series(&[(0, 1.0), (20, 2.0)]);
        let b = series(&[(10, 3.0), (30, 4.0)]);

        let joined = a.join_outer(&b, -1.0, -2.0);
        assert_eq!(joined.len(), a.len() + b.len());

        // left-driven entries first, then unmatched right entries
        let pairs = joined.as_slice();
        assert_eq!(pairs[0].left_value, 1.0);
        assert_eq!(pairs[0].right_value, -2.0);
        assert_eq!(pairs[1].left_value, 2.0);
        assert_eq!(pairs[2].left_value, -1.0);
        assert_eq!(pairs[2].right_value, 3.0);
        assert_eq!(pairs[3].right_value, 4.0);
    }

    #[test]
    fn test_join_outer_matched_timestamps_emitted_once() {
        let a = series(&[(0, 1.0), (10, 2.0)]);
        let b = series(&[(10, 20.0)]);
        let joined = a.join_outer(&b, 0.0, 0.0);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.as_slice()[1].left_value, 2.0);
        assert_eq!(joined.as_slice()[1].right_value, 20.0);
    }
}
