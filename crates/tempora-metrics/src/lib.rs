//! Error metrics between two series.
//!
//! Series are compared over their inner join, so only timestamps present
//! in both inputs contribute.

use series_core::SeriesAlign;
use series_spi::{Result, SeriesError, TimeSeries};

/// Mean squared error over the matched timestamps of two series.
pub fn mse(a: &TimeSeries, b: &TimeSeries) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    let joined = a.join(b);
    if joined.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    let squared = joined.combine(|l, r| {
        let diff = l - r;
        diff * diff
    });
    Ok(squared.sum() / squared.len() as f64)
}

/// Root mean squared error over the matched timestamps of two series.
pub fn rmse(a: &TimeSeries, b: &TimeSeries) -> Result<f64> {
    Ok(mse(a, b)?.sqrt())
}

/// Median absolute error over the matched timestamps of two series.
///
/// Despite the conventional name, this is the *median* of the absolute
/// errors, not their mean, which makes it robust to a few gross
/// mismatches.
pub fn mae(a: &TimeSeries, b: &TimeSeries) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    let joined = a.join(b);
    if joined.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    joined.combine(|l, r| (l - r).abs()).median()
}

/// Median absolute deviation of a series around its own median.
pub fn mad(ts: &TimeSeries) -> Result<f64> {
    if ts.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    let median = ts.median()?;
    ts.map_values(|v| (v - median).abs()).median()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use series_spi::DataPoint;

    fn minutes(values: &[f64]) -> TimeSeries {
        let base: DateTime<Utc> = Utc.timestamp_opt(0, 0).unwrap();
        let mut ts = TimeSeries::empty();
        for (i, &v) in values.iter().enumerate() {
            ts.add_point(DataPoint::new(base + Duration::minutes(i as i64), v));
        }
        ts
    }

    #[test]
    fn test_mse_and_rmse() {
        let a = minutes(&[1.0, 2.0, 3.0]);
        let b = minutes(&[2.0, 2.0, 5.0]);
        // squared errors: 1, 0, 4
        assert!((mse(&a, &b).unwrap() - 5.0 / 3.0).abs() < 1e-9);
        assert!((rmse(&a, &b).unwrap() - (5.0f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_mse_identical_series_is_zero() {
        let a = minutes(&[1.0, 2.0, 3.0]);
        assert_eq!(mse(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_mae_is_median_of_absolute_errors() {
        let a = minutes(&[1.0, 2.0, 3.0, 4.0]);
        let b = minutes(&[2.0, 2.0, 6.0, 104.0]);
        // absolute errors: 1, 0, 3, 100 -> median 2
        assert!((mae(&a, &b).unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_reject_empty_inputs() {
        let a = minutes(&[1.0]);
        assert!(mse(&a, &TimeSeries::empty()).is_err());
        assert!(mae(&TimeSeries::empty(), &a).is_err());
    }

    #[test]
    fn test_metrics_reject_disjoint_timestamps() {
        let base: DateTime<Utc> = Utc.timestamp_opt(0, 0).unwrap();
        let a = minutes(&[1.0, 2.0]);
        let mut b = TimeSeries::empty();
        b.add_point(DataPoint::new(base + Duration::seconds(30), 1.0));
        assert!(matches!(mse(&a, &b), Err(SeriesError::EmptySeries)));
    }

    #[test]
    fn test_mad() {
        let ts = minutes(&[1.0, 1.0, 2.0, 2.0, 4.0, 6.0, 9.0]);
        // median 2; deviations 1,1,0,0,2,4,7 -> median 1
        assert!((mad(&ts).unwrap() - 1.0).abs() < 1e-9);
    }
}
