//! Series normalization scores.

use series_spi::{Result, SeriesError, TimeSeries};

/// Z-score normalization: `(x - mean) / stddev` with the sample standard
/// deviation. An empty input yields an empty output.
pub fn z_score(ts: &TimeSeries) -> Result<TimeSeries> {
    if ts.is_empty() {
        return Ok(TimeSeries::empty());
    }
    let mv = ts.mean_and_variance()?;
    let stddev = mv.sample_variance.sqrt();
    Ok(ts.map_values(|v| (v - mv.mean) / stddev))
}

/// Robust z-score: `(x - median) / (1.4826 * MAD)`, where MAD is the
/// median absolute deviation around the series median. The 1.4826 factor
/// scales MAD to the standard deviation of a normal distribution.
pub fn robust_z_score(ts: &TimeSeries) -> Result<TimeSeries> {
    if ts.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    let median = ts.median()?;
    let deviations = ts.map_values(|v| (v - median).abs());
    let mad = deviations.median()?;
    let scaled_mad = mad * 1.4826;
    Ok(ts.map_values(|v| (v - median) / scaled_mad))
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
    fn test_z_score_is_centered_and_scaled() {
        let ts = minutes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let scored = z_score(&ts).unwrap();

        let mean: f64 = scored.sum() / scored.len() as f64;
        assert!(mean.abs() < 1e-9);
        // symmetric input: extreme scores mirror each other
        let vs = scored.values();
        assert!((vs[0] + vs[4]).abs() < 1e-9);
        assert_eq!(scored.timestamps(), ts.timestamps());
    }

    #[test]
    fn test_z_score_empty_is_empty() {
        assert!(z_score(&TimeSeries::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_robust_z_score_centers_on_median() {
        let ts = minutes(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        let scored = robust_z_score(&ts).unwrap();
        // the median point scores zero even with a gross outlier present
        assert!(scored.values()[2].abs() < 1e-9);
        assert!(scored.values()[4] > 3.0);
    }

    #[test]
    fn test_robust_z_score_empty_is_error() {
        assert!(matches!(
            robust_z_score(&TimeSeries::empty()),
            Err(SeriesError::EmptySeries)
        ));
    }
}
