//! Threshold-based anomaly detectors.
//!
//! Every detector returns a 0/1 flag series on the input's timestamps.

use series_api::{DropConfig, FlatlineConfig, RobustZScoreConfig, SpikeConfig, ZScoreConfig};
use series_spi::{DataPoint, Result, SeriesError, TimeSeries};

use crate::score::{robust_z_score, z_score};

fn flags_to_series(ts: &TimeSeries, flags: &[f64]) -> TimeSeries {
    let mut out = TimeSeries::empty();
    for (dp, &flag) in ts.as_slice().iter().zip(flags) {
        out.add_point(DataPoint {
            timestamp: dp.timestamp,
            value: flag,
        });
    }
    out
}

/// Flags points whose |z-score| exceeds the threshold.
#[derive(Debug, Clone)]
pub struct ZScoreDetector {
    threshold: f64,
}

impl ZScoreDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: ZScoreConfig) -> Self {
        Self {
            threshold: config.threshold,
        }
    }

    pub fn detect(&self, ts: &TimeSeries) -> Result<TimeSeries> {
        let scored = z_score(ts)?;
        let threshold = self.threshold;
        Ok(scored.map_values(|z| if z.abs() > threshold { 1.0 } else { 0.0 }))
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::from_config(ZScoreConfig::default())
    }
}

/// Flags points whose |robust z-score| exceeds the threshold.
#[derive(Debug, Clone)]
pub struct RobustZScoreDetector {
    threshold: f64,
}

impl RobustZScoreDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: RobustZScoreConfig) -> Self {
        Self {
            threshold: config.threshold,
        }
    }

    pub fn detect(&self, ts: &TimeSeries) -> Result<TimeSeries> {
        let scored = robust_z_score(ts)?;
        let threshold = self.threshold;
        Ok(scored.map_values(|z| if z.abs() > threshold { 1.0 } else { 0.0 }))
    }
}

impl Default for RobustZScoreDetector {
    fn default() -> Self {
        Self::from_config(RobustZScoreConfig::default())
    }
}

/// Flags positive jumps of at least `threshold` between consecutive
/// points. The first point is never flagged.
#[derive(Debug, Clone)]
pub struct SpikeDetector {
    threshold: f64,
}

impl SpikeDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: SpikeConfig) -> Self {
        Self {
            threshold: config.threshold,
        }
    }

    pub fn detect(&self, ts: &TimeSeries) -> Result<TimeSeries> {
        if ts.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if self.threshold <= 0.0 {
            return Err(SeriesError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let points = ts.as_slice();
        let mut flags = vec![0.0; points.len()];
        for i in 1..points.len() {
            if points[i].value - points[i - 1].value >= self.threshold {
                flags[i] = 1.0;
            }
        }
        Ok(flags_to_series(ts, &flags))
    }
}

/// Flags negative jumps of at least `threshold` between consecutive
/// points.
#[derive(Debug, Clone)]
pub struct DropDetector {
    threshold: f64,
}

impl DropDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: DropConfig) -> Self {
        Self {
            threshold: config.threshold,
        }
    }

    pub fn detect(&self, ts: &TimeSeries) -> Result<TimeSeries> {
        if ts.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if self.threshold <= 0.0 {
            return Err(SeriesError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let points = ts.as_slice();
        let mut flags = vec![0.0; points.len()];
        for i in 1..points.len() {
            if points[i].value - points[i - 1].value <= -self.threshold {
                flags[i] = 1.0;
            }
        }
        Ok(flags_to_series(ts, &flags))
    }
}

/// Flags maximal runs of near-constant values (|delta| within
/// `tolerance`) of at least `min_run` points.
#[derive(Debug, Clone)]
pub struct FlatlineDetector {
    tolerance: f64,
    min_run: usize,
}

impl FlatlineDetector {
    pub fn new(tolerance: f64, min_run: usize) -> Self {
        Self { tolerance, min_run }
    }

    pub fn from_config(config: FlatlineConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            min_run: config.min_run,
        }
    }

    pub fn detect(&self, ts: &TimeSeries) -> Result<TimeSeries> {
        if ts.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if self.tolerance < 0.0 {
            return Err(SeriesError::InvalidParameter {
                name: "tolerance".to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
        if self.min_run == 0 {
            return Err(SeriesError::InvalidParameter {
                name: "min_run".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let points = ts.as_slice();
        let mut flags = vec![0.0; points.len()];
        let mut run_start = 0;
        let mut run_length = 1;

        for i in 1..points.len() {
            let delta = (points[i].value - points[i - 1].value).abs();
            if delta <= self.tolerance {
                run_length += 1;
            } else {
                if run_length >= self.min_run {
                    for flag in &mut flags[run_start..run_start + run_length] {
                        *flag = 1.0;
                    }
                }
                run_start = i;
                run_length = 1;
            }
        }
        if run_length >= self.min_run {
            for flag in &mut flags[run_start..run_start + run_length] {
                *flag = 1.0;
            }
        }
        Ok(flags_to_series(ts, &flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn minutes(values: &[f64]) -> TimeSeries {
        let base: DateTime<Utc> = Utc.timestamp_opt(0, 0).unwrap();
        let mut ts = TimeSeries::empty();
        for (i, &v) in values.iter().enumerate() {
            ts.add_point(DataPoint::new(base + Duration::minutes(i as i64), v));
        }
        ts
    }

    #[test]
    fn test_z_score_detector_flags_outlier() {
        let ts = minutes(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 50.0]);
        let flags = ZScoreDetector::default().detect(&ts).unwrap();
        assert_eq!(flags.values()[9], 1.0);
        assert_eq!(flags.values()[..9].iter().sum::<f64>(), 0.0);
    }

    #[test]
    fn test_robust_z_score_detector_flags_outlier() {
        let ts = minutes(&[1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 100.0]);
        let flags = RobustZScoreDetector::default().detect(&ts).unwrap();
        assert_eq!(flags.values()[7], 1.0);
        assert_eq!(flags.values()[..7].iter().sum::<f64>(), 0.0);
    }

    #[test]
    fn test_spike_detector() {
        let ts = minutes(&[1.0, 2.0, 8.0, 8.5, 3.0]);
        let flags = SpikeDetector::new(3.0).detect(&ts).unwrap();
        assert_eq!(flags.values(), vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_drop_detector() {
        let ts = minutes(&[5.0, 4.5, 1.0, 2.0]);
        let flags = DropDetector::new(3.0).detect(&ts).unwrap();
        assert_eq!(flags.values(), vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_spike_detector_rejects_bad_threshold() {
        let ts = minutes(&[1.0, 2.0]);
        assert!(matches!(
            SpikeDetector::new(0.0).detect(&ts),
            Err(SeriesError::InvalidParameter { .. })
        ));
        assert!(matches!(
            SpikeDetector::new(1.0).detect(&TimeSeries::empty()),
            Err(SeriesError::EmptySeries)
        ));
    }

    #[test]
    fn test_flatline_detector_flags_runs() {
        let ts = minutes(&[1.0, 1.0, 1.0, 5.0, 6.0, 6.0, 6.0, 6.0]);
        let flags = FlatlineDetector::new(0.0, 3).detect(&ts).unwrap();
        assert_eq!(
            flags.values(),
            vec![1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_flatline_detector_short_runs_not_flagged() {
        let ts = minutes(&[1.0, 1.0, 2.0, 2.0, 3.0]);
        let flags = FlatlineDetector::new(0.0, 3).detect(&ts).unwrap();
        assert_eq!(flags.values().iter().sum::<f64>(), 0.0);
    }

    #[test]
    fn test_flatline_detector_tolerance() {
        let ts = minutes(&[1.0, 1.05, 0.95, 8.0]);
        let flags = FlatlineDetector::new(0.1, 3).detect(&ts).unwrap();
        assert_eq!(flags.values(), vec![1.0, 1.0, 1.0, 0.0]);
    }
}
