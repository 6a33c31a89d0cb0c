//! Timestamped scalar value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single (timestamp, value) observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new() {
        let ts = Utc.timestamp_opt(0, 0).unwrap();
        let dp = DataPoint::new(ts, 1.5);
        assert_eq!(dp.timestamp, ts);
        assert_eq!(dp.value, 1.5);
    }
}
