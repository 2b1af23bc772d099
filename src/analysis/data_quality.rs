use crate::analysis::statistics::round1;
use serde::{Deserialize, Serialize};

/// Slots counted per record when measuring completeness.
///
/// Six variables are tracked (temperature, precipitation, humidity, wind, UV, soil
/// moisture) but completeness has always been reported against seven slots per
/// record, so a fully populated window reads as ~85.7 %. Changing this would shift
/// every published reliability tier.
pub const SLOTS_PER_RECORD: usize = 7;

/// Completeness and reliability of the data behind a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DataQuality {
    /// Percentage of expected data points that were valid, one decimal.
    pub completeness: f64,
    /// Tiered confidence derived from completeness: 95, 85 or 70.
    pub reliability: f64,
}

/// Estimates data quality from the number of windowed records and the number of
/// valid data points extracted from them.
///
/// ```
/// use climate_profile::estimate_data_quality;
///
/// let quality = estimate_data_quality(10, 60);
/// assert_eq!(quality.completeness, 85.7);
/// assert_eq!(quality.reliability, 95.0);
///
/// assert_eq!(estimate_data_quality(0, 0).completeness, 0.0);
/// ```
pub fn estimate_data_quality(record_count: usize, valid_points: usize) -> DataQuality {
    let expected = record_count * SLOTS_PER_RECORD;
    let completeness = if expected == 0 {
        0.0
    } else {
        valid_points as f64 / expected as f64 * 100.0
    };
    DataQuality {
        completeness: round1(completeness),
        reliability: reliability_for(completeness),
    }
}

fn reliability_for(completeness: f64) -> f64 {
    if completeness > 80.0 {
        95.0
    } else if completeness > 60.0 {
        85.0
    } else {
        70.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_does_not_divide_by_zero() {
        let quality = estimate_data_quality(0, 0);
        assert_eq!(quality.completeness, 0.0);
        assert_eq!(quality.reliability, 70.0);
    }

    #[test]
    fn test_reliability_tiers() {
        // 10 records → 70 slots
        assert_eq!(estimate_data_quality(10, 57).reliability, 95.0); // 81.4 %
        assert_eq!(estimate_data_quality(10, 56).reliability, 85.0); // 80.0 %, not > 80
        assert_eq!(estimate_data_quality(10, 43).reliability, 85.0); // 61.4 %
        assert_eq!(estimate_data_quality(10, 42).reliability, 70.0); // 60.0 %
    }

    #[test]
    fn test_completeness_is_rounded() {
        assert_eq!(estimate_data_quality(3, 10).completeness, 47.6);
    }
}
