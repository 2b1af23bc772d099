//! Soil moisture proxy derived from precipitation minus a simple
//! evapotranspiration estimate. Raw records carry no soil data, so this indicator
//! exists only as a derived quantity.

use crate::analysis::statistics::VariableStatistics;
use crate::types::observation::RawObservationRecord;

pub const SOIL_MOISTURE_MIN: f64 = -10.0;
pub const SOIL_MOISTURE_MAX: f64 = 30.0;

/// Daily evapotranspiration estimate, mm/day.
///
/// `ET = 0.0023 × (T + 17.8) × √|T| × (1 − RH/100) × (1 + 0.1 × W)` with `T` the
/// mean temperature (°C), `RH` relative humidity (%) and `W` wind speed (m/s).
pub fn evapotranspiration(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    0.0023
        * (temperature + 17.8)
        * temperature.abs().sqrt()
        * (1.0 - humidity / 100.0)
        * (1.0 + 0.1 * wind_speed)
}

/// `clamp(P − ET, −10, 30)`; NaN inputs propagate as NaN so callers can drop them.
pub fn soil_moisture(precipitation: f64, evapotranspiration: f64) -> f64 {
    let balance = precipitation - evapotranspiration;
    if balance.is_nan() {
        return balance;
    }
    balance.clamp(SOIL_MOISTURE_MIN, SOIL_MOISTURE_MAX)
}

/// Soil moisture proxy for one record, or `None` if any input is missing or the
/// result is not a number.
///
/// ```
/// use climate_profile::{soil_moisture_proxy, RawObservationRecord};
///
/// let flooded = RawObservationRecord::builder()
///     .location("Mumbai")
///     .year(2005)
///     .day_of_year(207)
///     .max_temperature(30.0)
///     .min_temperature(26.0)
///     .humidity(90.0)
///     .wind_speed(4.0)
///     .precipitation(944.0)
///     .build();
///
/// assert_eq!(soil_moisture_proxy(&flooded), Some(30.0));
/// ```
pub fn soil_moisture_proxy(record: &RawObservationRecord) -> Option<f64> {
    let temperature = record.average_temperature()?;
    let humidity = record.humidity()?;
    let wind_speed = record.wind_speed()?;
    let precipitation = record.precipitation()?;

    let et = evapotranspiration(temperature, humidity, wind_speed);
    let value = soil_moisture(precipitation, et);
    (!value.is_nan()).then_some(value)
}

/// Soil moisture proxy for every record that has all four inputs.
pub fn soil_moisture_series(records: &[RawObservationRecord]) -> Vec<f64> {
    records.iter().filter_map(soil_moisture_proxy).collect()
}

/// Statistics of the proxy over a window. No threshold probability applies.
pub fn soil_moisture_statistics(records: &[RawObservationRecord]) -> (VariableStatistics, usize) {
    let series = soil_moisture_series(records);
    (VariableStatistics::from_series(&series, 0.0), series.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(t_max: f64, t_min: f64, rh: f64, wind: f64, rain: f64) -> RawObservationRecord {
        RawObservationRecord::builder()
            .location("Nairobi")
            .year(2012)
            .day_of_year(60)
            .max_temperature(t_max)
            .min_temperature(t_min)
            .humidity(rh)
            .wind_speed(wind)
            .precipitation(rain)
            .build()
    }

    #[test]
    fn test_evapotranspiration_formula() {
        // T = 25, RH = 50, W = 2
        let expected = 0.0023 * 42.8 * 5.0 * 0.5 * 1.2;
        assert_relative_eq!(evapotranspiration(25.0, 50.0, 2.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_temperature_uses_absolute_value_under_root() {
        let et = evapotranspiration(-4.0, 50.0, 0.0);
        assert_relative_eq!(et, 0.0023 * 13.8 * 2.0 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_to_upper_bound() {
        assert_eq!(soil_moisture(120.0, 1.0), SOIL_MOISTURE_MAX);
    }

    #[test]
    fn test_clamped_to_lower_bound() {
        assert_eq!(soil_moisture(0.0, 25.0), SOIL_MOISTURE_MIN);
        assert_eq!(soil_moisture(2.0, 12.0), SOIL_MOISTURE_MIN);
    }

    #[test]
    fn test_in_range_value_is_unchanged() {
        let r = record(25.0, 25.0, 50.0, 2.0, 3.0);
        let expected = 3.0 - 0.0023 * 42.8 * 5.0 * 0.5 * 1.2;
        assert_relative_eq!(soil_moisture_proxy(&r).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_input_skips_record() {
        let r = RawObservationRecord {
            wind_speed: None,
            ..record(25.0, 15.0, 50.0, 2.0, 3.0)
        };
        assert_eq!(soil_moisture_proxy(&r), None);
    }

    #[test]
    fn test_nan_is_never_returned() {
        assert!(soil_moisture(f64::NAN, 1.0).is_nan());
        let r = RawObservationRecord {
            precipitation: Some(f64::NAN),
            ..record(25.0, 15.0, 50.0, 2.0, 3.0)
        };
        assert_eq!(soil_moisture_proxy(&r), None);
    }

    #[test]
    fn test_statistics_count_only_complete_records() {
        let records = vec![
            record(20.0, 10.0, 60.0, 3.0, 4.0),
            RawObservationRecord {
                humidity: None,
                ..record(20.0, 10.0, 60.0, 3.0, 4.0)
            },
        ];
        let (stats, count) = soil_moisture_statistics(&records);
        assert_eq!(count, 1);
        assert_eq!(stats.probability, 0.0);
        assert_eq!(stats.min, stats.max);
    }
}
