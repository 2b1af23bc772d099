//! Defines [`RawObservationRecord`], the daily observation shape supplied by the
//! data ingestion layer, together with the validity rules applied when values are
//! pulled out of it.

use bon::Builder;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder written by upstream data providers for "not measured".
pub const MISSING_SENTINEL: f64 = -999.0;

/// A single day of raw observations for one location.
///
/// Records are treated as immutable input. Every numeric field is optional: a value
/// may be absent, non-numeric in the source, non-finite, or set to
/// [`MISSING_SENTINEL`]. The accessor methods apply the validity rules so that a
/// missing value is never averaged as a zero.
///
/// When deserializing, numeric fields accept numbers, numeric strings or `null`
/// (anything else becomes `None`), and the NASA POWER column names (`T2M_MAX`,
/// `RH2M`, `ALLSKY_SFC_UV_INDEX`, ...) are accepted as aliases.
///
/// # Examples
///
/// ```
/// use climate_profile::RawObservationRecord;
///
/// let record = RawObservationRecord::builder()
///     .location("new_york")
///     .year(2015)
///     .day_of_year(185)
///     .max_temperature(31.0)
///     .min_temperature(21.0)
///     .uv_index(-999.0)
///     .build();
///
/// assert_eq!(record.average_temperature(), Some(26.0));
/// assert_eq!(record.uv_index(), None); // sentinel, not measured
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct RawObservationRecord {
    #[serde(alias = "LOCATION")]
    #[builder(into)]
    pub location: String,

    #[serde(alias = "YEAR", deserialize_with = "lenient_integer")]
    pub year: i32,

    #[serde(alias = "DOY", alias = "dayOfYear", deserialize_with = "lenient_integer")]
    pub day_of_year: u32,

    #[serde(default, alias = "T2M_MAX", deserialize_with = "lenient_number")]
    pub max_temperature: Option<f64>, // °C

    #[serde(default, alias = "T2M_MIN", deserialize_with = "lenient_number")]
    pub min_temperature: Option<f64>, // °C

    #[serde(default, alias = "RH2M", deserialize_with = "lenient_number")]
    pub humidity: Option<f64>, // relative humidity, %

    #[serde(default, alias = "WS2M", deserialize_with = "lenient_number")]
    pub wind_speed: Option<f64>, // m/s

    #[serde(default, alias = "PRECTOTCORR", deserialize_with = "lenient_number")]
    pub precipitation: Option<f64>, // mm/day

    #[serde(default, alias = "ALLSKY_SFC_UV_INDEX", deserialize_with = "lenient_number")]
    pub uv_index: Option<f64>,
}

/// Returns the value only if it is an actual measurement.
///
/// This is the single validity predicate for raw fields: non-finite values and the
/// [`MISSING_SENTINEL`] are rejected. Zero is a valid measurement here.
pub(crate) fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != MISSING_SENTINEL)
}

impl RawObservationRecord {
    /// Mean of the daily maximum and minimum temperature.
    ///
    /// This is the only place the average temperature is derived; statistics, the
    /// soil moisture estimate and the yearly trend all go through it. A result of
    /// exactly `0.0` is how the upstream data marks a missing day, so it is rejected.
    pub fn average_temperature(&self) -> Option<f64> {
        let max = measured(self.max_temperature)?;
        let min = measured(self.min_temperature)?;
        let average = (max + min) / 2.0;
        (average != 0.0).then_some(average)
    }

    pub fn max_temperature(&self) -> Option<f64> {
        measured(self.max_temperature)
    }

    pub fn min_temperature(&self) -> Option<f64> {
        measured(self.min_temperature)
    }

    pub fn humidity(&self) -> Option<f64> {
        measured(self.humidity)
    }

    pub fn wind_speed(&self) -> Option<f64> {
        measured(self.wind_speed)
    }

    /// Daily precipitation. `0.0` is a valid (dry day) value.
    pub fn precipitation(&self) -> Option<f64> {
        measured(self.precipitation)
    }

    pub fn uv_index(&self) -> Option<f64> {
        measured(self.uv_index)
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn lenient_integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    let integer = match &value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    integer
        .and_then(|i| T::try_from(i).ok())
        .ok_or_else(|| de::Error::custom(format!("expected an integer, found {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RawObservationRecord {
        RawObservationRecord::builder()
            .location("Paris")
            .year(2010)
            .day_of_year(40)
            .build()
    }

    #[test]
    fn test_average_temperature_is_mean_of_max_and_min() {
        let r = RawObservationRecord {
            max_temperature: Some(12.0),
            min_temperature: Some(3.0),
            ..record()
        };
        assert_eq!(r.average_temperature(), Some(7.5));
    }

    #[test]
    fn test_average_temperature_requires_both_bounds() {
        let r = RawObservationRecord {
            max_temperature: Some(12.0),
            ..record()
        };
        assert_eq!(r.average_temperature(), None);
    }

    #[test]
    fn test_exact_zero_average_temperature_is_missing() {
        let r = RawObservationRecord {
            max_temperature: Some(5.0),
            min_temperature: Some(-5.0),
            ..record()
        };
        assert_eq!(r.average_temperature(), None);
    }

    #[test]
    fn test_sentinel_and_nan_are_not_measurements() {
        let r = RawObservationRecord {
            uv_index: Some(MISSING_SENTINEL),
            humidity: Some(f64::NAN),
            precipitation: Some(0.0),
            ..record()
        };
        assert_eq!(r.uv_index(), None);
        assert_eq!(r.humidity(), None);
        assert_eq!(r.precipitation(), Some(0.0), "zero rain is a real value");
    }

    #[test]
    fn test_deserialize_power_column_names() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{
            "LOCATION": "new_york",
            "YEAR": "2003",
            "DOY": 182,
            "T2M_MAX": "29.4",
            "T2M_MIN": 19.8,
            "RH2M": "n/a",
            "WS2M": null,
            "PRECTOTCORR": 0,
            "ALLSKY_SFC_UV_INDEX": -999
        }"#;
        let r: RawObservationRecord = serde_json::from_str(json)?;

        assert_eq!(r.location, "new_york");
        assert_eq!(r.year, 2003);
        assert_eq!(r.day_of_year, 182);
        assert_eq!(r.max_temperature, Some(29.4));
        assert_eq!(r.humidity, None);
        assert_eq!(r.wind_speed, None);
        assert_eq!(r.precipitation(), Some(0.0));
        assert_eq!(r.uv_index(), None);
        Ok(())
    }

    #[test]
    fn test_deserialize_missing_numeric_fields_default_to_none() -> Result<(), Box<dyn std::error::Error>> {
        let r: RawObservationRecord =
            serde_json::from_str(r#"{"location": "Oslo", "year": 2001, "day_of_year": 3}"#)?;
        assert_eq!(r.max_temperature, None);
        assert_eq!(r.uv_index, None);
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_non_integer_year() {
        let result: Result<RawObservationRecord, _> =
            serde_json::from_str(r#"{"location": "Oslo", "year": "soon", "day_of_year": 3}"#);
        assert!(result.is_err());
    }
}
