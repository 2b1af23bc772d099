//! Defines the [`Variable`] enum identifying each weather quantity the crate can
//! aggregate or trend.

use crate::analysis::soil_moisture::soil_moisture_proxy;
use crate::error::ClimateError;
use crate::types::observation::RawObservationRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A weather quantity extracted from [`RawObservationRecord`]s.
///
/// Each variant owns exactly one validity rule (see [`Variable::extract`]), so the
/// statistics aggregator and the trend generator can never disagree on what counts
/// as a valid sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    /// Mean of the daily max and min temperature, °C.
    Temperature,
    /// Daily maximum temperature, °C.
    MaxTemperature,
    /// Daily minimum temperature, °C.
    MinTemperature,
    /// Relative humidity, %.
    Humidity,
    /// Wind speed, m/s.
    WindSpeed,
    /// Precipitation, mm/day.
    Precipitation,
    /// UV index, unitless.
    UvIndex,
    /// Derived soil moisture proxy, mm/day (precipitation minus estimated ET).
    SoilMoisture,
}

impl Variable {
    pub const ALL: [Variable; 8] = [
        Variable::Temperature,
        Variable::MaxTemperature,
        Variable::MinTemperature,
        Variable::Humidity,
        Variable::WindSpeed,
        Variable::Precipitation,
        Variable::UvIndex,
        Variable::SoilMoisture,
    ];

    /// Stable identifier used by [`fmt::Display`] and [`FromStr`].
    pub fn identifier(&self) -> &'static str {
        match self {
            Variable::Temperature => "temperature",
            Variable::MaxTemperature => "max_temperature",
            Variable::MinTemperature => "min_temperature",
            Variable::Humidity => "humidity",
            Variable::WindSpeed => "wind_speed",
            Variable::Precipitation => "precipitation",
            Variable::UvIndex => "uv_index",
            Variable::SoilMoisture => "soil_moisture",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Variable::Temperature | Variable::MaxTemperature | Variable::MinTemperature => "°C",
            Variable::Humidity => "%",
            Variable::WindSpeed => "m/s",
            Variable::Precipitation | Variable::SoilMoisture => "mm",
            Variable::UvIndex => "",
        }
    }

    /// Pulls this variable's value out of a record, or `None` if the record holds
    /// no valid sample for it.
    pub fn extract(&self, record: &RawObservationRecord) -> Option<f64> {
        match self {
            Variable::Temperature => record.average_temperature(),
            Variable::MaxTemperature => record.max_temperature(),
            Variable::MinTemperature => record.min_temperature(),
            Variable::Humidity => record.humidity(),
            Variable::WindSpeed => record.wind_speed(),
            Variable::Precipitation => record.precipitation(),
            Variable::UvIndex => record.uv_index(),
            Variable::SoilMoisture => soil_moisture_proxy(record),
        }
    }

    /// Collects every valid sample of this variable, in record order.
    pub fn series(&self, records: &[RawObservationRecord]) -> Vec<f64> {
        records.iter().filter_map(|r| self.extract(r)).collect()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Parses an identifier, case-insensitively. Besides the canonical identifiers,
/// common short names and the NASA POWER column names are accepted.
///
/// ```
/// use climate_profile::Variable;
///
/// assert_eq!("uv".parse::<Variable>().unwrap(), Variable::UvIndex);
/// assert_eq!("T2M_MAX".parse::<Variable>().unwrap(), Variable::MaxTemperature);
/// assert!("pollen".parse::<Variable>().is_err());
/// ```
impl FromStr for Variable {
    type Err = ClimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let variable = match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" | "avg_temp" | "t2m" => Variable::Temperature,
            "max_temperature" | "max_temp" | "t2m_max" => Variable::MaxTemperature,
            "min_temperature" | "min_temp" | "t2m_min" => Variable::MinTemperature,
            "humidity" | "rh2m" => Variable::Humidity,
            "wind_speed" | "wind" | "ws2m" => Variable::WindSpeed,
            "precipitation" | "rain" | "prectotcorr" => Variable::Precipitation,
            "uv_index" | "uv" | "allsky_sfc_uv_index" => Variable::UvIndex,
            "soil_moisture" | "soil" => Variable::SoilMoisture,
            _ => return Err(ClimateError::UnknownVariable(s.to_string())),
        };
        Ok(variable)
    }
}
