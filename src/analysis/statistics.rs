//! Descriptive statistics and threshold probabilities over windowed records.
//!
//! The numeric helpers at the top are stateless and shared by the aggregator, the
//! soil moisture estimator and the trend generator. None of them ever produce NaN
//! for an empty input.

use crate::types::observation::RawObservationRecord;
use crate::types::variable::Variable;
use bon::Builder;
use log::trace;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

// --- Numeric helpers ---

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median (average of the two middle values for even lengths); `0.0` when empty.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<OrderedFloat<f64>> = values.iter().copied().map(OrderedFloat).collect();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid].0
    } else {
        (sorted[mid - 1].0 + sorted[mid].0) / 2.0
    }
}

/// Population standard deviation (divides by `n`); `0.0` when empty.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().map(OrderedFloat).min().map_or(0.0, |v| v.0)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().map(OrderedFloat).max().map_or(0.0, |v| v.0)
}

/// Percentage (0-100) of `values` satisfying `predicate`; `0.0` when empty.
pub fn percent_where(values: &[f64], predicate: impl Fn(f64) -> bool) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let hits = values.iter().filter(|v| predicate(**v)).count();
    hits as f64 / values.len() as f64 * 100.0
}

/// Rounds to one decimal place, the precision used for presentation.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// --- Statistics types ---

/// Descriptive statistics of one variable over a window. All fields are rounded
/// to one decimal; an empty series gives all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableStatistics {
    /// Threshold-exceedance probability in percent (0 where not applicable).
    pub probability: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl VariableStatistics {
    /// Describes a series of already-validated values.
    ///
    /// ```
    /// use climate_profile::VariableStatistics;
    ///
    /// let stats = VariableStatistics::from_series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 0.0);
    /// assert_eq!(stats.average, 5.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// assert_eq!(stats.median, 4.5);
    ///
    /// assert_eq!(VariableStatistics::from_series(&[], 0.0), VariableStatistics::default());
    /// ```
    pub fn from_series(values: &[f64], probability: f64) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        Self {
            probability: round1(probability),
            average: round1(mean(values)),
            min: round1(min(values)),
            max: round1(max(values)),
            median: round1(median(values)),
            std_dev: round1(population_std_dev(values)),
        }
    }
}

/// Fixed thresholds behind the heat, cold and rain probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct Thresholds {
    /// Heat: average temperature strictly above this, °C.
    #[builder(default = 30.0)]
    pub heat_celsius: f64,
    /// Cold: average temperature strictly below this, °C.
    #[builder(default = -10.0)]
    pub cold_celsius: f64,
    /// Rain: daily precipitation strictly above this, mm.
    #[builder(default = 5.0)]
    pub rain_mm: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Statistics for the raw variables of a window, before derived indicators and
/// scoring are added.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowStatistics {
    pub temperature: VariableStatistics,
    pub precipitation: VariableStatistics,
    pub humidity: VariableStatistics,
    pub wind: VariableStatistics,
    pub uv: VariableStatistics,
    pub heat_probability: f64,
    pub cold_probability: f64,
    pub rain_probability: f64,
    /// Valid samples across the five raw variables.
    pub valid_points: usize,
}

/// Aggregates temperature, precipitation, humidity, wind and UV over `records`.
///
/// Each variable is extracted with its own validity rule (see
/// [`Variable::extract`]), so a missing value in one field never removes the
/// record from the other variables.
pub fn aggregate(records: &[RawObservationRecord], thresholds: &Thresholds) -> WindowStatistics {
    let temperature = Variable::Temperature.series(records);
    let precipitation = Variable::Precipitation.series(records);
    let humidity = Variable::Humidity.series(records);
    let wind = Variable::WindSpeed.series(records);
    let uv = Variable::UvIndex.series(records);

    trace!(
        "Valid samples: temperature={} precipitation={} humidity={} wind={} uv={} of {} records",
        temperature.len(),
        precipitation.len(),
        humidity.len(),
        wind.len(),
        uv.len(),
        records.len()
    );

    let heat_probability = round1(percent_where(&temperature, |t| t > thresholds.heat_celsius));
    let cold_probability = round1(percent_where(&temperature, |t| t < thresholds.cold_celsius));
    let rain_probability = round1(percent_where(&precipitation, |p| p > thresholds.rain_mm));

    WindowStatistics {
        temperature: VariableStatistics::from_series(
            &temperature,
            heat_probability.max(cold_probability),
        ),
        precipitation: VariableStatistics::from_series(&precipitation, rain_probability),
        humidity: VariableStatistics::from_series(&humidity, 0.0),
        wind: VariableStatistics::from_series(&wind, 0.0),
        uv: VariableStatistics::from_series(&uv, 0.0),
        heat_probability,
        cold_probability,
        rain_probability,
        valid_points: temperature.len()
            + precipitation.len()
            + humidity.len()
            + wind.len()
            + uv.len(),
    }
}
