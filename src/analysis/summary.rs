use crate::analysis::comfort::{comfort_score, ComfortRating};
use crate::analysis::data_quality::estimate_data_quality;
use crate::analysis::soil_moisture::soil_moisture_statistics;
use crate::analysis::statistics::{aggregate, round1, Thresholds};
use crate::types::observation::RawObservationRecord;
use crate::types::summary::{ThresholdProbabilities, WeatherSummary};
use log::debug;

/// Summarizes an already-windowed record set using the default thresholds.
///
/// `month` (1-12) is the month of the target date and only affects the seasonal
/// weighting of the comfort score. An empty slice yields
/// [`WeatherSummary::empty`].
///
/// ```
/// use climate_profile::{summarize, RawObservationRecord};
///
/// let empty = summarize(&[], 7);
/// assert_eq!(empty.years, 0);
/// assert_eq!(empty.comfort_score, 0.0);
/// assert_eq!(empty.temperature.average, 0.0);
///
/// let day = RawObservationRecord::builder()
///     .location("Lisbon")
///     .year(2011)
///     .day_of_year(120)
///     .max_temperature(24.0)
///     .min_temperature(16.0)
///     .humidity(55.0)
///     .wind_speed(4.0)
///     .precipitation(0.0)
///     .uv_index(6.0)
///     .build();
/// let summary = summarize(&[day], 4);
/// assert_eq!(summary.years, 1);
/// assert_eq!(summary.temperature.average, 20.0);
/// assert_eq!(summary.comfort_score, 10.0);
/// ```
pub fn summarize(records: &[RawObservationRecord], month: u32) -> WeatherSummary {
    summarize_with(records, month, &Thresholds::default())
}

/// [`summarize`] with caller-supplied probability thresholds.
pub fn summarize_with(
    records: &[RawObservationRecord],
    month: u32,
    thresholds: &Thresholds,
) -> WeatherSummary {
    if records.is_empty() {
        debug!("Empty window, returning zero-filled summary");
        return WeatherSummary::empty();
    }

    let stats = aggregate(records, thresholds);
    let (soil_moisture, soil_points) = soil_moisture_statistics(records);

    let score = round1(comfort_score(
        stats.temperature.average,
        stats.humidity.average,
        stats.wind.average,
        stats.uv.average,
        month,
    ));

    let data_quality = estimate_data_quality(records.len(), stats.valid_points + soil_points);

    debug!(
        "Summarized {} records: comfort {} ({}), completeness {}%",
        records.len(),
        score,
        ComfortRating::from_score(score),
        data_quality.completeness
    );

    WeatherSummary {
        temperature: stats.temperature,
        precipitation: stats.precipitation,
        humidity: stats.humidity,
        wind: stats.wind,
        uv: stats.uv,
        soil_moisture,
        probabilities: ThresholdProbabilities {
            heat: stats.heat_probability,
            cold: stats.cold_probability,
            rain: stats.rain_probability,
        },
        comfort_score: score,
        comfort_rating: ComfortRating::from_score(score),
        years: records.len(),
        data_quality,
    }
}
