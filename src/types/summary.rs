use crate::analysis::comfort::ComfortRating;
use crate::analysis::data_quality::DataQuality;
use crate::analysis::statistics::VariableStatistics;
use serde::{Deserialize, Serialize};

/// Individual threshold-exceedance percentages behind the summary's
/// `probability` fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdProbabilities {
    /// % of valid temperature samples above the heat threshold.
    pub heat: f64,
    /// % of valid temperature samples below the cold threshold.
    pub cold: f64,
    /// % of valid precipitation samples above the rain threshold.
    pub rain: f64,
}

/// Historical weather profile of one location around one day-of-year.
///
/// A summary is a pure function of the windowed records and the target month, so it
/// can be cached by `(location, date, tolerance)` by the caller. It is never
/// modified after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub temperature: VariableStatistics,
    pub precipitation: VariableStatistics,
    pub humidity: VariableStatistics,
    pub wind: VariableStatistics,
    pub uv: VariableStatistics,
    pub soil_moisture: VariableStatistics,
    pub probabilities: ThresholdProbabilities,
    /// Composite 0-10 outdoor suitability score.
    pub comfort_score: f64,
    pub comfort_rating: ComfortRating,
    /// Number of records in the window (one per matching day across all years).
    pub years: usize,
    pub data_quality: DataQuality,
}

impl WeatherSummary {
    /// The zero-filled summary returned when a window matches no records.
    ///
    /// `years == 0` distinguishes "no historical data" from a real result.
    pub fn empty() -> Self {
        Self {
            temperature: VariableStatistics::default(),
            precipitation: VariableStatistics::default(),
            humidity: VariableStatistics::default(),
            wind: VariableStatistics::default(),
            uv: VariableStatistics::default(),
            soil_moisture: VariableStatistics::default(),
            probabilities: ThresholdProbabilities::default(),
            comfort_score: 0.0,
            comfort_rating: ComfortRating::NoData,
            years: 0,
            data_quality: DataQuality::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years == 0
    }
}
