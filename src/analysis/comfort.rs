//! Composite 0-10 comfort score for outdoor activity.
//!
//! Each factor is penalized by how far it falls outside its ideal band, the
//! penalties are weighted by season, and the weighted sum is subtracted from 10.
//! Extreme conditions short-circuit to a fixed floor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score returned for extreme conditions, bypassing the weighted model.
pub const EXTREME_CONDITION_SCORE: f64 = 2.0;

const PENALTY_SCALE: f64 = 0.9;

const TEMPERATURE_BAND: (f64, f64) = (18.0, 24.0);
const HUMIDITY_BAND: (f64, f64) = (40.0, 60.0);
const WIND_BAND: (f64, f64) = (2.0, 8.0);
const UV_BAND: (f64, f64) = (1.0, 8.0);

/// Multipliers applied to each factor's penalty for a given month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalWeights {
    pub temperature: f64,
    pub humidity: f64,
    pub wind: f64,
    pub uv: f64,
}

const NEUTRAL: SeasonalWeights = SeasonalWeights {
    temperature: 1.0,
    humidity: 1.0,
    wind: 1.0,
    uv: 1.0,
};

const WINTER: SeasonalWeights = SeasonalWeights {
    wind: 1.5,
    humidity: 1.3,
    ..NEUTRAL
};

const SUMMER: SeasonalWeights = SeasonalWeights {
    uv: 1.5,
    temperature: 1.3,
    ..NEUTRAL
};

/// Index 0 is January.
const MONTHLY_WEIGHTS: [SeasonalWeights; 12] = [
    WINTER, WINTER, NEUTRAL, NEUTRAL, NEUTRAL, SUMMER, SUMMER, SUMMER, NEUTRAL, NEUTRAL, NEUTRAL,
    WINTER,
];

/// Seasonal weights for `month` (1-12). Out-of-range months get neutral weights.
pub fn seasonal_weights(month: u32) -> SeasonalWeights {
    month
        .checked_sub(1)
        .and_then(|index| MONTHLY_WEIGHTS.get(index as usize))
        .copied()
        .unwrap_or(NEUTRAL)
}

fn outside_band(value: f64, (low, high): (f64, f64)) -> f64 {
    if value < low {
        low - value
    } else if value > high {
        value - high
    } else {
        0.0
    }
}

fn temperature_penalty(temperature: f64) -> f64 {
    match outside_band(temperature, TEMPERATURE_BAND) {
        d if d == 0.0 => 0.0,
        d if d <= 5.0 => 1.0,
        d if d <= 10.0 => 2.0,
        _ => 3.0,
    }
}

fn humidity_penalty(humidity: f64) -> f64 {
    match outside_band(humidity, HUMIDITY_BAND) {
        d if d == 0.0 => 0.0,
        d if d <= 15.0 => 1.0,
        _ => 2.0,
    }
}

fn wind_penalty(wind: f64) -> f64 {
    match outside_band(wind, WIND_BAND) {
        d if d == 0.0 => 0.0,
        d if d <= 4.0 => 1.0,
        _ => 2.0,
    }
}

fn uv_penalty(uv: f64) -> f64 {
    if outside_band(uv, UV_BAND) == 0.0 {
        0.0
    } else {
        1.0
    }
}

fn is_extreme(temperature: f64, wind: f64, uv: f64) -> bool {
    temperature > 40.0 || uv > 10.0 || wind > 20.0 || temperature < -20.0
}

/// Comfort score in `[0, 10]` from window averages and the target month (1-12).
///
/// Deterministic and free of side effects.
///
/// ```
/// use climate_profile::comfort_score;
///
/// // Ideal spring day.
/// assert_eq!(comfort_score(21.0, 50.0, 5.0, 5.0, 4), 10.0);
/// // Extreme heat always scores the floor.
/// assert_eq!(comfort_score(45.0, 50.0, 5.0, 5.0, 4), 2.0);
/// ```
pub fn comfort_score(temperature: f64, humidity: f64, wind: f64, uv: f64, month: u32) -> f64 {
    if is_extreme(temperature, wind, uv) {
        return EXTREME_CONDITION_SCORE;
    }

    let weights = seasonal_weights(month);
    let penalty = temperature_penalty(temperature) * weights.temperature
        + humidity_penalty(humidity) * weights.humidity
        + wind_penalty(wind) * weights.wind
        + uv_penalty(uv) * weights.uv;

    (10.0 - penalty * PENALTY_SCALE).clamp(0.0, 10.0)
}

/// Categorical reading of a comfort score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortRating {
    Excellent,
    Good,
    Fair,
    Poor,
    /// At or below the extreme-condition floor.
    Severe,
    /// The window held no records.
    NoData,
}

impl ComfortRating {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 8.0 => ComfortRating::Excellent,
            s if s >= 6.0 => ComfortRating::Good,
            s if s >= 4.0 => ComfortRating::Fair,
            s if s > EXTREME_CONDITION_SCORE => ComfortRating::Poor,
            _ => ComfortRating::Severe,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComfortRating::Excellent => "excellent",
            ComfortRating::Good => "good",
            ComfortRating::Fair => "fair",
            ComfortRating::Poor => "poor",
            ComfortRating::Severe => "severe",
            ComfortRating::NoData => "no data",
        }
    }
}

impl fmt::Display for ComfortRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_extreme_conditions_return_floor() {
        assert_eq!(comfort_score(45.0, 50.0, 5.0, 5.0, 6), 2.0);
        assert_eq!(comfort_score(41.0, 50.0, 5.0, 5.0, 6), 2.0);
        assert_eq!(comfort_score(-25.0, 50.0, 5.0, 5.0, 1), 2.0);
        assert_eq!(comfort_score(20.0, 50.0, 25.0, 5.0, 3), 2.0);
        assert_eq!(comfort_score(20.0, 50.0, 5.0, 11.0, 3), 2.0);
        // Even an otherwise ideal humidity/wind combination hits the floor.
        assert_eq!(comfort_score(45.0, 10.0, 30.0, 12.0, 1), 2.0);
    }

    #[test]
    fn test_thirty_nine_degrees_uses_weighted_model() {
        // 15 degrees above band: tier 3, ×1.3 in June.
        let score = comfort_score(39.0, 50.0, 5.0, 5.0, 6);
        assert_relative_eq!(score, 10.0 - 3.0 * 1.3 * 0.9, epsilon = 1e-9);
        assert_ne!(score, EXTREME_CONDITION_SCORE);
    }

    #[test]
    fn test_temperature_tiers() {
        assert_eq!(comfort_score(24.0, 50.0, 5.0, 5.0, 4), 10.0);
        assert_relative_eq!(comfort_score(29.0, 50.0, 5.0, 5.0, 4), 10.0 - 0.9);
        assert_relative_eq!(comfort_score(8.0, 50.0, 5.0, 5.0, 4), 10.0 - 1.8);
        assert_relative_eq!(comfort_score(5.0, 50.0, 5.0, 5.0, 4), 10.0 - 2.7);
    }

    #[test]
    fn test_humidity_wind_and_uv_tiers() {
        assert_relative_eq!(comfort_score(21.0, 70.0, 5.0, 5.0, 4), 10.0 - 0.9);
        assert_relative_eq!(comfort_score(21.0, 90.0, 5.0, 5.0, 4), 10.0 - 1.8);
        assert_relative_eq!(comfort_score(21.0, 50.0, 0.5, 5.0, 4), 10.0 - 0.9);
        assert_relative_eq!(comfort_score(21.0, 50.0, 14.0, 5.0, 4), 10.0 - 1.8);
        assert_relative_eq!(comfort_score(21.0, 50.0, 5.0, 9.0, 4), 10.0 - 0.9);
        assert_relative_eq!(comfort_score(21.0, 50.0, 5.0, 0.0, 4), 10.0 - 0.9);
    }

    #[test]
    fn test_winter_weights_wind_and_humidity() {
        let april = comfort_score(21.0, 70.0, 14.0, 5.0, 4);
        let january = comfort_score(21.0, 70.0, 14.0, 5.0, 1);
        assert_relative_eq!(april, 10.0 - (1.0 + 2.0) * 0.9, epsilon = 1e-9);
        assert_relative_eq!(january, 10.0 - (1.3 + 3.0) * 0.9, epsilon = 1e-9);
    }

    #[test]
    fn test_summer_weights_uv_and_temperature() {
        let july = comfort_score(29.0, 50.0, 5.0, 9.0, 7);
        assert_relative_eq!(july, 10.0 - (1.3 + 1.5) * 0.9, epsilon = 1e-9);
    }

    #[test]
    fn test_seasonal_lookup() {
        assert_eq!(seasonal_weights(12), WINTER);
        assert_eq!(seasonal_weights(8), SUMMER);
        assert_eq!(seasonal_weights(10), NEUTRAL);
        assert_eq!(seasonal_weights(0), NEUTRAL);
        assert_eq!(seasonal_weights(13), NEUTRAL);
    }

    #[test]
    fn test_score_never_leaves_range() {
        let worst = comfort_score(-19.0, 100.0, 19.0, 10.0, 1);
        assert!((0.0..=10.0).contains(&worst));
    }

    #[test]
    fn test_rating_from_score() {
        assert_eq!(ComfortRating::from_score(9.1), ComfortRating::Excellent);
        assert_eq!(ComfortRating::from_score(6.0), ComfortRating::Good);
        assert_eq!(ComfortRating::from_score(4.5), ComfortRating::Fair);
        assert_eq!(ComfortRating::from_score(2.5), ComfortRating::Poor);
        assert_eq!(ComfortRating::from_score(2.0), ComfortRating::Severe);
        assert_eq!(ComfortRating::NoData.to_string(), "no data");
    }
}
