//! Historical weather profiles for a place and a calendar date.
//!
//! Given ~25 years of daily observation records, the crate selects the days
//! around a target day-of-year, aggregates them into robust statistics, derives a
//! soil moisture proxy and a seasonally weighted comfort score, and builds
//! year-over-year trend series. Everything runs in memory on records supplied by
//! the caller; nothing here performs I/O.

mod analysis;
mod analyzer;
mod config;
mod error;
mod types;

pub use analyzer::ClimateAnalyzer;
pub use config::AnalysisConfig;
pub use error::ClimateError;

pub use analysis::comfort::{comfort_score, seasonal_weights, ComfortRating, SeasonalWeights};
pub use analysis::data_quality::{estimate_data_quality, DataQuality};
pub use analysis::day_of_year::day_of_year;
pub use analysis::regression::{linear_regression, RegressionFit};
pub use analysis::soil_moisture::{
    evapotranspiration, soil_moisture, soil_moisture_proxy, soil_moisture_series,
};
pub use analysis::statistics::{aggregate, Thresholds, VariableStatistics, WindowStatistics};
pub use analysis::summary::{summarize, summarize_with};
pub use analysis::trend::{trend, trend_for_location};
pub use analysis::window::{
    locations, normalize_location, select_window, select_window_wrapping, ObservationFilterExt,
};

pub use types::any_date::AnyDate;
pub use types::observation::{RawObservationRecord, MISSING_SENTINEL};
pub use types::summary::{ThresholdProbabilities, WeatherSummary};
pub use types::trend_series::{TrendPoint, TrendSeries};
pub use types::variable::Variable;
pub use types::window::{AnalysisWindow, DEFAULT_TOLERANCE_DAYS};
