//! This module provides [`ClimateAnalyzer`], the main entry point for asking
//! "what is the weather usually like here on this date?" against a set of
//! historical daily records.

use crate::analysis::summary::summarize_with;
use crate::analysis::trend::trend_for_location;
use crate::analysis::window::{locations, select_window, select_window_wrapping};
use crate::config::AnalysisConfig;
use crate::error::ClimateError;
use crate::types::any_date::AnyDate;
use crate::types::observation::RawObservationRecord;
use crate::types::summary::WeatherSummary;
use crate::types::trend_series::TrendSeries;
use crate::types::variable::Variable;
use crate::types::window::AnalysisWindow;
use bon::bon;
use log::debug;

/// Owns a full historical record set (possibly spanning several locations) and
/// answers summary and trend requests against it.
///
/// The analyzer holds no mutable state; every request is computed from scratch,
/// so a shared `&ClimateAnalyzer` can serve concurrent requests.
///
/// # Examples
///
/// ```rust
/// # use climate_profile::{ClimateAnalyzer, ClimateError, RawObservationRecord, Variable};
/// # fn main() -> Result<(), ClimateError> {
/// let records: Vec<RawObservationRecord> = (2000..2025)
///     .map(|year| {
///         RawObservationRecord::builder()
///             .location("new_york")
///             .year(year)
///             .day_of_year(186)
///             .max_temperature(29.0)
///             .min_temperature(21.0)
///             .humidity(65.0)
///             .wind_speed(3.5)
///             .precipitation(2.0)
///             .uv_index(7.0)
///             .build()
///     })
///     .collect();
/// let analyzer = ClimateAnalyzer::new(records);
///
/// // July 4th, any year: day 186 in a leap year, 185 otherwise.
/// let summary = analyzer
///     .summary()
///     .location("New York")
///     .date("2024-07-04")
///     .call()?;
/// assert_eq!(summary.years, 25);
/// assert_eq!(summary.temperature.average, 25.0);
///
/// let trend = analyzer
///     .trend()
///     .location("New York")
///     .variable("uv".parse::<Variable>()?)
///     .call();
/// assert_eq!(trend.len(), 25);
/// # Ok(())
/// # }
/// ```
pub struct ClimateAnalyzer {
    records: Vec<RawObservationRecord>,
    config: AnalysisConfig,
}

#[bon]
impl ClimateAnalyzer {
    /// Creates an analyzer with the default [`AnalysisConfig`].
    pub fn new(records: Vec<RawObservationRecord>) -> Self {
        Self::with_config(records, AnalysisConfig::default())
    }

    pub fn with_config(records: Vec<RawObservationRecord>, config: AnalysisConfig) -> Self {
        debug!(
            "Analyzer loaded with {} records across {} locations",
            records.len(),
            locations(&records).len()
        );
        Self { records, config }
    }

    pub fn records(&self) -> &[RawObservationRecord] {
        &self.records
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Distinct normalized location names in the record set.
    pub fn locations(&self) -> Vec<String> {
        locations(&self.records)
    }

    /// Resolves the analysis window for a request without running it.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(&str)`: **Required.** Location name; case and `_`/space are ignored.
    /// * `.date(impl AnyDate)`: **Required.** Target date (`NaiveDate` or `"YYYY-MM-DD"`).
    /// * `.tolerance(u32)`: Optional. ± days; defaults to the configured tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::DateParsing`] if the date cannot be resolved.
    #[builder]
    pub fn window<D: AnyDate + ToString + Clone>(
        &self,
        location: &str,
        date: D,
        tolerance: Option<u32>,
    ) -> Result<AnalysisWindow, ClimateError> {
        self.resolve_window(location, date, tolerance)
    }

    /// Summarizes the historical records around a calendar date.
    ///
    /// This method uses a builder pattern with the same arguments as
    /// [`ClimateAnalyzer::window`]. The month of the target date drives the
    /// seasonal weighting of the comfort score.
    ///
    /// A window that matches no records is not an error: it returns
    /// [`WeatherSummary::empty`] (`years == 0`).
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::DateParsing`] if the date cannot be resolved.
    #[builder]
    pub fn summary<D: AnyDate + ToString + Clone>(
        &self,
        location: &str,
        date: D,
        tolerance: Option<u32>,
    ) -> Result<WeatherSummary, ClimateError> {
        let window = self.resolve_window(location, date, tolerance)?;
        let selected = self.select(&window);
        Ok(summarize_with(
            &selected,
            window.month(),
            &self.config.thresholds,
        ))
    }

    /// Year-over-year series of `variable` for a location, over all of its
    /// records regardless of day-of-year.
    #[builder]
    pub fn trend(&self, location: &str, variable: Variable) -> TrendSeries {
        trend_for_location(&self.records, location, variable)
    }

    fn resolve_window<D: AnyDate + ToString + Clone>(
        &self,
        location: &str,
        date: D,
        tolerance: Option<u32>,
    ) -> Result<AnalysisWindow, ClimateError> {
        let date = date
            .clone()
            .resolve_date()
            .ok_or_else(|| ClimateError::DateParsing(date.to_string()))?;
        let tolerance = tolerance.unwrap_or(self.config.default_tolerance);
        Ok(AnalysisWindow::new(location, date, tolerance))
    }

    fn select(&self, window: &AnalysisWindow) -> Vec<RawObservationRecord> {
        if self.config.wrap_year_boundary {
            select_window_wrapping(
                &self.records,
                &window.location,
                window.target_day_of_year,
                window.tolerance,
            )
        } else {
            select_window(
                &self.records,
                &window.location,
                window.target_day_of_year,
                window.tolerance,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::comfort::ComfortRating;
    use chrono::NaiveDate;

    fn record(location: &str, year: i32, doy: u32, max: f64, min: f64) -> RawObservationRecord {
        RawObservationRecord::builder()
            .location(location)
            .year(year)
            .day_of_year(doy)
            .max_temperature(max)
            .min_temperature(min)
            .humidity(50.0)
            .wind_speed(5.0)
            .precipitation(0.5)
            .uv_index(4.0)
            .build()
    }

    fn sample_records() -> Vec<RawObservationRecord> {
        let mut records = Vec::new();
        for year in 2000..2010 {
            for doy in 1..=365 {
                records.push(record("Boston", year, doy, 20.0, 10.0));
            }
            records.push(record("Paris", year, 100, 18.0, 8.0));
        }
        records
    }

    #[test]
    fn test_summary_with_default_tolerance() -> Result<(), ClimateError> {
        let analyzer = ClimateAnalyzer::new(sample_records());
        let summary = analyzer
            .summary()
            .location("boston")
            .date("2023-04-10")
            .call()?;

        // 11 days × 10 years
        assert_eq!(summary.years, 110);
        assert_eq!(summary.temperature.average, 15.0);
        Ok(())
    }

    #[test]
    fn test_summary_with_explicit_tolerance_and_naive_date() -> Result<(), ClimateError> {
        let analyzer = ClimateAnalyzer::new(sample_records());
        let date = NaiveDate::from_ymd_opt(2021, 4, 10).unwrap();
        let summary = analyzer
            .summary()
            .location("BOSTON")
            .date(date)
            .tolerance(0)
            .call()?;
        assert_eq!(summary.years, 10);
        Ok(())
    }

    #[test]
    fn test_unparsable_date_is_an_error() {
        let analyzer = ClimateAnalyzer::new(sample_records());
        let result = analyzer.summary().location("Boston").date("next tuesday").call();
        assert!(matches!(result, Err(ClimateError::DateParsing(ref d)) if d == "next tuesday"));
    }

    #[test]
    fn test_unknown_location_gives_empty_summary() -> Result<(), ClimateError> {
        let analyzer = ClimateAnalyzer::new(sample_records());
        let summary = analyzer.summary().location("Atlantis").date("2020-06-01").call()?;
        assert!(summary.is_empty());
        assert_eq!(summary.comfort_rating, ComfortRating::NoData);
        Ok(())
    }

    #[test]
    fn test_year_boundary_wrapping_follows_config() -> Result<(), ClimateError> {
        let plain = ClimateAnalyzer::new(sample_records());
        let wrapping = ClimateAnalyzer::with_config(
            sample_records(),
            AnalysisConfig::builder().wrap_year_boundary(true).build(),
        );

        let plain_summary = plain.summary().location("Boston").date("2023-01-02").call()?;
        let wrapped_summary = wrapping.summary().location("Boston").date("2023-01-02").call()?;

        // Days 1..=7 only, versus 1..=7 plus the last days of the previous year:
        // 362..=365 in common years, 363..=365 in the leap years 2000, 2004, 2008
        // (day 366 is absent from the sample).
        assert_eq!(plain_summary.years, 70);
        assert_eq!(wrapped_summary.years, 70 + 7 * 4 + 3 * 3);
        Ok(())
    }

    #[test]
    fn test_window_resolution() -> Result<(), ClimateError> {
        let analyzer = ClimateAnalyzer::new(vec![]);
        let window = analyzer
            .window()
            .location("Paris")
            .date("2024-03-01")
            .tolerance(3)
            .call()?;
        assert_eq!(window.target_day_of_year, 61);
        assert_eq!(window.tolerance, 3);
        assert_eq!(window.month(), 3);
        Ok(())
    }

    #[test]
    fn test_trend_and_locations() {
        let analyzer = ClimateAnalyzer::new(sample_records());
        assert_eq!(analyzer.locations(), vec!["boston", "paris"]);

        let trend = analyzer
            .trend()
            .location("paris")
            .variable(Variable::Temperature)
            .call();
        assert_eq!(trend.len(), 10);
        assert!(trend.values().iter().all(|v| *v == 13.0));
    }
}
