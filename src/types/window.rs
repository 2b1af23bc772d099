use crate::analysis::day_of_year::day_of_year;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default ± tolerance, in days, around the target day-of-year.
pub const DEFAULT_TOLERANCE_DAYS: u32 = 5;

/// The parameters of a single analysis request, with the target day-of-year
/// already resolved.
///
/// A window is built fresh for each request and is never mutated afterwards.
/// Tolerance is unsigned so a negative window cannot be expressed.
///
/// ```
/// use climate_profile::AnalysisWindow;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let window = AnalysisWindow::new("Denver", date, 7);
///
/// assert_eq!(window.target_day_of_year, 61); // leap year
/// assert_eq!(window.month(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisWindow {
    pub location: String,
    pub date: NaiveDate,
    pub tolerance: u32,
    pub target_day_of_year: u32,
}

impl AnalysisWindow {
    pub fn new(location: impl Into<String>, date: NaiveDate, tolerance: u32) -> Self {
        Self {
            location: location.into(),
            date,
            tolerance,
            target_day_of_year: day_of_year(date),
        }
    }

    /// Window with the default tolerance of [`DEFAULT_TOLERANCE_DAYS`].
    pub fn with_default_tolerance(location: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(location, date, DEFAULT_TOLERANCE_DAYS)
    }

    /// Calendar month (1-12) of the target date, used for seasonal weighting.
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}
