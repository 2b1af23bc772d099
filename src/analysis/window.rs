//! Selection of the historical records that fall inside an analysis window.
//!
//! Every function here returns a fresh `Vec` of cloned records; the caller's slice
//! is never modified and the result shares no memory with it.

use crate::analysis::day_of_year::days_in_year;
use crate::types::observation::RawObservationRecord;
use log::{debug, warn};
use std::collections::BTreeSet;

/// Normalizes a location name for comparison: case-insensitive, with underscores
/// and spaces treated as the same separator.
///
/// ```
/// use climate_profile::normalize_location;
///
/// assert_eq!(normalize_location("new_york"), normalize_location("New York"));
/// assert_eq!(normalize_location("  Rio_de Janeiro "), "rio de janeiro");
/// ```
pub fn normalize_location(location: &str) -> String {
    location
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inclusive `[target - tolerance, target + tolerance]` test on raw day-of-year
/// integers.
///
/// The range does not wrap around the year boundary: for a target of day 2 with a
/// tolerance of 5, day 364 of the previous year is not included. Windows near
/// January 1 or December 31 are therefore under-filled. This is kept for
/// compatibility with existing results; see [`select_window_wrapping`] for the
/// opt-in alternative.
fn in_day_window(day_of_year: u32, target_doy: u32, tolerance: u32) -> bool {
    let day = i64::from(day_of_year);
    let target = i64::from(target_doy);
    let tolerance = i64::from(tolerance);
    (target - tolerance..=target + tolerance).contains(&day)
}

/// Circular distance between a record's day and the target, measured on the
/// record's own year length.
fn in_wrapping_day_window(record: &RawObservationRecord, target_doy: u32, tolerance: u32) -> bool {
    let year_length = days_in_year(record.year).max(target_doy);
    let direct = record.day_of_year.abs_diff(target_doy);
    let around = year_length.saturating_sub(direct);
    direct.min(around) <= tolerance
}

/// Filtering helpers for slices of observation records.
pub trait ObservationFilterExt {
    /// Records whose location matches `location` after [`normalize_location`].
    fn filter_location(&self, location: &str) -> Vec<RawObservationRecord>;

    /// Records whose day-of-year lies within `tolerance` days of `target_doy`
    /// (inclusive, non-wrapping).
    fn filter_day_window(&self, target_doy: u32, tolerance: u32) -> Vec<RawObservationRecord>;
}

impl ObservationFilterExt for [RawObservationRecord] {
    fn filter_location(&self, location: &str) -> Vec<RawObservationRecord> {
        let wanted = normalize_location(location);
        self.iter()
            .filter(|r| normalize_location(&r.location) == wanted)
            .cloned()
            .collect()
    }

    fn filter_day_window(&self, target_doy: u32, tolerance: u32) -> Vec<RawObservationRecord> {
        self.iter()
            .filter(|r| in_day_window(r.day_of_year, target_doy, tolerance))
            .cloned()
            .collect()
    }
}

/// Selects the records of `location` within `tolerance` days of `target_doy`.
///
/// ```
/// use climate_profile::{select_window, RawObservationRecord};
///
/// let records: Vec<_> = [94, 95, 100, 105, 106]
///     .into_iter()
///     .map(|doy| {
///         RawObservationRecord::builder()
///             .location("new_york")
///             .year(2010)
///             .day_of_year(doy)
///             .build()
///     })
///     .collect();
///
/// let selected = select_window(&records, "New York", 100, 5);
/// let days: Vec<u32> = selected.iter().map(|r| r.day_of_year).collect();
/// assert_eq!(days, vec![95, 100, 105]);
/// ```
pub fn select_window(
    records: &[RawObservationRecord],
    location: &str,
    target_doy: u32,
    tolerance: u32,
) -> Vec<RawObservationRecord> {
    let selected = select_matching(records, location, |r| {
        in_day_window(r.day_of_year, target_doy, tolerance)
    });
    log_selection(location, target_doy, tolerance, selected.len());
    selected
}

/// Like [`select_window`], but the window wraps around the year boundary, so a
/// target of January 2 also picks up late-December records.
///
/// Distances are measured on each record's own year length (365 or 366 days).
pub fn select_window_wrapping(
    records: &[RawObservationRecord],
    location: &str,
    target_doy: u32,
    tolerance: u32,
) -> Vec<RawObservationRecord> {
    let selected = select_matching(records, location, |r| {
        in_wrapping_day_window(r, target_doy, tolerance)
    });
    log_selection(location, target_doy, tolerance, selected.len());
    selected
}

/// Distinct normalized location names present in `records`, sorted.
pub fn locations(records: &[RawObservationRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| normalize_location(&r.location))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn select_matching(
    records: &[RawObservationRecord],
    location: &str,
    in_window: impl Fn(&RawObservationRecord) -> bool,
) -> Vec<RawObservationRecord> {
    let wanted = normalize_location(location);
    records
        .iter()
        .filter(|r| normalize_location(&r.location) == wanted && in_window(r))
        .cloned()
        .collect()
}

fn log_selection(location: &str, target_doy: u32, tolerance: u32, count: usize) {
    if count == 0 {
        warn!(
            "No records for '{}' within {} days of day {}",
            location, tolerance, target_doy
        );
    } else {
        debug!(
            "Selected {} records for '{}' around day {} (±{})",
            count, location, target_doy, tolerance
        );
    }
}
