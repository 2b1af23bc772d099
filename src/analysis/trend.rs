//! Year-over-year series of one variable across the full record set.
//!
//! Unlike the summary path, trends ignore the day-of-year window: every record of
//! the location contributes to its year's mean.

use crate::analysis::window::ObservationFilterExt;
use crate::types::observation::RawObservationRecord;
use crate::types::trend_series::{TrendPoint, TrendSeries};
use crate::types::variable::Variable;
use log::debug;
use std::collections::BTreeMap;

/// Groups `records` by year and averages `variable`'s valid samples per year.
///
/// Years are emitted in ascending order. A year whose records hold no valid
/// sample for `variable` is left out entirely rather than reported as zero, so
/// the series can be shorter than the number of distinct years.
///
/// ```
/// use climate_profile::{trend, RawObservationRecord, Variable};
///
/// let record = |year, uv| {
///     RawObservationRecord::builder()
///         .location("Sydney")
///         .year(year)
///         .day_of_year(10)
///         .uv_index(uv)
///         .build()
/// };
/// let records = vec![record(2002, 10.0), record(2001, 8.0), record(2001, 12.0), record(2003, -999.0)];
///
/// let series = trend(&records, Variable::UvIndex);
/// assert_eq!(series.years(), vec![2001, 2002]);
/// assert_eq!(series.values(), vec![10.0, 10.0]);
/// ```
pub fn trend(records: &[RawObservationRecord], variable: Variable) -> TrendSeries {
    let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for record in records {
        if let Some(value) = variable.extract(record) {
            let (sum, count) = by_year.entry(record.year).or_insert((0.0, 0));
            *sum += value;
            *count += 1;
        }
    }

    let points: Vec<TrendPoint> = by_year
        .into_iter()
        .map(|(year, (sum, count))| TrendPoint {
            year,
            value: sum / count as f64,
        })
        .collect();

    debug!(
        "Trend for {} over {} records: {} yearly points",
        variable,
        records.len(),
        points.len()
    );

    TrendSeries { variable, points }
}

/// [`trend`] restricted to the records of one location (normalized match).
pub fn trend_for_location(
    records: &[RawObservationRecord],
    location: &str,
    variable: Variable,
) -> TrendSeries {
    trend(&records.filter_location(location), variable)
}
