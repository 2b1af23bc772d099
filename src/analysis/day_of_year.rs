use chrono::{Datelike, NaiveDate};

/// Ordinal day of `date` within its year: days elapsed since January 1, plus one.
///
/// January 1 is day 1. Leap years are not special-cased: March 1 simply lands on
/// day 61 in a leap year and day 60 otherwise, because February 29 is one more
/// elapsed day. `NaiveDate` cannot hold an invalid calendar date, so there is no
/// error case.
///
/// ```
/// use climate_profile::day_of_year;
/// use chrono::NaiveDate;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// assert_eq!(day_of_year(d(2023, 1, 1)), 1);
/// assert_eq!(day_of_year(d(2023, 12, 31)), 365);
/// assert_eq!(day_of_year(d(2024, 12, 31)), 366);
/// ```
pub fn day_of_year(date: NaiveDate) -> u32 {
    match NaiveDate::from_ymd_opt(date.year(), 1, 1) {
        Some(january_first) => (date - january_first).num_days() as u32 + 1,
        None => date.ordinal(),
    }
}

/// Number of days in `year` (365 or 366).
pub(crate) fn days_in_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .map(day_of_year)
        .unwrap_or(365)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_days_of_year() {
        assert_eq!(day_of_year(date(2021, 1, 1)), 1);
        assert_eq!(day_of_year(date(2021, 1, 2)), 2);
        assert_eq!(day_of_year(date(2021, 2, 1)), 32);
    }

    #[test]
    fn test_leap_year_shifts_days_after_february() {
        assert_eq!(day_of_year(date(2023, 3, 1)), 60);
        assert_eq!(day_of_year(date(2024, 3, 1)), 61);
        assert_eq!(day_of_year(date(2024, 2, 29)), 60);
    }

    #[test]
    fn test_matches_chrono_ordinal_for_every_day() {
        let mut d = date(2000, 1, 1);
        while d.year() < 2002 {
            assert_eq!(day_of_year(d), d.ordinal(), "mismatch on {d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(2023), 365);
    }
}
