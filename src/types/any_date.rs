use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that can be resolved to a single calendar date.
///
/// Strings are parsed as `YYYY-MM-DD`; datetimes are truncated to their date in
/// their own timezone. Returns `None` when the value cannot be resolved.
pub trait AnyDate {
    fn resolve_date(self) -> Option<NaiveDate>;
}

impl AnyDate for NaiveDate {
    fn resolve_date(self) -> Option<NaiveDate> {
        Some(self)
    }
}

impl AnyDate for &NaiveDate {
    fn resolve_date(self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl AnyDate for NaiveDateTime {
    fn resolve_date(self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> AnyDate for DateTime<Tz> {
    fn resolve_date(self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl AnyDate for &str {
    fn resolve_date(self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d").ok()
    }
}

impl AnyDate for String {
    fn resolve_date(self) -> Option<NaiveDate> {
        self.as_str().resolve_date()
    }
}

impl AnyDate for &String {
    fn resolve_date(self) -> Option<NaiveDate> {
        self.as_str().resolve_date()
    }
}
