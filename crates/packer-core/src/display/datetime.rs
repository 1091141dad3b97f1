//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting timestamps and trip
//! dates in a consistent, human-readable format.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A trip date as entered, shown as a short month and day (`Jul 15`).
///
/// Text that is not an ISO date is shown as-is. A missing date reads
/// `No date`.
pub struct ShortDate<'a>(pub Option<&'a str>);

impl<'a> fmt::Display for ShortDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "No date"),
            Some(raw) => match raw.trim().parse::<Date>() {
                Ok(date) => write!(f, "{}", date.strftime("%b %-d")),
                Err(_) => write!(f, "{raw}"),
            },
        }
    }
}

/// The date range of a trip, `Jul 15 - Jul 25`.
pub struct TripDates<'a> {
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

impl<'a> TripDates<'a> {
    pub fn new(start: Option<&'a str>, end: Option<&'a str>) -> Self {
        Self { start, end }
    }

    /// Whether either end of the range is known.
    pub fn is_set(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

impl<'a> fmt::Display for TripDates<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", ShortDate(self.start), ShortDate(self.end))
    }
}
