mod catalog;
mod consts;
mod contacts;
mod locale;
mod milestones;
mod prelude;
mod vcard;

pub use catalog::{SignificantDayCount, significant_day_counts};
pub use consts::*;
pub use contacts::{PartialDate, RawContact, ValidContact, select_valid_contacts};
pub use locale::{DateField, LocaleSpec};
pub use milestones::{
    Milestone, MilestoneWindow, build_birthday_number, compute_milestones,
    compute_milestones_for_lots_of_people,
};
pub use vcard::{BirthdayParts, extract_birthday};

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;
use std::str::FromStr;

/// A calendar date with no time-of-day component.
///
/// Always a real proleptic-Gregorian date; arithmetic can never produce an
/// invalid field triple. Because no hour/minute exists, "add a day" is a pure
/// calendar operation and DST transitions cannot shift the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The text has no recognizable date structure.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The year/month/day triple is not a real calendar date.
    #[error("Invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidComponents { year: i32, month: u32, day: u32 },
}

impl CalendarDate {
    /// Creates a date from a year/month/day triple, validating that the
    /// triple names a real calendar date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidComponents` for impossible triples
    /// (month 13, Feb 30, and so on).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidComponents { year, month, day })
    }

    /// Returns the year component
    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12)
    #[inline]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31)
    #[inline]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// The calendar date `days` later (negative values go backwards).
    /// Returns `None` only when the result would leave the supported
    /// calendar range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        let delta = TimeDelta::try_days(days)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    /// Signed day count `a - b`: positive when `a` is chronologically
    /// after `b`. Exact; there is no fractional time to drift.
    pub fn days_between(a: Self, b: Self) -> i64 {
        a.0.signed_duration_since(b.0).num_days()
    }

    /// Today according to the host's local wall clock, truncated to a date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses a date-like string, discarding any time-of-day and timezone
    /// offset. Formats are tried in order; the first match wins:
    /// ISO date, RFC 3339 date-time, naive ISO date-time, compact `YYYYMMDD`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` when no format matches.
    pub fn from_text(text: &str) -> Result<Self, DateError> {
        let trimmed = text.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
            })
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y%m%d"))
            .map(Self)
            .map_err(|_| DateError::InvalidDate(text.to_owned()))
    }

    /// Renders the date for display in the given locale's component order
    /// and separator. Display only; never used for arithmetic.
    pub fn to_localized_string(self, locale: &LocaleSpec) -> String {
        locale.format_full(self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DateError::InvalidDate(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
