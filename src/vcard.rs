//! Extraction of partial birth dates from vCard `BDAY` property text.
//!
//! The BDAY grammar differs between vCard 3 and vCard 4 and real exports mix
//! them freely; all of these are technically valid:
//!
//! ```text
//! 19960415
//! --0415
//! 19531015T231000Z
//! 1987-09-27T08:30:00-06:00
//! ```
//!
//! Matchers are tried in order and the first match wins. Text nothing
//! matches degrades to "no parse", never an error; the caller keeps the raw
//! text for diagnostic display.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::consts::UNKNOWN_COMPONENT;
use crate::contacts::PartialDate;

static MATCHERS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        // Compact form: year (4 or 2 digits, or the -- placeholder), month,
        // day, terminated by end-of-string or an embedded time after 'T'.
        Regex::new(r"^(?P<year>\d{4}|\d{2}|--)(?P<month>\d{2}|--)(?P<day>\d{2}|--)($|T)")
            .expect("compact BDAY pattern"),
        // Dashed ISO form, same termination rule.
        Regex::new(r"^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})($|T)")
            .expect("dashed BDAY pattern"),
    ]
});

/// Birth date components as matched from BDAY text: digit strings, each
/// absent when the text carried a `--` placeholder (or the vendor omit-year
/// marker). Convert with [`BirthdayParts::to_partial_date`] before any use
/// in arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayParts {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl BirthdayParts {
    /// Numeric view of the matched components. Two-digit year text is taken
    /// literally (e.g. `"96"` becomes year 96): the compact encoding gives
    /// no century to infer, and guessing one would silently fabricate data.
    pub fn to_partial_date(&self) -> PartialDate {
        PartialDate {
            year: self.year.as_deref().and_then(|s| s.parse().ok()),
            month: self.month.as_deref().and_then(|s| s.parse().ok()),
            day: self.day.as_deref().and_then(|s| s.parse().ok()),
        }
    }
}

fn component(text: &str, omit_if_match: Option<&str>) -> Option<String> {
    if text == UNKNOWN_COMPONENT {
        return None;
    }
    if omit_if_match == Some(text) {
        return None;
    }
    Some(text.to_owned())
}

fn extract_one(text: &str, omit_year_marker: Option<&str>) -> Option<BirthdayParts> {
    MATCHERS.iter().find_map(|matcher| {
        let caps = matcher.captures(text)?;
        Some(BirthdayParts {
            year: component(&caps["year"], omit_year_marker),
            month: component(&caps["month"], None),
            day: component(&caps["day"], None),
        })
    })
}

/// Extracts a partial birth date from a contact's BDAY values.
///
/// A contact may technically carry more than one BDAY; values are tried in
/// encounter order and the first one that parses wins. An empty slice, or a
/// set where nothing parses, yields `None`.
///
/// `omit_year_marker` carries the vendor convention (Apple's
/// `X-APPLE-OMIT-YEAR` parameter) where a year is present in the raw text
/// purely for format compliance: a matched year equal to the marker is
/// treated as unknown.
pub fn extract_birthday<S: AsRef<str>>(
    values: &[S],
    omit_year_marker: Option<&str>,
) -> Option<BirthdayParts> {
    values
        .iter()
        .find_map(|value| extract_one(value.as_ref(), omit_year_marker))
}
