//! Contact records as supplied by import sources, and the validity filter
//! that admits them into milestone computation.

use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::consts::MIN_PLAUSIBLE_YEAR;
use crate::locale::{DateField, LocaleSpec};

/// A year/month/day triple where any field may be unknown, typically the
/// result of imperfect text extraction. Absence means "unknown", which is
/// deliberately distinct from any sentinel value (zero is not a calendar
/// value anyway). Never used for arithmetic; upgrade through
/// [`CalendarDate::new`] first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PartialDate {
    /// Whether all three components are present.
    pub const fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Diagnostic rendering with `??`/`????` standing in for unknown
    /// components, in the locale's component order. Lets a human see
    /// exactly which parts of a birthday failed to parse.
    pub fn with_placeholders(&self, locale: &LocaleSpec) -> String {
        let parts = locale.order.map(|field| match field {
            DateField::Day => self
                .day
                .map_or_else(|| "??".to_owned(), |day| format!("{day:02}")),
            DateField::Month => self
                .month
                .map_or_else(|| "??".to_owned(), |month| format!("{month:02}")),
            DateField::Year => self
                .year
                .map_or_else(|| "????".to_owned(), |year| format!("{year:04}")),
        });
        parts.join(&locale.separator.to_string())
    }
}

/// The universal shape produced by any import source (vCard file or remote
/// contacts API) before validation. Serde names match the remote-API record
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContact {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday_raw_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday_parsed: Option<PartialDate>,
}

/// A contact with a complete, plausible birth date. Only produced by
/// [`select_valid_contacts`]; carries no back-reference to the raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidContact {
    pub name: String,
    pub birthday: CalendarDate,
}

/// Screens raw contacts down to the ones usable for milestone computation:
/// day, month and year all present, and year at least 1900. Everything else
/// is dropped silently; callers wanting rejection counts can re-scan the
/// input against the returned set.
pub fn select_valid_contacts(contacts: &[RawContact]) -> Vec<ValidContact> {
    contacts
        .iter()
        .filter_map(|contact| {
            let parsed = contact.birthday_parsed?;
            let (year, month, day) = (parsed.year?, parsed.month?, parsed.day?);
            if year < MIN_PLAUSIBLE_YEAR {
                return None;
            }
            // An impossible triple (say, Feb 30 from a mangled export) is a
            // rejection like any other, not an error that aborts the batch.
            let birthday = CalendarDate::new(year, month, day).ok()?;
            Some(ValidContact {
                name: contact.name.clone(),
                birthday,
            })
        })
        .collect()
}
