//! Locale-dependent date component ordering.
//!
//! The milestone numeral and display formatting only need to know which
//! order a locale writes day/month/year in and what separator it uses, so
//! that narrow slice is modeled here instead of pulling in a locale
//! database. Locales outside the built-in table are supported by
//! constructing a [`LocaleSpec`] by hand.

use crate::CalendarDate;

/// One numeric component of a rendered date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Day,
    Month,
    Year,
}

/// The ordering and separator a locale uses when writing a numeric date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleSpec {
    pub order: [DateField; 3],
    pub separator: char,
}

impl LocaleSpec {
    /// Month-first ordering with slashes (US convention)
    pub const fn month_first() -> Self {
        Self {
            order: [DateField::Month, DateField::Day, DateField::Year],
            separator: '/',
        }
    }

    /// Day-first ordering with slashes (UK/AU convention)
    pub const fn day_first() -> Self {
        Self {
            order: [DateField::Day, DateField::Month, DateField::Year],
            separator: '/',
        }
    }

    /// Day-first ordering with dots (German convention)
    pub const fn day_first_dotted() -> Self {
        Self {
            order: [DateField::Day, DateField::Month, DateField::Year],
            separator: '.',
        }
    }

    /// Looks up a built-in spec for a BCP 47 language tag.
    /// Returns `None` for tags outside the built-in table; callers may
    /// construct their own [`LocaleSpec`] for those.
    pub fn for_tag(tag: &str) -> Option<Self> {
        match tag {
            "en-US" => Some(Self::month_first()),
            "en-AU" | "en-GB" | "en-NZ" | "en-IE" => Some(Self::day_first()),
            "de-DE" | "de-AT" | "de-CH" => Some(Self::day_first_dotted()),
            _ => None,
        }
    }

    /// The component rendered as the locale naturally writes it: day and
    /// month without leading zeros, year as its last two digits.
    pub(crate) fn natural_component(date: CalendarDate, field: DateField) -> String {
        match field {
            DateField::Day => date.day().to_string(),
            DateField::Month => date.month().to_string(),
            DateField::Year => format!("{:02}", date.year().rem_euclid(100)),
        }
    }

    /// Full display rendering: two-digit day/month, four-digit year.
    pub(crate) fn format_full(&self, date: CalendarDate) -> String {
        let parts = self.order.map(|field| match field {
            DateField::Day => format!("{:02}", date.day()),
            DateField::Month => format!("{:02}", date.month()),
            DateField::Year => format!("{:04}", date.year()),
        });
        parts.join(&self.separator.to_string())
    }
}

impl Default for LocaleSpec {
    fn default() -> Self {
        Self::month_first()
    }
}
