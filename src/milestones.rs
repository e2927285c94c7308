//! Milestone generation: which notable day-counts fall inside a date window,
//! and on which calendar dates they land.

use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::catalog::{SignificantDayCount, significant_day_counts};
use crate::consts::{DEFAULT_LOOKAHEAD_DAYS, DEFAULT_LOOKBACK_DAYS, GROUP_SEPARATOR};
use crate::locale::{DateField, LocaleSpec};
use crate::prelude::*;

/// A labeled anniversary: someone is `formatted_label` days old on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(fmt = "{} on {}", formatted_label, date)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub formatted_label: String,
    pub date: CalendarDate,
}

/// Absolute date bounds for milestone generation. A `None` bound falls back
/// to the default window around today: 60 days back, ~3 years ahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MilestoneWindow {
    pub earliest: Option<CalendarDate>,
    pub latest: Option<CalendarDate>,
}

impl MilestoneWindow {
    /// A fully explicit window.
    pub const fn between(earliest: CalendarDate, latest: CalendarDate) -> Self {
        Self {
            earliest: Some(earliest),
            latest: Some(latest),
        }
    }
}

/// Derives a number that's loosely a representation of the birth date
/// itself, written out in the locale's day/month ordering with a two-digit
/// year. Returns the punctuated label and the digit string parsed base-10.
///
/// Most people reading a milestone list are between 10k and 30k days old,
/// so a five-or-six-digit numeral lands in the same range as the catalog.
/// If the locale's first component would render with a single digit, the
/// day and month are zero-padded to keep the digit count stable per locale;
/// otherwise each component keeps its natural rendering.
pub fn build_birthday_number(date: CalendarDate, locale: &LocaleSpec) -> (String, i64) {
    let naturals = locale.order.map(|field| LocaleSpec::natural_component(date, field));
    let should_pad = naturals[0].len() == 1;

    let mut rendered: Vec<String> = Vec::with_capacity(3);
    for (field, text) in locale.order.into_iter().zip(naturals) {
        if should_pad && text.len() == 1 && !matches!(field, DateField::Year) {
            rendered.push(format!("0{text}"));
        } else {
            rendered.push(text);
        }
    }

    // The digit string may carry a leading zero, so fold it manually rather
    // than round-tripping through a parse that would reject nothing anyway.
    let value = rendered
        .concat()
        .bytes()
        .fold(0_i64, |acc, b| acc * 10 + i64::from(b - b'0'));
    let label = rendered.join(&locale.separator.to_string());

    (label, value)
}

/// Thousands-grouped rendering of a day-count ("31415" -> "31,415").
fn group_thousands(days: i64) -> String {
    let digits = days.to_string();
    let lead = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

fn decorate(label: &str, days: i64) -> String {
    if label.is_empty() {
        group_thousands(days)
    } else {
        format!("{} ({})", label, group_thousands(days))
    }
}

/// Milestones for one birth date, restricted to the window and smallest
/// day-counts first. A missing birth date yields no milestones rather than
/// an error. The window bounds are converted to day-count cutoffs and the
/// pre-sorted catalog is sliced with a binary search; the birthday numeral
/// (caller-default locale) joins the set when its value fits the cutoffs.
pub fn compute_milestones(
    birth: Option<CalendarDate>,
    window: &MilestoneWindow,
    limit: Option<usize>,
) -> Vec<Milestone> {
    let Some(birth) = birth else {
        return Vec::new();
    };

    let today = CalendarDate::today();
    let earliest = window
        .earliest
        .or_else(|| today.add_days(-DEFAULT_LOOKBACK_DAYS))
        .unwrap_or(today);
    let latest = window
        .latest
        .or_else(|| today.add_days(DEFAULT_LOOKAHEAD_DAYS))
        .unwrap_or(today);

    let earliest_cutoff = CalendarDate::days_between(earliest, birth);
    let latest_cutoff = CalendarDate::days_between(latest, birth);

    let catalog = significant_day_counts();
    let start = catalog.partition_point(|entry| entry.days < earliest_cutoff);
    let end = catalog.partition_point(|entry| entry.days < latest_cutoff);
    let relevant: &[SignificantDayCount] = if start < end { &catalog[start..end] } else { &[] };

    let mut picked: Vec<(String, i64)> = relevant
        .iter()
        .map(|entry| (entry.label.to_owned(), entry.days))
        .collect();

    let (birthday_label, birthday_days) = build_birthday_number(birth, &LocaleSpec::default());
    if birthday_days >= earliest_cutoff && birthday_days <= latest_cutoff {
        picked.push((birthday_label, birthday_days));
        // tiny set, a full re-sort after the single insertion is fine
        picked.sort_by_key(|&(_, days)| days);
    }

    if let Some(limit) = limit {
        picked.truncate(limit);
    }

    picked
        .into_iter()
        .filter_map(|(label, days)| {
            let date = birth.add_days(days)?;
            Some(Milestone {
                formatted_label: decorate(&label, days),
                date,
            })
        })
        .collect()
}

/// Milestones for a whole contact list, merged into one sequence ordered by
/// absolute date: the globally meaningful "what's coming up next" order.
/// Every person shares the same window; no per-person limit applies.
pub fn compute_milestones_for_lots_of_people<'a, P, F>(
    people: &'a [P],
    get_birthday: F,
    window: &MilestoneWindow,
) -> Vec<(&'a P, Milestone)>
where
    F: Fn(&'a P) -> CalendarDate,
{
    let mut merged: Vec<(&'a P, Milestone)> = Vec::new();
    for person in people {
        let birthday = get_birthday(person);
        for milestone in compute_milestones(Some(birthday), window, None) {
            merged.push((person, milestone));
        }
    }
    merged.sort_by_key(|entry| entry.1.date);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn window_from_birth(birth: CalendarDate, lo: i64, hi: i64) -> MilestoneWindow {
        MilestoneWindow::between(
            birth.add_days(lo).unwrap(),
            birth.add_days(hi).unwrap(),
        )
    }

    #[test]
    fn test_birthday_number_locale_table() {
        let cases = [
            ("en-US", date(1989, 6, 15), "06/15/89", 61589),
            ("en-US", date(1989, 6, 2), "06/02/89", 60289),
            ("en-US", date(1989, 11, 2), "11/2/89", 11289),
            ("en-US", date(1989, 11, 22), "11/22/89", 112289),
            ("en-AU", date(1989, 6, 15), "15/6/89", 15689),
            ("en-AU", date(1989, 6, 2), "02/06/89", 20689),
            ("en-AU", date(1989, 11, 2), "02/11/89", 21189),
            ("en-AU", date(1989, 11, 22), "22/11/89", 221189),
            ("de-DE", date(1989, 6, 15), "15.6.89", 15689),
            ("de-DE", date(1989, 6, 2), "02.06.89", 20689),
            ("de-DE", date(1989, 11, 2), "02.11.89", 21189),
            ("de-DE", date(1989, 11, 22), "22.11.89", 221189),
        ];
        for (tag, birth, expected_label, expected_value) in cases {
            let spec = LocaleSpec::for_tag(tag).unwrap();
            let (label, value) = build_birthday_number(birth, &spec);
            assert_eq!(label, expected_label, "label for {tag} / {birth}");
            assert_eq!(value, expected_value, "value for {tag} / {birth}");
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(31415), "31,415");
        assert_eq!(group_thousands(123), "123");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_milestones_in_explicit_window() {
        let birth = date(1989, 6, 15);
        let window = window_from_birth(birth, 10_000, 13_000);
        let milestones = compute_milestones(Some(birth), &window, None);

        let labels: Vec<&str> = milestones
            .iter()
            .map(|m| m.formatted_label.as_str())
            .collect();
        assert_eq!(labels, ["10,000", "11,000", "11,111", "12,000", "12,345"]);

        assert_eq!(milestones[0].date, birth.add_days(10_000).unwrap());
        assert_eq!(milestones[4].date, birth.add_days(12_345).unwrap());
    }

    #[test]
    fn test_latest_bound_is_exclusive_for_catalog_entries() {
        let birth = date(1989, 6, 15);
        let window = window_from_birth(birth, 10_000, 11_000);
        let milestones = compute_milestones(Some(birth), &window, None);
        let labels: Vec<&str> = milestones
            .iter()
            .map(|m| m.formatted_label.as_str())
            .collect();
        assert_eq!(labels, ["10,000"]);
    }

    #[test]
    fn test_pi_milestone_is_decorated() {
        let birth = date(1989, 6, 15);
        let window = window_from_birth(birth, 31_000, 32_000);
        let milestones = compute_milestones(Some(birth), &window, None);
        let labels: Vec<&str> = milestones
            .iter()
            .map(|m| m.formatted_label.as_str())
            .collect();
        assert_eq!(labels, ["31,000", "π (31,415)"]);
    }

    #[test]
    fn test_birthday_numeral_joins_the_set() {
        // 1989-06-15 in the default locale is 61589, beyond every catalog
        // entry, so a window around it contains only the numeral milestone.
        let birth = date(1989, 6, 15);
        let window = window_from_birth(birth, 61_000, 62_000);
        let milestones = compute_milestones(Some(birth), &window, None);
        assert_eq!(milestones.len(), 1);
        assert_eq!(milestones[0].formatted_label, "06/15/89 (61,589)");
        assert_eq!(milestones[0].date, birth.add_days(61_589).unwrap());
    }

    #[test]
    fn test_birthday_numeral_outside_window_is_dropped() {
        let birth = date(1989, 6, 15);
        let window = window_from_birth(birth, 10_000, 13_000);
        let milestones = compute_milestones(Some(birth), &window, None);
        assert!(
            milestones
                .iter()
                .all(|m| !m.formatted_label.contains('/'))
        );
    }

    #[test]
    fn test_range_containment() {
        let birth = date(1989, 6, 15);
        let earliest = date(2020, 1, 1);
        let latest = date(2023, 1, 1);
        let window = MilestoneWindow::between(earliest, latest);
        let milestones = compute_milestones(Some(birth), &window, None);
        assert!(!milestones.is_empty());
        for m in &milestones {
            assert!(earliest <= m.date && m.date <= latest, "{} escapes window", m.date);
        }
    }

    #[test]
    fn test_limit_truncates_smallest_first() {
        let birth = date(1989, 6, 15);
        let window = window_from_birth(birth, 10_000, 13_000);
        let limited = compute_milestones(Some(birth), &window, Some(3));
        assert_eq!(limited.len(), 3);
        assert_eq!(limited[0].formatted_label, "10,000");
        assert_eq!(limited[2].formatted_label, "11,111");
    }

    #[test]
    fn test_missing_birth_date_yields_nothing() {
        assert!(compute_milestones(None, &MilestoneWindow::default(), None).is_empty());
    }

    #[test]
    fn test_inverted_window_yields_nothing() {
        let birth = date(1989, 6, 15);
        let window = MilestoneWindow::between(date(2023, 1, 1), date(2020, 1, 1));
        assert!(compute_milestones(Some(birth), &window, None).is_empty());
    }

    #[test]
    fn test_default_window_tracks_today() {
        let birth = CalendarDate::today().add_days(-20_000).unwrap();
        let milestones = compute_milestones(Some(birth), &MilestoneWindow::default(), None);
        assert!(!milestones.is_empty());
        let today = CalendarDate::today();
        for m in &milestones {
            let offset = CalendarDate::days_between(m.date, today);
            // one day of slack in case the test straddles midnight
            assert!((-61..=1097).contains(&offset), "offset {offset} out of range");
        }
    }

    #[test]
    fn test_aggregator_orders_by_absolute_date() {
        let people = [
            ("alice".to_owned(), date(1989, 6, 15)),
            ("bob".to_owned(), date(1990, 3, 1)),
            ("carol".to_owned(), date(1961, 11, 5)),
        ];
        let window = MilestoneWindow::between(date(2030, 1, 1), date(2033, 1, 1));
        let merged = compute_milestones_for_lots_of_people(&people, |p| p.1, &window);

        assert!(!merged.is_empty());
        for pair in merged.windows(2) {
            assert!(pair[0].1.date <= pair[1].1.date);
        }

        let names: Vec<&str> = merged.iter().map(|(p, _)| p.0.as_str()).collect();
        assert!(names.contains(&"alice"));
        assert!(names.contains(&"bob"));
        assert!(names.contains(&"carol"));
    }

    #[test]
    fn test_aggregator_with_no_people() {
        let people: [(String, CalendarDate); 0] = [];
        let window = MilestoneWindow::default();
        assert!(compute_milestones_for_lots_of_people(&people, |p| p.1, &window).is_empty());
    }

    #[test]
    fn test_milestone_serde() {
        let milestone = Milestone {
            formatted_label: "π (31,415)".to_owned(),
            date: date(2075, 6, 23),
        };
        let json = serde_json::to_string(&milestone).unwrap();
        assert!(json.contains("formattedLabel"));
        let parsed: Milestone = serde_json::from_str(&json).unwrap();
        assert_eq!(milestone, parsed);
    }
}
