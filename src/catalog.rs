//! The catalog of "interesting" day-counts.
//!
//! Built once at first use and never mutated; consumers rely on the entries
//! being sorted ascending by day-count for range queries.

use once_cell::sync::Lazy;

use crate::consts::{
    CATALOG_MAX_THOUSANDS, CATALOG_STEP_DAYS, PI_DAY_COUNTS, PI_LABEL, SEQUENCE_DAY_COUNTS,
};
use crate::prelude::*;

/// A notable number of days to be alive.
///
/// `label` is empty for plain round numbers and non-empty for decorated
/// entries (currently only the digits-of-π day-counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}", days)]
pub struct SignificantDayCount {
    pub label: &'static str,
    pub days: i64,
}

static CATALOG: Lazy<Vec<SignificantDayCount>> = Lazy::new(build_catalog);

fn unlabeled(days: i64) -> SignificantDayCount {
    SignificantDayCount { label: "", days }
}

fn build_catalog() -> Vec<SignificantDayCount> {
    let mut entries: Vec<SignificantDayCount> = (1..CATALOG_MAX_THOUSANDS)
        .map(|i| unlabeled(i * CATALOG_STEP_DAYS))
        .collect();

    entries.extend(SEQUENCE_DAY_COUNTS.map(unlabeled));
    entries.extend(PI_DAY_COUNTS.map(|days| SignificantDayCount {
        label: PI_LABEL,
        days,
    }));

    // Repdigits: 1111..9999, then the five-digit ones people might reach.
    entries.extend((1..=9).map(|d| unlabeled(d * 1111)));
    entries.extend((1..=4).map(|d| unlabeled(d * 11111)));

    entries.sort_by_key(|entry| entry.days);
    entries
}

/// The process-wide catalog, sorted ascending by `days`.
pub fn significant_day_counts() -> &'static [SignificantDayCount] {
    &CATALOG
}
