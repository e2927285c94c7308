/// Earliest birth year the validity filter accepts (inclusive)
pub const MIN_PLAUSIBLE_YEAR: i32 = 1900;

/// Default milestone window start: this many days before today
pub const DEFAULT_LOOKBACK_DAYS: i64 = 60;

/// Default milestone window end: this many days after today (~3 years)
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 1096;

/// Spacing of the unlabeled round-number catalog entries
pub const CATALOG_STEP_DAYS: i64 = 1000;

/// Catalog stops short of this many thousands of days.
/// Not so many people live to 121 years == ~44k days.
pub const CATALOG_MAX_THOUSANDS: i64 = 45;

/// Label for the digits-of-π catalog entries
pub const PI_LABEL: &str = "π";

/// Day-counts decorated with [`PI_LABEL`]
pub const PI_DAY_COUNTS: [i64; 2] = [3141, 31415];

/// Undecorated special day-counts (ascending runs of digits)
pub const SEQUENCE_DAY_COUNTS: [i64; 2] = [1234, 12345];

/// vCard placeholder for an unknown date component
pub const UNKNOWN_COMPONENT: &str = "--";

/// Thousands separator used in milestone labels
pub const GROUP_SEPARATOR: char = ',';
