//! Start-time parsing and defaults.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::{DutyError, DutyResult};

/// Hour of day a shift starts when no start time is given.
pub const DEFAULT_SHIFT_START_HOUR: i64 = 8;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a local start time.
///
/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS`, either with a `T`
/// separator, or a bare `YYYY-MM-DD` (midnight).  Surrounding whitespace is
/// ignored.
pub fn parse_start_time(s: &str) -> DutyResult<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| DutyError::InvalidStartTime(s.to_owned()))
}

/// `today` at the default shift start (08:00).
pub fn default_start_time(today: NaiveDate) -> NaiveDateTime {
    today.and_time(NaiveTime::MIN) + TimeDelta::hours(DEFAULT_SHIFT_START_HOUR)
}

/// Today's date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
