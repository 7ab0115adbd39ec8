//! Time utilities: parsing cell input (times, durations), time zones and
//! conversion between local date/time and absolute instants.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, LocalResult, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;
use std::sync::LazyLock;

/// Zone used for every stored instant unless the configuration says otherwise.
pub const DEFAULT_ZONE: &str = "Europe/Prague";

/// Longest accepted session: a whole 31-day month.
pub const MAX_DURATION_HOURS: i64 = 31 * 24;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:[.,]\d+)?)\s*(h)?\s*$").expect("duration pattern is valid")
});

/// Parse a time of day typed into a cell: `HH:MM`, `HHMM` or `HH`.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let s = t.trim();
    let invalid = || AppError::InvalidTime(t.to_string());

    if s.contains(':') {
        return NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| invalid());
    }

    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let (hours, minutes) = match s.len() {
        4 => (&s[0..2], &s[2..4]),
        1 | 2 => (s, "0"),
        _ => return Err(invalid()),
    };

    let h: u32 = hours.parse().map_err(|_| invalid())?;
    let m: u32 = minutes.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(invalid)
}

/// Parse a duration typed into a cell.
///
/// - `150` → 150 minutes
/// - `2h` → 2 hours
/// - `2,5h` / `2.5h` / `2.5` → 2 hours 30 minutes
///
/// Fractions of a minute are truncated. Anything over
/// [`MAX_DURATION_HOURS`] is rejected.
pub fn parse_duration(input: &str) -> AppResult<TimeDelta> {
    let invalid = || AppError::InvalidDuration(input.to_string());
    let caps = DURATION_RE.captures(input).ok_or_else(invalid)?;

    let number = caps[1].replace(',', ".");
    let in_hours = caps.get(2).is_some() || number.contains('.');

    let minutes = if in_hours {
        let hours = Decimal::from_str(&number).map_err(|_| invalid())?;
        hours
            .checked_mul(Decimal::from(60))
            .ok_or_else(invalid)?
            .trunc()
            .to_i64()
            .ok_or_else(invalid)?
    } else {
        number.parse::<i64>().map_err(|_| invalid())?
    };

    if minutes > MAX_DURATION_HOURS * 60 {
        return Err(AppError::DurationTooLong(MAX_DURATION_HOURS));
    }
    TimeDelta::try_minutes(minutes).ok_or_else(invalid)
}

pub fn parse_zone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::InvalidTimeZone(name.to_string()))
}

/// Attach `zone` to a local date/time.
///
/// Ambiguous times (autumn fold) resolve to the earlier instant; times inside
/// a spring gap are moved forward by one hour.
pub fn localize(zone: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => zone
            .from_local_datetime(&(naive + TimeDelta::hours(1)))
            .earliest()
            .unwrap_or_else(|| zone.from_utc_datetime(&naive)),
    }
}
