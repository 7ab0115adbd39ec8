use super::raw::WorkSessionRaw;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{MAX_DURATION_HOURS, localize};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use chrono_tz::Tz;
use rust_decimal::Decimal;

/// Preferred maximum length of a description. Longer text is kept, the UI
/// only warns about it.
pub const DESCRIPTION_SOFT_LIMIT: usize = 150;

/// Description given to the very first row of an empty month.
pub const PLACEHOLDER_DESCRIPTION: &str = "Doplnit!";

/// One logged work interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSession {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// Signed, so that a session built from an end before its start can be
    /// stored until the repair pass negates it.
    pub duration: TimeDelta,
    pub description: String,
}

impl WorkSession {
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            start_time,
            duration,
            description: description.into(),
        }
    }

    /// Like [`WorkSession::new`] but rejects negative durations and
    /// durations over [`MAX_DURATION_HOURS`].
    pub fn checked(
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
        description: impl Into<String>,
    ) -> AppResult<Self> {
        if duration < TimeDelta::zero() {
            return Err(AppError::NegativeDuration);
        }
        if duration > TimeDelta::hours(MAX_DURATION_HOURS) {
            return Err(AppError::DurationTooLong(MAX_DURATION_HOURS));
        }
        Ok(Self::new(date, start_time, duration, description))
    }

    /// Session from its start and an absolute end. An end before the start
    /// yields a negative duration.
    pub fn between(
        date: NaiveDate,
        start_time: NaiveTime,
        end: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        let duration = end - date.and_time(start_time);
        Self::new(date, start_time, duration, description)
    }

    /// Default row appended after `last` in `month` of `year`: 12:00, three
    /// hours, next day (same day when the next one leaves the month), same
    /// description. An empty month starts on the 1st with a placeholder.
    pub fn next_after(last: Option<&WorkSession>, month: u32, year: i32) -> AppResult<Self> {
        let noon = NaiveTime::MIN + TimeDelta::hours(12);
        let three_hours = TimeDelta::hours(3);

        match last {
            Some(prev) => {
                let date = prev
                    .date
                    .succ_opt()
                    .filter(|d| d.month() == month)
                    .unwrap_or(prev.date);
                Ok(Self::new(date, noon, three_hours, prev.description.clone()))
            }
            None => {
                let date = NaiveDate::from_ymd_opt(year, month, 1)
                    .ok_or(AppError::InvalidMonthNumber(month))?;
                Ok(Self::new(date, noon, three_hours, PLACEHOLDER_DESCRIPTION))
            }
        }
    }

    pub fn begin(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn end(&self) -> AppResult<NaiveDateTime> {
        self.begin()
            .checked_add_signed(self.duration)
            .ok_or_else(|| self.out_of_range())
    }

    /// Time of day the session ends; wraps past midnight.
    pub fn end_time(&self) -> AppResult<NaiveTime> {
        Ok(self.end()?.time())
    }

    pub fn minutes(&self) -> i64 {
        self.duration.num_minutes()
    }

    /// `minutes * hourly_wage / 60`, without currency.
    pub fn profit(&self, hourly_wage: u32) -> Decimal {
        Decimal::from(self.minutes()) * Decimal::from(hourly_wage) / Decimal::from(60)
    }

    /// Characters over [`DESCRIPTION_SOFT_LIMIT`], if any.
    pub fn description_overflow(&self) -> Option<usize> {
        let len = self.description.chars().count();
        (len > DESCRIPTION_SOFT_LIMIT).then(|| len - DESCRIPTION_SOFT_LIMIT)
    }

    fn out_of_range(&self) -> AppError {
        AppError::SessionOutOfRange(self.begin().format("%Y-%m-%d %H:%M").to_string())
    }

    /// Serializable form with absolute instants computed in `zone`.
    pub fn to_raw(&self, zone: Tz, hourly_wage: u32) -> AppResult<WorkSessionRaw> {
        let begin = localize(zone, self.begin());
        let end = begin
            .checked_add_signed(self.duration)
            .ok_or_else(|| self.out_of_range())?;
        Ok(WorkSessionRaw {
            begin_date: begin.to_utc(),
            end_date: end.to_utc(),
            hourly_wage,
            description: self.description.clone(),
        })
    }

    /// Inverse of [`WorkSession::to_raw`]; splits the instants in `zone`.
    pub fn from_raw(raw: &WorkSessionRaw, zone: Tz) -> Self {
        let begin = raw.begin_date.with_timezone(&zone).naive_local();
        Self::new(
            begin.date(),
            begin.time(),
            raw.end_date - raw.begin_date,
            raw.description.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::{DEFAULT_ZONE, parse_zone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn session(begin: NaiveDateTime, minutes: i64, description: &str) -> WorkSession {
        WorkSession::new(begin.date(), begin.time(), TimeDelta::minutes(minutes), description)
    }

    #[test]
    fn profit_follows_minutes_and_wage() {
        let thirty = session(at(2017, 5, 14, 10, 0), 30, "");
        let two_hours = session(at(2017, 5, 14, 10, 0), 120, "Popis s českými znaky ěščřžýáíéúů");

        assert_eq!(thirty.profit(80), Decimal::from(40));
        assert_eq!(two_hours.profit(100), Decimal::from(200));
        assert_eq!(two_hours.duration.num_hours(), 2);
    }

    #[test]
    fn end_before_start_gives_negative_duration() {
        let s = WorkSession::between(
            NaiveDate::from_ymd_opt(2017, 5, 2).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            at(2017, 5, 2, 10, 0),
            "backwards",
        );
        assert_eq!(s.duration, TimeDelta::hours(-2));
    }

    #[test]
    fn checked_rejects_negative_duration() {
        let begin = at(2017, 5, 2, 12, 0);
        let err = WorkSession::checked(begin.date(), begin.time(), TimeDelta::minutes(-1), "x");
        assert!(matches!(err, Err(AppError::NegativeDuration)));
        assert!(WorkSession::checked(begin.date(), begin.time(), TimeDelta::zero(), "x").is_ok());
    }

    #[test]
    fn checked_rejects_durations_longer_than_a_month() {
        let begin = at(2024, 5, 2, 8, 0);
        let err = WorkSession::checked(begin.date(), begin.time(), TimeDelta::hours(745), "x");
        assert!(matches!(err, Err(AppError::DurationTooLong(MAX_DURATION_HOURS))));
    }

    #[test]
    fn end_out_of_range_is_an_error_not_a_panic() {
        let zone = parse_zone(DEFAULT_ZONE).unwrap();
        // valid TimeDelta, far beyond the calendar
        let s = session(at(2024, 5, 2, 8, 0), 999_999_999_999, "endless");

        assert!(matches!(s.end(), Err(AppError::SessionOutOfRange(_))));
        assert!(s.end_time().is_err());
        assert!(matches!(s.to_raw(zone, 100), Err(AppError::SessionOutOfRange(_))));
    }

    #[test]
    fn end_time_wraps_past_midnight() {
        let s = session(at(2017, 5, 2, 22, 0), 180, "night shift");
        assert_eq!(s.end_time().unwrap(), NaiveTime::from_hms_opt(1, 0, 0).unwrap());
        assert_eq!(s.end().unwrap().date(), NaiveDate::from_ymd_opt(2017, 5, 3).unwrap());
    }

    #[test]
    fn raw_round_trip_in_fixed_zone() {
        let zone = parse_zone(DEFAULT_ZONE).unwrap();
        let samples = [
            session(at(2017, 5, 2, 12, 0), 360, "Testování různých řešení"),
            session(at(2024, 1, 15, 0, 5), 0, ""),
            session(at(2024, 10, 27, 1, 30), 150, "across the autumn change"),
            session(at(2024, 12, 31, 23, 0), 120, "over new year"),
        ];

        for s in samples {
            let raw = s.to_raw(zone, 150).unwrap();
            assert_eq!(raw.hourly_wage, 150);
            assert_eq!(WorkSession::from_raw(&raw, zone), s);
        }
    }

    #[test]
    fn raw_instants_use_the_configured_zone() {
        let zone = parse_zone(DEFAULT_ZONE).unwrap();
        let raw = session(at(2017, 5, 2, 12, 0), 60, "").to_raw(zone, 0).unwrap();
        // CEST is UTC+2
        assert_eq!(raw.begin_date.to_rfc3339(), "2017-05-02T10:00:00+00:00");
        assert_eq!(raw.end_date.to_rfc3339(), "2017-05-02T11:00:00+00:00");
    }

    #[test]
    fn new_row_defaults() {
        let first = WorkSession::next_after(None, 5, 2017).unwrap();
        assert_eq!(first.begin(), at(2017, 5, 1, 12, 0));
        assert_eq!(first.duration, TimeDelta::hours(3));
        assert_eq!(first.description, PLACEHOLDER_DESCRIPTION);

        let prev = session(at(2017, 5, 2, 9, 0), 60, "copy me");
        let next = WorkSession::next_after(Some(&prev), 5, 2017).unwrap();
        assert_eq!(next.begin(), at(2017, 5, 3, 12, 0));
        assert_eq!(next.description, "copy me");

        let month_end = session(at(2017, 5, 31, 9, 0), 60, "last day");
        let stays = WorkSession::next_after(Some(&month_end), 5, 2017).unwrap();
        assert_eq!(stays.date, NaiveDate::from_ymd_opt(2017, 5, 31).unwrap());
    }

    #[test]
    fn long_descriptions_are_flagged_not_cut() {
        let mut s = session(at(2017, 5, 2, 12, 0), 60, "");
        s.description = "x".repeat(DESCRIPTION_SOFT_LIMIT + 7);
        assert_eq!(s.description_overflow(), Some(7));
        assert_eq!(s.description.len(), DESCRIPTION_SOFT_LIMIT + 7);
    }
}
