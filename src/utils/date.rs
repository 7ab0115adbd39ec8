use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

const MONTHS_CZ: [&str; 12] = [
    "Leden", "Únor", "Březen", "Duben", "Květen", "Červen", "Červenec", "Srpen", "Září", "Říjen",
    "Listopad", "Prosinec",
];

pub fn today(zone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&zone).date_naive()
}

pub fn current_year(zone: Tz) -> i32 {
    today(zone).year()
}

/// Parse a date typed by the user: `YYYY-MM-DD` or `d. M. yyyy`.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d. %m. %Y"))
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Format used in the spreadsheet date column, e.g. `2. 5. 2017`.
pub fn format_cz(d: NaiveDate) -> String {
    format!("{}. {}. {}", d.day(), d.month(), d.year())
}

pub fn month_name(month: u32) -> AppResult<&'static str> {
    MONTHS_CZ
        .get((month as usize).wrapping_sub(1))
        .copied()
        .ok_or(AppError::InvalidMonthNumber(month))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    first_of_next.pred_opt().map(|d| d.day())
}

/// Move `date` into `month`, keeping the day where possible and clamping it
/// to the last day of the target month otherwise (31 → 30, 29.2 → 28.2).
pub fn with_month_clamped(date: NaiveDate, month: u32) -> Option<NaiveDate> {
    let last = last_day_of_month(date.year(), month)?;
    NaiveDate::from_ymd_opt(date.year(), month, date.day().min(last))
}

pub fn with_year_clamped(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    let last = last_day_of_month(year, date.month())?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day().min(last))
}
