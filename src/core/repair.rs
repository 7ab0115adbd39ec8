//! Consistency check run when a document is opened by the user.
//!
//! The table lets users free-type dates, so a loaded year may hold sessions
//! whose date disagrees with the month they are filed under, a wrong year,
//! negative durations, or no year at all. The month bucket is trusted over the
//! recorded date.

use crate::models::WorkYear;
use crate::utils::date::{with_month_clamped, with_year_clamped};
use chrono::{Datelike, TimeDelta};

/// Source of a replacement year when the document has none.
pub trait YearPrompt {
    /// `None` when the user gives no answer.
    fn ask_year(&mut self) -> Option<i32>;
}

/// Prompt that never answers; the current year is used.
pub struct NoPrompt;

impl YearPrompt for NoPrompt {
    fn ask_year(&mut self) -> Option<i32> {
        None
    }
}

/// Prompt with a fixed answer, e.g. from a `--year` flag.
pub struct FixedYear(pub Option<i32>);

impl YearPrompt for FixedYear {
    fn ask_year(&mut self) -> Option<i32> {
        self.0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RepairReport {
    /// Year that replaced a missing one, and whether it came from the prompt.
    pub year_replaced: Option<(i32, bool)>,
    pub months_fixed: usize,
    pub years_fixed: usize,
    pub durations_fixed: usize,
}

impl RepairReport {
    pub fn changed(&self) -> bool {
        self.year_replaced.is_some()
            || self.months_fixed > 0
            || self.years_fixed > 0
            || self.durations_fixed > 0
    }
}

/// Repair `year` in place. `current_year` is the fallback for a missing year.
pub fn repair(year: &mut WorkYear, prompt: &mut dyn YearPrompt, current_year: i32) -> RepairReport {
    let mut report = RepairReport::default();

    if year.year <= 0 {
        let replacement = match prompt.ask_year() {
            Some(y) if y > 0 => (y, true),
            _ => (current_year, false),
        };
        year.year = replacement.0;
        report.year_replaced = Some(replacement);
    }

    let target_year = year.year;

    for month in year.months_mut() {
        let number = month.number();

        for session in month.sessions.iter_mut() {
            if session.date.month() != number
                && let Some(fixed) = with_month_clamped(session.date, number)
            {
                session.date = fixed;
                report.months_fixed += 1;
            }

            if session.date.year() != target_year
                && let Some(fixed) = with_year_clamped(session.date, target_year)
            {
                session.date = fixed;
                report.years_fixed += 1;
            }

            if session.duration < TimeDelta::zero() {
                session.duration = -session.duration;
                report.durations_fixed += 1;
            }
        }
    }

    if report.changed() {
        tracing::info!(?report, "document repaired");
    }

    report
}
