use super::month::WorkMonth;
use super::session::WorkSession;
use crate::core::document;
use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use std::path::Path;

/// A year number plus all twelve months, always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkYear {
    /// May be `<= 0` right after loading a damaged document; the repair pass
    /// replaces it.
    pub year: i32,
    months: [WorkMonth; 12],
}

impl WorkYear {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: std::array::from_fn(|i| WorkMonth::numbered(i as u32 + 1)),
        }
    }

    fn index(month: u32) -> AppResult<usize> {
        if (1..=12).contains(&month) {
            Ok(month as usize - 1)
        } else {
            Err(AppError::InvalidMonthNumber(month))
        }
    }

    pub fn month(&self, month: u32) -> AppResult<&WorkMonth> {
        Ok(&self.months[Self::index(month)?])
    }

    pub fn month_mut(&mut self, month: u32) -> AppResult<&mut WorkMonth> {
        Ok(&mut self.months[Self::index(month)?])
    }

    /// Months 1..=12 in order.
    pub fn months(&self) -> impl Iterator<Item = &WorkMonth> {
        self.months.iter()
    }

    pub fn months_mut(&mut self) -> impl Iterator<Item = &mut WorkMonth> {
        self.months.iter_mut()
    }

    pub fn add_session(&mut self, month: u32, session: WorkSession) -> AppResult<()> {
        self.month_mut(month)?.add(session);
        Ok(())
    }

    pub fn clear_month(&mut self, month: u32) -> AppResult<()> {
        self.month_mut(month)?.clear();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.months.iter_mut().for_each(WorkMonth::clear);
    }

    pub fn session_count(&self) -> usize {
        self.months.iter().map(WorkMonth::len).sum()
    }

    pub fn total_duration(&self, month: u32) -> AppResult<TimeDelta> {
        Ok(self.month(month)?.total_duration())
    }

    pub fn total_minutes(&self, month: u32) -> AppResult<i64> {
        Ok(self.month(month)?.total_minutes())
    }

    pub fn total_profit(&self, month: u32) -> AppResult<Decimal> {
        Ok(self.month(month)?.total_profit())
    }

    pub fn total_minutes_year(&self) -> i64 {
        self.months.iter().map(WorkMonth::total_minutes).sum()
    }

    pub fn total_profit_year(&self) -> Decimal {
        self.months.iter().map(WorkMonth::total_profit).sum()
    }

    /// Replace this year with the document at `path`. On any failure the
    /// current contents are left as they were.
    pub fn load(&mut self, path: &Path, zone: Tz) -> AppResult<()> {
        let loaded = document::read(path, zone)?;
        *self = loaded;
        Ok(())
    }

    /// Write this year to `path` (temp file + rename).
    pub fn save(&self, path: &Path, zone: Tz) -> AppResult<()> {
        document::write(path, self, zone)
    }
}
