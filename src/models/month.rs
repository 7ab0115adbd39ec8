use super::session::WorkSession;
use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;
use rust_decimal::Decimal;

/// Sessions of one calendar month plus the hourly wage they are paid at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkMonth {
    number: u32,
    pub sessions: Vec<WorkSession>,
    pub hourly_wage: u32,
}

impl WorkMonth {
    pub fn new(number: u32) -> AppResult<Self> {
        if !(1..=12).contains(&number) {
            return Err(AppError::InvalidMonthNumber(number));
        }
        Ok(Self::numbered(number))
    }

    /// Caller guarantees `number` is in 1..=12.
    pub(super) fn numbered(number: u32) -> Self {
        Self {
            number,
            sessions: Vec::new(),
            hourly_wage: 0,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn add(&mut self, session: WorkSession) {
        self.sessions.push(session);
    }

    pub fn remove(&mut self, index: usize) -> AppResult<WorkSession> {
        if index >= self.sessions.len() {
            return Err(AppError::InvalidSessionIndex {
                month: self.number,
                index,
            });
        }
        Ok(self.sessions.remove(index))
    }

    pub fn session_mut(&mut self, index: usize) -> AppResult<&mut WorkSession> {
        let month = self.number;
        self.sessions
            .get_mut(index)
            .ok_or(AppError::InvalidSessionIndex { month, index })
    }

    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    /// Stable sort by date, then start time.
    pub fn sort(&mut self) {
        self.sessions.sort_by_key(|s| s.begin());
    }

    pub fn sorted(&self) -> Vec<&WorkSession> {
        let mut v: Vec<&WorkSession> = self.sessions.iter().collect();
        v.sort_by_key(|s| s.begin());
        v
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn total_duration(&self) -> TimeDelta {
        self.sessions
            .iter()
            .fold(TimeDelta::zero(), |acc, s| acc + s.duration)
    }

    pub fn total_minutes(&self) -> i64 {
        self.total_duration().num_minutes()
    }

    /// Sum of every session's profit at this month's wage.
    pub fn total_profit(&self) -> Decimal {
        self.sessions
            .iter()
            .map(|s| s.profit(self.hourly_wage))
            .sum()
    }
}
