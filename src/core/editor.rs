//! Field-by-field editing of one row: date → start time → duration →
//! description. Driven by explicit events instead of a polling loop.

use crate::errors::{AppError, AppResult};
use crate::models::WorkSession;
use crate::utils::date::parse_date;
use crate::utils::time::{parse_duration, parse_time};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    StartTime,
    Duration,
    Description,
}

impl Field {
    fn next(self) -> Option<Field> {
        match self {
            Field::Date => Some(Field::StartTime),
            Field::StartTime => Some(Field::Duration),
            Field::Duration => Some(Field::Description),
            Field::Description => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Date => "date",
            Field::StartTime => "start time",
            Field::Duration => "duration",
            Field::Description => "description",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    EditingField(Field),
    Canceled,
    Committed,
}

#[derive(Debug, Clone)]
pub struct RowEditor {
    state: EditorState,
    /// Skip the date column.
    fast: bool,
    draft: WorkSession,
}

impl RowEditor {
    pub fn new(session: &WorkSession, fast: bool) -> Self {
        Self {
            state: EditorState::Idle,
            fast,
            draft: session.clone(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> &WorkSession {
        &self.draft
    }

    pub fn begin(&mut self) -> AppResult<Field> {
        if self.state != EditorState::Idle {
            return Err(AppError::Editor(format!("cannot begin from {:?}", self.state)));
        }
        let first = if self.fast { Field::StartTime } else { Field::Date };
        self.state = EditorState::EditingField(first);
        Ok(first)
    }

    fn current(&self) -> AppResult<Field> {
        match self.state {
            EditorState::EditingField(f) => Ok(f),
            other => Err(AppError::Editor(format!("no field is being edited ({other:?})"))),
        }
    }

    fn advance(&mut self, field: Field) -> EditorState {
        self.state = match field.next() {
            Some(next) => EditorState::EditingField(next),
            None => EditorState::Committed,
        };
        self.state
    }

    /// Parse `input` into the current field and move on. A parse failure
    /// leaves the editor on the same field.
    pub fn commit(&mut self, input: &str) -> AppResult<EditorState> {
        let field = self.current()?;
        match field {
            Field::Date => self.draft.date = parse_date(input)?,
            Field::StartTime => self.draft.start_time = parse_time(input)?,
            Field::Duration => self.draft.duration = parse_duration(input)?,
            Field::Description => self.draft.description = input.trim().to_string(),
        }
        Ok(self.advance(field))
    }

    /// Keep the current value and move on.
    pub fn skip(&mut self) -> AppResult<EditorState> {
        let field = self.current()?;
        Ok(self.advance(field))
    }

    pub fn cancel(&mut self) {
        self.state = EditorState::Canceled;
    }

    /// The edited session, once every field was committed or skipped.
    pub fn finish(self) -> Option<WorkSession> {
        (self.state == EditorState::Committed).then_some(self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeDelta};

    fn row() -> WorkSession {
        WorkSession::new(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            TimeDelta::hours(3),
            "old",
        )
    }

    #[test]
    fn walks_every_field_in_order() {
        let mut ed = RowEditor::new(&row(), false);
        assert_eq!(ed.begin().unwrap(), Field::Date);
        assert_eq!(ed.commit("2024-06-04").unwrap(), EditorState::EditingField(Field::StartTime));
        assert_eq!(ed.commit("0830").unwrap(), EditorState::EditingField(Field::Duration));
        assert_eq!(ed.commit("2,5h").unwrap(), EditorState::EditingField(Field::Description));
        assert_eq!(ed.commit(" new text ").unwrap(), EditorState::Committed);

        let s = ed.finish().unwrap();
        assert_eq!(s.date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
        assert_eq!(s.start_time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(s.duration, TimeDelta::minutes(150));
        assert_eq!(s.description, "new text");
    }

    #[test]
    fn fast_mode_starts_at_start_time() {
        let mut ed = RowEditor::new(&row(), true);
        assert_eq!(ed.begin().unwrap(), Field::StartTime);
        ed.skip().unwrap();
        ed.skip().unwrap();
        assert_eq!(ed.skip().unwrap(), EditorState::Committed);
        assert_eq!(ed.finish().unwrap(), row());
    }

    #[test]
    fn bad_input_stays_on_the_field() {
        let mut ed = RowEditor::new(&row(), true);
        ed.begin().unwrap();
        assert!(ed.commit("25:99").is_err());
        assert_eq!(ed.state(), EditorState::EditingField(Field::StartTime));
        assert!(ed.commit("9").is_ok());
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut ed = RowEditor::new(&row(), false);
        ed.begin().unwrap();
        ed.commit("2024-06-10").unwrap();
        ed.cancel();
        assert_eq!(ed.state(), EditorState::Canceled);
        assert!(ed.commit("10:00").is_err());
        assert!(ed.finish().is_none());
    }

    #[test]
    fn events_before_begin_are_rejected() {
        let mut ed = RowEditor::new(&row(), false);
        assert!(ed.commit("x").is_err());
        assert!(ed.skip().is_err());
        ed.begin().unwrap();
        assert!(ed.begin().is_err());
    }
}
