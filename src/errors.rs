//! Unified application error type.
//! Models, codecs, the repair pass and the CLI all return AppError so that
//! file-boundary failures can be turned into user messages in one place.

use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Document errors
    // ---------------------------
    #[error("File {path} cannot be opened or is not valid: {message}")]
    Parse { path: String, message: String },

    #[error("Cannot save as {path}: {message}")]
    Write { path: String, message: String },

    #[error("No document is currently open")]
    NoDocument,

    // ---------------------------
    // Data model errors
    // ---------------------------
    #[error("Month numbers can only be between 1 and 12, got {0}")]
    InvalidMonthNumber(u32),

    #[error("Invalid month range {0}..={1}: months must be between 1 and 12 and ascending")]
    InvalidMonthRange(u32, u32),

    #[error("Invalid session index {index} for month {month}")]
    InvalidSessionIndex { month: u32, index: usize },

    #[error("Duration cannot be negative")]
    NegativeDuration,

    #[error("Duration cannot exceed {0} hours")]
    DurationTooLong(i64),

    #[error("Session starting {0} ends outside the supported date range")]
    SessionOutOfRange(String),

    #[error("Month {0} has no sessions; add one first or set default_hourly_wage in the config")]
    EmptyMonth(u32),

    #[error("Invalid year {0}: years start at 1")]
    InvalidYear(i32),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid hourly wage: {0}")]
    InvalidWageInput(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration: {0} (use 150, 2h or 2,5h)")]
    InvalidDuration(String),

    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Row editor
    // ---------------------------
    #[error("Row editor: {0}")]
    Editor(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn parse(path: &Path, e: impl std::fmt::Display) -> Self {
        AppError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    }

    pub fn write(path: &Path, e: impl std::fmt::Display) -> Self {
        AppError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
