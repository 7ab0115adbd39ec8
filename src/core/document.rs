//! JSON document codec for a [`WorkYear`].
//!
//! Written shape:
//!
//! ```json
//! { "first": 2024, "second": { "1": [ { "beginDate": "...", "endDate": "...",
//!   "hourlyWage": 150, "description": "..." } ], ..., "12": [] } }
//! ```
//!
//! Also read: months stored as `{"first": [sessions], "second": wage}` and
//! documents that are a bare `{month: [sessions]}` map without the year.

use crate::errors::{AppError, AppResult};
use crate::models::{WorkSession, WorkSessionRaw, WorkYear};
use crate::utils::fs::write_atomic;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct YearDocumentOut {
    first: i32,
    second: BTreeMap<u32, Vec<WorkSessionRaw>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MonthEntry {
    Sessions(Vec<WorkSessionRaw>),
    WithWage {
        first: Vec<WorkSessionRaw>,
        second: u32,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentIn {
    Wrapped {
        first: i32,
        second: BTreeMap<String, MonthEntry>,
    },
    Flat(BTreeMap<String, MonthEntry>),
}

/// Build the year from a JSON document. Errors are human-readable messages.
pub fn decode(json: &str, zone: Tz) -> Result<WorkYear, String> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
    let doc: DocumentIn = serde_json::from_value(value)
        .map_err(|_| "unexpected document structure".to_string())?;

    let (year_number, months) = match doc {
        DocumentIn::Wrapped { first, second } => (first, second),
        DocumentIn::Flat(months) => (0, months),
    };

    let mut year = WorkYear::new(year_number);
    let mut seen = BTreeSet::new();

    for (key, entry) in months {
        let number: u32 = key
            .trim()
            .parse()
            .map_err(|_| format!("invalid month key '{key}'"))?;
        if !seen.insert(number) {
            return Err(format!("month {number} appears more than once"));
        }
        let month = year
            .month_mut(number)
            .map_err(|_| format!("invalid month key '{key}'"))?;

        let (raws, stored_wage) = match entry {
            MonthEntry::Sessions(raws) => (raws, None),
            MonthEntry::WithWage { first, second } => (first, Some(second)),
        };

        month.hourly_wage = stored_wage
            .or_else(|| raws.iter().map(|r| r.hourly_wage).find(|w| *w > 0))
            .unwrap_or(0);
        month.sessions = raws
            .iter()
            .map(|raw| WorkSession::from_raw(raw, zone))
            .collect();
    }

    Ok(year)
}

pub fn encode(year: &WorkYear, zone: Tz) -> AppResult<Vec<u8>> {
    let second: BTreeMap<u32, Vec<WorkSessionRaw>> = year
        .months()
        .map(|m| {
            let raws = m
                .sessions
                .iter()
                .map(|s| s.to_raw(zone, m.hourly_wage))
                .collect::<AppResult<Vec<_>>>()?;
            Ok((m.number(), raws))
        })
        .collect::<AppResult<_>>()?;

    let doc = YearDocumentOut {
        first: year.year,
        second,
    };

    serde_json::to_vec_pretty(&doc).map_err(|e| AppError::Other(e.to_string()))
}

pub fn read(path: &Path, zone: Tz) -> AppResult<WorkYear> {
    let content = fs::read_to_string(path).map_err(|e| AppError::parse(path, e))?;
    let year = decode(&content, zone).map_err(|e| AppError::parse(path, e))?;
    tracing::debug!(
        path = %path.display(),
        year = year.year,
        sessions = year.session_count(),
        "document loaded"
    );
    Ok(year)
}

pub fn write(path: &Path, year: &WorkYear, zone: Tz) -> AppResult<()> {
    let bytes = encode(year, zone)?;
    write_atomic(path, &bytes)
}
