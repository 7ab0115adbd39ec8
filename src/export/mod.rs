// src/export/mod.rs

pub mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::ops::RangeInclusive;
use std::path::Path;

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Months to export, `1..=12` and ascending.
pub fn validate_month_range(months: &RangeInclusive<u32>) -> AppResult<()> {
    let (start, end) = (*months.start(), *months.end());
    if start < 1 || end > 12 || start > end {
        return Err(AppError::InvalidMonthRange(start, end));
    }
    Ok(())
}

/// Parse `"5"` or `"3-6"` into a month range.
pub fn parse_month_range(input: &str) -> AppResult<RangeInclusive<u32>> {
    let bad = || AppError::InvalidMonthRange(0, 0);
    let parse = |s: &str| s.trim().parse::<u32>().map_err(|_| bad());

    let range = match input.split_once('-') {
        Some((a, b)) => parse(a)?..=parse(b)?,
        None => {
            let m = parse(input)?;
            m..=m
        }
    };
    validate_month_range(&range)?;
    Ok(range)
}
