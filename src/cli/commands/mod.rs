pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod list;
pub mod new;
pub mod open;
pub mod save_as;
pub mod wage;

use crate::errors::{AppError, AppResult};
use crate::models::WorkMonth;

/// Sort the month and turn a 1-based row number (as printed by `list`)
/// into an index.
pub(crate) fn row_index(month: &mut WorkMonth, row: usize) -> AppResult<usize> {
    month.sort();
    if row == 0 || row > month.len() {
        return Err(AppError::InvalidSessionIndex {
            month: month.number(),
            index: row,
        });
    }
    Ok(row - 1)
}
