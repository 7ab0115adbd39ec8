use crate::cli::parser::Commands;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::models::WorkSession;
use crate::ui::messages::{success, warning};
use crate::utils::date::{format_cz, parse_date, today};
use crate::utils::format_duration;
use crate::utils::time::{parse_duration, parse_time};
use chrono::Datelike;

pub fn handle(cmd: &Commands, state: &mut AppState) -> AppResult<()> {
    if let Commands::Add {
        month,
        date,
        start,
        duration,
        description,
    } = cmd
    {
        let date = date.as_deref().map(parse_date).transpose()?;
        let month_number = month
            .or(date.map(|d| d.month()))
            .unwrap_or_else(|| today(state.zone()).month());
        let year_number = state.year.year;

        if let Some(d) = date
            && (d.month() != month_number || d.year() != year_number)
        {
            warning(format!(
                "{} does not belong to month {month_number} of {year_number}; it will be corrected on the next open.",
                format_cz(d)
            ));
        }

        // Defaults follow the last row of the month
        let previous = state.year.month(month_number)?.sorted().last().copied();
        let defaults = WorkSession::next_after(previous, month_number, year_number)?;

        let session = WorkSession::checked(
            date.unwrap_or(defaults.date),
            start.as_deref().map(parse_time).transpose()?.unwrap_or(defaults.start_time),
            duration.as_deref().map(parse_duration).transpose()?.unwrap_or(defaults.duration),
            description.clone().unwrap_or(defaults.description),
        )?;

        if let Some(over) = session.description_overflow() {
            warning(format!("Description is {over} characters over the recommended length."));
        }

        let default_wage = state.config.default_hourly_wage;
        let month = state.year.month_mut(month_number)?;
        if month.hourly_wage == 0 {
            month.hourly_wage = default_wage;
        }
        let summary = format!(
            "{} {} ({})",
            format_cz(session.date),
            session.start_time.format("%H:%M"),
            format_duration(session.duration)
        );
        month.add(session);
        month.sort();

        state.save()?;
        success(format!("Session added: {summary}"));
    }
    Ok(())
}
