use crate::cli::parser::Commands;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::models::WorkMonth;
use crate::ui::messages::{header, info};
use crate::utils::date::{format_cz, month_name};
use crate::utils::formatting::{bold, pad_left, pad_right};
use crate::utils::{format_duration, format_money};
use chrono::TimeDelta;
use rust_decimal::Decimal;

const DESCRIPTION_WIDTH: usize = 60;
/// Width of the columns printed before the description.
const INDENT: usize = 4 + 12 + 7 + 7 + 9;

pub fn handle(cmd: &Commands, state: &AppState) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        if let Some(file) = state.current_file() {
            info(format!("{} ({})", file.display(), state.year.year));
        }

        let months: Vec<&WorkMonth> = match month {
            Some(m) => vec![state.year.month(*m)?],
            None => state.year.months().filter(|m| !m.is_empty()).collect(),
        };

        if months.is_empty() {
            println!("No sessions recorded.");
            return Ok(());
        }

        let mut year_profit = Decimal::ZERO;
        for m in months {
            year_profit += print_month(m, state.year.year, state.hourly_wage(m.number())?)?;
        }

        if month.is_none() {
            println!(
                "\n{} {} | {}",
                bold("Year total:"),
                format_duration(TimeDelta::minutes(state.year.total_minutes_year())),
                format_money(year_profit)
            );
        }
    }
    Ok(())
}

/// Print one month and return its profit at `wage`.
fn print_month(month: &WorkMonth, year: i32, wage: u32) -> AppResult<Decimal> {
    println!();
    header(format!("{} {}", month_name(month.number())?, year));

    if month.is_empty() {
        println!("No sessions.");
        return Ok(Decimal::ZERO);
    }

    println!(
        "{}{}{}{}{}{}",
        pad_left("#", 3),
        pad_right(" Date", 13),
        pad_right("Start", 7),
        pad_right("End", 7),
        pad_left("Time", 7),
        "  Description"
    );

    for (i, s) in month.sorted().iter().enumerate() {
        let lines = textwrap::wrap(&s.description, DESCRIPTION_WIDTH);
        let first = lines.first().map_or("", |l| &**l);

        println!(
            "{} {}{}{}{}  {}",
            pad_left(&(i + 1).to_string(), 3),
            pad_right(&format_cz(s.date), 12),
            pad_right(&s.start_time.format("%H:%M").to_string(), 7),
            pad_right(&s.end_time()?.format("%H:%M").to_string(), 7),
            pad_left(&format_duration(s.duration), 7),
            first
        );
        for line in lines.iter().skip(1) {
            println!("{}{}", " ".repeat(INDENT), line);
        }
    }

    let total = month.total_duration();
    let profit: Decimal = month.sessions.iter().map(|s| s.profit(wage)).sum();
    if wage > 0 {
        println!(
            "{} {} | {} at {}/h",
            bold("Total:"),
            format_duration(total),
            format_money(profit),
            wage
        );
    } else {
        println!("{} {}", bold("Total:"), format_duration(total));
    }
    Ok(profit)
}
