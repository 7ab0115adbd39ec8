use crate::cli::parser::Commands;
use crate::core::state::AppState;
use crate::core::wage::{WageBreakdown, calculate, parse_hourly_wage};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};
use crate::utils::date::month_name;
use crate::utils::formatting::pad_right;
use crate::utils::{format_duration, format_money};

pub fn handle(cmd: &Commands, state: &mut AppState) -> AppResult<()> {
    match cmd {
        Commands::Wage { month, wage } => {
            let hourly = match wage {
                Some(w) => parse_hourly_wage(w)?,
                None => state.hourly_wage(*month)?,
            };
            if hourly == 0 {
                return Err(AppError::InvalidWageInput(
                    "no hourly wage stored for this month, use --wage or set-wage".into(),
                ));
            }

            let total = state.year.total_duration(*month)?;
            let breakdown = calculate(hourly, total, &state.config.tax)?;

            header(format!("{} {}", month_name(*month)?, state.year.year));
            print_breakdown(hourly, total, &breakdown);
        }
        Commands::SetWage { month, wage } => {
            let hourly = parse_hourly_wage(wage)?;
            let m = state.year.month_mut(*month)?;
            // the document keeps the wage on each session only
            if m.is_empty() {
                return Err(AppError::EmptyMonth(*month));
            }
            m.hourly_wage = hourly;

            state.save()?;
            success(format!("Hourly wage of {} set to {hourly}.", month_name(*month)?));
        }
        _ => {}
    }
    Ok(())
}

fn print_breakdown(hourly: u32, total: chrono::TimeDelta, w: &WageBreakdown) {
    let row = |label: &str, value: String| println!("{}{}", pad_right(label, 16), value);

    row("Hours worked:", format_duration(total));
    row("Hourly wage:", hourly.to_string());
    row("Gross wage:", format_money(w.gross));
    if let Some(super_gross) = w.super_gross {
        row("Super gross:", format_money(super_gross));
        row("Income tax:", format_money(w.income_tax));
    }
    row("Net wage:", format_money(w.net));
    row("Tax:", format_money(w.tax));
}
