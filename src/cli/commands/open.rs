use crate::cli::parser::Commands;
use crate::core::repair::{FixedYear, RepairReport, YearPrompt};
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::io::{self, Write};

/// Asks on stdin; an empty line or end of input gives no answer.
struct StdinYearPrompt;

impl YearPrompt for StdinYearPrompt {
    fn ask_year(&mut self) -> Option<i32> {
        warning("The document does not say which year it belongs to.");
        print!("Year [current]: ");
        io::stdout().flush().ok();

        let mut answer = String::new();
        io::stdin().read_line(&mut answer).ok()?;
        answer.trim().parse().ok()
    }
}

pub fn handle(cmd: &Commands, state: &mut AppState) -> AppResult<()> {
    if let Commands::Open { path, year } = cmd {
        let path = expand_tilde(path);

        let report = match year {
            Some(y) => state.open(&path, &mut FixedYear(Some(*y)))?,
            None => state.open(&path, &mut StdinYearPrompt)?,
        };

        if report.changed() {
            info("Data in the file were inconsistent and have been corrected.");
            print_report(&report);
            state.save()?;
        }

        success(format!(
            "Opened {} ({}, {} sessions)",
            path.display(),
            state.year.year,
            state.year.session_count()
        ));
    }
    Ok(())
}

fn print_report(report: &RepairReport) {
    if let Some((year, asked)) = report.year_replaced {
        let source = if asked { "as entered" } else { "current year" };
        println!("  year set to {year} ({source})");
    }
    if report.months_fixed > 0 {
        println!("  {} session(s) moved into their month", report.months_fixed);
    }
    if report.years_fixed > 0 {
        println!("  {} session(s) moved into the document year", report.years_fixed);
    }
    if report.durations_fixed > 0 {
        println!("  {} negative duration(s) turned positive", report.durations_fixed);
    }
}
