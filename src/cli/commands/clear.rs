use crate::cli::parser::Commands;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::month_name;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, state: &mut AppState) -> AppResult<()> {
    if let Commands::Clear { month, yes } = cmd {
        let what = match month {
            Some(m) => format!("all sessions of {}", month_name(*m)?),
            None => format!("all sessions of {}", state.year.year),
        };

        if !*yes && !ask_confirmation(&format!("Delete {what}? This action is irreversible.")) {
            info("Operation cancelled.");
            return Ok(());
        }

        match month {
            Some(m) => state.year.clear_month(*m)?,
            None => state.year.clear(),
        }

        state.save()?;
        success(format!("Deleted {what}."));
    }
    Ok(())
}
