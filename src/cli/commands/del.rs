use crate::cli::commands::row_index;
use crate::cli::parser::Commands;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::format_cz;

pub fn handle(cmd: &Commands, state: &mut AppState) -> AppResult<()> {
    if let Commands::Del { month, row } = cmd {
        let m = state.year.month_mut(*month)?;
        let index = row_index(m, *row)?;
        let removed = m.remove(index)?;

        state.save()?;
        success(format!(
            "Deleted {} {} \"{}\".",
            format_cz(removed.date),
            removed.start_time.format("%H:%M"),
            removed.description
        ));
    }
    Ok(())
}
