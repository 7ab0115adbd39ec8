use crate::cli::parser::Commands;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, state: &mut AppState) -> AppResult<()> {
    if let Commands::New { path, year } = cmd {
        let target = path.as_deref().map(expand_tilde);
        let created = state.new_document(target.as_deref(), *year)?;

        success(format!(
            "New document for {} created: {}",
            state.year.year,
            created.display()
        ));
    }
    Ok(())
}
