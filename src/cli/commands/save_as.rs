use crate::cli::parser::Commands;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, state: &mut AppState) -> AppResult<()> {
    if let Commands::SaveAs { path } = cmd {
        let target = expand_tilde(path);
        state.save_as(&target)?;
        success(format!("Saved as {}", target.display()));
    }
    Ok(())
}
