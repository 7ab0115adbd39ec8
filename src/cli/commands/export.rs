use crate::cli::parser::Commands;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::export::parse_month_range;
use crate::utils::fs::ensure_writable;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, state: &AppState) -> AppResult<()> {
    if let Commands::Export {
        path,
        months,
        force,
    } = cmd
    {
        let range = parse_month_range(months)?;
        let target = expand_tilde(path);
        ensure_writable(&target, *force)?;
        state.export_xlsx(&target, range)?;
    }
    Ok(())
}
