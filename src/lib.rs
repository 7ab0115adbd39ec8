//! workmanager library root.
//! Exposes the CLI parser, the high-level run() function and the data model.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::state::AppState;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, state: &mut AppState) -> AppResult<()> {
    if cli.command.needs_document() {
        match &cli.file {
            Some(file) => state.load(&expand_tilde(file))?,
            None => {
                state.restore()?;
            }
        }
    }

    match &cli.command {
        Commands::New { .. } => cli::commands::new::handle(&cli.command, state),
        Commands::Open { .. } => cli::commands::open::handle(&cli.command, state),
        Commands::SaveAs { .. } => cli::commands::save_as::handle(&cli.command, state),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, state),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, state),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, state),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, state),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, state),
        Commands::Wage { .. } | Commands::SetWage { .. } => {
            cli::commands::wage::handle(&cli.command, state)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, state),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, state),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    utils::init_tracing();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the config once, from --config when given
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    // 3️⃣ hand everything to the dispatcher
    let mut state = AppState::new(cfg, config_path)?;
    dispatch(&cli, &mut state)
}
