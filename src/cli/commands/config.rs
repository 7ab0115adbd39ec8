use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, state: &AppState) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = state.config_path();

        if *print_config {
            print(&state.config, path)?;
        }

        if *edit_config {
            edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn print(cfg: &Config, path: &Path) -> AppResult<()> {
    let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
    println!("📄 Current configuration ({}):\n", path.display());
    println!("{yaml}");
    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    // The editor needs a file to open
    if !path.exists() {
        Config::default().save_to(path)?;
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor = requested.unwrap_or(&default_editor);

    if run_editor(editor, path) {
        success(format!("Configuration file edited successfully using '{editor}'"));
    } else {
        warning(format!(
            "Editor '{editor}' not available, falling back to '{default_editor}'"
        ));
        if run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{default_editor}'"
            ));
        } else {
            error(format!(
                "Failed to edit configuration file using fallback '{default_editor}'"
            ));
        }
    }

    // The edited file must still parse
    Config::load_from(path).map(|_| ())
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
