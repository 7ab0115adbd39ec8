use crate::core::wage::TaxRules;
use crate::errors::{AppError, AppResult};
use crate::utils::fs::write_atomic;
use crate::utils::time::DEFAULT_ZONE;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path of the last opened document, reopened on start.
    #[serde(default)]
    pub last_file: Option<String>,
    /// Zone every stored instant is computed in.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Wage given to months that have none yet.
    #[serde(default)]
    pub default_hourly_wage: u32,
    #[serde(default)]
    pub tax: TaxRules,
}

fn default_time_zone() -> String {
    DEFAULT_ZONE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_file: None,
            time_zone: default_time_zone(),
            default_hourly_wage: 0,
            tax: TaxRules::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workmanager")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".workmanager")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workmanager.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "config parse failed");
            AppError::Config(format!("{}: {e}", path.display()))
        })?;
        config.tax.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        write_atomic(path, yaml.as_bytes()).map_err(|_| AppError::ConfigSave)
    }

    /// Store `document` as the last opened file and persist the config.
    pub fn remember_file(&mut self, document: &Path, config_path: &Path) -> AppResult<()> {
        self.last_file = Some(document.to_string_lossy().to_string());
        self.save_to(config_path)
    }

    pub fn last_file(&self) -> Option<PathBuf> {
        self.last_file.as_deref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn missing_file_gives_defaults() {
        let path = env::temp_dir().join("workmanager_cfg_does_not_exist.conf");
        fs::remove_file(&path).ok();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.time_zone, "Europe/Prague");
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = env::temp_dir().join("workmanager_cfg_round_trip.conf");
        let cfg = Config {
            last_file: Some("/tmp/2024.json".into()),
            default_hourly_wage: 180,
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = env::temp_dir().join("workmanager_cfg_partial.conf");
        fs::write(&path, "default_hourly_wage: 95\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.default_hourly_wage, 95);
        assert_eq!(cfg.tax.threshold, Decimal::from(10_000));
        assert!(cfg.last_file.is_none());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn remembered_file_survives_a_reload() {
        let path = env::temp_dir().join("workmanager_cfg_remember.conf");
        let mut cfg = Config::default();
        cfg.remember_file(Path::new("/data/2024.json"), &path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.last_file(), Some(PathBuf::from("/data/2024.json")));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        let path = env::temp_dir().join("workmanager_cfg_broken.conf");
        fs::write(&path, "time_zone: [unclosed\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn unusable_tax_rules_are_a_config_error() {
        let path = env::temp_dir().join("workmanager_cfg_zero_rounding.conf");
        fs::write(&path, "tax:\n  threshold: '10000'\n  super_gross_rate: '1.34'\n  super_gross_rounding: '0'\n  income_tax_rate: '0.15'\n  net_share: '0.89'\n  tax_credit: '2070'\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("super_gross_rounding"), "{err}");
        fs::remove_file(&path).ok();
    }
}
