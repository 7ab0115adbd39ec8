//! The open document: configuration, the in-memory year and the file it
//! belongs to. Passed explicitly to whoever needs it.

use crate::config::Config;
use crate::core::document;
use crate::core::repair::{RepairReport, YearPrompt, repair};
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::models::WorkYear;
use crate::utils::date::current_year;
use crate::utils::path::absolute;
use crate::utils::time::parse_zone;
use chrono::Utc;
use chrono_tz::Tz;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub struct AppState {
    pub config: Config,
    config_path: PathBuf,
    zone: Tz,
    pub year: WorkYear,
    current_file: Option<PathBuf>,
}

impl AppState {
    pub fn new(config: Config, config_path: PathBuf) -> AppResult<Self> {
        let zone = parse_zone(&config.time_zone)?;
        Ok(Self {
            config,
            config_path,
            zone,
            year: WorkYear::new(current_year(zone)),
            current_file: None,
        })
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Wage of `month`, or the configured default when the month has none.
    pub fn hourly_wage(&self, month: u32) -> AppResult<u32> {
        let wage = self.year.month(month)?.hourly_wage;
        Ok(if wage > 0 {
            wage
        } else {
            self.config.default_hourly_wage
        })
    }

    fn current_or_err(&self) -> AppResult<&Path> {
        self.current_file().ok_or(AppError::NoDocument)
    }

    /// Make `path` the current file and remember it for the next start.
    fn set_current(&mut self, path: &Path) {
        let path = absolute(path);
        if let Err(e) = self.config.remember_file(&path, &self.config_path) {
            tracing::warn!(error = %e, "could not remember last file");
        }
        self.current_file = Some(path);
    }

    /// Reopen the last used document, or start a blank temporary one when
    /// there is none or it cannot be read.
    pub fn restore(&mut self) -> AppResult<PathBuf> {
        if let Some(last) = self.config.last_file() {
            match document::read(&last, self.zone) {
                Ok(year) => {
                    self.year = year;
                    self.current_file = Some(last.clone());
                    return Ok(last);
                }
                Err(e) => tracing::warn!(error = %e, "last file unusable, starting a blank one"),
            }
        }
        self.new_document(None, None)
    }

    /// Write a blank year into `target` (a temporary file when `None`) and
    /// open it.
    pub fn new_document(&mut self, target: Option<&Path>, year: Option<i32>) -> AppResult<PathBuf> {
        let path = match target {
            Some(p) => p.to_path_buf(),
            None => std::env::temp_dir().join(format!(
                "TemporaryWorkYear{}.json",
                Utc::now().timestamp_millis()
            )),
        };
        let year_number = year.unwrap_or_else(|| current_year(self.zone));
        if year_number < 1 {
            return Err(AppError::InvalidYear(year_number));
        }

        let blank = WorkYear::new(year_number);
        document::write(&path, &blank, self.zone)?;

        self.year = blank;
        self.set_current(&path);
        Ok(path)
    }

    /// Open a document chosen by the user, repairing it on the way in.
    /// On failure the previous document stays open.
    pub fn open(&mut self, path: &Path, prompt: &mut dyn YearPrompt) -> AppResult<RepairReport> {
        let mut loaded = document::read(path, self.zone)?;
        let report = repair(&mut loaded, prompt, current_year(self.zone));

        self.year = loaded;
        self.set_current(path);
        Ok(report)
    }

    /// Switch to `path` without repairing it.
    pub fn load(&mut self, path: &Path) -> AppResult<()> {
        self.year.load(path, self.zone)?;
        self.set_current(path);
        Ok(())
    }

    /// Re-read the current file, dropping unsaved changes.
    pub fn reload(&mut self) -> AppResult<()> {
        let path = self.current_or_err()?.to_path_buf();
        self.year.load(&path, self.zone)
    }

    pub fn save(&self) -> AppResult<PathBuf> {
        let path = self.current_or_err()?;
        self.year.save(path, self.zone)?;
        Ok(path.to_path_buf())
    }

    /// Save under a new name, which becomes the current file.
    pub fn save_as(&mut self, target: &Path) -> AppResult<()> {
        self.year.save(target, self.zone)?;
        self.set_current(target);
        Ok(())
    }

    pub fn export_xlsx(&self, target: &Path, months: RangeInclusive<u32>) -> AppResult<()> {
        export::xlsx::export_year(&self.year, months, target)
    }
}
