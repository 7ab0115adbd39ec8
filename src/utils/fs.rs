//! File helpers shared by the JSON document and the spreadsheet export.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const TMP_SUFFIX: &str = "tmp";

/// Sibling path used while writing: `year.json` → `year.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Write `data` next to `path` and rename it over the target, so a failed
/// write never leaves a truncated document behind.
pub fn write_atomic(path: &Path, data: &[u8]) -> AppResult<()> {
    let tmp = tmp_path(path);

    let result = (|| -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(&tmp)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(e) = result {
        fs::remove_file(&tmp).ok();
        tracing::warn!(path = %path.display(), error = %e, "atomic write failed");
        return Err(AppError::write(path, e));
    }

    tracing::debug!(path = %path.display(), bytes = data.len(), "file written");
    Ok(())
}

/// Check whether a file can be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → asks the user for confirmation
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::write(path, "existing file not overwritten"))
    }
}
