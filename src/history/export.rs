// src/history/export.rs
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use super::{HistoryError, PasswordHistory, Result};

// passwords_<YYYY-MM-DD>.txt
pub fn export_file_name(date: NaiveDate) -> String {
    format!("passwords_{}.txt", date.format("%Y-%m-%d"))
}

/// Write the history as plain text into `dir` and return the file path.
/// An existing export for the same day is overwritten.
pub fn export_to_dir(history: &PasswordHistory, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    if history.is_empty() {
        return Err(HistoryError::Empty);
    }

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(export_file_name(date));
    fs::write(&path, history.export_as_text())?;
    log::info!("Exported {} passwords to {}", history.len(), path.display());

    Ok(path)
}
