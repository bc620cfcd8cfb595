// src/history/store.rs
use std::fs;
use std::path::{Path, PathBuf};

use super::Result;

/// Where the password history lives between runs.
pub trait HistoryStore {
    /// Stored entries, most recent first. A store with nothing saved yields an empty list.
    fn load(&self) -> Result<Vec<String>>;

    fn save(&mut self, entries: &[String]) -> Result<()>;
}

/// JSON array of strings in a single file.
///
/// Saving an empty history removes the file instead of writing `[]`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, entries: &[String]) -> Result<()> {
        if entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
                log::debug!("Removed history file {}", self.path.display());
            }
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(entries)?;
        fs::write(&self.path, json)?;
        log::debug!("Saved {} history entries to {}", entries.len(), self.path.display());

        Ok(())
    }
}

/// Keeps history in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[String]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryError;
    use tempfile::tempdir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_round_trip_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&strings(&["b", "a"])).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["b","a"]"#);
        assert_eq!(store.load().unwrap(), strings(&["b", "a"]));
    }

    #[test]
    fn saving_empty_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&strings(&["a"])).unwrap();
        store.save(&[]).unwrap();
        assert!(!path.exists());
        assert!(store.load().unwrap().is_empty());

        // nothing to remove the second time
        store.save(&[]).unwrap();
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(HistoryError::Json(_))));
    }

    #[test]
    fn blank_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "  \n").unwrap();
        assert!(JsonFileStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn memory_store_keeps_last_save() {
        let mut store = MemoryStore::new();
        store.save(&strings(&["x"])).unwrap();
        store.save(&strings(&["y", "x"])).unwrap();
        assert_eq!(store.load().unwrap(), strings(&["y", "x"]));
    }
}
