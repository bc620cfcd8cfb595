// src/history/mod.rs
use std::io;
use thiserror::Error;

pub mod export;
pub mod store;

pub use export::{export_file_name, export_to_dir};
pub use store::{HistoryStore, JsonFileStore, MemoryStore};

pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("History file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No passwords to export!")]
    Empty,
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Recently generated passwords, most recent first.
///
/// Holds at most [`HISTORY_CAPACITY`] distinct entries. Adding a password
/// that is already present anywhere in the list leaves the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordHistory {
    entries: Vec<String>,
}

impl PasswordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from entries already ordered most recent first.
    /// Duplicates and anything past the capacity are dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut normalized: Vec<String> = Vec::with_capacity(HISTORY_CAPACITY);
        for entry in entries {
            if normalized.len() == HISTORY_CAPACITY {
                break;
            }
            if !normalized.contains(&entry) {
                normalized.push(entry);
            }
        }
        PasswordHistory { entries: normalized }
    }

    pub fn load(store: &dyn HistoryStore) -> Result<Self> {
        let entries = store.load()?;
        let history = Self::from_entries(entries);
        log::debug!("Loaded {} history entries", history.len());
        Ok(history)
    }

    pub fn save(&self, store: &mut dyn HistoryStore) -> Result<()> {
        store.save(&self.entries)
    }

    /// Record a password. Returns `false` when it was already in the history.
    pub fn add(&mut self, password: &str) -> bool {
        if self.entries.iter().any(|p| p == password) {
            return false;
        }

        self.entries.insert(0, password.to_string());
        self.entries.truncate(HISTORY_CAPACITY);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One password per line, most recent first, no trailing newline.
    pub fn export_as_text(&self) -> String {
        self.entries.join("\n")
    }
}
