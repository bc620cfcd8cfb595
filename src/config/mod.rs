// src/config/mod.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::logging::parse_level;
use crate::models::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Configuration for the password generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_exclude_ambiguous: bool,

    // History
    pub history_file: Option<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading; logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_exclude_ambiguous: false,

            // History
            history_file: None, // Resolved in load()

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());

        if config.history_file.is_none() {
            config.history_file = crate::utils::default_history_path();
        }

        config
    }

    // Build a config from any key/value source; unknown or unparsable values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length;
                }
                _ => config.warnings.push(format!(
                    "Ignoring DEFAULT_PASSWORD_LENGTH '{}': expected {}-{}",
                    val, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                )),
            }
        }

        if let Some(val) = lookup("DEFAULT_EXCLUDE_AMBIGUOUS") {
            match val.trim().parse() {
                Ok(exclude) => config.default_exclude_ambiguous = exclude,
                Err(_) => config
                    .warnings
                    .push(format!("Ignoring DEFAULT_EXCLUDE_AMBIGUOUS '{}': expected true or false", val)),
            }
        }

        // History
        if let Some(path) = lookup("HISTORY_FILE") {
            if !path.trim().is_empty() {
                config.history_file = Some(PathBuf::from(path));
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => config
                    .warnings
                    .push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_EXCLUDE_AMBIGUOUS", "true"),
            ("HISTORY_FILE", "/tmp/pw-history.json"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FILE", "logs/passgen.log"),
        ]);

        assert_eq!(config.default_password_length, 24);
        assert!(config.default_exclude_ambiguous);
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/pw-history.json")));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/passgen.log")));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn bad_values_keep_defaults() {
        let mut config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "3"),
            ("DEFAULT_EXCLUDE_AMBIGUOUS", "maybe"),
            ("LOG_LEVEL", "verbose"),
            ("HISTORY_FILE", " "),
        ]);

        let warnings = std::mem::take(&mut config.warnings);
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("DEFAULT_PASSWORD_LENGTH '3'"));
        assert!(warnings[1].contains("DEFAULT_EXCLUDE_AMBIGUOUS 'maybe'"));
        assert!(warnings[2].contains("Unknown log level 'verbose'"));

        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "51")]).default_password_length, 16);
        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "x")]).default_password_length, 16);
    }
}
