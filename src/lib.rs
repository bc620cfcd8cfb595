//! Random password generation, rubric-based strength scoring and a small
//! bounded history of recently generated passwords.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod crypto;
pub mod generators;
pub mod history;
pub mod logging;
pub mod models;
pub mod utils;

pub use generators::{generate, score, GenerationError, PasswordGenerator};
pub use history::{HistoryStore, PasswordHistory};
pub use models::{CharsetOptions, SamplingMode, StrengthLabel, StrengthScore};
