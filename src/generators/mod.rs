// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod strength;

pub use password::{generate, GenerationError, PasswordGenerator};
pub use strength::score;
