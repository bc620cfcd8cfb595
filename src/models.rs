// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 50;

// Character classes selected for generation.
// No Default: at least one class has to be picked by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetOptions {
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl CharsetOptions {
    /// Options with every character class enabled and nothing excluded.
    pub fn all() -> Self {
        Self {
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }

    pub fn has_any_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }
}

/// How a random byte is turned into a charset index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplingMode {
    /// `byte % charset_len`. Slightly biased when the charset size does not divide 256.
    #[default]
    Modulo,
    /// Bytes at or above the largest multiple of the charset size are redrawn.
    Rejection,
}

/// Rubric score in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Self {
        StrengthScore(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.0)
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.0, Self::MAX, self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Fair,
            5 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    // Text shown next to the strength meter
    pub fn description(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak Password",
            StrengthLabel::Fair => "Fair Password",
            StrengthLabel::Good => "Good Password",
            StrengthLabel::Strong => "Strong Password",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Fair => write!(f, "Fair"),
            StrengthLabel::Good => write!(f, "Good"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}
