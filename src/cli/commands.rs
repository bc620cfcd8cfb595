// src/cli/commands.rs
use clap::Subcommand;
use std::path::PathBuf;

use crate::models::{CharsetOptions, SamplingMode};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords and add them to the history
    Generate(GenerateArgs),

    /// Rate the strength of a password
    Score {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Show the password history, most recent first
    History,

    /// Remove every entry from the history
    ClearHistory,

    /// Write the history to passwords_<date>.txt
    Export {
        /// Directory to write the file into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (4-50, defaults to DEFAULT_PASSWORD_LENGTH or 16)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude look-alike characters (0, O, 1, l, I)
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Use rejection sampling for a strictly uniform distribution
    #[arg(long)]
    pub strict: bool,

    /// Number of passwords to generate (1-100)
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=MAX_COUNT))]
    pub count: u16,

    /// Copy the newest generated password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

// Upper bound for `generate --count`
pub const MAX_COUNT: i64 = 100;

impl GenerateArgs {
    pub fn charset_options(&self, default_exclude_ambiguous: bool) -> CharsetOptions {
        CharsetOptions {
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_numbers: !self.no_numbers,
            include_symbols: !self.no_symbols,
            exclude_ambiguous: self.exclude_ambiguous || default_exclude_ambiguous,
        }
    }

    pub fn sampling_mode(&self) -> SamplingMode {
        if self.strict {
            SamplingMode::Rejection
        } else {
            SamplingMode::Modulo
        }
    }
}
