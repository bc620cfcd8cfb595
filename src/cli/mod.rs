// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// History file (defaults to the per-user config directory)
    #[arg(long, env = "HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Keep history in memory only for this run
    #[arg(long)]
    pub no_history: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
