use clap::Parser;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use rust_passgen::cli::{self, Args, CliCommand};
use rust_passgen::clipboard::SystemClipboard;
use rust_passgen::config::Config;
use rust_passgen::history::{HistoryStore, JsonFileStore, MemoryStore};
use rust_passgen::logging;

fn main() {
    if let Err(e) = run() {
        log::error!("{:#}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(config.log_level, config.log_file.as_deref())?;
    log::info!("Starting rust_passgen {}", env!("CARGO_PKG_VERSION"));
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let mut store = open_history_store(&args, &config);

    match &args.command {
        Some(CliCommand::Generate(generate)) => {
            cli::handlers::handle_generate(&config, &mut *store, &mut SystemClipboard::new(), generate)
        }
        Some(CliCommand::Score { password }) => {
            cli::handlers::handle_score(password);
            Ok(())
        }
        Some(CliCommand::History) => cli::handlers::handle_history(&*store),
        Some(CliCommand::ClearHistory) => cli::handlers::handle_clear_history(&mut *store),
        Some(CliCommand::Export { dir }) => cli::handlers::handle_export(&*store, dir).map(|_| ()),
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, exiting");
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })?;
            }

            cli::menu::run_cli_menu(&config, &mut *store, &mut SystemClipboard::new(), should_exit)
        }
    }
}

fn open_history_store(args: &Args, config: &Config) -> Box<dyn HistoryStore> {
    if args.no_history {
        log::debug!("History disabled for this run");
        return Box::new(MemoryStore::new());
    }

    match args.history_file.clone().or_else(|| config.history_file.clone()) {
        Some(path) => {
            log::debug!("Using history file {}", path.display());
            Box::new(JsonFileStore::new(path))
        }
        None => {
            log::warn!("No config directory available, history will not be kept");
            Box::new(MemoryStore::new())
        }
    }
}
