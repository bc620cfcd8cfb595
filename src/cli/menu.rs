// src/cli/menu.rs
use anyhow::Result;
use chrono::Utc;
use inquire::{Confirm, InquireError, Password, Select, Text};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers::{copy_and_report, generate_and_record, print_password, styled_strength};
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::generators::{score, PasswordGenerator};
use crate::history::{export_to_dir, HistoryError, HistoryStore, PasswordHistory};
use crate::models::{CharsetOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::utils::truncate_string;

const GENERATE: &str = "🔐  Generate password";
const CHECK_STRENGTH: &str = "📊  Check password strength";
const SHOW_HISTORY: &str = "🕘  Password history";
const CLEAR_HISTORY: &str = "🧹  Clear history";
const EXPORT_HISTORY: &str = "💾  Export history";
const EXIT: &str = "🚪  Exit";

// History entries longer than this are shortened in lists
const PREVIEW_CHARS: usize = 20;

pub fn run_cli_menu(
    config: &Config,
    store: &mut dyn HistoryStore,
    clipboard: &mut dyn ClipboardSink,
    should_exit: Arc<AtomicBool>,
) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUST PASSWORD FORGE        ║");
    println!("╚══════════════════════════════════════╝");

    let mut history = PasswordHistory::load(store)?;
    let mut generator = PasswordGenerator::new();

    // Length and options are remembered between generations, like the page's controls
    let mut length = config.default_password_length;
    let mut options = CharsetOptions {
        exclude_ambiguous: config.default_exclude_ambiguous,
        ..CharsetOptions::all()
    };

    loop {
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let choice = match Select::new(
            "What would you like to do?",
            vec![GENERATE, CHECK_STRENGTH, SHOW_HISTORY, CLEAR_HISTORY, EXPORT_HISTORY, EXIT],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            GENERATE => {
                let prompt = format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
                let input = match cancellable(Text::new(&prompt).with_default(&length.to_string()).prompt())? {
                    Some(input) => input,
                    None => continue,
                };

                match parse_length_input(&input) {
                    Ok(value) => length = value,
                    Err(message) => {
                        println!("❌ {}", message);
                        continue;
                    }
                }

                options = match prompt_charset_options(&options)? {
                    Some(options) => options,
                    None => continue,
                };

                match generate_and_record(&mut generator, &mut history, length, &options, 1) {
                    Ok(passwords) => {
                        history.save(store)?;
                        println!();
                        for password in &passwords {
                            print_password(password, score(password));
                        }
                        println!();

                        if let Some(password) = passwords.last() {
                            offer_copy(clipboard, password)?;
                        }
                    }
                    Err(e) => println!("❌ {}", e),
                }
            }
            CHECK_STRENGTH => {
                let password = Password::new("Password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt();

                if let Some(password) = cancellable(password)? {
                    println!("Strength: {}", styled_strength(score(&password)));
                }
            }
            SHOW_HISTORY => {
                if history.is_empty() {
                    println!("History is empty.");
                    continue;
                }

                let previews: Vec<String> = history
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| format!("{:>2}. {}", i + 1, truncate_string(p, PREVIEW_CHARS)))
                    .collect();

                let selected = match cancellable(Select::new("Select a password:", previews).raw_prompt())? {
                    Some(selected) => selected,
                    None => continue,
                };

                if let Some(password) = history.get(selected.index) {
                    println!();
                    print_password(password, score(password));
                    println!();

                    offer_copy(clipboard, password)?;
                }
            }
            CLEAR_HISTORY => {
                let confirm = Confirm::new("Clear the whole history?").with_default(false).prompt();

                if cancellable(confirm)? == Some(true) {
                    history.clear();
                    history.save(store)?;
                    log::info!("History cleared");
                    println!("✅ History cleared!");
                }
            }
            EXPORT_HISTORY => {
                let dir = match cancellable(Text::new("Export directory:").with_default(".").prompt())? {
                    Some(dir) => dir,
                    None => continue,
                };

                match export_to_dir(&history, &PathBuf::from(dir.trim()), Utc::now().date_naive()) {
                    Ok(path) => println!("✅ Passwords saved to {}", path.display()),
                    Err(HistoryError::Empty) => println!("❌ No passwords to export!"),
                    Err(e) => println!("❌ Export failed: {}", e),
                }
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

/// Turn Esc on a sub-prompt into `None` so the caller can return to the main menu.
///
/// Ctrl+C and real prompt failures still propagate.
fn cancellable<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Parse the length typed at the menu prompt, accepting only the generator's range.
pub fn parse_length_input(input: &str) -> std::result::Result<usize, String> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a number", trimmed))?;

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&value) {
        return Err(format!(
            "Password length must be between {} and {}",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        ));
    }

    Ok(value)
}

fn offer_copy(clipboard: &mut dyn ClipboardSink, password: &str) -> Result<()> {
    let copy = Confirm::new("Copy to clipboard?").with_default(false).prompt();
    if cancellable(copy)? == Some(true) {
        copy_and_report(clipboard, password);
    }
    Ok(())
}

fn prompt_charset_options(current: &CharsetOptions) -> Result<Option<CharsetOptions>> {
    let questions = [
        ("Include uppercase letters?", current.include_uppercase),
        ("Include lowercase letters?", current.include_lowercase),
        ("Include numbers?", current.include_numbers),
        ("Include symbols?", current.include_symbols),
        ("Exclude look-alike characters (0, O, 1, l, I)?", current.exclude_ambiguous),
    ];

    let mut answers = [false; 5];
    for (answer, (question, default)) in answers.iter_mut().zip(questions) {
        match cancellable(Confirm::new(question).with_default(default).prompt())? {
            Some(value) => *answer = value,
            None => return Ok(None),
        }
    }

    let [include_uppercase, include_lowercase, include_numbers, include_symbols, exclude_ambiguous] = answers;
    Ok(Some(CharsetOptions {
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
        exclude_ambiguous,
    }))
}
