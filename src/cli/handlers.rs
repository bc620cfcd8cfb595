// src/cli/handlers.rs
use anyhow::Result;
use chrono::Utc;
use console::{style, StyledObject};
use rand::{CryptoRng, RngCore};
use std::path::{Path, PathBuf};

use crate::cli::GenerateArgs;
use crate::clipboard::{copy_with_fallback, ClipboardError, ClipboardSink, CopyOutcome};
use crate::config::Config;
use crate::generators::{score, GenerationError, PasswordGenerator};
use crate::history::{export_to_dir, HistoryStore, PasswordHistory};
use crate::models::{CharsetOptions, StrengthLabel, StrengthScore};

// Colour the strength label like the strength meter
pub fn styled_strength(score: StrengthScore) -> StyledObject<String> {
    let text = format!("{} ({}/{})", score.label().description(), score.value(), StrengthScore::MAX);
    match score.label() {
        StrengthLabel::Weak => style(text).red().bold(),
        StrengthLabel::Fair => style(text).yellow().bold(),
        StrengthLabel::Good => style(text).cyan().bold(),
        StrengthLabel::Strong => style(text).green().bold(),
    }
}

pub fn print_password(password: &str, strength: StrengthScore) {
    println!("{}", style(password).bold());
    println!("   Strength: {}", styled_strength(strength));
}

/// Generate `count` passwords and record each one in the history.
///
/// Options and length are validated before anything is drawn, so a failure
/// leaves the history exactly as it was.
pub fn generate_and_record<R: RngCore + CryptoRng>(
    generator: &mut PasswordGenerator<R>,
    history: &mut PasswordHistory,
    length: usize,
    options: &CharsetOptions,
    count: usize,
) -> Result<Vec<String>, GenerationError> {
    let mut passwords = Vec::new();
    for _ in 0..count {
        passwords.push(generator.generate_password(length, options)?);
    }

    for password in &passwords {
        history.add(password);
    }

    Ok(passwords)
}

// Copy a password and tell the user how it went; prints the password when the clipboard is out of reach
pub fn copy_and_report(clipboard: &mut dyn ClipboardSink, password: &str) -> CopyOutcome {
    let outcome = copy_with_fallback(clipboard, password);
    match &outcome {
        CopyOutcome::Copied => println!("📋 Password copied to clipboard!"),
        CopyOutcome::Fallback(ClipboardError::Empty) => println!("❌ No password to copy!"),
        CopyOutcome::Fallback(e) => {
            println!("⚠️  {}. Copy the password from here:", e);
            println!("{}", password);
        }
    }
    outcome
}

pub fn handle_generate(
    config: &Config,
    store: &mut dyn HistoryStore,
    clipboard: &mut dyn ClipboardSink,
    args: &GenerateArgs,
) -> Result<()> {
    let length = args.length.unwrap_or(config.default_password_length);
    let options = args.charset_options(config.default_exclude_ambiguous);

    let mut generator = PasswordGenerator::new().with_sampling_mode(args.sampling_mode());
    let mut history = PasswordHistory::load(store)?;

    let passwords = generate_and_record(&mut generator, &mut history, length, &options, usize::from(args.count))?;
    history.save(store)?;

    log::info!("Generated {} password(s) of length {}", passwords.len(), length);

    for password in &passwords {
        print_password(password, score(password));
    }

    if args.copy {
        if let Some(newest) = passwords.last() {
            copy_and_report(clipboard, newest);
        }
    }

    Ok(())
}

pub fn handle_score(password: &str) {
    let strength = score(password);
    println!("Strength: {}", styled_strength(strength));
}

pub fn handle_history(store: &dyn HistoryStore) -> Result<()> {
    let history = PasswordHistory::load(store)?;

    if history.is_empty() {
        println!("History is empty.");
        return Ok(());
    }

    for (i, password) in history.entries().iter().enumerate() {
        println!("{:>2}. {}", i + 1, password);
    }

    Ok(())
}

pub fn handle_clear_history(store: &mut dyn HistoryStore) -> Result<()> {
    let mut history = PasswordHistory::load(store)?;
    history.clear();
    history.save(store)?;

    log::info!("History cleared");
    println!("✅ History cleared!");

    Ok(())
}

pub fn handle_export(store: &dyn HistoryStore, dir: &Path) -> Result<PathBuf> {
    let history = PasswordHistory::load(store)?;
    let path = export_to_dir(&history, dir, Utc::now().date_naive())?;

    println!("✅ Passwords saved to {}", path.display());

    Ok(path)
}
