// src/generators/charset.rs
use crate::models::CharsetOptions;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// Characters that are easy to confuse when read back by a human
pub const AMBIGUOUS: &str = "0O1lI";

/// Build the sampling pool for the given options.
///
/// Classes are appended in a fixed order: uppercase, lowercase, numbers,
/// symbols. Ambiguous characters are only stripped from the letter and
/// number classes; symbols are always used as-is.
pub fn build_charset(options: &CharsetOptions) -> Vec<char> {
    let mut chars = Vec::new();

    let classes = [
        (options.include_uppercase, UPPERCASE),
        (options.include_lowercase, LOWERCASE),
        (options.include_numbers, NUMBERS),
    ];

    for (enabled, class) in classes {
        if !enabled {
            continue;
        }
        if options.exclude_ambiguous {
            chars.extend(class.chars().filter(|c| !AMBIGUOUS.contains(*c)));
        } else {
            chars.extend(class.chars());
        }
    }

    if options.include_symbols {
        chars.extend(SYMBOLS.chars());
    }

    chars
}
