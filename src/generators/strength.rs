// src/generators/strength.rs
use crate::models::StrengthScore;

/// Score a password against the length and character-class rubric.
///
/// One point each for length >= 8, >= 12 and >= 16 (counted in UTF-16 code
/// units, so a character outside the Basic Multilingual Plane counts twice),
/// and one point each for containing a lowercase ASCII letter, an uppercase
/// ASCII letter, an ASCII digit, and anything else.
pub fn score(password: &str) -> StrengthScore {
    let length = password.encode_utf16().count();
    let mut score = 0;

    // Length thresholds stack
    for threshold in [8, 12, 16] {
        if length >= threshold {
            score += 1;
        }
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    StrengthScore::new(score)
}
