// src/generators/password.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

use crate::crypto;
use crate::generators::charset::build_charset;
use crate::generators::strength;
use crate::models::{CharsetOptions, SamplingMode, StrengthScore, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Please select at least one character type!")]
    EmptyCharset,

    #[error("Password length must be between {min} and {max} characters (got {length})")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, GenerationError>;

pub struct PasswordGenerator<R = OsRng> {
    rng: R,
    mode: SamplingMode,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator::with_rng(OsRng)
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    /// Use a specific random source. It still has to be a CSPRNG.
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator {
            rng,
            mode: SamplingMode::default(),
        }
    }

    pub fn with_sampling_mode(mut self, mode: SamplingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn sampling_mode(&self) -> SamplingMode {
        self.mode
    }

    pub fn generate_password(&mut self, length: usize, options: &CharsetOptions) -> Result<String> {
        let charset = build_charset(options);
        if charset.is_empty() {
            log::warn!("Password generation refused: no character classes selected");
            return Err(GenerationError::EmptyCharset);
        }

        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            log::warn!("Password generation refused: length {} out of range", length);
            return Err(GenerationError::InvalidLength {
                length,
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            });
        }

        let password: String = crypto::random_indices(&mut self.rng, charset.len(), length, self.mode)
            .into_iter()
            .map(|i| charset[i])
            .collect();

        log::debug!(
            "Generated password of length {} from a pool of {} characters ({:?})",
            length,
            charset.len(),
            self.mode
        );

        Ok(password)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthScore {
        strength::score(password)
    }
}

/// Generate a password with the operating system's CSPRNG and modulo sampling.
pub fn generate(length: usize, options: &CharsetOptions) -> Result<String> {
    PasswordGenerator::new().generate_password(length, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::AMBIGUOUS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded(seed: u64) -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn no_classes() -> CharsetOptions {
        CharsetOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_ambiguous: false,
        }
    }

    // Every non-empty combination of the four class flags, with and without exclusion
    fn all_option_sets() -> Vec<CharsetOptions> {
        let mut sets = Vec::new();
        for bits in 1u8..16 {
            for exclude_ambiguous in [false, true] {
                sets.push(CharsetOptions {
                    include_uppercase: bits & 1 != 0,
                    include_lowercase: bits & 2 != 0,
                    include_numbers: bits & 4 != 0,
                    include_symbols: bits & 8 != 0,
                    exclude_ambiguous,
                });
            }
        }
        sets
    }

    #[test]
    fn output_has_requested_length_and_charset() {
        let mut generator = seeded(42);
        for options in all_option_sets() {
            let charset = build_charset(&options);
            for length in [MIN_PASSWORD_LENGTH, 16, MAX_PASSWORD_LENGTH] {
                let password = generator.generate_password(length, &options).unwrap();
                assert_eq!(password.chars().count(), length);
                assert!(password.chars().all(|c| charset.contains(&c)), "{:?} -> {}", options, password);
            }
        }
    }

    #[test]
    fn empty_charset_always_fails() {
        let mut generator = seeded(1);
        for length in [0, 4, 16, 50, 1000] {
            assert_eq!(generator.generate_password(length, &no_classes()), Err(GenerationError::EmptyCharset));
        }

        let mut exclude_only = no_classes();
        exclude_only.exclude_ambiguous = true;
        assert_eq!(generate(16, &exclude_only), Err(GenerationError::EmptyCharset));
    }

    #[test]
    fn out_of_range_lengths_are_rejected() {
        let mut generator = seeded(2);
        for length in [0, 3, 51, 200] {
            assert_eq!(
                generator.generate_password(length, &CharsetOptions::all()),
                Err(GenerationError::InvalidLength { length, min: 4, max: 50 })
            );
        }
    }

    #[test]
    fn exclude_ambiguous_never_emits_ambiguous_chars() {
        let options = CharsetOptions {
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
            exclude_ambiguous: true,
        };
        let mut generator = seeded(3);
        for _ in 0..200 {
            let password = generator.generate_password(MAX_PASSWORD_LENGTH, &options).unwrap();
            assert!(!password.chars().any(|c| AMBIGUOUS.contains(c)), "{}", password);
        }
    }

    #[test]
    fn same_seed_same_password() {
        let a = seeded(11).generate_password(20, &CharsetOptions::all()).unwrap();
        let b = seeded(11).generate_password(20, &CharsetOptions::all()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejection_sampling_respects_charset() {
        let mut generator = seeded(5).with_sampling_mode(SamplingMode::Rejection);
        assert_eq!(generator.sampling_mode(), SamplingMode::Rejection);

        let options = CharsetOptions::all();
        let charset = build_charset(&options);
        let password = generator.generate_password(MAX_PASSWORD_LENGTH, &options).unwrap();
        assert_eq!(password.chars().count(), MAX_PASSWORD_LENGTH);
        assert!(password.chars().all(|c| charset.contains(&c)));
    }

    #[test]
    fn os_rng_generator_works() {
        let password = generate(12, &CharsetOptions::all()).unwrap();
        assert_eq!(password.len(), 12);

        let generator: PasswordGenerator = PasswordGenerator::default();
        assert_eq!(generator.analyze_password_strength("abcdefgh").value(), 2);
    }
}
