//! Uniform sampling of random strings.

use rand::Rng;
use thiserror::Error;

use super::charset::CharacterSet;

/// User-facing message shown in place of a string when nothing can be sampled.
pub const EMPTY_CHARSET_MESSAGE: &str = "Please select at least one character type";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Please select at least one character type")]
    EmptyCharacterSet,
}

/// Draw `length` characters independently and uniformly from `charset`.
pub fn generate_string<R>(
    charset: &CharacterSet,
    length: usize,
    rng: &mut R,
) -> Result<String, GenerateError>
where
    R: Rng + ?Sized,
{
    if charset.is_empty() {
        return Err(GenerateError::EmptyCharacterSet);
    }

    let pool = charset.as_slice();
    Ok((0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::generator::charset::{GenerationConfig, UPPERCASE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn uppercase_only_scenario() {
        let config = GenerationConfig {
            length: 8,
            include_uppercase: true,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        };
        let set = CharacterSet::from_config(&config);
        let mut rng = StdRng::seed_from_u64(7);
        let value = generate_string(&set, config.length, &mut rng).unwrap();
        assert_eq!(value.chars().count(), 8);
        assert!(value.chars().all(|c| UPPERCASE.contains(c)));
    }

    #[test]
    fn every_length_in_range_is_exact() {
        let set = CharacterSet::from_config(&GenerationConfig {
            include_symbols: true,
            ..GenerationConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(42);
        for length in GenerationConfig::MIN_LENGTH..=GenerationConfig::MAX_LENGTH {
            let value = generate_string(&set, length, &mut rng).unwrap();
            assert_eq!(value.chars().count(), length);
            assert!(value.chars().all(|c| set.contains(c)));
        }
    }

    #[test]
    fn empty_set_is_rejected_with_user_message() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_string(&CharacterSet::default(), 10, &mut rng).unwrap_err();
        assert_eq!(err, GenerateError::EmptyCharacterSet);
        assert_eq!(err.to_string(), EMPTY_CHARSET_MESSAGE);
    }

    #[test]
    fn draws_cover_the_whole_alphabet() {
        let set = CharacterSet::from_config(&GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: true,
            include_symbols: false,
            length: 100,
        });
        let mut rng = StdRng::seed_from_u64(3);
        let value = generate_string(&set, 2_000, &mut rng).unwrap();
        for digit in '0'..='9' {
            assert!(value.contains(digit), "digit {digit} never drawn");
        }
    }

    #[test]
    fn repeated_calls_differ() {
        let set = CharacterSet::from_config(&GenerationConfig::default());
        let mut rng = StdRng::seed_from_u64(9);
        let first = generate_string(&set, 32, &mut rng).unwrap();
        let second = generate_string(&set, 32, &mut rng).unwrap();
        assert_ne!(first, second);
    }
}
