use crate::Generator;
use burrow_core::Hash;
use rand::Rng;
use typed_builder::TypedBuilder;

/// Lowercase base-36 alphabet.
pub const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const DEFAULT_HASH_LENGTH: usize = 7;

/// Generates fixed-length hashes with every character drawn uniformly from
/// [`ALPHABET`].
///
/// With the default length there are 36^7 (about 7.8e10) possible hashes.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomGenerator {
    /// Number of characters per hash, at least 1.
    #[builder(
        default = DEFAULT_HASH_LENGTH,
        setter(transform = |length: usize| length.max(1))
    )]
    length: usize,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = Hash;

    fn generate(&self) -> Self::Output {
        let mut rng = rand::thread_rng();
        let hash: String = (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Hash::new_unchecked(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_base36(hash: &str) -> bool {
        hash.bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    }

    #[test]
    fn default_hashes_are_seven_base36_chars() {
        let generator = RandomGenerator::new();

        for _ in 0..1_000 {
            let hash = generator.generate();
            assert_eq!(hash.as_str().len(), DEFAULT_HASH_LENGTH);
            assert!(is_base36(hash.as_str()), "unexpected hash {hash}");
        }
    }

    #[test]
    fn custom_length() {
        let generator = RandomGenerator::builder().length(12).build();

        assert_eq!(generator.length(), 12);
        assert_eq!(generator.generate().as_str().len(), 12);
    }

    #[test]
    fn zero_length_is_clamped() {
        let generator = RandomGenerator::builder().length(0).build();

        assert_eq!(generator.length(), 1);
        assert_eq!(generator.generate().as_str().len(), 1);
    }

    #[test]
    fn hashes_are_not_repeated_in_practice() {
        let generator = RandomGenerator::new();
        let hashes: HashSet<_> = (0..1_000).map(|_| generator.generate()).collect();

        assert_eq!(hashes.len(), 1_000);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
