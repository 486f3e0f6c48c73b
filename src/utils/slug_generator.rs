//! Random slug generation.
//!
//! Generated slugs are not checked against the store before use. A collision
//! is caught by the store's uniqueness constraint at insert time and reported
//! like any other taken slug.

use rand::Rng;

/// Number of characters in a generated slug.
pub const GENERATED_SLUG_LENGTH: usize = 6;

/// URL-safe, lowercase alphabet for generated slugs.
///
/// Lowercase only, so a generated slug survives the case normalization
/// applied to lookups.
pub const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates a random slug of [`GENERATED_SLUG_LENGTH`] characters.
///
/// Uses the thread-local CSPRNG from `rand`.
pub fn generate_slug() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_SLUG_LENGTH)
        .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_slug_has_correct_length() {
        assert_eq!(generate_slug().len(), GENERATED_SLUG_LENGTH);
    }

    #[test]
    fn test_generate_slug_uses_alphabet() {
        for _ in 0..200 {
            let slug = generate_slug();
            assert!(slug.bytes().all(|b| SLUG_ALPHABET.contains(&b)), "{}", slug);
        }
    }

    #[test]
    fn test_generate_slug_is_lowercase() {
        for _ in 0..200 {
            let slug = generate_slug();
            assert_eq!(slug, slug.to_lowercase());
        }
    }

    #[test]
    fn test_generate_slug_rarely_repeats() {
        let slugs: HashSet<String> = (0..1000).map(|_| generate_slug()).collect();

        // 38^6 possible values; a handful of repeats in 1000 draws would
        // already point at a broken generator.
        assert!(slugs.len() >= 995);
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<&u8> = SLUG_ALPHABET.iter().collect();
        assert_eq!(unique.len(), SLUG_ALPHABET.len());
    }
}
