//! Random slug generation.

use rand::Rng;

/// Characters a slug is drawn from.
///
/// Excludes glyphs that are easy to confuse when read aloud or retyped:
/// `0 O o`, `1 I l i`.
pub const SLUG_ALPHABET: &[u8] = b"abcdefghjkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Slug length used when none is configured.
pub const DEFAULT_SLUG_LENGTH: usize = 5;

/// Generates a slug of exactly `size` characters from [`SLUG_ALPHABET`].
///
/// Each character is drawn independently and uniformly. Randomness comes from
/// the thread-local, OS-seeded generator, so concurrent callers never share
/// generator state.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug(5);
/// assert_eq!(slug.len(), 5);
/// ```
pub fn generate_slug(size: usize) -> String {
    let mut rng = rand::rng();

    (0..size)
        .map(|_| {
            let idx = rng.random_range(0..SLUG_ALPHABET.len());
            SLUG_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_slug_has_requested_length() {
        assert_eq!(generate_slug(5).len(), 5);
        assert_eq!(generate_slug(12).len(), 12);
        assert!(generate_slug(0).is_empty());
    }

    #[test]
    fn test_generate_slug_uses_alphabet_only() {
        for _ in 0..200 {
            let slug = generate_slug(DEFAULT_SLUG_LENGTH);
            assert!(slug.bytes().all(|b| SLUG_ALPHABET.contains(&b)), "{slug}");
        }
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_characters() {
        for ambiguous in [b'0', b'O', b'o', b'1', b'I', b'l', b'i'] {
            assert!(!SLUG_ALPHABET.contains(&ambiguous));
        }
    }

    #[test]
    fn test_successive_slugs_differ() {
        assert_ne!(generate_slug(DEFAULT_SLUG_LENGTH), generate_slug(DEFAULT_SLUG_LENGTH));
    }

    #[test]
    fn test_generate_slug_is_mostly_unique() {
        let slugs: HashSet<String> = (0..1000).map(|_| generate_slug(8)).collect();
        assert_eq!(slugs.len(), 1000);
    }

    #[test]
    fn test_generate_slug_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| generate_slug(DEFAULT_SLUG_LENGTH)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), DEFAULT_SLUG_LENGTH);
        }
    }
}
