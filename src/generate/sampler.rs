//! Uniform sampling from the word bank.
//!
//! Every draw goes through an explicit [`Rng`] handle supplied by the
//! caller, so tests can seed a [`rand::rngs::StdRng`] while production code
//! passes [`rand::rng()`].

use crate::core::WORDS;
use rand::Rng;

/// Draws one word uniformly from the bank.
///
/// Infallible: the bank is a non-empty compile-time constant.
pub fn sample_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WORDS[rng.random_range(0..WORDS.len())]
}

/// Draws `n` words uniformly, with replacement.
///
/// Returns an empty vector for `n == 0`.
pub fn sample_words<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<&'static str> {
    (0..n).map(|_| sample_word(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_word_from_bank() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let word = sample_word(&mut rng);
            assert!(WORDS.contains(&word));
        }
    }

    #[test]
    fn test_sample_words_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_words(&mut rng, 0).len(), 0);
        assert_eq!(sample_words(&mut rng, 1).len(), 1);
        assert_eq!(sample_words(&mut rng, 50).len(), 50);
    }

    #[test]
    fn test_sampling_is_seed_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(sample_words(&mut a, 20), sample_words(&mut b, 20));
    }
}
