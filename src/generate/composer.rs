//! Sentence and paragraph assembly.
//!
//! Length rules: sentences carry 8-15 words, paragraphs carry 4-8
//! sentences. Both bounds are inclusive.

use super::sampler::sample_words;
use rand::Rng;

/// Inclusive word-count bounds for a sentence.
pub const SENTENCE_WORDS: (usize, usize) = (8, 15);

/// Inclusive sentence-count bounds for a paragraph.
pub const PARAGRAPH_SENTENCES: (usize, usize) = (4, 8);

/// Composes a single sentence: 8-15 sampled words, the first capitalized,
/// space-joined with a trailing period.
///
/// Given the all-lowercase bank, output matches
/// `^[A-Z][a-z]*( [a-z]+)*\.$`.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.random_range(SENTENCE_WORDS.0..=SENTENCE_WORDS.1);
    let words = sample_words(rng, count);
    join_capitalized(&words)
}

/// Composes a paragraph: 4-8 sentences joined by single spaces, no internal
/// newline.
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.random_range(PARAGRAPH_SENTENCES.0..=PARAGRAPH_SENTENCES.1);
    let sentences: Vec<String> = (0..count).map(|_| sentence(rng)).collect();
    sentences.join(" ")
}

/// Joins words with single spaces, capitalizing the first and appending a
/// terminal period. Also used for the raw words unit.
pub(crate) fn join_capitalized(words: &[&str]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&capitalize(word));
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

/// Uppercases the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let pattern = regex::Regex::new(r"^[A-Z][a-z]*( [a-z]+)*\.$").unwrap();
        for _ in 0..100 {
            let s = sentence(&mut rng);
            assert!(pattern.is_match(&s), "sentence {s:?} has unexpected shape");
        }
    }

    #[test]
    fn test_sentence_word_count_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let s = sentence(&mut rng);
            let words = s.split_whitespace().count();
            assert!((8..=15).contains(&words), "got {words} words in {s:?}");
        }
    }

    #[test]
    fn test_paragraph_sentence_count_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let p = paragraph(&mut rng);
            assert!(!p.contains('\n'));
            let sentences = p.matches(". ").count() + 1;
            assert!(
                (4..=8).contains(&sentences),
                "got {sentences} sentences in {p:?}"
            );
            assert!(p.ends_with('.'));
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("lorem"), "Lorem");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_join_capitalized_single_word() {
        assert_eq!(join_capitalized(&["ipsum"]), "Ipsum.");
    }

    #[test]
    fn test_join_capitalized_spacing() {
        assert_eq!(join_capitalized(&["lorem", "ipsum", "dolor"]), "Lorem ipsum dolor.");
    }
}
