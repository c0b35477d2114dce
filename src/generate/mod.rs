//! Text generation for Loip.
//!
//! [`generate`] is the sole content entry point: it dispatches on the
//! requested [`Unit`] and produces the final owned string. Sampling and
//! composition live in the submodules.

pub mod composer;
pub mod sampler;

pub use composer::{PARAGRAPH_SENTENCES, SENTENCE_WORDS, paragraph, sentence};
pub use sampler::{sample_word, sample_words};

use crate::core::{GenerationRequest, Unit};
use crate::error::{Error, Result};
use rand::Rng;

/// Generates text for a request.
///
/// - `Words`: `count` sampled words, first capitalized, trailing period.
/// - `Sentences`: `count` sentences joined by single spaces.
/// - `Paragraphs`: `count` paragraphs joined by blank lines.
/// - `Characters`: paragraphs accumulated until the character budget is
///   reached, truncated to the budget and stripped of trailing whitespace.
///
/// # Errors
///
/// Returns [`Error::InvalidCount`] when `count == 0`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, request: &GenerationRequest) -> Result<String> {
    if request.count == 0 {
        return Err(Error::InvalidCount { count: 0 });
    }
    log::debug!("generating {} {}", request.count, request.unit);

    let text = match request.unit {
        Unit::Words => {
            let words = sample_words(rng, request.count);
            composer::join_capitalized(&words)
        }
        Unit::Sentences => {
            let sentences: Vec<String> = (0..request.count).map(|_| sentence(rng)).collect();
            sentences.join(" ")
        }
        Unit::Paragraphs => {
            let paragraphs: Vec<String> = (0..request.count).map(|_| paragraph(rng)).collect();
            paragraphs.join("\n\n")
        }
        Unit::Characters => {
            // Paragraphs are never empty, so the budget is always reached.
            let mut text = String::new();
            while text.len() < request.count {
                text.push_str(&paragraph(rng));
                text.push_str("\n\n");
            }
            truncate_at_boundary(&mut text, request.count);
            let stripped = text.trim_end().len();
            text.truncate(stripped);
            text
        }
    };

    Ok(text)
}

/// Truncates a string to at most `max` bytes, backing up to a valid UTF-8
/// boundary. The bank is ASCII, so in practice this lands exactly on `max`.
fn truncate_at_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut boundary = max;
    while !s.is_char_boundary(boundary) && boundary > 0 {
        boundary -= 1;
    }
    s.truncate(boundary);
}
