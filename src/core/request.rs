//! Generation request types.
//!
//! [`Unit`] is a closed enumeration over the four supported granularities;
//! dispatch on it is exhaustive, so an unrecognized unit cannot exist past
//! argument parsing.

use std::fmt;

/// The granularity of generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Individual words, capitalized first word, trailing period.
    Words,
    /// Full sentences of 8-15 words.
    Sentences,
    /// Paragraphs of 4-8 sentences, blank-line separated.
    Paragraphs,
    /// A character budget filled with paragraphs and truncated.
    Characters,
}

impl Unit {
    /// All units in interactive menu order (commands `1`-`4`).
    pub const MENU_ORDER: [Self; 4] = [
        Self::Paragraphs,
        Self::Words,
        Self::Sentences,
        Self::Characters,
    ];

    /// Human-readable unit name as shown in the menu frame.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Words => "Words",
            Self::Sentences => "Sentences",
            Self::Paragraphs => "Paragraphs",
            Self::Characters => "Characters",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single generation request: what to produce and how much.
///
/// `count` is an item count for `Words`/`Sentences`/`Paragraphs` and a
/// character budget for `Characters`. The generator rejects `count == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Requested granularity.
    pub unit: Unit,
    /// Item count, or character budget for [`Unit::Characters`].
    pub count: usize,
}

impl GenerationRequest {
    /// Creates a new request.
    #[must_use]
    pub const fn new(unit: Unit, count: usize) -> Self {
        Self { unit, count }
    }
}
