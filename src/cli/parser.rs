//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::{GenerationRequest, Unit};
use clap::{ArgGroup, Parser};

/// Loip: terminal Lorem Ipsum generator.
///
/// Generates placeholder text in words, sentences, paragraphs, or a
/// character budget, printing to stdout and copying to the system clipboard
/// when one is available.
#[derive(Parser, Debug)]
#[command(name = "loip")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("unit").args(["words", "sentences", "paragraphs"])))]
pub struct Cli {
    /// Number of items to generate.
    #[arg(default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub count: usize,

    /// Generate words.
    #[arg(short, long)]
    pub words: bool,

    /// Generate sentences.
    #[arg(short, long)]
    pub sentences: bool,

    /// Generate paragraphs (default).
    #[arg(short, long)]
    pub paragraphs: bool,

    /// Generate N characters. Takes precedence over the unit flags; the
    /// positional count is ignored.
    #[arg(short, long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub characters: Option<usize>,

    /// Start interactive TUI mode; other flags are ignored.
    #[arg(long)]
    pub tui: bool,

    /// Only copy to clipboard, no stdout. Clipboard status still goes to
    /// stderr.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolves flags to a generation request.
    ///
    /// `--characters` wins over the unit group; the group defaults to
    /// paragraphs when no unit flag is given.
    #[must_use]
    pub const fn request(&self) -> GenerationRequest {
        if let Some(budget) = self.characters {
            return GenerationRequest::new(Unit::Characters, budget);
        }
        let unit = if self.words {
            Unit::Words
        } else if self.sentences {
            Unit::Sentences
        } else {
            Unit::Paragraphs
        };
        GenerationRequest::new(unit, self.count)
    }
}
