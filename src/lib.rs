//! # Loip
//!
//! Terminal Lorem Ipsum generator with clipboard support.
//!
//! Loip produces placeholder text in four units — words, sentences,
//! paragraphs, or a character budget — and places the result on the system
//! clipboard when one is available. It ships a one-shot CLI and an
//! interactive menu-driven terminal mode.
//!
//! ## Features
//!
//! - **Four units**: words, sentences (8-15 words), paragraphs (4-8
//!   sentences), and exact character budgets
//! - **Best-effort clipboard**: degrades to a no-op with a warning when no
//!   clipboard facility exists
//! - **Interactive mode**: boxed menu loop with live unit/count selection

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod clipboard;
pub mod core;
pub mod error;
pub mod generate;
pub mod tui;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{GenerationRequest, Unit, WORDS};

// Re-export generation entry points
pub use generate::{generate, paragraph, sample_word, sample_words, sentence};

// Re-export the clipboard adapter
pub use clipboard::{Clipboard, ClipboardBackend};

// Re-export CLI types
pub use cli::Cli;
