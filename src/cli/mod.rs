//! CLI layer for Loip.
//!
//! Provides the command-line interface using clap, plus the one-shot
//! execution path that ties generation, output, and the clipboard together.

pub mod commands;
pub mod parser;

pub use commands::{execute, run};
pub use parser::Cli;
