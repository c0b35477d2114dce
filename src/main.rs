//! Binary entry point for Loip.
//!
//! Loip: terminal Lorem Ipsum generator with clipboard support.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use loip::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
