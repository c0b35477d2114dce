//! One-shot CLI execution.
//!
//! Generated text goes to stdout; the clipboard outcome is advisory and goes
//! to stderr, so piping and `--quiet` keep the two channels clean. Clipboard
//! failure never changes the exit status.

use crate::cli::parser::Cli;
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::generate::generate;
use crate::tui;
use rand::Rng;
use std::io::{self, Write};

/// Status line reported on stderr after a successful copy.
pub const COPIED_MSG: &str = "✓ Copied to clipboard!";

/// Status line reported on stderr when the copy did not happen.
pub const NOT_COPIED_MSG: &str = "⚠ Could not copy to clipboard";

/// Runs the parsed CLI against the real process environment.
///
/// # Errors
///
/// Returns an error only for unrecoverable I/O failures on the output
/// streams.
pub fn run(cli: &Cli) -> Result<()> {
    let mut rng = rand::rng();
    let mut clipboard = Clipboard::detect();

    if cli.tui {
        let stdin = io::stdin();
        return tui::run(
            &mut rng,
            &mut stdin.lock(),
            &mut io::stdout().lock(),
            &mut clipboard,
        );
    }

    execute(
        cli,
        &mut rng,
        &mut clipboard,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// One-shot generation against injected collaborators.
///
/// Split out from [`run`] so tests can drive it with a seeded RNG, a fake
/// clipboard, and capturing writers.
///
/// # Errors
///
/// Returns an error if writing to `out` or `err` fails.
pub fn execute<R, O, E>(
    cli: &Cli,
    rng: &mut R,
    clipboard: &mut Clipboard,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    R: Rng + ?Sized,
    O: Write,
    E: Write,
{
    let request = cli.request();
    let text = generate(rng, &request)?;

    if !cli.quiet {
        writeln!(out, "{text}")?;
    }

    let status = if clipboard.try_copy(&text) {
        COPIED_MSG
    } else {
        NOT_COPIED_MSG
    };
    writeln!(err, "{status}")?;

    Ok(())
}
