//! Interactive menu-driven terminal mode.
//!
//! A blocking read-eval-print loop over a [`Session`]: digit commands pick
//! the unit, `n` (or a bare integer) sets the count, `g` generates and
//! copies, `q` quits. The reader and writer are injected so the loop can be
//! driven by tests with a scripted command sequence.

mod render;

use crate::clipboard::Clipboard;
use crate::core::{GenerationRequest, Unit};
use crate::error::Result;
use crate::generate::generate;
use rand::Rng;
use std::io::{BufRead, Write};

/// Mutable interactive state: the currently selected unit and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Currently selected generation unit.
    pub unit: Unit,
    /// Currently selected count (always ≥ 1).
    pub count: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            unit: Unit::Paragraphs,
            count: 3,
        }
    }
}

/// Runs the interactive loop until `q` or end of input.
///
/// Each iteration redraws the menu frame and blocks on one line of input.
/// Read failures terminate the loop gracefully; only write failures on
/// `out` propagate as errors.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run<R, I, W>(
    rng: &mut R,
    input: &mut I,
    out: &mut W,
    clipboard: &mut Clipboard,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut session = Session::default();
    // Left on screen after `g` so the generated text is not wiped by the
    // next redraw.
    let mut clear_screen = true;

    loop {
        render::menu(out, &session, clear_screen)?;
        clear_screen = true;
        write!(out, "\n> ")?;
        out.flush()?;

        let line = match read_line(input) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::warn!("input stream closed: {e}");
                break;
            }
        };

        let cmd = line.trim().to_lowercase();
        match cmd.as_str() {
            "" => {}
            "q" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            "g" => {
                generate_and_show(rng, out, clipboard, &session)?;
                clear_screen = false;
            }
            "n" => prompt_new_count(input, out, &mut session)?,
            other => {
                if let Some(unit) = digit_unit(other) {
                    session.unit = unit;
                } else if let Ok(count) = other.parse::<usize>() {
                    if count > 0 {
                        session.count = count;
                    } else {
                        writeln!(out, "Count must be positive!")?;
                    }
                } else {
                    writeln!(out, "Unknown command. Use 1-4, g, n, or q")?;
                }
            }
        }
    }

    Ok(())
}

/// Maps menu digits `1`-`4` to units, in menu order.
fn digit_unit(cmd: &str) -> Option<Unit> {
    match cmd {
        "1" => Some(Unit::MENU_ORDER[0]),
        "2" => Some(Unit::MENU_ORDER[1]),
        "3" => Some(Unit::MENU_ORDER[2]),
        "4" => Some(Unit::MENU_ORDER[3]),
        _ => None,
    }
}

/// Generates for the current state, shows the preview frame, reports the
/// clipboard outcome, and prints the full text.
fn generate_and_show<R, W>(
    rng: &mut R,
    out: &mut W,
    clipboard: &mut Clipboard,
    session: &Session,
) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    let request = GenerationRequest::new(session.unit, session.count);
    let text = match generate(rng, &request) {
        Ok(text) => text,
        Err(e) => {
            // Unreachable while the session invariant (count ≥ 1) holds.
            writeln!(out, "{e}")?;
            return Ok(());
        }
    };

    write!(out, "{}", render::CLEAR_SCREEN)?;
    render::preview(out, &text)?;

    writeln!(out)?;
    if clipboard.try_copy(&text) {
        writeln!(out, "✓ Generated and copied to clipboard!")?;
    } else {
        writeln!(out, "✓ Generated! (Clipboard not available)")?;
    }

    writeln!(out, "\nFull text printed below:\n")?;
    writeln!(out, "{text}")?;
    Ok(())
}

/// Prompts for a replacement count; invalid input leaves the state
/// unchanged and reports inline.
fn prompt_new_count<I, W>(input: &mut I, out: &mut W, session: &mut Session) -> Result<()>
where
    I: BufRead,
    W: Write,
{
    write!(out, "Enter new count: ")?;
    out.flush()?;

    let Ok(Some(line)) = read_line(input) else {
        return Ok(());
    };
    match line.trim().parse::<usize>() {
        Ok(count) if count > 0 => session.count = count,
        Ok(_) => writeln!(out, "Count must be positive!")?,
        Err(_) => writeln!(out, "Invalid number!")?,
    }
    Ok(())
}

/// Reads one line; `Ok(None)` signals end of input.
fn read_line<I: BufRead>(input: &mut I) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::clipboard::ClipboardBackend;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::{Arc, Mutex};

    struct RecordingBackend(Arc<Mutex<Vec<String>>>);

    impl ClipboardBackend for RecordingBackend {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.0.lock().map(|mut v| v.push(text.to_string())).ok();
            Ok(())
        }
    }

    fn drive(script: &str, clipboard: &mut Clipboard) -> String {
        let mut rng = StdRng::seed_from_u64(5);
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run(&mut rng, &mut input, &mut out, clipboard).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_command_sequence_generates_five_words() {
        let copied = Arc::new(Mutex::new(Vec::new()));
        let mut clipboard =
            Clipboard::with_backend(Box::new(RecordingBackend(Arc::clone(&copied))));

        let out = drive("2\nn\n5\ng\nq\n", &mut clipboard);

        assert!(out.contains("Mode: Words"));
        assert!(out.contains("Count: 5"));
        assert!(out.contains("✓ Generated and copied to clipboard!"));
        assert!(out.contains("Goodbye!"));

        let copied = copied.lock().unwrap();
        assert_eq!(copied.len(), 1);
        let text = &copied[0];
        assert_eq!(text.trim_end_matches('.').split(' ').count(), 5);
        assert!(text.chars().next().is_some_and(char::is_uppercase));
    }

    #[test]
    fn test_digit_selects_unit_without_generating() {
        let copied = Arc::new(Mutex::new(Vec::new()));
        let mut clipboard =
            Clipboard::with_backend(Box::new(RecordingBackend(Arc::clone(&copied))));

        let out = drive("4\nq\n", &mut clipboard);

        assert!(out.contains("Mode: Characters"));
        assert!(copied.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_new_count_keeps_state() {
        let out = drive("n\nabc\nn\n0\nq\n", &mut Clipboard::unavailable());
        assert!(out.contains("Invalid number!"));
        assert!(out.contains("Count must be positive!"));
        // Default count survives both rejections.
        assert!(out.contains("Count: 3"));
        assert!(!out.contains("Count: 0"));
    }

    #[test]
    fn test_bare_integer_replaces_count() {
        let out = drive("12\nq\n", &mut Clipboard::unavailable());
        assert!(out.contains("Count: 12"));
    }

    #[test]
    fn test_unknown_command_hint() {
        let out = drive("frobnicate\nq\n", &mut Clipboard::unavailable());
        assert!(out.contains("Unknown command. Use 1-4, g, n, or q"));
    }

    #[test]
    fn test_generate_without_clipboard_reports_unavailable() {
        let out = drive("g\nq\n", &mut Clipboard::unavailable());
        assert!(out.contains("✓ Generated! (Clipboard not available)"));
        assert!(out.contains("Full text printed below:"));
    }

    #[test]
    fn test_end_of_input_exits_gracefully() {
        let out = drive("", &mut Clipboard::unavailable());
        assert!(out.contains("Loip Generator"));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.unit, Unit::Paragraphs);
        assert_eq!(session.count, 3);
    }
}
