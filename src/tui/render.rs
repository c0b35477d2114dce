//! Boxed-frame rendering for the interactive mode.
//!
//! All frames share a fixed inner width; overlong preview lines are clamped
//! with an ellipsis marker so the frame never breaks.

use crate::error::Result;
use crate::tui::Session;
use std::io::Write;

/// Content width inside the frame borders.
pub(crate) const INNER_WIDTH: usize = 32;

/// Maximum number of preview lines shown inside the frame.
pub(crate) const PREVIEW_LINES: usize = 10;

/// ANSI clear-screen plus cursor home.
pub(crate) const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Draws the menu frame for the current session state.
pub(crate) fn menu<W: Write>(out: &mut W, session: &Session, clear: bool) -> Result<()> {
    if clear {
        write!(out, "{CLEAR_SCREEN}")?;
    }
    writeln!(out, "{}", border_top("Loip Generator"))?;
    framed(out, "")?;
    framed(out, &format!("Mode: {}", session.unit))?;
    framed(out, "")?;
    framed(out, &format!("Count: {}", session.count))?;
    framed(out, "")?;
    framed(out, "Commands:")?;
    framed(out, "[1] Paragraphs  [2] Words")?;
    framed(out, "[3] Sentences   [4] Characters")?;
    framed(out, "[g] Generate    [q] Quit")?;
    framed(out, "[n] New count")?;
    framed(out, "")?;
    writeln!(out, "{}", border_bottom())?;
    Ok(())
}

/// Draws the generated-text frame: first [`PREVIEW_LINES`] lines, clamped to
/// the frame width, with a notice when more lines exist.
pub(crate) fn preview<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{}", border_top("Generated Text"))?;
    framed(out, "")?;
    let lines: Vec<&str> = text.split('\n').collect();
    for line in lines.iter().take(PREVIEW_LINES) {
        framed(out, line)?;
    }
    if lines.len() > PREVIEW_LINES {
        framed(out, "... (truncated for display)")?;
    }
    framed(out, "")?;
    writeln!(out, "{}", border_bottom())?;
    Ok(())
}

fn framed<W: Write>(out: &mut W, content: &str) -> Result<()> {
    writeln!(out, "│ {:<width$} │", clamp(content), width = INNER_WIDTH)?;
    Ok(())
}

/// Clamps a line to the frame width, marking the cut with an ellipsis.
fn clamp(line: &str) -> String {
    if line.chars().count() <= INNER_WIDTH {
        line.to_string()
    } else {
        let cut: String = line.chars().take(INNER_WIDTH - 3).collect();
        format!("{cut}...")
    }
}

fn border_top(title: &str) -> String {
    let used = title.chars().count() + 4;
    let fill = (INNER_WIDTH + 3).saturating_sub(used);
    format!("┌─ {title} {}┐", "─".repeat(fill))
}

fn border_bottom() -> String {
    format!("└{}┘", "─".repeat(INNER_WIDTH + 2))
}
