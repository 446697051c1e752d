//! Scripted button presses.
//!
//! Feeds button tokens into a [`Calculator`] and writes the rendered display
//! after each batch, either as two text lines or as JSON.

use super::controller::Calculator;
use crate::display::DisplayLines;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::warn;

/// How the display is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Previous line, then current line.
    #[default]
    Text,
    /// One JSON object per render.
    Json,
}

/// Press every token in order.
///
/// Rejected tokens are reported and skipped. Returns how many were rejected.
pub fn press_tokens<'a>(calc: &mut Calculator, tokens: impl IntoIterator<Item = &'a str>) -> usize {
    let mut rejected = 0;
    for token in tokens {
        if let Err(err) = calc.press_token(token) {
            warn!(token, error = %err, "button press rejected");
            rejected += 1;
        }
    }
    rejected
}

/// Write the display in the requested format.
pub fn render(lines: &DisplayLines, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", lines.previous)?;
            writeln!(out, "{}", lines.current)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(lines).context("Failed to serialize display")?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Read whitespace-separated tokens line by line, rendering after each line.
///
/// Blank lines are skipped without a render.
pub fn run_lines(
    calc: &mut Calculator,
    input: impl BufRead,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read button presses")?;
        if line.trim().is_empty() {
            continue;
        }

        press_tokens(calc, line.split_whitespace());
        render(&calc.display(), format, out)?;
    }

    Ok(())
}
