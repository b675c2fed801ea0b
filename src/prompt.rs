// src/prompt.rs

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Asks `question` on `output` and reads a single answer line from `input`.
///
/// Only `y` or `yes` (any case, surrounding whitespace ignored) count as
/// consent. End of input counts as a refusal.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    write!(output, "{} (y/n): ", question).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("Failed to read answer from stdin")?;
    if read == 0 {
        // EOF
        writeln!(output).ok();
        return Ok(false);
    }

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
