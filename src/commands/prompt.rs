//! Yes/no confirmation for destructive commands

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Ask on the terminal; anything but y/yes declines
pub fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask(question, &mut stdin.lock(), &mut stdout.lock())
}

pub fn ask(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    // EOF (closed stdin) counts as "no"
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
