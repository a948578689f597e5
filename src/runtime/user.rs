//! Console interaction (line input, key press, screen clearing).

use anyhow::Result;
use console::Term;

use super::RealRuntime;

use std::io::{self, BufRead};

/// Core, testable implementation that reads one line from any BufRead.
/// Returns `None` at end of input; the line terminator is removed, nothing else is trimmed.
pub(crate) fn read_line_with_io<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

impl RealRuntime {
    pub(crate) fn read_line_impl(&self) -> Result<Option<String>> {
        let stdin = io::stdin();
        let mut stdin_lock = stdin.lock();
        read_line_with_io(&mut stdin_lock)
    }

    pub(crate) fn wait_for_key_impl(&self) -> Result<()> {
        let term = Term::stdout();
        if term.is_term() {
            term.read_key()?;
        } else {
            // Piped input: consume a line so scripted sessions stay in step.
            self.read_line_impl()?;
        }
        Ok(())
    }

    pub(crate) fn clear_screen_impl(&self) -> Result<()> {
        let term = Term::stdout();
        if term.is_term() {
            term.clear_screen()?;
        }
        Ok(())
    }
}
