//! Console status reporting.
//!
//! Status lines are colored with `console` styles. Colors are dropped automatically
//! when stdout is not a terminal, so captured output is plain text.

use console::style;
use std::fmt::Display;
use std::io::{self, Write};

/// Writes user-facing status lines to any `Write`.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes text without a line break and flushes, for prompts and
    /// lines completed later (e.g. `-> Downloading... Completed!`).
    pub fn partial(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Prompt text, highlighted.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<()> {
        self.partial(style(text).yellow())
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn info(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", style(text).yellow())
    }

    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", style(text).green())
    }

    pub fn error(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", style(text).red())
    }
}
