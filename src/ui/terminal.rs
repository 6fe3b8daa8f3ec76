use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};

use super::app::App;
use super::helpers::StatusKind;
use crate::db::{read_line_lossy, StudentDirectory};

/// Line-oriented conversation with the user. The management loop only talks
/// through this trait, so it can be driven by a real terminal or by a script.
pub trait Prompt {
    /// Show `label` and read one line without its terminator. `Ok(None)`
    /// means the input is exhausted.
    fn ask(&mut self, label: &str) -> io::Result<Option<String>>;

    /// Print one full line of output.
    fn show(&mut self, kind: StatusKind, message: &str) -> io::Result<()>;
}

/// [`Prompt`] over any buffered reader and writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    /// Enable or disable ANSI colours on status lines.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        read_line_lossy(&mut self.input, &mut buf)
    }

    fn show(&mut self, kind: StatusKind, message: &str) -> io::Result<()> {
        match kind.color() {
            Some(color) if self.color => queue!(
                self.output,
                SetForegroundColor(color),
                Print(message),
                ResetColor,
                Print("\n")
            )?,
            _ => writeln!(self.output, "{message}")?,
        }
        self.output.flush()
    }
}

/// Keep running menu iterations until the user picks exit or input runs out.
pub fn run_app<D, P>(app: &mut App<D>, prompt: &mut P) -> Result<()>
where
    D: StudentDirectory,
    P: Prompt,
{
    while app.step(prompt).context("surah management loop failed")? {}
    Ok(())
}
