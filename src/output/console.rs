use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::renderer::components::{ConsoleColor, ConsoleColors};
use crate::renderer::traits::TreeOutput;

impl From<ConsoleColor> for CtColor {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Black => CtColor::Black,
            ConsoleColor::DarkBlue => CtColor::DarkBlue,
            ConsoleColor::DarkGreen => CtColor::DarkGreen,
            ConsoleColor::DarkCyan => CtColor::DarkCyan,
            ConsoleColor::DarkRed => CtColor::DarkRed,
            ConsoleColor::DarkMagenta => CtColor::DarkMagenta,
            ConsoleColor::DarkYellow => CtColor::DarkYellow,
            ConsoleColor::Gray => CtColor::Grey,
            ConsoleColor::DarkGray => CtColor::DarkGrey,
            ConsoleColor::Blue => CtColor::Blue,
            ConsoleColor::Green => CtColor::Green,
            ConsoleColor::Cyan => CtColor::Cyan,
            ConsoleColor::Red => CtColor::Red,
            ConsoleColor::Magenta => CtColor::Magenta,
            ConsoleColor::Yellow => CtColor::Yellow,
            ConsoleColor::White => CtColor::White,
        }
    }
}

/// Terminal output driven by crossterm escape sequences.
///
/// Terminals cannot be asked for their current colors, so the colors applied
/// through this output are tracked here. It starts out at the terminal's
/// defaults (`None`), and setting `None` emits a color reset. Output is
/// queued; call [`ConsoleOutput::flush`] when done.
pub struct ConsoleOutput<W: Write> {
    writer: W,
    colors: Option<ConsoleColors>,
}

impl ConsoleOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            colors: None,
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TreeOutput for ConsoleOutput<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.writer, Print(text))
    }

    fn write_line_break(&mut self) -> io::Result<()> {
        queue!(self.writer, Print('\n'))
    }

    fn colors(&self) -> Option<ConsoleColors> {
        self.colors
    }

    fn set_colors(&mut self, colors: Option<ConsoleColors>) -> io::Result<()> {
        match colors {
            Some(colors) => queue!(
                self.writer,
                SetForegroundColor(colors.foreground.into()),
                SetBackgroundColor(colors.background.into())
            )?,
            None => queue!(self.writer, ResetColor)?,
        }
        self.colors = colors;
        Ok(())
    }
}
