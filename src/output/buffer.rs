use std::io;

use crate::renderer::components::ConsoleColors;
use crate::renderer::traits::TreeOutput;

/// A run of text written while the same colors were active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub colors: Option<ConsoleColors>,
    pub text: String,
}

/// In-memory output that records text together with the colors it was written in.
#[derive(Debug, Default)]
pub struct BufferOutput {
    text: String,
    colors: Option<ConsoleColors>,
    segments: Vec<Segment>,
    color_changes: usize,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `colors` as the current colors, as if the host had set them.
    pub fn with_colors(colors: Option<ConsoleColors>) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of `set_colors` calls received so far.
    pub fn color_changes(&self) -> usize {
        self.color_changes
    }

    fn push(&mut self, text: &str) {
        self.text.push_str(text);
        match self.segments.last_mut() {
            Some(last) if last.colors == self.colors => last.text.push_str(text),
            _ => self.segments.push(Segment {
                colors: self.colors,
                text: text.to_string(),
            }),
        }
    }
}

impl TreeOutput for BufferOutput {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.push(text);
        Ok(())
    }

    fn write_line_break(&mut self) -> io::Result<()> {
        self.push("\n");
        Ok(())
    }

    fn colors(&self) -> Option<ConsoleColors> {
        self.colors
    }

    fn set_colors(&mut self, colors: Option<ConsoleColors>) -> io::Result<()> {
        self.colors = colors;
        self.color_changes += 1;
        Ok(())
    }
}
