use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use serde::Deserialize;

use crate::patterns::{ConnectorPatterns, SingleConnectorPatterns};
use crate::renderer::traits::TreeOutput;

/// The conventional 16-color console palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

/// Foreground and background colors applied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct ConsoleColors {
    pub foreground: ConsoleColor,
    pub background: ConsoleColor,
}

impl ConsoleColors {
    pub fn new(foreground: ConsoleColor, background: ConsoleColor) -> Self {
        Self {
            foreground,
            background,
        }
    }

    pub fn with_foreground(self, foreground: ConsoleColor) -> Self {
        Self { foreground, ..self }
    }

    pub fn with_background(self, background: ConsoleColor) -> Self {
        Self { background, ..self }
    }
}

impl Default for ConsoleColors {
    fn default() -> Self {
        Self::new(ConsoleColor::Gray, ConsoleColor::Black)
    }
}

/// Applies colors to an output for the lifetime of the scope.
///
/// The colors found on entry are put back when the scope is dropped, which
/// also happens when a writer returns early with an error.
pub struct ColorScope<'o> {
    out: &'o mut dyn TreeOutput,
    initial: Option<ConsoleColors>,
}

impl<'o> ColorScope<'o> {
    pub fn enter(
        out: &'o mut dyn TreeOutput,
        colors: Option<ConsoleColors>,
    ) -> std::io::Result<Self> {
        let initial = out.colors();
        // Constructed before applying so a failed apply still restores
        let mut scope = Self { out, initial };
        if let Some(colors) = colors {
            scope.out.set_colors(Some(colors))?;
        }
        Ok(scope)
    }
}

impl<'o> Deref for ColorScope<'o> {
    type Target = dyn TreeOutput + 'o;

    fn deref(&self) -> &Self::Target {
        &*self.out
    }
}

impl<'o> DerefMut for ColorScope<'o> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.out
    }
}

impl Drop for ColorScope<'_> {
    fn drop(&mut self) {
        if self.out.colors() != self.initial {
            // Nothing sensible to do with a failure while unwinding a frame
            let _ = self.out.set_colors(self.initial);
        }
    }
}

/// Settings used to write a tree.
#[derive(Clone, Default)]
pub struct DisplaySettings {
    /// Maximum number of levels to write, counting the root. Zero or
    /// negative means no limit.
    pub max_levels: i32,
    /// Number of characters each level is indented by.
    pub indent_size: usize,
    /// Colors for node text. `None` keeps the output's current colors.
    pub node_colors: Option<ConsoleColors>,
    /// Colors for connector lines. `None` keeps the output's current colors.
    pub connector_colors: Option<ConsoleColors>,
    /// Connector glyphs. `None` uses [`SingleConnectorPatterns`].
    pub connector_patterns: Option<Arc<dyn ConnectorPatterns>>,
}

impl DisplaySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_levels(self, max_levels: i32) -> Self {
        Self { max_levels, ..self }
    }

    pub fn with_indent_size(self, indent_size: usize) -> Self {
        Self {
            indent_size,
            ..self
        }
    }

    pub fn with_node_colors(self, colors: ConsoleColors) -> Self {
        Self {
            node_colors: Some(colors),
            ..self
        }
    }

    pub fn with_connector_colors(self, colors: ConsoleColors) -> Self {
        Self {
            connector_colors: Some(colors),
            ..self
        }
    }

    pub fn with_connector_patterns(self, patterns: Arc<dyn ConnectorPatterns>) -> Self {
        Self {
            connector_patterns: Some(patterns),
            ..self
        }
    }

    /// Whether nodes at `level` are the deepest ones to be written.
    pub fn is_last_level(&self, level: usize) -> bool {
        self.max_levels > 0 && level as i64 >= i64::from(self.max_levels) - 1
    }

    pub(crate) fn patterns(&self) -> &dyn ConnectorPatterns {
        match &self.connector_patterns {
            Some(patterns) => patterns.as_ref(),
            None => &SingleConnectorPatterns,
        }
    }
}

impl fmt::Debug for DisplaySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplaySettings")
            .field("max_levels", &self.max_levels)
            .field("indent_size", &self.indent_size)
            .field("node_colors", &self.node_colors)
            .field("connector_colors", &self.connector_colors)
            .field("connector_patterns", &self.patterns())
            .finish()
    }
}
