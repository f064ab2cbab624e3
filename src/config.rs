use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::patterns::PatternStyle;
use crate::renderer::components::{ConsoleColors, DisplaySettings};

/// Display settings as read from a JSON file. Every field is optional;
/// absent fields leave the settings they are applied to untouched.
///
/// ```json
/// {
///   "max_levels": 3,
///   "indent_size": 2,
///   "node_colors": { "foreground": "red", "background": "yellow" },
///   "connector_colors": { "foreground": "cyan" },
///   "connector_patterns": "double"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub max_levels: Option<i32>,
    pub indent_size: Option<usize>,
    pub node_colors: Option<ConsoleColors>,
    pub connector_colors: Option<ConsoleColors>,
    pub connector_patterns: Option<PatternStyle>,
}

impl SettingsFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_json(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        debug!(path = %path.display(), ?settings, "loaded settings file");
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overrides the fields of `base` that are present in this file.
    pub fn apply(&self, base: DisplaySettings) -> DisplaySettings {
        DisplaySettings {
            max_levels: self.max_levels.unwrap_or(base.max_levels),
            indent_size: self.indent_size.unwrap_or(base.indent_size),
            node_colors: self.node_colors.or(base.node_colors),
            connector_colors: self.connector_colors.or(base.connector_colors),
            connector_patterns: match self.connector_patterns {
                Some(style) => Some(style.patterns()),
                None => base.connector_patterns,
            },
        }
    }
}

impl From<SettingsFile> for DisplaySettings {
    fn from(file: SettingsFile) -> Self {
        file.apply(DisplaySettings::default())
    }
}
