use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::patterns::patterns::*;

/// Produces the text fragments used to draw the lines between nodes.
///
/// Every method receives the configured indent size and the level of the
/// parent whose children are being connected. For a fixed `(indent, level)`
/// pair all four fragments must have the same display width, otherwise the
/// columns of deeper levels drift. Widths may differ between levels.
pub trait ConnectorPatterns: fmt::Debug + Send + Sync {
    /// Space below a finished branch, where no vertical line continues.
    fn blank(&self, indent: usize, level: usize) -> String;

    /// Vertical line continuing past a sibling that is not the last one.
    fn vertical(&self, indent: usize, level: usize) -> String;

    /// Connector in front of a child that has further siblings after it.
    fn vertical_and_right(&self, indent: usize, level: usize) -> String;

    /// Connector in front of the last child of a node.
    fn up_and_right(&self, indent: usize, level: usize) -> String;
}

/// Named built-in connector patterns, used by settings files and the demo CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternStyle {
    #[default]
    Single,
    Double,
    HorizontalSingleVerticalDouble,
    Alternating,
}

impl PatternStyle {
    pub fn patterns(self) -> Arc<dyn ConnectorPatterns> {
        match self {
            PatternStyle::Single => Arc::new(SingleConnectorPatterns),
            PatternStyle::Double => Arc::new(DoubleConnectorPatterns),
            PatternStyle::HorizontalSingleVerticalDouble => {
                Arc::new(HorizontalSingleVerticalDoubleConnectorPatterns)
            }
            PatternStyle::Alternating => Arc::new(AlternatingConnectorPatterns),
        }
    }
}

impl FromStr for PatternStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(PatternStyle::Single),
            "double" => Ok(PatternStyle::Double),
            "horizontal-single-vertical-double" => Ok(PatternStyle::HorizontalSingleVerticalDouble),
            "alternating" => Ok(PatternStyle::Alternating),
            other => Err(anyhow::anyhow!("unknown connector pattern style: {}", other)),
        }
    }
}
