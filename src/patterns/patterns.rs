use crate::patterns::types::ConnectorPatterns;

fn line(head: &str, fill: &str, count: usize) -> String {
    format!("{}{}", head, fill.repeat(count))
}

/// Single-line box drawing at every level. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleConnectorPatterns;

impl ConnectorPatterns for SingleConnectorPatterns {
    fn blank(&self, indent: usize, _level: usize) -> String {
        " ".repeat(indent + 1)
    }

    fn vertical(&self, indent: usize, _level: usize) -> String {
        line("│", " ", indent)
    }

    fn vertical_and_right(&self, indent: usize, _level: usize) -> String {
        line("├", "─", indent)
    }

    fn up_and_right(&self, indent: usize, _level: usize) -> String {
        line("└", "─", indent)
    }
}

/// Double-line box drawing at every level.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleConnectorPatterns;

impl ConnectorPatterns for DoubleConnectorPatterns {
    fn blank(&self, indent: usize, _level: usize) -> String {
        " ".repeat(indent + 1)
    }

    fn vertical(&self, indent: usize, _level: usize) -> String {
        line("║", " ", indent)
    }

    fn vertical_and_right(&self, indent: usize, _level: usize) -> String {
        line("╠", "═", indent)
    }

    fn up_and_right(&self, indent: usize, _level: usize) -> String {
        line("╚", "═", indent)
    }
}

/// Single-line horizontal connectors hanging off double-line verticals.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalSingleVerticalDoubleConnectorPatterns;

impl ConnectorPatterns for HorizontalSingleVerticalDoubleConnectorPatterns {
    fn blank(&self, indent: usize, _level: usize) -> String {
        " ".repeat(indent + 1)
    }

    fn vertical(&self, indent: usize, _level: usize) -> String {
        line("║", " ", indent)
    }

    fn vertical_and_right(&self, indent: usize, _level: usize) -> String {
        line("╟", "─", indent)
    }

    fn up_and_right(&self, indent: usize, _level: usize) -> String {
        line("╙", "─", indent)
    }
}

/// Single-line glyphs on even levels, double-line glyphs on odd levels.
///
/// Each level is one column wider than the previous one, so fragments are
/// `indent + 1 + level` wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternatingConnectorPatterns;

impl AlternatingConnectorPatterns {
    fn is_single(level: usize) -> bool {
        level % 2 == 0
    }
}

impl ConnectorPatterns for AlternatingConnectorPatterns {
    fn blank(&self, indent: usize, level: usize) -> String {
        " ".repeat(indent + 1 + level)
    }

    fn vertical(&self, indent: usize, level: usize) -> String {
        let head = if Self::is_single(level) { "│" } else { "║" };
        line(head, " ", indent + level)
    }

    fn vertical_and_right(&self, indent: usize, level: usize) -> String {
        if Self::is_single(level) {
            line("├", "─", indent + level)
        } else {
            line("╠", "═", indent + level)
        }
    }

    fn up_and_right(&self, indent: usize, level: usize) -> String {
        if Self::is_single(level) {
            line("└", "─", indent + level)
        } else {
            line("╚", "═", indent + level)
        }
    }
}
