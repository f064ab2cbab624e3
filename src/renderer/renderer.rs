use anyhow::Result;
use tracing::{debug, trace};

use crate::error::TreeError;
use crate::patterns::ConnectorPatterns;
use crate::renderer::components::{ColorScope, DisplaySettings};
use crate::renderer::traits::TreeOutput;

/// Resolves how a node of type `N` is written and what its children are.
pub trait NodeHandlers<N: ?Sized> {
    fn write_node(&self, node: &N, level: usize, out: &mut dyn TreeOutput) -> Result<()>;

    /// Children of `node` in display order, fully materialized.
    fn nodes<'n>(&self, node: &'n N, level: usize) -> Result<Vec<&'n N>>;
}

impl<N: ?Sized, H: NodeHandlers<N>> NodeHandlers<N> for &H {
    fn write_node(&self, node: &N, level: usize, out: &mut dyn TreeOutput) -> Result<()> {
        (**self).write_node(node, level, out)
    }

    fn nodes<'n>(&self, node: &'n N, level: usize) -> Result<Vec<&'n N>> {
        (**self).nodes(node, level)
    }
}

/// Position of a node among its siblings, decided by the parent's iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Root,
    Middle,
    Last,
}

/// Recursion state for one node.
#[derive(Debug, Clone)]
struct Frame {
    /// Prefix shared by the node's own line and its siblings
    indentation: String,
    level: usize,
    branch: Branch,
}

impl Frame {
    fn root() -> Self {
        Self {
            indentation: String::new(),
            level: 0,
            branch: Branch::Root,
        }
    }

    fn connector(&self, patterns: &dyn ConnectorPatterns, indent: usize) -> Option<String> {
        let parent_level = self.level.checked_sub(1)?;
        let glyph = match self.branch {
            Branch::Root => return None,
            Branch::Middle => patterns.vertical_and_right(indent, parent_level),
            Branch::Last => patterns.up_and_right(indent, parent_level),
        };
        Some(format!("{}{}", self.indentation, glyph))
    }

    /// Prefix for this node's children: always the node's own prefix plus
    /// one fragment, never rebuilt from the level.
    fn child_indentation(&self, patterns: &dyn ConnectorPatterns, indent: usize) -> String {
        let Some(parent_level) = self.level.checked_sub(1) else {
            return self.indentation.clone();
        };
        let fragment = match self.branch {
            Branch::Root => return self.indentation.clone(),
            Branch::Middle => patterns.vertical(indent, parent_level),
            Branch::Last => patterns.blank(indent, parent_level),
        };
        format!("{}{}", self.indentation, fragment)
    }
}

/// Depth-first tree writer shared by every entry point.
pub struct TreeRenderer<'a, H> {
    handlers: H,
    settings: &'a DisplaySettings,
}

impl<'a, H> TreeRenderer<'a, H> {
    pub fn new(handlers: H, settings: &'a DisplaySettings) -> Self {
        Self { handlers, settings }
    }

    pub fn render<N: ?Sized>(&self, out: &mut dyn TreeOutput, root: &N) -> Result<()>
    where
        H: NodeHandlers<N>,
    {
        debug!(
            root = std::any::type_name::<N>(),
            max_levels = self.settings.max_levels,
            indent_size = self.settings.indent_size,
            "rendering tree"
        );
        self.write_frame(out, root, &Frame::root())
    }

    fn write_frame<N: ?Sized>(&self, out: &mut dyn TreeOutput, node: &N, frame: &Frame) -> Result<()>
    where
        H: NodeHandlers<N>,
    {
        let patterns = self.settings.patterns();
        let indent = self.settings.indent_size;

        if let Some(connector) = frame.connector(patterns, indent) {
            let mut scope = ColorScope::enter(out, self.settings.connector_colors)
                .map_err(TreeError::Output)?;
            scope.write_text(&connector).map_err(TreeError::Output)?;
        }

        {
            let mut scope =
                ColorScope::enter(out, self.settings.node_colors).map_err(TreeError::Output)?;
            self.handlers.write_node(node, frame.level, &mut *scope)?;
            scope.write_line_break().map_err(TreeError::Output)?;
        }

        if self.settings.is_last_level(frame.level) {
            trace!(level = frame.level, "depth limit reached");
            return Ok(());
        }

        let nodes = self.handlers.nodes(node, frame.level)?;
        trace!(level = frame.level, branch = ?frame.branch, children = nodes.len(), "wrote node");

        if nodes.is_empty() {
            return Ok(());
        }

        let indentation = frame.child_indentation(patterns, indent);
        let last = nodes.len() - 1;
        for (index, child) in nodes.into_iter().enumerate() {
            let child_frame = Frame {
                indentation: indentation.clone(),
                level: frame.level + 1,
                branch: if index == last { Branch::Last } else { Branch::Middle },
            };
            self.write_frame(out, child, &child_frame)?;
        }

        Ok(())
    }
}
