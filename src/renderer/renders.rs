use std::fmt::Display;

use anyhow::Result;

use crate::error::TreeError;
use crate::output::BufferOutput;
use crate::renderer::components::DisplaySettings;
use crate::renderer::renderer::{NodeHandlers, TreeRenderer};
use crate::renderer::traits::{TreeNode, TreeOutput};

/// Writes the text of a node. Receives the node and its level.
pub type NodeWriter<'f, T> = dyn Fn(&T, usize, &mut dyn TreeOutput) -> Result<()> + 'f;

/// Lists the children of a node. Receives the node and its level.
///
/// The returned vector is the full, ordered child list; any lazy source has
/// to be drained by the enumerator, since the last child must be known
/// before the first one is written.
pub type NodeEnumerator<'f, T> = dyn for<'n> Fn(&'n T, usize) -> Result<Vec<&'n T>> + 'f;

/// Writes a node using its `Display` implementation.
pub fn write_display<T: Display + ?Sized>(
    node: &T,
    _level: usize,
    out: &mut dyn TreeOutput,
) -> Result<()> {
    out.write_text(&node.to_string()).map_err(TreeError::Output)?;
    Ok(())
}

/// Lists the children of a node through [`TreeNode::nodes`].
pub fn tree_nodes<'n>(node: &'n dyn TreeNode, _level: usize) -> Result<Vec<&'n dyn TreeNode>> {
    Ok(node.nodes())
}

struct FnHandlers<'a, T: ?Sized> {
    writer: &'a NodeWriter<'a, T>,
    enumerator: &'a NodeEnumerator<'a, T>,
}

impl<T: ?Sized> NodeHandlers<T> for FnHandlers<'_, T> {
    fn write_node(&self, node: &T, level: usize, out: &mut dyn TreeOutput) -> Result<()> {
        (self.writer)(node, level, out)
    }

    fn nodes<'n>(&self, node: &'n T, level: usize) -> Result<Vec<&'n T>> {
        (self.enumerator)(node, level)
    }
}

/// Writes a tree whose nodes list their own children through [`TreeNode`].
///
/// # Errors
///
/// [`TreeError::InvalidArgument`] if `root` is `None`, before any output.
pub fn write<T: TreeNode>(
    out: &mut dyn TreeOutput,
    root: Option<&T>,
    settings: Option<&DisplaySettings>,
) -> Result<()> {
    let root: &dyn TreeNode = root.ok_or(TreeError::InvalidArgument { name: "root" })?;
    let writer: &NodeWriter<'_, dyn TreeNode> = &write_display::<dyn TreeNode>;
    let enumerator: &NodeEnumerator<'_, dyn TreeNode> = &tree_nodes;
    write_with(out, Some(root), Some(writer), Some(enumerator), settings)
}

/// Writes a tree using `enumerator` to list the children of every node.
///
/// # Errors
///
/// [`TreeError::InvalidArgument`] if `root` or `enumerator` is `None`,
/// before any output.
pub fn write_with_enumerator<T: Display + ?Sized>(
    out: &mut dyn TreeOutput,
    root: Option<&T>,
    enumerator: Option<&NodeEnumerator<'_, T>>,
    settings: Option<&DisplaySettings>,
) -> Result<()> {
    let writer: &NodeWriter<'_, T> = &write_display::<T>;
    write_with(out, root, Some(writer), enumerator, settings)
}

/// Writes a tree using `writer` for the text of every node and `enumerator`
/// to list its children.
///
/// # Errors
///
/// [`TreeError::InvalidArgument`] if `root`, `writer` or `enumerator` is
/// `None`, before any output. Errors from `writer` and `enumerator` are
/// returned unchanged; lines already written stay written.
pub fn write_with<T: ?Sized>(
    out: &mut dyn TreeOutput,
    root: Option<&T>,
    writer: Option<&NodeWriter<'_, T>>,
    enumerator: Option<&NodeEnumerator<'_, T>>,
    settings: Option<&DisplaySettings>,
) -> Result<()> {
    let root = root.ok_or(TreeError::InvalidArgument { name: "root" })?;
    let writer = writer.ok_or(TreeError::InvalidArgument { name: "writer" })?;
    let enumerator = enumerator.ok_or(TreeError::InvalidArgument { name: "enumerator" })?;

    let default_settings = DisplaySettings::default();
    let settings = settings.unwrap_or(&default_settings);

    TreeRenderer::new(FnHandlers { writer, enumerator }, settings).render(out, root)
}

/// Renders a [`TreeNode`] tree into a string.
pub fn to_string<T: TreeNode>(root: &T, settings: Option<&DisplaySettings>) -> Result<String> {
    let mut out = BufferOutput::new();
    write(&mut out, Some(root), settings)?;
    Ok(out.into_string())
}
