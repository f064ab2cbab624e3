use std::any::TypeId;
use std::collections::HashMap;

use anyhow::Result;
use tracing::debug;

use crate::output::BufferOutput;
use crate::renderer::components::DisplaySettings;
use crate::renderer::renderer::{NodeHandlers, TreeRenderer};
use crate::renderer::renders::{tree_nodes, write_display};
use crate::renderer::traits::{TreeNode, TreeOutput};

type ErasedWriter = Box<dyn Fn(&dyn TreeNode, usize, &mut dyn TreeOutput) -> Result<()>>;
type ErasedEnumerator =
    Box<dyn for<'n> Fn(&'n dyn TreeNode, usize) -> Result<Vec<&'n dyn TreeNode>>>;

fn erase_writer<F>(writer: F) -> ErasedWriter
where
    F: Fn(&dyn TreeNode, usize, &mut dyn TreeOutput) -> Result<()> + 'static,
{
    Box::new(writer)
}

fn erase_enumerator<F>(enumerator: F) -> ErasedEnumerator
where
    F: for<'n> Fn(&'n dyn TreeNode, usize) -> Result<Vec<&'n dyn TreeNode>> + 'static,
{
    Box::new(enumerator)
}

/// Writers and enumerators keyed by the exact type of a node.
///
/// Lookups never consider trait implementations or wrapper types: a node
/// only uses the entries registered for its own concrete type, and falls
/// back to `Display` and [`TreeNode::nodes`] otherwise.
#[derive(Default)]
pub struct NodeRegistry {
    writers: HashMap<TypeId, ErasedWriter>,
    enumerators: HashMap<TypeId, ErasedEnumerator>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_writer<T, F>(&mut self, writer: F)
    where
        T: TreeNode,
        F: Fn(&T, usize, &mut dyn TreeOutput) -> Result<()> + 'static,
    {
        let erased = erase_writer(move |node, level, out| {
            match node.as_any().downcast_ref::<T>() {
                Some(node) => writer(node, level, out),
                None => write_display(node, level, out),
            }
        });
        self.writers.insert(TypeId::of::<T>(), erased);
    }

    pub fn insert_enumerator<T, C, F>(&mut self, enumerator: F)
    where
        T: TreeNode,
        C: TreeNode,
        F: for<'n> Fn(&'n T, usize) -> Result<Vec<&'n C>> + 'static,
    {
        let erased = erase_enumerator(move |node, level| {
            let Some(node) = node.as_any().downcast_ref::<T>() else {
                return tree_nodes(node, level);
            };
            Ok(enumerator(node, level)?
                .into_iter()
                .map(|child| child as &dyn TreeNode)
                .collect())
        });
        self.enumerators.insert(TypeId::of::<T>(), erased);
    }

    pub fn has_writer(&self, type_id: TypeId) -> bool {
        self.writers.contains_key(&type_id)
    }

    pub fn has_enumerator(&self, type_id: TypeId) -> bool {
        self.enumerators.contains_key(&type_id)
    }
}

impl NodeHandlers<dyn TreeNode> for NodeRegistry {
    fn write_node(&self, node: &dyn TreeNode, level: usize, out: &mut dyn TreeOutput) -> Result<()> {
        match self.writers.get(&node.as_any().type_id()) {
            Some(writer) => writer(node, level, out),
            None => write_display(node, level, out),
        }
    }

    fn nodes<'n>(&self, node: &'n dyn TreeNode, level: usize) -> Result<Vec<&'n dyn TreeNode>> {
        match self.enumerators.get(&node.as_any().type_id()) {
            Some(enumerator) => enumerator(node, level),
            None => tree_nodes(node, level),
        }
    }
}

/// Writes trees mixing several node types, each with its own writer and
/// enumerator.
///
/// ```
/// use console_tree::{DisplaySettings, Tree, TreeNode, TreeOutput};
/// use std::fmt;
///
/// struct Shelf(Vec<Book>);
/// struct Book(&'static str);
///
/// impl fmt::Display for Shelf {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "shelf") }
/// }
/// impl fmt::Display for Book {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
/// }
/// impl TreeNode for Shelf {}
/// impl TreeNode for Book {}
///
/// let tree = Tree::new(DisplaySettings::new().with_indent_size(1))
///     .enum_nodes(|shelf: &Shelf, _| Ok(shelf.0.iter().collect::<Vec<&Book>>()))
///     .write_node(|book: &Book, _, out: &mut dyn TreeOutput| {
///         out.write_text(&format!("<{}>", book.0))?;
///         Ok(())
///     });
///
/// let text = tree.write_to_string(&Shelf(vec![Book("Dune"), Book("Emma")])).unwrap();
/// assert_eq!(text, "shelf\n├─<Dune>\n└─<Emma>\n");
/// ```
#[derive(Default)]
pub struct Tree {
    settings: DisplaySettings,
    registry: NodeRegistry,
}

impl Tree {
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            settings,
            registry: NodeRegistry::new(),
        }
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Registers the writer for nodes of exactly type `T`, replacing any
    /// previous one.
    pub fn write_node<T, F>(mut self, writer: F) -> Self
    where
        T: TreeNode,
        F: Fn(&T, usize, &mut dyn TreeOutput) -> Result<()> + 'static,
    {
        debug!(node_type = std::any::type_name::<T>(), "registered node writer");
        self.registry.insert_writer(writer);
        self
    }

    /// Registers the enumerator listing the children of nodes of exactly
    /// type `T`, replacing any previous one.
    pub fn enum_nodes<T, C, F>(mut self, enumerator: F) -> Self
    where
        T: TreeNode,
        C: TreeNode,
        F: for<'n> Fn(&'n T, usize) -> Result<Vec<&'n C>> + 'static,
    {
        debug!(
            node_type = std::any::type_name::<T>(),
            child_type = std::any::type_name::<C>(),
            "registered node enumerator"
        );
        self.registry.insert_enumerator(enumerator);
        self
    }

    pub fn write(&self, out: &mut dyn TreeOutput, root: &dyn TreeNode) -> Result<()> {
        TreeRenderer::new(&self.registry, &self.settings).render(out, root)
    }

    pub fn write_to_string(&self, root: &dyn TreeNode) -> Result<String> {
        let mut out = BufferOutput::new();
        self.write(&mut out, root)?;
        Ok(out.into_string())
    }
}
