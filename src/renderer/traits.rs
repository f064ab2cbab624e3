use std::any::Any;
use std::fmt;
use std::io;

use crate::renderer::components::ConsoleColors;

/// Exposes a value as `&dyn Any` so nodes can be dispatched by their exact type.
///
/// Implemented for every `'static` type; there is no need to implement it by hand.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value that can appear in a rendered tree.
///
/// `Display` provides the default text of the node. `nodes` lists the direct
/// children in display order; the default is an empty list, which makes the
/// node a leaf. It is only consulted when no enumerator is registered for
/// the node's type.
///
/// The structure reachable through `nodes` must be finite and acyclic.
/// A cycle makes rendering recurse until the stack is exhausted.
pub trait TreeNode: AsAny + fmt::Display + 'static {
    fn nodes(&self) -> Vec<&dyn TreeNode> {
        Vec::new()
    }
}

/// Line oriented text sink with an optional notion of current colors.
///
/// Sinks without color support only implement the two write methods.
/// `None` colors stand for the host's default styling.
#[cfg_attr(test, mockall::automock)]
pub trait TreeOutput {
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn write_line_break(&mut self) -> io::Result<()>;

    fn colors(&self) -> Option<ConsoleColors> {
        None
    }

    fn set_colors(&mut self, colors: Option<ConsoleColors>) -> io::Result<()> {
        let _ = colors;
        Ok(())
    }
}
