use std::io;

use thiserror::Error;

/// Errors raised by the tree renderer itself.
///
/// Render functions return `anyhow::Result`, so callers that need to tell
/// these apart from writer/enumerator failures can `downcast_ref::<TreeError>()`.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A required argument (root node, writer or enumerator) was not supplied.
    /// Raised before anything is written.
    #[error("invalid argument: `{name}` must be provided")]
    InvalidArgument { name: &'static str },

    /// The output sink rejected a write or a color change.
    #[error("failed to write tree output: {0}")]
    Output(#[source] io::Error),
}
