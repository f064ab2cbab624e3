//! # console-tree
//!
//! Writes in-memory trees of application objects as indented text with
//! box-drawing connectors, the way directory `tree` listings look:
//!
//! ```text
//! Family: Felidae
//! ├──Subfamily: Felinae
//! │  ├──Genus: Acinonyx
//! │  └──Genus: Puma
//! └──Subfamily: Pantherinae
//! ```
//!
//! Single-type trees are written with [`write`], [`write_with_enumerator`]
//! and [`write_with`]. Trees mixing node types use [`Tree`], which picks a
//! writer and an enumerator by the exact type of every node.

pub mod config;
pub mod error;
pub mod output;
pub mod patterns;
pub mod renderer;

pub use config::*;
pub use error::*;
pub use output::*;
pub use patterns::*;
pub use renderer::*;

#[cfg(test)]
mod tests;
