pub mod types;
pub mod patterns;

pub use types::*;
pub use patterns::*;
