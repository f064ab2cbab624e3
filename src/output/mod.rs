pub mod buffer;
pub mod console;

pub use buffer::*;
pub use console::*;
