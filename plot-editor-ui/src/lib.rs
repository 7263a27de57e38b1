pub mod bem;
pub mod color;
pub mod components;
pub mod editor;
pub mod features;
pub mod tiered;

pub use color::{ColorBuffer, ColorEvent, ColorParseError};
pub use components::*;
pub use editor::*;
pub use features::*;
pub use tiered::tiered_decorator;
