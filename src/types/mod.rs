//! Data types shared by the layout modules.

mod align;
mod color;
mod font;

pub use align::*;
pub use color::*;
pub use font::*;
