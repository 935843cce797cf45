//! Cell geometry and text flow.
//!
//! This module handles:
//! - Resolving a cell's width from its row and validating it
//! - Greedy wrapping of cell text at the cell's inner width
//! - Free space around the wrapped text for alignment

mod cell;
mod paragraph;
mod row;

pub use cell::{Cell, CellWidth};
pub use paragraph::ParagraphLayout;
pub use row::{Row, RowContext};
