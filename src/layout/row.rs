//! Row context for cells.
//!
//! A row owns its cells in order. Cells never hold a pointer back to the
//! row; every row-dependent cell query is handed a [`RowContext`] instead.

use std::sync::Arc;

use super::cell::{Cell, CellWidth};
use crate::config::CellDefaults;
use crate::error::Result;
use crate::metrics::TextMetrics;
use crate::types::{HAlign, VAlign};
use crate::wrap::WrappingPolicy;

/// What a cell may read from its row. Implementations must answer with the
/// row's current values on every call.
pub trait RowContext {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Width left over after percentage allocation, credited to trailing cells.
    fn last_cell_extra_width(&self) -> f32;
}

/// An ordered row of cells with a fixed width and a growable height.
#[derive(Debug, Clone)]
pub struct Row {
    width: f32,
    height: f32,
    last_cell_extra_width: f32,
    defaults: CellDefaults,
    cells: Vec<Cell>,
}

impl Row {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_defaults(width, height, CellDefaults::default())
    }

    /// A row whose new cells start from `defaults`.
    #[must_use]
    pub fn with_defaults(width: f32, height: f32, defaults: CellDefaults) -> Self {
        Self {
            width,
            height,
            last_cell_extra_width: 0.0,
            defaults,
            cells: Vec::new(),
        }
    }

    pub fn defaults(&self) -> &CellDefaults {
        &self.defaults
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn set_last_cell_extra_width(&mut self, extra: f32) {
        self.last_cell_extra_width = extra;
    }

    /// Append a cell using the default wrapping policy.
    ///
    /// # Errors
    /// Fails without touching the row if the cell is wider than the row.
    pub fn add_cell(
        &mut self,
        width: CellWidth,
        text: impl Into<String>,
        align: HAlign,
        valign: VAlign,
    ) -> Result<&mut Cell> {
        let cell = Cell::new(&*self, width, text, align, valign)?;
        Ok(self.push(cell))
    }

    /// Append a cell whose width is a percentage of the row width.
    ///
    /// # Errors
    /// Same as [`Row::add_cell`].
    pub fn add_cell_percent(&mut self, percent: f32, text: impl Into<String>) -> Result<&mut Cell> {
        self.add_cell(CellWidth::Percent(percent), text, HAlign::Left, VAlign::Top)
    }

    /// Append a cell with an absolute width.
    ///
    /// # Errors
    /// Same as [`Row::add_cell`].
    pub fn add_cell_absolute(&mut self, width: f32, text: impl Into<String>) -> Result<&mut Cell> {
        self.add_cell(CellWidth::Absolute(width), text, HAlign::Left, VAlign::Top)
    }

    /// Append a cell with its own wrapping policy.
    ///
    /// # Errors
    /// Same as [`Row::add_cell`].
    pub fn add_cell_with_wrap(
        &mut self,
        width: CellWidth,
        text: impl Into<String>,
        align: HAlign,
        valign: VAlign,
        wrapping: Arc<dyn WrappingPolicy>,
    ) -> Result<&mut Cell> {
        let cell = Cell::new_with_wrapping(&*self, width, text, align, valign, wrapping)?;
        Ok(self.push(cell))
    }

    // Just pushed, so the last slot exists.
    #[allow(clippy::indexing_slicing)]
    fn push(&mut self, mut cell: Cell) -> &mut Cell {
        cell.apply_defaults(&self.defaults);
        self.cells.push(cell);
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Grow the row so its tallest cell's text plus vertical padding fits.
    /// Never shrinks. Returns the resulting height.
    ///
    /// # Errors
    /// Propagates the first cell measurement failure.
    pub fn fit_height<M: TextMetrics + ?Sized>(&mut self, metrics: &M) -> Result<f32> {
        let mut needed = self.height;
        for cell in &self.cells {
            let cell_height =
                cell.text_height(metrics)? + cell.top_padding() + cell.bottom_padding();
            needed = needed.max(cell_height);
        }
        self.height = needed;
        Ok(needed)
    }
}

impl RowContext for Row {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn last_cell_extra_width(&self) -> f32 {
        self.last_cell_extra_width
    }
}
