//! A single table cell: width derivation, padding, style and the text
//! measurements a renderer needs to place its content.
//!
//! Row-dependent queries take the owning row as a [`RowContext`] argument and
//! read it live; the cell keeps no snapshot of the row's height.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::paragraph::ParagraphLayout;
use super::row::RowContext;
use crate::config::CellDefaults;
use crate::error::{CellboxError, Result};
use crate::metrics::{scaled_width, TextMetrics};
use crate::types::{Color, Font, HAlign, VAlign};
use crate::wrap::{DefaultWrap, WrappingPolicy};

/// Requested cell width.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum CellWidth {
    /// Percentage of the row width.
    Percent(f32),
    /// Absolute width in layout units.
    Absolute(f32),
}

impl CellWidth {
    /// Resolve against a row width.
    #[must_use]
    pub fn resolve(self, row_width: f32) -> f32 {
        match self {
            Self::Percent(pct) => row_width * pct / 100.0,
            Self::Absolute(width) => width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    width: f32,
    text: String,
    font: Option<Font>,
    font_bold: Option<Font>,
    font_size: f32,
    fill_color: Option<Color>,
    text_color: Color,
    left_padding: f32,
    right_padding: f32,
    top_padding: f32,
    bottom_padding: f32,
    align: HAlign,
    valign: VAlign,
    is_header_cell: bool,
    wrapping: Arc<dyn WrappingPolicy>,
}

impl Cell {
    /// Create a cell with the default wrapping policy.
    ///
    /// # Errors
    /// [`CellboxError::InvalidWidth`] if the resolved width is larger than
    /// the row's current width or is not a finite number.
    pub fn new<R: RowContext + ?Sized>(
        row: &R,
        width: CellWidth,
        text: impl Into<String>,
        align: HAlign,
        valign: VAlign,
    ) -> Result<Self> {
        Self::new_with_wrapping(row, width, text, align, valign, Arc::new(DefaultWrap))
    }

    /// Create a cell with a custom wrapping policy. The policy cannot be
    /// changed afterwards.
    ///
    /// # Errors
    /// Same as [`Cell::new`].
    pub fn new_with_wrapping<R: RowContext + ?Sized>(
        row: &R,
        width: CellWidth,
        text: impl Into<String>,
        align: HAlign,
        valign: VAlign,
        wrapping: Arc<dyn WrappingPolicy>,
    ) -> Result<Self> {
        let row_width = row.width();
        let resolved = width.resolve(row_width);
        if !resolved.is_finite() || resolved > row_width {
            log::debug!("rejecting cell: {width:?} resolves to {resolved} in row of {row_width}");
            return Err(CellboxError::InvalidWidth {
                width: resolved,
                row_width,
            });
        }

        let mut cell = Self {
            width: resolved,
            text: text.into(),
            font: None,
            font_bold: None,
            font_size: 0.0,
            fill_color: None,
            text_color: Color::BLACK,
            left_padding: 0.0,
            right_padding: 0.0,
            top_padding: 0.0,
            bottom_padding: 0.0,
            align,
            valign,
            is_header_cell: false,
            wrapping,
        };
        cell.apply_defaults(&CellDefaults::default());
        Ok(cell)
    }

    /// Overwrite font, size, colors and paddings with `defaults`.
    pub fn apply_defaults(&mut self, defaults: &CellDefaults) {
        self.font = Some(defaults.font.clone());
        self.font_bold.clone_from(&defaults.font_bold);
        self.font_size = defaults.font_size;
        self.text_color = defaults.text_color;
        self.fill_color = defaults.fill_color;
        self.left_padding = defaults.left_padding;
        self.right_padding = defaults.right_padding;
        self.top_padding = defaults.top_padding;
        self.bottom_padding = defaults.bottom_padding;
    }

    // Geometry

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn inner_width(&self) -> f32 {
        self.width - self.left_padding - self.right_padding
    }

    /// The owning row's current height.
    pub fn height<R: RowContext + ?Sized>(&self, row: &R) -> f32 {
        row.height()
    }

    pub fn inner_height<R: RowContext + ?Sized>(&self, row: &R) -> f32 {
        self.height(row) - self.top_padding - self.bottom_padding
    }

    /// This cell's width plus the row's leftover width for trailing cells.
    pub fn extra_width<R: RowContext + ?Sized>(&self, row: &R) -> f32 {
        row.last_cell_extra_width() + self.width
    }

    // Text and fonts

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// # Errors
    /// [`CellboxError::MissingFont`] when no regular font is set.
    pub fn font(&self) -> Result<&Font> {
        self.font.as_ref().ok_or(CellboxError::MissingFont)
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = Some(font);
    }

    pub fn clear_font(&mut self) {
        self.font = None;
    }

    /// The explicit bold font, or the bold variant of the regular font.
    ///
    /// # Errors
    /// [`CellboxError::MissingFont`] when neither is set.
    pub fn font_bold(&self) -> Result<Font> {
        match &self.font_bold {
            Some(bold) => Ok(bold.clone()),
            None => Ok(self.font()?.to_bold()),
        }
    }

    pub fn set_font_bold(&mut self, font: Font) {
        self.font_bold = Some(font);
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn wrapping_policy(&self) -> &dyn WrappingPolicy {
        self.wrapping.as_ref()
    }

    // Style

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    pub fn align(&self) -> HAlign {
        self.align
    }

    pub fn valign(&self) -> VAlign {
        self.valign
    }

    pub fn is_header_cell(&self) -> bool {
        self.is_header_cell
    }

    pub fn set_header_cell(&mut self, is_header_cell: bool) {
        self.is_header_cell = is_header_cell;
    }

    // Padding

    pub fn left_padding(&self) -> f32 {
        self.left_padding
    }

    pub fn set_left_padding(&mut self, padding: f32) {
        self.left_padding = padding;
    }

    pub fn right_padding(&self) -> f32 {
        self.right_padding
    }

    pub fn set_right_padding(&mut self, padding: f32) {
        self.right_padding = padding;
    }

    pub fn top_padding(&self) -> f32 {
        self.top_padding
    }

    pub fn set_top_padding(&mut self, padding: f32) {
        self.top_padding = padding;
    }

    pub fn bottom_padding(&self) -> f32 {
        self.bottom_padding
    }

    pub fn set_bottom_padding(&mut self, padding: f32) {
        self.bottom_padding = padding;
    }

    // Measurements

    /// Wrap the current text at the inner width. Rebuilt on every call.
    ///
    /// # Errors
    /// [`CellboxError::MissingFont`] without a regular font, or the metrics
    /// failure hit while wrapping.
    pub fn paragraph<M: TextMetrics + ?Sized>(&self, metrics: &M) -> Result<ParagraphLayout> {
        let layout = ParagraphLayout::new(
            &self.text,
            self.font()?,
            self.font_size,
            self.inner_width(),
            self.align,
            self.wrapping.as_ref(),
            metrics,
        )?;
        Ok(layout)
    }

    /// # Errors
    /// Same as [`Cell::paragraph`].
    pub fn text_height<M: TextMetrics + ?Sized>(&self, metrics: &M) -> Result<f32> {
        Ok(self.paragraph(metrics)?.height())
    }

    /// Inner height left after the text. Negative when the text overflows.
    ///
    /// # Errors
    /// Same as [`Cell::paragraph`].
    pub fn vertical_free_space<R, M>(&self, row: &R, metrics: &M) -> Result<f32>
    where
        R: RowContext + ?Sized,
        M: TextMetrics + ?Sized,
    {
        Ok(self.inner_height(row) - self.text_height(metrics)?)
    }

    /// Inner width left beside the widest trimmed line.
    ///
    /// Metrics failures never fail the query. A line whose width cannot be
    /// looked up counts as 0 wide, and if wrapping itself fails the text
    /// counts as 0 wide, leaving the whole inner width free. Both are logged.
    /// Use [`ParagraphLayout::max_line_width`] for the strict variant.
    ///
    /// # Errors
    /// [`CellboxError::MissingFont`] when no font is set.
    pub fn horizontal_free_space<M: TextMetrics + ?Sized>(&self, metrics: &M) -> Result<f32> {
        let paragraph = match self.paragraph(metrics) {
            Ok(paragraph) => paragraph,
            Err(CellboxError::Metrics(e)) => {
                log::warn!("wrapping {:?} failed, counting it as 0 wide: {e}", self.text);
                return Ok(self.inner_width());
            }
            Err(e) => return Err(e),
        };
        let font = paragraph.font();

        let mut widest = 0.0_f32;
        for line in paragraph.lines() {
            let width = match scaled_width(metrics, font, line.trim(), self.font_size) {
                Ok(width) => width,
                Err(e) => {
                    log::warn!(
                        "measuring {line:?} in {} failed, counting it as 0: {e}",
                        font.name()
                    );
                    0.0
                }
            };
            widest = widest.max(width);
        }

        Ok(self.inner_width() - widest)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::Row;
    use crate::metrics::StandardMetrics;

    fn row() -> Row {
        Row::new(400.0, 30.0)
    }

    fn top_left(width: CellWidth, text: &str) -> Result<Cell> {
        Cell::new(&row(), width, text, HAlign::Left, VAlign::Top)
    }

    #[test]
    fn test_percent_width() {
        let cell = top_left(CellWidth::Percent(25.0), "x").unwrap();
        assert_eq!(cell.width(), 100.0);
        assert_eq!(cell.inner_width(), 90.0);
    }

    #[test]
    fn test_width_larger_than_row_rejected() {
        let err = top_left(CellWidth::Absolute(400.5), "").unwrap_err();
        assert!(matches!(err, CellboxError::InvalidWidth { .. }));
        assert!(top_left(CellWidth::Percent(101.0), "").is_err());
        assert!(top_left(CellWidth::Percent(100.0), "").is_ok());
    }

    #[test]
    fn test_non_finite_width_rejected() {
        let result = top_left(CellWidth::Absolute(f32::NAN), "");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let cell = Cell::new(&row(), CellWidth::Percent(50.0), "", HAlign::Center, VAlign::Middle)
            .unwrap();
        assert_eq!(cell.font().unwrap(), &Font::helvetica());
        assert_eq!(cell.font_bold().unwrap(), Font::helvetica_bold());
        assert_eq!(cell.font_size(), 8.0);
        assert_eq!(cell.text_color(), Color::BLACK);
        assert_eq!(cell.fill_color(), None);
        assert_eq!(cell.top_padding(), 5.0);
        assert!(!cell.is_header_cell());
        assert_eq!(cell.align(), HAlign::Center);
        assert_eq!(cell.valign(), VAlign::Middle);
    }

    #[test]
    fn test_missing_font() {
        let mut cell = top_left(CellWidth::Percent(50.0), "abc").unwrap();
        cell.clear_font();
        assert!(matches!(cell.font(), Err(CellboxError::MissingFont)));
        assert!(matches!(cell.font_bold(), Err(CellboxError::MissingFont)));
        assert!(matches!(
            cell.text_height(&StandardMetrics),
            Err(CellboxError::MissingFont)
        ));

        cell.set_font(Font::helvetica());
        assert!(cell.text_height(&StandardMetrics).is_ok());
    }

    #[test]
    fn test_explicit_bold_font_wins() {
        let mut cell = top_left(CellWidth::Percent(50.0), "").unwrap();
        cell.clear_font();
        cell.set_font_bold(Font::new_bold("Courier"));
        assert_eq!(cell.font_bold().unwrap(), Font::new_bold("Courier"));
    }

    #[test]
    fn test_extra_width() {
        let mut row = row();
        row.set_last_cell_extra_width(12.0);
        let cell =
            Cell::new(&row, CellWidth::Percent(25.0), "", HAlign::Left, VAlign::Top).unwrap();
        assert_eq!(cell.extra_width(&row), 112.0);
    }
}
