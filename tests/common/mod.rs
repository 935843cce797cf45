//! Common test utilities.
//!
//! Deterministic metrics providers so tests can reason about widths without
//! real font tables.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use cellbox::layout::{Cell, CellWidth, Row};
use cellbox::metrics::{MetricsError, TextMetrics};
use cellbox::{Font, HAlign, VAlign};

/// Every char advances `advance` font units; lines are 1 em tall.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub advance: f32,
}

impl FixedMetrics {
    /// 1000 units per char: at font size `s` each char is `s` wide.
    pub fn em() -> Self {
        Self { advance: 1000.0 }
    }
}

impl TextMetrics for FixedMetrics {
    fn string_width(&self, _font: &Font, text: &str) -> Result<f32, MetricsError> {
        Ok(text.chars().count() as f32 * self.advance)
    }

    fn line_spacing(&self, _font: &Font) -> Result<f32, MetricsError> {
        Ok(1000.0)
    }
}

/// Like [`FixedMetrics::em`] but fails for one exact string.
#[derive(Debug, Clone)]
pub struct FailingMetrics {
    pub fail_on: String,
}

impl FailingMetrics {
    pub fn new(fail_on: &str) -> Self {
        Self {
            fail_on: fail_on.to_string(),
        }
    }
}

impl TextMetrics for FailingMetrics {
    fn string_width(&self, font: &Font, text: &str) -> Result<f32, MetricsError> {
        if text == self.fail_on {
            return Err(MetricsError::Lookup(format!("cannot measure {text:?}")));
        }
        FixedMetrics::em().string_width(font, text)
    }

    fn line_spacing(&self, font: &Font) -> Result<f32, MetricsError> {
        FixedMetrics::em().line_spacing(font)
    }
}

/// A left/top aligned cell with the default wrap and all paddings zero, sized
/// 1 unit per char (font size 1 with [`FixedMetrics::em`]).
pub fn unit_cell(row: &Row, width: f32, text: &str) -> Cell {
    let mut cell = Cell::new(
        row,
        CellWidth::Absolute(width),
        text,
        HAlign::Left,
        VAlign::Top,
    )
    .unwrap();
    cell.set_font_size(1.0);
    cell.set_left_padding(0.0);
    cell.set_right_padding(0.0);
    cell.set_top_padding(0.0);
    cell.set_bottom_padding(0.0);
    cell
}
