//! One-shot measurement of a cell described in JSON.
//!
//! Builds a throwaway [`Row`] and [`Cell`], measures it with
//! [`StandardMetrics`] and reports every value a renderer needs.

use serde::{Deserialize, Serialize};

use crate::config::CellDefaults;
use crate::error::Result;
use crate::layout::{Cell, CellWidth, Row};
use crate::metrics::{StandardMetrics, TextMetrics};
use crate::types::{HAlign, VAlign};

/// Row context plus the cell to measure.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MeasureRequest {
    pub row_width: f32,
    pub row_height: f32,
    #[serde(default)]
    pub last_cell_extra_width: f32,
    pub width: CellWidth,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub align: HAlign,
    #[serde(default)]
    pub valign: VAlign,
    #[serde(default)]
    pub defaults: CellDefaults,
    #[serde(default)]
    pub header: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CellMeasurement {
    pub width: f32,
    pub height: f32,
    pub inner_width: f32,
    pub inner_height: f32,
    pub extra_width: f32,
    pub lines: Vec<String>,
    pub line_height: f32,
    pub text_height: f32,
    pub horizontal_free_space: f32,
    pub vertical_free_space: f32,
    pub align: HAlign,
    pub valign: VAlign,
    pub header: bool,
}

/// Measure the cell described by `request`.
///
/// # Errors
/// Invalid defaults, a cell wider than its row, or a metrics failure while
/// wrapping.
pub fn measure<M: TextMetrics + ?Sized>(
    request: &MeasureRequest,
    metrics: &M,
) -> Result<CellMeasurement> {
    request.defaults.validate()?;

    let mut row = Row::with_defaults(
        request.row_width,
        request.row_height,
        request.defaults.clone(),
    );
    row.set_last_cell_extra_width(request.last_cell_extra_width);

    let mut cell = Cell::new(
        &row,
        request.width,
        request.text.clone().unwrap_or_default(),
        request.align,
        request.valign,
    )?;
    cell.apply_defaults(&request.defaults);
    cell.set_header_cell(request.header);

    let paragraph = cell.paragraph(metrics)?;
    Ok(CellMeasurement {
        width: cell.width(),
        height: cell.height(&row),
        inner_width: cell.inner_width(),
        inner_height: cell.inner_height(&row),
        extra_width: cell.extra_width(&row),
        line_height: paragraph.line_height(),
        text_height: paragraph.height(),
        lines: paragraph.lines().to_vec(),
        horizontal_free_space: cell.horizontal_free_space(metrics)?,
        vertical_free_space: cell.vertical_free_space(&row, metrics)?,
        align: cell.align(),
        valign: cell.valign(),
        header: cell.is_header_cell(),
    })
}

/// JSON in, JSON out, using the built-in Helvetica metrics.
///
/// # Errors
/// Malformed JSON or any error from [`measure`].
pub fn measure_json(json: &str) -> Result<String> {
    let request: MeasureRequest = serde_json::from_str(json)?;
    let measurement = measure(&request, &StandardMetrics)?;
    Ok(serde_json::to_string(&measurement)?)
}
