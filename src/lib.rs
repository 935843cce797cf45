//! cellbox - table cell sizing and text-flow measurement
//!
//! Computes the geometry of a table cell inside a paginated document layout:
//! - Cell width from a percentage (or absolute width) of the owning row
//! - Greedy word wrap of the cell text at its inner width
//! - Horizontal and vertical free space around the wrapped text
//!
//! Drawing, font loading and page breaking live elsewhere; this crate only
//! measures.
//!
//! # Usage
//!
//! ```
//! use cellbox::layout::Row;
//! use cellbox::metrics::StandardMetrics;
//!
//! let mut row = Row::new(400.0, 30.0);
//! let cell = row.add_cell_percent(25.0, "Quarterly revenue, by region").unwrap();
//! assert_eq!(cell.inner_width(), 90.0);
//!
//! let cell = row.cell(0).unwrap();
//! let lines = cell.paragraph(&StandardMetrics).unwrap();
//! assert!(lines.line_count() > 1);
//! let _slack = cell.vertical_free_space(&row, &StandardMetrics).unwrap();
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod measure;
pub mod metrics;
pub mod types;
pub mod wrap;

use wasm_bindgen::prelude::*;

pub use error::{CellboxError, Result};
pub use types::*;

/// Measure a cell described as JSON and return the measurements as JSON.
///
/// # Errors
/// Returns an error if the request is malformed or the cell cannot be built.
#[wasm_bindgen]
pub fn measure_cell(request: &str) -> std::result::Result<String, JsValue> {
    measure::measure_json(request).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Measure a cell described as a JS object and return a JS object.
///
/// # Errors
/// Returns an error if the request is malformed or the cell cannot be built.
#[wasm_bindgen]
pub fn measure_cell_to_js(request: JsValue) -> std::result::Result<JsValue, JsValue> {
    let request: measure::MeasureRequest = serde_wasm_bindgen::from_value(request)?;
    let measurement = measure::measure(&request, &metrics::StandardMetrics)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&measurement)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
