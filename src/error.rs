//! Structured error types for cellbox.
//!
//! Construction failures and query-time failures share one enum so callers
//! can propagate either with `?`.

use crate::metrics::MetricsError;

/// All errors that can occur while building or measuring a cell.
#[derive(Debug, thiserror::Error)]
pub enum CellboxError {
    /// Requested cell width does not fit inside the owning row.
    #[error("Cell width={width} can't be bigger than row width={row_width}")]
    InvalidWidth { width: f32, row_width: f32 },

    /// A measurement was attempted with no regular font configured.
    #[error("Font not set")]
    MissingFont,

    /// Text metrics lookup failed.
    #[error("Metrics lookup: {0}")]
    Metrics(#[from] MetricsError),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CellboxError>;

#[cfg(target_arch = "wasm32")]
impl From<CellboxError> for wasm_bindgen::JsValue {
    fn from(e: CellboxError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
