//! Text metrics providers.
//!
//! Widths are reported in font units (1/1000 em); callers scale them by
//! `font_size / 1000` to get layout units. The layout code only consumes this
//! interface and never inspects glyph data itself.

mod cache;
mod standard;

pub use cache::{CachedMetrics, LruCache, DEFAULT_CACHE_CAPACITY};
pub use standard::StandardMetrics;

use crate::types::Font;

/// Font units per em in the 1/1000 convention.
pub const FONT_UNITS_PER_EM: f32 = 1000.0;

/// Line spacing used when a provider knows nothing better (1.2 em).
pub const DEFAULT_LINE_SPACING: f32 = 1200.0;

/// Errors a metrics provider can report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// The font has no glyph for this char.
    #[error("no glyph for {ch:?} in font {font}")]
    UnmappedGlyph { font: String, ch: char },

    /// The provider does not know this font.
    #[error("unknown font: {0}")]
    UnknownFont(String),

    /// Any other lookup failure (e.g. a font program that could not be read).
    #[error("{0}")]
    Lookup(String),
}

/// Source of string widths for a font.
pub trait TextMetrics {
    /// Width of `text` set in `font`, in font units.
    fn string_width(&self, font: &Font, text: &str) -> Result<f32, MetricsError>;

    /// Nominal baseline-to-baseline distance, in font units.
    fn line_spacing(&self, _font: &Font) -> Result<f32, MetricsError> {
        Ok(DEFAULT_LINE_SPACING)
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn string_width(&self, font: &Font, text: &str) -> Result<f32, MetricsError> {
        (**self).string_width(font, text)
    }

    fn line_spacing(&self, font: &Font) -> Result<f32, MetricsError> {
        (**self).line_spacing(font)
    }
}

/// Convert font units to layout units at `font_size`.
#[must_use]
pub fn scale(units: f32, font_size: f32) -> f32 {
    units / FONT_UNITS_PER_EM * font_size
}

/// Width of `text` in layout units at `font_size`.
pub fn scaled_width<M: TextMetrics + ?Sized>(
    metrics: &M,
    font: &Font,
    text: &str,
    font_size: f32,
) -> Result<f32, MetricsError> {
    Ok(scale(metrics.string_width(font, text)?, font_size))
}

/// Line height in layout units at `font_size`.
pub fn line_height<M: TextMetrics + ?Sized>(
    metrics: &M,
    font: &Font,
    font_size: f32,
) -> Result<f32, MetricsError> {
    Ok(scale(metrics.line_spacing(font)?, font_size))
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Monospace;

    impl TextMetrics for Monospace {
        fn string_width(&self, _font: &Font, text: &str) -> Result<f32, MetricsError> {
            Ok(text.chars().count() as f32 * 500.0)
        }
    }

    #[test]
    fn test_scaled_width() {
        let font = Font::helvetica();
        assert_eq!(scaled_width(&Monospace, &font, "abcd", 10.0).unwrap(), 20.0);
        assert_eq!(scaled_width(&Monospace, &font, "", 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_default_line_spacing() {
        let font = Font::helvetica();
        assert_eq!(line_height(&Monospace, &font, 10.0).unwrap(), 12.0);
    }

    #[test]
    fn test_reference_forwards() {
        let metrics = &Monospace;
        let font = Font::helvetica();
        assert_eq!(TextMetrics::string_width(&metrics, &font, "ab").unwrap(), 1000.0);
    }
}
