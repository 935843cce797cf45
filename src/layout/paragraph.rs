//! Greedy line filling for a block of text.

use crate::metrics::{line_height, scale, scaled_width, MetricsError, TextMetrics};
use crate::types::{Font, HAlign};
use crate::wrap::WrappingPolicy;

/// Wrapped lines of one text block, measured at a fixed width.
///
/// Built fresh for every query; nothing here is cached on the owning cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphLayout {
    lines: Vec<String>,
    font: Font,
    font_size: f32,
    width: f32,
    line_height: f32,
    align: HAlign,
}

impl ParagraphLayout {
    /// Wrap `text` into lines no wider than `width`.
    ///
    /// Fragments from `wrap` are appended to the current line while the
    /// line's running width (summed in font units, then scaled) stays within
    /// `width`; the first fragment that
    /// would overflow starts a new line. A fragment wider than `width` is
    /// never split and ends up alone on its line. With `width <= 0` every
    /// fragment gets its own line.
    ///
    /// # Errors
    /// Returns the first metrics failure hit while measuring a fragment or
    /// the font's line spacing.
    pub fn new<M: TextMetrics + ?Sized>(
        text: &str,
        font: &Font,
        font_size: f32,
        width: f32,
        align: HAlign,
        wrap: &dyn WrappingPolicy,
        metrics: &M,
    ) -> Result<Self, MetricsError> {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        // Font units; scaled only at the fit check.
        let mut current_units = 0.0_f32;

        for fragment in wrap.wrap(text) {
            let fragment_units = metrics.string_width(font, fragment)?;

            if !current.is_empty()
                && (width <= 0.0 || scale(current_units + fragment_units, font_size) > width)
            {
                lines.push(std::mem::take(&mut current));
                current_units = 0.0;
            }
            current.push_str(fragment);
            current_units += fragment_units;
        }

        if !current.is_empty() {
            lines.push(current);
        }

        let line_height = line_height(metrics, font, font_size)?;
        log::trace!(
            "wrapped {} chars into {} lines at width {width}",
            text.len(),
            lines.len()
        );

        Ok(Self {
            lines,
            font: font.clone(),
            font_size,
            width,
            line_height,
            align,
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Width the lines were wrapped to.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn align(&self) -> HAlign {
        self.align
    }

    /// Height of a single line.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Total block height: one line height per line.
    pub fn height(&self) -> f32 {
        let count = self.lines.len() as f32;
        count * self.line_height
    }

    /// Rendered width of `line` with surrounding whitespace trimmed.
    ///
    /// # Errors
    /// Propagates the metrics failure.
    pub fn trimmed_width<M: TextMetrics + ?Sized>(
        &self,
        line: &str,
        metrics: &M,
    ) -> Result<f32, MetricsError> {
        scaled_width(metrics, &self.font, line.trim(), self.font_size)
    }

    /// Trimmed rendered width of each line, in order.
    ///
    /// # Errors
    /// Fails on the first line that cannot be measured.
    pub fn line_widths<M: TextMetrics + ?Sized>(
        &self,
        metrics: &M,
    ) -> Result<Vec<f32>, MetricsError> {
        self.lines
            .iter()
            .map(|line| self.trimmed_width(line, metrics))
            .collect()
    }

    /// Widest trimmed line, or 0 for an empty paragraph.
    ///
    /// Unlike a cell's horizontal free space this does not degrade: any
    /// metrics failure is returned.
    ///
    /// # Errors
    /// Fails on the first line that cannot be measured.
    pub fn max_line_width<M: TextMetrics + ?Sized>(
        &self,
        metrics: &M,
    ) -> Result<f32, MetricsError> {
        Ok(self
            .line_widths(metrics)?
            .into_iter()
            .fold(0.0_f32, f32::max))
    }

    /// X offset of line `index` from the left edge of the wrap width, per the
    /// paragraph's alignment. `None` if there is no such line.
    ///
    /// # Errors
    /// Propagates the metrics failure for that line.
    pub fn line_offset<M: TextMetrics + ?Sized>(
        &self,
        index: usize,
        metrics: &M,
    ) -> Result<Option<f32>, MetricsError> {
        let Some(line) = self.lines.get(index) else {
            return Ok(None);
        };
        let free = self.width - self.trimmed_width(line, metrics)?;
        Ok(Some(self.align.offset(free)))
    }
}
