//! Default cell settings.
//!
//! A [`Row`](crate::layout::Row) applies these to every cell it creates, so
//! a whole table can share one font, size, padding and color scheme. All
//! fields are optional in JSON; missing ones take the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::error::{CellboxError, Result};
use crate::types::{Color, Font};

pub const DEFAULT_FONT_SIZE: f32 = 8.0;
pub const DEFAULT_PADDING: f32 = 5.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CellDefaults {
    pub font: Font,
    /// Bold font; the bold variant of `font` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_bold: Option<Font>,
    pub font_size: f32,
    pub text_color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    pub left_padding: f32,
    pub right_padding: f32,
    pub top_padding: f32,
    pub bottom_padding: f32,
}

impl Default for CellDefaults {
    fn default() -> Self {
        Self {
            font: Font::helvetica(),
            font_bold: None,
            font_size: DEFAULT_FONT_SIZE,
            text_color: Color::BLACK,
            fill_color: None,
            left_padding: DEFAULT_PADDING,
            right_padding: DEFAULT_PADDING,
            top_padding: DEFAULT_PADDING,
            bottom_padding: DEFAULT_PADDING,
        }
    }
}

impl CellDefaults {
    /// Parse and validate defaults from JSON.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let defaults: Self = serde_json::from_str(json)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Set all four paddings at once.
    #[must_use]
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.left_padding = padding;
        self.right_padding = padding;
        self.top_padding = padding;
        self.bottom_padding = padding;
        self
    }

    /// Check that the font size is positive and paddings are non-negative.
    ///
    /// # Errors
    /// Returns [`CellboxError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(CellboxError::Config(format!(
                "fontSize must be positive, got {}",
                self.font_size
            )));
        }
        let paddings = [
            ("leftPadding", self.left_padding),
            ("rightPadding", self.right_padding),
            ("topPadding", self.top_padding),
            ("bottomPadding", self.bottom_padding),
        ];
        for (name, value) in paddings {
            if !value.is_finite() || value < 0.0 {
                return Err(CellboxError::Config(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
