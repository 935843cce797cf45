use serde::{Deserialize, Serialize};

/// Horizontal text alignment inside a cell's inner box.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
    /// Measured like `Left`; the renderer stretches word spacing.
    Justify,
}

impl HAlign {
    /// X offset of a line given the horizontal space left over beside it.
    #[must_use]
    pub fn offset(self, free_space: f32) -> f32 {
        match self {
            Self::Left | Self::Justify => 0.0,
            Self::Center => free_space / 2.0,
            Self::Right => free_space,
        }
    }
}

/// Vertical text alignment inside a cell's inner box.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    /// Y offset (downwards) of the text block given the vertical free space.
    #[must_use]
    pub fn offset(self, free_space: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Middle => free_space / 2.0,
            Self::Bottom => free_space,
        }
    }
}
