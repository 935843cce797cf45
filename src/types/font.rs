use serde::{Deserialize, Serialize};

/// Family name of the default regular/bold font pair.
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Opaque font handle.
///
/// Cells and paragraphs only pass this around as a key for a
/// [`TextMetrics`](crate::metrics::TextMetrics) provider and the renderer;
/// they never load or own the font program itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub family: String,
    #[serde(default)]
    pub bold: bool,
}

impl Font {
    /// Regular weight of `family`.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            bold: false,
        }
    }

    /// Bold weight of `family`.
    pub fn new_bold(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            bold: true,
        }
    }

    #[must_use]
    pub fn helvetica() -> Self {
        Self::new(DEFAULT_FONT_FAMILY)
    }

    #[must_use]
    pub fn helvetica_bold() -> Self {
        Self::new_bold(DEFAULT_FONT_FAMILY)
    }

    /// The bold variant of this font's family.
    #[must_use]
    pub fn to_bold(&self) -> Self {
        Self::new_bold(self.family.clone())
    }

    /// PostScript-style name, e.g. `Helvetica-Bold`.
    #[must_use]
    pub fn name(&self) -> String {
        if self.bold {
            format!("{}-Bold", self.family)
        } else {
            self.family.clone()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::helvetica()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_font_names() {
        assert_eq!(Font::helvetica().name(), "Helvetica");
        assert_eq!(Font::helvetica_bold().name(), "Helvetica-Bold");
        assert_eq!(Font::new("Times").to_bold().name(), "Times-Bold");
    }

    #[test]
    fn test_font_deserialize_defaults_to_regular() {
        let font: Font = serde_json::from_str(r#"{"family":"Courier"}"#).unwrap();
        assert_eq!(font, Font::new("Courier"));
    }
}
