//! Color parsing utilities
//!
//! Accepts `#RRGGBB`, `RRGGBB` and ARGB (`AARRGGBB`) hex strings. The alpha
//! channel of ARGB input is dropped; cell fills are always opaque.

use crate::types::Color;

/// Parse a hex color string into a [`Color`].
///
/// Returns `None` for anything that is not 6 or 8 hex digits after an
/// optional leading `#`.
#[must_use]
pub fn parse_hex(input: &str) -> Option<Color> {
    let hex = input.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // ARGB (8 chars) -> RGB (6 chars)
    let rgb = match hex.len() {
        8 => hex.get(2..)?,
        6 => hex,
        _ => return None,
    };

    let channel = |range: std::ops::Range<usize>| -> Option<u8> {
        u8::from_str_radix(rgb.get(range)?, 16).ok()
    };

    Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_colors() {
        let test_cases = [
            ("#FF0000", Color::rgb(255, 0, 0)),   // Red
            ("00FF00", Color::rgb(0, 255, 0)),    // Green
            ("#0000ff", Color::rgb(0, 0, 255)),   // Blue (lowercase)
            ("FFFFFFFF", Color::WHITE),           // ARGB white
            ("FF000000", Color::BLACK),           // ARGB black
            ("  #808080 ", Color::rgb(128, 128, 128)), // Surrounding whitespace
        ];

        for (input, expected) in test_cases {
            assert_eq!(parse_hex(input), Some(expected), "input {input}");
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "#", "#FFF", "+F0000", "#GGGGGG", "#12345", "1234567", "#FF00FF00FF"] {
            assert_eq!(parse_hex(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        let color = Color::rgb(0x12, 0xAB, 0x0F);
        assert_eq!(color.to_string(), "#12AB0F");
        assert_eq!(parse_hex(&color.to_string()), Some(color));
    }

    #[test]
    fn test_color_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(255, 128, 0)).unwrap();
        assert_eq!(json, "\"#FF8000\"");
        let back: Color = serde_json::from_str("\"FF336699\"").unwrap();
        assert_eq!(back, Color::rgb(0x33, 0x66, 0x99));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
