//! Built-in metrics for the Helvetica standard font pair.
//!
//! Advance widths come from the Adobe font metrics shipped with every PDF
//! reader, laid out by WinAnsi code, so text measured here lines up with what a
//! PDF viewer draws for the non-embedded standard fonts.

use super::{MetricsError, TextMetrics};
use crate::types::{Font, DEFAULT_FONT_FAMILY};

/// Advance widths for `' '..='~'`, Helvetica.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

/// Advance widths for `' '..='~'`, Helvetica-Bold.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p'..'~'
];

/// Advance widths for WinAnsi `0x80..=0xFF`, Helvetica. 0 marks an unused code.
#[rustfmt::skip]
const HELVETICA_UPPER_WIDTHS: [u16; 128] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

/// Advance widths for WinAnsi `0x80..=0xFF`, Helvetica-Bold. 0 marks an unused code.
#[rustfmt::skip]
const HELVETICA_BOLD_UPPER_WIDTHS: [u16; 128] = [
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xF0
];

/// Font bounding box heights (ury - lly).
const HELVETICA_BBOX_HEIGHT: f32 = 1156.0;
const HELVETICA_BOLD_BBOX_HEIGHT: f32 = 1190.0;

/// Width tables for one font, split at the ASCII boundary.
struct Widths {
    ascii: &'static [u16; 95],
    upper: &'static [u16; 128],
}

const HELVETICA: Widths = Widths {
    ascii: &HELVETICA_WIDTHS,
    upper: &HELVETICA_UPPER_WIDTHS,
};

const HELVETICA_BOLD: Widths = Widths {
    ascii: &HELVETICA_BOLD_WIDTHS,
    upper: &HELVETICA_BOLD_UPPER_WIDTHS,
};

/// WinAnsi (cp1252) code for `ch`, if the encoding has one.
fn winansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => return u8::try_from(u32::from(ch)).ok(),
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017d}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203a}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017e}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(code)
}

/// Metrics for Helvetica and Helvetica-Bold.
///
/// Any char with a WinAnsi code is measured: ASCII, Latin-1 and the cp1252
/// extras such as `€`, `–` and curly quotes. Tab, CR and LF measure as a
/// space. Anything else fails with [`MetricsError::UnmappedGlyph`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl StandardMetrics {
    fn table(font: &Font) -> Result<&'static Widths, MetricsError> {
        if !font.family.eq_ignore_ascii_case(DEFAULT_FONT_FAMILY) {
            return Err(MetricsError::UnknownFont(font.name()));
        }
        Ok(if font.bold { &HELVETICA_BOLD } else { &HELVETICA })
    }

    fn glyph_width(table: &Widths, font: &Font, ch: char) -> Result<u16, MetricsError> {
        let code = match ch {
            '\t' | '\n' | '\r' => Some(b' '),
            other => winansi_code(other),
        };
        code.and_then(|code| match code {
            0x20..=0x7E => table.ascii.get(usize::from(code - 0x20)).copied(),
            0x80..=0xFF => table.upper.get(usize::from(code - 0x80)).copied(),
            _ => None,
        })
        .filter(|&width| width > 0)
        .ok_or_else(|| MetricsError::UnmappedGlyph {
            font: font.name(),
            ch,
        })
    }
}

impl TextMetrics for StandardMetrics {
    fn string_width(&self, font: &Font, text: &str) -> Result<f32, MetricsError> {
        let table = Self::table(font)?;
        let mut total: u64 = 0;
        for ch in text.chars() {
            total += u64::from(Self::glyph_width(table, font, ch)?);
        }
        Ok(total as f32)
    }

    fn line_spacing(&self, font: &Font) -> Result<f32, MetricsError> {
        Self::table(font)?;
        Ok(if font.bold {
            HELVETICA_BOLD_BBOX_HEIGHT
        } else {
            HELVETICA_BBOX_HEIGHT
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_widths() {
        let font = Font::helvetica();
        assert_eq!(StandardMetrics.string_width(&font, " ").unwrap(), 278.0);
        assert_eq!(StandardMetrics.string_width(&font, "W").unwrap(), 944.0);
        assert_eq!(StandardMetrics.string_width(&font, "~").unwrap(), 584.0);
        assert_eq!(StandardMetrics.string_width(&font, "Hi").unwrap(), 722.0 + 222.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = StandardMetrics.string_width(&Font::helvetica(), "bold").unwrap();
        let bold = StandardMetrics.string_width(&Font::helvetica_bold(), "bold").unwrap();
        assert!(bold > regular);
        assert_eq!(bold, 611.0 + 611.0 + 278.0 + 611.0);
    }

    #[test]
    fn test_control_whitespace_measures_as_space() {
        let font = Font::helvetica();
        let space = StandardMetrics.string_width(&font, " ").unwrap();
        for ws in ["\t", "\n", "\r", "\u{a0}"] {
            assert_eq!(StandardMetrics.string_width(&font, ws).unwrap(), space);
        }
    }

    #[test]
    fn test_latin1_and_cp1252_extras() {
        let font = Font::helvetica();
        assert_eq!(StandardMetrics.string_width(&font, "\u{e9}").unwrap(), 556.0);
        assert_eq!(StandardMetrics.string_width(&font, "\u{20ac}").unwrap(), 556.0);
        assert_eq!(StandardMetrics.string_width(&font, "\u{2013}").unwrap(), 556.0);
        assert_eq!(StandardMetrics.string_width(&font, "\u{2014}").unwrap(), 1000.0);
        assert_eq!(StandardMetrics.string_width(&font, "\u{2019}").unwrap(), 222.0);
        assert_eq!(StandardMetrics.string_width(&font, "\u{c6}").unwrap(), 1000.0);
        // "Café" = C a f é
        assert_eq!(
            StandardMetrics.string_width(&font, "Caf\u{e9}").unwrap(),
            722.0 + 556.0 + 278.0 + 556.0
        );
    }

    #[test]
    fn test_bold_upper_half() {
        let bold = Font::helvetica_bold();
        assert_eq!(StandardMetrics.string_width(&bold, "\u{e9}").unwrap(), 556.0);
        assert_eq!(StandardMetrics.string_width(&bold, "\u{f1}").unwrap(), 611.0);
        assert_eq!(StandardMetrics.string_width(&bold, "\u{201c}").unwrap(), 500.0);
        assert_eq!(StandardMetrics.string_width(&bold, "\u{c9}").unwrap(), 667.0);
    }

    #[test]
    fn test_unused_winansi_codes_stay_unmapped() {
        let font = Font::helvetica();
        // Unused WinAnsi codes and control chars
        for ch in ['\u{81}', '\u{8d}', '\u{7f}', '\u{1}'] {
            assert!(StandardMetrics.string_width(&font, &ch.to_string()).is_err());
        }
    }

    #[test]
    fn test_width_sum_does_not_overflow_u32() {
        let font = Font::helvetica();
        // 944 * 5_000_000 > u32::MAX
        let text = "W".repeat(5_000_000);
        let width = StandardMetrics.string_width(&font, &text).unwrap();
        assert_eq!(width, (944_u64 * 5_000_000) as f32);
    }

    #[test]
    fn test_unmapped_glyph() {
        let err = StandardMetrics
            .string_width(&Font::helvetica(), "snow \u{2603}")
            .unwrap_err();
        assert_eq!(
            err,
            MetricsError::UnmappedGlyph {
                font: "Helvetica".to_string(),
                ch: '\u{2603}'
            }
        );
    }

    #[test]
    fn test_unknown_font() {
        let err = StandardMetrics
            .string_width(&Font::new("Times"), "x")
            .unwrap_err();
        assert_eq!(err, MetricsError::UnknownFont("Times".to_string()));
        assert!(StandardMetrics.line_spacing(&Font::new("Times")).is_err());
    }

    #[test]
    fn test_line_spacing_from_bbox() {
        assert_eq!(StandardMetrics.line_spacing(&Font::helvetica()).unwrap(), 1156.0);
        assert_eq!(
            StandardMetrics.line_spacing(&Font::helvetica_bold()).unwrap(),
            1190.0
        );
    }
}
