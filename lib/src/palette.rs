//! Character palettes
//!
//! Every palette is ordered from the darkest-appearing character (densest ink)
//! to the lightest-appearing one. Brightness 0.0 maps to the first character.

use crate::error::{AsciiError, Result};
use std::fmt;
use std::str::FromStr;

/// Classic density ramp, 58 characters
pub const CLASSIC_CHARS: &str =
    "$@B%#*owmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'.";

/// Line-drawing ramp, 6 characters
pub const MINIMAL_CHARS: &str = "-/|=\\\"";

/// Two-level ramp
pub const DOT_STAR_CHARS: &str = ".*";

/// Built-in palette selector
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteStyle {
    #[default]
    Classic,
    Minimal,
    DotStar,
}

impl PaletteStyle {
    /// All styles, in menu order
    pub const ALL: [PaletteStyle; 3] = [
        PaletteStyle::Classic,
        PaletteStyle::Minimal,
        PaletteStyle::DotStar,
    ];

    /// Base character sequence for this style, darkest first
    pub fn base_chars(self) -> &'static str {
        match self {
            PaletteStyle::Classic => CLASSIC_CHARS,
            PaletteStyle::Minimal => MINIMAL_CHARS,
            PaletteStyle::DotStar => DOT_STAR_CHARS,
        }
    }

    /// Identifier accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            PaletteStyle::Classic => "classic",
            PaletteStyle::Minimal => "minimal",
            PaletteStyle::DotStar => "dot-star",
        }
    }
}

impl fmt::Display for PaletteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteStyle {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(PaletteStyle::Classic),
            "minimal" => Ok(PaletteStyle::Minimal),
            "dot-star" | "dotstar" | "dot_star" => Ok(PaletteStyle::DotStar),
            other => Err(AsciiError::InvalidConfiguration(format!(
                "unknown palette style '{}' (expected classic, minimal or dot-star)",
                other
            ))),
        }
    }
}

/// A resolved palette: the style's characters, reversed when inverted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Resolve the character sequence for a style
    ///
    /// # Arguments
    /// * `style` - Built-in palette to use
    /// * `inverse` - Reverse the order so the darkest character maps to full brightness
    ///
    /// # Returns
    /// The palette, or [`AsciiError::EmptyPalette`] if the sequence is empty
    pub fn resolve(style: PaletteStyle, inverse: bool) -> Result<Self> {
        let mut chars: Vec<char> = style.base_chars().chars().collect();
        if inverse {
            chars.reverse();
        }
        Self::from_chars(chars)
    }

    /// Build a palette from an arbitrary character sequence
    pub fn from_chars(chars: Vec<char>) -> Result<Self> {
        if chars.is_empty() {
            return Err(AsciiError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Quantize a brightness value into a palette index
    ///
    /// `adjusted = b * (1 - sensitivity) + sensitivity`, then
    /// `floor(adjusted * len)` clamped into `[0, len - 1]`.
    /// Full brightness would otherwise land one past the end.
    pub fn index_for(&self, brightness: f64, sensitivity: f64) -> usize {
        let len = self.chars.len();
        let adjusted = brightness * (1.0 - sensitivity) + sensitivity;
        let scaled = (adjusted * len as f64).floor();

        if scaled.is_nan() || scaled < 0.0 {
            0
        } else if scaled >= len as f64 {
            len - 1
        } else {
            scaled as usize
        }
    }

    /// Character for a brightness value
    pub fn char_for(&self, brightness: f64, sensitivity: f64) -> char {
        self.chars[self.index_for(brightness, sensitivity)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lengths() {
        assert_eq!(CLASSIC_CHARS.chars().count(), 58);
        assert_eq!(MINIMAL_CHARS.chars().count(), 6);
        assert_eq!(DOT_STAR_CHARS.chars().count(), 2);
    }

    #[test]
    fn test_classic_endpoints() {
        let palette = Palette::resolve(PaletteStyle::Classic, false).unwrap();
        assert_eq!(palette.chars()[0], '$');
        assert_eq!(palette.chars()[palette.len() - 1], '.');
    }

    #[test]
    fn test_minimal_contains_backslash_and_quote() {
        let palette = Palette::resolve(PaletteStyle::Minimal, false).unwrap();
        assert_eq!(palette.chars(), &['-', '/', '|', '=', '\\', '"']);
    }

    #[test]
    fn test_inverse_reverses_order() {
        let palette = Palette::resolve(PaletteStyle::DotStar, true).unwrap();
        assert_eq!(palette.chars(), &['*', '.']);
    }

    #[test]
    fn test_inverse_twice_is_identity() {
        for style in PaletteStyle::ALL {
            let plain = Palette::resolve(style, false).unwrap();
            let mut twice: Vec<char> = Palette::resolve(style, true).unwrap().chars().to_vec();
            twice.reverse();
            assert_eq!(plain.chars(), twice.as_slice());
        }
    }

    #[test]
    fn test_full_brightness_is_clamped() {
        let palette = Palette::resolve(PaletteStyle::Classic, false).unwrap();
        assert_eq!(palette.index_for(1.0, 0.0), palette.len() - 1);
        assert_eq!(palette.char_for(1.0, 0.0), '.');
    }

    #[test]
    fn test_zero_brightness_is_first() {
        let palette = Palette::resolve(PaletteStyle::Classic, false).unwrap();
        assert_eq!(palette.index_for(0.0, 0.0), 0);
        assert_eq!(palette.char_for(0.0, 0.0), '$');
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        let palette = Palette::resolve(PaletteStyle::Minimal, false).unwrap();
        assert_eq!(palette.index_for(-3.0, 0.0), 0);
        assert_eq!(palette.index_for(7.5, 0.0), 5);
        assert_eq!(palette.index_for(f64::NAN, 0.0), 0);
        assert_eq!(palette.index_for(0.2, 1.0), 5);
        assert_eq!(palette.index_for(0.2, 2.0), 5);
    }

    #[test]
    fn test_sensitivity_raises_floor() {
        let palette = Palette::resolve(PaletteStyle::Classic, false).unwrap();
        // adjusted = 0.5, floor(0.5 * 58) = 29
        assert_eq!(palette.index_for(0.0, 0.5), 29);
        assert!(palette.index_for(0.0, 0.5) > 0);
    }

    #[test]
    fn test_index_in_bounds_and_monotonic() {
        for style in PaletteStyle::ALL {
            let palette = Palette::resolve(style, false).unwrap();
            for sensitivity in [0.0, 0.1, 0.5, 0.9, 0.999] {
                let mut prev = 0usize;
                for step in 0..=1000 {
                    let b = step as f64 / 1000.0;
                    let idx = palette.index_for(b, sensitivity);
                    assert!(idx < palette.len());
                    assert!(idx >= prev, "{style} not monotonic at b={b}, s={sensitivity}");
                    prev = idx;
                }
            }
        }
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(
            Palette::from_chars(Vec::new()),
            Err(AsciiError::EmptyPalette)
        ));
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("classic".parse::<PaletteStyle>().unwrap(), PaletteStyle::Classic);
        assert_eq!("Minimal".parse::<PaletteStyle>().unwrap(), PaletteStyle::Minimal);
        assert_eq!("dot-star".parse::<PaletteStyle>().unwrap(), PaletteStyle::DotStar);
        assert_eq!("dotstar".parse::<PaletteStyle>().unwrap(), PaletteStyle::DotStar);
        assert!(matches!(
            "braille".parse::<PaletteStyle>(),
            Err(AsciiError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_style_display_round_trips() {
        for style in PaletteStyle::ALL {
            assert_eq!(style.to_string().parse::<PaletteStyle>().unwrap(), style);
        }
    }
}
