use thiserror::Error;

use crate::geometry::Rgba;
use crate::shape::SpawnRng;

pub type PaletteResult<T> = std::result::Result<T, PaletteError>;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid hex color: {value:?}")]
    InvalidHexColor { value: String },
}

/// Ordered list of fill colors to pick from. Empty means the canvas falls
/// back to its configured default color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub const fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn from_colors(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }

    /// Parse `#RRGGBB` / `#AARRGGBB` strings into a palette. Any invalid
    /// entry rejects the whole call; no partial palette is produced.
    pub fn from_hex_strings<S: AsRef<str>>(values: &[S]) -> PaletteResult<Self> {
        let colors = values
            .iter()
            .map(|value| parse_hex_color(value.as_ref()))
            .collect::<PaletteResult<Vec<_>>>()?;
        Ok(Self { colors })
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Uniform pick, or `None` when the palette is empty.
    pub fn pick(&self, rng: &mut SpawnRng) -> Option<Rgba> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[rng.pick_index(self.colors.len())])
    }
}

/// Decode a `#RRGGBB` or `#AARRGGBB` color string into RGBA. Six-digit form
/// implies full alpha.
pub fn parse_hex_color(value: &str) -> PaletteResult<Rgba> {
    let invalid = || PaletteError::InvalidHexColor {
        value: value.to_string(),
    };

    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.is_ascii() {
        return Err(invalid());
    }

    let parse_pair = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16);
    match digits.len() {
        6 => {
            let r = parse_pair(0).map_err(|_| invalid())?;
            let g = parse_pair(2).map_err(|_| invalid())?;
            let b = parse_pair(4).map_err(|_| invalid())?;
            Ok(Rgba::opaque(r, g, b))
        }
        8 => {
            let a = parse_pair(0).map_err(|_| invalid())?;
            let r = parse_pair(2).map_err(|_| invalid())?;
            let g = parse_pair(4).map_err(|_| invalid())?;
            let b = parse_pair(6).map_err(|_| invalid())?;
            Ok(Rgba::new(r, g, b, a))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_form_parses_with_full_alpha() {
        let color = parse_hex_color("#FF0000").unwrap();
        assert_eq!(color.to_argb(), 0xFFFF0000);
    }

    #[test]
    fn eight_digit_form_parses_alpha_first() {
        let color = parse_hex_color("#80FF0000").unwrap();
        assert_eq!(color.to_argb(), 0x80FF0000);
    }

    #[test]
    fn lowercase_and_surrounding_whitespace_are_accepted() {
        let color = parse_hex_color("  #00ff00 ").unwrap();
        assert_eq!(color.to_argb(), 0xFF00FF00);
    }

    #[test]
    fn malformed_values_are_rejected() {
        for value in ["notacolor", "FF0000", "#FF00", "#GG0000", "#FF00001", "#фф0000"] {
            assert!(
                parse_hex_color(value).is_err(),
                "expected {value:?} to fail"
            );
        }
    }

    #[test]
    fn one_bad_entry_rejects_the_whole_palette() {
        let err = Palette::from_hex_strings(&["#FF0000", "notacolor"]).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::InvalidHexColor { ref value } if value == "notacolor"
        ));
    }

    #[test]
    fn pick_from_empty_palette_is_none() {
        let mut rng = SpawnRng::from_seed(1);
        assert_eq!(Palette::empty().pick(&mut rng), None);
    }

    #[test]
    fn pick_only_returns_configured_colors() {
        let palette = Palette::from_hex_strings(&["#FF0000", "#00FF00"]).unwrap();
        let mut rng = SpawnRng::from_seed(9);
        for _ in 0..100 {
            let color = palette.pick(&mut rng).unwrap();
            assert!(palette.colors().contains(&color));
        }
    }
}
