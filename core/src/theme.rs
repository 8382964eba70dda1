//! Dashboard colour theme
//!
//! The theme is process-wide read-only configuration: it is built once on
//! first access and never mutated afterwards.

use crate::error::ThemeError;
use std::fmt;
use std::sync::LazyLock;

/// Chart palette, in the order categories are coloured
pub const PALETTE: [&str; 10] = [
    "#1673BA", "#74C3FF", "#4896FE", "#16C8C7", "#60E8E8", "#E7EBEF", "#D9B300", "#D64550",
    "#3599B8", "#DFBFBF",
];

/// A 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ThemeError::InvalidHex(hex.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ThemeError::InvalidHex(hex.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Named colour roles used across the dashboard
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Rgb,
    pub sidebar: Rgb,
    pub sidebar_text: Rgb,
    pub title: Rgb,
    pub label: Rgb,
    pub button: Rgb,
    pub button_hover: Rgb,
    pub info_accent: Rgb,
    pub success_accent: Rgb,
    pub warning_accent: Rgb,
    pub table_header: Rgb,
    pub table_header_text: Rgb,
    pub table_text: Rgb,
    /// Fill for the infection-rate histogram
    pub histogram: Rgb,
    /// Stroke for the satisfaction trend line
    pub trend_line: Rgb,
    pub palette: Vec<Rgb>,
}

impl Theme {
    /// Colour for the `index`-th category, cycling through the palette
    pub fn palette_color(&self, index: usize) -> Rgb {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        let white = Rgb::new(0xFF, 0xFF, 0xFF);
        let palette = PALETTE
            .iter()
            .filter_map(|hex| Rgb::from_hex(hex).ok())
            .collect();

        Self {
            background: Rgb::new(0xE7, 0xEB, 0xEF),
            sidebar: Rgb::new(0x16, 0x73, 0xBA),
            sidebar_text: white,
            title: Rgb::new(0x16, 0x73, 0xBA),
            label: Rgb::new(0x29, 0x35, 0x37),
            button: Rgb::new(0x48, 0x96, 0xFE),
            button_hover: Rgb::new(0x16, 0x73, 0xBA),
            info_accent: Rgb::new(0xD9, 0xB3, 0x00),
            success_accent: Rgb::new(0x16, 0xC8, 0xC7),
            warning_accent: Rgb::new(0xD6, 0x45, 0x50),
            table_header: Rgb::new(0x16, 0x73, 0xBA),
            table_header_text: white,
            table_text: Rgb::new(0x29, 0x35, 0x37),
            histogram: Rgb::new(0xD6, 0x45, 0x50),
            trend_line: Rgb::new(0x16, 0xC8, 0xC7),
            palette,
        }
    }
}

static THEME: LazyLock<Theme> = LazyLock::new(Theme::default);

/// The process-wide dashboard theme
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_parses() {
        let theme = theme();
        assert_eq!(theme.palette.len(), 10);
        assert_eq!(theme.palette[0].to_hex(), "#1673BA");
        assert_eq!(theme.palette[9].to_hex(), "#DFBFBF");
    }

    #[test]
    fn test_palette_cycles() {
        let theme = theme();
        assert_eq!(theme.palette_color(0), theme.palette_color(10));
        assert_eq!(theme.palette_color(3).to_hex(), "#16C8C7");
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgb::from_hex("1673BA").is_err());
        assert!(Rgb::from_hex("#1673B").is_err());
        assert!(Rgb::from_hex("#GG73BA").is_err());
        assert_eq!(
            Rgb::from_hex("#d64550").unwrap(),
            Rgb::new(0xD6, 0x45, 0x50)
        );
    }

    #[test]
    fn test_theme_is_shared() {
        assert!(std::ptr::eq(theme(), theme()));
    }
}
