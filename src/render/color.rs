use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub(crate) struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Color {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color out of a `0xRRGGBB` literal.
    pub(crate) const fn from_rgb_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses `#RRGGBB` or `#AARRGGBB`. The alpha channel is accepted and dropped since every
    /// surface this is drawn on is opaque.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input.strip_prefix('#').ok_or_else(|| ColorError::MissingHash(input.to_string()))?;
        if !matches!(digits.len(), 6 | 8) {
            return Err(ColorError::InvalidLength(input.to_string()));
        }
        // from_str_radix tolerates a leading sign
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(input.to_string()));
        }
        let rgb = u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(input.to_string()))?;
        Ok(Self::from_rgb_u32(rgb & 0x00ff_ffff))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        Self::Rgb { r: color.r, g: color.g, b: color.b }
    }
}

/// Errors that can occur when parsing a color
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("color '{0}' must have 6 or 8 hex digits")]
    InvalidLength(String),

    #[error("color '{0}' contains non hex digits")]
    InvalidHex(String),
}
