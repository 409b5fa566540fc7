use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;

/// Live-cell color. Only the renderer reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThemeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ThemeColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Preset palette, first entry is the default
pub const PRESETS: [ThemeColor; 6] = [
    ThemeColor::new(0x38, 0xbd, 0xf8), // sky
    ThemeColor::new(0xa8, 0x55, 0xf7), // purple
    ThemeColor::new(0xf4, 0x72, 0xb6), // pink
    ThemeColor::new(0x22, 0xc5, 0x5e), // green
    ThemeColor::new(0xea, 0xb3, 0x08), // yellow
    ThemeColor::new(0xf9, 0x73, 0x16), // orange
];

impl Default for ThemeColor {
    fn default() -> Self {
        PRESETS[0]
    }
}

impl ThemeColor {
    /// Next preset in the palette. Custom colors restart at the first preset.
    pub fn next_preset(self) -> Self {
        PRESETS
            .iter()
            .position(|&preset| preset == self)
            .map_or(PRESETS[0], |idx| PRESETS[(idx + 1) % PRESETS.len()])
    }
}

impl FromStr for ThemeColor {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidColor(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
