//! Style types for token rendering
//!
//! Categories never carry colors themselves; a theme maps each
//! category to one of these styles.

use crate::error::{Error, Result};

/// Foreground color for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Terminal default color
    #[default]
    Default,
    /// 24-bit color
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a `#rrggbb` (or `rrggbb`) hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Build an RGB color from a packed `0xrrggbb` value
    pub const fn rgb(packed: u32) -> Self {
        Color::Rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: color,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
