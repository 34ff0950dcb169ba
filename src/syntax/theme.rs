//! Category to style mapping
//!
//! The default theme uses each category's default style. A TOML theme
//! file can override any of them:
//!
//! ```toml
//! [styles]
//! keyword = { fg = "#cba6f7", bold = true }
//! line_comment = { italic = false }
//! ```
//!
//! Fields left out of an entry keep the category's default.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::style::{Color, Style};
use super::tokens::Category;
use crate::error::{Error, Result};

#[derive(Debug, Default, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    styles: HashMap<String, StyleEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct StyleEntry {
    fg: Option<String>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
}

impl StyleEntry {
    fn apply(&self, mut style: Style) -> Result<Style> {
        if let Some(fg) = &self.fg {
            style.fg = Color::from_hex(fg)?;
        }
        if let Some(bold) = self.bold {
            style.bold = bold;
        }
        if let Some(italic) = self.italic {
            style.italic = italic;
        }
        if let Some(underline) = self.underline {
            style.underline = underline;
        }
        Ok(style)
    }
}

/// Display style for each token category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    styles: HashMap<Category, Style>,
}

impl Theme {
    /// A theme with no styling at all
    pub fn plain() -> Self {
        Self {
            styles: Category::ALL
                .into_iter()
                .map(|category| (category, Style::default()))
                .collect(),
        }
    }

    /// Parse theme overrides from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(contents)?;
        let mut theme = Self::default();

        for (name, entry) in &file.styles {
            let category =
                Category::from_name(name).ok_or_else(|| Error::UnknownCategory(name.clone()))?;
            let style = entry.apply(theme.style(category))?;
            theme.set_style(category, style);
        }

        Ok(theme)
    }

    /// Load a theme file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let theme = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }

    /// Style for a category
    pub fn style(&self, category: Category) -> Style {
        self.styles.get(&category).copied().unwrap_or_default()
    }

    pub fn set_style(&mut self, category: Category, style: Style) {
        self.styles.insert(category, style);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styles: Category::ALL
                .into_iter()
                .map(|category| (category, category.default_style()))
                .collect(),
        }
    }
}
