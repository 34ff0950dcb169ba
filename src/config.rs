//! Configuration file support
//!
//! Loads settings from ~/.tagtint.conf
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # tagtint configuration
//! line-numbers = true
//! theme = /home/me/.config/tagtint/mocha.toml
//! extra-keywords = async, await, if, else
//! extra-elements = section, nav, header
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::syntax::Grammar;

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Whether to paint a line-number gutter
    pub show_line_numbers: bool,
    /// Theme file to load instead of the built-in palette
    pub theme: Option<PathBuf>,
    /// Words added to the keyword table
    pub extra_keywords: Vec<String>,
    /// Names added to the known element table
    pub extra_elements: Vec<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".tagtint.conf"))
    }

    /// Load configuration from the default location
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        match fs::read_to_string(path) {
            Ok(contents) => {
                let settings = Self::parse(&contents);
                config.apply(&settings);
                tracing::debug!(path = %path.display(), "loaded config");
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no config file, using defaults");
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            } else {
                tracing::warn!(line, "ignoring config line without '='");
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("line-numbers") {
            self.show_line_numbers = parse_bool(value);
        }

        if let Some(value) = settings.get("theme") {
            if !value.is_empty() {
                self.theme = Some(PathBuf::from(value));
            }
        }

        if let Some(value) = settings.get("extra-keywords") {
            self.extra_keywords = parse_list(value);
        }

        if let Some(value) = settings.get("extra-elements") {
            self.extra_elements = parse_list(value);
        }
    }

    /// The default grammar extended with configured words
    pub fn grammar(&self) -> Grammar {
        let mut grammar = Grammar::default();
        for word in &self.extra_keywords {
            grammar.add_keyword(word);
        }
        for name in &self.extra_elements {
            grammar.add_element(name);
        }
        grammar
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}

/// Parse a comma separated list, dropping empty items
fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
