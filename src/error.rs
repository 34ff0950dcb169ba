//! Error types for tagtint
//!
//! The classifier itself never fails. These errors come from the
//! surfaces around it: reading input, loading theme and config files,
//! and writing to the terminal.

use thiserror::Error;

/// Result type alias for tagtint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid theme file: {0}")]
    Theme(#[from] toml::de::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown token category: {0}")]
    UnknownCategory(String),
}
