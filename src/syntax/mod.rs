//! Syntax classification module
//!
//! This module turns buffer text into per-line token sequences:
//! - Line splitting on `\n`
//! - Single-pass token classification against fixed grammar tables
//! - Per-line caching and theme lookup for renderers

mod cache;
mod classifier;
mod cursor;
mod grammar;
mod lines;
mod style;
mod theme;
mod tokens;

pub use cache::HighlightCache;
pub use classifier::{classify, Classifier};
pub use grammar::Grammar;
pub use lines::split_lines;
pub use style::{Color, Style};
pub use theme::Theme;
pub use tokens::{Category, Line, Token};
