//! tagtint - syntax classification for tag markup mixed with statement code
//!
//! Splits buffer text into lines and classifies each line into a
//! lossless sequence of categorized tokens, ready for a renderer to
//! paint with a theme.
//!
//! ```
//! use tagtint::{classify, Category};
//!
//! let lines = classify("return <Foo.Bar />");
//! assert_eq!(lines[0].tokens()[0].category, Category::Keyword);
//! assert_eq!(lines[0].text(), "return <Foo.Bar />");
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{Error, Result};
pub use syntax::{
    classify, split_lines, Category, Classifier, Grammar, HighlightCache, Line, Theme, Token,
};
