//! Token categories and classifier output types
//!
//! This module defines the semantic categories the classifier assigns,
//! the `Token` pairing a slice of text with its category, and the
//! `Line` sequence produced for every line of input.

use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use super::style::{Color, Style};

/// Semantic category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Statement keywords (import, const, return, `=` ...)
    Keyword,
    /// Braces, brackets, parens, commas and semicolons
    Punctuation,
    /// `<`, `</`, `>` and `/>`
    TagBracket,
    /// Capitalized or dotted tag names (`Foo`, `Foo.Bar`)
    ComponentName,
    /// Known lowercase markup tag names (`div`, `span` ...)
    ElementName,
    /// Attribute names inside a tag
    AttributeName,
    /// The `=` between an attribute name and its value
    AttributeOperator,
    /// Quoted strings
    StringLiteral,
    /// `//` comments running to end of line
    LineComment,
    /// Runs of whitespace
    Whitespace,
    /// Anything else
    Plain,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 11] = [
        Category::Keyword,
        Category::Punctuation,
        Category::TagBracket,
        Category::ComponentName,
        Category::ElementName,
        Category::AttributeName,
        Category::AttributeOperator,
        Category::StringLiteral,
        Category::LineComment,
        Category::Whitespace,
        Category::Plain,
    ];

    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Keyword => Style::fg(Color::rgb(0xcba6f7)),
            Category::Punctuation => Style::fg(Color::rgb(0x94e2d5)),
            Category::TagBracket => Style::fg(Color::rgb(0x94e2d5)),
            Category::ComponentName => Style::fg(Color::rgb(0x578fd6)),
            Category::ElementName => Style::fg(Color::rgb(0x578fd6)),
            Category::AttributeName => Style::fg(Color::rgb(0xa6e3a1)),
            Category::AttributeOperator => Style::fg(Color::rgb(0x94e2d5)),
            Category::StringLiteral => Style::fg(Color::rgb(0xf9e2af)),
            Category::LineComment => Style::fg(Color::rgb(0x6c7086)).with_italic(),
            Category::Whitespace => Style::default(),
            Category::Plain => Style::default(),
        }
    }

    /// Stable name used in theme files and token dumps
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Punctuation => "punctuation",
            Category::TagBracket => "tag_bracket",
            Category::ComponentName => "component_name",
            Category::ElementName => "element_name",
            Category::AttributeName => "attribute_name",
            Category::AttributeOperator => "attribute_operator",
            Category::StringLiteral => "string_literal",
            Category::LineComment => "line_comment",
            Category::Whitespace => "whitespace",
            Category::Plain => "plain",
        }
    }

    /// Parse a category from its name (for theme loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|category| category.name() == name)
    }
}

/// A non-empty span of line text with exactly one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub category: Category,
}

impl Token {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display width in terminal columns
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// Classified tokens for one line, in left-to-right order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Reconstruct the original line text
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Byte range and category of each token within the line
    pub fn spans(&self) -> Vec<(Range<usize>, Category)> {
        let mut start = 0;
        self.tokens
            .iter()
            .map(|token| {
                let end = start + token.len();
                let span = (start..end, token.category);
                start = end;
                span
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
