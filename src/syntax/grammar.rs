//! Grammar tables
//!
//! The keyword, punctuation and element-name tables that drive the
//! classifier. A `Grammar` is built once (optionally extended from user
//! config) and then only ever borrowed immutably.

/// Statement keywords. `=` is included so assignments stand out.
const KEYWORDS: &[&str] = &[
    "import", "from", "const", "let", "var", "function", "return", "export", "default", "=",
];

const PUNCTUATION: &[&str] = &["{", "}", "(", ")", "[", "]", ",", ";"];

/// Lowercase markup tags that are not treated as components.
const ELEMENTS: &[&str] = &[
    "div", "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "a", "img", "ul", "ol", "li",
    "button", "input", "form", "label",
];

/// Keyword, punctuation and element tables for the hybrid grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    keywords: Vec<String>,
    punctuation: Vec<String>,
    elements: Vec<String>,
}

impl Grammar {
    /// Create a grammar with empty tables
    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
            punctuation: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Add a keyword (exact match)
    pub fn add_keyword(&mut self, word: &str) {
        if !word.is_empty() && !self.is_keyword(word) {
            self.keywords.push(word.to_string());
        }
    }

    /// Add a punctuation word (exact match)
    pub fn add_punctuation(&mut self, word: &str) {
        if !word.is_empty() && !self.is_punctuation(word) {
            self.punctuation.push(word.to_string());
        }
    }

    /// Add a known element name (matched case-insensitively)
    pub fn add_element(&mut self, name: &str) {
        if !name.is_empty() && !self.is_element(name) {
            self.elements.push(name.to_ascii_lowercase());
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    pub fn is_punctuation(&self, word: &str) -> bool {
        self.punctuation.iter().any(|p| p == word)
    }

    pub fn is_element(&self, name: &str) -> bool {
        self.elements.iter().any(|e| e.eq_ignore_ascii_case(name))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}

impl Default for Grammar {
    fn default() -> Self {
        let mut grammar = Self::empty();
        for word in KEYWORDS {
            grammar.add_keyword(word);
        }
        for word in PUNCTUATION {
            grammar.add_punctuation(word);
        }
        for name in ELEMENTS {
            grammar.add_element(name);
        }
        grammar
    }
}
