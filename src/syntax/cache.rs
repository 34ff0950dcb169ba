//! Per-line highlight cache
//!
//! A host re-classifies the whole buffer on every edit. Since lines
//! carry no state between each other, a line whose text is unchanged
//! at the same index can reuse its previous tokens.

use super::classifier::Classifier;
use super::grammar::Grammar;
use super::lines::split_lines;
use super::tokens::Line;

/// Memoizes classifier output per line index
pub struct HighlightCache {
    grammar: Grammar,
    /// Source text of each cached line, parallel to `lines`
    sources: Vec<String>,
    lines: Vec<Line>,
    hits: usize,
    misses: usize,
}

impl HighlightCache {
    /// Create a cache classifying with the given grammar
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            sources: Vec::new(),
            lines: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Classify `text`, reusing tokens for lines that did not change
    pub fn update(&mut self, text: &str) -> &[Line] {
        let classifier = Classifier::new(&self.grammar);
        let current = split_lines(text);
        let (mut hits, mut misses) = (0, 0);

        for (idx, source) in current.iter().enumerate() {
            match self.sources.get_mut(idx) {
                Some(cached) if cached.as_str() == *source => hits += 1,
                Some(cached) => {
                    cached.clear();
                    cached.push_str(source);
                    self.lines[idx] = classifier.classify_line(source);
                    misses += 1;
                }
                None => {
                    self.sources.push(source.to_string());
                    self.lines.push(classifier.classify_line(source));
                    misses += 1;
                }
            }
        }
        self.sources.truncate(current.len());
        self.lines.truncate(current.len());

        self.hits += hits;
        self.misses += misses;
        tracing::debug!(lines = current.len(), hits, misses, "highlight cache updated");

        &self.lines
    }

    /// Lines from the most recent `update`
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Drop every cached line
    pub fn invalidate_all(&mut self) {
        self.sources.clear();
        self.lines.clear();
    }

    /// Total (hits, misses) since creation
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}

impl Default for HighlightCache {
    fn default() -> Self {
        Self::new(Grammar::default())
    }
}
