//! Token classifier
//!
//! A single left-to-right scan over one line with three states:
//!
//! - `Default`: statement text, split into whitespace runs and words
//! - `InTagOpen`: the `<`/`</` bracket and the tag name
//! - `InAttributes`: attribute chunks up to the closing `>` or `/>`
//!
//! Every step consumes at least one character or changes state, and
//! every consumed character lands in exactly one token, so the tokens
//! of a line always concatenate back to the line.

use std::sync::OnceLock;

use super::cursor::Cursor;
use super::grammar::Grammar;
use super::lines::split_lines;
use super::tokens::{Category, Line, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    InTagOpen,
    InAttributes,
}

/// Classifies lines against a borrowed grammar
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'g> {
    grammar: &'g Grammar,
}

impl<'g> Classifier<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Classify a whole buffer, one `Line` per `\n`-separated line
    pub fn classify(&self, text: &str) -> Vec<Line> {
        let lines: Vec<Line> = split_lines(text)
            .into_iter()
            .map(|line| self.classify_line(line))
            .collect();
        tracing::trace!(lines = lines.len(), bytes = text.len(), "classified buffer");
        lines
    }

    /// Classify a single line (must not contain `\n`)
    pub fn classify_line(&self, line: &str) -> Line {
        let mut scan = LineScan::new(self.grammar, line, true);
        scan.run();
        Line::new(scan.tokens)
    }
}

/// Classify a buffer with the default grammar
pub fn classify(text: &str) -> Vec<Line> {
    static DEFAULT_GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    Classifier::new(DEFAULT_GRAMMAR.get_or_init(Grammar::default)).classify(text)
}

/// Scan state for one line
struct LineScan<'g, 'a> {
    grammar: &'g Grammar,
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    /// Byte offset of the last `>` on the line. A `<` only opens a tag
    /// when a `>` follows it; `None` disables tags entirely.
    last_close: Option<usize>,
}

impl<'g, 'a> LineScan<'g, 'a> {
    fn new(grammar: &'g Grammar, text: &'a str, tags: bool) -> Self {
        Self {
            grammar,
            cursor: Cursor::new(text),
            tokens: Vec::new(),
            last_close: if tags { text.rfind('>') } else { None },
        }
    }

    fn run(&mut self) {
        let mut state = State::Default;
        while !self.cursor.is_eof() {
            state = match state {
                State::Default => self.scan_default(),
                State::InTagOpen => self.scan_tag_open(),
                State::InAttributes => self.scan_attributes(),
            };
        }
    }

    fn push(&mut self, start: usize, category: Category) {
        let text = self.cursor.since(start);
        if !text.is_empty() {
            self.tokens.push(Token::new(text, category));
        }
    }

    /// `<` followed by a name or `/`, with a closing `>` later on the line
    fn at_tag_open(&self) -> bool {
        let Some(close) = self.last_close else {
            return false;
        };
        self.cursor.peek() == Some('<')
            && close > self.cursor.pos()
            && self
                .cursor
                .peek_second()
                .is_some_and(|c| c == '/' || is_name_start(c))
    }

    fn at_tag_close(&self) -> bool {
        self.cursor.peek() == Some('>') || self.cursor.starts_with("/>")
    }

    fn scan_default(&mut self) -> State {
        if self.at_tag_open() {
            return State::InTagOpen;
        }

        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some(c) if c.is_whitespace() => {
                self.cursor.eat_while(char::is_whitespace);
                self.push(start, Category::Whitespace);
            }
            _ if self.cursor.starts_with("//") => {
                self.cursor.skip_to_end();
                self.push(start, Category::LineComment);
            }
            _ => {
                // First character is neither whitespace nor a tag opening
                self.cursor.bump();
                while let Some(c) = self.cursor.peek() {
                    if c.is_whitespace() || self.at_tag_open() {
                        break;
                    }
                    self.cursor.bump();
                }
                let category = self.word_category(self.cursor.since(start));
                self.push(start, category);
            }
        }
        State::Default
    }

    fn word_category(&self, word: &str) -> Category {
        if self.grammar.is_keyword(word) {
            Category::Keyword
        } else if self.grammar.is_punctuation(word) {
            Category::Punctuation
        } else if word.starts_with('\'') || word.starts_with('"') {
            Category::StringLiteral
        } else {
            Category::Plain
        }
    }

    fn scan_tag_open(&mut self) -> State {
        let start = self.cursor.pos();
        if self.cursor.starts_with("</") {
            self.cursor.bump_str("</");
        } else {
            self.cursor.bump_str("<");
        }
        self.push(start, Category::TagBracket);

        let name_start = self.cursor.pos();
        self.cursor.eat_while(is_name_char);
        let category = self.tag_name_category(self.cursor.since(name_start));
        self.push(name_start, category);

        State::InAttributes
    }

    fn tag_name_category(&self, name: &str) -> Category {
        let capitalized = name.chars().next().is_some_and(char::is_uppercase);
        if capitalized || name.contains('.') {
            Category::ComponentName
        } else if self.grammar.is_element(name) {
            Category::ElementName
        } else {
            Category::ComponentName
        }
    }

    fn scan_attributes(&mut self) -> State {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some('>') => {
                self.cursor.bump();
                self.push(start, Category::TagBracket);
                return State::Default;
            }
            Some('/') if self.cursor.starts_with("/>") => {
                self.cursor.bump_str("/>");
                self.push(start, Category::TagBracket);
                return State::Default;
            }
            Some(c) if c.is_whitespace() => {
                self.cursor.eat_while(char::is_whitespace);
                self.push(start, Category::Whitespace);
            }
            Some('{') => self.scan_braced(),
            Some(c) if is_name_start(c) => {
                self.cursor.eat_while(is_attribute_char);
                self.push(start, Category::AttributeName);

                if self.cursor.peek() == Some('=') {
                    let op = self.cursor.pos();
                    self.cursor.bump();
                    self.push(op, Category::AttributeOperator);
                    self.scan_attribute_value();
                }
            }
            _ => {
                self.eat_attribute_text();
                self.push(start, Category::Plain);
            }
        }
        State::InAttributes
    }

    fn scan_attribute_value(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.cursor.bump();
                self.cursor.eat_while(|c| c != quote);
                // Closing quote, if the line has one
                self.cursor.bump();
                self.push(start, Category::StringLiteral);
            }
            Some('{') => self.scan_braced(),
            Some(c) if !c.is_whitespace() && !self.at_tag_close() => {
                self.eat_attribute_text();
                self.push(start, Category::Plain);
            }
            _ => {}
        }
    }

    /// Consume one character, then up to whitespace, `>` or `/>`
    fn eat_attribute_text(&mut self) {
        self.cursor.bump();
        while let Some(c) = self.cursor.peek() {
            if c.is_whitespace() || self.at_tag_close() {
                break;
            }
            self.cursor.bump();
        }
    }

    /// `{ ... }` expression inside a tag. Braces nest; the inside is
    /// classified as plain statement text with tags disabled.
    fn scan_braced(&mut self) {
        let open = self.cursor.pos();
        self.cursor.bump();
        self.push(open, Category::Punctuation);

        let inner = self.cursor.rest();
        let close = matching_brace(inner);
        let inner = &inner[..close.unwrap_or(inner.len())];
        let mut nested = LineScan::new(self.grammar, inner, false);
        nested.run();
        self.cursor.bump_str(inner);

        let in_comment = nested
            .tokens
            .last()
            .is_some_and(|t| t.category == Category::LineComment);
        self.tokens.append(&mut nested.tokens);

        if in_comment {
            // The comment runs past the closing brace to end of line
            let rest = self.cursor.pos();
            self.cursor.skip_to_end();
            let tail = self.cursor.since(rest);
            if let Some(comment) = self.tokens.last_mut() {
                comment.text.push_str(tail);
            }
        } else if close.is_some() {
            let brace = self.cursor.pos();
            self.cursor.bump();
            self.push(brace, Category::Punctuation);
        }
    }
}

/// Offset of the `}` closing an expression whose `{` was just consumed.
/// Braces inside `"..."` and `'...'` runs do not count.
fn matching_brace(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote = None;
    for (offset, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '{') => depth += 1,
            (None, '}') if depth == 0 => return Some(offset),
            (None, '}') => depth -= 1,
            _ => {}
        }
    }
    None
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

fn is_attribute_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':')
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    fn kinds(line: &str) -> Vec<(String, Category)> {
        let grammar = Grammar::default();
        Classifier::new(&grammar)
            .classify_line(line)
            .iter()
            .map(|t| (t.text.clone(), t.category))
            .collect()
    }

    fn tok(text: &str, category: Category) -> (String, Category) {
        (text.to_string(), category)
    }

    #[test]
    fn test_keyword_statement() {
        assert_eq!(
            kinds("const x = 1"),
            vec![
                tok("const", Keyword),
                tok(" ", Whitespace),
                tok("x", Plain),
                tok(" ", Whitespace),
                tok("=", Keyword),
                tok(" ", Whitespace),
                tok("1", Plain),
            ]
        );
    }

    #[test]
    fn test_element_and_component_tags() {
        assert_eq!(
            kinds(r#"<div className="a"><Foo.Bar/></div>"#),
            vec![
                tok("<", TagBracket),
                tok("div", ElementName),
                tok(" ", Whitespace),
                tok("className", AttributeName),
                tok("=", AttributeOperator),
                tok("\"a\"", StringLiteral),
                tok(">", TagBracket),
                tok("<", TagBracket),
                tok("Foo.Bar", ComponentName),
                tok("/>", TagBracket),
                tok("</", TagBracket),
                tok("div", ElementName),
                tok(">", TagBracket),
            ]
        );
    }

    #[test]
    fn test_comment_precedence() {
        assert_eq!(kinds("// const x = 1"), vec![tok("// const x = 1", LineComment)]);
    }

    #[test]
    fn test_comment_swallows_tags() {
        assert_eq!(
            kinds("x // <div>"),
            vec![tok("x", Plain), tok(" ", Whitespace), tok("// <div>", LineComment)]
        );
    }

    #[test]
    fn test_comment_only_at_word_start() {
        assert_eq!(
            kinds("a;// b"),
            vec![tok("a;//", Plain), tok(" ", Whitespace), tok("b", Plain)]
        );
    }

    #[test]
    fn test_punctuation_words() {
        assert_eq!(
            kinds("import { useState } from 'react';"),
            vec![
                tok("import", Keyword),
                tok(" ", Whitespace),
                tok("{", Punctuation),
                tok(" ", Whitespace),
                tok("useState", Plain),
                tok(" ", Whitespace),
                tok("}", Punctuation),
                tok(" ", Whitespace),
                tok("from", Keyword),
                tok(" ", Whitespace),
                tok("'react';", StringLiteral),
            ]
        );
    }

    #[test]
    fn test_quoted_word_ends_at_whitespace() {
        assert_eq!(
            kinds(r#""hello world""#),
            vec![tok("\"hello", StringLiteral), tok(" ", Whitespace), tok("world\"", Plain)]
        );
    }

    #[test]
    fn test_unknown_lowercase_tag_is_component() {
        assert_eq!(
            kinds("<section>"),
            vec![tok("<", TagBracket), tok("section", ComponentName), tok(">", TagBracket)]
        );
    }

    #[test]
    fn test_element_case_insensitive() {
        assert_eq!(
            kinds("<DIV>"),
            // Capitalized names are components before the table is consulted
            vec![tok("<", TagBracket), tok("DIV", ComponentName), tok(">", TagBracket)]
        );
        assert_eq!(
            kinds("<dIv>"),
            vec![tok("<", TagBracket), tok("dIv", ElementName), tok(">", TagBracket)]
        );
    }

    #[test]
    fn test_tag_inside_statement() {
        assert_eq!(
            kinds("return <App />;"),
            vec![
                tok("return", Keyword),
                tok(" ", Whitespace),
                tok("<", TagBracket),
                tok("App", ComponentName),
                tok(" ", Whitespace),
                tok("/>", TagBracket),
                tok(";", Punctuation),
            ]
        );
    }

    #[test]
    fn test_tag_interrupts_word() {
        assert_eq!(
            kinds("x=<p>hi</p>"),
            vec![
                tok("x=", Plain),
                tok("<", TagBracket),
                tok("p", ElementName),
                tok(">", TagBracket),
                tok("hi", Plain),
                tok("</", TagBracket),
                tok("p", ElementName),
                tok(">", TagBracket),
            ]
        );
    }

    #[test]
    fn test_bare_and_hyphenated_attributes() {
        assert_eq!(
            kinds("<input disabled data-id='7'/>"),
            vec![
                tok("<", TagBracket),
                tok("input", ElementName),
                tok(" ", Whitespace),
                tok("disabled", AttributeName),
                tok(" ", Whitespace),
                tok("data-id", AttributeName),
                tok("=", AttributeOperator),
                tok("'7'", StringLiteral),
                tok("/>", TagBracket),
            ]
        );
    }

    #[test]
    fn test_quoted_value_protects_brackets() {
        assert_eq!(
            kinds(r#"<a title="x > y">go</a>"#),
            vec![
                tok("<", TagBracket),
                tok("a", ElementName),
                tok(" ", Whitespace),
                tok("title", AttributeName),
                tok("=", AttributeOperator),
                tok("\"x > y\"", StringLiteral),
                tok(">", TagBracket),
                tok("go", Plain),
                tok("</", TagBracket),
                tok("a", ElementName),
                tok(">", TagBracket),
            ]
        );
    }

    #[test]
    fn test_mismatched_quote_kind() {
        assert_eq!(
            kinds(r#"<a b="it's">"#),
            vec![
                tok("<", TagBracket),
                tok("a", ElementName),
                tok(" ", Whitespace),
                tok("b", AttributeName),
                tok("=", AttributeOperator),
                tok("\"it's\"", StringLiteral),
                tok(">", TagBracket),
            ]
        );
    }

    #[test]
    fn test_unterminated_attribute_string() {
        assert_eq!(
            kinds(r#"<a href="foo>bar"#),
            vec![
                tok("<", TagBracket),
                tok("a", ElementName),
                tok(" ", Whitespace),
                tok("href", AttributeName),
                tok("=", AttributeOperator),
                tok("\"foo>bar", StringLiteral),
            ]
        );
    }

    #[test]
    fn test_unquoted_value() {
        assert_eq!(
            kinds("<img width=10/>"),
            vec![
                tok("<", TagBracket),
                tok("img", ElementName),
                tok(" ", Whitespace),
                tok("width", AttributeName),
                tok("=", AttributeOperator),
                tok("10", Plain),
                tok("/>", TagBracket),
            ]
        );
    }

    #[test]
    fn test_expression_value() {
        assert_eq!(
            kinds("<button onClick={() => go({ a })}>Go</button>"),
            vec![
                tok("<", TagBracket),
                tok("button", ElementName),
                tok(" ", Whitespace),
                tok("onClick", AttributeName),
                tok("=", AttributeOperator),
                tok("{", Punctuation),
                tok("()", Plain),
                tok(" ", Whitespace),
                tok("=>", Plain),
                tok(" ", Whitespace),
                tok("go({", Plain),
                tok(" ", Whitespace),
                tok("a", Plain),
                tok(" ", Whitespace),
                tok("})", Plain),
                tok("}", Punctuation),
                tok(">", TagBracket),
                tok("Go", Plain),
                tok("</", TagBracket),
                tok("button", ElementName),
                tok(">", TagBracket),
            ]
        );
    }

    #[test]
    fn test_spread_attribute() {
        assert_eq!(
            kinds("<Foo {...props} />"),
            vec![
                tok("<", TagBracket),
                tok("Foo", ComponentName),
                tok(" ", Whitespace),
                tok("{", Punctuation),
                tok("...props", Plain),
                tok("}", Punctuation),
                tok(" ", Whitespace),
                tok("/>", TagBracket),
            ]
        );
    }

    #[test]
    fn test_unterminated_expression() {
        assert_eq!(
            kinds("<Foo a={x >"),
            vec![
                tok("<", TagBracket),
                tok("Foo", ComponentName),
                tok(" ", Whitespace),
                tok("a", AttributeName),
                tok("=", AttributeOperator),
                tok("{", Punctuation),
                tok("x", Plain),
                tok(" ", Whitespace),
                tok(">", Plain),
            ]
        );
    }

    #[test]
    fn test_comment_in_expression_runs_to_end_of_line() {
        assert_eq!(
            kinds("<a b={x // c}>done</a>"),
            vec![
                tok("<", TagBracket),
                tok("a", ElementName),
                tok(" ", Whitespace),
                tok("b", AttributeName),
                tok("=", AttributeOperator),
                tok("{", Punctuation),
                tok("x", Plain),
                tok(" ", Whitespace),
                tok("// c}>done</a>", LineComment),
            ]
        );
    }

    #[test]
    fn test_quoted_brace_in_expression() {
        assert_eq!(
            kinds(r#"<a b={"}"}>x"#),
            vec![
                tok("<", TagBracket),
                tok("a", ElementName),
                tok(" ", Whitespace),
                tok("b", AttributeName),
                tok("=", AttributeOperator),
                tok("{", Punctuation),
                tok("\"}\"", StringLiteral),
                tok("}", Punctuation),
                tok(">", TagBracket),
                tok("x", Plain),
            ]
        );
    }

    #[test]
    fn test_matching_brace() {
        assert_eq!(matching_brace("a}"), Some(1));
        assert_eq!(matching_brace("{a} b}"), Some(5));
        assert_eq!(matching_brace("'}' }"), Some(4));
        assert_eq!(matching_brace("\"{\"}"), Some(3));
        assert_eq!(matching_brace("\"}"), None);
        assert_eq!(matching_brace("{}"), None);
    }

    #[test]
    fn test_stray_angle_brackets() {
        assert_eq!(
            kinds("if (a < b) {"),
            vec![
                tok("if", Plain),
                tok(" ", Whitespace),
                tok("(a", Plain),
                tok(" ", Whitespace),
                tok("<", Plain),
                tok(" ", Whitespace),
                tok("b)", Plain),
                tok(" ", Whitespace),
                tok("{", Punctuation),
            ]
        );
        // No closing bracket anywhere on the line
        assert_eq!(
            kinds("a<b"),
            vec![tok("a<b", Plain)]
        );
    }

    #[test]
    fn test_fragment_close() {
        assert_eq!(kinds("</>"), vec![tok("</", TagBracket), tok(">", TagBracket)]);
        // `<>` has no name or slash after the bracket
        assert_eq!(kinds("<>"), vec![tok("<>", Plain)]);
    }

    #[test]
    fn test_junk_inside_tag() {
        assert_eq!(
            kinds(r#"<div = "x" ?>"#),
            vec![
                tok("<", TagBracket),
                tok("div", ElementName),
                tok(" ", Whitespace),
                tok("=", Plain),
                tok(" ", Whitespace),
                tok("\"x\"", Plain),
                tok(" ", Whitespace),
                tok("?", Plain),
                tok(">", TagBracket),
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace_lines() {
        assert!(kinds("").is_empty());
        assert_eq!(kinds(" \t "), vec![tok(" \t ", Whitespace)]);
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(
            kinds("<p>héllo wörld</p>"),
            vec![
                tok("<", TagBracket),
                tok("p", ElementName),
                tok(">", TagBracket),
                tok("héllo", Plain),
                tok(" ", Whitespace),
                tok("wörld", Plain),
                tok("</", TagBracket),
                tok("p", ElementName),
                tok(">", TagBracket),
            ]
        );
    }

    #[test]
    fn test_classify_buffer() {
        let lines = classify("const a = 1\n\n<div>");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 7);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].text(), "<div>");
    }

    #[test]
    fn test_empty_buffer() {
        let lines = classify("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn test_custom_grammar() {
        let mut grammar = Grammar::default();
        grammar.add_keyword("async");
        grammar.add_element("section");
        let classifier = Classifier::new(&grammar);

        let line = classifier.classify_line("async <section>");
        let categories: Vec<_> = line.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![Keyword, Whitespace, TagBracket, ElementName, TagBracket]
        );
    }
}
