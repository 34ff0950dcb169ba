//! Character cursor for the single-pass scanner
//!
//! Tracks a byte position into one line and only ever moves forward,
//! always landing on a char boundary.

pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current byte position
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Text from the cursor to end of line
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Text between `start` and the cursor
    pub fn since(&self, start: usize) -> &'a str {
        &self.text[start..self.pos]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the next one
    pub fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advance past one character
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Advance past an ASCII prefix known to be at the cursor
    pub fn bump_str(&mut self, prefix: &str) {
        debug_assert!(self.starts_with(prefix));
        self.pos += prefix.len();
    }

    /// Advance while `pred` holds
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.text.len();
    }
}
