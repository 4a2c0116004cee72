//! Position state over the query text.
//!
//! `start` marks the beginning of the token being assembled and `current`
//! the scan position. Both are byte offsets into UTF-8 text and always
//! satisfy `start <= current <= source.len()`.


#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    start: usize,
    current: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            start: 0,
            current: 0,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Text between `start` and `current`; the lexeme of the next token.
    pub fn pending(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Decodes the char at `current` and moves past it. `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    pub fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Whether the next char is one of `valid`. Never advances.
    pub fn accept(&self, valid: &str) -> bool {
        self.peek().is_some_and(|c| valid.contains(c))
    }

    /// Drops the pending span without producing a token.
    pub fn ignore(&mut self) {
        self.start = self.current;
    }

    /// Rewinds to `start`, undoing everything read since the last token.
    pub fn backup(&mut self) {
        self.current = self.start;
    }

    /// Takes the pending span and moves `start` up to `current`.
    pub fn take(&mut self) -> &'a str {
        let text = self.pending();
        self.start = self.current;
        text
    }

    /// The source with a `.` inserted at `start` and at `current`.
    pub fn debug_string(&self) -> String {
        let mut buffer = String::with_capacity(self.source.len() + 2);
        for (i, c) in self.source.char_indices() {
            if i == self.start {
                buffer.push('.');
            }
            if i == self.current {
                buffer.push('.');
            }
            buffer.push(c);
        }
        let end = self.source.len();
        if self.start == end {
            buffer.push('.');
        }
        if self.current == end {
            buffer.push('.');
        }
        buffer
    }
}
