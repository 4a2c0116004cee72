/// What the scanner does with a bare word that is not a keyword.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BareWords {
    /// Report `keyword doesn't exist` and halt.
    #[default]
    Reject,
    /// Emit the word as an `Ident` token and keep scanning.
    Identifier,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub bare_words: BareWords,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bare_words(mut self, bare_words: BareWords) -> Self {
        self.bare_words = bare_words;
        self
    }
}
