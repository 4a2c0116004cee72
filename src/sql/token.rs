use std::fmt;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenType {
    // Terminal markers
    Error, Eof,

    // Single-character tokens
    Star, Sep, Dot, Op, Paren,

    // Literals
    Literal, Number, String, DblString,

    // Bare word, only produced with `BareWords::Identifier`
    Ident,

    // Keywords
    Select, Distinct, From, Where, Group, Order, By, Having, Limit,
    Join, Left, Right, Inner, Outer, On, As, Union, All,
    And, Or, Between, True, False, Null, Is, Not, Like, Exists,
}

impl TokenType {
    pub fn is_keyword(self) -> bool {
        self >= TokenType::Select
    }

    /// End of input or a lexical error; nothing follows these.
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenType::Error | TokenType::Eof)
    }
}

/// A scanned token. `lexeme` is the exact source text it was matched from,
/// quotes and backticks included; for `Error` it holds the diagnostic.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: impl Into<String>) -> Self {
        Token {
            token_type,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_type {
            TokenType::Eof => f.write_str("EOF"),
            TokenType::Error => f.write_str(&self.lexeme),
            _ => write!(f, "{:?}", self.lexeme),
        }
    }
}
