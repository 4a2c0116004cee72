use thiserror::Error;

use super::token::Token;

/// Why a scanning session stopped producing tokens.
///
/// Both variants carry the final token of the session. Its `Display` is the
/// token's rendering: `EOF`, or the diagnostic for a lexical error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    #[error("{0}")]
    EndOfInput(Token),
    #[error("{0}")]
    Lexical(Token),
}

impl Halt {
    pub fn token(&self) -> &Token {
        match self {
            Halt::EndOfInput(token) | Halt::Lexical(token) => token,
        }
    }

    pub fn into_token(self) -> Token {
        match self {
            Halt::EndOfInput(token) | Halt::Lexical(token) => token,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Halt::Lexical(_))
    }
}
