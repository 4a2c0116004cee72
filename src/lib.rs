//! A hand-written SQL scanner.
//!
//! ```
//! use sqlscan::{Lexer, TokenType};
//!
//! let mut lexer = Lexer::new("query", "select * from `t`");
//! assert_eq!(lexer.pull().unwrap().token_type, TokenType::Select);
//! ```

pub mod sql;

pub use sql::{
    error::Halt,
    options::{BareWords, Options},
    scanner::{tokenize, Lexer},
    token::{Token, TokenType},
};
