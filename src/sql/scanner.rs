//! The state-transition scanner.
//!
//! Each state is a function of the [`Lexer`] that returns the next state,
//! or `None` once a terminal token has been emitted. [`Lexer::pull`] steps
//! through states until one of them emits a token, so tokens are produced
//! lazily, one per call, in source order.

use tracing::{debug, trace};

use super::{
    cursor::Cursor,
    error::Halt,
    keywords,
    options::{BareWords, Options},
    token::{Token, TokenType},
};


#[derive(Clone, Copy)]
struct State(fn(&mut Lexer<'_>) -> Option<State>);

pub struct Lexer<'a> {
    name: String,
    cursor: Cursor<'a>,
    options: Options,
    state: Option<State>,
    // Every state emits at most one token per step.
    pending: Option<Token>,
    halt: Option<Halt>,
}

impl<'a> Lexer<'a> {
    pub fn new(name: impl Into<String>, source: &'a str) -> Self {
        Self::with_options(name, source, Options::default())
    }

    pub fn with_options(name: impl Into<String>, source: &'a str, options: Options) -> Self {
        Lexer {
            name: name.into(),
            cursor: Cursor::new(source),
            options,
            state: Some(State(lex_any)),
            pending: None,
            halt: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the next token, or the [`Halt`] that ended the session.
    ///
    /// Once a session has halted every later call returns the same `Halt`.
    pub fn pull(&mut self) -> Result<Token, Halt> {
        loop {
            if let Some(token) = self.pending.take() {
                return self.deliver(token);
            }
            if let Some(halt) = &self.halt {
                return Err(halt.clone());
            }
            match self.state {
                Some(State(state)) => self.state = state(self),
                // States only stop after emitting a terminal token.
                None => self.emit(TokenType::Eof),
            }
        }
    }

    fn deliver(&mut self, token: Token) -> Result<Token, Halt> {
        let halt = match token.token_type {
            TokenType::Eof => Halt::EndOfInput(token),
            TokenType::Error => Halt::Lexical(token),
            _ => return Ok(token),
        };
        debug!(session = %self.name, %halt, offset = self.cursor.current(), "scan halted");
        self.state = None;
        self.halt = Some(halt.clone());
        Err(halt)
    }

    fn emit(&mut self, token_type: TokenType) {
        trace!(
            session = %self.name,
            ?token_type,
            cursor = %self.cursor.debug_string(),
            "emit"
        );
        let lexeme = self.cursor.take();
        self.pending = Some(Token::new(token_type, lexeme));
    }

    fn errorf(&mut self, context: &str, text: &str) {
        let message = format!("ERROR: {}: {}: {}", self.name, context, text);
        self.pending = Some(Token::new(TokenType::Error, message));
    }

    /// `!`, `<` and `>` stand alone as `Op` only when followed by one of `valid`.
    fn operator(&mut self, valid: &str) -> Option<State> {
        if !self.cursor.accept(valid) {
            let op = self.cursor.pending();
            self.errorf("unsupported op", op);
            return None;
        }
        self.emit(TokenType::Op);
        Some(State(lex_any))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token, including the final `Eof` or `Error`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.halt.is_some() {
            return None;
        }
        Some(self.pull().unwrap_or_else(Halt::into_token))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Scans the whole of `source`. The last token is always `Eof` or `Error`.
pub fn tokenize(name: &str, source: &str) -> Vec<Token> {
    Lexer::new(name, source).collect()
}

fn lex_any(l: &mut Lexer<'_>) -> Option<State> {
    let Some(c) = l.cursor.advance() else {
        l.emit(TokenType::Eof);
        return None;
    };

    match c {
        '\'' => Some(State(lex_string)),
        '`' => Some(State(lex_literal)),
        ' ' | '\n' => {
            l.cursor.ignore();
            Some(State(lex_any))
        }
        '*' => {
            l.emit(TokenType::Star);
            Some(State(lex_any))
        }
        ',' => {
            l.emit(TokenType::Sep);
            Some(State(lex_any))
        }
        '=' | '+' | '-' | '/' => {
            l.emit(TokenType::Op);
            Some(State(lex_any))
        }
        '!' => l.operator("="),
        '>' => l.operator("= "),
        '<' => l.operator("= >"),
        '0'..='9' => {
            l.cursor.backup();
            Some(State(lex_number))
        }
        c if c.is_ascii_alphabetic() => {
            l.cursor.backup();
            Some(State(lex_keyword))
        }
        _ => {
            let text = l.cursor.pending();
            l.errorf("unexpected character", text);
            None
        }
    }
}

fn lex_keyword(l: &mut Lexer<'_>) -> Option<State> {
    while l.cursor.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        l.cursor.advance();
    }

    let text = l.cursor.pending();
    match keywords::get(text) {
        Some(token_type) => l.emit(token_type),
        None if l.options.bare_words == BareWords::Identifier => l.emit(TokenType::Ident),
        None => {
            l.errorf("keyword doesn't exist", text);
            return None;
        }
    }
    Some(State(lex_any))
}

fn lex_string(l: &mut Lexer<'_>) -> Option<State> {
    lex_quoted(l, '\'', TokenType::String, "unterminated string")
}

fn lex_literal(l: &mut Lexer<'_>) -> Option<State> {
    lex_quoted(l, '`', TokenType::Literal, "unterminated literal")
}

// No escapes: the first closing delimiter ends the token.
fn lex_quoted(l: &mut Lexer<'_>, quote: char, token_type: TokenType, context: &str) -> Option<State> {
    loop {
        match l.cursor.advance() {
            Some(c) if c == quote => {
                l.emit(token_type);
                return Some(State(lex_any));
            }
            Some(_) => {}
            None => {
                let text = l.cursor.pending();
                l.errorf(context, text);
                return None;
            }
        }
    }
}

fn lex_number(l: &mut Lexer<'_>) -> Option<State> {
    digits(&mut l.cursor);
    // "12." is a complete number; the fraction may be empty.
    if l.cursor.peek() == Some('.') {
        l.cursor.advance();
    }
    digits(&mut l.cursor);

    l.emit(TokenType::Number);
    Some(State(lex_any))
}

fn digits(cursor: &mut Cursor<'_>) {
    while cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        cursor.advance();
    }
}
