use pretty_assertions::assert_eq;
use sqlscan::{tokenize, BareWords, Halt, Lexer, Options, Token, TokenType};

fn kinds(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|t| t.token_type).collect()
}

#[test]
fn pulls_tokens_one_at_a_time() {
    let mut lexer = Lexer::new("q", "select a, b from `t`");
    assert_eq!(lexer.pull(), Ok(Token::new(TokenType::Select, "select")));
    let halt = lexer.pull().unwrap_err();
    assert_eq!(halt.token().token_type, TokenType::Error);
    assert_eq!(halt.to_string(), "ERROR: q: keyword doesn't exist: a");
}

#[test]
fn grouped_query_with_identifiers() {
    let source = "SELECT `dept`, count FROM staff\nGROUP BY `dept` ORDER BY count LIMIT 10";
    let options = Options::new().bare_words(BareWords::Identifier);
    let tokens: Vec<_> = Lexer::with_options("report", source, options).collect();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenType::Select,
            TokenType::Literal,
            TokenType::Sep,
            TokenType::Ident,
            TokenType::From,
            TokenType::Ident,
            TokenType::Group,
            TokenType::By,
            TokenType::Literal,
            TokenType::Order,
            TokenType::By,
            TokenType::Ident,
            TokenType::Limit,
            TokenType::Number,
            TokenType::Eof,
        ]
    );
    assert_eq!(tokens[13].lexeme, "10");
}

#[test]
fn join_query_scans_to_eof() {
    let tokens = tokenize(
        "q",
        "select * from `a` left outer join `b` on `a` = `b` where `x` >= 1.5",
    );
    assert_eq!(tokens.last(), Some(&Token::new(TokenType::Eof, "")));
    assert_eq!(tokens.iter().filter(|t| t.token_type == TokenType::Op).count(), 3);
}

#[test]
fn halt_renders_like_its_token() {
    let mut lexer = Lexer::new("q", "");
    let halt = lexer.pull().unwrap_err();
    assert!(!halt.is_error());
    assert_eq!(halt.to_string(), "EOF");
    assert_eq!(halt.into_token(), Token::new(TokenType::Eof, ""));
}

#[test]
fn string_values_render_quoted() {
    let tokens = tokenize("q", "where 'it''s'");
    let rendered: Vec<_> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["\"where\"", "\"'it'\"", "\"'s'\"", "EOF"]);
    assert!(matches!(
        Lexer::new("q", "'x").pull(),
        Err(Halt::Lexical(_))
    ));
}
