use std::{collections::HashMap, sync::LazyLock};

use super::token::TokenType;

// Only the words the scanner can produce. AND, OR, NOT and the rest are
// declared in `TokenType` but have no recognizer yet.
static KEYWORDS: LazyLock<HashMap<&'static str, TokenType>> = LazyLock::new(|| {
    HashMap::from([
        ("SELECT", TokenType::Select),
        ("DISTINCT", TokenType::Distinct),
        ("FROM", TokenType::From),
        ("WHERE", TokenType::Where),
        ("GROUP", TokenType::Group),
        ("ORDER", TokenType::Order),
        ("BY", TokenType::By),
        ("HAVING", TokenType::Having),
        ("LIMIT", TokenType::Limit),
        ("JOIN", TokenType::Join),
        ("LEFT", TokenType::Left),
        ("RIGHT", TokenType::Right),
        ("INNER", TokenType::Inner),
        ("OUTER", TokenType::Outer),
        ("ON", TokenType::On),
        ("AS", TokenType::As),
        ("UNION", TokenType::Union),
        ("ALL", TokenType::All),
    ])
});

pub fn get(text: &str) -> Option<TokenType> {
    let keyword = text.to_ascii_uppercase();
    KEYWORDS.get(keyword.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(get("select"), Some(TokenType::Select));
        assert_eq!(get("SeLeCt"), Some(TokenType::Select));
        assert_eq!(get("union"), Some(TokenType::Union));
    }

    #[test]
    fn unproduced_keywords_are_absent() {
        assert_eq!(get("and"), None);
        assert_eq!(get("null"), None);
        assert_eq!(get("xyz"), None);
    }
}
