// tests/lexer_tests.rs

use segql::ast::{Keyword, Operator, Token};
use segql::lexer::{tokenize, Lexer};

fn ident(s: &str) -> Token {
    Token::Identifier(s.to_string())
}

fn number(s: &str) -> Token {
    Token::Number(s.to_string())
}

fn string(s: &str) -> Token {
    Token::String(s.to_string())
}

// ============================================================================
// Punctuation and Operators
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", Token::LParen),
        (")", Token::RParen),
        (",", Token::Comma),
        ("*", Token::Star),
        ("=", Token::Op(Operator::Eq)),
        ("<", Token::Op(Operator::Lt)),
        (">", Token::Op(Operator::Gt)),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("!=", Token::Op(Operator::NotEq)),
        ("<=", Token::Op(Operator::LtEq)),
        (">=", Token::Op(Operator::GtEq)),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token(), Token::Eof);
    }
}

#[test]
fn test_two_char_vs_single_char() {
    assert_eq!(
        tokenize("< ="),
        vec![Token::Op(Operator::Lt), Token::Op(Operator::Eq)]
    );
    assert_eq!(tokenize("<="), vec![Token::Op(Operator::LtEq)]);
    assert_eq!(
        tokenize(">=="),
        vec![Token::Op(Operator::GtEq), Token::Op(Operator::Eq)]
    );
}

#[test]
fn test_lone_bang_is_skipped() {
    assert_eq!(tokenize("a ! b"), vec![ident("a"), ident("b")]);
}

// ============================================================================
// Keywords and Identifiers
// ============================================================================

#[test]
fn test_all_keywords() {
    let words = "SELECT FROM WHERE AND OR NOT IS NULL BETWEEN LIKE IN ORDER BY ASC DESC LIMIT";
    let tokens = tokenize(words);
    assert_eq!(tokens.len(), 16);
    for (token, word) in tokens.iter().zip(words.split_whitespace()) {
        match token {
            Token::Keyword(k) => assert_eq!(k.as_str(), word),
            other => panic!("Expected keyword for {}, got {:?}", word, other),
        }
    }
}

#[test]
fn test_keywords_case_insensitive() {
    assert_eq!(
        tokenize("select Select sElEcT"),
        vec![Token::Keyword(Keyword::Select); 3]
    );
}

#[test]
fn test_identifiers_keep_case() {
    assert_eq!(
        tokenize("ItemName _hidden item_2"),
        vec![ident("ItemName"), ident("_hidden"), ident("item_2")]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(tokenize("SELECTED Order_"), vec![ident("SELECTED"), ident("Order_")]);
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(tokenize("42"), vec![number("42")]);
    assert_eq!(tokenize("-7"), vec![number("-7")]);
    assert_eq!(tokenize("3.25"), vec![number("3.25")]);
}

#[test]
fn test_number_single_dot() {
    assert_eq!(tokenize("1.2.3"), vec![number("1.2"), number("3")]);
}

#[test]
fn test_minus_without_digit_is_skipped() {
    assert_eq!(tokenize("- 5"), vec![number("5")]);
}

#[test]
fn test_string_literal() {
    assert_eq!(tokenize("'Pilot'"), vec![string("Pilot")]);
    assert_eq!(tokenize("''"), vec![string("")]);
}

#[test]
fn test_string_escaped_quote() {
    assert_eq!(tokenize("'O''Brien'"), vec![string("O'Brien")]);
    assert_eq!(tokenize("''''"), vec![string("'")]);
}

#[test]
fn test_string_keeps_whitespace_and_keywords() {
    assert_eq!(tokenize("'  select * '"), vec![string("  select * ")]);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    assert_eq!(tokenize("'open ended"), vec![string("open ended")]);
}

// ============================================================================
// Leniency
// ============================================================================

#[test]
fn test_unknown_characters_skipped() {
    assert_eq!(
        tokenize("ItemName # = @ 'x' ;"),
        vec![ident("ItemName"), Token::Op(Operator::Eq), string("x")]
    );
}

#[test]
fn test_whitespace_only() {
    assert!(tokenize("  \n\t ").is_empty());
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_tokenize_is_restartable() {
    let text = "SELECT * FROM MediaSegments WHERE HasIntro = 1";
    assert_eq!(tokenize(text), tokenize(text));
}

// ============================================================================
// Full Statements
// ============================================================================

#[test]
fn test_full_query() {
    let tokens = tokenize("SELECT ItemId, ItemName FROM MediaSegments WHERE SeasonNumber BETWEEN 1 AND 3 LIMIT 5");
    assert_eq!(
        tokens,
        vec![
            Token::Keyword(Keyword::Select),
            ident("ItemId"),
            Token::Comma,
            ident("ItemName"),
            Token::Keyword(Keyword::From),
            ident("MediaSegments"),
            Token::Keyword(Keyword::Where),
            ident("SeasonNumber"),
            Token::Keyword(Keyword::Between),
            number("1"),
            Token::Keyword(Keyword::And),
            number("3"),
            Token::Keyword(Keyword::Limit),
            number("5"),
        ]
    );
}

#[test]
fn test_compact_condition() {
    assert_eq!(
        tokenize("SeasonNumber>=-2"),
        vec![ident("SeasonNumber"), Token::Op(Operator::GtEq), number("-2")]
    );
}
