//! Unit tests for the lexer module.
//!
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation, including the two-character operators
//! - Illegal characters and end-of-input behavior

use test_log::test;

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.monkey".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize(
        "let return true false fn if else".to_string(),
        Some("test.monkey".to_string()),
    );

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Return);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::Function);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize(
        "foo bar baz_123 _underscore CamelCase letter".to_string(),
        None,
    );

    let expected = ["foo", "bar", "baz_123", "_underscore", "CamelCase", "letter"];
    for (token, value) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.value, value);
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 838383 007".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "838383");
    assert_eq!(tokens[3].value, "007");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_digits_stop_at_letters() {
    let tokens = tokenize("123abc".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "123");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("=+-!*/<>"),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_character_operators() {
    assert_eq!(
        kinds("10 == 10; 10 != 9; !x = y"),
        vec![
            TokenKind::Int,
            TokenKind::Eq,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Int,
            TokenKind::NotEq,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Bang,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Ident,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("(){},;"),
        vec![
            TokenKind::Lparen,
            TokenKind::Rparen,
            TokenKind::Lbrace,
            TokenKind::Rbrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;\n\tlet ten = 10;\r\n".to_string(), None);
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("a @ é # b".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "é");
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "#");
    assert_eq!(tokens[4].kind, TokenKind::Ident);
    assert_eq!(tokens[4].value, "b");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_whitespace_only_source() {
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::EOF]);
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut lexer = Lexer::new("1 + 2".to_string(), None);

    assert_eq!(lexer.by_ref().count(), 4);
    assert!(lexer.next().is_none());
}

#[test]
fn test_reset_restarts_from_beginning() {
    let mut lexer = Lexer::new("let x".to_string(), None);
    let first: Vec<_> = lexer.by_ref().collect();

    lexer.reset();
    let second: Vec<_> = lexer.collect();

    assert_eq!(first, second);
    assert_eq!(second.len(), 3);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  x == 10".to_string(), Some("spans.monkey".to_string()));

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[4].span.start.0, 12);
    assert_eq!(tokens[4].span.start.1.as_str(), "spans.monkey");
}

#[test]
fn test_kind_display_names() {
    assert_eq!(TokenKind::Assign.to_string(), "ASSIGN");
    assert_eq!(TokenKind::NotEq.to_string(), "NOT_EQ");
    assert_eq!(TokenKind::Lparen.to_string(), "LPAREN");
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
