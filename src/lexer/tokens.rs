use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("fn", TokenKind::Function);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map
    };
}

/// The closed set of token kinds.
///
/// `Display` renders the canonical upper-case name (`ASSIGN`, `NOT_EQ`, ...), which is the
/// form used in diagnostics.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    #[strum(serialize = "EOF")]
    EOF,
    Illegal,

    Ident,
    Int,

    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Slash,    // /
    Asterisk, // *

    Lt,    // <
    Gt,    // >
    Eq,    // ==
    NotEq, // !=

    Comma,
    Semicolon,

    Lparen,
    Rparen,
    Lbrace,
    Rbrace,

    // Reserved
    Let,
    Return,
    True,
    False,
    Function,
    If,
    Else,
}

/// A single lexical unit.
///
/// Tokens compare by kind and literal only; the span is positional metadata.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, value: {:?} }}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line description used by `--tokens` output.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[TokenKind::Ident, TokenKind::Int, TokenKind::Illegal]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
