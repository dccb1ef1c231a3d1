use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Handles a pattern match of the given byte length at the lexer's cursor.
///
/// Returns `None` when the matched text produces no token (whitespace).
pub type RegexHandler = fn(&mut Lexer, usize) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored at the cursor. Order matters: two-character operators
    // must be tried before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\n\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lparen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Rparen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lbrace, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Rbrace, "}") },
    ];
}

/// Pull-based tokenizer over an in-memory source string.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. Once the end of input is
/// reached every further call yields another `EOF` token; the only way back to the start
/// is [`Lexer::reset`].
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    /// Produces the next token, skipping whitespace.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new(), self.span(self.pos, self.pos));
            }

            let remainder = self.remainder();
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.end())));

            let token = match matched {
                Some((handler, len)) => match handler(self, len) {
                    Some(token) => token,
                    None => continue,
                },
                None => self.illegal(),
            };

            trace!("lexed {} at {}", token.debug(), token.span.start.0);
            return token;
        }
    }

    /// Rewinds the cursor to the start of the source.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.finished = false;
    }

    /// Takes `len` bytes at the cursor as a token of the given kind.
    pub fn consume(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        self.pos += len;
        MK_TOKEN!(kind, self.source[start..self.pos].to_string(), self.span(start, self.pos))
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn illegal(&mut self) -> Token {
        // Whole character, so multi-byte input never splits a code point.
        let len = self.remainder().chars().next().map_or(1, char::len_utf8);
        self.consume(TokenKind::Illegal, len)
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }
}

/// Yields every token up to and including the first `EOF`, then stops.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }

        Some(token)
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    lexer.pos += len;
    None
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    Some(lexer.consume(TokenKind::Int, len))
}

fn symbol_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let value = &lexer.remainder()[..len];
    let kind = RESERVED_LOOKUP
        .get(value)
        .copied()
        .unwrap_or(TokenKind::Ident);

    Some(lexer.consume(kind, len))
}

/// Tokenizes a whole source string, ending with a single `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
