//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization on demand using anchored regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping and `ILLEGAL` tokens for unknown characters

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
