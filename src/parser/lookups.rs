use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first.
///
/// The derived ordering is what the expression loop compares against: an operator is
/// only folded into the current expression when it binds strictly tighter than the
/// caller's binding power.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    // Reserved for call expressions.
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.led(TokenKind::Eq, BindingPower::Equals, parse_binary_expr);
    parser.led(TokenKind::NotEq, BindingPower::Equals, parse_binary_expr);

    // Relational
    parser.led(TokenKind::Lt, BindingPower::LessGreater, parse_binary_expr);
    parser.led(TokenKind::Gt, BindingPower::LessGreater, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Sum, parse_binary_expr);
    parser.led(TokenKind::Minus, BindingPower::Sum, parse_binary_expr);
    parser.led(TokenKind::Asterisk, BindingPower::Product, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Product, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Int, parse_primary_expr);
    parser.nud(TokenKind::Ident, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::Lparen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
