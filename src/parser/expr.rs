use log::trace;

use crate::{
    ast::{
        ast::Expression,
        expressions::{Boolean, Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses one expression whose operators all bind tighter than `bp`.
///
/// On entry the current token starts the expression; on return it is the last token
/// of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: token_kind,
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    trace!("nud {} at {:?}", token_kind, bp);
    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Ok(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        trace!("led {} at {:?}", parser.current_token_kind(), operator_bp);
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Int => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => Err(Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.value.clone(),
                },
                parser.get_position(),
            )),
        },
        TokenKind::Ident => Ok(Expression::Identifier(Identifier {
            value: token.value.clone(),
            token,
        })),
        TokenKind::True | TokenKind::False => Ok(Expression::Boolean(Boolean {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: token.kind,
                token: token.value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

/// `( <expr> )` only overrides precedence; no node is produced for the parentheses.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::Rparen)?;

    Ok(expr)
}
