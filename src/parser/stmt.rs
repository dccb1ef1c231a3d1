use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// Leaves the current token on the last token of the statement, which is its
/// semicolon when one was written.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    skip_semicolon(parser);

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Ident)?;
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    skip_semicolon(parser);

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let value = match parser.peek_token_kind() {
        TokenKind::Semicolon | TokenKind::EOF => None,
        _ => {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Lowest)?)
        }
    };

    skip_semicolon(parser);

    Ok(Statement::Return(ReturnStatement { token, value }))
}

// The terminating semicolon is optional so single expressions work without one.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}
