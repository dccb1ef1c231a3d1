use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expression, expressions::Identifier};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

impl LetStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// `return <value>;`, where the value may be left out.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

impl ReturnStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token_literal(), value),
            None => write!(f, "{};", self.token_literal()),
        }
    }
}

/// A bare expression used as a statement.
///
/// `token` is the first token of the statement. Equality compares the expression only,
/// so a grouped rendering such as `(a + b)` equals the statement it was printed from.
#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl ExpressionStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl PartialEq for ExpressionStatement {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
