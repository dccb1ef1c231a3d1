//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser pulls tokens from the lexer on demand, keeping the current
//! token and one token of lookahead, and dispatches through lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Errors never abort a parse: each failed statement is recorded and skipped, so a
/// single call to [`Parser::parse_program`] reports every problem in the source.
pub struct Parser {
    /// Source of tokens, drawn one at a time
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`.
    ///
    /// Draws the current and the peek token straight away and registers every
    /// statement, prefix and infix handler.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the peek token into the current slot, draws a new peek token and returns
    /// the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// Otherwise the position is left untouched and an `ExpectedToken` error pointing
    /// at the peek token is returned.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Binding power of the peek token, `Lowest` when it is not an infix operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Binding power of the current token, `Lowest` when it is not an infix operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Diagnostics collected so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Diagnostics collected so far, as display strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until the end of input.
    ///
    /// Always returns a program; when [`Parser::errors`] is non-empty the program only
    /// holds the statements that parsed cleanly.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EOF {
            let start = self.get_position();

            match parse_stmt(self) {
                Ok(statement) => {
                    debug!("parsed statement `{}`", statement);
                    program.statements.push(statement);
                    self.advance();
                }
                Err(error) => {
                    debug!("statement failed at {}: {}", error.get_position().0, error);
                    self.errors.push(error);
                    self.synchronize(start);
                }
            }
        }

        debug!(
            "parsed {} statements with {} errors",
            program.len(),
            self.errors.len()
        );

        program
    }

    /// Skips past the next semicolon, or up to the next statement keyword, or to EOF.
    ///
    /// `start` is where the failed statement began. A statement keyword anywhere else
    /// is left in place to start the next statement; the token at `start` is always
    /// consumed.
    fn synchronize(&mut self, start: Position) {
        while self.current_token_kind() != TokenKind::EOF {
            if self.current.span.start.0 != start.0
                && self.stmt_lookup.contains_key(&self.current_token_kind())
            {
                break;
            }

            let token = self.advance();
            if token.kind == TokenKind::Semicolon {
                break;
            }
        }

        debug!(
            "resynchronized from {} to {}",
            start.0,
            self.get_position().0
        );
    }
}
