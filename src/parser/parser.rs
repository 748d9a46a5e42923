//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parse
//! loop. The parser uses a Pratt approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Failures never unwind: handlers record a diagnostic and return a hole,
//! and the statement loop resynchronizes and keeps going, so one malformed
//! statement never aborts the whole parse.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostic, DiagnosticKind},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::{parse_stmt, synchronize},
};

/// Default cap on expression nesting depth. Recursive descent mirrors input
/// nesting onto the call stack, so the parser refuses inputs deeper than
/// this with a NestingTooDeep diagnostic instead of overflowing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the diagnostic collector, and the
/// lookup tables for parsing statements and expressions. It tracks the
/// current position in the token stream and provides methods for token
/// consumption.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an Eof sentinel
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Diagnostics recorded so far; append-only, never cleared
    diagnostics: Vec<Diagnostic>,
    /// Current expression nesting depth
    depth: usize,
    /// Nesting depth at which parsing gives up
    max_depth: usize,
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
    /// Creates a new Parser instance over a token stream.
    ///
    /// An Eof sentinel is appended if the stream lacks one, so cursor
    /// operations are total for any input.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    /// Creates a parser with an explicit expression nesting limit.
    pub fn with_max_depth(mut tokens: Vec<Token>, max_depth: usize) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            let position = tokens
                .last()
                .map(|token| token.position)
                .unwrap_or_else(Position::start);
            tokens.push(Token {
                kind: TokenKind::Eof,
                value: String::new(),
                position,
            });
        }

        Parser {
            tokens,
            pos: 0,
            diagnostics: vec![],
            depth: 0,
            max_depth,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Advances to the next token and returns the consumed token. The
    /// cursor parks on the Eof sentinel and never runs past it.
    pub fn advance(&mut self) -> &Token {
        let at = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[at]
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            return true;
        }
        false
    }

    /// Expects a token of the specified kind, with optional custom
    /// diagnostic.
    ///
    /// On a match the token is consumed and returned. Otherwise the custom
    /// diagnostic (or a default UnexpectedToken) is recorded at the current
    /// position, the cursor stays put, and None is returned.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        diagnostic: Option<DiagnosticKind>,
    ) -> Option<Token> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            self.report(diagnostic.unwrap_or(DiagnosticKind::UnexpectedToken {
                expected: expected_kind,
                found: kind,
            }));
            return None;
        }
        Some(self.advance().clone())
    }

    /// Expects a token of the specified kind with the default diagnostic.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::Eof
    }

    /// Records a diagnostic at the current token's position.
    pub fn report(&mut self, kind: DiagnosticKind) {
        let position = self.current_token().position;
        self.report_at(kind, position);
    }

    /// Records a diagnostic at an explicit position.
    pub fn report_at(&mut self, kind: DiagnosticKind, position: Position) {
        self.diagnostics.push(Diagnostic::new(kind, position));
    }

    /// Returns the diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the parser's diagnostic list.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Enters one level of expression nesting. At the limit a NestingTooDeep
    /// diagnostic is recorded and false is returned; the caller must treat
    /// that as a failed expression.
    pub fn enter_nested(&mut self) -> bool {
        if self.depth >= self.max_depth {
            self.report(DiagnosticKind::NestingTooDeep {
                limit: self.max_depth,
            });
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn exit_nested(&mut self) {
        self.depth -= 1;
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

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// True if the given kind can start an expression.
    pub fn has_prefix_rule(&self, kind: TokenKind) -> bool {
        self.nud_lookup.contains_key(&kind)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix registration leaves the binding power table alone: only infix
    /// operators terminate the Pratt loop, so a `{` or `if` in operand
    /// position reads as Default and yields back to the statement grammar.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Top-level loop: parses statements until end of input, resynchronizing
    /// after each failed statement. Always returns a (possibly partial)
    /// Program; never panics on malformed input.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.has_tokens() {
            let before = self.pos;
            match parse_stmt(self) {
                Some(stmt) => statements.push(stmt),
                None => synchronize(self),
            }
            // A statement that failed without consuming anything (a stray
            // `}` at top level) must not stall the loop.
            if self.pos == before {
                self.advance();
            }
        }

        Program { statements }
    }
}

/// Parses a token stream into a Program plus every diagnostic recorded
/// along the way.
///
/// This is the main entry point. It creates a parser instance, initializes
/// the lookup tables, and parses all statements until Eof. Callers decide
/// whether a non-empty diagnostic list constitutes a hard failure.
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let program = parser.parse_program();
    let diagnostics = parser.take_diagnostics();

    (program, diagnostics)
}
