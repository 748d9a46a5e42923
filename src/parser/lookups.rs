use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence levels, lowest binding to highest.
///
/// Left-associative operators recurse at their own level, so the Pratt loop
/// stops at equal precedence; `=` and the ternary false branch recurse one
/// level below their own (Default), which makes them right-associative.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment, // `=` and `?:`
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Index,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Stmt>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expr>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Option<Expr>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led(TokenKind::Assign, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::Question, BindingPower::Assignment, parse_ternary_expr);

    // Equality
    parser.led(TokenKind::Eq, BindingPower::Equality, parse_infix_expr);
    parser.led(TokenKind::NotEq, BindingPower::Equality, parse_infix_expr);

    // Relational
    parser.led(TokenKind::Lt, BindingPower::Relational, parse_infix_expr);
    parser.led(TokenKind::Gt, BindingPower::Relational, parse_infix_expr);
    parser.led(TokenKind::LtEq, BindingPower::Relational, parse_infix_expr);
    parser.led(TokenKind::GtEq, BindingPower::Relational, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_infix_expr);
    parser.led(TokenKind::Minus, BindingPower::Additive, parse_infix_expr);
    parser.led(TokenKind::Asterisk, BindingPower::Multiplicative, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_infix_expr);

    parser.led(TokenKind::LParen, BindingPower::Call, parse_call_expr);
    parser.led(TokenKind::LBracket, BindingPower::Index, parse_index_expr);

    // Literals and symbols
    parser.nud(TokenKind::Ident, parse_identifier);
    parser.nud(TokenKind::Int, parse_integer_literal);
    parser.nud(TokenKind::Float, parse_float_literal);
    parser.nud(TokenKind::String, parse_string_literal);
    parser.nud(TokenKind::True, parse_boolean);
    parser.nud(TokenKind::False, parse_boolean);
    parser.nud(TokenKind::Null, parse_null_literal);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::LParen, parse_grouping_expr);
    parser.nud(TokenKind::LBracket, parse_array_literal);
    parser.nud(TokenKind::LBrace, parse_hash_literal);

    // Control flow as expressions
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::For, parse_for_expr);
    parser.nud(TokenKind::While, parse_while_expr);
    parser.nud(TokenKind::Function, parse_function_literal);
    parser.nud(TokenKind::Try, parse_try_catch_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
