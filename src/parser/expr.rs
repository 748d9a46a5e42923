use crate::{
    ast::expressions::Expr,
    errors::errors::DiagnosticKind,
    lexer::tokens::TokenKind,
    parser::stmt::parse_block_stmt,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence-climbing core: builds an initial expression with the current
/// token's NUD handler, then folds in infix operators while the next
/// token's binding power is strictly greater than `bp`.
///
/// Returns None when no expression could be built; the diagnostic has
/// already been recorded and the caller treats the hole as recoverable.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    if !parser.enter_nested() {
        return None;
    }
    let result = parse_expr_levels(parser, bp);
    parser.exit_nested();
    result
}

fn parse_expr_levels(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    let token_kind = parser.current_token_kind();
    let nud_fn = parser.get_nud_lookup().get(&token_kind).copied();
    let Some(nud_fn) = nud_fn else {
        let token = parser.current_token().clone();
        parser.report_at(
            DiagnosticKind::MissingPrefixRule {
                kind: token.kind,
                literal: token.value,
            },
            token.position,
        );
        return None;
    };

    let mut left = nud_fn(parser)?;

    loop {
        let token_kind = parser.current_token_kind();
        let power = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);
        if power <= bp {
            break;
        }

        let led_fn = parser.get_led_lookup().get(&token_kind).copied();
        let Some(led_fn) = led_fn else {
            break;
        };

        left = led_fn(parser, left, power)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();
    Some(Expr::Identifier {
        value: token.value.clone(),
        token,
    })
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();
    match token.value.parse::<i64>() {
        Ok(value) => Some(Expr::IntegerLiteral { token, value }),
        Err(_) => {
            parser.report_at(
                DiagnosticKind::MalformedNumericLiteral {
                    literal: token.value.clone(),
                    target: "an integer",
                },
                token.position,
            );
            None
        }
    }
}

pub fn parse_float_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();
    match token.value.parse::<f64>() {
        Ok(value) => Some(Expr::FloatLiteral { token, value }),
        Err(_) => {
            parser.report_at(
                DiagnosticKind::MalformedNumericLiteral {
                    literal: token.value.clone(),
                    target: "a float",
                },
                token.position,
            );
            None
        }
    }
}

pub fn parse_string_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();
    Some(Expr::StringLiteral {
        value: token.value.clone(),
        token,
    })
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();
    Some(Expr::Boolean {
        value: token.kind == TokenKind::True,
        token,
    })
}

pub fn parse_null_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();
    Some(Expr::NullLiteral { token })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Some(Expr::Prefix {
        operator: token.value.clone(),
        token,
        right: Box::new(right),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RParen)?;

    Some(expr)
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Option<Expr> {
    let token = parser.advance().clone();
    // Recursing at the operator's own power keeps these left-associative.
    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix {
        operator: token.value.clone(),
        token,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parse_ternary_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Option<Expr> {
    let token = parser.advance().clone();

    let true_branch = parse_expr(parser, BindingPower::Assignment)?;
    parser.expect(TokenKind::Colon)?;
    // One level below `?` makes chained ternaries right-associative.
    let false_branch = parse_expr(parser, BindingPower::Default)?;

    Some(Expr::Ternary {
        token,
        condition: Box::new(left),
        true_branch: Box::new(true_branch),
        false_branch: Box::new(false_branch),
    })
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Option<Expr> {
    let token = parser.advance().clone();

    if !matches!(left, Expr::Identifier { .. } | Expr::Index { .. }) {
        let position = left.token().position;
        parser.report_at(
            DiagnosticKind::MalformedStatement {
                message: format!("cannot assign to `{}`", left),
            },
            position,
        );
        // Build the node best-effort anyway so the tree stays traversable.
    }

    let value = parse_expr(parser, BindingPower::Default)?;

    Some(Expr::Assignment {
        token,
        target: Box::new(left),
        value: Box::new(value),
    })
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Option<Expr> {
    let token = parser.advance().clone();
    let arguments = parse_expr_list(parser, TokenKind::RParen)?;

    Some(Expr::Call {
        token,
        callee: Box::new(left),
        arguments,
    })
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Option<Expr> {
    let token = parser.advance().clone();
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RBracket)?;

    Some(Expr::Index {
        token,
        left: Box::new(left),
        index: Box::new(index),
    })
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.eat(TokenKind::Else) {
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Some(Expr::If {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    })
}

pub fn parse_for_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();

    let binder = parser.expect_error(
        TokenKind::Ident,
        Some(DiagnosticKind::MalformedStatement {
            message: String::from("expected loop variable after `for`"),
        }),
    )?;
    parser.expect(TokenKind::In)?;

    let iterable = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block_stmt(parser)?;

    Some(Expr::For {
        token,
        binder: binder.value,
        iterable: Box::new(iterable),
        body,
    })
}

pub fn parse_while_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block_stmt(parser)?;

    Some(Expr::While {
        token,
        condition: Box::new(condition),
        body,
    })
}

pub fn parse_try_catch_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();

    let try_block = parse_block_stmt(parser)?;
    parser.expect(TokenKind::Catch)?;
    let catch_block = parse_block_stmt(parser)?;

    Some(Expr::TryCatch {
        token,
        try_block,
        catch_block,
    })
}

pub fn parse_function_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();

    parser.expect(TokenKind::LParen)?;

    let mut parameters = vec![];
    if !parser.eat(TokenKind::RParen) {
        parameters.push(parser.expect(TokenKind::Ident)?.value);
        while parser.eat(TokenKind::Comma) {
            parameters.push(parser.expect(TokenKind::Ident)?.value);
        }
        parser.expect(TokenKind::RParen)?;
    }

    let body = parse_block_stmt(parser)?;

    Some(Expr::FunctionLiteral {
        token,
        parameters,
        body,
    })
}

pub fn parse_array_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();
    let elements = parse_expr_list(parser, TokenKind::RBracket)?;

    Some(Expr::ArrayLiteral { token, elements })
}

pub fn parse_hash_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance().clone();

    let mut pairs: Vec<(Expr, Expr)> = vec![];

    while parser.has_tokens() && parser.current_token_kind() != TokenKind::RBrace {
        let key = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Colon)?;
        let value = parse_expr(parser, BindingPower::Default)?;

        insert_pair(&mut pairs, key, value);

        if parser.current_token_kind() != TokenKind::RBrace {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::RBrace)?;

    Some(Expr::HashLiteral { token, pairs })
}

/// Keys are unique by their rendered form; a duplicate replaces the
/// earlier pair's value.
fn insert_pair(pairs: &mut Vec<(Expr, Expr)>, key: Expr, value: Expr) {
    let rendered = key.to_string();
    if let Some(existing) = pairs.iter_mut().find(|(k, _)| k.to_string() == rendered) {
        existing.1 = value;
    } else {
        pairs.push((key, value));
    }
}

/// Comma-separated expressions up to (and including) the closing `end`
/// token. An empty list is legal; a trailing comma is not.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Option<Vec<Expr>> {
    let mut items = vec![];

    if parser.eat(end) {
        return Some(items);
    }

    items.push(parse_expr(parser, BindingPower::Default)?);
    while parser.eat(TokenKind::Comma) {
        items.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect(end)?;
    Some(items)
}
