use crate::{
    ast::statements::{BlockStmt, Stmt},
    errors::errors::DiagnosticKind,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token kind: registered statement handlers
/// first, otherwise an expression statement.
///
/// Semicolons never terminate a statement mandatorily; every form consumes
/// one trailing `;` when present.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.eat(TokenKind::Semicolon);

    Some(Stmt::Expression { expr })
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.advance().clone();

    let name = parser.expect_error(
        TokenKind::Ident,
        Some(DiagnosticKind::MalformedStatement {
            message: String::from("expected identifier after `let`"),
        }),
    )?;

    parser.expect(TokenKind::Assign)?;

    // A failed value still yields a let statement; the hole is the
    // recovery case the node's rendering accounts for.
    let value = parse_expr(parser, BindingPower::Default);
    parser.eat(TokenKind::Semicolon);

    Some(Stmt::Let {
        token,
        name: name.value,
        value,
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.advance().clone();

    // A return value is parsed exactly when the current token can start an
    // expression; `return;`, `return }` and a return at end of input all
    // yield a bare return.
    let value = if parser.has_prefix_rule(parser.current_token_kind()) {
        parse_expr(parser, BindingPower::Default)
    } else {
        None
    };
    parser.eat(TokenKind::Semicolon);

    Some(Stmt::Return { token, value })
}

/// Consumes statements until a closing brace or end of input. Reused by
/// if/for/while/function/try/catch bodies.
pub fn parse_block_stmt(parser: &mut Parser) -> Option<BlockStmt> {
    let token = parser.expect(TokenKind::LBrace)?;

    let mut statements = vec![];
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::RBrace {
        match parse_stmt(parser) {
            Some(stmt) => statements.push(stmt),
            None => synchronize(parser),
        }
    }

    // Records an UnexpectedToken diagnostic when the block ran into Eof;
    // the partial block is still returned.
    parser.expect(TokenKind::RBrace);

    Some(BlockStmt { token, statements })
}

/// Repositions the cursor after a failed statement: tokens are skipped
/// until a statement terminator (`;`, consumed), a block terminator (`}`,
/// left for the enclosing block), or a token that starts a new statement
/// (`let`, `return`). This bounds the cascade to one diagnostic per
/// genuine fault in the common case.
pub fn synchronize(parser: &mut Parser) {
    while parser.has_tokens() {
        match parser.current_token_kind() {
            TokenKind::Semicolon => {
                parser.advance();
                return;
            }
            TokenKind::RBrace | TokenKind::Let | TokenKind::Return => return,
            _ => {
                parser.advance();
            }
        }
    }
}
