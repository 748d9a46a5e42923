use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::expressions::Expr;

/// A statement node.
///
/// The set is closed so every consumer matches exhaustively; adding a
/// variant forces a compile-time check across the codebase.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let <name> = <value>;` — the value is absent only when error
    /// recovery could not produce one.
    Let {
        token: Token,
        name: String,
        value: Option<Expr>,
    },
    /// `return [<value>];`
    Return { token: Token, value: Option<Expr> },
    /// A statement-level expression; renders without a trailing `;`.
    Expression { expr: Expr },
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let { token, name, value } => {
                write!(f, "{} {} = ", token.value, name)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Stmt::Return { token, value } => {
                write!(f, "{} ", token.value)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Stmt::Expression { expr } => write!(f, "{}", expr),
        }
    }
}

/// The body of an if/for/while/function/try/catch form.
///
/// Rendering concatenates the statements' canonical forms with no
/// separator; the surrounding construct supplies any padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
