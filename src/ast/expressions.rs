use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::statements::BlockStmt;

/// An expression node.
///
/// Every variant retains the token that introduced it: literals render
/// their own literal text, and the parser points diagnostics at node
/// positions. The set is closed; consumers match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier {
        token: Token,
        value: String,
    },
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    FloatLiteral {
        token: Token,
        value: f64,
    },
    StringLiteral {
        token: Token,
        value: String,
    },
    Boolean {
        token: Token,
        value: bool,
    },
    NullLiteral {
        token: Token,
    },
    /// `!x`, `-x`
    Prefix {
        token: Token,
        operator: String,
        right: Box<Expr>,
    },
    /// Arithmetic, comparison, and equality operators.
    Infix {
        token: Token,
        left: Box<Expr>,
        operator: String,
        right: Box<Expr>,
    },
    /// `<cond> ? <true> : <false>`
    Ternary {
        token: Token,
        condition: Box<Expr>,
        true_branch: Box<Expr>,
        false_branch: Box<Expr>,
    },
    /// `<target> = <value>` where target is an identifier or index form.
    Assignment {
        token: Token,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// Expression-valued `if`.
    If {
        token: Token,
        condition: Box<Expr>,
        consequence: BlockStmt,
        alternative: Option<BlockStmt>,
    },
    /// `for <binder> in <iterable> { ... }` — iteration semantics belong
    /// to the evaluator; the parser only records the parts.
    For {
        token: Token,
        binder: String,
        iterable: Box<Expr>,
        body: BlockStmt,
    },
    While {
        token: Token,
        condition: Box<Expr>,
        body: BlockStmt,
    },
    /// `try { ... } catch { ... }` — the catch block takes no parameter.
    TryCatch {
        token: Token,
        try_block: BlockStmt,
        catch_block: BlockStmt,
    },
    FunctionLiteral {
        token: Token,
        parameters: Vec<String>,
        body: BlockStmt,
    },
    Call {
        token: Token,
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    ArrayLiteral {
        token: Token,
        elements: Vec<Expr>,
    },
    Index {
        token: Token,
        left: Box<Expr>,
        index: Box<Expr>,
    },
    /// Pairs are unique by their keys' rendered form; rendering sorts the
    /// `key:value` texts so output never depends on source order.
    HashLiteral {
        token: Token,
        pairs: Vec<(Expr, Expr)>,
    },
    /// Type annotation/cast marker. Part of the closed node set for
    /// downstream tooling; no grammar production creates it.
    Type {
        token: Token,
        name: String,
    },
}

impl Expr {
    /// The token that introduced this expression.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Identifier { token, .. } => token,
            Expr::IntegerLiteral { token, .. } => token,
            Expr::FloatLiteral { token, .. } => token,
            Expr::StringLiteral { token, .. } => token,
            Expr::Boolean { token, .. } => token,
            Expr::NullLiteral { token } => token,
            Expr::Prefix { token, .. } => token,
            Expr::Infix { token, .. } => token,
            Expr::Ternary { token, .. } => token,
            Expr::Assignment { token, .. } => token,
            Expr::If { token, .. } => token,
            Expr::For { token, .. } => token,
            Expr::While { token, .. } => token,
            Expr::TryCatch { token, .. } => token,
            Expr::FunctionLiteral { token, .. } => token,
            Expr::Call { token, .. } => token,
            Expr::ArrayLiteral { token, .. } => token,
            Expr::Index { token, .. } => token,
            Expr::HashLiteral { token, .. } => token,
            Expr::Type { token, .. } => token,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier { value, .. } => write!(f, "{}", value),
            Expr::IntegerLiteral { token, .. } => write!(f, "{}", token.value),
            Expr::FloatLiteral { token, .. } => write!(f, "{}", token.value),
            Expr::StringLiteral { token, .. } => write!(f, "{}", token.value),
            Expr::Boolean { token, .. } => write!(f, "{}", token.value),
            Expr::NullLiteral { .. } => write!(f, "null"),
            Expr::Prefix { operator, right, .. } => write!(f, "({}{})", operator, right),
            Expr::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
            Expr::Ternary {
                condition,
                true_branch,
                false_branch,
                ..
            } => write!(f, "({} ? {} : {})", condition, true_branch, false_branch),
            Expr::Assignment { target, value, .. } => write!(f, "{} = {}", target, value),
            Expr::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                // An empty consequence renders as `{  }`: the block's own
                // text is empty, concatenated between `{ ` and ` }`.
                write!(f, "if {} {{ {} }}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {} }}", alternative)?;
                }
                Ok(())
            }
            Expr::For {
                binder,
                iterable,
                body,
                ..
            } => {
                if body.statements.is_empty() {
                    write!(f, "for {} in {} {{}}", binder, iterable)
                } else {
                    write!(f, "for {} in {} {{ {}; }}", binder, iterable, body)
                }
            }
            Expr::While { condition, body, .. } => write!(f, "while {} {{ {} }}", condition, body),
            Expr::TryCatch {
                try_block,
                catch_block,
                ..
            } => write!(f, "try {{{}}} catch {{{}}}", try_block, catch_block),
            Expr::FunctionLiteral {
                token,
                parameters,
                body,
            } => write!(f, "{}({}) {{{}}}", token.value, parameters.join(", "), body),
            Expr::Call {
                callee, arguments, ..
            } => {
                let args: Vec<String> = arguments.iter().map(|arg| arg.to_string()).collect();
                write!(f, "{}({})", callee, args.join(", "))
            }
            Expr::ArrayLiteral { elements, .. } => {
                let elements: Vec<String> = elements.iter().map(|el| el.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Expr::Index { left, index, .. } => write!(f, "({}[{}])", left, index),
            Expr::HashLiteral { pairs, .. } => {
                let mut rendered: Vec<String> = pairs
                    .iter()
                    .map(|(key, value)| format!("{}:{}", key, value))
                    .collect();
                rendered.sort();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Expr::Type { name, .. } => write!(f, "{}", name),
        }
    }
}
