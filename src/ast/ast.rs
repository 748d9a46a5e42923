use std::fmt::Display;

use super::statements::Stmt;

/// The root node of every tree the parser produces.
///
/// An empty statement sequence is legal. Rendering joins the statements'
/// canonical forms with a single space; downstream tooling compares against
/// that text byte-for-byte.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
