/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the Program root node
/// - expressions: the Expr node set
/// - statements: the Stmt node set and block bodies
///
/// Every node's textual rendering is fully determined by its fields; the
/// rendered forms are a stable canonical contract.
pub mod ast;
pub mod expressions;
pub mod statements;
