//! AST domain model
//!
//! Closed sum types; every node owns its children exclusively.

mod expr;
mod meta;
mod stmt;

pub use expr::{
    ArithOp, ArithmeticExpr, AssignmentExpr, BoolLiteral, Expr, FloatLiteral, Identifier,
    IntLiteral, LogicalExpr, LogicalOp,
};
pub use meta::NodeMeta;
pub use stmt::{Block, IfStmt, Statement, StmtKind, WhileStmt};
