//! Statement and block nodes

use serde::{Deserialize, Serialize};

use super::expr::Expr;
use super::meta::NodeMeta;
use crate::features::flow_graph::ports::NodeHandle;
use crate::shared::models::Label;

/// `if condition then ... else ... fi`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Block,
    #[serde(rename = "then")]
    pub then_block: Block,
    #[serde(rename = "else", default)]
    pub else_block: Block,
}

/// `while condition do ... od`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhileStmt {
    pub condition: Block,
    pub body: Block,
}

/// Statement variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "stmt", rename_all = "snake_case")]
pub enum StmtKind {
    Skip,
    Expression { expr: Expr },
    If(IfStmt),
    While(WhileStmt),
}

/// A statement: one program point, one CFG node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StmtKind", into = "StmtKind")]
pub struct Statement {
    pub kind: StmtKind,
    pub meta: NodeMeta,
    /// Handle of this statement's CFG node; set by `cfg_prep`
    pub cfg_node: Option<NodeHandle>,
    /// First statement of its block
    pub is_entry: bool,
    /// Last statement of its block
    pub is_exit: bool,
}

impl From<StmtKind> for Statement {
    fn from(kind: StmtKind) -> Self {
        Statement::new(kind)
    }
}

impl From<Statement> for StmtKind {
    fn from(stmt: Statement) -> Self {
        stmt.kind
    }
}

impl Statement {
    pub fn new(kind: StmtKind) -> Self {
        Self {
            kind,
            meta: NodeMeta::default(),
            cfg_node: None,
            is_entry: false,
            is_exit: false,
        }
    }

    pub fn skip() -> Self {
        Statement::new(StmtKind::Skip)
    }

    pub fn expr(expr: Expr) -> Self {
        Statement::new(StmtKind::Expression { expr })
    }

    /// `target = value;`
    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Statement::expr(Expr::assign(target, value))
    }

    pub fn if_else(condition: Expr, then_block: Block, else_block: Block) -> Self {
        Statement::new(StmtKind::If(IfStmt {
            condition: Block::condition(condition),
            then_block,
            else_block,
        }))
    }

    pub fn while_loop(condition: Expr, body: Block) -> Self {
        Statement::new(StmtKind::While(WhileStmt {
            condition: Block::condition(condition),
            body,
        }))
    }

    pub fn label(&self) -> Label {
        self.meta.label
    }

    /// Name of the statement variant, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            StmtKind::Skip => "skip",
            StmtKind::Expression { .. } => "expression",
            StmtKind::If(_) => "if",
            StmtKind::While(_) => "while",
        }
    }
}

/// Ordered statement sequence
///
/// Not a CFG node itself. Its IN set is its first statement's IN and its
/// OUT set its last statement's OUT (or IN, when empty).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block {
    pub statements: Vec<Statement>,
    #[serde(skip)]
    pub meta: NodeMeta,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            meta: NodeMeta::default(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Condition block holding a single expression statement
    pub fn condition(expr: Expr) -> Self {
        Self::new(vec![Statement::expr(expr)])
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Decode a program from its JSON form (an array of statements)
    pub fn from_json(json: &str) -> crate::errors::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<Statement> for Block {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Block::new(iter.into_iter().collect())
    }
}
