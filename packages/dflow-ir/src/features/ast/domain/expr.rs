//! Expression nodes

use serde::{Deserialize, Serialize};

use super::meta::NodeMeta;

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
}

impl ArithOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
        }
    }
}

/// Comparison or boolean connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

impl LogicalOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOp::Lt => "<",
            LogicalOp::Le => "<=",
            LogicalOp::Gt => ">",
            LogicalOp::Ge => ">=",
            LogicalOp::Eq => "==",
            LogicalOp::Ne => "!=",
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(skip)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntLiteral {
    pub value: i64,
    #[serde(skip)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatLiteral {
    pub value: f64,
    #[serde(skip)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoolLiteral {
    pub value: bool,
    #[serde(skip)]
    pub meta: NodeMeta,
}

/// `target = value`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentExpr {
    pub target: Identifier,
    pub value: Box<Expr>,
    #[serde(skip)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArithmeticExpr {
    pub left: Box<Expr>,
    pub op: ArithOp,
    pub right: Box<Expr>,
    #[serde(skip)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub op: LogicalOp,
    pub right: Box<Expr>,
    #[serde(skip)]
    pub meta: NodeMeta,
}

/// Expression node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Identifier(Identifier),
    Int(IntLiteral),
    Float(FloatLiteral),
    Bool(BoolLiteral),
    Assignment(AssignmentExpr),
    Arithmetic(ArithmeticExpr),
    Logical(LogicalExpr),
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: NodeMeta::default(),
        }
    }
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(Identifier::new(name))
    }

    pub fn int(value: i64) -> Self {
        Expr::Int(IntLiteral {
            value,
            meta: NodeMeta::default(),
        })
    }

    pub fn float(value: f64) -> Self {
        Expr::Float(FloatLiteral {
            value,
            meta: NodeMeta::default(),
        })
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Bool(BoolLiteral {
            value,
            meta: NodeMeta::default(),
        })
    }

    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Expr::Assignment(AssignmentExpr {
            target: Identifier::new(target),
            value: Box::new(value),
            meta: NodeMeta::default(),
        })
    }

    pub fn arith(left: Expr, op: ArithOp, right: Expr) -> Self {
        Expr::Arithmetic(ArithmeticExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
            meta: NodeMeta::default(),
        })
    }

    pub fn logical(left: Expr, op: LogicalOp, right: Expr) -> Self {
        Expr::Logical(LogicalExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
            meta: NodeMeta::default(),
        })
    }

    pub fn meta(&self) -> &NodeMeta {
        match self {
            Expr::Identifier(e) => &e.meta,
            Expr::Int(e) => &e.meta,
            Expr::Float(e) => &e.meta,
            Expr::Bool(e) => &e.meta,
            Expr::Assignment(e) => &e.meta,
            Expr::Arithmetic(e) => &e.meta,
            Expr::Logical(e) => &e.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut NodeMeta {
        match self {
            Expr::Identifier(e) => &mut e.meta,
            Expr::Int(e) => &mut e.meta,
            Expr::Float(e) => &mut e.meta,
            Expr::Bool(e) => &mut e.meta,
            Expr::Assignment(e) => &mut e.meta,
            Expr::Arithmetic(e) => &mut e.meta,
            Expr::Logical(e) => &mut e.meta,
        }
    }
}
