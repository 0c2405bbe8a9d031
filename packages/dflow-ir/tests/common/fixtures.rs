//! Example programs

use dflow_ir::features::ast::{ArithOp, LogicalOp};
use dflow_ir::{Block, Expr, Statement};

/// `x = 1; if (x > 0) { y = 2 } else { y = 3 }; z = y;`
pub fn branch_join() -> Block {
    Block::new(vec![
        Statement::assign("x", Expr::int(1)),
        Statement::if_else(
            Expr::logical(Expr::ident("x"), LogicalOp::Gt, Expr::int(0)),
            Block::new(vec![Statement::assign("y", Expr::int(2))]),
            Block::new(vec![Statement::assign("y", Expr::int(3))]),
        ),
        Statement::assign("z", Expr::ident("y")),
    ])
}

/// `x = 0; while (x < 10) { x = x + 1 };`
pub fn counting_loop() -> Block {
    Block::new(vec![
        Statement::assign("x", Expr::int(0)),
        Statement::while_loop(
            Expr::logical(Expr::ident("x"), LogicalOp::Lt, Expr::int(10)),
            Block::new(vec![Statement::assign(
                "x",
                Expr::arith(Expr::ident("x"), ArithOp::Add, Expr::int(1)),
            )]),
        ),
    ])
}

/// Loop nested in a branch, redefining a variable the branch also defines
pub fn loop_in_branch() -> Block {
    Block::new(vec![
        Statement::assign("i", Expr::int(0)),
        Statement::assign("s", Expr::int(0)),
        Statement::if_else(
            Expr::logical(Expr::ident("s"), LogicalOp::Eq, Expr::int(0)),
            Block::new(vec![Statement::while_loop(
                Expr::logical(Expr::ident("i"), LogicalOp::Lt, Expr::int(3)),
                Block::new(vec![
                    Statement::assign(
                        "s",
                        Expr::arith(Expr::ident("s"), ArithOp::Add, Expr::ident("i")),
                    ),
                    Statement::assign(
                        "i",
                        Expr::arith(Expr::ident("i"), ArithOp::Add, Expr::int(1)),
                    ),
                ]),
            )]),
            Block::new(vec![Statement::skip()]),
        ),
        Statement::expr(Expr::ident("s")),
    ])
}

/// JSON form of `branch_join`
pub const BRANCH_JOIN_JSON: &str = include_str!("../data/branch_join.json");
