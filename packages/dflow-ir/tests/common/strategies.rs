//! Proptest strategies for random programs

use dflow_ir::features::ast::{ArithOp, LogicalOp};
use dflow_ir::{Block, Expr, Statement};
use proptest::prelude::*;

pub fn arb_var() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "i", "x", "y"]).prop_map(String::from)
}

pub fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        arb_var().prop_map(Expr::ident),
        (-100i64..100).prop_map(Expr::int),
        any::<bool>().prop_map(Expr::boolean),
    ];
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::arith(l, ArithOp::Add, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::logical(l, LogicalOp::Lt, r)),
            (arb_var(), inner).prop_map(|(v, e)| Expr::assign(v, e)),
        ]
    })
}

pub fn arb_statement() -> impl Strategy<Value = Statement> {
    let leaf = prop_oneof![
        Just(Statement::skip()),
        arb_expr().prop_map(Statement::expr),
        (arb_var(), arb_expr()).prop_map(|(v, e)| Statement::assign(v, e)),
    ];
    leaf.prop_recursive(3, 24, 3, |inner| {
        let block = prop::collection::vec(inner, 0..3).prop_map(Block::new);
        prop_oneof![
            (arb_expr(), block.clone(), block.clone())
                .prop_map(|(c, t, e)| Statement::if_else(c, t, e)),
            (arb_expr(), block).prop_map(|(c, b)| Statement::while_loop(c, b)),
        ]
    })
}

pub fn arb_program() -> impl Strategy<Value = Block> {
    prop::collection::vec(arb_statement(), 0..5).prop_map(Block::new)
}
