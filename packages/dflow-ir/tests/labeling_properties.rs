//! Property-based tests for program point labeling
//!
//! Invariants that hold for every tree:
//! - Pre-order: a node visited earlier has a smaller label
//! - Dense: labels are exactly 1..=n
//! - Determinism: relabeling yields the same labels

mod common;

use common::*;
use dflow_ir::features::ast::{Block, Expr, StmtKind};
use dflow_ir::features::labeling::assign_depths;
use dflow_ir::{assign_labels, Statement};
use proptest::prelude::*;

/// Labels of every statement and expression node, in pre-order
fn preorder_labels(block: &Block) -> Vec<u32> {
    let mut out = Vec::new();
    walk_block(block, &mut out);
    out
}

fn walk_block(block: &Block, out: &mut Vec<u32>) {
    for stmt in &block.statements {
        walk_statement(stmt, out);
    }
}

fn walk_statement(stmt: &Statement, out: &mut Vec<u32>) {
    out.push(stmt.label().value());
    match &stmt.kind {
        StmtKind::Skip => {}
        StmtKind::Expression { expr } => walk_expr(expr, out),
        StmtKind::If(s) => {
            walk_block(&s.condition, out);
            walk_block(&s.then_block, out);
            walk_block(&s.else_block, out);
        }
        StmtKind::While(s) => {
            walk_block(&s.condition, out);
            walk_block(&s.body, out);
        }
    }
}

fn walk_expr(expr: &Expr, out: &mut Vec<u32>) {
    out.push(expr.meta().label.value());
    match expr {
        Expr::Identifier(_) | Expr::Int(_) | Expr::Float(_) | Expr::Bool(_) => {}
        Expr::Assignment(a) => {
            out.push(a.target.meta.label.value());
            walk_expr(&a.value, out);
        }
        Expr::Arithmetic(e) => {
            walk_expr(&e.left, out);
            walk_expr(&e.right, out);
        }
        Expr::Logical(e) => {
            walk_expr(&e.left, out);
            walk_expr(&e.right, out);
        }
    }
}

#[test]
fn test_branch_join_labels() {
    let mut program = branch_join();
    let last = assign_labels(&mut program);

    let statement_labels: Vec<u32> = program_points(&program)
        .iter()
        .map(|s| s.label().value())
        .collect();
    assert_eq!(statement_labels, vec![1, 5, 10, 14, 18]);
    assert_eq!(last.value(), 21);
}

#[test]
fn test_depths_follow_nesting() {
    let mut program = loop_in_branch();
    assign_labels(&mut program);
    assign_depths(&mut program);

    let depths: Vec<u32> = program_points(&program)
        .iter()
        .map(|s| s.meta.depth)
        .collect();
    // i = 0, s = 0, if, while, s = s + i, i = i + 1, skip, s
    assert_eq!(depths, vec![0, 0, 0, 1, 2, 2, 1, 0]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_labels_strictly_increase_in_preorder(program in arb_program()) {
        let mut program = program;
        assign_labels(&mut program);

        let labels = preorder_labels(&program);
        for pair in labels.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?}", labels);
        }
    }

    #[test]
    fn prop_labels_are_dense(program in arb_program()) {
        let mut program = program;
        let last = assign_labels(&mut program);

        let labels = preorder_labels(&program);
        let expected: Vec<u32> = (1..=last.value()).collect();
        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn prop_labeling_is_deterministic(program in arb_program()) {
        let mut first = program.clone();
        let mut second = program;
        assign_labels(&mut first);
        assign_labels(&mut second);
        // Relabeling an already labeled tree changes nothing either
        assign_labels(&mut second);

        prop_assert_eq!(preorder_labels(&first), preorder_labels(&second));
    }

    #[test]
    fn prop_block_flags_mark_first_and_last(program in arb_program()) {
        let mut program = program;
        assign_labels(&mut program);

        if let (Some(first), Some(last)) = (program.statements.first(), program.statements.last()) {
            prop_assert!(first.is_entry);
            prop_assert!(last.is_exit);
        }
        for stmt in program.statements.iter().skip(1) {
            prop_assert!(!stmt.is_entry);
        }
    }
}
