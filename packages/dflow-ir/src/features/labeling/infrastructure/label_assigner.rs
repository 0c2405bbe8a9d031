/*
 * Label Assigner
 *
 * Single pre-order walk handing out program point labels:
 * - A statement takes the next label, then its expression subtree
 * - `if`/`while` take their label before their condition and blocks
 * - A block records the counter on entry (it takes no label of its own)
 *   and marks its first/last statements
 *
 * Deterministic: the same tree shape always yields the same labels.
 */

use tracing::debug;

use crate::features::ast::domain::{Block, Expr, Statement, StmtKind};
use crate::shared::models::{Label, LabelCounter};

/// Label every node of `program`; returns the last label handed out
pub fn assign_labels(program: &mut Block) -> Label {
    let mut counter = LabelCounter::new();
    label_block(program, &mut counter);
    debug!("assigned {} labels", counter.current());
    counter.current()
}

fn label_block(block: &mut Block, counter: &mut LabelCounter) {
    block.meta.label = counter.current();

    let last = block.statements.len().saturating_sub(1);
    for (i, stmt) in block.statements.iter_mut().enumerate() {
        stmt.is_entry = i == 0;
        stmt.is_exit = i == last;
        label_statement(stmt, counter);
    }
}

fn label_statement(stmt: &mut Statement, counter: &mut LabelCounter) {
    stmt.meta.label = counter.next_label();

    match &mut stmt.kind {
        StmtKind::Skip => {}
        StmtKind::Expression { expr } => label_expr(expr, counter),
        StmtKind::If(s) => {
            label_block(&mut s.condition, counter);
            label_block(&mut s.then_block, counter);
            label_block(&mut s.else_block, counter);
        }
        StmtKind::While(s) => {
            label_block(&mut s.condition, counter);
            label_block(&mut s.body, counter);
        }
    }
}

fn label_expr(expr: &mut Expr, counter: &mut LabelCounter) {
    expr.meta_mut().label = counter.next_label();

    match expr {
        Expr::Identifier(_) | Expr::Int(_) | Expr::Float(_) | Expr::Bool(_) => {}
        Expr::Assignment(a) => {
            a.target.meta.label = counter.next_label();
            label_expr(&mut a.value, counter);
        }
        Expr::Arithmetic(e) => {
            label_expr(&mut e.left, counter);
            label_expr(&mut e.right, counter);
        }
        Expr::Logical(e) => {
            label_expr(&mut e.left, counter);
            label_expr(&mut e.right, counter);
        }
    }
}
