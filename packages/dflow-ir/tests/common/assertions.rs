//! Custom assertions for reaching-definitions results

use dflow_ir::features::ast::{Block, StmtKind};
use dflow_ir::{Label, ReachingSet, Statement};

/// Labels of `variable` in `set`, ascending
pub fn labels(set: &ReachingSet, variable: &str) -> Vec<u32> {
    set.labels_of(variable)
        .map(|labels| labels.iter().map(|l| l.value()).collect())
        .unwrap_or_default()
}

/// Assert that exactly `expected` definitions of `variable` reach
pub fn assert_reaching(set: &ReachingSet, variable: &str, expected: &[Label]) {
    let mut expected: Vec<u32> = expected.iter().map(|l| l.value()).collect();
    expected.sort_unstable();
    assert_eq!(
        labels(set, variable),
        expected,
        "definitions of {variable} in {set}"
    );
}

/// Statements of a block, then/else/body blocks flattened in program order
pub fn program_points(block: &Block) -> Vec<&Statement> {
    let mut out = Vec::new();
    collect(block, &mut out);
    out
}

fn collect<'a>(block: &'a Block, out: &mut Vec<&'a Statement>) {
    for stmt in &block.statements {
        out.push(stmt);
        match &stmt.kind {
            StmtKind::Skip | StmtKind::Expression { .. } => {}
            StmtKind::If(s) => {
                collect(&s.then_block, out);
                collect(&s.else_block, out);
            }
            StmtKind::While(s) => collect(&s.body, out),
        }
    }
}
