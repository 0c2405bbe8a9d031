//! Nesting depth assignment
//!
//! Presentation only. Top-level statements sit at depth 0; statements of a
//! branch or loop body sit one deeper than the owning statement; condition
//! statements share the owning statement's depth.

use crate::features::ast::domain::{Block, StmtKind};

pub fn assign_depths(program: &mut Block) {
    depth_block(program, 0);
}

fn depth_block(block: &mut Block, depth: u32) {
    block.meta.depth = depth;
    for stmt in &mut block.statements {
        stmt.meta.depth = depth;
        match &mut stmt.kind {
            StmtKind::Skip | StmtKind::Expression { .. } => {}
            StmtKind::If(s) => {
                depth_block(&mut s.condition, depth);
                depth_block(&mut s.then_block, depth + 1);
                depth_block(&mut s.else_block, depth + 1);
            }
            StmtKind::While(s) => {
                depth_block(&mut s.condition, depth);
                depth_block(&mut s.body, depth + 1);
            }
        }
    }
}
