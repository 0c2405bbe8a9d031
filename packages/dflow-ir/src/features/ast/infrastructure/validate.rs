//! Structural validation
//!
//! The passes assume a well-formed tree. Checked here, before any pass
//! mutates it:
//! - `if`/`while` condition blocks are non-empty
//! - condition blocks hold expression statements only

use crate::errors::{DflowError, Result};
use crate::features::ast::domain::{Block, StmtKind};

pub fn validate_program(program: &Block) -> Result<()> {
    validate_block(program, "program")
}

fn validate_block(block: &Block, path: &str) -> Result<()> {
    for (i, stmt) in block.statements.iter().enumerate() {
        let here = format!("{}/{}[{}]", path, stmt.kind_name(), i);
        match &stmt.kind {
            StmtKind::Skip | StmtKind::Expression { .. } => {}
            StmtKind::If(s) => {
                validate_condition(&s.condition, &here)?;
                validate_block(&s.then_block, &format!("{}/then", here))?;
                validate_block(&s.else_block, &format!("{}/else", here))?;
            }
            StmtKind::While(s) => {
                validate_condition(&s.condition, &here)?;
                validate_block(&s.body, &format!("{}/body", here))?;
            }
        }
    }
    Ok(())
}

fn validate_condition(condition: &Block, path: &str) -> Result<()> {
    if condition.is_empty() {
        return Err(DflowError::malformed(path, "condition block is empty"));
    }
    if let Some(stmt) = condition
        .statements
        .iter()
        .find(|s| !matches!(s.kind, StmtKind::Expression { .. }))
    {
        return Err(DflowError::malformed(
            path,
            format!("condition holds a {} statement", stmt.kind_name()),
        ));
    }
    Ok(())
}
