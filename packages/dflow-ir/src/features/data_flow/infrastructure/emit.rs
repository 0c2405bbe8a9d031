//! Reaching-definitions listing
//!
//! One line per program point, in program order:
//!
//! ```text
//! {} [x = 1] -- 1 {x: {1}}
//! {x: {1}} [if x > 0] -- 5 {x: {1}, y: {10, 14}}
//!   {x: {1}} [y = 2] -- 10 {x: {1}, y: {10}}
//! ```
//!
//! Nested statements are indented by their depth. Condition statements share
//! the point of their `if`/`while` and get no line of their own.

use std::fmt;

use crate::features::ast::domain::{Block, Statement, StmtKind};
use crate::features::ast::infrastructure::point_text;

/// Listing of the converged entry/exit sets, written through `Display`
pub struct RdListing<'a> {
    program: &'a Block,
    indent: usize,
}

impl<'a> RdListing<'a> {
    pub fn new(program: &'a Block, indent: usize) -> Self {
        Self { program, indent }
    }

    fn write_block(&self, f: &mut fmt::Formatter<'_>, block: &Block) -> fmt::Result {
        for stmt in &block.statements {
            self.write_statement(f, stmt)?;
        }
        Ok(())
    }

    fn write_statement(&self, f: &mut fmt::Formatter<'_>, stmt: &Statement) -> fmt::Result {
        let pad = " ".repeat(stmt.meta.depth as usize * self.indent);
        writeln!(
            f,
            "{}{} {} {}",
            pad,
            stmt.meta.entry,
            point_text(stmt),
            stmt.meta.exit
        )?;

        match &stmt.kind {
            StmtKind::Skip | StmtKind::Expression { .. } => Ok(()),
            StmtKind::If(s) => {
                self.write_block(f, &s.then_block)?;
                self.write_block(f, &s.else_block)
            }
            StmtKind::While(s) => self.write_block(f, &s.body),
        }
    }
}

impl fmt::Display for RdListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_block(f, self.program)
    }
}

/// Render the converged entry/exit sets of every program point
pub fn emit_rd(program: &Block, indent: usize) -> String {
    RdListing::new(program, indent).to_string()
}
