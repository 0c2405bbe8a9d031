/*
 * Reaching Definitions Engine
 *
 * Forward "may" analysis over the structured tree. Every node stores its
 * converged IN (`meta.entry`) and OUT (`meta.exit`).
 *
 * Transfer (rdgo):
 * - simple statement: out = gen ∪ (in − kill)
 * - block:            statements threaded in order; empty block passes in through
 * - if:               condition(in) feeds both branches; out = then ∪ else
 * - while:            header in = in ∪ previous body out, iterated until stable;
 *                     out = what leaves the condition on its false edge
 *
 * Driver (rdcalc): full sweeps from the program entry with IN = {} until a
 * sweep reports no change. Sets only grow, so the loop terminates; the sweep
 * bound turns a broken invariant into an error instead of a hang.
 *
 * `max_sweeps` bounds the sweeps (and inner loop iterations) that still
 * change a set. The closing sweep that confirms the fixpoint is not counted.
 */

use tracing::{debug, trace};

use super::vars::{generated, killed};
use crate::errors::{DflowError, Result};
use crate::features::ast::domain::{Block, Statement, StmtKind};
use crate::shared::constants::fixpoint::DEFAULT_MAX_SWEEPS;
use crate::shared::models::ReachingSet;

/// Result of one transfer step
#[derive(Debug, Clone, PartialEq)]
pub struct RdStep {
    /// Whether any stored IN/OUT set changed
    pub changed: bool,
    pub out: ReachingSet,
}

/// Summary of a converged run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixpointReport {
    /// Sweeps executed, the final unchanged one included.
    /// Can exceed `max_sweeps` by one.
    pub sweeps: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct ReachingDefinitions {
    max_sweeps: usize,
}

impl Default for ReachingDefinitions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SWEEPS)
    }
}

impl ReachingDefinitions {
    pub fn new(max_sweeps: usize) -> Self {
        Self { max_sweeps }
    }

    pub fn max_sweeps(&self) -> usize {
        self.max_sweeps
    }

    /// Run sweeps over `program` until nothing changes
    pub fn rdcalc(&self, program: &mut Block) -> Result<FixpointReport> {
        let mut sweeps = 0;
        loop {
            let step = self.rdgo_block(program, ReachingSet::new())?;
            sweeps += 1;
            trace!("sweep {}: changed={}", sweeps, step.changed);
            if !step.changed {
                break;
            }
            if sweeps > self.max_sweeps {
                return Err(DflowError::NonConvergence {
                    sweeps: self.max_sweeps,
                });
            }
        }

        debug!("reaching definitions converged after {} sweeps", sweeps);
        Ok(FixpointReport { sweeps })
    }

    /// Transfer through a block
    pub fn rdgo_block(&self, block: &mut Block, input: ReachingSet) -> Result<RdStep> {
        let mut changed = false;
        let mut current = input.clone();
        for stmt in &mut block.statements {
            let step = self.rdgo(stmt, current)?;
            changed |= step.changed;
            current = step.out;
        }

        changed |= block.meta.update(input, current.clone());
        Ok(RdStep {
            changed,
            out: current,
        })
    }

    /// Transfer through a statement
    pub fn rdgo(&self, stmt: &mut Statement, input: ReachingSet) -> Result<RdStep> {
        match &mut stmt.kind {
            StmtKind::If(s) => {
                let cond = self.rdgo_block(&mut s.condition, input.clone())?;
                let then_step = self.rdgo_block(&mut s.then_block, cond.out.clone())?;
                let else_step = self.rdgo_block(&mut s.else_block, cond.out)?;

                let out = then_step.out.union(&else_step.out);
                let changed = cond.changed
                    | then_step.changed
                    | else_step.changed
                    | stmt.meta.update(input, out.clone());
                return Ok(RdStep { changed, out });
            }
            StmtKind::While(s) => {
                let mut changed = false;
                let mut iterations = 0;
                loop {
                    iterations += 1;

                    let header = input.union(&s.body.meta.exit);
                    let cond = self.rdgo_block(&mut s.condition, header.clone())?;
                    let body = self.rdgo_block(&mut s.body, cond.out.clone())?;
                    let header_changed = stmt.meta.update(header, cond.out);

                    let round = cond.changed | body.changed | header_changed;
                    changed |= round;
                    if !round {
                        break;
                    }
                    if iterations > self.max_sweeps {
                        return Err(DflowError::NonConvergence {
                            sweeps: self.max_sweeps,
                        });
                    }
                }

                trace!(
                    "while {} stable after {} iterations",
                    stmt.meta.label,
                    iterations
                );
                return Ok(RdStep {
                    changed,
                    out: stmt.meta.exit.clone(),
                });
            }
            StmtKind::Skip | StmtKind::Expression { .. } => {}
        }

        let mut out = input.clone();
        for var in killed(stmt) {
            out.kill(&var);
        }
        for def in generated(stmt) {
            out.insert(&def.variable, def.label);
        }

        let changed = stmt.meta.update(input, out.clone());
        Ok(RdStep { changed, out })
    }
}

/// Compute reaching definitions for a labeled program
pub fn rdcalc(program: &mut Block, max_sweeps: usize) -> Result<FixpointReport> {
    ReachingDefinitions::new(max_sweeps).rdcalc(program)
}
