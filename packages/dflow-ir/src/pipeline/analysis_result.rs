//! Analysis result types
//!
//! ```text
//! AnalysisResult
//! ├── program: Block          labeled tree with converged entry/exit sets
//! ├── cfg: PetgraphSink       control flow graph
//! ├── cfg_bounds: ProgramCfg  [[PROGRAM]] / [[PROGRAM END]] nodes
//! ├── rendered                diagrams written to disk
//! ├── render_error            first rendering failure, if any
//! └── stats                   per-stage timings and counts
//! ```

use std::collections::HashMap;
use std::time::Duration;

use crate::features::ast::domain::{Block, Statement, StmtKind};
use crate::features::ast::infrastructure::ProgramText;
use crate::features::data_flow::emit_rd;
use crate::features::flow_graph::{PetgraphSink, ProgramCfg};
use crate::features::rendering::{RenderError, RenderedDiagram};
use crate::shared::models::Label;

/// Pipeline execution statistics
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Total execution time
    pub total_duration: Duration,

    /// Per-stage durations
    pub stage_durations: HashMap<String, Duration>,

    /// Last label handed out
    pub label_count: u32,

    pub cfg_nodes: usize,
    pub cfg_edges: usize,

    /// Fixpoint sweeps, the final unchanged one included
    pub sweeps: usize,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record stage duration
    pub fn record_stage(&mut self, stage_name: impl Into<String>, duration: Duration) {
        self.stage_durations.insert(stage_name.into(), duration);
    }
}

/// Everything one pipeline run produced
#[derive(Debug)]
pub struct AnalysisResult {
    pub program: Block,
    pub cfg: PetgraphSink,
    pub cfg_bounds: ProgramCfg,
    pub rendered: Vec<RenderedDiagram>,
    /// Rendering failed; the analysis above is still complete
    pub render_error: Option<RenderError>,
    pub stats: PipelineStats,
    pub(crate) indent: usize,
}

impl AnalysisResult {
    /// Reaching-definitions listing, one line per program point
    pub fn emit_rd(&self) -> String {
        emit_rd(&self.program, self.indent)
    }

    /// Indented program listing with labels
    pub fn program_text(&self) -> String {
        ProgramText::new(&self.program, self.indent).to_string()
    }

    /// Statement at program point `label` (condition statements included)
    pub fn statement(&self, label: Label) -> Option<&Statement> {
        find_in_block(&self.program, label)
    }

    /// Statements in program order, condition statements excluded
    pub fn program_points(&self) -> Vec<&Statement> {
        let mut points = Vec::new();
        collect_points(&self.program, &mut points);
        points
    }
}

fn find_in_block(block: &Block, label: Label) -> Option<&Statement> {
    block.statements.iter().find_map(|stmt| {
        if stmt.label() == label {
            return Some(stmt);
        }
        match &stmt.kind {
            StmtKind::Skip | StmtKind::Expression { .. } => None,
            StmtKind::If(s) => find_in_block(&s.condition, label)
                .or_else(|| find_in_block(&s.then_block, label))
                .or_else(|| find_in_block(&s.else_block, label)),
            StmtKind::While(s) => {
                find_in_block(&s.condition, label).or_else(|| find_in_block(&s.body, label))
            }
        }
    })
}

fn collect_points<'a>(block: &'a Block, points: &mut Vec<&'a Statement>) {
    for stmt in &block.statements {
        points.push(stmt);
        match &stmt.kind {
            StmtKind::Skip | StmtKind::Expression { .. } => {}
            StmtKind::If(s) => {
                collect_points(&s.then_block, points);
                collect_points(&s.else_block, points);
            }
            StmtKind::While(s) => collect_points(&s.body, points),
        }
    }
}
