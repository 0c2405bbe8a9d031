/*
 * Analysis Pipeline
 *
 * Stages, each running to completion before the next:
 * 1. validate  - reject malformed trees before anything is mutated
 * 2. label     - program point labels, then nesting depths
 * 3. cfg       - prep + stitch into a petgraph sink
 * 4. rd        - reaching-definitions fixpoint
 * 5. render    - optional; a failure is kept on the result, not returned
 */

use std::time::Instant;

use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::errors::Result;
use crate::features::ast::domain::Block;
use crate::features::ast::infrastructure::{paint_ast, validate_program};
use crate::features::data_flow::ReachingDefinitions;
use crate::features::flow_graph::{BuildCfgUseCase, PetgraphSink};
use crate::features::labeling::{assign_depths, assign_labels};
use crate::features::rendering::{DiagramKind, DotRenderer, RenderResult, RenderedDiagram};
use crate::pipeline::analysis_result::{AnalysisResult, PipelineStats};

#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    /// Create a pipeline; the configuration is validated here
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Decode a JSON program and analyze it
    pub fn run_json(&self, json: &str) -> Result<AnalysisResult> {
        self.run(Block::from_json(json)?)
    }

    /// Analyze `program`
    ///
    /// # Example
    /// ```ignore
    /// let pipeline = AnalysisPipeline::new(AnalysisConfig::default())?;
    /// let result = pipeline.run(program)?;
    /// print!("{}", result.emit_rd());
    /// ```
    pub fn run(&self, mut program: Block) -> Result<AnalysisResult> {
        let total_start = Instant::now();
        let mut stats = PipelineStats::new();

        let start = Instant::now();
        validate_program(&program)?;
        stats.record_stage("validate", start.elapsed());

        let start = Instant::now();
        stats.label_count = assign_labels(&mut program).value();
        assign_depths(&mut program);
        stats.record_stage("label", start.elapsed());

        let start = Instant::now();
        let mut cfg = PetgraphSink::new();
        let cfg_bounds = BuildCfgUseCase::new(&mut cfg).execute(&mut program)?;
        stats.cfg_nodes = cfg.node_count();
        stats.cfg_edges = cfg.edge_count();
        stats.record_stage("cfg", start.elapsed());

        let start = Instant::now();
        let report = ReachingDefinitions::new(self.config.max_sweeps).rdcalc(&mut program)?;
        stats.sweeps = report.sweeps;
        stats.record_stage("rd", start.elapsed());

        let mut rendered = Vec::new();
        let mut render_error = None;
        if self.config.render.enabled {
            let start = Instant::now();
            if let Err(err) = self.render(&program, &cfg, &mut rendered) {
                warn!("rendering failed, analysis result kept: {}", err);
                render_error = Some(err);
            }
            stats.record_stage("render", start.elapsed());
        }

        stats.total_duration = total_start.elapsed();
        info!(
            "analysis complete: {} labels, {} cfg nodes, {} sweeps in {:?}",
            stats.label_count, stats.cfg_nodes, stats.sweeps, stats.total_duration
        );

        Ok(AnalysisResult {
            program,
            cfg,
            cfg_bounds,
            rendered,
            render_error,
            stats,
            indent: self.config.emit.indent,
        })
    }

    fn render(
        &self,
        program: &Block,
        cfg: &PetgraphSink,
        rendered: &mut Vec<RenderedDiagram>,
    ) -> RenderResult<()> {
        let renderer = DotRenderer::from_config(&self.config.render);
        rendered.push(renderer.render(DiagramKind::Cfg, cfg)?);

        if self.config.render.ast_diagrams {
            for (kind, annotated) in [(DiagramKind::Ast, false), (DiagramKind::AnnotatedAst, true)] {
                let mut sink = PetgraphSink::new();
                paint_ast(program, &mut sink, annotated);
                rendered.push(renderer.render(kind, &sink)?);
            }
        }
        Ok(())
    }
}
