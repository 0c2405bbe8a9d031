/*
 * dflow IR - Reaching Definitions for a structured toy language
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Label, ReachingSet)
 * - features/    : Vertical slices (ast → labeling → flow_graph → data_flow → rendering)
 * - pipeline/    : Orchestration
 * - config/      : Analysis configuration (YAML)
 *
 * Passes mutate the tree in place, one at a time:
 * label → cfg prep/stitch → rdcalc
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and constants
pub mod shared;

/// Feature modules (one per pass)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{AnalysisConfig, OutputFormat};
pub use errors::{DflowError, Result};
pub use features::ast::{Block, Expr, Statement, StmtKind};
pub use features::data_flow::{emit_rd, getvs, rdcalc, ReachingDefinitions};
pub use features::flow_graph::{GraphSink, NodeHandle, PetgraphSink};
pub use features::labeling::assign_labels;
pub use pipeline::{AnalysisPipeline, AnalysisResult};
pub use shared::models::{Definition, Label, ReachingSet};
