//! Pipeline orchestration

pub mod analysis_pipeline;
pub mod analysis_result;

pub use analysis_pipeline::AnalysisPipeline;
pub use analysis_result::{AnalysisResult, PipelineStats};
