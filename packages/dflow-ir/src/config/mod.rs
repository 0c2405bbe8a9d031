//! Analysis configuration
//!
//! Every knob has a default, so `AnalysisConfig::default()` is a complete
//! configuration. Files are YAML with a mandatory `version: 1` header:
//!
//! ```yaml
//! version: 1
//! max_sweeps: 500
//! render:
//!   enabled: true
//!   prefix: out/program
//!   format: svg
//! emit:
//!   indent: 4
//! ```

pub mod analysis_config;
pub mod error;

// Re-exports
pub use analysis_config::{AnalysisConfig, EmitConfig, OutputFormat, RenderConfig};
pub use error::{ConfigError, ConfigResult};
