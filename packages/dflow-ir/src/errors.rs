//! Error types for dflow-ir
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::rendering::RenderError;
use crate::shared::models::Label;

/// Main error type for dflow-ir operations
#[derive(Debug, Error)]
pub enum DflowError {
    /// Structural node is missing a required child
    #[error("Malformed tree at {context}: {reason}")]
    MalformedTree { context: String, reason: String },

    /// Stitching reached a statement whose CFG node was never created
    #[error("CFG node missing for statement {label}: cfg_prep must run before cfg_stitch")]
    CfgNotPrepared { label: Label },

    /// Fixpoint iteration exceeded its bound
    #[error("Reaching definitions did not converge within {sweeps} sweeps")]
    NonConvergence { sweeps: usize },

    /// Diagram output failed; the analysis itself is unaffected
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Program input could not be decoded
    #[error("Program decoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DflowError {
    /// Create a malformed tree error
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        DflowError::MalformedTree {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for dflow operations
pub type Result<T> = std::result::Result<T, DflowError>;
