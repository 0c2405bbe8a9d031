//! Shared module - Common types and utilities
//!
//! Types used by more than one feature: program point labels, definitions,
//! reaching-definitions sets and variable sets.

pub mod constants;
pub mod models;

// Re-exports for convenience
pub use models::*;
