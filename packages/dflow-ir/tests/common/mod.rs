//! Common test utilities for dflow-ir
//!
//! Shared fixtures, assertions, and proptest strategies for the
//! integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;
mod strategies;

// Re-export all utilities
pub use assertions::*;
pub use fixtures::*;
pub use strategies::*;
