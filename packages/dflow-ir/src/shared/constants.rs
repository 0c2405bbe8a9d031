//! Centralized analysis constants
//!
//! Tunable defaults and reserved names live here so that every pass agrees
//! on them.

/// Reserved variable names
pub mod variables {
    /// Variable contributed by `skip` statements.
    ///
    /// `$` never appears in a source identifier, so this name can not collide
    /// with a real variable during gen/kill computation.
    pub const BOGUS_VARIABLE: &str = "$bogus";
}

/// Fixpoint iteration defaults
pub mod fixpoint {
    /// Default bound on full analysis sweeps (and on inner `while` iterations)
    pub const DEFAULT_MAX_SWEEPS: usize = 1_000;

    /// Largest accepted sweep bound
    pub const MAX_SWEEPS_LIMIT: usize = 1_000_000;
}

/// Diagram node labels
pub mod diagram {
    pub const PROGRAM_ENTRY: &str = "[[PROGRAM]]";
    pub const PROGRAM_EXIT: &str = "[[PROGRAM END]]";
    pub const TEST_GROUP: &str = "[[TEST]]";
    pub const IF_GROUP: &str = "[[IF]]";
    pub const ELSE_GROUP: &str = "[[ELSE]]";
    pub const BODY_GROUP: &str = "[[BODY]]";

    /// Label of synthetic merge / loop-exit nodes
    pub const MERGE: &str = "";

    /// Branch edge labels
    pub const TRUE_EDGE: &str = "true";
    pub const FALSE_EDGE: &str = "false";
}
