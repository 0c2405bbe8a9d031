//! Data Flow infrastructure

pub mod emit;
pub mod reaching;
pub mod vars;

pub use emit::{emit_rd, RdListing};
pub use reaching::{rdcalc, FixpointReport, RdStep, ReachingDefinitions};
pub use vars::{defined_variables, gather_vars, generated, getvs, killed, VarUse};
