//! Reaching-definitions dataflow analysis
//!
//! - infrastructure/vars     - Variable-use collector (`getvs`) and gen/kill
//! - infrastructure/reaching - Per-node transfer (`rdgo`) and fixpoint driver (`rdcalc`)
//! - infrastructure/emit     - Text emission of the converged sets (`emitrd`)

pub mod infrastructure;

pub use infrastructure::{
    defined_variables, emit_rd, gather_vars, generated, getvs, killed, rdcalc, FixpointReport,
    RdListing, RdStep, ReachingDefinitions, VarUse,
};
