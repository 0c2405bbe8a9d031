//! Shared models

mod label;
mod reaching;

pub use label::{Label, LabelCounter};
pub use reaching::{Definition, ReachingSet, VarSet};
