//! Labeling infrastructure

pub mod depth_assigner;
pub mod label_assigner;

pub use depth_assigner::assign_depths;
pub use label_assigner::assign_labels;
