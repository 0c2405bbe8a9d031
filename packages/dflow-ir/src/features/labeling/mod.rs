//! Program point labeling and nesting depth

pub mod infrastructure;

pub use infrastructure::{assign_depths, assign_labels};
