//! Program point labels
//!
//! A label identifies a location in the program. Labels are handed out once
//! by the labeling pass and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Program point label
///
/// `Label::UNASSIGNED` (zero) marks a node the labeling pass has not visited
/// yet; real labels start at 1.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Label(pub u32);

impl Label {
    pub const UNASSIGNED: Label = Label(0);

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Running counter threaded through the labeling walk
#[derive(Debug, Default)]
pub struct LabelCounter {
    last: u32,
}

impl LabelCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next label
    pub fn next_label(&mut self) -> Label {
        self.last += 1;
        Label(self.last)
    }

    /// Most recently allocated label (`UNASSIGNED` before the first call)
    pub fn current(&self) -> Label {
        Label(self.last)
    }
}
