//! Graph sink port
//!
//! The only capability the analysis needs from a diagram backend: create a
//! labeled node, create a labeled edge. Handles are opaque to the caller;
//! making node identities unique is the sink's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node handle issued by a `GraphSink`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeHandle(u32);

/// Opaque edge handle issued by a `GraphSink`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeHandle(u32);

impl NodeHandle {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl EdgeHandle {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

pub trait GraphSink {
    fn new_node(&mut self, label: &str) -> NodeHandle;

    fn new_edge(&mut self, from: NodeHandle, to: NodeHandle, label: &str) -> EdgeHandle;
}
