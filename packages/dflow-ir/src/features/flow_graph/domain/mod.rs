//! Control flow graph domain model

use crate::features::flow_graph::ports::NodeHandle;

/// Outgoing control flow not yet attached to its target
///
/// Stitching a statement returns the node control leaves through, plus the
/// label the edge out of it must carry. An empty block hands its incoming
/// edge through unchanged, so a branch label survives an empty branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: NodeHandle,
    pub label: &'static str,
}

impl FlowEdge {
    pub fn plain(from: NodeHandle) -> Self {
        Self { from, label: "" }
    }

    pub fn labeled(from: NodeHandle, label: &'static str) -> Self {
        Self { from, label }
    }
}

/// Endpoints of a whole-program CFG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramCfg {
    /// `[[PROGRAM]]` node
    pub entry: NodeHandle,
    /// `[[PROGRAM END]]` node
    pub exit: NodeHandle,
}
