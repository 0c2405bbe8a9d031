//! Per-node analysis state

use once_cell::unsync::OnceCell;

use crate::shared::models::{Label, ReachingSet, VarSet};

/// Analysis state carried by every AST node
///
/// Filled in place by the passes: labeling sets `label`/`depth`, the
/// reaching-definitions engine sets `entry` (IN) and `exit` (OUT). The
/// variable set is computed on first request and never invalidated.
#[derive(Debug, Clone, Default)]
pub struct NodeMeta {
    pub label: Label,
    pub depth: u32,
    pub entry: ReachingSet,
    pub exit: ReachingSet,
    pub(crate) vars: OnceCell<VarSet>,
}

impl NodeMeta {
    /// Store new IN/OUT sets; returns true if either differs from before
    pub fn update(&mut self, entry: ReachingSet, exit: ReachingSet) -> bool {
        let changed = self.entry != entry || self.exit != exit;
        self.entry = entry;
        self.exit = exit;
        changed
    }
}
