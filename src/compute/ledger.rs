use crate::store::{Cost, NodeId};

/// Results of the most recent valuation calls, one slot per node.
///
/// The ledger never caches across structural edits: each valuation
/// overwrites its own columns in full.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub forced_true: Vec<bool>,
    pub additive_cost: Vec<Cost>,
    pub max_cost: Vec<Cost>,
    pub achiever: Vec<Option<NodeId>>,
}

impl Ledger {
    pub fn new() -> Self { Self::default() }

    /// Grows every column to `size` so freshly added nodes have a slot.
    pub fn ensure_capacity(&mut self, size: usize) {
        if self.forced_true.len() < size {
            self.forced_true.resize(size, false);
            self.additive_cost.resize(size, Cost::Unreachable);
            self.max_cost.resize(size, Cost::Unreachable);
            self.achiever.resize(size, None);
        }
    }

    #[inline(always)]
    pub fn forced_true(&self, node_id: NodeId) -> bool {
        self.forced_true.get(node_id.index()).copied().unwrap_or(false)
    }

    #[inline(always)]
    pub fn additive_cost(&self, node_id: NodeId) -> Cost {
        self.additive_cost.get(node_id.index()).copied().unwrap_or(Cost::Unreachable)
    }

    #[inline(always)]
    pub fn max_cost(&self, node_id: NodeId) -> Cost {
        self.max_cost.get(node_id.index()).copied().unwrap_or(Cost::Unreachable)
    }

    #[inline(always)]
    pub fn achiever(&self, node_id: NodeId) -> Option<NodeId> {
        self.achiever.get(node_id.index()).copied().flatten()
    }
}
