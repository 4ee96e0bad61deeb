//! dag.rs
//! Wraps the low-level Registry with the valuation algorithms and their results.
//! The graph is oblivious to planning semantics: it only knows AND/OR nodes,
//! direct costs and requirement edges.

use crate::compute::{costs, reachability, CostModel, Ledger};
use crate::store::{Cost, GraphError, NodeId, NodeKind, Registry};

/// Read-only view of a node together with its last computed valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView<'a> {
    pub id: NodeId,
    pub kind: NodeKind,
    pub direct_cost: u64,
    pub requirements: &'a [NodeId],
    /// Set by `evaluate_reachability`.
    pub forced_true: bool,
    /// Set by `evaluate_costs`.
    pub additive_cost: Cost,
    /// Set by `evaluate_max_costs`.
    pub max_cost: Cost,
    /// Set by `evaluate_costs`; only OR nodes have one.
    pub achiever: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub(crate) store: Registry,
    ledger: Ledger,
}

impl DependencyGraph {
    pub fn new() -> Self { Self::default() }

    pub fn add_node(&mut self, kind: NodeKind, direct_cost: u64) -> NodeId {
        let id = self.store.add_node(kind, direct_cost);
        self.ledger.ensure_capacity(self.store.count());
        id
    }

    pub fn add_requirement(&mut self, dependent: NodeId, dependency: NodeId) -> Result<(), GraphError> {
        self.store.add_requirement(dependent, dependency)
    }

    pub fn remove_requirement(&mut self, dependent: NodeId, dependency: NodeId) -> Result<(), GraphError> {
        self.store.remove_requirement(dependent, dependency)
    }

    pub fn node_count(&self) -> usize { self.store.count() }
    pub fn edge_count(&self) -> usize { self.store.edge_count() }

    /// # Panics
    /// If `id` was not returned by `add_node` on this graph.
    pub fn node(&self, id: NodeId) -> NodeView<'_> {
        if let Err(e) = self.store.check(id) {
            panic!("{}", e);
        }
        NodeView {
            id,
            kind: self.store.kinds[id.index()],
            direct_cost: self.store.direct_costs[id.index()],
            requirements: self.store.get_requirements(id),
            forced_true: self.ledger.forced_true(id),
            additive_cost: self.ledger.additive_cost(id),
            max_cost: self.ledger.max_cost(id),
            achiever: self.ledger.achiever(id),
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_>> + '_ {
        (0..self.node_count()).map(|i| self.node(NodeId::new(i)))
    }

    pub fn has_requirement(&self, dependent: NodeId, dependency: NodeId) -> bool {
        self.store.has_requirement(dependent, dependency)
    }

    pub fn get_requirements(&self, id: NodeId) -> &[NodeId] { self.store.get_requirements(id) }
    pub fn get_dependents(&self, id: NodeId) -> &[NodeId] { self.store.get_dependents(id) }

    // --- Valuations ---

    /// Recomputes `forced_true` for every node.
    pub fn evaluate_reachability(&mut self) {
        self.ledger.forced_true = reachability::evaluate(&self.store);
    }

    /// Recomputes `additive_cost` and `achiever` for every node.
    pub fn evaluate_costs(&mut self) {
        let valuation = costs::evaluate(&self.store, CostModel::Additive);
        self.ledger.additive_cost = valuation.costs;
        self.ledger.achiever = valuation.achievers;
    }

    /// Recomputes `max_cost` for every node. Achievers are left untouched.
    pub fn evaluate_max_costs(&mut self) {
        self.ledger.max_cost = costs::evaluate(&self.store, CostModel::Max).costs;
    }

    // --- Accessors ---
    pub fn forced_true(&self, id: NodeId) -> bool { self.ledger.forced_true(id) }
    pub fn additive_cost(&self, id: NodeId) -> Cost { self.ledger.additive_cost(id) }
    pub fn max_cost(&self, id: NodeId) -> Cost { self.ledger.max_cost(id) }
    pub fn achiever(&self, id: NodeId) -> Option<NodeId> { self.ledger.achiever(id) }
    pub fn get_node_kind(&self, id: NodeId) -> NodeKind { self.store.kinds[id.index()] }
    pub fn get_direct_cost(&self, id: NodeId) -> u64 { self.store.direct_costs[id.index()] }
}
