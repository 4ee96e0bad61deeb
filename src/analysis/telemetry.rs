use crate::graph::{DependencyGraph, NodeKind};

/// Structural summary of a dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes: usize,
    pub and_nodes: usize,
    pub or_nodes: usize,
    pub edges: usize,
    /// AND nodes with no requirements; these seed every valuation.
    pub sources: usize,
    /// Largest requirement set of any node.
    pub max_fan_in: usize,
    /// Largest dependent set of any node.
    pub max_fan_out: usize,
    /// Sum of all direct costs.
    pub total_direct_cost: u64,
}

impl GraphStats {
    pub fn analyze(graph: &DependencyGraph) -> Self {
        let mut stats = GraphStats { nodes: graph.node_count(), edges: graph.edge_count(), ..Default::default() };

        for node in graph.nodes() {
            match node.kind {
                NodeKind::And => {
                    stats.and_nodes += 1;
                    if node.requirements.is_empty() {
                        stats.sources += 1;
                    }
                }
                NodeKind::Or => stats.or_nodes += 1,
            }
            stats.max_fan_in = stats.max_fan_in.max(node.requirements.len());
            stats.max_fan_out = stats.max_fan_out.max(graph.get_dependents(node.id).len());
            stats.total_direct_cost = stats.total_direct_cost.saturating_add(node.direct_cost);
        }
        stats
    }
}
