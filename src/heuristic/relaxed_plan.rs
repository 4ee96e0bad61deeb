//! Relaxed plan extraction along the achievers of the last cost valuation.
use crate::graph::{DependencyGraph, NodeId, NodeKind};
use crate::task::OperatorId;
use serde::{Deserialize, Serialize};

/// The nodes supporting a root under the current achievers, and the sum of
/// their direct costs (each node counted once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Justification {
    /// Ascending node ids.
    pub nodes: Vec<NodeId>,
    pub cost: u64,
}

/// The distinct operators of an extracted relaxed plan. Unordered: this is a
/// set of operators, not an executable sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaxedPlan {
    /// Ascending operator ids.
    pub operators: Vec<OperatorId>,
    pub cost: u64,
}

impl RelaxedPlan {
    pub fn new(mut operators: Vec<OperatorId>, cost: u64) -> Self {
        operators.sort_unstable();
        Self { operators, cost }
    }

    pub fn len(&self) -> usize { self.operators.len() }
    pub fn is_empty(&self) -> bool { self.operators.is_empty() }
}

/// Walks from `root` following every requirement of AND nodes and only the
/// achiever of OR nodes. Requires `evaluate_costs` to have run on the current
/// structure; returns `None` when `root` is unreachable.
pub fn justification(graph: &DependencyGraph, root: NodeId) -> Option<Justification> {
    if !graph.additive_cost(root).is_finite() {
        return None;
    }

    let mut visited = vec![false; graph.node_count()];
    let mut stack = vec![root];
    let mut nodes = Vec::new();
    let mut cost = 0u64;
    visited[root.index()] = true;

    while let Some(node) = stack.pop() {
        nodes.push(node);
        cost = cost.saturating_add(graph.get_direct_cost(node));

        let mut visit = |next: NodeId| {
            if !visited[next.index()] {
                visited[next.index()] = true;
                stack.push(next);
            }
        };
        match graph.get_node_kind(node) {
            NodeKind::And => graph.get_requirements(node).iter().copied().for_each(&mut visit),
            // A finite OR node always has an achiever.
            NodeKind::Or => visit(graph.achiever(node)?),
        }
    }

    nodes.sort_unstable();
    Some(Justification { nodes, cost })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Cost;

    #[test]
    fn test_shared_support_is_counted_once() {
        // top = AND(f1, f2); f1 = OR(e); f2 = OR(e); e = AND[5](init)
        let mut g = DependencyGraph::new();
        let init = g.add_node(NodeKind::And, 0);
        let e = g.add_node(NodeKind::And, 5);
        let f1 = g.add_node(NodeKind::Or, 0);
        let f2 = g.add_node(NodeKind::Or, 0);
        let top = g.add_node(NodeKind::And, 0);
        g.add_requirement(e, init).unwrap();
        g.add_requirement(f1, e).unwrap();
        g.add_requirement(f2, e).unwrap();
        g.add_requirement(top, f1).unwrap();
        g.add_requirement(top, f2).unwrap();

        g.evaluate_costs();
        assert_eq!(g.additive_cost(top), Cost::Finite(10));

        let j = justification(&g, top).unwrap();
        assert_eq!(j.cost, 5);
        assert_eq!(j.nodes, vec![init, e, f1, f2, top]);
    }

    #[test]
    fn test_only_achiever_branch_is_followed() {
        // f = OR(cheap, dear); cheap = AND[1](); dear = AND[9]()
        let mut g = DependencyGraph::new();
        let cheap = g.add_node(NodeKind::And, 1);
        let dear = g.add_node(NodeKind::And, 9);
        let f = g.add_node(NodeKind::Or, 0);
        g.add_requirement(f, dear).unwrap();
        g.add_requirement(f, cheap).unwrap();

        g.evaluate_costs();
        let j = justification(&g, f).unwrap();
        assert_eq!(j.nodes, vec![cheap, f]);
        assert_eq!(j.cost, 1);
    }

    #[test]
    fn test_unreachable_root_has_no_justification() {
        let mut g = DependencyGraph::new();
        let f = g.add_node(NodeKind::Or, 0);
        g.evaluate_costs();
        assert_eq!(justification(&g, f), None);
    }

    #[test]
    fn test_plan_operators_are_sorted() {
        let plan = RelaxedPlan::new(vec![OperatorId(3), OperatorId(1)], 4);
        assert_eq!(plan.operators, vec![OperatorId(1), OperatorId(3)]);
        assert_eq!(plan.len(), 2);
    }
}
