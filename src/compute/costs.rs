//! Weighted valuation: a generalized Dijkstra over the AND/OR hypergraph.
use crate::store::{Cost, NodeId, NodeKind, Registry};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// How an AND node aggregates the costs of its requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// `direct_cost + sum(requirements)`, the h^add aggregation.
    #[default]
    Additive,
    /// `direct_cost + max(requirements)`, the admissible h^max aggregation.
    Max,
}

impl CostModel {
    #[inline(always)]
    fn combine(self, acc: u64, cost: u64) -> u64 {
        match self {
            CostModel::Additive => acc.saturating_add(cost),
            CostModel::Max => acc.max(cost),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CostValuation {
    pub costs: Vec<Cost>,
    /// For OR nodes: the requirement realizing the minimum. `None` for AND
    /// nodes and for unreachable OR nodes.
    pub achievers: Vec<Option<NodeId>>,
}

/// Computes the cost of every node under `model`.
///
/// Nodes are finalized in nondecreasing order of cost. An OR node finalizes
/// with its first finalized requirement; an AND node once its last pending
/// requirement finalizes. Equal tentative costs pop in node-id order, so the
/// result does not depend on the order edges were inserted. Each node
/// finalizes at most once; nodes that never finalize stay `Unreachable`.
pub fn evaluate(registry: &Registry, model: CostModel) -> CostValuation {
    let count = registry.count();
    let mut costs = vec![Cost::Unreachable; count];
    let mut achievers = vec![None; count];
    let mut finalized = vec![false; count];
    let mut pending: Vec<usize> = registry.requirements.iter().map(|r| r.len()).collect();
    let mut accumulated = vec![0u64; count];
    let mut queue = BinaryHeap::with_capacity(count);

    for i in 0..count {
        if registry.kinds[i] == NodeKind::And && pending[i] == 0 {
            let cost = registry.direct_costs[i];
            costs[i] = Cost::Finite(cost);
            queue.push(Reverse((cost, NodeId::new(i))));
        }
    }

    while let Some(Reverse((cost, node))) = queue.pop() {
        let idx = node.index();
        // Stale entry: already finalized, or superseded by a cheaper push.
        if finalized[idx] || costs[idx] != Cost::Finite(cost) {
            continue;
        }
        finalized[idx] = true;

        for &dependent in registry.get_dependents(node) {
            let d = dependent.index();
            if finalized[d] {
                continue;
            }
            match registry.kinds[d] {
                NodeKind::Or => {
                    if Cost::Finite(cost) < costs[d] {
                        costs[d] = Cost::Finite(cost);
                        achievers[d] = Some(node);
                        queue.push(Reverse((cost, dependent)));
                    }
                }
                NodeKind::And => {
                    pending[d] -= 1;
                    accumulated[d] = model.combine(accumulated[d], cost);
                    if pending[d] == 0 {
                        let total = registry.direct_costs[d].saturating_add(accumulated[d]);
                        costs[d] = Cost::Finite(total);
                        queue.push(Reverse((total, dependent)));
                    }
                }
            }
        }
    }

    CostValuation { costs, achievers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// goal = AND(p, q); p = OR(init); q = OR(eff_a, eff_b);
    /// eff_a = AND[cost 4](p); eff_b = AND[cost 1](p, p2); p2 = OR(init)
    fn diamond() -> (Registry, NodeId, NodeId, NodeId, NodeId) {
        let mut reg = Registry::new();
        let init = reg.add_node(NodeKind::And, 0);
        let p = reg.add_node(NodeKind::Or, 0);
        let p2 = reg.add_node(NodeKind::Or, 0);
        let q = reg.add_node(NodeKind::Or, 0);
        let eff_a = reg.add_node(NodeKind::And, 4);
        let eff_b = reg.add_node(NodeKind::And, 1);
        let goal = reg.add_node(NodeKind::And, 0);
        reg.add_requirement(p, init).unwrap();
        reg.add_requirement(p2, init).unwrap();
        reg.add_requirement(eff_a, p).unwrap();
        reg.add_requirement(eff_b, p).unwrap();
        reg.add_requirement(eff_b, p2).unwrap();
        reg.add_requirement(q, eff_a).unwrap();
        reg.add_requirement(q, eff_b).unwrap();
        reg.add_requirement(goal, p).unwrap();
        reg.add_requirement(goal, q).unwrap();
        (reg, goal, q, eff_a, eff_b)
    }

    #[rstest]
    #[case(CostModel::Additive, 1)]
    #[case(CostModel::Max, 1)]
    fn test_or_picks_cheapest_requirement(#[case] model: CostModel, #[case] expected: u64) {
        let (reg, goal, q, _, eff_b) = diamond();
        let val = evaluate(&reg, model);
        assert_eq!(val.costs[q.index()], Cost::Finite(1));
        assert_eq!(val.achievers[q.index()], Some(eff_b));
        assert_eq!(val.costs[goal.index()], Cost::Finite(expected));
    }

    #[test]
    fn test_sum_versus_max_aggregation() {
        // top = AND[cost 1](x, y); x = AND[cost 2](); y = AND[cost 3]()
        let mut reg = Registry::new();
        let x = reg.add_node(NodeKind::And, 2);
        let y = reg.add_node(NodeKind::And, 3);
        let top = reg.add_node(NodeKind::And, 1);
        reg.add_requirement(top, x).unwrap();
        reg.add_requirement(top, y).unwrap();

        assert_eq!(evaluate(&reg, CostModel::Additive).costs[top.index()], Cost::Finite(6));
        assert_eq!(evaluate(&reg, CostModel::Max).costs[top.index()], Cost::Finite(4));
    }

    #[test]
    fn test_ties_resolve_to_lower_node_id_regardless_of_insertion_order() {
        let build = |reverse: bool| {
            let mut reg = Registry::new();
            let a = reg.add_node(NodeKind::And, 2);
            let b = reg.add_node(NodeKind::And, 2);
            let or = reg.add_node(NodeKind::Or, 0);
            if reverse {
                reg.add_requirement(or, b).unwrap();
                reg.add_requirement(or, a).unwrap();
            } else {
                reg.add_requirement(or, a).unwrap();
                reg.add_requirement(or, b).unwrap();
            }
            evaluate(&reg, CostModel::Additive).achievers[or.index()]
        };
        assert_eq!(build(false), Some(NodeId(0)));
        assert_eq!(build(true), Some(NodeId(0)));
    }

    #[test]
    fn test_zero_cost_cycle_never_finalizes() {
        let mut reg = Registry::new();
        let x = reg.add_node(NodeKind::Or, 0);
        let y = reg.add_node(NodeKind::And, 0);
        reg.add_requirement(x, y).unwrap();
        reg.add_requirement(y, x).unwrap();

        let val = evaluate(&reg, CostModel::Additive);
        assert_eq!(val.costs[x.index()], Cost::Unreachable);
        assert_eq!(val.costs[y.index()], Cost::Unreachable);
        assert_eq!(val.achievers[x.index()], None);
    }

    #[test]
    fn test_shared_requirement_counted_per_path_in_additive() {
        // top = AND(m, n); m = AND[2](s); n = AND[3](s); s = AND[5]()
        let mut reg = Registry::new();
        let s = reg.add_node(NodeKind::And, 5);
        let m = reg.add_node(NodeKind::And, 2);
        let n = reg.add_node(NodeKind::And, 3);
        let top = reg.add_node(NodeKind::And, 0);
        reg.add_requirement(m, s).unwrap();
        reg.add_requirement(n, s).unwrap();
        reg.add_requirement(top, m).unwrap();
        reg.add_requirement(top, n).unwrap();

        assert_eq!(evaluate(&reg, CostModel::Additive).costs[top.index()], Cost::Finite(15));
        assert_eq!(evaluate(&reg, CostModel::Max).costs[top.index()], Cost::Finite(8));
    }
}
