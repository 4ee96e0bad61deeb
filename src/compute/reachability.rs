//! Unweighted least-fixpoint valuation ("most conservative" truth assignment).
use crate::store::{NodeId, NodeKind, Registry};

/// Computes `forced_true` for every node.
///
/// AND nodes are true once all requirements are true, OR nodes once any is.
/// Propagation starts from AND nodes with no requirements and walks the
/// reverse edges with a worklist, so every node and edge is touched at most
/// once. Nodes on unsupported cycles are never reached and stay false.
pub fn evaluate(registry: &Registry) -> Vec<bool> {
    let count = registry.count();
    let mut forced_true = vec![false; count];
    let mut pending: Vec<usize> = registry.requirements.iter().map(|r| r.len()).collect();
    let mut worklist = Vec::with_capacity(count);

    for i in 0..count {
        if registry.kinds[i] == NodeKind::And && pending[i] == 0 {
            forced_true[i] = true;
            worklist.push(NodeId::new(i));
        }
    }

    while let Some(node) = worklist.pop() {
        for &dependent in registry.get_dependents(node) {
            let idx = dependent.index();
            if forced_true[idx] {
                continue;
            }
            let satisfied = match registry.kinds[idx] {
                NodeKind::Or => true,
                NodeKind::And => {
                    pending[idx] -= 1;
                    pending[idx] == 0
                }
            };
            if satisfied {
                forced_true[idx] = true;
                worklist.push(dependent);
            }
        }
    }

    forced_true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_is_true_empty_or_is_false() {
        let mut reg = Registry::new();
        let and = reg.add_node(NodeKind::And, 0);
        let or = reg.add_node(NodeKind::Or, 0);
        let res = evaluate(&reg);
        assert!(res[and.index()]);
        assert!(!res[or.index()]);
    }

    #[test]
    fn test_and_needs_every_requirement() {
        // top = AND(a, b); a = OR(init); b = OR()
        let mut reg = Registry::new();
        let init = reg.add_node(NodeKind::And, 0);
        let a = reg.add_node(NodeKind::Or, 0);
        let b = reg.add_node(NodeKind::Or, 0);
        let top = reg.add_node(NodeKind::And, 0);
        reg.add_requirement(a, init).unwrap();
        reg.add_requirement(top, a).unwrap();
        reg.add_requirement(top, b).unwrap();

        let res = evaluate(&reg);
        assert!(res[a.index()]);
        assert!(!res[top.index()]);

        reg.add_requirement(b, init).unwrap();
        assert!(evaluate(&reg)[top.index()]);
    }

    #[test]
    fn test_unsupported_cycle_stays_false() {
        // x = OR(y), y = AND(x): mutually supporting but never grounded.
        let mut reg = Registry::new();
        let x = reg.add_node(NodeKind::Or, 0);
        let y = reg.add_node(NodeKind::And, 0);
        reg.add_requirement(x, y).unwrap();
        reg.add_requirement(y, x).unwrap();

        let res = evaluate(&reg);
        assert!(!res[x.index()]);
        assert!(!res[y.index()]);
    }
}
