use crate::graph::{Cost, DependencyGraph, NodeId, NodeKind};
use std::collections::HashMap;
use std::fmt::Write;

/// Renders the justification of `target` under the last cost valuation as a
/// tree: AND nodes expand every requirement, OR nodes only their achiever.
/// Nodes seen before print as a back-reference to the level they first appeared on.
pub fn format_trace(
    graph: &DependencyGraph,
    target: NodeId,
    label: &dyn Fn(NodeId) -> String,
) -> String {
    let mut tracer = Tracer {
        graph,
        label,
        visited_at_level: HashMap::new(),
        output: String::new(),
    };

    if target.index() < graph.node_count() {
        let _ = writeln!(tracer.output, "RELAXED TRACE for '{}':", label(target));
        let _ = writeln!(tracer.output, "--------------------------------------------------");
        tracer.trace_node(target, 1, "");
    } else {
        let _ = writeln!(tracer.output, "Error: Invalid Node ID {:?}", target);
    }
    tracer.output
}

struct Tracer<'a> {
    graph: &'a DependencyGraph,
    label: &'a dyn Fn(NodeId) -> String,
    visited_at_level: HashMap<NodeId, usize>,
    output: String,
}

impl<'a> Tracer<'a> {
    fn trace_node(&mut self, node_id: NodeId, level: usize, prefix: &str) {
        if let Some(&first_seen) = self.visited_at_level.get(&node_id) {
            let _ = writeln!(self.output, "{}-> (Ref to L{})", prefix, first_seen);
            return;
        }
        self.visited_at_level.insert(node_id, level);

        let graph = self.graph;
        let node = graph.node(node_id);
        let line_header = format!("[L{}] {}{}", level, (self.label)(node_id), format_cost(node.additive_cost));

        match node.kind {
            NodeKind::And => {
                let op = if node.requirements.is_empty() { "TRUE" } else { "AND" };
                if node.direct_cost > 0 {
                    let _ = writeln!(self.output, "{}{} = {} +{}", prefix, line_header, op, node.direct_cost);
                } else {
                    let _ = writeln!(self.output, "{}{} = {}", prefix, line_header, op);
                }
                if node.additive_cost.is_finite() {
                    self.recurse_children(prefix, node.requirements, level);
                }
            }
            NodeKind::Or => match node.achiever {
                Some(achiever) => {
                    let _ = writeln!(self.output, "{}{} = OR via", prefix, line_header);
                    self.recurse_children(prefix, &[achiever], level);
                }
                None => {
                    let _ = writeln!(self.output, "{}{} [UNREACHABLE]", prefix, line_header);
                }
            },
        }
    }

    fn recurse_children(&mut self, prefix: &str, children: &[NodeId], level: usize) {
        let stem = build_child_stem(prefix);
        for (i, &child) in children.iter().enumerate() {
            let connector = if i == children.len() - 1 { "`--" } else { "|--" };
            let full_prefix = format!("{}{}", stem, connector);
            self.trace_node(child, level + 1, &full_prefix);
        }
    }
}

fn format_cost(cost: Cost) -> String {
    format!(" [{}]", cost)
}

fn build_child_stem(current_prefix: &str) -> String {
    current_prefix.replace("`--", "   ").replace("|--", "|  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_follows_achiever_and_marks_shared_nodes() {
        // top = AND(f1, f2); f1 = OR(e); f2 = OR(e, dear); e = AND[2](init); dear = AND[9]()
        let mut g = DependencyGraph::new();
        let init = g.add_node(NodeKind::And, 0);
        let e = g.add_node(NodeKind::And, 2);
        let dear = g.add_node(NodeKind::And, 9);
        let f1 = g.add_node(NodeKind::Or, 0);
        let f2 = g.add_node(NodeKind::Or, 0);
        let top = g.add_node(NodeKind::And, 0);
        g.add_requirement(e, init).unwrap();
        g.add_requirement(f1, e).unwrap();
        g.add_requirement(f2, dear).unwrap();
        g.add_requirement(f2, e).unwrap();
        g.add_requirement(top, f1).unwrap();
        g.add_requirement(top, f2).unwrap();
        g.evaluate_costs();

        let out = format_trace(&g, top, &|id| format!("{}", id));
        assert!(out.starts_with("RELAXED TRACE for 'n5':"), "{}", out);
        assert!(out.contains("[L1] n5 [4] = AND"), "{}", out);
        assert!(out.contains("[L3] n1 [2] = AND +2"), "{}", out);
        assert!(out.contains("[L4] n0 [0] = TRUE"), "{}", out);
        assert!(out.contains("-> (Ref to L3)"), "{}", out);
        assert!(!out.contains("n2"), "{}", out);
    }

    #[test]
    fn test_trace_of_unreachable_or() {
        let mut g = DependencyGraph::new();
        let f = g.add_node(NodeKind::Or, 0);
        g.evaluate_costs();
        let out = format_trace(&g, f, &|_| "q".to_string());
        assert!(out.contains("[L1] q [inf] [UNREACHABLE]"), "{}", out);
    }

    #[test]
    fn test_trace_invalid_target() {
        let g = DependencyGraph::new();
        assert!(format_trace(&g, NodeId(3), &|_| String::new()).contains("Invalid Node ID"));
    }
}
