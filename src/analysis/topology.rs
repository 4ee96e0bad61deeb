use crate::graph::{DependencyGraph, NodeId, NodeKind};
use petgraph::algo::tarjan_scc;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::fmt;

/// Node weight of the exported graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLabel {
    pub id: NodeId,
    pub kind: NodeKind,
    pub direct_cost: u64,
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            NodeKind::And => "AND",
            NodeKind::Or => "OR",
        };
        if self.direct_cost > 0 {
            write!(f, "{} {} [{}]", self.id, kind, self.direct_cost)
        } else {
            write!(f, "{} {}", self.id, kind)
        }
    }
}

/// Copies the graph into a petgraph `DiGraph` with edges pointing from a
/// dependency to its dependent (the direction truth flows).
///
/// Node indices equal the dense `NodeId`s. Edges carry no data.
pub fn export(graph: &DependencyGraph) -> DiGraph<NodeLabel, &'static str> {
    let mut out = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    for node in graph.nodes() {
        out.add_node(NodeLabel { id: node.id, kind: node.kind, direct_cost: node.direct_cost });
    }
    for node in graph.nodes() {
        for &req in node.requirements {
            out.add_edge(NodeIndex::new(req.index()), NodeIndex::new(node.id.index()), "");
        }
    }
    out
}

/// Groups of nodes that depend on each other cyclically.
///
/// Well-formed relaxed tasks can still produce these (an operator adding one
/// of its own preconditions); valuation treats members that are never
/// supported from outside the cycle as unreachable.
pub fn cyclic_components(graph: &DependencyGraph) -> Vec<Vec<NodeId>> {
    let exported = export(graph);
    let mut components: Vec<Vec<NodeId>> = tarjan_scc(&exported)
        .into_iter()
        .filter(|scc| scc.len() > 1 || exported.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut ids: Vec<NodeId> = scc.into_iter().map(|ix| NodeId::new(ix.index())).collect();
            ids.sort_unstable();
            ids
        })
        .collect();
    components.sort();
    components
}

/// Renders the graph in Graphviz DOT format.
pub fn to_dot(graph: &DependencyGraph) -> String {
    let exported = export(graph);
    format!("{}", Dot::with_config(&exported, &[Config::EdgeNoLabel]))
}
