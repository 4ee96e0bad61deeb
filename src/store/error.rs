//! Structural errors raised by edge operations on the dependency graph.
use super::types::NodeId;
use thiserror::Error;

/// Misuse of the graph API. These always indicate a bug in the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {node} is out of range (graph has {count} nodes)")]
    NodeOutOfRange { node: NodeId, count: usize },
    #[error("Node {dependency} is not a requirement of node {dependent}")]
    MissingRequirement { dependent: NodeId, dependency: NodeId },
}
