//! The AND/OR dependency graph engine.
pub mod dag;

// Re-export key types for convenient access
pub use dag::{DependencyGraph, NodeView};
pub use crate::store::{Cost, GraphError, NodeId, NodeKind};
