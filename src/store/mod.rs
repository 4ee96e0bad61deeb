//! Node/edge storage for the AND/OR dependency graph.
pub mod error;
pub mod registry;
pub mod types;

pub use error::GraphError;
pub use registry::Registry;
pub use types::{Cost, NodeId, NodeKind};
