//! Defines the error types for the task module.
use super::types::PropositionId;
use crate::store::GraphError;
use thiserror::Error;

/// A task or state that references facts the task does not define, or a
/// graph operation that violated its preconditions. All variants are
/// programming errors; unreachability is reported through `Cost`, not here.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Unknown proposition {id} in {context} (task has {count} propositions)")]
    UnknownProposition { id: PropositionId, count: usize, context: String },
    #[error("Proposition {id} stored at position {position}")]
    MisplacedProposition { id: PropositionId, position: usize },
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("Malformed task: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PartialEq for TaskError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                TaskError::UnknownProposition { id: a, count: ac, context: ax },
                TaskError::UnknownProposition { id: b, count: bc, context: bx },
            ) => a == b && ac == bc && ax == bx,
            (
                TaskError::MisplacedProposition { id: a, position: ap },
                TaskError::MisplacedProposition { id: b, position: bp },
            ) => a == b && ap == bp,
            (TaskError::Graph(a), TaskError::Graph(b)) => a == b,
            // serde_json errors carry no structural identity.
            (TaskError::Parse(a), TaskError::Parse(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
