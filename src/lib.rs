//! Delete-relaxation heuristics for state-space planning.
//!
//! A relaxed task (operators without delete effects) is compiled once into an
//! AND/OR dependency graph. Per search state only the initial facts change,
//! after which the graph answers three queries: relaxed reachability of the
//! goal, the additive cost estimate (h^add) and the relaxed-plan cost (h^FF).

pub mod analysis;
pub mod compute;
pub mod config;
pub mod display;
pub mod graph;
pub mod heuristic;
pub mod store;
pub mod task;

pub use config::{HeuristicConfig, HeuristicKind};
pub use graph::{Cost, DependencyGraph, GraphError, NodeId, NodeKind, NodeView};
pub use heuristic::{HeuristicValue, RelaxationHeuristic, RelaxedPlan, RelaxedTaskGraph};
pub use task::{
    FactSetTranslator, FiniteDomainTranslator, OperatorId, Proposition, PropositionId, RelaxedOperator, RelaxedTask,
    StateTranslator, TaskError,
};
