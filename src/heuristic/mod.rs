//! Delete-relaxation heuristics over the task's dependency graph.
pub mod evaluator;
pub mod relaxed_plan;
pub mod task_graph;

pub use evaluator::{HeuristicValue, RelaxationHeuristic};
pub use relaxed_plan::RelaxedPlan;
pub use task_graph::RelaxedTaskGraph;
