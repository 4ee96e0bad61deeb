//! The search-facing heuristic: one configured estimate per state.
use super::task_graph::RelaxedTaskGraph;
use crate::config::{HeuristicConfig, HeuristicKind};
use crate::graph::Cost;
use crate::task::{OperatorId, StateTranslator, TaskError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A heuristic estimate in the search's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeuristicValue {
    Estimate(u64),
    /// The goal is unreachable even in the relaxation; the state can be pruned.
    DeadEnd,
}

impl HeuristicValue {
    pub fn is_dead_end(&self) -> bool { matches!(self, HeuristicValue::DeadEnd) }
}

impl From<Cost> for HeuristicValue {
    fn from(cost: Cost) -> Self {
        match cost {
            Cost::Finite(v) => HeuristicValue::Estimate(v),
            Cost::Unreachable => HeuristicValue::DeadEnd,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelaxationHeuristic<T> {
    graph: RelaxedTaskGraph<T>,
    config: HeuristicConfig,
}

impl<T: StateTranslator> RelaxationHeuristic<T> {
    pub fn new(graph: RelaxedTaskGraph<T>, config: HeuristicConfig) -> Self {
        Self { graph, config }
    }

    /// Installs `state` as the initial state and computes the configured estimate.
    pub fn evaluate(&mut self, state: &T::State) -> Result<HeuristicValue, TaskError> {
        self.graph.update_initial_state(state)?;
        Ok(self.estimate())
    }

    /// The relaxed plan operators applicable in `state` (FF's helpful actions).
    pub fn preferred_operators(&mut self, state: &T::State) -> Result<Vec<OperatorId>, TaskError> {
        self.graph.update_initial_state(state)?;
        Ok(self.graph.preferred_operators())
    }

    /// Evaluates many states in parallel. Each rayon worker gets its own copy
    /// of the graph; `self` is never mutated.
    pub fn evaluate_batch(&self, states: &[T::State]) -> Result<Vec<HeuristicValue>, TaskError>
    where
        T: Clone + Send + Sync,
        T::State: Sync,
    {
        states
            .par_iter()
            .map_init(|| self.clone(), |worker, state| worker.evaluate(state))
            .collect()
    }
}

impl<T> RelaxationHeuristic<T> {
    fn estimate(&mut self) -> HeuristicValue {
        let value = match self.config.kind {
            HeuristicKind::Reachability => {
                if self.graph.is_goal_reachable() {
                    HeuristicValue::Estimate(0)
                } else {
                    HeuristicValue::DeadEnd
                }
            }
            HeuristicKind::Additive => self.graph.additive_goal_cost().into(),
            HeuristicKind::Max => self.graph.max_goal_cost().into(),
            HeuristicKind::Ff => self.graph.ff_goal_cost().into(),
        };
        if self.config.log_dead_ends && value.is_dead_end() {
            debug!(initial_facts = self.graph.task().initial_state.len(), "dead end");
        }
        value
    }

    pub fn config(&self) -> &HeuristicConfig { &self.config }
    pub fn graph(&self) -> &RelaxedTaskGraph<T> { &self.graph }
}
