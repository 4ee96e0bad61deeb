//! task_graph.rs
//! Builds one dependency graph per relaxed task and answers the heuristic
//! queries against it. Between search states only the edges from fact nodes
//! to the initial-truth node change.

use super::relaxed_plan::{self, RelaxedPlan};
use crate::analysis::telemetry::GraphStats;
use crate::display::format_trace;
use crate::graph::{Cost, DependencyGraph, NodeId, NodeKind};
use crate::task::{normalize, OperatorId, PropositionId, RelaxedTask, StateTranslator, TaskError};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct RelaxedTaskGraph<T> {
    task: RelaxedTask,
    translator: T,
    graph: DependencyGraph,
    /// `fact_nodes[p]` is the OR node of proposition `p`.
    fact_nodes: Vec<NodeId>,
    /// `effect_nodes[o]` is the effect node of operator `o`. Ascending, since
    /// operators are added in order.
    effect_nodes: Vec<NodeId>,
    initial_node: NodeId,
    goal_node: NodeId,
}

impl<T: StateTranslator> RelaxedTaskGraph<T> {
    /// Builds the AND/OR graph of `task`:
    /// - one OR fact node per proposition,
    /// - one requirement-free AND node standing for "initially true",
    /// - one AND goal node over the goal facts,
    /// - per operator, an AND node over its preconditions and an AND effect
    ///   node carrying its cost, required by every fact it adds.
    pub fn new(mut task: RelaxedTask, translator: T) -> Result<Self, TaskError> {
        task.normalize_fact_sets();
        task.validate()?;

        let mut graph = DependencyGraph::new();

        let fact_nodes: Vec<NodeId> = task
            .propositions
            .iter()
            .map(|_| graph.add_node(NodeKind::Or, 0))
            .collect();

        let initial_node = graph.add_node(NodeKind::And, 0);
        for &p in &task.initial_state {
            graph.add_requirement(fact_nodes[p.index()], initial_node)?;
        }

        let goal_node = graph.add_node(NodeKind::And, 0);
        for &p in &task.goal {
            graph.add_requirement(goal_node, fact_nodes[p.index()])?;
        }

        let mut effect_nodes = Vec::with_capacity(task.operators.len());
        for op in &task.operators {
            let precondition_node = graph.add_node(NodeKind::And, 0);
            for &p in &op.preconditions {
                graph.add_requirement(precondition_node, fact_nodes[p.index()])?;
            }

            let effect_node = graph.add_node(NodeKind::And, op.cost);
            graph.add_requirement(effect_node, precondition_node)?;
            for &p in &op.effects {
                graph.add_requirement(fact_nodes[p.index()], effect_node)?;
            }
            effect_nodes.push(effect_node);
        }

        let stats = GraphStats::analyze(&graph);
        debug!(
            propositions = task.proposition_count(),
            operators = task.operators.len(),
            nodes = stats.nodes,
            edges = stats.edges,
            "built relaxed task graph"
        );

        Ok(Self { task, translator, graph, fact_nodes, effect_nodes, initial_node, goal_node })
    }

    /// Replaces the initial facts with the translation of `state`.
    ///
    /// Touches only the old and new initial facts; the rest of the graph is reused.
    pub fn update_initial_state(&mut self, state: &T::State) -> Result<(), TaskError> {
        let facts = self.translator.translate(state);
        self.set_initial_facts(facts)
    }
}

impl<T> RelaxedTaskGraph<T> {
    /// Same as `update_initial_state` for callers that already hold the fact set.
    /// The new set is validated before the graph is touched.
    pub fn set_initial_facts(&mut self, facts: impl IntoIterator<Item = PropositionId>) -> Result<(), TaskError> {
        let facts = normalize(facts);
        self.task.check_facts(&facts, "initial state")?;

        for &p in &self.task.initial_state {
            self.graph.remove_requirement(self.fact_nodes[p.index()], self.initial_node)?;
        }
        for &p in &facts {
            self.graph.add_requirement(self.fact_nodes[p.index()], self.initial_node)?;
        }

        trace!(removed = self.task.initial_state.len(), added = facts.len(), "updated initial state");
        self.task.initial_state = facts;
        Ok(())
    }

    /// Whether the goal is reachable in the relaxation at all.
    pub fn is_goal_reachable(&mut self) -> bool {
        self.graph.evaluate_reachability();
        self.graph.forced_true(self.goal_node)
    }

    /// h^add: preconditions are treated as independently achievable.
    pub fn additive_goal_cost(&mut self) -> Cost {
        self.graph.evaluate_costs();
        self.graph.additive_cost(self.goal_node)
    }

    /// h^max: admissible variant with `max` instead of `sum` at AND nodes.
    pub fn max_goal_cost(&mut self) -> Cost {
        self.graph.evaluate_max_costs();
        self.graph.max_cost(self.goal_node)
    }

    /// h^FF: total cost of the distinct operators in the relaxed plan extracted
    /// along the h^add achievers.
    pub fn ff_goal_cost(&mut self) -> Cost {
        self.graph.evaluate_costs();
        match relaxed_plan::justification(&self.graph, self.goal_node) {
            Some(justification) => Cost::Finite(justification.cost),
            None => Cost::Unreachable,
        }
    }

    /// The operators behind `ff_goal_cost`, or `None` if the goal is unreachable.
    pub fn relaxed_plan(&mut self) -> Option<RelaxedPlan> {
        self.graph.evaluate_costs();
        let justification = relaxed_plan::justification(&self.graph, self.goal_node)?;
        let operators = justification
            .nodes
            .iter()
            .filter_map(|node| self.operator_of(*node))
            .collect();
        Some(RelaxedPlan::new(operators, justification.cost))
    }

    /// Relaxed plan operators applicable in the current initial state.
    pub fn preferred_operators(&mut self) -> Vec<OperatorId> {
        let Some(plan) = self.relaxed_plan() else {
            return Vec::new();
        };
        let initial = &self.task.initial_state;
        plan.operators
            .into_iter()
            .filter(|op| {
                self.task.operators[op.index()]
                    .preconditions
                    .iter()
                    .all(|p| initial.binary_search(p).is_ok())
            })
            .collect()
    }

    /// Renders the relaxed plan justification of the goal as a tree.
    pub fn explain(&mut self) -> String {
        self.graph.evaluate_costs();
        let label = |node: NodeId| self.node_label(node);
        format_trace(&self.graph, self.goal_node, &label)
    }

    /// Names a node after the proposition or operator it stands for.
    pub fn node_label(&self, node: NodeId) -> String {
        if node == self.initial_node {
            return "<initial>".to_string();
        }
        if node == self.goal_node {
            return "<goal>".to_string();
        }
        if let Some(op) = self.operator_of(node) {
            return self.task.operators[op.index()].name.clone();
        }
        // Precondition nodes sit directly before their effect node.
        if let Some(op) = self.operator_of(NodeId(node.0 + 1)) {
            return format!("pre({})", self.task.operators[op.index()].name);
        }
        // Fact nodes are allocated first, so their ids are the proposition ids.
        match self.task.propositions.get(node.index()) {
            Some(prop) if node.index() < self.fact_nodes.len() => prop.name.clone(),
            _ => node.to_string(),
        }
    }

    /// The operator whose effect node is `node`, if any.
    pub fn operator_of(&self, node: NodeId) -> Option<OperatorId> {
        self.effect_nodes.binary_search(&node).ok().map(OperatorId::new)
    }

    // --- Accessors ---
    pub fn task(&self) -> &RelaxedTask { &self.task }
    pub fn translator(&self) -> &T { &self.translator }
    pub fn graph(&self) -> &DependencyGraph { &self.graph }
    pub fn initial_node(&self) -> NodeId { self.initial_node }
    pub fn goal_node(&self) -> NodeId { self.goal_node }
    pub fn effect_node(&self, op: OperatorId) -> NodeId { self.effect_nodes[op.index()] }

    /// # Panics
    /// If `p` is not a proposition of the task.
    pub fn fact_node(&self, p: PropositionId) -> NodeId { self.fact_nodes[p.index()] }
}
