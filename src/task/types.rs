//! Defines the relaxed planning task: propositions, operators without delete
//! effects, the (mutable) initial fact set and the goal.

use super::error::TaskError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier of a grounded proposition; doubles as its index in
/// `RelaxedTask::propositions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropositionId(pub u32);

impl PropositionId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

impl fmt::Display for PropositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Index of an operator in `RelaxedTask::operators`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorId(pub u32);

impl OperatorId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposition {
    pub id: PropositionId,
    /// Human-readable fact name (e.g. "at(truck, depot)"). Informative only.
    #[serde(default)]
    pub name: String,
}

/// An operator with its delete effects dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaxedOperator {
    #[serde(default)]
    pub name: String,
    pub cost: u64,
    pub preconditions: Vec<PropositionId>,
    pub effects: Vec<PropositionId>,
}

impl RelaxedOperator {
    pub fn new(
        name: impl Into<String>,
        cost: u64,
        preconditions: impl IntoIterator<Item = PropositionId>,
        effects: impl IntoIterator<Item = PropositionId>,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            preconditions: normalize(preconditions),
            effects: normalize(effects),
        }
    }
}

/// Sorts and deduplicates a fact list so it behaves as a set.
pub fn normalize(ids: impl IntoIterator<Item = PropositionId>) -> Vec<PropositionId> {
    let mut v: Vec<PropositionId> = ids.into_iter().collect();
    v.sort_unstable();
    v.dedup();
    v
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaxedTask {
    pub propositions: Vec<Proposition>,
    pub operators: Vec<RelaxedOperator>,
    /// The only field that changes after construction.
    pub initial_state: Vec<PropositionId>,
    pub goal: Vec<PropositionId>,
}

impl RelaxedTask {
    /// Builds a task over `names.len()` propositions with ids `0..names.len()`.
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        operators: Vec<RelaxedOperator>,
        initial_state: impl IntoIterator<Item = PropositionId>,
        goal: impl IntoIterator<Item = PropositionId>,
    ) -> Self {
        let propositions = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Proposition { id: PropositionId::new(i), name: name.into() })
            .collect();
        Self {
            propositions,
            operators,
            initial_state: normalize(initial_state),
            goal: normalize(goal),
        }
    }

    /// Parses a task from JSON and normalizes its fact sets.
    pub fn from_json(json: &str) -> Result<Self, TaskError> {
        let mut task: RelaxedTask = serde_json::from_str(json)?;
        task.normalize_fact_sets();
        Ok(task)
    }

    /// Sorts and deduplicates every fact list. The public fields and a plain
    /// deserialize can bypass `new`, so graph construction calls this too.
    pub fn normalize_fact_sets(&mut self) {
        self.initial_state = normalize(std::mem::take(&mut self.initial_state));
        self.goal = normalize(std::mem::take(&mut self.goal));
        for op in &mut self.operators {
            op.preconditions = normalize(std::mem::take(&mut op.preconditions));
            op.effects = normalize(std::mem::take(&mut op.effects));
        }
    }

    pub fn proposition_count(&self) -> usize { self.propositions.len() }

    pub fn proposition_name(&self, id: PropositionId) -> Option<&str> {
        self.propositions.get(id.index()).map(|p| p.name.as_str())
    }

    /// Fails on the first id outside `0..proposition_count()`.
    pub fn check_facts(&self, facts: &[PropositionId], context: &str) -> Result<(), TaskError> {
        let count = self.proposition_count();
        match facts.iter().find(|id| id.index() >= count) {
            Some(&id) => Err(TaskError::UnknownProposition { id, count, context: context.to_string() }),
            None => Ok(()),
        }
    }

    /// Checks that every id referenced anywhere in the task is known and that
    /// proposition ids match their positions.
    pub fn validate(&self) -> Result<(), TaskError> {
        for (i, p) in self.propositions.iter().enumerate() {
            if p.id.index() != i {
                return Err(TaskError::MisplacedProposition { id: p.id, position: i });
            }
        }
        self.check_facts(&self.initial_state, "initial state")?;
        self.check_facts(&self.goal, "goal")?;
        for op in &self.operators {
            self.check_facts(&op.preconditions, &format!("preconditions of '{}'", op.name))?;
            self.check_facts(&op.effects, &format!("effects of '{}'", op.name))?;
        }
        Ok(())
    }
}
