//! The seam to the grounding collaborator that turns search states into fact sets.
use super::types::PropositionId;

/// Translates an external (non-relaxed) search state into the set of
/// propositions true in it.
///
/// Implemented by whoever grounded the task; the heuristic only ever calls
/// `translate`. Returned ids may be unsorted or repeated.
pub trait StateTranslator {
    type State;

    fn translate(&self, state: &Self::State) -> Vec<PropositionId>;
}

/// For callers whose states already are fact lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactSetTranslator;

impl StateTranslator for FactSetTranslator {
    type State = Vec<PropositionId>;

    fn translate(&self, state: &Self::State) -> Vec<PropositionId> {
        state.clone()
    }
}

/// Finite-domain states: one value per variable, mapped through a
/// `(variable, value) -> proposition` table built by the grounder.
#[derive(Debug, Clone, Default)]
pub struct FiniteDomainTranslator {
    /// `table[var][value]` is the proposition for `var = value`.
    table: Vec<Vec<PropositionId>>,
}

impl FiniteDomainTranslator {
    pub fn new(table: Vec<Vec<PropositionId>>) -> Self { Self { table } }

    pub fn variable_count(&self) -> usize { self.table.len() }
}

impl StateTranslator for FiniteDomainTranslator {
    type State = Vec<usize>;

    /// # Panics
    /// If the state's shape does not match the table; the grounder and the
    /// search must agree on variables and domains.
    fn translate(&self, state: &Self::State) -> Vec<PropositionId> {
        assert_eq!(
            state.len(),
            self.table.len(),
            "state has {} variables, translator expects {}",
            state.len(),
            self.table.len()
        );
        state
            .iter()
            .zip(&self.table)
            .enumerate()
            .map(|(var, (&value, domain))| {
                *domain.get(value).unwrap_or_else(|| {
                    panic!("value {} out of domain for variable {} (size {})", value, var, domain.len())
                })
            })
            .collect()
    }
}
