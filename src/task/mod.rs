//! The relaxed planning task and its boundary to the grounding collaborator.
pub use self::error::TaskError;
pub use self::grounding::{FactSetTranslator, FiniteDomainTranslator, StateTranslator};
pub use self::types::{normalize, OperatorId, Proposition, PropositionId, RelaxedOperator, RelaxedTask};

mod error;
mod grounding;
mod types;
